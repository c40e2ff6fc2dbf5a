pub mod ideal_gas;
