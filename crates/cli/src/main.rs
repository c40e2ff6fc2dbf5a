//! `kantrowitz`: sweeps the Kantrowitz limit of a pod across tube radii and
//! pod Mach numbers and prints the flows.

mod report;

use std::{io, process::ExitCode};

use clap::{Parser, ValueEnum};
use kantrowitz_components::tube::{
    AmbientConditions, ChokeError, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE, Geometry,
    TubeLimitFlow, TubeLimitInput,
    sweep::{pod_mach_sweep, reference_pod_machs},
};
use kantrowitz_solvers::equation::secant;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};
use uom::si::{
    f64::{Length, Pressure, ThermodynamicTemperature},
    length::centimeter,
    pressure::pascal,
    thermodynamic_temperature::kelvin,
};

use report::TubeSweep;

/// Kantrowitz limit of a pod traveling through a near-vacuum tube
#[derive(Debug, Parser)]
#[command(name = "kantrowitz")]
#[command(version)]
#[command(about = "Sweep the Kantrowitz (choked bypass) limit of a pod in a tube")]
struct Cli {
    /// Tube radii to sweep, in centimeters
    #[arg(long = "tube-radius-cm", value_delimiter = ',', default_values_t = [100.0, 150.0, 200.0])]
    tube_radii_cm: Vec<f64>,

    /// Pod inlet radius, in centimeters
    #[arg(long, default_value_t = 73.7)]
    inlet_radius_cm: f64,

    /// Pod Mach numbers to sweep [default: 0.1, 0.2, ..., 1.0]
    #[arg(long = "pod-mach", value_delimiter = ',')]
    pod_machs: Option<Vec<f64>>,

    /// Mach number of the bypass flow
    #[arg(long, default_value_t = 0.95)]
    bypass_mach: f64,

    /// Static pressure of the tube air, in pascals
    #[arg(long, default_value_t = 99.0)]
    pressure_pa: f64,

    /// Static temperature of the tube air, in kelvin
    #[arg(long, default_value_t = 292.1)]
    temperature_k: f64,

    /// Solver tolerance on both the residual and the Mach step
    #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: f64,

    /// Iteration budget of the limit Mach solve
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iters: usize,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Csv,
    Json,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("tube radius {radius_cm} cm: {source}")]
    Tube {
        radius_cm: f64,
        #[source]
        source: ChokeError,
    },

    #[error("invalid solver settings: {0}")]
    Solver(#[from] secant::ConfigError),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let solver = secant::Config::with_tolerance(cli.max_iters, cli.tolerance)?;
    let model = TubeLimitFlow::air().with_solver(solver);

    let ambient = AmbientConditions::new(
        Pressure::new::<pascal>(cli.pressure_pa),
        ThermodynamicTemperature::new::<kelvin>(cli.temperature_k),
    );
    let pod_machs = cli.pod_machs.clone().unwrap_or_else(reference_pod_machs);

    let sweeps = cli
        .tube_radii_cm
        .iter()
        .map(|&radius_cm| {
            info!(radius_cm, points = pod_machs.len(), "sweeping tube");
            sweep_tube(&model, cli, ambient, radius_cm, &pod_machs)
                .map_err(|source| CliError::Tube { radius_cm, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut out = io::stdout().lock();
    match cli.format {
        Format::Table => report::write_table(&mut out, &sweeps)?,
        Format::Csv => report::write_csv(&mut out, &sweeps)?,
        Format::Json => report::write_json(&mut out, &sweeps)?,
    }

    Ok(())
}

fn sweep_tube(
    model: &TubeLimitFlow,
    cli: &Cli,
    ambient: AmbientConditions,
    radius_cm: f64,
    pod_machs: &[f64],
) -> Result<TubeSweep, ChokeError> {
    let geometry = Geometry::new(
        Length::new::<centimeter>(radius_cm),
        Length::new::<centimeter>(cli.inlet_radius_cm),
    )?;

    let base = TubeLimitInput {
        geometry,
        ambient,
        pod_mach: 1.0,
        bypass_mach: cli.bypass_mach,
    };

    Ok(TubeSweep {
        tube_radius_cm: radius_cm,
        inlet_radius_cm: cli.inlet_radius_cm,
        points: pod_mach_sweep(model, &base, pod_machs)?,
    })
}
