use std::io::{self, Write};

use kantrowitz_components::tube::sweep::SweepPoint;
use serde::Serialize;
use uom::si::{mass_rate::kilogram_per_second, velocity::meter_per_second};

/// Sweep results for one tube radius.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct TubeSweep {
    pub(crate) tube_radius_cm: f64,
    pub(crate) inlet_radius_cm: f64,
    pub(crate) points: Vec<SweepPoint>,
}

const COLUMNS: [&str; 7] = [
    "tube_radius_cm",
    "pod_mach",
    "limit_mach",
    "limit_speed_mps",
    "demand_kgps",
    "limit_kgps",
    "excess_kgps",
];

/// Writes one aligned table per tube radius.
pub(crate) fn write_table(out: &mut impl Write, sweeps: &[TubeSweep]) -> io::Result<()> {
    for (index, sweep) in sweeps.iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }

        let Some(first) = sweep.points.first() else {
            writeln!(out, "tube radius {} cm: no pod Mach numbers", sweep.tube_radius_cm)?;
            continue;
        };

        writeln!(
            out,
            "tube radius {} cm, inlet radius {} cm: limit Mach {:.5} ({:.2} m/s)",
            sweep.tube_radius_cm,
            sweep.inlet_radius_cm,
            first.result.limit_mach,
            first.result.limit_speed.get::<meter_per_second>(),
        )?;
        writeln!(
            out,
            "{:>8}  {:>14}  {:>14}  {:>14}",
            "pod M", "demand kg/s", "limit kg/s", "excess kg/s"
        )?;

        for point in &sweep.points {
            let [demand, limit, excess] = flows(point);
            writeln!(
                out,
                "{:>8.2}  {demand:>14.6e}  {limit:>14.6e}  {excess:>14.6e}",
                point.pod_mach
            )?;
        }
    }

    Ok(())
}

/// Writes every sweep point as one CSV row.
pub(crate) fn write_csv(out: &mut impl Write, sweeps: &[TubeSweep]) -> io::Result<()> {
    writeln!(out, "{}", COLUMNS.join(","))?;

    for sweep in sweeps {
        for point in &sweep.points {
            let [demand, limit, excess] = flows(point);
            writeln!(
                out,
                "{},{},{},{},{demand},{limit},{excess}",
                sweep.tube_radius_cm,
                point.pod_mach,
                point.result.limit_mach,
                point.result.limit_speed.get::<meter_per_second>(),
            )?;
        }
    }

    Ok(())
}

/// Writes the sweeps as pretty-printed JSON, quantities in SI base units.
pub(crate) fn write_json(out: &mut impl Write, sweeps: &[TubeSweep]) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(&mut *out, sweeps)?;
    writeln!(out).map_err(serde_json::Error::io)
}

fn flows(point: &SweepPoint) -> [f64; 3] {
    let result = &point.result;
    [
        result.tube_demand_flow.get::<kilogram_per_second>(),
        result.kantrowitz_limit_flow.get::<kilogram_per_second>(),
        result.excess_flow.get::<kilogram_per_second>(),
    ]
}
