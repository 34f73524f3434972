use std::fs::File;
use std::path::Path;

use anyhow::Result;
use congen::{Family, GeneratorParameters, PeriodVerdict, TraceRow};
use serde::Serialize;

/// JSON form of one run: the parameters, the period verdict, and the same
/// rows the table and the CSV export carry.
#[derive(Debug, Serialize)]
struct RunReport<'a> {
    family: &'static str,
    multiplier: String,
    increment: String,
    modulus: String,
    seed: String,
    satisfied: bool,
    explanation: &'a str,
    failed_conditions: Vec<&'static str>,
    rows: &'a [TraceRow],
}

/// Write a JSON report of the run.
pub fn write_json_report(
    path: &Path,
    params: &GeneratorParameters,
    verdict: &PeriodVerdict,
    rows: &[TraceRow],
) -> Result<()> {
    let report = RunReport {
        family: match params.family {
            Family::Lcg => "lcg",
            Family::Mcg => "mcg",
        },
        multiplier: params.multiplier.to_string(),
        increment: params.increment.to_string(),
        modulus: params.modulus.to_string(),
        seed: params.seed.to_string(),
        satisfied: verdict.satisfied,
        explanation: &verdict.explanation,
        failed_conditions: verdict.failed.iter().map(|c| c.name()).collect(),
        rows,
    };
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &report)?;
    Ok(())
}
