use anyhow::{Context, Result};
use congen::{check, format_rows, generate, normalize, to_csv, TraceRow, CSV_HEADER};

use crate::config::RunSpec;
use crate::file_io;
use crate::report;

/// One full run: normalize, check, generate, render, then write any
/// requested exports from the trace this run produced.
pub fn run(spec: RunSpec) -> Result<()> {
    let params = normalize(spec.family, &spec.raw)?;
    let verdict = check(&params);

    println!(
        "\na = {}, m = 2^{} = {}, X0 = {}",
        params.multiplier, spec.raw.precision, params.modulus, params.seed
    );
    if verdict.satisfied {
        println!("Period check: {}", verdict.explanation);
    } else {
        println!("Period check FAILED: {}", verdict.explanation);
    }

    let trace = generate(&params, spec.steps, spec.decimals)?;
    let rows = format_rows(&trace);

    println!();
    for line in render_table(&rows) {
        println!("{}", line);
    }

    if let Some(path) = &spec.csv {
        file_io::write_text(path, &to_csv(&trace))
            .with_context(|| format!("cannot write csv {}", path.display()))?;
        println!("\nTrace written to {}", path.display());
    }
    if let Some(path) = &spec.json {
        report::write_json_report(path, &params, &verdict, &rows)
            .with_context(|| format!("cannot write report {}", path.display()))?;
        println!("Report written to {}", path.display());
    }

    Ok(())
}

/// Align the rows for the console. Cells are exactly the strings the CSV
/// export carries; only the padding between them differs.
fn render_table(rows: &[TraceRow]) -> Vec<String> {
    let mut table: Vec<Vec<String>> = vec![CSV_HEADER.split(',').map(String::from).collect()];
    table.extend(rows.iter().map(|row| row.cells().to_vec()));

    let mut widths = [0usize; 5];
    for row in &table {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.len());
        }
    }

    table
        .iter()
        .map(|row| {
            format!(
                "{:>w0$}  {:>w1$}  {:<w2$}  {:>w3$}  {:>w4$}",
                row[0],
                row[1],
                row[2],
                row[3],
                row[4],
                w0 = widths[0],
                w1 = widths[1],
                w2 = widths[2],
                w3 = widths[3],
                w4 = widths[4],
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use congen::{Family, RawInputs};
    use num_bigint::BigInt;

    fn reference_rows() -> Vec<TraceRow> {
        let raw = RawInputs {
            seed: BigInt::from(7),
            k: BigInt::from(0),
            increment: Some(BigInt::from(5)),
            precision: 4,
        };
        let params = normalize(Family::Lcg, &raw).unwrap();
        format_rows(&generate(&params, 3, 4).unwrap())
    }

    #[test]
    fn test_table_header_and_row_count() {
        let rows = reference_rows();
        let lines = render_table(&rows);
        assert_eq!(lines.len(), rows.len() + 1);
        assert!(lines[0].contains("Operacion"));
        assert!(lines[0].contains("Xi-1"));
    }

    #[test]
    fn test_table_cells_are_the_csv_cells() {
        let rows = reference_rows();
        let lines = render_table(&rows);
        for (line, row) in lines.iter().skip(1).zip(&rows) {
            for cell in row.cells() {
                assert!(line.contains(&cell), "missing {:?} in {:?}", cell, line);
            }
        }
    }
}
