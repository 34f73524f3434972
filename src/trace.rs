use serde::Serialize;

use crate::sequence::Trace;

/// Header row of the tabular export. Downstream consumers of previous
/// exports rely on this exact byte sequence.
pub const CSV_HEADER: &str = "i,Xi-1,Operacion,Xi,ri";

/// One display/export row; every field already rendered as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceRow {
    pub index: usize,
    pub previous: String,
    pub operation: String,
    pub next: String,
    pub uniform: String,
}

impl TraceRow {
    /// The five cells in export order.
    pub fn cells(&self) -> [String; 5] {
        [
            self.index.to_string(),
            self.previous.clone(),
            self.operation.clone(),
            self.next.clone(),
            self.uniform.clone(),
        ]
    }

    /// The row as a comma-separated line. The operation field never
    /// contains commas (middle-dot notation), so no quoting is needed.
    pub fn csv_line(&self) -> String {
        self.cells().join(",")
    }
}

/// Render the trace as row records. Both the on-screen table and the file
/// export must read these rows; nothing re-derives cell content elsewhere.
pub fn format_rows(trace: &Trace) -> Vec<TraceRow> {
    trace
        .steps
        .iter()
        .map(|step| TraceRow {
            index: step.index,
            previous: step.previous_state.to_string(),
            operation: step.operation.clone(),
            next: step.next_state.to_string(),
            uniform: step.uniform.clone(),
        })
        .collect()
}

/// Comma-separated export of the full trace: header first, one line per
/// step, lines joined by newlines with no trailing newline.
pub fn to_csv(trace: &Trace) -> String {
    let mut lines = Vec::with_capacity(trace.steps.len() + 1);
    lines.push(CSV_HEADER.to_string());
    lines.extend(format_rows(trace).iter().map(TraceRow::csv_line));
    lines.join("\n")
}
