pub mod error;
pub mod params;
pub mod period;
pub mod sequence;
pub mod trace;

pub use error::ParamError;
pub use params::{normalize, Family, GeneratorParameters, RawInputs};
pub use period::{check, Condition, PeriodVerdict};
pub use sequence::{generate, SequenceStep, Trace};
pub use trace::{format_rows, to_csv, TraceRow, CSV_HEADER};
