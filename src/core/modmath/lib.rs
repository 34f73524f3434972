mod modular;
mod rounding;

pub use modular::*;
pub use rounding::*;
