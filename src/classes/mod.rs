pub mod class;
pub use class::*;

pub mod suitedness;
pub use suitedness::*;
