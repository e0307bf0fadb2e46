pub mod row;
pub use row::*;

pub mod table;
pub use table::*;
