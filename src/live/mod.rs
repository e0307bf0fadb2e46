pub mod outcome;
pub use outcome::*;

pub mod session;
pub use session::*;
