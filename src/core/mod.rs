pub mod constants;
pub mod selection;

pub use selection::*;
