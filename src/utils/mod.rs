#[macro_use]
mod macros;

pub mod error;
pub mod logger;

pub use error::*;
