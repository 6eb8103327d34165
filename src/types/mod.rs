//! Type definitions for car-deals

mod deal;
mod error;

pub use deal::*;
pub use error::*;
