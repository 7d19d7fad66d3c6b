//! Core types for temperature conversion.

mod proptests;
mod reading;
mod unit;

pub use reading::{Conversion, Reading};
pub use unit::Unit;
