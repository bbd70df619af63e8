//! Thermodynamic property access for compressor models.

mod error;

pub mod backend;
pub mod fluid;
pub mod model;

pub use error::PropertyError;
