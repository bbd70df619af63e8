//! Thermodynamic property backends implemented in this crate.

pub mod ideal_steam;

pub use ideal_steam::IdealSteam;
