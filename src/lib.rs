//! # Compressor Models
//!
//! Thermodynamic performance models for vapor compressors, covering dry
//! compression and mechanical vapor recompression (MVR) with water-spray
//! desuperheating, across positive-displacement and turbo machine families.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific compressor models.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Property data
//!
//! Fluid properties are consumed through the
//! [`PropertyBackend`](support::thermo::backend::PropertyBackend) trait, a
//! thin contract over any property library that can evaluate one property
//! from two independent state inputs (CoolProp's `PropsSI`, REFPROP flash
//! routines, and similar). The crate ships
//! [`IdealSteam`](support::thermo::model::IdealSteam), a closed-form
//! idealized water/steam backend, so solver logic can be exercised without
//! linking a property library.

pub mod models;
pub mod support;
