//! Canonical fluid identifiers.
//!
//! A fluid type names a substance; each [`PropertyBackend`] implementation
//! defines how that name maps onto its underlying property library.
//!
//! [`PropertyBackend`]: crate::support::thermo::backend::PropertyBackend

mod water;

pub use water::Water;
