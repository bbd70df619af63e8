//! Public compressor models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules based on an
//! opinionated taxonomy. Today there is a single domain,
//! [`turbomachinery`].
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core`
//! submodule where the actual computation and domain logic lives. The model
//! module re-exports the stable public surface; everything else in `core` is
//! an implementation detail.

pub mod turbomachinery;
