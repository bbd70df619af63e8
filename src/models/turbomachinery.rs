//! Turbomachinery models.
//!
//! This module contains models for machines that exchange work with a fluid
//! stream, starting with vapor compressors.

pub mod compressor;
