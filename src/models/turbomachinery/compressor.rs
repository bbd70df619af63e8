//! Vapor compressor performance models.
//!
//! The computational core is in the internal [`core`] module; the types
//! re-exported here are the public solver surface.

pub(crate) mod core;

pub use self::core::{
    ActualDischarge, BoundaryCondition, DryCompression, DryInputs, DryResults, Efficiencies,
    FlowSpec, FlowSummary, GasFlow, Machine, PositiveDisplacement, ProcessBoundary,
    ResolvedBoundary, SolveError, SprayInputs, SprayOutcome, SprayResults, SuctionState, Turbo,
    VaporCompressor,
};
