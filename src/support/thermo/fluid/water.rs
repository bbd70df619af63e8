/// Canonical identifier for water.
///
/// Water is both a process fluid and the injected desuperheating medium in
/// MVR spray solves. Spray solvers take their water lookups through this
/// marker, so a backend's water mapping is exercised on a single, audited
/// path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Water;

impl Water {
    /// Backend identifier for water lookups.
    ///
    /// The refrigerant designation is the identifier that resolves
    /// unambiguously across property-library builds. The generic aliases
    /// ("Water", "H2O") have resolved to the wrong substance in at least one
    /// deployed backend, so string-keyed implementations must map [`Water`]
    /// to this constant, never to an alias.
    pub const CANONICAL_NAME: &'static str = "R718";
}
