use super::input::FlowSpec;

/// Marker trait distinguishing compressor machine families.
///
/// The solve pipeline is identical across families; what differs is which
/// flow specifications make sense and whether a volumetric efficiency
/// participates in the mass-flow calculation. Implementations encode those
/// rules so that a mismatched configuration is rejected up front.
pub trait Machine {
    /// Human-readable family name used in validation messages.
    const NAME: &'static str;

    /// Whether theoretical volume flow is derated by a volumetric
    /// efficiency before mass flow is computed.
    const USES_VOLUMETRIC_EFFICIENCY: bool;

    /// Whether this family accepts the given flow specification.
    fn accepts(flow: &FlowSpec) -> bool;
}

/// Positive-displacement machines (screw, lobe, piston).
///
/// Flow is specified geometrically or as a theoretical volume rate, and a
/// volumetric efficiency converts theoretical to actual ingested flow.
#[derive(Debug, Clone, Copy)]
pub struct PositiveDisplacement;

impl Machine for PositiveDisplacement {
    const NAME: &'static str = "positive-displacement";
    const USES_VOLUMETRIC_EFFICIENCY: bool = true;

    fn accepts(flow: &FlowSpec) -> bool {
        matches!(flow, FlowSpec::Rotational { .. } | FlowSpec::Volumetric { .. })
    }
}

/// Turbo machines (centrifugal, axial).
///
/// Flow is specified directly as a mass rate; there is no theoretical
/// displacement and no volumetric efficiency.
#[derive(Debug, Clone, Copy)]
pub struct Turbo;

impl Machine for Turbo {
    const NAME: &'static str = "turbo";
    const USES_VOLUMETRIC_EFFICIENCY: bool = false;

    fn accepts(flow: &FlowSpec) -> bool {
        matches!(flow, FlowSpec::Mass { .. })
    }
}
