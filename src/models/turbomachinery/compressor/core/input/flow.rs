use uom::si::{
    f64::{Frequency, MassRate, Volume, VolumeRate},
    frequency::hertz,
};

use crate::support::constraint::{Constraint, StrictlyPositive};

use super::super::error::SolveError;

/// How the gas flow through the machine is specified.
///
/// Each variant carries dimensioned quantities, so unit conversion happens
/// at construction and a flow in unfamiliar units cannot reach the solver.
#[derive(Debug, Clone, Copy)]
pub enum FlowSpec {
    /// Shaft speed and swept volume per revolution.
    Rotational { speed_rpm: f64, displacement: Volume },
    /// Theoretical volume flow at suction conditions.
    Volumetric { flow: VolumeRate },
    /// Gas mass flow.
    Mass { flow: MassRate },
}

/// A flow specification normalized for the solve pipeline.
#[derive(Debug, Clone, Copy)]
pub enum GasFlow {
    /// Theoretical suction volume flow; still subject to volumetric
    /// efficiency and suction density.
    Theoretical(VolumeRate),
    /// Mass flow, usable directly.
    Mass(MassRate),
}

impl FlowSpec {
    /// Normalizes this specification into a [`GasFlow`].
    ///
    /// Rotational input converts as swept volume times revolutions per
    /// second. All numeric inputs must be finite and strictly positive.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::InvalidInput`] if any flow quantity is zero,
    /// negative, or not a number.
    pub fn normalize(&self) -> Result<GasFlow, SolveError> {
        match *self {
            Self::Rotational {
                speed_rpm,
                displacement,
            } => {
                require_positive(speed_rpm, "shaft speed")?;
                require_positive(displacement.value, "displacement")?;
                let rev_rate = Frequency::new::<hertz>(speed_rpm / 60.0);
                Ok(GasFlow::Theoretical(displacement * rev_rate))
            }
            Self::Volumetric { flow } => {
                require_positive(flow.value, "volume flow")?;
                Ok(GasFlow::Theoretical(flow))
            }
            Self::Mass { flow } => {
                require_positive(flow.value, "mass flow")?;
                Ok(GasFlow::Mass(flow))
            }
        }
    }

    /// Variant name for validation messages.
    pub(crate) fn describe(&self) -> &'static str {
        match self {
            Self::Rotational { .. } => "rotational",
            Self::Volumetric { .. } => "volumetric",
            Self::Mass { .. } => "mass",
        }
    }
}

fn require_positive(value: f64, field: &'static str) -> Result<(), SolveError> {
    StrictlyPositive::check(&value)
        .map_err(|err| SolveError::input(format!("{field} must be strictly positive ({err})")))
}
