use thiserror::Error;
use uom::si::f64::Pressure;

use crate::support::{thermo::PropertyError, units::SpecificEnthalpy};

/// Errors that can occur while solving a compression process.
#[derive(Debug, Error)]
pub enum SolveError {
    /// An input failed validation before any property lookup was issued.
    #[error("invalid input: {context}")]
    InvalidInput { context: String },

    /// The discharge saturation pressure does not exceed the suction
    /// saturation pressure, so the process is not a compression.
    #[error("discharge pressure {discharge:?} must exceed suction pressure {suction:?}")]
    InvalidProcess {
        suction: Pressure,
        discharge: Pressure,
    },

    /// A property lookup failed; the calculation is aborted, not retried.
    #[error("property lookup failed for {context}")]
    PropertyLookup {
        context: String,
        #[source]
        source: PropertyError,
    },

    /// The spray balance has no physical solution because the target
    /// discharge enthalpy does not exceed the injected-water enthalpy.
    #[error("target enthalpy {target:?} does not exceed water enthalpy {water:?}")]
    DegenerateBalance {
        target: SpecificEnthalpy,
        water: SpecificEnthalpy,
    },
}

impl SolveError {
    pub(crate) fn input(context: impl Into<String>) -> Self {
        Self::InvalidInput {
            context: context.into(),
        }
    }

    pub(crate) fn lookup(context: impl Into<String>, source: PropertyError) -> Self {
        Self::PropertyLookup {
            context: context.into(),
            source,
        }
    }
}
