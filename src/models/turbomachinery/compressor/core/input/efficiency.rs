use uom::si::f64::Ratio;

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};

/// Compressor efficiencies.
///
/// Both efficiencies must be strictly positive. Values above one are
/// accepted; off-design data and alternative efficiency definitions can
/// legitimately exceed unity, so the constructor does not cap them.
#[derive(Debug, Clone, Copy)]
pub struct Efficiencies {
    isentropic: Constrained<Ratio, StrictlyPositive>,
    volumetric: Option<Constrained<Ratio, StrictlyPositive>>,
}

impl Efficiencies {
    /// Creates efficiencies for a machine with a volumetric efficiency.
    ///
    /// # Errors
    ///
    /// Returns a constraint error if either value is not strictly positive.
    pub fn new(isentropic: Ratio, volumetric: Ratio) -> ConstraintResult<Self> {
        Ok(Self {
            isentropic: Constrained::new(isentropic)?,
            volumetric: Some(Constrained::new(volumetric)?),
        })
    }

    /// Creates efficiencies for a machine without a volumetric efficiency.
    ///
    /// # Errors
    ///
    /// Returns a constraint error if the value is not strictly positive.
    pub fn isentropic_only(isentropic: Ratio) -> ConstraintResult<Self> {
        Ok(Self {
            isentropic: Constrained::new(isentropic)?,
            volumetric: None,
        })
    }

    #[must_use]
    pub fn isentropic(&self) -> Ratio {
        self.isentropic.into_inner()
    }

    #[must_use]
    pub fn volumetric(&self) -> Option<Ratio> {
        self.volumetric.map(Constrained::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use uom::si::ratio::ratio;

    use super::*;

    #[test]
    fn accepts_typical_efficiencies() {
        let eff = Efficiencies::new(Ratio::new::<ratio>(0.75), Ratio::new::<ratio>(0.85)).unwrap();
        assert_eq!(eff.isentropic().get::<ratio>(), 0.75);
        assert_eq!(eff.volumetric().unwrap().get::<ratio>(), 0.85);
    }

    #[test]
    fn accepts_efficiencies_above_one() {
        let eff = Efficiencies::isentropic_only(Ratio::new::<ratio>(1.05)).unwrap();
        assert_eq!(eff.isentropic().get::<ratio>(), 1.05);
        assert!(eff.volumetric().is_none());
    }

    #[test]
    fn rejects_zero_and_negative_efficiencies() {
        assert!(Efficiencies::isentropic_only(Ratio::new::<ratio>(0.0)).is_err());
        assert!(Efficiencies::new(Ratio::new::<ratio>(0.75), Ratio::new::<ratio>(-0.1)).is_err());
    }
}
