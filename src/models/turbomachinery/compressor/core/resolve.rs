//! Boundary and state resolution.
//!
//! Turns a [`ProcessBoundary`] into a fully determined saturation pair plus
//! actual temperature, then evaluates the thermodynamic state the solvers
//! consume. Saturated boundaries (zero superheat) are resolved through
//! quality-1 lookups; vapor-property lookups at the saturation temperature
//! itself sit on the edge of the single-phase domain and are never issued.

use uom::ConstZero;
use uom::si::f64::{MassDensity, Pressure, TemperatureInterval, ThermodynamicTemperature};

use crate::support::{
    constraint::{Constraint, NonNegative},
    thermo::backend::PropertyBackend,
    units::{SpecificEnthalpy, SpecificEntropy},
};

use super::{
    error::SolveError,
    input::{BoundaryCondition, ProcessBoundary},
};

/// A process boundary with both saturation members and the actual
/// temperature determined.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedBoundary {
    pub saturation_temperature: ThermodynamicTemperature,
    pub saturation_pressure: Pressure,
    /// Saturation temperature plus superheat.
    pub temperature: ThermodynamicTemperature,
    pub superheat: TemperatureInterval,
}

impl ResolvedBoundary {
    fn is_saturated(&self) -> bool {
        self.superheat == TemperatureInterval::ZERO
    }
}

/// The thermodynamic state of the gas entering the machine.
#[derive(Debug, Clone, Copy)]
pub struct SuctionState {
    pub boundary: ResolvedBoundary,
    pub enthalpy: SpecificEnthalpy,
    pub entropy: SpecificEntropy,
    pub density: MassDensity,
}

/// Resolves a boundary by deriving the missing saturation member.
pub(crate) fn boundary<F, B: PropertyBackend<F>>(
    input: &ProcessBoundary,
    fluid: &F,
    thermo: &B,
    side: &'static str,
) -> Result<ResolvedBoundary, SolveError> {
    NonNegative::check(&input.superheat)
        .map_err(|err| SolveError::input(format!("{side} superheat must not be negative ({err})")))?;

    let (saturation_temperature, saturation_pressure) = match input.condition {
        BoundaryCondition::SaturationTemperature(t_sat) => {
            let p_sat = thermo
                .saturation_pressure(t_sat, fluid)
                .map_err(|err| SolveError::lookup(format!("{side} saturation pressure"), err))?;
            (t_sat, p_sat)
        }
        BoundaryCondition::SaturationPressure(p_sat) => {
            let t_sat = thermo
                .saturation_temperature(p_sat, fluid)
                .map_err(|err| SolveError::lookup(format!("{side} saturation temperature"), err))?;
            (t_sat, p_sat)
        }
    };

    Ok(ResolvedBoundary {
        saturation_temperature,
        saturation_pressure,
        temperature: saturation_temperature + input.superheat,
        superheat: input.superheat,
    })
}

/// Evaluates the suction state at a resolved boundary.
pub(crate) fn suction_state<F, B: PropertyBackend<F>>(
    boundary: &ResolvedBoundary,
    fluid: &F,
    thermo: &B,
) -> Result<SuctionState, SolveError> {
    let (enthalpy, entropy, density) = if boundary.is_saturated() {
        let p = boundary.saturation_pressure;
        (
            thermo
                .saturated_vapor_enthalpy(p, fluid)
                .map_err(|err| SolveError::lookup("suction saturated-vapor enthalpy", err))?,
            thermo
                .saturated_vapor_entropy(p, fluid)
                .map_err(|err| SolveError::lookup("suction saturated-vapor entropy", err))?,
            thermo
                .saturated_vapor_density(p, fluid)
                .map_err(|err| SolveError::lookup("suction saturated-vapor density", err))?,
        )
    } else {
        let t = boundary.temperature;
        let p = boundary.saturation_pressure;
        (
            thermo
                .vapor_enthalpy(t, p, fluid)
                .map_err(|err| SolveError::lookup("suction vapor enthalpy", err))?,
            thermo
                .vapor_entropy(t, p, fluid)
                .map_err(|err| SolveError::lookup("suction vapor entropy", err))?,
            thermo
                .vapor_density(t, p, fluid)
                .map_err(|err| SolveError::lookup("suction vapor density", err))?,
        )
    };

    Ok(SuctionState {
        boundary: *boundary,
        enthalpy,
        entropy,
        density,
    })
}

/// Evaluates the target discharge enthalpy at a resolved boundary.
pub(crate) fn discharge_target<F, B: PropertyBackend<F>>(
    boundary: &ResolvedBoundary,
    fluid: &F,
    thermo: &B,
) -> Result<SpecificEnthalpy, SolveError> {
    if boundary.is_saturated() {
        thermo
            .saturated_vapor_enthalpy(boundary.saturation_pressure, fluid)
            .map_err(|err| SolveError::lookup("discharge saturated-vapor enthalpy", err))
    } else {
        thermo
            .vapor_enthalpy(boundary.temperature, boundary.saturation_pressure, fluid)
            .map_err(|err| SolveError::lookup("discharge vapor enthalpy", err))
    }
}

/// Requires that the process actually compresses.
pub(crate) fn ensure_compression(
    suction: &ResolvedBoundary,
    discharge: &ResolvedBoundary,
) -> Result<(), SolveError> {
    if discharge.saturation_pressure <= suction.saturation_pressure {
        return Err(SolveError::InvalidProcess {
            suction: suction.saturation_pressure,
            discharge: discharge.saturation_pressure,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use uom::si::{
        temperature_interval,
        thermodynamic_temperature::{self, kelvin},
    };

    use crate::support::thermo::{fluid::Water, model::IdealSteam};

    use super::*;

    fn saturation_at(celsius: f64, superheat_kelvin: f64) -> ProcessBoundary {
        ProcessBoundary {
            condition: BoundaryCondition::SaturationTemperature(ThermodynamicTemperature::new::<
                thermodynamic_temperature::degree_celsius,
            >(celsius)),
            superheat: TemperatureInterval::new::<temperature_interval::kelvin>(superheat_kelvin),
        }
    }

    #[test]
    fn temperature_is_saturation_plus_superheat() {
        let resolved = boundary(&saturation_at(40.0, 5.0), &Water, &IdealSteam, "suction").unwrap();
        assert_abs_diff_eq!(
            resolved.temperature.get::<kelvin>(),
            resolved.saturation_temperature.get::<kelvin>() + 5.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn pressure_and_temperature_conditions_resolve_consistently() {
        let thermo = IdealSteam;
        let from_temperature =
            boundary(&saturation_at(110.0, 0.0), &Water, &thermo, "discharge").unwrap();
        let from_pressure = boundary(
            &ProcessBoundary {
                condition: BoundaryCondition::SaturationPressure(
                    from_temperature.saturation_pressure,
                ),
                superheat: TemperatureInterval::ZERO,
            },
            &Water,
            &thermo,
            "discharge",
        )
        .unwrap();
        assert_abs_diff_eq!(
            from_pressure.saturation_temperature.get::<kelvin>(),
            from_temperature.saturation_temperature.get::<kelvin>(),
            epsilon = 1e-6
        );
    }

    #[test]
    fn negative_superheat_is_rejected() {
        let result = boundary(&saturation_at(40.0, -1.0), &Water, &IdealSteam, "suction");
        assert!(matches!(result, Err(SolveError::InvalidInput { .. })));
    }

    #[test]
    fn saturated_state_is_continuous_with_vanishing_superheat() {
        let thermo = IdealSteam;
        let saturated = boundary(&saturation_at(40.0, 0.0), &Water, &thermo, "suction").unwrap();
        let nearly = boundary(&saturation_at(40.0, 1e-6), &Water, &thermo, "suction").unwrap();

        let state_saturated = suction_state(&saturated, &Water, &thermo).unwrap();
        let state_nearly = suction_state(&nearly, &Water, &thermo).unwrap();

        assert_relative_eq!(
            state_saturated.enthalpy.value,
            state_nearly.enthalpy.value,
            max_relative = 1e-6
        );
        assert_relative_eq!(
            state_saturated.density.value,
            state_nearly.density.value,
            max_relative = 1e-6
        );
    }

    #[test]
    fn discharge_must_exceed_suction_pressure() {
        let thermo = IdealSteam;
        let low = boundary(&saturation_at(40.0, 0.0), &Water, &thermo, "suction").unwrap();
        let high = boundary(&saturation_at(110.0, 0.0), &Water, &thermo, "discharge").unwrap();

        assert!(ensure_compression(&low, &high).is_ok());
        assert!(matches!(
            ensure_compression(&high, &low),
            Err(SolveError::InvalidProcess { .. })
        ));
        assert!(matches!(
            ensure_compression(&low, &low),
            Err(SolveError::InvalidProcess { .. })
        ));
    }
}
