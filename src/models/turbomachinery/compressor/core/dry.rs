//! The dry compression stage.
//!
//! Converts normalized flow into gas mass flow, evaluates the isentropic
//! discharge state at the discharge pressure and suction entropy, and
//! derates the isentropic power by the isentropic efficiency to obtain
//! shaft power.

use uom::si::f64::{
    MassRate, Power, Pressure, TemperatureInterval, ThermodynamicTemperature, VolumeRate,
};

use crate::support::{
    thermo::backend::PropertyBackend,
    units::{SpecificEnthalpy, TemperatureDifference},
};

use super::{
    error::SolveError,
    input::{Efficiencies, GasFlow},
    resolve::{ResolvedBoundary, SuctionState},
};

/// Flow quantities reported by a solve.
///
/// The volume-flow members are present only when the flow was specified
/// volumetrically; a mass-specified solve has no theoretical displacement.
#[derive(Debug, Clone, Copy)]
pub struct FlowSummary {
    pub theoretical: Option<VolumeRate>,
    pub actual: Option<VolumeRate>,
    pub gas_mass_flow: MassRate,
}

/// Results of the dry compression stage.
#[derive(Debug, Clone, Copy)]
pub struct DryCompression {
    pub flow: FlowSummary,
    pub isentropic_temperature: ThermodynamicTemperature,
    pub isentropic_enthalpy: SpecificEnthalpy,
    pub isentropic_power: Power,
    pub shaft_power: Power,
}

/// The gas state actually leaving the machine when all shaft work stays in
/// the gas.
#[derive(Debug, Clone, Copy)]
pub struct ActualDischarge {
    pub temperature: ThermodynamicTemperature,
    pub enthalpy: SpecificEnthalpy,
    /// Superheat above the discharge saturation temperature.
    pub superheat: TemperatureInterval,
}

pub(crate) fn solve_dry<F, B: PropertyBackend<F>>(
    suction: &SuctionState,
    discharge_pressure: Pressure,
    gas_flow: GasFlow,
    efficiency: &Efficiencies,
    fluid: &F,
    thermo: &B,
) -> Result<DryCompression, SolveError> {
    let flow = match gas_flow {
        GasFlow::Theoretical(theoretical) => {
            let Some(eta_v) = efficiency.volumetric() else {
                return Err(SolveError::input(
                    "a volumetric efficiency is required to derate theoretical flow",
                ));
            };
            let actual = theoretical * eta_v;
            FlowSummary {
                theoretical: Some(theoretical),
                actual: Some(actual),
                gas_mass_flow: actual * suction.density,
            }
        }
        GasFlow::Mass(gas_mass_flow) => FlowSummary {
            theoretical: None,
            actual: None,
            gas_mass_flow,
        },
    };

    let isentropic_enthalpy = thermo
        .enthalpy_at_entropy(discharge_pressure, suction.entropy, fluid)
        .map_err(|err| SolveError::lookup("isentropic discharge enthalpy", err))?;
    let isentropic_temperature = thermo
        .temperature_at_entropy(discharge_pressure, suction.entropy, fluid)
        .map_err(|err| SolveError::lookup("isentropic discharge temperature", err))?;

    let isentropic_power = flow.gas_mass_flow * (isentropic_enthalpy - suction.enthalpy);
    let shaft_power = isentropic_power / efficiency.isentropic();

    Ok(DryCompression {
        flow,
        isentropic_temperature,
        isentropic_enthalpy,
        isentropic_power,
        shaft_power,
    })
}

/// Evaluates the actual discharge state from an energy balance on the gas:
/// all shaft work ends up as gas enthalpy.
pub(crate) fn actual_discharge<F, B: PropertyBackend<F>>(
    dry: &DryCompression,
    suction_enthalpy: SpecificEnthalpy,
    discharge: &ResolvedBoundary,
    fluid: &F,
    thermo: &B,
) -> Result<ActualDischarge, SolveError> {
    let enthalpy = suction_enthalpy + dry.shaft_power / dry.flow.gas_mass_flow;
    let temperature = thermo
        .temperature_at_enthalpy(discharge.saturation_pressure, enthalpy, fluid)
        .map_err(|err| SolveError::lookup("actual discharge temperature", err))?;
    Ok(ActualDischarge {
        temperature,
        enthalpy,
        superheat: temperature.minus(discharge.saturation_temperature),
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use uom::ConstZero;
    use uom::si::{
        f64::{Ratio, TemperatureInterval, ThermodynamicTemperature, VolumeRate},
        mass_rate::kilogram_per_second,
        ratio::ratio,
        temperature_interval,
        thermodynamic_temperature::degree_celsius,
        volume_rate::cubic_meter_per_second,
    };

    use crate::{
        models::turbomachinery::compressor::core::{
            input::{BoundaryCondition, ProcessBoundary},
            resolve,
        },
        support::thermo::{fluid::Water, model::IdealSteam},
    };

    use super::*;

    fn steam_suction(thermo: &IdealSteam) -> SuctionState {
        let boundary = resolve::boundary(
            &ProcessBoundary {
                condition: BoundaryCondition::SaturationTemperature(
                    ThermodynamicTemperature::new::<degree_celsius>(40.0),
                ),
                superheat: TemperatureInterval::new::<temperature_interval::kelvin>(5.0),
            },
            &Water,
            thermo,
            "suction",
        )
        .unwrap();
        resolve::suction_state(&boundary, &Water, thermo).unwrap()
    }

    fn discharge_boundary(thermo: &IdealSteam, celsius: f64) -> ResolvedBoundary {
        resolve::boundary(
            &ProcessBoundary {
                condition: BoundaryCondition::SaturationTemperature(
                    ThermodynamicTemperature::new::<degree_celsius>(celsius),
                ),
                superheat: TemperatureInterval::new::<temperature_interval::kelvin>(0.0),
            },
            &Water,
            thermo,
            "discharge",
        )
        .unwrap()
    }

    fn discharge_pressure(thermo: &IdealSteam) -> Pressure {
        discharge_boundary(thermo, 110.0).saturation_pressure
    }

    #[test]
    fn shaft_power_is_isentropic_power_over_efficiency() {
        let thermo = IdealSteam;
        let suction = steam_suction(&thermo);
        let efficiency =
            Efficiencies::isentropic_only(Ratio::new::<ratio>(0.75)).unwrap();

        let dry = solve_dry(
            &suction,
            discharge_pressure(&thermo),
            GasFlow::Mass(MassRate::new::<kilogram_per_second>(0.01)),
            &efficiency,
            &Water,
            &thermo,
        )
        .unwrap();

        assert!(dry.isentropic_enthalpy > suction.enthalpy);
        assert_relative_eq!(
            dry.shaft_power.value,
            dry.isentropic_power.value / 0.75,
            max_relative = 1e-12
        );
    }

    #[test]
    fn theoretical_flow_is_derated_by_volumetric_efficiency() {
        let thermo = IdealSteam;
        let suction = steam_suction(&thermo);
        let efficiency =
            Efficiencies::new(Ratio::new::<ratio>(0.75), Ratio::new::<ratio>(0.85)).unwrap();

        let dry = solve_dry(
            &suction,
            discharge_pressure(&thermo),
            GasFlow::Theoretical(VolumeRate::new::<cubic_meter_per_second>(0.025)),
            &efficiency,
            &Water,
            &thermo,
        )
        .unwrap();

        let actual = dry.flow.actual.unwrap();
        assert_relative_eq!(
            actual.get::<cubic_meter_per_second>(),
            0.025 * 0.85,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            dry.flow.gas_mass_flow.value,
            actual.value * suction.density.value,
            max_relative = 1e-12
        );
    }

    #[test]
    fn theoretical_flow_without_volumetric_efficiency_is_rejected() {
        let thermo = IdealSteam;
        let suction = steam_suction(&thermo);
        let efficiency =
            Efficiencies::isentropic_only(Ratio::new::<ratio>(0.75)).unwrap();

        let result = solve_dry(
            &suction,
            discharge_pressure(&thermo),
            GasFlow::Theoretical(VolumeRate::new::<cubic_meter_per_second>(0.025)),
            &efficiency,
            &Water,
            &thermo,
        );
        assert!(matches!(result, Err(SolveError::InvalidInput { .. })));
    }

    #[test]
    fn actual_discharge_is_hotter_than_isentropic_discharge() {
        let thermo = IdealSteam;
        let suction = steam_suction(&thermo);
        // A moderate pressure ratio keeps the inefficient discharge inside
        // the backend's temperature domain.
        let boundary = discharge_boundary(&thermo, 70.0);
        let efficiency =
            Efficiencies::isentropic_only(Ratio::new::<ratio>(0.75)).unwrap();

        let dry = solve_dry(
            &suction,
            boundary.saturation_pressure,
            GasFlow::Mass(MassRate::new::<kilogram_per_second>(0.01)),
            &efficiency,
            &Water,
            &thermo,
        )
        .unwrap();
        let discharge =
            actual_discharge(&dry, suction.enthalpy, &boundary, &Water, &thermo).unwrap();

        assert!(discharge.enthalpy > dry.isentropic_enthalpy);
        assert!(discharge.temperature > dry.isentropic_temperature);
        assert!(discharge.superheat > TemperatureInterval::ZERO);
    }
}
