//! The water-spray desuperheating balance.
//!
//! After the dry stage, shaft power in excess of what the target discharge
//! state can hold must be absorbed by evaporating injected liquid water.
//! The balance is closed in a single pass: classification of the energy
//! excess decides between a spray solution and a no-spray outcome, and no
//! iteration is involved.

use uom::ConstZero;
use uom::si::f64::{MassRate, Power, ThermodynamicTemperature};

use crate::support::{
    thermo::{backend::PropertyBackend, fluid::Water},
    units::SpecificEnthalpy,
};

use super::{
    dry::{self, DryCompression},
    error::SolveError,
    resolve::ResolvedBoundary,
    results::SprayOutcome,
};

/// The completed energy accounting entering the spray balance.
#[derive(Debug, Clone, Copy)]
pub(crate) struct EnergyBalance {
    pub shaft_power: Power,
    pub gas_mass_flow: MassRate,
    pub suction_enthalpy: SpecificEnthalpy,
    pub target_enthalpy: SpecificEnthalpy,
    pub water_enthalpy: SpecificEnthalpy,
}

/// The outcome of classifying an energy balance.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Balance {
    /// Spray water absorbs the excess.
    Spray {
        mass_flow: MassRate,
        heat_absorbed: Power,
        enthalpy_rise: SpecificEnthalpy,
    },
    /// Shaft power falls short of the target state by this much; no spray
    /// is needed.
    Surplus(Power),
}

/// Classifies the energy balance.
///
/// The heat each kilogram of water can absorb is the target discharge
/// enthalpy minus the liquid-water inlet enthalpy. The heat to be absorbed
/// is the shaft power minus what the gas itself carries from suction to the
/// target state.
///
/// # Errors
///
/// Returns [`SolveError::DegenerateBalance`] when the per-kilogram enthalpy
/// rise is not positive, since injected water could then never evaporate
/// into the target state.
pub(crate) fn classify(balance: &EnergyBalance) -> Result<Balance, SolveError> {
    let enthalpy_rise = balance.target_enthalpy - balance.water_enthalpy;
    if enthalpy_rise <= SpecificEnthalpy::ZERO {
        return Err(SolveError::DegenerateBalance {
            target: balance.target_enthalpy,
            water: balance.water_enthalpy,
        });
    }

    let heat_absorbed = balance.shaft_power
        - balance.gas_mass_flow * (balance.target_enthalpy - balance.suction_enthalpy);
    if heat_absorbed < Power::ZERO {
        return Ok(Balance::Surplus(-heat_absorbed));
    }

    Ok(Balance::Spray {
        mass_flow: heat_absorbed / enthalpy_rise,
        heat_absorbed,
        enthalpy_rise,
    })
}

/// Closes the spray balance for a completed dry stage.
///
/// The injected-water enthalpy is always evaluated through the [`Water`]
/// marker so that the backend's canonical water mapping is used regardless
/// of the process fluid.
pub(crate) fn solve_spray<F, B>(
    dry: &DryCompression,
    suction_enthalpy: SpecificEnthalpy,
    target_enthalpy: SpecificEnthalpy,
    water_inlet_temperature: ThermodynamicTemperature,
    discharge: &ResolvedBoundary,
    fluid: &F,
    thermo: &B,
) -> Result<SprayOutcome, SolveError>
where
    B: PropertyBackend<F> + PropertyBackend<Water>,
{
    let water_enthalpy =
        <B as PropertyBackend<Water>>::saturated_liquid_enthalpy(thermo, water_inlet_temperature, &Water)
            .map_err(|err| SolveError::lookup("injected-water enthalpy", err))?;

    let balance = EnergyBalance {
        shaft_power: dry.shaft_power,
        gas_mass_flow: dry.flow.gas_mass_flow,
        suction_enthalpy,
        target_enthalpy,
        water_enthalpy,
    };

    match classify(&balance)? {
        Balance::Spray {
            mass_flow,
            heat_absorbed,
            enthalpy_rise,
        } => {
            let total_mass_flow = dry.flow.gas_mass_flow + mass_flow;
            Ok(SprayOutcome::Solved {
                spray_mass_flow: mass_flow,
                total_mass_flow,
                outlet_quality: dry.flow.gas_mass_flow / total_mass_flow,
                heat_absorbed,
                enthalpy_rise_per_kg: enthalpy_rise,
            })
        }
        Balance::Surplus(energy_surplus) => {
            let dry_state =
                dry::actual_discharge(dry, suction_enthalpy, discharge, fluid, thermo)?;
            Ok(SprayOutcome::NotNeeded {
                dry_discharge_temperature: dry_state.temperature,
                dry_discharge_enthalpy: dry_state.enthalpy,
                energy_surplus,
            })
        }
    }
}
