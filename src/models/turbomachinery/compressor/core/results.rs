use uom::si::f64::{MassRate, Power, Ratio, ThermodynamicTemperature};

use crate::support::units::SpecificEnthalpy;

use super::{
    dry::{ActualDischarge, DryCompression},
    resolve::{ResolvedBoundary, SuctionState},
};

/// Results of a dry compression solve.
#[derive(Debug, Clone, Copy)]
pub struct DryResults {
    pub suction: SuctionState,
    pub discharge: ResolvedBoundary,
    pub dry: DryCompression,
    /// The state actually leaving the machine, from the shaft energy
    /// balance on the gas.
    pub discharge_state: ActualDischarge,
}

/// Results of a spray desuperheating solve.
#[derive(Debug, Clone, Copy)]
pub struct SprayResults {
    pub suction: SuctionState,
    pub discharge: ResolvedBoundary,
    /// Gas enthalpy at the target discharge condition.
    pub target_enthalpy: SpecificEnthalpy,
    pub dry: DryCompression,
    pub outcome: SprayOutcome,
}

/// How a spray balance closed.
///
/// [`SprayOutcome::NotNeeded`] is a successful, actionable answer, not a
/// failure: the machine cannot even reach the target superheat dry, so the
/// operator should inject no water.
#[derive(Debug, Clone, Copy)]
pub enum SprayOutcome {
    /// Water injection holds the discharge at the target state.
    Solved {
        spray_mass_flow: MassRate,
        /// Gas plus spray water.
        total_mass_flow: MassRate,
        /// Gas mass fraction of the combined discharge stream.
        outlet_quality: Ratio,
        heat_absorbed: Power,
        /// Enthalpy gained by each kilogram of injected water.
        enthalpy_rise_per_kg: SpecificEnthalpy,
    },
    /// The dry discharge is already at or below the target state.
    NotNeeded {
        dry_discharge_temperature: ThermodynamicTemperature,
        dry_discharge_enthalpy: SpecificEnthalpy,
        /// How far shaft power falls short of the target gas-side rise.
        energy_surplus: Power,
    },
}
