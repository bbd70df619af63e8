//! Core implementation of the vapor compressor models.
//!
//! A solve runs forward through fixed stages: validate the configuration
//! for the machine family, normalize the flow specification, resolve the
//! suction and discharge boundaries, solve the dry compression, and, for
//! desuperheated solves, close the water-spray energy balance. Property
//! lookups are never retried; the first failure aborts the solve.

use std::marker::PhantomData;

use uom::ConstZero;
use uom::si::f64::TemperatureInterval;

mod dry;
mod error;
mod input;
mod machine;
mod resolve;
mod results;
mod spray;

pub use dry::{ActualDischarge, DryCompression, FlowSummary};
pub use error::SolveError;
pub use input::{
    BoundaryCondition, DryInputs, Efficiencies, FlowSpec, GasFlow, ProcessBoundary, SprayInputs,
};
pub use machine::{Machine, PositiveDisplacement, Turbo};
pub use resolve::{ResolvedBoundary, SuctionState};
pub use results::{DryResults, SprayOutcome, SprayResults};

use crate::support::thermo::{backend::PropertyBackend, fluid::Water};

/// A compressor performance model for the machine family `M`.
///
/// The type is a solver, not a machine instance; all state lives in the
/// inputs and the injected property backend.
#[derive(Debug, Clone, Copy)]
pub struct VaporCompressor<M> {
    _machine: PhantomData<M>,
}

impl<M: Machine> VaporCompressor<M> {
    /// Solves a dry compression process.
    ///
    /// # Errors
    ///
    /// Returns a [`SolveError`] if the configuration does not fit the
    /// machine family, an input fails validation, the process does not
    /// compress, or a property lookup fails.
    pub fn solve_dry<F, B: PropertyBackend<F>>(
        inputs: &DryInputs<F>,
        thermo: &B,
    ) -> Result<DryResults, SolveError> {
        let discharge_boundary = ProcessBoundary {
            condition: inputs.discharge,
            superheat: TemperatureInterval::ZERO,
        };
        let (suction, discharge, dry) = solve_to_dry::<M, _, _>(
            &inputs.flow,
            &inputs.efficiency,
            &inputs.suction,
            &discharge_boundary,
            &inputs.fluid,
            thermo,
        )?;
        let discharge_state = dry::actual_discharge(
            &dry,
            suction.enthalpy,
            &discharge,
            &inputs.fluid,
            thermo,
        )?;
        Ok(DryResults {
            suction,
            discharge,
            dry,
            discharge_state,
        })
    }

    /// Solves a compression process desuperheated by water spray.
    ///
    /// The backend must serve both the process fluid and [`Water`], since
    /// the injected water's enthalpy is evaluated through the canonical
    /// water marker.
    ///
    /// # Errors
    ///
    /// Returns a [`SolveError`] under the same conditions as
    /// [`Self::solve_dry`], plus [`SolveError::DegenerateBalance`] when the
    /// target discharge enthalpy does not exceed the injected-water
    /// enthalpy.
    pub fn solve_desuperheated<F, B>(
        inputs: &SprayInputs<F>,
        thermo: &B,
    ) -> Result<SprayResults, SolveError>
    where
        B: PropertyBackend<F> + PropertyBackend<Water>,
    {
        let (suction, discharge, dry) = solve_to_dry::<M, _, _>(
            &inputs.flow,
            &inputs.efficiency,
            &inputs.suction,
            &inputs.discharge,
            &inputs.fluid,
            thermo,
        )?;
        let target_enthalpy = resolve::discharge_target(&discharge, &inputs.fluid, thermo)?;
        let outcome = spray::solve_spray(
            &dry,
            suction.enthalpy,
            target_enthalpy,
            inputs.water_inlet_temperature,
            &discharge,
            &inputs.fluid,
            thermo,
        )?;
        Ok(SprayResults {
            suction,
            discharge,
            target_enthalpy,
            dry,
            outcome,
        })
    }
}

/// Runs the stages shared by every solve, through the dry compression.
fn solve_to_dry<M: Machine, F, B: PropertyBackend<F>>(
    flow: &FlowSpec,
    efficiency: &Efficiencies,
    suction: &ProcessBoundary,
    discharge: &ProcessBoundary,
    fluid: &F,
    thermo: &B,
) -> Result<(SuctionState, ResolvedBoundary, DryCompression), SolveError> {
    check_machine::<M>(flow, efficiency)?;
    let gas_flow = flow.normalize()?;

    let suction_boundary = resolve::boundary(suction, fluid, thermo, "suction")?;
    let discharge_boundary = resolve::boundary(discharge, fluid, thermo, "discharge")?;
    resolve::ensure_compression(&suction_boundary, &discharge_boundary)?;

    let suction_state = resolve::suction_state(&suction_boundary, fluid, thermo)?;
    let dry = dry::solve_dry(
        &suction_state,
        discharge_boundary.saturation_pressure,
        gas_flow,
        efficiency,
        fluid,
        thermo,
    )?;
    Ok((suction_state, discharge_boundary, dry))
}

/// Rejects configurations that do not fit the machine family.
fn check_machine<M: Machine>(
    flow: &FlowSpec,
    efficiency: &Efficiencies,
) -> Result<(), SolveError> {
    if !M::accepts(flow) {
        return Err(SolveError::input(format!(
            "a {} machine does not accept a {} flow specification",
            M::NAME,
            flow.describe(),
        )));
    }
    if M::USES_VOLUMETRIC_EFFICIENCY && efficiency.volumetric().is_none() {
        return Err(SolveError::input(format!(
            "a {} machine requires a volumetric efficiency",
            M::NAME,
        )));
    }
    if !M::USES_VOLUMETRIC_EFFICIENCY && efficiency.volumetric().is_some() {
        return Err(SolveError::input(format!(
            "a {} machine does not take a volumetric efficiency",
            M::NAME,
        )));
    }
    Ok(())
}
