//! Input types for compressor solves.

mod boundary;
mod efficiency;
mod flow;

use uom::si::f64::ThermodynamicTemperature;

pub use boundary::{BoundaryCondition, ProcessBoundary};
pub use efficiency::Efficiencies;
pub use flow::{FlowSpec, GasFlow};

/// Inputs for a dry compression solve.
#[derive(Debug, Clone)]
pub struct DryInputs<F> {
    pub fluid: F,
    pub flow: FlowSpec,
    pub efficiency: Efficiencies,
    pub suction: ProcessBoundary,
    /// Discharge saturation condition. Dry solves impose no discharge
    /// superheat target; the actual discharge state is reported instead.
    pub discharge: BoundaryCondition,
}

/// Inputs for a water-spray desuperheating solve.
#[derive(Debug, Clone)]
pub struct SprayInputs<F> {
    pub fluid: F,
    pub flow: FlowSpec,
    pub efficiency: Efficiencies,
    pub suction: ProcessBoundary,
    /// Discharge condition including the target superheat the spray must
    /// hold the discharge stream to.
    pub discharge: ProcessBoundary,
    /// Temperature of the injected liquid water.
    pub water_inlet_temperature: ThermodynamicTemperature,
}
