use uom::si::f64::{Pressure, TemperatureInterval, ThermodynamicTemperature};

/// A saturation condition given as either of its two equivalent members.
///
/// Saturation temperature and pressure determine one another along the
/// saturation curve; whichever is provided, the other is derived with a
/// quality-1 lookup during resolution.
#[derive(Debug, Clone, Copy)]
pub enum BoundaryCondition {
    SaturationTemperature(ThermodynamicTemperature),
    SaturationPressure(Pressure),
}

/// A process boundary: a saturation condition plus superheat above it.
///
/// Zero superheat means saturated vapor. That case is resolved on a
/// dedicated quality-1 path rather than by evaluating vapor properties at
/// the saturation temperature, which sits on the edge of many backends'
/// single-phase domain.
#[derive(Debug, Clone, Copy)]
pub struct ProcessBoundary {
    pub condition: BoundaryCondition,
    pub superheat: TemperatureInterval,
}
