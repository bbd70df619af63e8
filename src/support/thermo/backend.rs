//! The property-backend contract consumed by compressor models.
//!
//! A [`PropertyBackend`] evaluates one fluid property at a thermodynamic
//! state fixed by two independent property inputs, in the shape of
//! CoolProp's `PropsSI` call. The single required method works in coherent
//! SI `f64` values so that wrapping an external property library is a
//! mechanical exercise; the provided methods wrap the raw contract in typed
//! [`uom`] quantities, and they are the only surface the solvers call.
//!
//! The trait is generic over the fluid marker, so a backend declares which
//! fluids it can serve at the type level. Solvers that inject desuperheating
//! water require `PropertyBackend<Water>` in addition to the process fluid,
//! which pins the injected-water lookups to the canonical water identifier.

use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{MassDensity, Pressure, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::units::{SpecificEnthalpy, SpecificEntropy};

use super::PropertyError;

/// Property tokens understood by a [`PropertyBackend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Property {
    Pressure,
    Temperature,
    Enthalpy,
    Entropy,
    Density,
    /// Vapor mass fraction; `0` is saturated liquid, `1` is saturated vapor.
    Quality,
}

/// One input constraint for a property lookup: a property token and its
/// value in coherent SI units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Input {
    pub property: Property,
    pub si_value: f64,
}

impl Input {
    #[must_use]
    pub fn temperature(value: ThermodynamicTemperature) -> Self {
        Self {
            property: Property::Temperature,
            si_value: value.get::<kelvin>(),
        }
    }

    #[must_use]
    pub fn pressure(value: Pressure) -> Self {
        Self {
            property: Property::Pressure,
            si_value: value.get::<pascal>(),
        }
    }

    #[must_use]
    pub fn enthalpy(value: SpecificEnthalpy) -> Self {
        Self {
            property: Property::Enthalpy,
            si_value: value.get::<joule_per_kilogram>(),
        }
    }

    #[must_use]
    pub fn entropy(value: SpecificEntropy) -> Self {
        Self {
            property: Property::Entropy,
            si_value: value.get::<joule_per_kilogram_kelvin>(),
        }
    }

    #[must_use]
    pub fn quality(value: f64) -> Self {
        Self {
            property: Property::Quality,
            si_value: value,
        }
    }
}

/// A fluid property evaluator for the fluid marker `F`.
///
/// Lookups are blocking, synchronous, and never retried by callers: a
/// failure aborts the calculation that issued it.
pub trait PropertyBackend<F> {
    /// Evaluates `output` at the state fixed by two independent inputs.
    ///
    /// Values are in coherent SI units (Pa, K, J/kg, J/kg·K, kg/m³; quality
    /// is a mass fraction). Input order must not matter to implementations.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the state is physically invalid, outside
    /// the backend's domain, or the property/input combination is
    /// unsupported. All provided methods propagate these errors unchanged.
    fn lookup(&self, output: Property, a: Input, b: Input, fluid: &F)
    -> Result<f64, PropertyError>;

    /// Saturation pressure at `t_sat`, from a quality-1 lookup.
    fn saturation_pressure(
        &self,
        t_sat: ThermodynamicTemperature,
        fluid: &F,
    ) -> Result<Pressure, PropertyError> {
        let p = self.lookup(
            Property::Pressure,
            Input::temperature(t_sat),
            Input::quality(1.0),
            fluid,
        )?;
        Ok(Pressure::new::<pascal>(p))
    }

    /// Saturation temperature at `p_sat`, from a quality-1 lookup.
    fn saturation_temperature(
        &self,
        p_sat: Pressure,
        fluid: &F,
    ) -> Result<ThermodynamicTemperature, PropertyError> {
        let t = self.lookup(
            Property::Temperature,
            Input::pressure(p_sat),
            Input::quality(1.0),
            fluid,
        )?;
        Ok(ThermodynamicTemperature::new::<kelvin>(t))
    }

    /// Vapor enthalpy at a temperature/pressure state.
    fn vapor_enthalpy(
        &self,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
        fluid: &F,
    ) -> Result<SpecificEnthalpy, PropertyError> {
        let h = self.lookup(
            Property::Enthalpy,
            Input::temperature(temperature),
            Input::pressure(pressure),
            fluid,
        )?;
        Ok(SpecificEnthalpy::new::<joule_per_kilogram>(h))
    }

    /// Vapor entropy at a temperature/pressure state.
    fn vapor_entropy(
        &self,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
        fluid: &F,
    ) -> Result<SpecificEntropy, PropertyError> {
        let s = self.lookup(
            Property::Entropy,
            Input::temperature(temperature),
            Input::pressure(pressure),
            fluid,
        )?;
        Ok(SpecificEntropy::new::<joule_per_kilogram_kelvin>(s))
    }

    /// Vapor density at a temperature/pressure state.
    fn vapor_density(
        &self,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
        fluid: &F,
    ) -> Result<MassDensity, PropertyError> {
        let d = self.lookup(
            Property::Density,
            Input::temperature(temperature),
            Input::pressure(pressure),
            fluid,
        )?;
        Ok(MassDensity::new::<kilogram_per_cubic_meter>(d))
    }

    /// Saturated-vapor enthalpy at `pressure` (quality 1).
    fn saturated_vapor_enthalpy(
        &self,
        pressure: Pressure,
        fluid: &F,
    ) -> Result<SpecificEnthalpy, PropertyError> {
        let h = self.lookup(
            Property::Enthalpy,
            Input::pressure(pressure),
            Input::quality(1.0),
            fluid,
        )?;
        Ok(SpecificEnthalpy::new::<joule_per_kilogram>(h))
    }

    /// Saturated-vapor entropy at `pressure` (quality 1).
    fn saturated_vapor_entropy(
        &self,
        pressure: Pressure,
        fluid: &F,
    ) -> Result<SpecificEntropy, PropertyError> {
        let s = self.lookup(
            Property::Entropy,
            Input::pressure(pressure),
            Input::quality(1.0),
            fluid,
        )?;
        Ok(SpecificEntropy::new::<joule_per_kilogram_kelvin>(s))
    }

    /// Saturated-vapor density at `pressure` (quality 1).
    fn saturated_vapor_density(
        &self,
        pressure: Pressure,
        fluid: &F,
    ) -> Result<MassDensity, PropertyError> {
        let d = self.lookup(
            Property::Density,
            Input::pressure(pressure),
            Input::quality(1.0),
            fluid,
        )?;
        Ok(MassDensity::new::<kilogram_per_cubic_meter>(d))
    }

    /// Enthalpy at a pressure/entropy state.
    ///
    /// This is the isentropic-discharge lookup; the backend performs the
    /// inverse solve for the temperature implied by `(p, s)`.
    fn enthalpy_at_entropy(
        &self,
        pressure: Pressure,
        entropy: SpecificEntropy,
        fluid: &F,
    ) -> Result<SpecificEnthalpy, PropertyError> {
        let h = self.lookup(
            Property::Enthalpy,
            Input::pressure(pressure),
            Input::entropy(entropy),
            fluid,
        )?;
        Ok(SpecificEnthalpy::new::<joule_per_kilogram>(h))
    }

    /// Temperature at a pressure/entropy state.
    fn temperature_at_entropy(
        &self,
        pressure: Pressure,
        entropy: SpecificEntropy,
        fluid: &F,
    ) -> Result<ThermodynamicTemperature, PropertyError> {
        let t = self.lookup(
            Property::Temperature,
            Input::pressure(pressure),
            Input::entropy(entropy),
            fluid,
        )?;
        Ok(ThermodynamicTemperature::new::<kelvin>(t))
    }

    /// Temperature at a pressure/enthalpy state.
    fn temperature_at_enthalpy(
        &self,
        pressure: Pressure,
        enthalpy: SpecificEnthalpy,
        fluid: &F,
    ) -> Result<ThermodynamicTemperature, PropertyError> {
        let t = self.lookup(
            Property::Temperature,
            Input::pressure(pressure),
            Input::enthalpy(enthalpy),
            fluid,
        )?;
        Ok(ThermodynamicTemperature::new::<kelvin>(t))
    }

    /// Saturated-liquid enthalpy at `temperature` (quality 0).
    fn saturated_liquid_enthalpy(
        &self,
        temperature: ThermodynamicTemperature,
        fluid: &F,
    ) -> Result<SpecificEnthalpy, PropertyError> {
        let h = self.lookup(
            Property::Enthalpy,
            Input::temperature(temperature),
            Input::quality(0.0),
            fluid,
        )?;
        Ok(SpecificEnthalpy::new::<joule_per_kilogram>(h))
    }
}
