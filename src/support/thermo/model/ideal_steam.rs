//! An analytic steam property backend.
//!
//! Saturation follows an Antoine correlation fit for water between the
//! triple point and roughly 140 °C, and the vapor phase is an ideal gas
//! with constant specific heat referenced to saturated steam at 100 °C.
//! Every query has a closed form, including the inverse pressure/entropy
//! and pressure/enthalpy states, so the backend needs no iteration and no
//! external property library. Accuracy is a few percent against real steam
//! over typical MVR conditions, which is plenty for exercising solvers.

use crate::support::thermo::{
    PropertyError,
    backend::{Input, Property, PropertyBackend},
    fluid::Water,
};

/// Antoine coefficients for water, `log10(P [mmHg]) = A - B / (C + T [°C])`.
const ANTOINE_A: f64 = 8.071_31;
const ANTOINE_B: f64 = 1_730.63;
const ANTOINE_C: f64 = 233.426;
const MMHG: f64 = 133.322;

/// Specific gas constant of water vapor, in J/(kg·K).
const R_VAPOR: f64 = 461.526;
/// Vapor specific heat at constant pressure, in J/(kg·K).
const CP_VAPOR: f64 = 1_900.0;
/// Liquid specific heat, in J/(kg·K), with zero enthalpy at 0 °C.
const CP_LIQUID: f64 = 4_186.0;

/// Reference state: saturated steam at 100 °C.
const T_REF: f64 = 373.15;
const P_REF: f64 = 101_325.0;
const H_REF: f64 = 2_675_500.0;
const S_REF: f64 = 7_354.0;

/// Accepted temperature range, in K. The upper bound admits the hot
/// superheated discharge states that high-ratio compression produces.
const T_MIN: f64 = 273.16;
const T_MAX: f64 = 700.0;
/// Accepted pressure range, in Pa (triple point to near-critical).
const P_MIN: f64 = 611.657;
const P_MAX: f64 = 2.2e7;
/// Saturation queries are limited to where the Antoine fit holds.
const T_SAT_MAX: f64 = 473.15;

/// Analytic ideal-gas steam backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdealSteam;

impl IdealSteam {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn check_temperature(t: f64) -> Result<f64, PropertyError> {
        if !t.is_finite() {
            return Err(PropertyError::InvalidState {
                context: format!("temperature {t} K is not finite"),
            });
        }
        if !(T_MIN..=T_MAX).contains(&t) {
            return Err(PropertyError::OutOfDomain {
                context: format!("temperature {t} K outside [{T_MIN}, {T_MAX}] K"),
            });
        }
        Ok(t)
    }

    fn check_pressure(p: f64) -> Result<f64, PropertyError> {
        if !p.is_finite() {
            return Err(PropertyError::InvalidState {
                context: format!("pressure {p} Pa is not finite"),
            });
        }
        if !(P_MIN..=P_MAX).contains(&p) {
            return Err(PropertyError::OutOfDomain {
                context: format!("pressure {p} Pa outside [{P_MIN}, {P_MAX}] Pa"),
            });
        }
        Ok(p)
    }

    fn saturation_pressure_si(t: f64) -> Result<f64, PropertyError> {
        let t = Self::check_temperature(t)?;
        if t > T_SAT_MAX {
            return Err(PropertyError::OutOfDomain {
                context: format!("saturation query at {t} K exceeds {T_SAT_MAX} K"),
            });
        }
        let t_celsius = t - 273.15;
        Ok(MMHG * 10f64.powf(ANTOINE_A - ANTOINE_B / (ANTOINE_C + t_celsius)))
    }

    fn saturation_temperature_si(p: f64) -> Result<f64, PropertyError> {
        let p = Self::check_pressure(p)?;
        let t = 273.15 + ANTOINE_B / (ANTOINE_A - (p / MMHG).log10()) - ANTOINE_C;
        if t > T_SAT_MAX {
            return Err(PropertyError::OutOfDomain {
                context: format!("saturation pressure {p} Pa exceeds the correlation range"),
            });
        }
        Ok(t)
    }

    fn vapor_enthalpy_si(t: f64) -> f64 {
        H_REF + CP_VAPOR * (t - T_REF)
    }

    fn vapor_entropy_si(t: f64, p: f64) -> f64 {
        S_REF + CP_VAPOR * (t / T_REF).ln() - R_VAPOR * (p / P_REF).ln()
    }

    fn vapor_density_si(t: f64, p: f64) -> f64 {
        p / (R_VAPOR * t)
    }

    fn liquid_enthalpy_si(t: f64) -> f64 {
        CP_LIQUID * (t - 273.15)
    }

    fn temperature_from_entropy_si(p: f64, s: f64) -> f64 {
        T_REF * ((s - S_REF + R_VAPOR * (p / P_REF).ln()) / CP_VAPOR).exp()
    }

    fn temperature_from_enthalpy_si(h: f64) -> f64 {
        T_REF + (h - H_REF) / CP_VAPOR
    }

    /// Rejects temperature/pressure states below the saturation line.
    fn require_vapor(t: f64, p: f64) -> Result<(), PropertyError> {
        // Above the correlation range the state is always treated as vapor.
        let Ok(t_sat) = Self::saturation_temperature_si(p) else {
            return Ok(());
        };
        if t < t_sat - 1e-9 {
            return Err(PropertyError::InvalidState {
                context: format!(
                    "state ({t} K, {p} Pa) is below the saturation temperature {t_sat} K"
                ),
            });
        }
        Ok(())
    }

    fn quality_kind(value: f64) -> Result<Quality, PropertyError> {
        if value == 0.0 {
            Ok(Quality::SaturatedLiquid)
        } else if value == 1.0 {
            Ok(Quality::SaturatedVapor)
        } else {
            Err(PropertyError::Unsupported {
                context: format!("quality {value} is not a saturation boundary"),
            })
        }
    }

    fn value_of(a: Input, b: Input, want: Property) -> Option<f64> {
        if a.property == want {
            Some(a.si_value)
        } else if b.property == want {
            Some(b.si_value)
        } else {
            None
        }
    }
}

enum Quality {
    SaturatedLiquid,
    SaturatedVapor,
}

impl PropertyBackend<Water> for IdealSteam {
    fn lookup(
        &self,
        output: Property,
        a: Input,
        b: Input,
        _fluid: &Water,
    ) -> Result<f64, PropertyError> {
        let t_in = Self::value_of(a, b, Property::Temperature);
        let p_in = Self::value_of(a, b, Property::Pressure);
        let h_in = Self::value_of(a, b, Property::Enthalpy);
        let s_in = Self::value_of(a, b, Property::Entropy);
        let q_in = Self::value_of(a, b, Property::Quality);

        match output {
            Property::Pressure => match (t_in, q_in) {
                (Some(t), Some(q)) => {
                    Self::quality_kind(q)?;
                    Self::saturation_pressure_si(t)
                }
                _ => Err(unsupported(output, a, b)),
            },
            Property::Temperature => match (p_in, q_in, s_in, h_in) {
                (Some(p), Some(q), None, None) => {
                    Self::quality_kind(q)?;
                    Self::saturation_temperature_si(p)
                }
                (Some(p), None, Some(s), None) => {
                    let p = Self::check_pressure(p)?;
                    let t = Self::check_temperature(Self::temperature_from_entropy_si(p, s))?;
                    Self::require_vapor(t, p)?;
                    Ok(t)
                }
                (Some(p), None, None, Some(h)) => {
                    let p = Self::check_pressure(p)?;
                    let t = Self::check_temperature(Self::temperature_from_enthalpy_si(h))?;
                    Self::require_vapor(t, p)?;
                    Ok(t)
                }
                _ => Err(unsupported(output, a, b)),
            },
            Property::Enthalpy => match (t_in, p_in, q_in, s_in) {
                (Some(t), Some(p), None, None) => {
                    let t = Self::check_temperature(t)?;
                    let p = Self::check_pressure(p)?;
                    Self::require_vapor(t, p)?;
                    Ok(Self::vapor_enthalpy_si(t))
                }
                (None, Some(p), Some(q), None) => {
                    let t_sat = Self::saturation_temperature_si(p)?;
                    match Self::quality_kind(q)? {
                        Quality::SaturatedLiquid => Ok(Self::liquid_enthalpy_si(t_sat)),
                        Quality::SaturatedVapor => Ok(Self::vapor_enthalpy_si(t_sat)),
                    }
                }
                (Some(t), None, Some(q), None) => {
                    // Validates the saturation range before evaluating.
                    Self::saturation_pressure_si(t)?;
                    match Self::quality_kind(q)? {
                        Quality::SaturatedLiquid => Ok(Self::liquid_enthalpy_si(t)),
                        Quality::SaturatedVapor => Ok(Self::vapor_enthalpy_si(t)),
                    }
                }
                (None, Some(p), None, Some(s)) => {
                    let p = Self::check_pressure(p)?;
                    let t = Self::check_temperature(Self::temperature_from_entropy_si(p, s))?;
                    Self::require_vapor(t, p)?;
                    Ok(Self::vapor_enthalpy_si(t))
                }
                _ => Err(unsupported(output, a, b)),
            },
            Property::Entropy => match (t_in, p_in, q_in) {
                (Some(t), Some(p), None) => {
                    let t = Self::check_temperature(t)?;
                    let p = Self::check_pressure(p)?;
                    Self::require_vapor(t, p)?;
                    Ok(Self::vapor_entropy_si(t, p))
                }
                (None, Some(p), Some(q)) => match Self::quality_kind(q)? {
                    Quality::SaturatedVapor => {
                        let t_sat = Self::saturation_temperature_si(p)?;
                        Ok(Self::vapor_entropy_si(t_sat, p))
                    }
                    Quality::SaturatedLiquid => Err(unsupported(output, a, b)),
                },
                _ => Err(unsupported(output, a, b)),
            },
            Property::Density => match (t_in, p_in, q_in) {
                (Some(t), Some(p), None) => {
                    let t = Self::check_temperature(t)?;
                    let p = Self::check_pressure(p)?;
                    Self::require_vapor(t, p)?;
                    Ok(Self::vapor_density_si(t, p))
                }
                (None, Some(p), Some(q)) => match Self::quality_kind(q)? {
                    Quality::SaturatedVapor => {
                        let t_sat = Self::saturation_temperature_si(p)?;
                        Ok(Self::vapor_density_si(t_sat, p))
                    }
                    Quality::SaturatedLiquid => Err(unsupported(output, a, b)),
                },
                _ => Err(unsupported(output, a, b)),
            },
            Property::Quality => Err(PropertyError::Unsupported {
                context: "quality output is not available from this backend".into(),
            }),
        }
    }
}

fn unsupported(output: Property, a: Input, b: Input) -> PropertyError {
    PropertyError::Unsupported {
        context: format!(
            "{output:?} from ({:?}, {:?}) inputs",
            a.property, b.property
        ),
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use uom::si::{
        f64::{Pressure, ThermodynamicTemperature},
        pressure::{kilopascal, pascal},
        thermodynamic_temperature::kelvin,
    };

    use super::*;

    fn backend() -> IdealSteam {
        IdealSteam::new()
    }

    fn kelvin_at(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(value)
    }

    #[test]
    fn saturation_pressure_matches_steam_tables() {
        let p = backend()
            .saturation_pressure(kelvin_at(373.15), &Water)
            .unwrap();
        assert_relative_eq!(p.get::<kilopascal>(), 101.325, max_relative = 0.01);

        let p = backend()
            .saturation_pressure(kelvin_at(313.15), &Water)
            .unwrap();
        assert_relative_eq!(p.get::<kilopascal>(), 7.385, max_relative = 0.02);
    }

    #[test]
    fn saturation_round_trips_between_pressure_and_temperature() {
        let thermo = backend();
        let t = kelvin_at(383.15);
        let p = thermo.saturation_pressure(t, &Water).unwrap();
        let t_back = thermo.saturation_temperature(p, &Water).unwrap();
        assert_abs_diff_eq!(t_back.get::<kelvin>(), t.get::<kelvin>(), epsilon = 1e-6);
    }

    #[test]
    fn saturated_vapor_matches_vapor_at_saturation_temperature() {
        let thermo = backend();
        let p = Pressure::new::<pascal>(101_325.0);
        let t_sat = thermo.saturation_temperature(p, &Water).unwrap();

        let h_sat = thermo.saturated_vapor_enthalpy(p, &Water).unwrap();
        let h_tp = thermo.vapor_enthalpy(t_sat, p, &Water).unwrap();
        assert_relative_eq!(h_sat.value, h_tp.value, max_relative = 1e-9);

        let s_sat = thermo.saturated_vapor_entropy(p, &Water).unwrap();
        let s_tp = thermo.vapor_entropy(t_sat, p, &Water).unwrap();
        assert_relative_eq!(s_sat.value, s_tp.value, max_relative = 1e-9);

        let d_sat = thermo.saturated_vapor_density(p, &Water).unwrap();
        let d_tp = thermo.vapor_density(t_sat, p, &Water).unwrap();
        assert_relative_eq!(d_sat.value, d_tp.value, max_relative = 1e-9);
    }

    #[test]
    fn pressure_entropy_state_inverts_entropy() {
        let thermo = backend();
        let t = kelvin_at(450.0);
        let p = Pressure::new::<pascal>(143_000.0);
        let s = thermo.vapor_entropy(t, p, &Water).unwrap();

        let t_back = thermo.temperature_at_entropy(p, s, &Water).unwrap();
        assert_abs_diff_eq!(t_back.get::<kelvin>(), 450.0, epsilon = 1e-6);

        let h = thermo.enthalpy_at_entropy(p, s, &Water).unwrap();
        let h_direct = thermo.vapor_enthalpy(t, p, &Water).unwrap();
        assert_relative_eq!(h.value, h_direct.value, max_relative = 1e-9);
    }

    #[test]
    fn pressure_enthalpy_state_inverts_enthalpy() {
        let thermo = backend();
        let t = kelvin_at(420.0);
        let p = Pressure::new::<pascal>(101_325.0);
        let h = thermo.vapor_enthalpy(t, p, &Water).unwrap();

        let t_back = thermo.temperature_at_enthalpy(p, h, &Water).unwrap();
        assert_abs_diff_eq!(t_back.get::<kelvin>(), 420.0, epsilon = 1e-6);
    }

    #[test]
    fn saturated_liquid_enthalpy_uses_liquid_heat_capacity() {
        let h = backend()
            .saturated_liquid_enthalpy(kelvin_at(293.15), &Water)
            .unwrap();
        assert_relative_eq!(h.value, 4_186.0 * 20.0, max_relative = 1e-9);
    }

    #[test]
    fn subcooled_vapor_query_is_an_invalid_state() {
        let thermo = backend();
        let err = thermo
            .vapor_enthalpy(kelvin_at(300.0), Pressure::new::<pascal>(101_325.0), &Water)
            .unwrap_err();
        assert!(matches!(err, PropertyError::InvalidState { .. }));
    }

    #[test]
    fn saturation_query_beyond_correlation_range_is_out_of_domain() {
        let err = backend()
            .saturation_pressure(kelvin_at(500.0), &Water)
            .unwrap_err();
        assert!(matches!(err, PropertyError::OutOfDomain { .. }));
    }

    #[test]
    fn two_phase_quality_is_unsupported() {
        let err = backend()
            .lookup(
                Property::Enthalpy,
                Input::pressure(Pressure::new::<pascal>(101_325.0)),
                Input::quality(0.5),
                &Water,
            )
            .unwrap_err();
        assert!(matches!(err, PropertyError::Unsupported { .. }));
    }

    #[test]
    fn lookup_is_input_order_insensitive() {
        let thermo = backend();
        let t = Input::temperature(kelvin_at(400.0));
        let p = Input::pressure(Pressure::new::<pascal>(101_325.0));
        let forward = thermo.lookup(Property::Enthalpy, t, p, &Water).unwrap();
        let reversed = thermo.lookup(Property::Enthalpy, p, t, &Water).unwrap();
        assert_eq!(forward, reversed);
    }
}
