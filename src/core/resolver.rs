//! Maps the gallery's easing selection (family name + direction) to a curve.
//!
//! Resolution never fails: an unrecognized family name resolves to
//! [`EasingFamily::Back`], the first entry of the family picker.

use crate::core::easing::{Direction, EasingCurve, EasingFamily};
use crate::validators;
use serde::{Deserialize, Serialize};

/// Exponent applied to the Exponential family unless overridden.
pub const DEFAULT_EXPONENT: f64 = 6.0;

/// Power applied to the Power family unless overridden.
pub const DEFAULT_POWER: f64 = 6.0;

/// Resolves family names to curve descriptors.
///
/// Holds the parameters for the two parameterized families. The
/// [`Default`] resolver uses [`DEFAULT_EXPONENT`] and [`DEFAULT_POWER`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EasingResolver {
    pub exponent: f64,
    pub power: f64,
}

impl Default for EasingResolver {
    fn default() -> Self {
        Self {
            exponent: DEFAULT_EXPONENT,
            power: DEFAULT_POWER,
        }
    }
}

impl EasingResolver {
    /// Builds a resolver with the given parameters.
    ///
    /// A non-finite exponent, or a power that is not finite and positive, is
    /// replaced by its default.
    pub fn new(exponent: f64, power: f64) -> Self {
        let exponent = validators::validate_exponent(exponent).unwrap_or_else(|e| {
            tracing::warn!("{}, using {}", e, DEFAULT_EXPONENT);
            DEFAULT_EXPONENT
        });
        let power = validators::validate_power(power).unwrap_or_else(|e| {
            tracing::warn!("{}, using {}", e, DEFAULT_POWER);
            DEFAULT_POWER
        });
        Self { exponent, power }
    }

    /// Resolves `family_name` (case-sensitive) and `direction` to a curve.
    pub fn resolve(&self, family_name: &str, direction: Direction) -> EasingCurve {
        let family = family_name.parse::<EasingFamily>().unwrap_or_else(|_| {
            tracing::debug!(
                "Unknown easing family {:?}, falling back to {}",
                family_name,
                EasingFamily::Back
            );
            EasingFamily::Back
        });
        self.curve_for(family, direction)
    }

    /// Builds the curve for an already-known family.
    pub fn curve_for(&self, family: EasingFamily, direction: Direction) -> EasingCurve {
        match family {
            EasingFamily::Exponential => {
                EasingCurve::with_parameter(family, direction, self.exponent)
            }
            EasingFamily::Power => EasingCurve::with_parameter(family, direction, self.power),
            _ => EasingCurve::new(family, direction),
        }
    }
}

/// Resolves with the default exponent and power.
///
/// # Examples
///
/// ```
/// use gallery::core::easing::{Direction, EasingFamily};
/// use gallery::core::resolver::resolve;
///
/// let curve = resolve("Power", Direction::In);
/// assert_eq!(curve.parameter, Some(6.0));
///
/// let fallback = resolve("not-a-real-family", Direction::In);
/// assert_eq!(fallback.family, EasingFamily::Back);
/// ```
pub fn resolve(family_name: &str, direction: Direction) -> EasingCurve {
    EasingResolver::default().resolve(family_name, direction)
}
