//! Easing curves for the gallery's animation samples.
//!
//! Curves are a closed set of families crossed with a direction:
//!
//! - Polynomial: Quadratic, Cubic, Quartic, Quintic, Power
//! - Transcendental: Sine, Circle, Exponential
//! - Overshooting: Back, Elastic, Bounce
//!
//! Every family is defined by its "ease in" form `f(t)`. The other
//! directions are derived from it, so `Out` is `1 - f(1 - t)` and `InOut`
//! joins a half-speed `In` with a half-speed `Out`.
//!
//! # Usage
//!
//! ```
//! use gallery::core::easing::{Direction, EasingCurve, EasingFamily};
//!
//! let curve = EasingCurve::new(EasingFamily::Cubic, Direction::InOut);
//! assert_eq!(curve.evaluate(0.5), 0.5);
//! ```

use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};

/// Amplitude of the Back family's pull-back.
pub const BACK_AMPLITUDE: f64 = 1.0;
/// Number of bounces of the Bounce family.
pub const BOUNCE_COUNT: u32 = 3;
/// Ratio between successive bounce widths.
pub const BOUNCE_BOUNCINESS: f64 = 2.0;
/// Number of oscillations of the Elastic family.
pub const ELASTIC_OSCILLATIONS: u32 = 3;
/// Steepness of the Elastic family's exponential envelope.
pub const ELASTIC_SPRINGINESS: f64 = 3.0;

/// Named easing family.
///
/// Names parse case-sensitively (`"Cubic"`, never `"cubic"`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
pub enum EasingFamily {
    /// Pulls back slightly before moving toward the target.
    #[default]
    Back,
    Bounce,
    Circle,
    Cubic,
    /// Oscillates like a spring.
    Elastic,
    /// `(e^(kt) - 1) / (e^k - 1)`, parameterized by exponent `k`.
    Exponential,
    /// `t^p`, parameterized by power `p`.
    Power,
    Quadratic,
    Quartic,
    Quintic,
    Sine,
}

impl EasingFamily {
    /// Whether the family reads [`EasingCurve::parameter`].
    pub const fn is_parameterized(self) -> bool {
        matches!(self, Self::Exponential | Self::Power)
    }
}

/// Where the eased rate of change is concentrated.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Direction {
    /// Slow start.
    In,
    /// Slow end.
    #[default]
    Out,
    /// Slow start and slow end, symmetric about the midpoint.
    InOut,
}

/// Immutable curve descriptor produced by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EasingCurve {
    pub family: EasingFamily,
    pub direction: Direction,
    /// Exponent (Exponential) or power (Power). `None` for other families.
    pub parameter: Option<f64>,
}

impl EasingCurve {
    /// Builds a curve without a parameter.
    ///
    /// Parameterized families built this way fall back to the resolver
    /// defaults when evaluated.
    pub const fn new(family: EasingFamily, direction: Direction) -> Self {
        Self {
            family,
            direction,
            parameter: None,
        }
    }

    /// Builds a curve carrying a family-specific parameter.
    ///
    /// The parameter is dropped for families that do not read it.
    pub const fn with_parameter(family: EasingFamily, direction: Direction, parameter: f64) -> Self {
        Self {
            family,
            direction,
            parameter: if family.is_parameterized() {
                Some(parameter)
            } else {
                None
            },
        }
    }

    /// Evaluates the curve at normalized time `t`.
    ///
    /// `t` is clamped to `[0, 1]`. The endpoints are exact: `evaluate(0.0)` is
    /// `0.0` and `evaluate(1.0)` is `1.0` for every family and direction.
    /// Back and Elastic leave `[0, 1]` between the endpoints.
    pub fn evaluate(&self, t: f64) -> f64 {
        if t.is_nan() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        match self.direction {
            Direction::In => self.ease_in(t),
            Direction::Out => 1.0 - self.ease_in(1.0 - t),
            Direction::InOut => {
                if t < 0.5 {
                    self.ease_in(t * 2.0) * 0.5
                } else {
                    1.0 - self.ease_in((1.0 - t) * 2.0) * 0.5
                }
            }
        }
    }

    fn ease_in(&self, t: f64) -> f64 {
        match self.family {
            EasingFamily::Back => t.powi(3) - t * BACK_AMPLITUDE * (PI * t).sin(),
            EasingFamily::Bounce => bounce_in(t, BOUNCE_COUNT, BOUNCE_BOUNCINESS),
            EasingFamily::Circle => 1.0 - (1.0 - t * t).max(0.0).sqrt(),
            EasingFamily::Cubic => t.powi(3),
            EasingFamily::Elastic => elastic_in(t, ELASTIC_OSCILLATIONS, ELASTIC_SPRINGINESS),
            EasingFamily::Exponential => {
                let k = self
                    .parameter
                    .filter(|k| k.is_finite())
                    .unwrap_or(crate::core::resolver::DEFAULT_EXPONENT);
                exponential_in(t, k)
            }
            EasingFamily::Power => {
                // t^0 is a step at t = 0
                let p = self
                    .parameter
                    .filter(|p| p.is_finite() && *p > 0.0)
                    .unwrap_or(crate::core::resolver::DEFAULT_POWER);
                t.powf(p)
            }
            EasingFamily::Quadratic => t * t,
            EasingFamily::Quartic => t.powi(4),
            EasingFamily::Quintic => t.powi(5),
            EasingFamily::Sine => 1.0 - (FRAC_PI_2 * (1.0 - t)).sin(),
        }
    }
}

impl Default for EasingCurve {
    fn default() -> Self {
        Self::new(EasingFamily::default(), Direction::default())
    }
}

impl std::fmt::Display for EasingCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.parameter {
            Some(p) => write!(f, "{}({p}) {}", self.family, self.direction),
            None => write!(f, "{} {}", self.family, self.direction),
        }
    }
}

/// `(e^(kt) - 1) / (e^k - 1)`, degenerating to linear as `k` approaches zero.
///
/// For `k > 1` numerator and denominator are scaled by `e^-k` so neither
/// overflows.
fn exponential_in(t: f64, k: f64) -> f64 {
    if k.abs() < 1e-9 {
        t
    } else if k > 1.0 {
        ((k * (t - 1.0)).exp() - (-k).exp()) / -(-k).exp_m1()
    } else {
        (k * t).exp_m1() / k.exp_m1()
    }
}

/// Exponentially growing sine wave that lands on 1 at `t = 1`.
fn elastic_in(t: f64, oscillations: u32, springiness: f64) -> f64 {
    let envelope = exponential_in(t, springiness);
    let phase = (2.0 * PI * f64::from(oscillations) + FRAC_PI_2) * t;
    envelope * phase.sin()
}

/// Sequence of parabolic arcs, each `bounciness` times wider than the last.
///
/// The last arc peaks at exactly `(t, value) = (1, 1)`; earlier arcs peak at
/// `(1 / bounciness)^(bounces - arc)`.
fn bounce_in(t: f64, bounces: u32, bounciness: f64) -> f64 {
    let bounces = f64::from(bounces);
    // A bounciness of 1 divides by zero below.
    let bounciness = if bounciness <= 1.0 { 1.001 } else { bounciness };

    let pow = bounciness.powf(bounces);
    let one_minus = 1.0 - bounciness;
    // Total width in units of the first (narrowest) arc: full arcs plus half
    // of the final one, which ends at its peak.
    let units = (1.0 - pow) / one_minus + pow * 0.5;

    let unit_at_t = t * units;
    let arc = ((-unit_at_t * one_minus + 1.0).ln() / bounciness.ln()).floor();

    let start = (1.0 - bounciness.powf(arc)) / (one_minus * units);
    let end = (1.0 - bounciness.powf(arc + 1.0)) / (one_minus * units);
    let mid = (start + end) * 0.5;
    let radius = mid - start;
    let from_peak = t - mid;
    let amplitude = (1.0 / bounciness).powf(bounces - arc);

    (-amplitude / (radius * radius)) * (from_peak - radius) * (from_peak + radius)
}
