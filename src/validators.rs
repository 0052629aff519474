//! Validation of user-supplied gallery settings.
//!
//! The core accepts any value (curves clamp, resolution falls back), so these
//! checks guard what gets persisted and what the CLI passes through.

use crate::core::error::{Error, Result};
use std::time::Duration;

/// Longest animation the gallery will drive.
pub const MAX_DURATION_SECS: f64 = 60.0;

/// Most frames the CLI will sample for one run.
pub const MAX_FRAMES: u32 = 1000;

/// Validates an animation duration given in seconds.
///
/// # Errors
///
/// Returns `Err` if the value is not finite, is negative, or exceeds
/// [`MAX_DURATION_SECS`].
///
/// # Examples
///
/// ```
/// use gallery::validators::validate_duration_secs;
/// use std::time::Duration;
///
/// assert_eq!(validate_duration_secs(0.5).unwrap(), Duration::from_millis(500));
/// assert!(validate_duration_secs(-1.0).is_err());
/// ```
pub fn validate_duration_secs(secs: f64) -> Result<Duration> {
    if !secs.is_finite() {
        return Err(Error::validation("duration", "must be a finite number"));
    }
    if secs < 0.0 {
        return Err(Error::validation("duration", "must not be negative"));
    }
    if secs > MAX_DURATION_SECS {
        return Err(Error::validation(
            "duration",
            format!("must be at most {MAX_DURATION_SECS} seconds"),
        ));
    }
    Ok(Duration::from_secs_f64(secs))
}

/// Validates the Exponential family's exponent.
///
/// # Errors
///
/// Returns `Err` if the exponent is NaN or infinite.
pub fn validate_exponent(exponent: f64) -> Result<f64> {
    if exponent.is_finite() {
        Ok(exponent)
    } else {
        Err(Error::validation("exponent", "must be a finite number"))
    }
}

/// Validates the Power family's power.
///
/// # Errors
///
/// Returns `Err` if the power is not finite or not strictly positive
/// (`t^0` would jump straight to 1).
pub fn validate_power(power: f64) -> Result<f64> {
    if !power.is_finite() {
        return Err(Error::validation("power", "must be a finite number"));
    }
    if power <= 0.0 {
        return Err(Error::validation("power", "must be greater than zero"));
    }
    Ok(power)
}

/// Validates a frame count for sampling.
///
/// # Errors
///
/// Returns `Err` if `frames` exceeds [`MAX_FRAMES`].
pub fn validate_frames(frames: u32) -> Result<u32> {
    if frames > MAX_FRAMES {
        Err(Error::validation(
            "frames",
            format!("must be at most {MAX_FRAMES}"),
        ))
    } else {
        Ok(frames)
    }
}
