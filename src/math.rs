//! Shared numeric helpers for the color models.
//! Fractions are f64 in 0.0–1.0, hue is degrees in 0.0–360.0.

use crate::error::{ColorError, Result};

/// 8-bit channel → 0.0–1.0.
pub(crate) fn to_unit(channel: u8) -> f64 {
    channel as f64 / 255.0
}

/// 0.0–1.0 → 8-bit channel. Clamps first, then rounds half away from zero.
pub(crate) fn to_channel(unit: f64) -> u8 {
    (clamp_unit(unit) * 255.0).round() as u8
}

/// Clamp into 0.0–1.0. NaN maps to 0.0.
pub(crate) fn clamp_unit(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

/// Wrap degrees into 0.0..360.0.
pub(crate) fn wrap_degrees(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let h = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}

/// Six-way piecewise hue in degrees, shared by HSV and HLS.
///
/// `max` must equal one of the channels and `delta` must be non-zero.
pub(crate) fn hue_degrees(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    let h = if max == r {
        let h = (g - b) / delta;
        if g < b {
            h + 6.0
        } else {
            h
        }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    h * 60.0
}

/// Validate a user-supplied component before it enters the core.
pub(crate) fn check_range(channel: &'static str, value: f64, min: f64, max: f64) -> Result<f64> {
    if value.is_nan() || value < min || value > max {
        return Err(ColorError::OutOfRange {
            channel,
            value,
            min,
            max,
        });
    }
    Ok(value)
}
