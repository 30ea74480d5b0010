use std::fmt;

use crate::error::Result;
use crate::math;
use crate::RGBColor;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HLSColor {
    pub hue: f64,
    pub lightness: f64,
    pub saturation: f64,
}

impl HLSColor {
    /// Validating constructor for user input. Hue accepts 0–360 inclusive.
    pub fn new(hue: f64, lightness: f64, saturation: f64) -> Result<Self> {
        Ok(HLSColor {
            hue: math::check_range("hue", hue, 0.0, 360.0)?,
            lightness: math::check_range("lightness", lightness, 0.0, 1.0)?,
            saturation: math::check_range("saturation", saturation, 0.0, 1.0)?,
        })
    }

    pub fn from_rgb(rgb: RGBColor) -> Self {
        let (r, g, b) = rgb.to_unit();

        let max = r.max(g.max(b));
        let min = r.min(g.min(b));
        let l = (max + min) / 2.0;

        if max == min {
            return HLSColor {
                hue: 0.0,
                lightness: l,
                saturation: 0.0,
            };
        }

        let delta = max - min;
        let s = if l < 0.5 {
            delta / (max + min)
        } else {
            delta / (2.0 - max - min)
        };

        HLSColor {
            hue: math::hue_degrees(r, g, b, max, delta),
            lightness: l,
            saturation: s,
        }
    }

    pub fn to_rgb(&self) -> RGBColor {
        let l = math::clamp_unit(self.lightness);
        let s = math::clamp_unit(self.saturation);

        if s == 0.0 {
            return RGBColor::from_unit(l, l, l);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        let hk = math::wrap_degrees(self.hue) / 360.0;

        RGBColor::from_unit(
            hue_to_channel(p, q, wrap_unit(hk + 1.0 / 3.0)),
            hue_to_channel(p, q, wrap_unit(hk)),
            hue_to_channel(p, q, wrap_unit(hk - 1.0 / 3.0)),
        )
    }
}

fn wrap_unit(t: f64) -> f64 {
    if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    }
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

impl fmt::Display for HLSColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "H {:.2}  L {:.2}  S {:.2}",
            self.hue, self.lightness, self.saturation
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blue() {
        let hls = HLSColor::from_rgb(RGBColor::new(0, 0, 255));
        assert_eq!(hls.hue, 240.0);
        assert_eq!(hls.lightness, 0.5);
        assert_eq!(hls.saturation, 1.0);
        assert_eq!(hls.to_rgb(), RGBColor::new(0, 0, 255));
        assert_eq!(hls.to_string(), "H 240.00  L 0.50  S 1.00");
    }

    #[test]
    fn grays() {
        for x in [0u8, 1, 127, 128, 254, 255] {
            let hls = HLSColor::from_rgb(RGBColor::new(x, x, x));
            assert_eq!(hls.hue, 0.0);
            assert_eq!(hls.saturation, 0.0);
            assert_eq!(hls.to_rgb(), RGBColor::new(x, x, x));
        }
    }

    #[test]
    fn light_and_dark_saturation_branches() {
        // l < 0.5
        let dark = HLSColor::from_rgb(RGBColor::new(128, 0, 0));
        assert!((dark.saturation - 1.0).abs() < 1e-12);
        // l >= 0.5
        let light = HLSColor::from_rgb(RGBColor::new(255, 128, 128));
        assert!((light.saturation - 1.0).abs() < 1e-12);
        assert_eq!(light.hue, 0.0);
    }

    #[test]
    fn secondaries() {
        let cases = [
            (60.0, RGBColor::new(255, 255, 0)),
            (180.0, RGBColor::new(0, 255, 255)),
            (300.0, RGBColor::new(255, 0, 255)),
            (360.0, RGBColor::new(255, 0, 0)),
        ];
        for (hue, expected) in cases {
            let hls = HLSColor::new(hue, 0.5, 1.0).unwrap();
            assert_eq!(hls.to_rgb(), expected, "hue {hue}");
        }
    }

    #[test]
    fn validating_constructor() {
        assert!(HLSColor::new(0.0, 1.0, 0.0).is_ok());
        assert!(HLSColor::new(-1.0, 0.5, 0.5).is_err());
        assert!(HLSColor::new(0.0, 0.5, 1.0001).is_err());
    }
}
