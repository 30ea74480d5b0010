use std::fmt;

use crate::error::Result;
use crate::math;
use crate::RGBColor;

/// Hue in degrees, saturation and value in 0.0–1.0.
///
/// `hue` is `None` for black, where no hue can be recovered. Other grays
/// report `Some(0.0)` with zero saturation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HSVColor {
    pub hue: Option<f64>,
    pub sat: f64,
    pub val: f64,
}

impl HSVColor {
    /// Validating constructor for user input. Hue accepts 0–360 inclusive.
    pub fn new(hue: f64, sat: f64, val: f64) -> Result<Self> {
        Ok(HSVColor {
            hue: Some(math::check_range("hue", hue, 0.0, 360.0)?),
            sat: math::check_range("saturation", sat, 0.0, 1.0)?,
            val: math::check_range("value", val, 0.0, 1.0)?,
        })
    }

    pub fn from_rgb(rgb: RGBColor) -> Self {
        let (r, g, b) = rgb.to_unit();

        let v = r.max(g.max(b));
        let c = v - r.min(g.min(b));

        if v == 0.0 {
            return HSVColor {
                hue: None,
                sat: 0.0,
                val: 0.0,
            };
        }

        let h = if c == 0.0 {
            0.0
        } else {
            math::hue_degrees(r, g, b, v, c)
        };

        HSVColor {
            hue: Some(h),
            sat: c / v,
            val: v,
        }
    }

    pub fn to_rgb(&self) -> RGBColor {
        let s = math::clamp_unit(self.sat);
        let v = math::clamp_unit(self.val);

        if s == 0.0 {
            return RGBColor::from_unit(v, v, v);
        }

        let h = math::wrap_degrees(self.hue.unwrap_or(0.0)) / 60.0;
        let sector = h.floor();
        let f = h - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match sector as u32 % 6 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        RGBColor::from_unit(r, g, b)
    }
}

impl fmt::Display for HSVColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.hue {
            Some(h) => write!(f, "H {:.2}", h)?,
            None => write!(f, "H undefined")?,
        }
        write!(f, "  S {:.2}  V {:.2}", self.sat, self.val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn green() {
        let hsv = HSVColor::from_rgb(RGBColor::new(0, 255, 0));
        assert_eq!(hsv.hue, Some(120.0));
        assert_eq!(hsv.sat, 1.0);
        assert_eq!(hsv.val, 1.0);
    }

    #[test]
    fn red_side_of_the_wrap() {
        // g < b on the red-max branch lands above 300 degrees
        let hsv = HSVColor::from_rgb(RGBColor::new(255, 0, 51));
        let h = hsv.hue.unwrap();
        assert!((h - 348.0).abs() < 1e-9, "hue was {h}");
    }

    #[test]
    fn black_has_undefined_hue() {
        let hsv = HSVColor::from_rgb(RGBColor::BLACK);
        assert_eq!(hsv.hue, None);
        assert_eq!(hsv.sat, 0.0);
        assert_eq!(hsv.to_rgb(), RGBColor::BLACK);
        assert_eq!(hsv.to_string(), "H undefined  S 0.00  V 0.00");
    }

    #[test]
    fn grays_are_unsaturated() {
        for x in 1..=255u8 {
            let hsv = HSVColor::from_rgb(RGBColor::new(x, x, x));
            assert_eq!(hsv.sat, 0.0, "gray {x}");
            assert_eq!(hsv.hue, Some(0.0), "gray {x}");
            assert_eq!(hsv.to_rgb(), RGBColor::new(x, x, x));
        }
    }

    #[test]
    fn achromatic_mid_gray() {
        let hsv = HSVColor::new(0.0, 0.0, 0.5).unwrap();
        assert_eq!(hsv.to_rgb(), RGBColor::new(128, 128, 128));
    }

    #[test]
    fn sectors() {
        let cases = [
            (0.0, RGBColor::new(255, 0, 0)),
            (60.0, RGBColor::new(255, 255, 0)),
            (120.0, RGBColor::new(0, 255, 0)),
            (180.0, RGBColor::new(0, 255, 255)),
            (240.0, RGBColor::new(0, 0, 255)),
            (300.0, RGBColor::new(255, 0, 255)),
            (360.0, RGBColor::new(255, 0, 0)),
        ];
        for (hue, expected) in cases {
            let hsv = HSVColor::new(hue, 1.0, 1.0).unwrap();
            assert_eq!(hsv.to_rgb(), expected, "hue {hue}");
        }
    }

    #[test]
    fn negative_hue_wraps() {
        let hsv = HSVColor {
            hue: Some(-120.0),
            sat: 1.0,
            val: 1.0,
        };
        assert_eq!(hsv.to_rgb(), RGBColor::new(0, 0, 255));
    }

    #[test]
    fn validating_constructor() {
        assert!(HSVColor::new(360.0, 1.0, 1.0).is_ok());
        assert!(HSVColor::new(361.0, 1.0, 1.0).is_err());
        assert!(HSVColor::new(10.0, 1.5, 1.0).is_err());
    }
}
