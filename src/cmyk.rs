use std::fmt;

use crate::error::Result;
use crate::math;
use crate::RGBColor;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CMYKColor {
    pub cyan: f64,
    pub magenta: f64,
    pub yellow: f64,
    pub key: f64,
}

impl CMYKColor {
    /// Validating constructor for user input; every component must be in 0.0–1.0.
    pub fn new(cyan: f64, magenta: f64, yellow: f64, key: f64) -> Result<Self> {
        Ok(CMYKColor {
            cyan: math::check_range("cyan", cyan, 0.0, 1.0)?,
            magenta: math::check_range("magenta", magenta, 0.0, 1.0)?,
            yellow: math::check_range("yellow", yellow, 0.0, 1.0)?,
            key: math::check_range("key", key, 0.0, 1.0)?,
        })
    }

    pub fn from_rgb(rgb: RGBColor) -> Self {
        let (r, g, b) = rgb.to_unit();
        let key = 1.0 - r.max(g.max(b));

        // pure black: cyan, magenta and yellow are meaningless
        if key == 1.0 {
            return CMYKColor {
                cyan: 0.0,
                magenta: 0.0,
                yellow: 0.0,
                key,
            };
        }

        CMYKColor {
            cyan: (1.0 - r - key) / (1.0 - key),
            magenta: (1.0 - g - key) / (1.0 - key),
            yellow: (1.0 - b - key) / (1.0 - key),
            key,
        }
    }

    pub fn to_rgb(&self) -> RGBColor {
        let k = 1.0 - math::clamp_unit(self.key);
        RGBColor::from_unit(
            (1.0 - math::clamp_unit(self.cyan)) * k,
            (1.0 - math::clamp_unit(self.magenta)) * k,
            (1.0 - math::clamp_unit(self.yellow)) * k,
        )
    }
}

impl fmt::Display for CMYKColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "C {:.2}  M {:.2}  Y {:.2}  K {:.2}",
            self.cyan, self.magenta, self.yellow, self.key
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn red() {
        let cmyk = CMYKColor::from_rgb(RGBColor::new(255, 0, 0));
        assert_eq!(
            cmyk,
            CMYKColor {
                cyan: 0.0,
                magenta: 1.0,
                yellow: 1.0,
                key: 0.0
            }
        );
        assert_eq!(cmyk.to_rgb(), RGBColor::new(255, 0, 0));
    }

    #[test]
    fn black_has_no_ink_but_key() {
        let cmyk = CMYKColor::from_rgb(RGBColor::BLACK);
        assert_eq!((cmyk.cyan, cmyk.magenta, cmyk.yellow, cmyk.key), (0.0, 0.0, 0.0, 1.0));
        assert_eq!(cmyk.to_rgb(), RGBColor::BLACK);
    }

    #[test]
    fn white_is_blank() {
        let cmyk = CMYKColor::from_rgb(RGBColor::WHITE);
        assert_eq!(cmyk.key, 0.0);
        assert_eq!(cmyk.to_string(), "C 0.00  M 0.00  Y 0.00  K 0.00");
    }

    #[test]
    fn rounds_to_nearest() {
        // 255 * 0.5 = 127.5
        let cmyk = CMYKColor::new(0.5, 0.0, 1.0, 0.0).unwrap();
        assert_eq!(cmyk.to_rgb(), RGBColor::new(128, 255, 0));
    }

    #[test]
    fn out_of_range_is_clamped_in_conversion() {
        let cmyk = CMYKColor {
            cyan: -1.0,
            magenta: 2.0,
            yellow: 0.0,
            key: 0.0,
        };
        assert_eq!(cmyk.to_rgb(), RGBColor::new(255, 0, 255));
    }

    #[test]
    fn validating_constructor() {
        assert!(CMYKColor::new(0.0, 0.0, 0.0, 1.0).is_ok());
        assert!(CMYKColor::new(0.0, 1.2, 0.0, 0.0).is_err());
        assert!(CMYKColor::new(0.0, 0.0, 0.0, -0.1).is_err());
    }
}
