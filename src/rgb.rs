use std::fmt;

use crate::math;

/// 8-bit RGB, the canonical model every other model converts through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RGBColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl RGBColor {
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        RGBColor { red, green, blue }
    }

    /// Build from 0.0–1.0 fractions using the crate-wide rounding rule.
    pub(crate) fn from_unit(r: f64, g: f64, b: f64) -> Self {
        RGBColor {
            red: math::to_channel(r),
            green: math::to_channel(g),
            blue: math::to_channel(b),
        }
    }

    pub(crate) fn to_unit(self) -> (f64, f64, f64) {
        (
            math::to_unit(self.red),
            math::to_unit(self.green),
            math::to_unit(self.blue),
        )
    }

    pub fn is_achromatic(&self) -> bool {
        self.red == self.green && self.green == self.blue
    }

    pub fn with_alpha(self, alpha: u8) -> RGBAColor {
        RGBAColor {
            red: self.red,
            green: self.green,
            blue: self.blue,
            alpha,
        }
    }
}

impl Default for RGBColor {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<[u8; 3]> for RGBColor {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        RGBColor { red, green, blue }
    }
}

impl From<RGBColor> for [u8; 3] {
    fn from(c: RGBColor) -> Self {
        [c.red, c.green, c.blue]
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R {}  G {}  B {}", self.red, self.green, self.blue)
    }
}

/// RGB plus pass-through opacity, as written into wheel rasters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RGBAColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl RGBAColor {
    pub const TRANSPARENT: Self = RGBAColor {
        red: 0,
        green: 0,
        blue: 0,
        alpha: 0,
    };

    pub fn is_opaque(&self) -> bool {
        self.alpha == u8::MAX
    }
}

impl From<RGBAColor> for [u8; 4] {
    fn from(c: RGBAColor) -> Self {
        [c.red, c.green, c.blue, c.alpha]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_roundtrip_is_exact() {
        let c = RGBColor::new(12, 200, 255);
        let (r, g, b) = c.to_unit();
        assert_eq!(RGBColor::from_unit(r, g, b), c);
    }

    #[test]
    fn alpha_passthrough() {
        let c = RGBColor::new(1, 2, 3).with_alpha(255);
        assert!(c.is_opaque());
        assert_eq!(<[u8; 4]>::from(c), [1, 2, 3, 255]);
        assert!(!RGBAColor::TRANSPARENT.is_opaque());
    }

    #[test]
    fn display() {
        assert_eq!(RGBColor::new(255, 0, 7).to_string(), "R 255  G 0  B 7");
        assert!(RGBColor::new(9, 9, 9).is_achromatic());
        assert_eq!(RGBColor::default(), RGBColor::WHITE);
    }
}
