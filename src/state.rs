//! The currently displayed color in every model at once.
//!
//! A front end owns a [`ColorState`], writes the user's edit into one model
//! and calls [`ColorState::recompute`] naming that model. The edited model is
//! folded back into RGB and every other model is derived again from RGB.

use std::fmt;

use crate::{CMYKColor, HLSColor, HSVColor, RGBColor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorModel {
    Rgb,
    Cmyk,
    Hsv,
    Hls,
}

impl fmt::Display for ColorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorModel::Rgb => "RGB",
            ColorModel::Cmyk => "CMYK",
            ColorModel::Hsv => "HSV",
            ColorModel::Hls => "HLS",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorState {
    pub rgb: RGBColor,
    pub cmyk: CMYKColor,
    pub hsv: HSVColor,
    pub hls: HLSColor,
}

impl ColorState {
    pub fn from_rgb(rgb: RGBColor) -> Self {
        ColorState {
            rgb,
            cmyk: CMYKColor::from_rgb(rgb),
            hsv: HSVColor::from_rgb(rgb),
            hls: HLSColor::from_rgb(rgb),
        }
    }

    /// Re-derive every model other than `changed` from it.
    ///
    /// The `changed` model keeps the values it was given, even where 8-bit
    /// RGB cannot represent them exactly.
    #[must_use]
    pub fn recompute(self, changed: ColorModel) -> Self {
        let rgb = match changed {
            ColorModel::Rgb => self.rgb,
            ColorModel::Cmyk => self.cmyk.to_rgb(),
            ColorModel::Hsv => self.hsv.to_rgb(),
            ColorModel::Hls => self.hls.to_rgb(),
        };
        log::trace!("{} edited, canonical color is now {}", changed, rgb);

        let mut next = Self::from_rgb(rgb);
        match changed {
            ColorModel::Rgb => {}
            ColorModel::Cmyk => next.cmyk = self.cmyk,
            ColorModel::Hsv => next.hsv = self.hsv,
            ColorModel::Hls => next.hls = self.hls,
        }
        next
    }

    #[must_use]
    pub fn with_rgb(self, rgb: RGBColor) -> Self {
        ColorState { rgb, ..self }.recompute(ColorModel::Rgb)
    }

    #[must_use]
    pub fn with_cmyk(self, cmyk: CMYKColor) -> Self {
        ColorState { cmyk, ..self }.recompute(ColorModel::Cmyk)
    }

    #[must_use]
    pub fn with_hsv(self, hsv: HSVColor) -> Self {
        ColorState { hsv, ..self }.recompute(ColorModel::Hsv)
    }

    #[must_use]
    pub fn with_hls(self, hls: HLSColor) -> Self {
        ColorState { hls, ..self }.recompute(ColorModel::Hls)
    }
}

impl Default for ColorState {
    fn default() -> Self {
        Self::from_rgb(RGBColor::WHITE)
    }
}

impl fmt::Display for ColorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RGB   {}", self.rgb)?;
        writeln!(f, "CMYK  {}", self.cmyk)?;
        writeln!(f, "HSV   {}", self.hsv)?;
        write!(f, "HLS   {}", self.hls)
    }
}
