//! # colorlab
//!
//! Conversions between RGB, CMYK, HSV and HLS, plus a hue wheel that maps a
//! point around a circle to a color.
//!
//! RGB with 8-bit channels is canonical: every model converts through it.
//! Fractions going back to 8 bits are clamped into 0.0–1.0 and rounded to the
//! nearest integer; hue is wrapped into 0–360 degrees. All conversions are
//! pure and never fail.
//!
//! ```
//! use colorlab::{HLSColor, RGBColor};
//!
//! let hls = HLSColor::from_rgb(RGBColor::new(0, 0, 255));
//! assert_eq!((hls.hue, hls.lightness, hls.saturation), (240.0, 0.5, 1.0));
//! assert_eq!(hls.to_rgb(), RGBColor::new(0, 0, 255));
//! ```

mod cmyk;
mod error;
mod hls;
mod hsv;
pub mod img;
mod math;
mod rgb;
mod state;
pub mod wheel;

pub use cmyk::CMYKColor;
pub use error::{ColorError, Result};
pub use hls::HLSColor;
pub use hsv::HSVColor;
pub use rgb::{RGBAColor, RGBColor};
pub use state::{ColorModel, ColorState};
pub use wheel::{point_to_color, render_wheel_pixel, PolarPoint};
