//! Hue wheel: angle around the centre maps to hue, distance from the centre
//! maps to saturation, value is fixed at 1.0.
//!
//! Angles follow screen coordinates (y grows downward), so hue 0 sits at
//! 3 o'clock and increases clockwise.

use std::f64::consts::TAU;

use crate::{HSVColor, RGBAColor, RGBColor};

/// Offset from the wheel's centre together with the wheel's radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarPoint {
    pub dx: f64,
    pub dy: f64,
    pub radius: f64,
}

impl PolarPoint {
    pub fn new(dx: f64, dy: f64, radius: f64) -> Self {
        PolarPoint { dx, dy, radius }
    }

    /// Point in widget coordinates on a `width` x `height` wheel widget.
    pub fn from_widget(x: f64, y: f64, width: f64, height: f64) -> Self {
        let (cx, cy) = (width / 2.0, height / 2.0);
        PolarPoint {
            dx: x - cx,
            dy: y - cy,
            radius: cx.min(cy),
        }
    }

    /// Where `hsv` sits on a wheel of `radius`. Value is ignored.
    pub fn from_hsv(hsv: HSVColor, radius: f64) -> Self {
        let angle = hsv.hue.unwrap_or(0.0).to_radians();
        let r = hsv.sat.clamp(0.0, 1.0) * radius;
        PolarPoint {
            dx: angle.cos() * r,
            dy: angle.sin() * r,
            radius,
        }
    }

    pub fn distance(&self) -> f64 {
        self.dx.hypot(self.dy)
    }

    /// Boundary inclusive.
    pub fn is_inside(&self) -> bool {
        self.distance() <= self.radius
    }

    /// Hue and saturation at this point with value 1.0, or `None` outside the wheel.
    pub fn to_hsv(&self) -> Option<HSVColor> {
        if !self.is_inside() {
            return None;
        }
        let r = self.distance();

        let mut theta = self.dy.atan2(self.dx);
        if theta < 0.0 {
            theta += TAU;
        }
        let fraction = theta / TAU;
        let sat = if self.radius > 0.0 {
            (r / self.radius).min(1.0)
        } else {
            0.0
        };

        Some(HSVColor {
            hue: Some(fraction * 360.0),
            sat,
            val: 1.0,
        })
    }

    pub fn to_color(&self) -> Option<RGBColor> {
        self.to_hsv().map(|hsv| hsv.to_rgb())
    }
}

/// Color under the point `(dx, dy)` from the centre of a wheel of `radius`,
/// or `None` when the point lies outside it.
pub fn point_to_color(dx: f64, dy: f64, radius: f64) -> Option<RGBColor> {
    PolarPoint::new(dx, dy, radius).to_color()
}

/// One pixel of a `width` x `height` wheel image: the wheel color at full
/// opacity inside the circle, transparent outside.
pub fn render_wheel_pixel(x: u32, y: u32, width: u32, height: u32) -> RGBAColor {
    PolarPoint::from_widget(x as f64, y as f64, width as f64, height as f64)
        .to_color()
        .map_or(RGBAColor::TRANSPARENT, |c| c.with_alpha(u8::MAX))
}

/// Rasterize the whole wheel to a row-major RGBA8 buffer.
pub fn render_wheel(width: u32, height: u32) -> Vec<u8> {
    let mut buf = vec![0u8; width as usize * height as usize * 4];

    if width > 0 {
        for (i, px) in buf.chunks_exact_mut(4).enumerate() {
            let x = (i % width as usize) as u32;
            let y = (i / width as usize) as u32;
            px.copy_from_slice(&<[u8; 4]>::from(render_wheel_pixel(x, y, width, height)));
        }
    }

    log::debug!("Rendered {}x{} hue wheel", width, height);
    buf
}
