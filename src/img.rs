use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::{ColorError, Result};
use crate::{wheel, RGBColor};

/// Write a tightly packed 8-bit RGB or RGBA buffer as PNG.
fn write_png(buf: &[u8], width: u32, height: u32, color: png::ColorType, path: &Path) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(ColorError::EmptyImage { width, height });
    }

    let file = File::create(path)?;
    let w = &mut BufWriter::new(file);

    let mut encoder = png::Encoder::new(w, width, height);
    encoder.set_color(color);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(buf)?;
    writer.finish()?;

    log::info!("Wrote {}x{} image to {}", width, height, path.display());
    Ok(())
}

/// Render the hue wheel and save it with transparent corners.
pub fn write_wheel(width: u32, height: u32, path: &Path) -> Result<()> {
    let buf = wheel::render_wheel(width, height);
    write_png(&buf, width, height, png::ColorType::Rgba, path)
}

/// Save a `size` x `size` square filled with `color`.
pub fn write_swatch(color: RGBColor, size: u32, path: &Path) -> Result<()> {
    let px = <[u8; 3]>::from(color);
    let buf: Vec<u8> = std::iter::repeat(px)
        .take(size as usize * size as usize)
        .flatten()
        .collect();
    write_png(&buf, size, size, png::ColorType::Rgb, path)
}
