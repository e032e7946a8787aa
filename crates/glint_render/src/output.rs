//! Binary PPM (P6) serialization of a framebuffer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::renderer::{color_to_rgb, Framebuffer};

/// Errors from writing a rendered image.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to write PPM image: {0}")]
    Io(#[from] std::io::Error),
}

/// Write a framebuffer as binary PPM (P6) to any writer.
///
/// Header is `P6\n<width> <height>\n255\n`, followed by 3 raw bytes
/// per pixel in row-major order, top row first.
pub fn write_ppm<W: Write>(writer: &mut W, image: &Framebuffer) -> Result<(), OutputError> {
    write!(writer, "P6\n{} {}\n255\n", image.width, image.height)?;
    for color in image.pixels() {
        writer.write_all(&color_to_rgb(*color))?;
    }
    Ok(())
}

/// Write a framebuffer as binary PPM to a file.
pub fn save_ppm<P: AsRef<Path>>(image: &Framebuffer, path: P) -> Result<(), OutputError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_ppm(&mut writer, image)?;
    writer.flush()?;
    Ok(())
}
