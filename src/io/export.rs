// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! PNG export of the rendered buffer.
//!
//! Exports always use the buffer at its native resolution; the preview's
//! display size never affects the output.

use anyhow::{Context, Result};
use image::{ImageFormat, RgbaImage};
use std::io::Cursor;
use std::path::Path;

/// Encode the buffer as PNG bytes.
pub fn encode_png(buffer: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Cursor::new(Vec::new());
    buffer
        .write_to(&mut bytes, ImageFormat::Png)
        .context("Failed to encode PNG")?;
    Ok(bytes.into_inner())
}

/// Write the buffer to `path` as PNG.
pub fn export_png(buffer: &RgbaImage, path: &Path) -> Result<()> {
    let bytes = encode_png(buffer)?;
    std::fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{caption::Captions, frame::ReferenceFrame};
    use crate::render::{text::CaptionFont, Renderer};
    use image::Rgba;

    #[test]
    fn test_export_keeps_native_resolution() {
        let renderer = Renderer::new(ReferenceFrame::STANDARD, CaptionFont::bundled().unwrap());
        let background = RgbaImage::from_pixel(720, 1280, Rgba([255, 255, 255, 255]));
        let buffer = renderer.render(&background, &Captions::default()).unwrap();

        let bytes = encode_png(&buffer).unwrap();
        assert_eq!(
            image::guess_format(&bytes).unwrap(),
            ImageFormat::Png
        );

        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (720, 1280));
        assert_eq!(decoded, buffer);
    }

    #[test]
    fn test_export_png_writes_file() {
        let buffer = RgbaImage::from_pixel(40, 30, Rgba([1, 2, 3, 255]));
        let path = std::env::temp_dir().join(format!("captioner-export-{}.png", std::process::id()));

        export_png(&buffer, &path).unwrap();
        let reloaded = image::open(&path).unwrap().to_rgba8();
        std::fs::remove_file(&path).ok();

        assert_eq!(reloaded.dimensions(), (40, 30));
    }
}
