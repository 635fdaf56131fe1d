// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Background image loading.
//!
//! This module decodes the background asset into an RGBA buffer at its
//! native resolution, ready for rendering and for display in egui.

use anyhow::{bail, Context, Result};
use image::RgbaImage;
use std::path::Path;

/// Load an image file and convert it to RGBA8 at its native resolution.
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    let decoded = image::open(path)
        .with_context(|| format!("Failed to decode image {}", path.display()))?;
    let image = decoded.to_rgba8();
    let (width, height) = image.dimensions();

    if width == 0 || height == 0 {
        bail!("Image {} has no pixels ({}x{})", path.display(), width, height);
    }

    Ok(image)
}
