// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module maps caption anchors and font sizes from the logical
//! reference frame onto the pixel grid of the background image.

use crate::models::caption::{CaptionSlot, VerticalAnchor};
use crate::models::frame::ReferenceFrame;

/// Ratio of native image size to logical frame size, per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactors {
    pub x: f64,
    pub y: f64,
}

/// Where and how large a caption is drawn, in device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Left edge of the text.
    pub x: f64,
    /// Top edge of the text line.
    pub y: f64,
    /// Font size in pixels.
    pub font_px: f64,
}

/// Compute the scale factors for an image of `width` × `height` pixels.
pub fn scale_factors(width: u32, height: u32, frame: &ReferenceFrame) -> ScaleFactors {
    ScaleFactors {
        x: width as f64 / frame.width,
        y: height as f64 / frame.height,
    }
}

/// Place a caption slot on an image of the given pixel height.
///
/// Font size follows the vertical scale only, so captions are never
/// stretched horizontally on images with a different aspect ratio.
pub fn place(slot: &CaptionSlot, scale: ScaleFactors, image_height: u32) -> Placement {
    let font_px = slot.font_size * scale.y;
    let y = match slot.anchor.vertical {
        VerticalAnchor::FromTop(y) => y * scale.y,
        VerticalAnchor::FromBottom(offset) => image_height as f64 - offset * scale.y - font_px,
    };

    Placement {
        x: slot.anchor.x * scale.x,
        y,
        font_px,
    }
}
