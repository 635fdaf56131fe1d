// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Caption compositing.
//!
//! The renderer is a pure function of background image, reference frame and
//! caption slots. It produces one buffer at the image's native resolution
//! which backs both the on-screen preview and the PNG export.

pub mod session;
pub mod text;

use crate::models::{caption::{CaptionSlot, Captions}, frame::ReferenceFrame};
use crate::util::geometry;
use image::{imageops, RgbaImage};
use text::CaptionFont;

/// Composite `slots` onto `background` at its native resolution.
///
/// Returns `None` when the background has no pixels yet.
pub fn render(
    background: &RgbaImage,
    frame: &ReferenceFrame,
    slots: &[CaptionSlot],
    font: &CaptionFont,
) -> Option<RgbaImage> {
    let (width, height) = background.dimensions();
    if width == 0 || height == 0 {
        log::debug!("Skipping render: background not loaded");
        return None;
    }

    let scale = geometry::scale_factors(width, height, frame);

    // Start from a cleared buffer and paint the background over it
    let mut target = RgbaImage::new(width, height);
    imageops::overlay(&mut target, background, 0, 0);

    for slot in slots {
        let placement = geometry::place(slot, scale, height);
        font.draw(&mut target, &slot.text, &placement);
    }

    Some(target)
}

/// Renderer bound to a reference frame and a resolved caption font.
pub struct Renderer {
    frame: ReferenceFrame,
    font: CaptionFont,
}

impl Renderer {
    pub fn new(frame: ReferenceFrame, font: CaptionFont) -> Self {
        Self { frame, font }
    }

    /// Render a caption snapshot over `background`.
    pub fn render(&self, background: &RgbaImage, captions: &Captions) -> Option<RgbaImage> {
        render(background, &self.frame, captions.slots(), &self.font)
    }
}
