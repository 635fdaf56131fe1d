// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Render scheduling.
//!
//! A repaint is due whenever the background changes or the caption snapshot
//! differs from the one last rendered. Repaints run to completion with the
//! captions current at draw time, so the last edit always wins.

use super::Renderer;
use crate::models::caption::Captions;
use image::RgbaImage;

/// Active background plus the buffer rendered from it.
#[derive(Default)]
pub struct RenderSession {
    background: Option<RgbaImage>,
    /// Captions the current buffer was rendered with
    snapshot: Option<Captions>,
    buffer: Option<RgbaImage>,
}

impl RenderSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the background. The next refresh repaints from scratch.
    pub fn set_background(&mut self, background: RgbaImage) {
        self.background = Some(background);
        self.snapshot = None;
        self.buffer = None;
    }

    /// Whether `captions` would trigger a repaint.
    pub fn is_stale(&self, captions: &Captions) -> bool {
        self.background.is_some() && self.snapshot.as_ref() != Some(captions)
    }

    /// Repaint if stale. Returns `true` when a new buffer was produced.
    ///
    /// Without a renderer the pass is skipped, but the snapshot is still
    /// recorded so the same captions are not retried every frame.
    pub fn refresh(&mut self, renderer: Option<&Renderer>, captions: &Captions) -> bool {
        if !self.is_stale(captions) {
            return false;
        }
        let Some(background) = self.background.as_ref() else {
            return false;
        };

        let buffer = match renderer {
            Some(renderer) => renderer.render(background, captions),
            None => {
                log::debug!("Skipping render: no caption font");
                None
            }
        };
        self.snapshot = Some(captions.clone());

        match buffer {
            Some(buffer) => {
                self.buffer = Some(buffer);
                true
            }
            None => false,
        }
    }

    /// The most recently rendered buffer, at native resolution.
    pub fn buffer(&self) -> Option<&RgbaImage> {
        self.buffer.as_ref()
    }
}
