// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Logical reference frame.
//!
//! Caption anchors and font sizes are authored against this fixed canvas,
//! independent of the resolution of the background image.

/// Logical canvas width.
pub const LOGICAL_WIDTH: f64 = 360.0;

/// Logical canvas height.
pub const LOGICAL_HEIGHT: f64 = 640.0;

/// Fixed logical coordinate space for caption layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceFrame {
    pub width: f64,
    pub height: f64,
}

impl ReferenceFrame {
    /// The 360 × 640 frame every caption slot is authored against.
    pub const STANDARD: Self = Self {
        width: LOGICAL_WIDTH,
        height: LOGICAL_HEIGHT,
    };
}

impl Default for ReferenceFrame {
    fn default() -> Self {
        Self::STANDARD
    }
}
