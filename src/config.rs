// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Compiled-in editor configuration.

use crate::models::frame::ReferenceFrame;
use std::path::PathBuf;

/// Background asset shown for the whole session.
pub const BACKGROUND_PATH: &str = "assets/original-image.png";

/// Default file name offered when saving the composited image.
pub const EXPORT_FILE_NAME: &str = "박지훈의실험실_결과물.png";

pub const WINDOW_TITLE: &str = "박지훈의 실험실";

/// Editor settings handed to the application at startup.
#[derive(Debug, Clone)]
pub struct EditorConfig {
    pub background_path: PathBuf,
    pub export_file_name: String,
    pub frame: ReferenceFrame,
    pub window_title: String,
    pub window_size: [f32; 2],
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            background_path: PathBuf::from(BACKGROUND_PATH),
            export_file_name: EXPORT_FILE_NAME.to_string(),
            frame: ReferenceFrame::STANDARD,
            window_title: WINDOW_TITLE.to_string(),
            window_size: [480.0, 960.0],
        }
    }
}

impl EditorConfig {
    /// On-screen size of the preview, in points.
    pub fn preview_size(&self) -> egui::Vec2 {
        egui::vec2(self.frame.width as f32, self.frame.height as f32)
    }

    /// Native window options derived from this configuration.
    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(self.window_size)
                .with_min_inner_size([400.0, 800.0])
                .with_title(self.window_title.clone()),
            ..Default::default()
        }
    }
}
