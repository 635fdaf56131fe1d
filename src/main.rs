// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Captioner - caption overlay editor
//!
//! A desktop application that places three editable captions on a fixed
//! background image and exports the result as a full-resolution PNG.

mod app;
mod config;
mod io;
mod models;
mod render;
mod ui;
mod util;

use anyhow::Result;
use app::CaptionApp;
use config::EditorConfig;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let config = EditorConfig::default();
    let options = config.native_options();

    // Run the application
    eframe::run_native(
        "Captioner",
        options,
        Box::new(|cc| Ok(Box::new(CaptionApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
