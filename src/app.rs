// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module owns the editable caption state, loads the background image
//! in the background, schedules repaints of the render buffer and handles
//! the PNG download.

use crate::config::EditorConfig;
use crate::models::caption::Captions;
use crate::render::{
    session::RenderSession,
    text::{self, CaptionFont, FaceData},
    Renderer,
};
use crate::ui::{canvas, form};
use image::RgbaImage;
use std::sync::mpsc::{channel, Receiver};

/// egui font name for the installed system caption face.
const UI_FONT_NAME: &str = "caption-face";

/// Main application state.
pub struct CaptionApp {
    config: EditorConfig,

    /// Caption texts edited through the form
    captions: Captions,

    /// Caption renderer, `None` if no font could be loaded
    renderer: Option<Renderer>,

    /// Background image and the buffer rendered from it
    session: RenderSession,

    /// Texture showing the render buffer
    preview_texture: Option<egui::TextureHandle>,

    /// Receiver for background image loading
    image_loader: Option<Receiver<Result<RgbaImage, String>>>,

    /// Loading state message
    loading_message: Option<String>,
}

impl CaptionApp {
    /// Create the application and start loading the background image.
    pub fn new(cc: &eframe::CreationContext<'_>, config: EditorConfig) -> Self {
        let system_face = text::find_system_face();
        if let Some(ref face) = system_face {
            log::info!("Using system font {} (bold: {})", face.name, face.bold);
            install_ui_font(&cc.egui_ctx, face);
        } else {
            log::warn!("No system sans-serif font found, using bundled font");
        }

        let face = system_face.or_else(text::bundled_face);
        let renderer = match face.map(|face| CaptionFont::from_face(&face)) {
            Some(Ok(font)) => Some(Renderer::new(config.frame, font)),
            Some(Err(e)) => {
                log::warn!("Captions disabled: {:#}", e);
                None
            }
            None => {
                log::warn!("Captions disabled: no font available");
                None
            }
        };

        let mut app = Self {
            config,
            captions: Captions::default(),
            renderer,
            session: RenderSession::new(),
            preview_texture: None,
            image_loader: None,
            loading_message: None,
        };
        app.load_background();
        app
    }

    /// Load the configured background image (asynchronously).
    fn load_background(&mut self) {
        let (sender, receiver) = channel();
        self.image_loader = Some(receiver);
        self.loading_message = Some("Loading image...".to_string());

        let path = self.config.background_path.clone();

        // Spawn background thread for loading
        std::thread::spawn(move || {
            let result = crate::io::media::load_image(&path).map_err(|e| format!("{:#}", e));
            if let Ok(ref image) = result {
                log::info!("Loaded image: {} ({}x{})", path.display(), image.width(), image.height());
            }
            let _ = sender.send(result);
        });
    }

    /// Hand a finished background load to the render session.
    fn poll_background(&mut self) {
        let Some(ref receiver) = self.image_loader else {
            return;
        };
        let Ok(result) = receiver.try_recv() else {
            return;
        };

        self.image_loader = None;
        self.loading_message = None;

        match result {
            Ok(image) => self.session.set_background(image),
            Err(e) => log::error!("Failed to load image: {}", e),
        }
    }

    /// Repaint the buffer if the background or any caption changed.
    fn refresh_preview(&mut self, ctx: &egui::Context) {
        if !self.session.refresh(self.renderer.as_ref(), &self.captions) {
            return;
        }
        let Some(buffer) = self.session.buffer() else {
            return;
        };

        let size = [buffer.width() as usize, buffer.height() as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, buffer.as_raw());

        match self.preview_texture {
            Some(ref mut texture) => texture.set(color_image, egui::TextureOptions::LINEAR),
            None => {
                self.preview_texture = Some(ctx.load_texture(
                    "caption_preview",
                    color_image,
                    egui::TextureOptions::LINEAR,
                ));
            }
        }
    }

    /// Save the render buffer as PNG at its native resolution.
    fn download(&self) {
        let Some(buffer) = self.session.buffer() else {
            log::debug!("Nothing rendered yet, skipping download");
            return;
        };

        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG", &["png"])
            .set_file_name(&self.config.export_file_name)
            .save_file()
        else {
            return;
        };

        match crate::io::export::export_png(buffer, &path) {
            Ok(()) => log::info!(
                "Exported {}x{} image to {}",
                buffer.width(),
                buffer.height(),
                path.display()
            ),
            Err(e) => log::error!("Failed to export image: {:#}", e),
        }
    }
}

/// Make the caption face the first proportional font so Korean labels and
/// captions display in the form.
fn install_ui_font(ctx: &egui::Context, face: &FaceData) {
    let mut fonts = egui::FontDefinitions::default();
    let mut data = egui::FontData::from_owned(face.bytes.clone());
    data.index = face.index;

    fonts.font_data.insert(UI_FONT_NAME.to_string(), data);
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, UI_FONT_NAME.to_string());

    ctx.set_fonts(fonts);
}

impl eframe::App for CaptionApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_background();

        // Request repaint if still loading (to update spinner)
        if self.loading_message.is_some() {
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(12.0);
                    ui.heading(egui::RichText::new(&self.config.window_title).strong());
                    ui.add_space(12.0);

                    self.refresh_preview(ctx);
                    canvas::show(
                        ui,
                        &self.preview_texture,
                        self.config.preview_size(),
                        self.loading_message.as_deref(),
                    );

                    ui.add_space(16.0);
                    let action = form::show(ui, &mut self.captions);
                    if let form::FormAction::Download = action {
                        self.download();
                    }
                });
            });
        });

        // Edits made this frame are rendered on the next one
        if self.session.is_stale(&self.captions) {
            ctx.request_repaint();
        }
    }
}
