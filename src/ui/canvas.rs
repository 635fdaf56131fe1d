// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Preview canvas.
//!
//! Shows the rendered buffer at the fixed logical display size. The texture
//! keeps the buffer's native resolution; only the on-screen rect is scaled.

/// Display the preview area.
pub fn show(
    ui: &mut egui::Ui,
    preview_texture: &Option<egui::TextureHandle>,
    display_size: egui::Vec2,
    loading_message: Option<&str>,
) {
    egui::Frame::canvas(ui.style()).show(ui, |ui| {
        let (image_rect, _response) = ui.allocate_exact_size(display_size, egui::Sense::hover());

        if let Some(texture) = preview_texture {
            ui.painter().image(
                texture.id(),
                image_rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        } else if let Some(message) = loading_message {
            ui.put(image_rect, egui::Spinner::new().size(32.0));
            ui.painter().text(
                image_rect.center() + egui::vec2(0.0, 32.0),
                egui::Align2::CENTER_TOP,
                message,
                egui::FontId::proportional(16.0),
                egui::Color32::from_gray(200),
            );
        }
    });
}
