// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Caption text inputs and the download button.

use crate::models::caption::{Captions, SlotRole};

/// Width of the form, matching the preview width.
const FORM_WIDTH: f32 = 360.0;

/// Result of form interaction.
pub enum FormAction {
    None,
    Download,
}

/// Display one text input per caption slot, bound live to its text.
pub fn show(ui: &mut egui::Ui, captions: &mut Captions) -> FormAction {
    let mut action = FormAction::None;

    ui.allocate_ui(egui::vec2(FORM_WIDTH, 0.0), |ui| {
        ui.set_width(FORM_WIDTH);
        ui.spacing_mut().item_spacing.y = 6.0;

        for role in SlotRole::ALL {
            ui.label(egui::RichText::new(role.label()).strong());
            ui.add(egui::TextEdit::singleline(captions.text_mut(role)).desired_width(FORM_WIDTH));
            ui.add_space(6.0);
        }

        ui.add_space(10.0);
        if ui.button("이미지 다운로드").clicked() {
            action = FormAction::Download;
        }
    });

    action
}
