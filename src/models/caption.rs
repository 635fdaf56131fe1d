// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Caption slot data structures.
//!
//! There are exactly three caption slots (top, middle, bottom). Each has a
//! fixed anchor and font size in logical units and a user-editable text.

/// Role of a caption slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotRole {
    Top,
    Middle,
    Bottom,
}

impl SlotRole {
    /// All roles in drawing and form order.
    pub const ALL: [SlotRole; 3] = [SlotRole::Top, SlotRole::Middle, SlotRole::Bottom];

    /// Form label shown next to the slot's text input.
    pub fn label(self) -> &'static str {
        match self {
            SlotRole::Top => "위 텍스트",
            SlotRole::Middle => "가운데 텍스트",
            SlotRole::Bottom => "아래 텍스트",
        }
    }

    /// Caption text the slot starts with.
    pub fn default_text(self) -> &'static str {
        match self {
            SlotRole::Top => "버텨!!!",
            SlotRole::Middle => "견뎌!!!",
            SlotRole::Bottom => "이겨내!!!",
        }
    }

    fn index(self) -> usize {
        match self {
            SlotRole::Top => 0,
            SlotRole::Middle => 1,
            SlotRole::Bottom => 2,
        }
    }
}

/// Vertical placement of a caption in logical units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VerticalAnchor {
    /// Top of the text line, measured down from the top of the frame.
    FromTop(f64),
    /// Gap between the bottom of the text line and the bottom of the frame.
    FromBottom(f64),
}

/// Logical anchor point of a caption.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub x: f64,
    pub vertical: VerticalAnchor,
}

/// A caption slot: fixed layout plus the current text.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionSlot {
    pub role: SlotRole,
    pub anchor: Anchor,
    /// Font size in logical units.
    pub font_size: f64,
    pub text: String,
}

impl CaptionSlot {
    /// Create the slot for `role` with its fixed layout and default text.
    pub fn new(role: SlotRole) -> Self {
        let (anchor, font_size) = match role {
            SlotRole::Top => (
                Anchor {
                    x: 4.0,
                    vertical: VerticalAnchor::FromTop(240.0),
                },
                40.0,
            ),
            SlotRole::Middle => (
                Anchor {
                    x: 230.0,
                    vertical: VerticalAnchor::FromTop(345.0),
                },
                30.0,
            ),
            SlotRole::Bottom => (
                Anchor {
                    x: 48.0,
                    vertical: VerticalAnchor::FromBottom(153.0),
                },
                25.0,
            ),
        };

        Self {
            role,
            anchor,
            font_size,
            text: role.default_text().to_string(),
        }
    }
}

/// The three caption slots. Cloning yields the snapshot a render pass uses.
#[derive(Debug, Clone, PartialEq)]
pub struct Captions {
    slots: [CaptionSlot; 3],
}

impl Default for Captions {
    fn default() -> Self {
        Self {
            slots: SlotRole::ALL.map(CaptionSlot::new),
        }
    }
}

impl Captions {
    /// All slots in drawing order.
    pub fn slots(&self) -> &[CaptionSlot] {
        &self.slots
    }

    pub fn slot(&self, role: SlotRole) -> &CaptionSlot {
        &self.slots[role.index()]
    }

    /// Mutable access to a slot's text, for binding to a text input.
    pub fn text_mut(&mut self, role: SlotRole) -> &mut String {
        &mut self.slots[role.index()].text
    }

    pub fn set_text(&mut self, role: SlotRole, text: impl Into<String>) {
        *self.text_mut(role) = text.into();
    }
}
