// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Caption font resolution and text drawing.
//!
//! Captions are drawn in a bold sans-serif face. A matching system font is
//! preferred; otherwise the proportional font bundled with egui is used and
//! bold is synthesized by over-striking.

use crate::util::geometry::Placement;
use ab_glyph::{Font, FontVec, PxScale};
use anyhow::{Context, Result};
use fontdb::{Database, Family, Query, Weight};
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;

/// Families tried before the generic sans-serif fallback. Korean-capable
/// faces come first so the default captions render without missing glyphs.
const PREFERRED_FAMILIES: &[&str] = &[
    "Noto Sans CJK KR",
    "Noto Sans KR",
    "Malgun Gothic",
    "Apple SD Gothic Neo",
    "NanumGothic",
    "DejaVu Sans",
    "Liberation Sans",
    "Arial",
    "Helvetica",
];

/// egui font used when no system face is found.
const BUNDLED_FACE: &str = "Ubuntu-Light";

const CAPTION_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Raw font file data for one face.
#[derive(Debug, Clone)]
pub struct FaceData {
    pub name: String,
    pub bytes: Vec<u8>,
    /// Face index within a font collection.
    pub index: u32,
    pub bold: bool,
}

/// Look up a bold sans-serif face among the installed system fonts.
pub fn find_system_face() -> Option<FaceData> {
    let mut db = Database::new();
    db.load_system_fonts();

    let mut families: Vec<Family> = PREFERRED_FAMILIES.iter().map(|&name| Family::Name(name)).collect();
    families.push(Family::SansSerif);

    let id = db.query(&Query {
        families: &families,
        weight: Weight::BOLD,
        ..Query::default()
    })?;

    let info = db.face(id)?;
    let name = info
        .families
        .first()
        .map(|(family, _)| family.clone())
        .unwrap_or_else(|| info.post_script_name.clone());
    let bold = info.weight >= Weight::SEMIBOLD;

    db.with_face_data(id, |data, index| FaceData {
        name,
        bytes: data.to_vec(),
        index,
        bold,
    })
}

/// The proportional font that ships with egui.
pub fn bundled_face() -> Option<FaceData> {
    let definitions = egui::FontDefinitions::default();
    let data = definitions.font_data.get(BUNDLED_FACE)?;

    Some(FaceData {
        name: BUNDLED_FACE.to_string(),
        bytes: data.font.to_vec(),
        index: data.index,
        bold: false,
    })
}

/// A parsed caption font.
pub struct CaptionFont {
    font: FontVec,
    synthetic_bold: bool,
}

impl CaptionFont {
    /// Parse a face for drawing captions.
    pub fn from_face(face: &FaceData) -> Result<Self> {
        let font = FontVec::try_from_vec_and_index(face.bytes.clone(), face.index)
            .with_context(|| format!("Failed to parse font {}", face.name))?;

        Ok(Self {
            font,
            synthetic_bold: !face.bold,
        })
    }

    /// Font from the egui-bundled face.
    pub fn bundled() -> Result<Self> {
        let face = bundled_face().context("egui has no bundled proportional font")?;
        Self::from_face(&face)
    }

    /// Draw `text` in black with its top-left corner at the placement origin.
    pub fn draw(&self, canvas: &mut RgbaImage, text: &str, placement: &Placement) {
        if text.is_empty() {
            return;
        }

        let scale = self.em_scale(placement.font_px);
        let x = placement.x.round() as i32;
        let y = placement.y.round() as i32;

        for dx in 0..=self.stroke(placement.font_px) {
            draw_text_mut(canvas, CAPTION_COLOR, x + dx, y, scale, &self.font, text);
        }
    }

    /// Scale at which one em spans `font_px` pixels.
    ///
    /// `PxScale` sizes the line height (ascent - descent), so an em size has
    /// to be converted through the face's own metrics.
    fn em_scale(&self, font_px: f64) -> PxScale {
        let height = self.font.height_unscaled();
        let units_per_em = self.font.units_per_em().unwrap_or(height);
        PxScale::from((font_px * f64::from(height) / f64::from(units_per_em)) as f32)
    }

    /// Extra horizontal passes used to embolden a regular face.
    fn stroke(&self, font_px: f64) -> i32 {
        if self.synthetic_bold {
            ((font_px / 24.0).round() as i32).max(1)
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_font_parses() {
        let face = bundled_face().unwrap();
        assert_eq!(face.name, BUNDLED_FACE);
        assert!(!face.bytes.is_empty());

        let font = CaptionFont::from_face(&face).unwrap();
        assert!(font.synthetic_bold);
    }

    #[test]
    fn test_invalid_font_rejected() {
        let face = FaceData {
            name: "garbage".to_string(),
            bytes: vec![0, 1, 2, 3],
            index: 0,
            bold: true,
        };
        assert!(CaptionFont::from_face(&face).is_err());
    }

    #[test]
    fn test_stroke_only_for_regular_faces() {
        let mut font = CaptionFont::bundled().unwrap();
        assert_eq!(font.stroke(24.0), 1);
        assert_eq!(font.stroke(80.0), 3);

        font.synthetic_bold = false;
        assert_eq!(font.stroke(80.0), 0);
    }

    #[test]
    fn test_draw_marks_pixels_near_origin() {
        let font = CaptionFont::bundled().unwrap();
        let mut canvas = RgbaImage::from_pixel(200, 100, Rgba([255, 255, 255, 255]));
        let placement = Placement { x: 10.0, y: 20.0, font_px: 30.0 };

        font.draw(&mut canvas, "HI", &placement);

        let dark: Vec<(u32, u32)> = canvas
            .enumerate_pixels()
            .filter(|(_, _, p)| p.0[0] < 128)
            .map(|(x, y, _)| (x, y))
            .collect();
        assert!(!dark.is_empty());
        assert!(dark.iter().all(|&(x, y)| x >= 8 && y >= 18 && y < 20 + 60));
    }

    /// Rows containing dark pixels, as (first, last).
    fn ink_rows(canvas: &RgbaImage) -> (u32, u32) {
        let rows: Vec<u32> = canvas
            .enumerate_pixels()
            .filter(|(_, _, p)| p.0[0] < 128)
            .map(|(_, y, _)| y)
            .collect();
        (*rows.iter().min().unwrap(), *rows.iter().max().unwrap())
    }

    #[test]
    fn test_font_px_is_em_size() {
        let mut font = CaptionFont::bundled().unwrap();
        font.synthetic_bold = false;

        let units_per_em = font.font.units_per_em().unwrap();
        let cap = font.font.outline(font.font.glyph_id('H')).unwrap().bounds;
        let expected = f64::from(cap.max.y - cap.min.y) / f64::from(units_per_em) * 100.0;

        let mut canvas = RgbaImage::from_pixel(300, 200, Rgba([255, 255, 255, 255]));
        font.draw(&mut canvas, "H", &Placement { x: 10.0, y: 10.0, font_px: 100.0 });

        let (top, bottom) = ink_rows(&canvas);
        let ink_height = f64::from(bottom - top + 1);
        assert!(
            (ink_height - expected).abs() <= 2.0,
            "ink height {ink_height}, cap height at 100px em {expected}"
        );
    }

    #[test]
    fn test_em_scale_uses_face_metrics() {
        let font = CaptionFont::bundled().unwrap();
        let ratio = font.font.height_unscaled() / font.font.units_per_em().unwrap();

        let scale = font.em_scale(50.0);
        assert!((scale.y - 50.0 * ratio).abs() < 0.001);
        assert_eq!(scale.x, scale.y);
    }

    #[test]
    fn test_draw_empty_text_is_noop() {
        let font = CaptionFont::bundled().unwrap();
        let mut canvas = RgbaImage::from_pixel(50, 50, Rgba([255, 255, 255, 255]));
        let before = canvas.clone();

        font.draw(&mut canvas, "", &Placement { x: 0.0, y: 0.0, font_px: 20.0 });
        assert_eq!(canvas, before);
    }
}
