pub mod encoder;
pub mod shaping;

use crate::config::TextConfig;
use crate::error::{QuranVidError, QuranVidResult};
use crate::layout;
use crate::render::shaping::Shaper;
use ab_glyph::{FontArc, PxScale};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_text_mut, text_size};
use std::path::Path;
use tracing::debug;

const TEXT_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Renders one caption onto a transparent canvas: shaped for RTL display,
/// wrapped to the width budget, block-centered vertically, each line centered
/// horizontally. Canvas size, font, font size, line pitch, and margin are
/// fixed configuration, not per-call parameters.
pub struct VerseRenderer {
    font: FontArc,
    shaper: Shaper,
    style: TextConfig,
}

impl VerseRenderer {
    pub fn new(font_path: &Path, style: &TextConfig) -> QuranVidResult<Self> {
        let bytes = std::fs::read(font_path).map_err(|e| {
            QuranVidError::Render(format!("Failed to read font {}: {e}", font_path.display()))
        })?;
        let font = FontArc::try_from_vec(bytes).map_err(|e| {
            QuranVidError::Render(format!("Invalid font {}: {e}", font_path.display()))
        })?;
        Ok(Self {
            font,
            shaper: Shaper::new(),
            style: style.clone(),
        })
    }

    /// Rendered pixel width of an already-shaped string.
    fn measure(&self, text: &str) -> u32 {
        let (width, _) = text_size(PxScale::from(self.style.font_size), &self.font, text);
        width
    }

    pub fn render(&self, caption: &str) -> RgbaImage {
        let (width, height) = (self.style.canvas_width, self.style.canvas_height);
        let mut canvas = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0]));

        let display = self.shaper.shape(caption);
        let max_width = width.saturating_sub(self.style.margin);
        let lines = layout::wrap_lines(&display, max_width, |s| self.measure(s));
        debug!("Caption wrapped into {} lines", lines.len());

        let scale = PxScale::from(self.style.font_size);
        let mut y = layout::vertical_origin(lines.len(), height, self.style.line_pitch);
        for line in &lines {
            let line_width = self.measure(line);
            let x = (width as i32 - line_width as i32) / 2;
            draw_text_mut(&mut canvas, TEXT_COLOR, x, y, scale, &self.font, line);
            y += self.style.line_pitch as i32;
        }

        canvas
    }
}
