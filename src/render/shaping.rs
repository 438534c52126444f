use ar_reshaper::ArabicReshaper;
use unicode_bidi::BidiInfo;

/// Turns logical Arabic text into presentation-form glyphs in visual order.
///
/// Two passes, mirroring how the narration captions are authored: contextual
/// reshaping joins letters into their initial/medial/final forms, then bidi
/// reordering rearranges the reshaped string into the left-to-right order the
/// raster surface draws in. Non-Arabic text passes through unchanged.
pub struct Shaper {
    reshaper: ArabicReshaper,
}

impl Shaper {
    pub fn new() -> Self {
        Self {
            reshaper: ArabicReshaper::default(),
        }
    }

    pub fn shape(&self, text: &str) -> String {
        let reshaped = self.reshaper.reshape(text);
        let bidi = BidiInfo::new(&reshaped, None);
        let mut display = String::with_capacity(reshaped.len());
        for paragraph in &bidi.paragraphs {
            display.push_str(&bidi.reorder_line(paragraph, paragraph.range.clone()));
        }
        display
    }
}

impl Default for Shaper {
    fn default() -> Self {
        Self::new()
    }
}
