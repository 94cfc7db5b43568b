//! Text measurement used by "auto" column sizing.
//!
//! The facet only needs widths; how they are obtained is up to the
//! [`TextMeasurer`] implementation. Native builds use a font-size based
//! estimate, wasm builds can measure through a canvas context.

mod cache;
#[cfg(target_arch = "wasm32")]
mod canvas;

pub use cache::{CachedMeasurer, MeasureCache};
#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasTextMeasurer;

use crate::types::TextStyle;

/// Width of a narrow glyph relative to the font size.
const NARROW_GLYPH_RATIO: f32 = 0.6;

/// Measures rendered text widths in pixels.
pub trait TextMeasurer {
    /// Width of `text` rendered in `style`, `None` when measuring fails.
    fn measure_text_width(&self, text: &str, style: &TextStyle) -> Option<f32>;

    /// Cheap per-glyph estimate, used to pick the widest label of a sample
    /// before measuring only that one precisely.
    fn measure_text_width_roughly(&self, text: &str, style: &TextStyle) -> f32 {
        let narrow = self
            .measure_text_width("a", style)
            .unwrap_or(style.font_size * NARROW_GLYPH_RATIO);
        let digit = self.measure_text_width("0", style).unwrap_or(narrow);
        let wide = self
            .measure_text_width("\u{4e2d}", style)
            .unwrap_or(style.font_size);
        text.chars()
            .map(|c| {
                if is_wide_char(c) {
                    wide
                } else if c.is_ascii_digit() {
                    digit
                } else {
                    narrow
                }
            })
            .sum()
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for Box<T> {
    fn measure_text_width(&self, text: &str, style: &TextStyle) -> Option<f32> {
        (**self).measure_text_width(text, style)
    }

    fn measure_text_width_roughly(&self, text: &str, style: &TextStyle) -> f32 {
        (**self).measure_text_width_roughly(text, style)
    }
}

/// Font-size based measurer for environments without a text shaper.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimatingMeasurer;

impl TextMeasurer for EstimatingMeasurer {
    fn measure_text_width(&self, text: &str, style: &TextStyle) -> Option<f32> {
        Some(
            text.chars()
                .map(|c| {
                    if is_wide_char(c) {
                        style.font_size
                    } else {
                        style.font_size * NARROW_GLYPH_RATIO
                    }
                })
                .sum(),
        )
    }
}

/// CJK ideographs, kana, hangul and fullwidth forms occupy a full em.
pub fn is_wide_char(c: char) -> bool {
    matches!(
        u32::from(c),
        0x1100..=0x115F
            | 0x2E80..=0x303F
            | 0x3040..=0x30FF
            | 0x3400..=0x4DBF
            | 0x4E00..=0x9FFF
            | 0xAC00..=0xD7AF
            | 0xF900..=0xFAFF
            | 0xFF00..=0xFF60
            | 0xFFE0..=0xFFE6
    )
}

/// Measure with `measurer`, treating a failed measurement as zero width.
pub fn measure_or_zero(measurer: &dyn TextMeasurer, text: &str, style: &TextStyle) -> f32 {
    measurer.measure_text_width(text, style).unwrap_or_else(|| {
        log::warn!("text measurement failed for {text:?}, using zero width");
        0.0
    })
}
