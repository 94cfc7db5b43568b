//! Canvas 2D backed text measurement (wasm32 only).

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::TextMeasurer;
use crate::error::{PivotviewError, Result};
use crate::types::TextStyle;

/// Measures text with `CanvasRenderingContext2d::measureText`.
pub struct CanvasTextMeasurer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasTextMeasurer {
    /// Measure through the 2D context of an existing canvas.
    ///
    /// # Errors
    /// Returns an error if the canvas has no 2D context.
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or_else(|| PivotviewError::Other("canvas has no 2d context".to_string()))?;
        Ok(Self { ctx })
    }

    /// Measure through a detached canvas created on the current document.
    ///
    /// # Errors
    /// Returns an error outside a browser window or if canvas creation fails.
    pub fn detached() -> Result<Self> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| PivotviewError::Other("no document".to_string()))?;
        let canvas = document
            .create_element("canvas")
            .ok()
            .and_then(|e| e.dyn_into::<HtmlCanvasElement>().ok())
            .ok_or_else(|| PivotviewError::Other("cannot create canvas".to_string()))?;
        Self::new(&canvas)
    }
}

impl TextMeasurer for CanvasTextMeasurer {
    #[allow(clippy::cast_possible_truncation)]
    fn measure_text_width(&self, text: &str, style: &TextStyle) -> Option<f32> {
        self.ctx.set_font(&style.css_font());
        self.ctx.measure_text(text).ok().map(|m| m.width() as f32)
    }
}
