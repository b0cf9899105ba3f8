#![allow(dead_code)]

use std::collections::HashMap;

use typereveal::{
    Canvas, CanvasBackend, CanvasId, DefaultStyle, DrawPass, FrameRGBA, ResolvedStyle,
    RevealError, RevealResult, TextMetrics, TextStyle,
};

pub fn defaults() -> DefaultStyle {
    DefaultStyle {
        text: TextStyle {
            font: "stub.ttf".to_string(),
            font_size: 10.0,
            color: typereveal::Argb::WHITE,
        },
        line_spacing: 12.0,
        position: 0.5,
    }
}

/// Monospace backend: every char is `font_size` wide. Each fill draw paints
/// one opaque pixel so snapshots differ as text accumulates.
#[derive(Default)]
pub struct StubBackend {
    pub known_fonts: Vec<String>,
    canvases: HashMap<CanvasId, FrameRGBA>,
    next: u32,
    pub disposed: u32,
}

impl StubBackend {
    pub fn with_font(font: &str) -> Self {
        Self {
            known_fonts: vec![font.to_string()],
            ..Self::default()
        }
    }

    pub fn live_canvases(&self) -> usize {
        self.canvases.len()
    }
}

impl TextMetrics for StubBackend {
    fn resolve_font(&mut self, font: &str) -> RevealResult<()> {
        if self.known_fonts.iter().any(|f| f == font) {
            Ok(())
        } else {
            Err(RevealError::missing_style_asset(font, "not registered"))
        }
    }

    fn measure(&mut self, text: &str, style: &TextStyle) -> RevealResult<f32> {
        Ok(text.chars().count() as f32 * style.font_size)
    }
}

impl CanvasBackend for StubBackend {
    fn create_canvas(&mut self, canvas: Canvas) -> RevealResult<CanvasId> {
        let id = CanvasId(self.next);
        self.next += 1;
        self.canvases
            .insert(id, FrameRGBA::transparent(canvas.width, canvas.height));
        Ok(id)
    }

    fn draw_text(
        &mut self,
        canvas: CanvasId,
        _text: &str,
        x: f32,
        y: f32,
        style: &ResolvedStyle,
        pass: DrawPass,
    ) -> RevealResult<()> {
        let frame = self
            .canvases
            .get_mut(&canvas)
            .ok_or_else(|| RevealError::render("unknown canvas"))?;
        if pass == DrawPass::Stroke {
            return Ok(());
        }
        let px = (x.max(0.0) as u32).min(frame.width - 1);
        let py = (y.max(0.0) as u32).min(frame.height - 1);
        let idx = ((py * frame.width + px) * 4) as usize;
        frame.data[idx..idx + 4].copy_from_slice(&style.text.color.to_rgba8());
        Ok(())
    }

    fn snapshot(&mut self, canvas: CanvasId) -> RevealResult<FrameRGBA> {
        self.canvases
            .get(&canvas)
            .cloned()
            .ok_or_else(|| RevealError::render("unknown canvas"))
    }

    fn dispose(&mut self, canvas: CanvasId) {
        if self.canvases.remove(&canvas).is_some() {
            self.disposed += 1;
        }
    }
}
