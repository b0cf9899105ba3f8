use crate::{
    caption::style::ResolvedStyle,
    foundation::core::Canvas,
    foundation::error::RevealResult,
    layout::metrics::TextMetrics,
};

/// A canvas snapshot as RGBA8 pixels.
///
/// Backends produce **premultiplied alpha**; the `premultiplied` flag makes this explicit at API
/// boundaries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Fully transparent frame.
    pub fn transparent(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
            premultiplied: true,
        }
    }
}

/// Handle to a canvas owned by a [`CanvasBackend`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CanvasId(pub u32);

/// Which pass of a word is being drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawPass {
    /// Glyphs filled with the style's fill color.
    Fill,
    /// Glyph outlines stroked with the style's stroke width and color.
    Stroke,
}

/// Drawing surface capability used by the render orchestrator.
///
/// Canvases are transparent on creation and accumulate every draw until disposed.
pub trait CanvasBackend {
    /// Allocate a transparent canvas.
    fn create_canvas(&mut self, size: Canvas) -> RevealResult<CanvasId>;

    /// Draw `text` with its first baseline starting at `(x, y)`.
    fn draw_text(
        &mut self,
        canvas: CanvasId,
        text: &str,
        x: f32,
        y: f32,
        style: &ResolvedStyle,
        pass: DrawPass,
    ) -> RevealResult<()>;

    /// Rasterize everything drawn so far.
    fn snapshot(&mut self, canvas: CanvasId) -> RevealResult<FrameRGBA>;

    /// Release a canvas. Unknown handles are ignored.
    fn dispose(&mut self, canvas: CanvasId);
}

/// A backend that both measures and draws, keeping the two consistent.
pub trait CaptionBackend: TextMetrics + CanvasBackend {}

impl<T: TextMetrics + CanvasBackend + ?Sized> CaptionBackend for T {}
