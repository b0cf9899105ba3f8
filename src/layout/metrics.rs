use crate::{caption::style::TextStyle, foundation::error::RevealResult};

/// Text measurement capability used by the horizontal layout.
///
/// Implementations must be deterministic per `(text, style)` and agree with the glyphs the
/// paired canvas backend draws.
pub trait TextMetrics {
    /// Load whatever `font` names. Called once per distinct font before any layout or drawing;
    /// failure aborts the run with [`crate::RevealError::MissingStyleAsset`].
    fn resolve_font(&mut self, font: &str) -> RevealResult<()>;

    /// Advance width of `text` in pixels.
    fn measure(&mut self, text: &str, style: &TextStyle) -> RevealResult<f32>;
}
