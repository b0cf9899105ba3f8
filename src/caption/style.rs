use crate::foundation::core::Argb;

/// Font, size and fill color: the unit a group customizes as a whole.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font identifier understood by the text backend (a font file for [`crate::CpuBackend`]).
    pub font: String,
    /// Font size in pixels.
    pub font_size: f32,
    /// Fill color.
    pub color: Argb,
}

/// Outline pass parameters, carried per group.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StrokeStyle {
    /// Draw the outline pass.
    #[serde(default)]
    pub enabled: bool,
    /// Outline width in pixels.
    #[serde(default)]
    pub width: f32,
    /// Outline color.
    #[serde(default)]
    pub color: Argb,
}

/// Fully resolved style attached to every cell of a group.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedStyle {
    /// Font, size and fill color.
    pub text: TextStyle,
    /// Vertical distance between consecutive lines, in pixels.
    pub line_spacing: f32,
    /// First baseline as a fraction of the canvas height.
    pub position: f64,
    /// Outline pass.
    pub stroke: StrokeStyle,
}

/// Service-level defaults every group falls back to.
#[derive(Clone, Debug, PartialEq)]
pub struct DefaultStyle {
    /// Default font, size and fill color.
    pub text: TextStyle,
    /// Default line spacing; `0.0` means "same as the default font size".
    pub line_spacing: f32,
    /// Default vertical position fraction.
    pub position: f64,
}

impl DefaultStyle {
    fn effective_line_spacing(&self) -> f32 {
        if self.line_spacing != 0.0 {
            self.line_spacing
        } else {
            self.text.font_size
        }
    }
}

/// Per-group overrides. A field counts as set only when it differs from its zero value
/// (`""`, `0`, `0.0`).
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StyleOverrides {
    /// Font identifier.
    #[serde(default)]
    pub font: String,
    /// Font size in pixels.
    #[serde(default)]
    pub font_size: f32,
    /// Fill color.
    #[serde(default)]
    pub color: Argb,
    /// Line spacing in pixels.
    #[serde(default)]
    pub line_spacing: f32,
    /// Vertical position fraction.
    #[serde(default)]
    pub position: f64,
}

impl StyleOverrides {
    /// Whether any member of the font/size/color unit is set.
    pub fn customizes_text(&self) -> bool {
        !self.font.is_empty() || self.font_size != 0.0 || !self.color.is_unset()
    }
}

/// Resolve the effective style of a group.
///
/// Font, size and color resolve together: if any of them is set, a dedicated [`TextStyle`] is
/// built from the set fields over the defaults. Line spacing and position resolve on their own,
/// except that an unset line spacing follows a customized font size.
pub fn resolve_style(
    defaults: &DefaultStyle,
    overrides: &StyleOverrides,
    stroke: StrokeStyle,
) -> ResolvedStyle {
    let text = if overrides.customizes_text() {
        TextStyle {
            font: if overrides.font.is_empty() {
                defaults.text.font.clone()
            } else {
                overrides.font.clone()
            },
            font_size: if overrides.font_size != 0.0 {
                overrides.font_size
            } else {
                defaults.text.font_size
            },
            color: if overrides.color.is_unset() {
                defaults.text.color
            } else {
                overrides.color
            },
        }
    } else {
        defaults.text.clone()
    };

    let line_spacing = if overrides.line_spacing != 0.0 {
        overrides.line_spacing
    } else if overrides.font_size != 0.0 {
        overrides.font_size
    } else {
        defaults.effective_line_spacing()
    };

    let position = if overrides.position != 0.0 {
        overrides.position
    } else {
        defaults.position
    };

    ResolvedStyle {
        text,
        line_spacing,
        position,
        stroke,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/caption/style.rs"]
mod tests;
