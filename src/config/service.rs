use std::{fs::File, io::BufReader, path::Path, path::PathBuf};

use crate::{
    caption::style::{DefaultStyle, TextStyle},
    encode::sink::OutputNaming,
    foundation::core::{Argb, Canvas},
    foundation::error::{RevealError, RevealResult},
};

/// Service-level configuration: canvas, default style and output naming.
///
/// ```json
/// { "width": 1080, "height": 1920, "font": "Anton-Regular.ttf", "font_size": 50 }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ServiceConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Default font file.
    pub font: String,
    /// Default font size in pixels.
    #[serde(default = "default_font_size")]
    pub font_size: f32,
    /// Default fill color, `0xAARRGGBB`.
    #[serde(default = "default_color")]
    pub color: Argb,
    /// Default first-baseline position as a fraction of the canvas height.
    #[serde(default = "default_position")]
    pub position: f64,
    /// Default line spacing; `0` follows `font_size`.
    #[serde(default)]
    pub line_spacing: f32,
    /// Root directory for exported frames.
    #[serde(default = "default_output_root")]
    pub output_root: PathBuf,
    /// Prefix of each group's sub-folder.
    #[serde(default = "default_group_folder_prefix")]
    pub group_folder_prefix: String,
    /// Prefix of each frame file.
    #[serde(default = "default_file_name_prefix")]
    pub file_name_prefix: String,
}

fn default_font_size() -> f32 {
    40.0
}

fn default_color() -> Argb {
    Argb::WHITE
}

fn default_position() -> f64 {
    0.8
}

fn default_output_root() -> PathBuf {
    PathBuf::from("output")
}

fn default_group_folder_prefix() -> String {
    "group".to_string()
}

fn default_file_name_prefix() -> String {
    "caption".to_string()
}

impl ServiceConfig {
    /// Configuration with every optional field at its default.
    pub fn new(width: u32, height: u32, font: impl Into<String>) -> Self {
        Self {
            width,
            height,
            font: font.into(),
            font_size: default_font_size(),
            color: default_color(),
            position: default_position(),
            line_spacing: 0.0,
            output_root: default_output_root(),
            group_folder_prefix: default_group_folder_prefix(),
            file_name_prefix: default_file_name_prefix(),
        }
    }

    /// Parse a configuration from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> RevealResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| RevealError::serde(format!("parse config JSON: {e}")))
    }

    /// Parse a configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> RevealResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            RevealError::validation(format!("open config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Reject configurations that cannot produce frames.
    pub fn validate(&self) -> RevealResult<()> {
        Canvas::new(self.width, self.height)?;
        if self.font.trim().is_empty() {
            return Err(RevealError::validation("font must be non-empty"));
        }
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(RevealError::validation("font_size must be finite and > 0"));
        }
        if !self.line_spacing.is_finite() || self.line_spacing < 0.0 {
            return Err(RevealError::validation(
                "line_spacing must be finite and >= 0",
            ));
        }
        if !self.position.is_finite() || !(0.0..=1.0).contains(&self.position) {
            return Err(RevealError::validation("position must be within [0, 1]"));
        }
        if self.group_folder_prefix.contains(['/', '\\'])
            || self.file_name_prefix.contains(['/', '\\'])
        {
            return Err(RevealError::validation(
                "output prefixes must not contain path separators",
            ));
        }
        if self.file_name_prefix.is_empty() {
            return Err(RevealError::validation("file_name_prefix must be non-empty"));
        }
        Ok(())
    }

    /// Canvas size.
    pub fn canvas(&self) -> RevealResult<Canvas> {
        Canvas::new(self.width, self.height)
    }

    /// Service-level default style.
    pub fn default_style(&self) -> DefaultStyle {
        DefaultStyle {
            text: TextStyle {
                font: self.font.clone(),
                font_size: self.font_size,
                color: self.color,
            },
            line_spacing: self.line_spacing,
            position: self.position,
        }
    }

    /// Output layout derived from the root and prefixes.
    pub fn output_naming(&self) -> OutputNaming {
        OutputNaming {
            root: self.output_root.clone(),
            group_prefix: self.group_folder_prefix.clone(),
            file_prefix: self.file_name_prefix.clone(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/service.rs"]
mod tests;
