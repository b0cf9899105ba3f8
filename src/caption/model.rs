use std::sync::Arc;

use crate::{
    caption::markers::Marker,
    caption::style::{ResolvedStyle, StrokeStyle, StyleOverrides},
    foundation::core::{ExportSeq, GroupId},
};

/// One caption: a token list plus optional style overrides.
///
/// Each group maps to one canvas and one output sub-folder.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GroupSpec {
    /// Words and control markers, in display order.
    #[serde(default)]
    pub text: Vec<String>,
    /// Style overrides; zero values mean "use the service default".
    #[serde(flatten)]
    pub overrides: StyleOverrides,
    /// Outline pass applied to every word of the group.
    #[serde(default)]
    pub stroke: StrokeStyle,
}

impl GroupSpec {
    /// Group with the given tokens and no overrides.
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            text: tokens.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

/// One flattened token with everything the renderer needs.
///
/// Cells are produced by [`crate::flatten_groups`] and filled in by the segmenter, the horizontal
/// layout and the reveal scheduler, in that order.
#[derive(Clone, Debug, PartialEq)]
pub struct WordCell {
    /// Source token text, verbatim.
    pub text: String,
    /// Owning group.
    pub group: GroupId,
    /// Global export sequence number.
    pub seq: ExportSeq,
    /// Line index within the group.
    pub line: u32,
    /// Left edge of the word in pixels.
    pub x: f32,
    /// Control classification, `None` for drawable words.
    pub marker: Option<Marker>,
    /// Whether drawing this cell also exports a frame.
    pub export: bool,
    /// Style shared by every cell of the group.
    pub style: Arc<ResolvedStyle>,
}

impl WordCell {
    /// `false` for control tokens.
    pub fn is_drawable(&self) -> bool {
        self.marker.is_none()
    }

    /// Drawable and non-empty: the cells that take horizontal space.
    pub fn has_extent(&self) -> bool {
        self.is_drawable() && !self.text.is_empty()
    }
}
