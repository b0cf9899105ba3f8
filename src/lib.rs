//! typereveal turns caption groups into numbered, transparent overlay frames that build each
//! caption up word by word ("typewriter reveal").
//!
//! # Pipeline overview
//!
//! 1. **Flatten**: `[GroupSpec] -> [WordCell]`, resolving each group's style and numbering cells
//! 2. **Segment**: classify control markers and assign line indices
//! 3. **Layout**: center every line horizontally using a [`TextMetrics`] backend
//! 4. **Schedule**: decide which cells export a frame
//! 5. **Render**: draw cells on one accumulating canvas per group and push exports to a
//!    [`FrameSink`]
//!
//! Steps 1–4 are pure and available through [`plan_captions`]; [`run`] performs all five.
//! [`CpuBackend`] is the bundled Parley + `vello_cpu` backend and [`FileSink`] with
//! [`PngEncoder`] writes `output/group001/caption001.png`-style files.
//!
//! # Caption tokens
//!
//! Tokens are words, `[newline]` (start a new line) or `[wait(N)]` (a pause marker that is
//! recognized and skipped; its duration is kept as data only).
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod caption;
mod config;
mod encode;
mod foundation;
mod layout;
mod pipeline;
mod render;
mod reveal;

#[cfg(test)]
#[path = "../tests/unit/support.rs"]
pub(crate) mod test_support;

pub use caption::flatten::{FlattenState, flatten_groups};
pub use caption::markers::{LINE_BREAK_MARKER, Marker, classify_token, is_line_break};
pub use caption::model::{GroupSpec, WordCell};
pub use caption::segment::segment_cells;
pub use caption::style::{
    DefaultStyle, ResolvedStyle, StrokeStyle, StyleOverrides, TextStyle, resolve_style,
};
pub use config::data::{groups_from_reader, load_groups};
pub use config::service::ServiceConfig;
pub use encode::png::{FrameEncoder, PngEncoder};
pub use encode::sink::{
    ExportKey, FileSink, FrameSink, InMemorySink, OutputNaming, SinkConfig, write_bytes,
};
pub use foundation::core::{Argb, Canvas, ExportSeq, GroupId};
pub use foundation::error::{RevealError, RevealResult};
pub use layout::horizontal::{LayoutWarning, layout_lines};
pub use layout::metrics::TextMetrics;
pub use pipeline::{CaptionPlan, RunReport, plan_captions, render_plan, run};
pub use render::backend::{CanvasBackend, CanvasId, CaptionBackend, DrawPass, FrameRGBA};
pub use render::cpu::CpuBackend;
pub use render::orchestrator::{GroupSession, baseline_y, render_cells};
pub use reveal::schedule::schedule_exports;
