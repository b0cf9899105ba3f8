use std::collections::BTreeSet;

use crate::{
    caption::flatten::flatten_groups,
    caption::model::{GroupSpec, WordCell},
    caption::segment::segment_cells,
    caption::style::DefaultStyle,
    encode::sink::{ExportKey, FrameSink, SinkConfig},
    foundation::core::Canvas,
    foundation::error::RevealResult,
    layout::horizontal::{LayoutWarning, layout_lines},
    layout::metrics::TextMetrics,
    render::backend::CaptionBackend,
    render::orchestrator::render_cells,
    reveal::schedule::schedule_exports,
};

/// Fully laid out and scheduled cells, ready to render.
#[derive(Clone, Debug)]
pub struct CaptionPlan {
    /// Canvas every group renders onto.
    pub canvas: Canvas,
    /// Cells in global order.
    pub cells: Vec<WordCell>,
    /// Lines that did not fit the canvas width.
    pub warnings: Vec<LayoutWarning>,
    /// Number of input groups, empty ones included.
    pub groups: usize,
}

impl CaptionPlan {
    /// Keys of the frames rendering this plan will export.
    pub fn export_keys(&self) -> Vec<ExportKey> {
        self.cells
            .iter()
            .filter(|c| c.is_drawable() && c.export)
            .map(|c| ExportKey {
                group: c.group,
                seq: c.seq,
            })
            .collect()
    }
}

/// Outcome of a complete run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Input groups, empty ones included.
    pub groups: usize,
    /// Flattened cells, control tokens included.
    pub cells: usize,
    /// Exported frames, in export order.
    pub exported: Vec<ExportKey>,
    /// Lines that did not fit the canvas width.
    pub warnings: Vec<LayoutWarning>,
}

/// Flatten, resolve fonts, segment, lay out and schedule, without drawing anything.
///
/// Every distinct font is resolved before layout, so a missing font fails here rather than in
/// the middle of a group.
#[tracing::instrument(skip(groups, defaults, metrics), fields(groups = groups.len()))]
pub fn plan_captions<M: TextMetrics + ?Sized>(
    groups: &[GroupSpec],
    defaults: &DefaultStyle,
    canvas: Canvas,
    metrics: &mut M,
) -> RevealResult<CaptionPlan> {
    let mut cells = flatten_groups(groups, defaults);

    let fonts: BTreeSet<&str> = cells.iter().map(|c| c.style.text.font.as_str()).collect();
    for font in fonts {
        metrics.resolve_font(font)?;
    }

    segment_cells(&mut cells);
    let warnings = layout_lines(&mut cells, canvas.width, metrics)?;
    schedule_exports(&mut cells);

    Ok(CaptionPlan {
        canvas,
        cells,
        warnings,
        groups: groups.len(),
    })
}

/// Render a plan into `sink`.
pub fn render_plan<B: CaptionBackend + ?Sized>(
    plan: &CaptionPlan,
    backend: &mut B,
    sink: &mut dyn FrameSink,
) -> RevealResult<Vec<ExportKey>> {
    sink.begin(SinkConfig {
        canvas: plan.canvas,
    })?;
    let exported = render_cells(&plan.cells, plan.canvas, backend, sink)?;
    sink.end()?;
    Ok(exported)
}

/// Plan and render every group, pushing exported frames into `sink`.
#[tracing::instrument(skip_all, fields(groups = groups.len()))]
pub fn run<B: CaptionBackend + ?Sized>(
    groups: &[GroupSpec],
    defaults: &DefaultStyle,
    canvas: Canvas,
    backend: &mut B,
    sink: &mut dyn FrameSink,
) -> RevealResult<RunReport> {
    let plan = plan_captions(groups, defaults, canvas, backend)?;
    let exported = render_plan(&plan, backend, sink)?;

    tracing::info!(
        groups = plan.groups,
        cells = plan.cells.len(),
        frames = exported.len(),
        warnings = plan.warnings.len(),
        "caption run finished"
    );
    Ok(RunReport {
        groups: plan.groups,
        cells: plan.cells.len(),
        exported,
        warnings: plan.warnings,
    })
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
