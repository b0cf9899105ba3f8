use crate::{
    caption::model::WordCell,
    encode::sink::{ExportKey, FrameSink},
    foundation::core::{Canvas, GroupId},
    foundation::error::RevealResult,
    render::backend::{CanvasBackend, CanvasId, DrawPass},
};

/// An open group canvas. Dropping the session disposes the canvas, on success and on error.
pub struct GroupSession<'a, B: CanvasBackend + ?Sized> {
    backend: &'a mut B,
    canvas: CanvasId,
    size: Canvas,
    group: GroupId,
}

impl<'a, B: CanvasBackend + ?Sized> GroupSession<'a, B> {
    /// Allocate a fresh transparent canvas for `group`.
    pub fn open(backend: &'a mut B, size: Canvas, group: GroupId) -> RevealResult<Self> {
        let canvas = backend.create_canvas(size)?;
        tracing::debug!(group = group.0, canvas = canvas.0, "opened group canvas");
        Ok(Self {
            backend,
            canvas,
            size,
            group,
        })
    }

    /// Group this canvas belongs to.
    pub fn group(&self) -> GroupId {
        self.group
    }

    /// Draw one drawable cell: fill pass, then the outline pass when the group's stroke is on.
    pub fn draw(&mut self, cell: &WordCell) -> RevealResult<()> {
        let style = cell.style.as_ref();
        let y = baseline_y(self.size, style.position, cell.line, style.line_spacing);
        self.backend
            .draw_text(self.canvas, &cell.text, cell.x, y, style, DrawPass::Fill)?;
        if style.stroke.enabled {
            self.backend
                .draw_text(self.canvas, &cell.text, cell.x, y, style, DrawPass::Stroke)?;
        }
        Ok(())
    }

    /// Snapshot the canvas and hand it to `sink`.
    pub fn export(&mut self, key: ExportKey, sink: &mut dyn FrameSink) -> RevealResult<()> {
        let frame = self.backend.snapshot(self.canvas)?;
        sink.push_frame(key, &frame)?;
        tracing::debug!(group = key.group.0, seq = key.seq.0, "exported frame");
        Ok(())
    }
}

impl<B: CanvasBackend + ?Sized> Drop for GroupSession<'_, B> {
    fn drop(&mut self) {
        self.backend.dispose(self.canvas);
        tracing::debug!(group = self.group.0, "closed group canvas");
    }
}

/// First baseline at `round(height * position)`, one `line_spacing` further per line.
pub fn baseline_y(size: Canvas, position: f64, line: u32, line_spacing: f32) -> f32 {
    let top = (f64::from(size.height) * position).round();
    (top + f64::from(line) * f64::from(line_spacing)) as f32
}

/// Draw every cell in order on one canvas per group, exporting where scheduled.
///
/// Control cells are skipped entirely, whatever their export flag says. Returns the keys of the
/// exported frames in order.
pub fn render_cells<B: CanvasBackend + ?Sized>(
    cells: &[WordCell],
    size: Canvas,
    backend: &mut B,
    sink: &mut dyn FrameSink,
) -> RevealResult<Vec<ExportKey>> {
    let mut exported = Vec::new();
    let mut start = 0;
    while start < cells.len() {
        let group = cells[start].group;
        let len = cells[start..]
            .iter()
            .take_while(|c| c.group == group)
            .count();
        let group_cells = &cells[start..start + len];

        let mut session = GroupSession::open(&mut *backend, size, group)?;
        for cell in group_cells.iter().filter(|c| c.is_drawable()) {
            session.draw(cell)?;
            if cell.export {
                let key = ExportKey {
                    group,
                    seq: cell.seq,
                };
                session.export(key, sink)?;
                exported.push(key);
            }
        }
        drop(session);

        start += len;
    }
    Ok(exported)
}

#[cfg(test)]
#[path = "../../tests/unit/render/orchestrator.rs"]
mod tests;
