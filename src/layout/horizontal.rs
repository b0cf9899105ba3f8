use crate::{
    caption::model::WordCell, foundation::core::GroupId, foundation::error::RevealResult,
    layout::metrics::TextMetrics,
};

/// A centered line wider than the canvas. Rendering still proceeds; the text may clip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutWarning {
    /// Group containing the line.
    pub group: GroupId,
    /// Line index within the group.
    pub line: u32,
    /// Drawable words of the line joined with spaces.
    pub text: String,
    /// Computed (negative) left margin in pixels.
    pub margin: i64,
}

impl std::fmt::Display for LayoutWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "line {} of group {:03} is wider than the canvas (margin {}px): \"{}\"",
            self.line, self.group.0, self.margin, self.text
        )
    }
}

/// Assign `x` to every cell so each line is centered in `canvas_width`.
///
/// The centering width is the sum of the word widths alone; the space advanced after each word
/// is not part of it.
pub fn layout_lines<M: TextMetrics + ?Sized>(
    cells: &mut [WordCell],
    canvas_width: u32,
    metrics: &mut M,
) -> RevealResult<Vec<LayoutWarning>> {
    let mut warnings = Vec::new();
    let mut start = 0;
    while start < cells.len() {
        let key = (cells[start].group, cells[start].line);
        let len = cells[start..]
            .iter()
            .take_while(|c| (c.group, c.line) == key)
            .count();
        let end = start + len;
        if let Some(w) = layout_line(&mut cells[start..end], canvas_width, metrics)? {
            tracing::warn!(
                group = w.group.0,
                line = w.line,
                margin = w.margin,
                text = %w.text,
                "caption line does not fit the canvas"
            );
            warnings.push(w);
        }
        start = end;
    }
    Ok(warnings)
}

fn layout_line<M: TextMetrics + ?Sized>(
    line: &mut [WordCell],
    canvas_width: u32,
    metrics: &mut M,
) -> RevealResult<Option<LayoutWarning>> {
    let mut widths = Vec::with_capacity(line.len());
    let mut total = 0.0f64;
    for cell in line.iter() {
        let w = if cell.has_extent() {
            metrics.measure(&cell.text, &cell.style.text)?
        } else {
            0.0
        };
        total += f64::from(w);
        widths.push(w);
    }

    let margin = ((f64::from(canvas_width) - total) / 2.0).trunc() as i64;

    let mut cursor = margin as f32;
    for (cell, width) in line.iter_mut().zip(widths) {
        cell.x = cursor;
        if cell.has_extent() {
            let space = metrics.measure(" ", &cell.style.text)?;
            cursor += width + space;
        }
    }

    if margin >= 0 {
        return Ok(None);
    }
    let first = &line[0];
    let text = line
        .iter()
        .filter(|c| c.has_extent())
        .map(|c| c.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    Ok(Some(LayoutWarning {
        group: first.group,
        line: first.line,
        text,
        margin,
    }))
}

#[cfg(test)]
#[path = "../../tests/unit/layout/horizontal.rs"]
mod tests;
