use crate::{
    caption::markers::{classify_token, is_line_break},
    caption::model::WordCell,
};

/// Classify every cell and assign line indices.
///
/// Each cell receives the line counter as it stands when the cell is visited; a line-break
/// marker bumps the counter only for the cells after it. The counter restarts at `0` whenever
/// the group changes.
pub fn segment_cells(cells: &mut [WordCell]) {
    let mut current_group = None;
    let mut line = 0u32;

    for cell in cells.iter_mut() {
        cell.marker = classify_token(&cell.text);

        if current_group != Some(cell.group) {
            current_group = Some(cell.group);
            line = 0;
        }

        cell.line = line;
        if is_line_break(&cell.text) {
            line += 1;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/caption/segment.rs"]
mod tests;
