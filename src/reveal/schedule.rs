use crate::{caption::markers::is_line_break, caption::model::WordCell};

/// Decide which cells export a frame after being drawn.
///
/// A cell stays silent when it is a line-break marker, or sits right before one, and the next
/// cell belongs to the same group. The last word of a finished line therefore lands in the same
/// frame as the first word of the next line. The last cell of a group, and of the run, always
/// exports.
pub fn schedule_exports(cells: &mut [WordCell]) {
    for i in 0..cells.len() {
        let next = cells.get(i + 1);
        let at_line_boundary = match next {
            Some(n) => is_line_break(&cells[i].text) || is_line_break(&n.text),
            None => false,
        };
        let same_group_ahead = next.is_none_or(|n| n.group == cells[i].group);
        cells[i].export = !(at_line_boundary && same_group_ahead);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/schedule.rs"]
mod tests;
