use std::sync::Arc;

use crate::{
    caption::model::{GroupSpec, WordCell},
    caption::style::{DefaultStyle, resolve_style},
    foundation::core::{ExportSeq, GroupId},
};

/// Run-scoped counters threaded through flattening.
///
/// Both counters start at zero and only ever grow, so cells flattened through one state get
/// gap-free sequence numbers even when groups are fed in several batches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlattenState {
    groups: u32,
    seq: u32,
}

impl FlattenState {
    /// Fresh counters for a new run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of groups consumed so far.
    pub fn groups_seen(&self) -> u32 {
        self.groups
    }

    /// Last sequence number handed out, `0` before the first cell.
    pub fn last_seq(&self) -> u32 {
        self.seq
    }

    /// Flatten one group, appending its cells to `out`.
    ///
    /// The group counter advances even for an empty token list, so group numbers keep matching
    /// input positions.
    pub fn push_group(
        &mut self,
        spec: &GroupSpec,
        defaults: &DefaultStyle,
        out: &mut Vec<WordCell>,
    ) {
        self.groups += 1;
        let group = GroupId(self.groups);
        let style = Arc::new(resolve_style(defaults, &spec.overrides, spec.stroke));

        out.reserve(spec.text.len());
        for token in &spec.text {
            self.seq += 1;
            out.push(WordCell {
                text: token.clone(),
                group,
                seq: ExportSeq(self.seq),
                line: 0,
                x: 0.0,
                marker: None,
                export: false,
                style: Arc::clone(&style),
            });
        }
    }
}

/// Flatten all groups of a run into one ordered cell stream.
pub fn flatten_groups(groups: &[GroupSpec], defaults: &DefaultStyle) -> Vec<WordCell> {
    let mut state = FlattenState::new();
    let mut cells = Vec::new();
    for spec in groups {
        state.push_group(spec, defaults, &mut cells);
    }
    cells
}

#[cfg(test)]
#[path = "../../tests/unit/caption/flatten.rs"]
mod tests;
