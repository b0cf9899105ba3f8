use super::*;
use crate::{caption::style::StyleOverrides, test_support::default_style};

#[test]
fn sequence_numbers_are_gap_free_across_groups() {
    let groups = vec![
        GroupSpec::new(["For the longevity", "[newline]", "of ball"]),
        GroupSpec::new(["[wait(15)]", "bearings"]),
        GroupSpec::new(["it actually matters"]),
    ];
    let cells = flatten_groups(&groups, &default_style());

    let seqs: Vec<u32> = cells.iter().map(|c| c.seq.0).collect();
    assert_eq!(seqs, vec![1, 2, 3, 4, 5, 6]);
    let group_ids: Vec<u32> = cells.iter().map(|c| c.group.0).collect();
    assert_eq!(group_ids, vec![1, 1, 1, 2, 2, 3]);
}

#[test]
fn control_text_is_preserved_verbatim() {
    let groups = vec![GroupSpec::new(["a", "[newline]", "[wait(3)]", ""])];
    let cells = flatten_groups(&groups, &default_style());
    let texts: Vec<&str> = cells.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, vec!["a", "[newline]", "[wait(3)]", ""]);
}

#[test]
fn empty_group_consumes_a_group_number_but_no_sequence_numbers() {
    let groups = vec![
        GroupSpec::new(["one"]),
        GroupSpec::default(),
        GroupSpec::new(["three"]),
    ];
    let cells = flatten_groups(&groups, &default_style());
    assert_eq!(cells.len(), 2);
    assert_eq!(cells[1].group, GroupId(3));
    assert_eq!(cells[1].seq, ExportSeq(2));
}

#[test]
fn state_threads_counters_between_batches() {
    let defaults = default_style();
    let mut state = FlattenState::new();
    let mut cells = Vec::new();
    state.push_group(&GroupSpec::new(["a", "b"]), &defaults, &mut cells);
    assert_eq!((state.groups_seen(), state.last_seq()), (1, 2));

    let mut more = Vec::new();
    state.push_group(&GroupSpec::new(["c"]), &defaults, &mut more);
    assert_eq!(more[0].group, GroupId(2));
    assert_eq!(more[0].seq, ExportSeq(3));
}

#[test]
fn every_cell_of_a_group_shares_the_resolved_style() {
    let mut spec = GroupSpec::new(["big", "words"]);
    spec.overrides = StyleOverrides {
        font_size: 90.0,
        ..StyleOverrides::default()
    };
    let cells = flatten_groups(&[spec, GroupSpec::new(["small"])], &default_style());

    assert!(std::sync::Arc::ptr_eq(&cells[0].style, &cells[1].style));
    assert_eq!(cells[0].style.text.font_size, 90.0);
    assert_eq!(cells[0].style.line_spacing, 90.0);
    assert_eq!(cells[2].style.text.font_size, default_style().text.font_size);
}
