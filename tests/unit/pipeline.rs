use super::*;
use crate::{
    caption::style::StyleOverrides,
    encode::sink::{InMemorySink, OutputNaming},
    foundation::core::{ExportSeq, GroupId},
    foundation::error::RevealError,
    test_support::{FixedMetrics, RecordingBackend, default_style},
};

const SIZE: Canvas = Canvas {
    width: 100,
    height: 100,
};

fn key(group: u32, seq: u32) -> ExportKey {
    ExportKey {
        group: GroupId(group),
        seq: ExportSeq(seq),
    }
}

#[test]
fn round_trip_scenario_exports_two_frames() {
    let groups = vec![
        GroupSpec::new(["hi", "[newline]", "there"]),
        GroupSpec::new(["solo"]),
    ];
    let mut backend = RecordingBackend::default();
    let mut sink = InMemorySink::new(OutputNaming::default());

    let report = run(&groups, &default_style(), SIZE, &mut backend, &mut sink).unwrap();

    assert_eq!(report.groups, 2);
    assert_eq!(report.cells, 4);
    assert_eq!(report.exported, vec![key(1, 3), key(2, 4)]);
    assert!(report.warnings.is_empty());
    assert_eq!(sink.config(), Some(SinkConfig { canvas: SIZE }));
    assert_eq!(backend.live_canvases(), 0);
}

#[test]
fn plan_predicts_the_exports_of_a_run() {
    let groups = vec![
        GroupSpec::new(["For", "the", "[newline]", "longevity"]),
        GroupSpec::new(["of", "[wait(15)]", "ball"]),
    ];
    let plan = plan_captions(&groups, &default_style(), SIZE, &mut FixedMetrics::default())
        .unwrap();

    let mut backend = RecordingBackend::default();
    let mut sink = InMemorySink::new(OutputNaming::default());
    let exported = render_plan(&plan, &mut backend, &mut sink).unwrap();

    assert_eq!(plan.export_keys(), exported);
    assert_eq!(exported, vec![key(1, 1), key(1, 4), key(2, 5), key(2, 7)]);
}

#[test]
fn missing_font_aborts_before_any_canvas_exists() {
    let mut spec = GroupSpec::new(["late"]);
    spec.overrides = StyleOverrides {
        font: "missing.ttf".to_string(),
        ..StyleOverrides::default()
    };
    let groups = vec![GroupSpec::new(["early"]), spec];

    let mut backend = RecordingBackend::default();
    backend.metrics.missing_fonts.insert("missing.ttf".to_string());
    let mut sink = InMemorySink::new(OutputNaming::default());

    let err = run(&groups, &default_style(), SIZE, &mut backend, &mut sink).unwrap_err();
    assert!(
        matches!(err, RevealError::MissingStyleAsset { ref font, .. } if font == "missing.ttf")
    );
    assert!(backend.ops.is_empty());
    assert!(sink.config().is_none());
    assert!(sink.frames().is_empty());
}

#[test]
fn each_distinct_font_is_resolved_once() {
    let mut custom = GroupSpec::new(["b"]);
    custom.overrides.font = "other.ttf".to_string();
    let groups = vec![
        GroupSpec::new(["a", "a"]),
        custom,
        GroupSpec::new(["c"]),
    ];
    let mut metrics = FixedMetrics::default();
    plan_captions(&groups, &default_style(), SIZE, &mut metrics).unwrap();
    assert_eq!(metrics.resolved, vec!["other.ttf".to_string(), "test.ttf".to_string()]);
}

#[test]
fn overflow_is_reported_and_rendering_proceeds() {
    let groups = vec![GroupSpec::new(["w".repeat(25)])];
    let mut backend = RecordingBackend::default();
    let mut sink = InMemorySink::new(OutputNaming::default());

    let report = run(&groups, &default_style(), SIZE, &mut backend, &mut sink).unwrap();

    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].margin, -75);
    assert_eq!(report.exported, vec![key(1, 1)]);
    assert_eq!(backend.draws()[0].1, -75.0);
}

#[test]
fn empty_input_is_a_no_op() {
    let mut backend = RecordingBackend::default();
    let mut sink = InMemorySink::new(OutputNaming::default());

    let report = run(&[], &default_style(), SIZE, &mut backend, &mut sink).unwrap();
    assert_eq!(report, RunReport::default());

    let report = run(
        &[GroupSpec::default(), GroupSpec::default()],
        &default_style(),
        SIZE,
        &mut backend,
        &mut sink,
    )
    .unwrap();
    assert_eq!(report.groups, 2);
    assert!(report.exported.is_empty());
    assert!(backend.ops.is_empty());
}

#[test]
fn sequence_numbers_are_gap_free_from_one() {
    let groups = vec![
        GroupSpec::new(["it actually matters", "[newline]", "which ring is fixed"]),
        GroupSpec::new(["[wait(0)]"]),
        GroupSpec::new(["Rotation", "[newline]", "causes", "[newline]", "spin"]),
    ];
    let plan = plan_captions(&groups, &default_style(), SIZE, &mut FixedMetrics::default())
        .unwrap();
    let seqs: Vec<u32> = plan.cells.iter().map(|c| c.seq.0).collect();
    assert_eq!(seqs, (1..=9).collect::<Vec<_>>());
}
