use super::*;

fn defaults() -> DefaultStyle {
    DefaultStyle {
        text: TextStyle {
            font: "Anton-Regular.ttf".to_string(),
            font_size: 50.0,
            color: Argb::WHITE,
        },
        line_spacing: 60.0,
        position: 0.8,
    }
}

#[test]
fn no_overrides_falls_back_to_defaults() {
    let d = defaults();
    let s = resolve_style(&d, &StyleOverrides::default(), StrokeStyle::default());
    assert_eq!(s.text, d.text);
    assert_eq!(s.line_spacing, 60.0);
    assert_eq!(s.position, 0.8);
    assert!(!s.stroke.enabled);
}

#[test]
fn partial_text_override_substitutes_only_set_fields() {
    let overrides = StyleOverrides {
        color: Argb(0xffff0000),
        ..StyleOverrides::default()
    };
    let s = resolve_style(&defaults(), &overrides, StrokeStyle::default());
    assert_eq!(s.text.font, "Anton-Regular.ttf");
    assert_eq!(s.text.font_size, 50.0);
    assert_eq!(s.text.color, Argb(0xffff0000));
    assert_eq!(s.line_spacing, 60.0);
}

#[test]
fn custom_font_size_cascades_into_line_spacing() {
    let overrides = StyleOverrides {
        font_size: 72.0,
        ..StyleOverrides::default()
    };
    let s = resolve_style(&defaults(), &overrides, StrokeStyle::default());
    assert_eq!(s.text.font_size, 72.0);
    assert_eq!(s.line_spacing, 72.0);
}

#[test]
fn explicit_line_spacing_wins_over_font_size() {
    let overrides = StyleOverrides {
        font_size: 72.0,
        line_spacing: 80.0,
        ..StyleOverrides::default()
    };
    let s = resolve_style(&defaults(), &overrides, StrokeStyle::default());
    assert_eq!(s.line_spacing, 80.0);
}

#[test]
fn position_and_line_spacing_resolve_independently_of_the_text_unit() {
    let overrides = StyleOverrides {
        position: 0.25,
        line_spacing: 10.0,
        ..StyleOverrides::default()
    };
    let s = resolve_style(&defaults(), &overrides, StrokeStyle::default());
    assert_eq!(s.text, defaults().text);
    assert_eq!(s.position, 0.25);
    assert_eq!(s.line_spacing, 10.0);
}

#[test]
fn zero_default_line_spacing_uses_default_font_size() {
    let mut d = defaults();
    d.line_spacing = 0.0;
    let s = resolve_style(&d, &StyleOverrides::default(), StrokeStyle::default());
    assert_eq!(s.line_spacing, 50.0);
}

#[test]
fn stroke_is_carried_through_unchanged() {
    let stroke = StrokeStyle {
        enabled: true,
        width: 4.0,
        color: Argb::BLACK,
    };
    let s = resolve_style(&defaults(), &StyleOverrides::default(), stroke);
    assert_eq!(s.stroke, stroke);
}
