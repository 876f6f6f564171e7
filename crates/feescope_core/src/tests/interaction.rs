use crate::format::CurrencyFormatter;
use crate::interaction::{InteractionState, PointEventKind};

#[test]
fn formats_points_in_fixed_currency() {
    let formatter = CurrencyFormatter::eur();
    assert_eq!(formatter.format_point(10.0, 1500.5), "Year 10: \u{20ac}1,500.50");
    assert_eq!(formatter.format_point(0.0, 1000.0), "Year 0: \u{20ac}1,000.00");
    assert_eq!(
        formatter.format_point(45.0, 1_234_567.891),
        "Year 45: \u{20ac}1,234,567.89"
    );
}

#[test]
fn cent_rounding_carries_into_units() {
    let formatter = CurrencyFormatter::eur();
    assert_eq!(formatter.format(999.999), "\u{20ac}1,000.00");
    assert_eq!(formatter.format(-0.005), "-\u{20ac}0.01");
}

#[test]
fn compact_form_scales_units() {
    let formatter = CurrencyFormatter::eur();
    assert_eq!(formatter.format_compact(2_100_000.0), "\u{20ac}2.1M");
    assert_eq!(formatter.format_compact(450_000.0), "\u{20ac}450K");
    assert_eq!(formatter.format_compact(50.0), "\u{20ac}50");
}

#[test]
fn hover_click_unhover_cycle() {
    let mut state = InteractionState::default();

    state.on_point_event(Some((10.0, 1500.5)), PointEventKind::Hover);
    assert_eq!(state.hovered.as_deref(), Some("Year 10: \u{20ac}1,500.50"));
    assert_eq!(state.selected, None);

    state.on_point_event(Some((10.0, 1500.5)), PointEventKind::Click);
    assert_eq!(state.selected.as_deref(), Some("Year 10: \u{20ac}1,500.50"));

    state.on_point_event(None, PointEventKind::Unhover);
    assert_eq!(state.hovered, None);
    // Selection is sticky across unhover.
    assert_eq!(state.selected.as_deref(), Some("Year 10: \u{20ac}1,500.50"));

    state.on_point_event(Some((11.0, 1600.0)), PointEventKind::Click);
    assert_eq!(state.selected.as_deref(), Some("Year 11: \u{20ac}1,600.00"));
}

#[test]
fn empty_point_events_are_no_ops() {
    let mut state = InteractionState::default();
    state.on_point_event(None, PointEventKind::Hover);
    state.on_point_event(None, PointEventKind::Click);
    assert_eq!(state.hovered, None);
    assert_eq!(state.selected, None);
}

#[test]
fn clear_drops_both_labels() {
    let mut state = InteractionState::default();
    state.on_point_event(Some((1.0, 1.0)), PointEventKind::Hover);
    state.on_point_event(Some((1.0, 1.0)), PointEventKind::Click);
    state.clear();
    assert_eq!(state.hovered, None);
    assert_eq!(state.selected, None);
}
