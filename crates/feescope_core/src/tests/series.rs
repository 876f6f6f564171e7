use crate::result::SimulationResult;
use crate::series::{HOVER_TEMPLATE, SeriesRole, derive_series};

fn sample_result() -> SimulationResult {
    SimulationResult {
        years: vec![0.0, 1.0, 2.0],
        fee_a: vec![1000.0, 1070.0, 1145.0],
        fee_b: vec![1000.0, 1048.0, 1098.0],
    }
}

#[test]
fn derives_two_labeled_series() {
    let result = sample_result();
    let [a, b] = derive_series(&result, 0.0, 2.0);

    assert_eq!(a.role, SeriesRole::FeeA);
    assert_eq!(a.label, "Fee A (0.00%)");
    assert_eq!(a.points, vec![(0.0, 1000.0), (1.0, 1070.0), (2.0, 1145.0)]);

    assert_eq!(b.role, SeriesRole::FeeB);
    assert_eq!(b.label, "Fee B (2.00%)");
    assert_eq!(b.points, vec![(0.0, 1000.0), (1.0, 1048.0), (2.0, 1098.0)]);

    assert_eq!(a.hover_template, HOVER_TEMPLATE);
    assert_eq!(b.hover_template, HOVER_TEMPLATE);
}

#[test]
fn derivation_is_idempotent() {
    let result = sample_result();
    let first = derive_series(&result, 0.5, 1.25);
    let second = derive_series(&result, 0.5, 1.25);
    assert_eq!(first, second);
    // The input is untouched.
    assert_eq!(result, sample_result());
}

#[test]
fn labels_track_fee_rates() {
    let result = sample_result();
    let [a, b] = derive_series(&result, 0.1, 1.5);
    assert_eq!(a.label, "Fee A (0.10%)");
    assert_eq!(b.label, "Fee B (1.50%)");
}

#[test]
fn role_tags_and_palette_are_stable() {
    assert_eq!(SeriesRole::FeeA.tag(), "fee-a");
    assert_eq!(SeriesRole::FeeB.tag(), "fee-b");
    assert_eq!(SeriesRole::FeeA.color_rgb(), (96, 165, 250));
    assert_eq!(SeriesRole::FeeB.color_rgb(), (249, 115, 22));
}
