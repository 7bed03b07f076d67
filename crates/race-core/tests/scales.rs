// File: crates/race-core/tests/scales.rs
// Purpose: Validate pixel placement at the chart-area edges.

use race_core::scale::{GameScale, ScoreScale};
use race_core::types::Insets;

#[test]
fn game_scale_endpoints() {
    let width = 1200.0;
    let insets = Insets::default();
    let chart_w = width - insets.hsum() as f64;

    for n in [2usize, 3, 8, 20] {
        let xs = GameScale::new(insets.left as f64, chart_w, n);
        assert_eq!(xs.to_px(1), insets.left as f64, "n={n}");
        assert_eq!(xs.to_px(n), width - insets.right as f64, "n={n}");
    }
}

#[test]
fn game_scale_spacing_is_even() {
    let xs = GameScale::new(150.0, 1000.0, 8);
    let step = 1000.0 / 7.0;
    for g in 1..8 {
        let got = xs.to_px(g + 1) - xs.to_px(g);
        assert!((got - step).abs() < 1e-9, "interval {g}: {got} vs {step}");
    }
}

#[test]
fn score_scale_endpoints() {
    let top = 50.0;
    let chart_h = 700.0;
    let ys = ScoreScale::new(top, chart_h, 35.0);
    assert_eq!(ys.to_px(0.0), top + chart_h);
    assert_eq!(ys.to_px(35.0), top);
}

#[test]
fn score_scale_is_monotone_decreasing() {
    let ys = ScoreScale::new(50.0, 700.0, 100.0);
    assert!(ys.to_px(10.0) > ys.to_px(20.0));
    assert!(ys.to_px(20.0) > ys.to_px(99.0));
}

#[test]
fn higher_total_lands_higher_on_canvas() {
    // final totals 35 vs 25: the larger total must sit nearer the top
    let ys = ScoreScale::new(50.0, 700.0, 35.0);
    assert!(ys.to_px(35.0) < ys.to_px(25.0));
}
