use super::*;
use crate::error::ChartError;

fn chart(values: &[f64], options: PieOptions) -> PieChart {
    PieChart::new(
        values
            .iter()
            .enumerate()
            .map(|(i, v)| DataPoint::new(format!("P{i}"), *v))
            .collect(),
        options,
    )
}

fn total_sweep(slices: &[PieSlice]) -> f64 {
    slices.iter().map(|s| s.arc.sweep()).sum()
}

#[test]
fn sweeps_sum_to_full_turn() {
    for values in [
        vec![1.0, 2.0, 3.0],
        vec![35.0, 25.0, 20.0, 15.0, 5.0],
        vec![0.1, 0.2, 0.3, 0.7, 1e-3],
        vec![1e9, 3.3e8, 7.0],
    ] {
        let slices = chart(&values, PieOptions::default()).slices().unwrap();
        assert!((total_sweep(&slices) - 360.0).abs() < 1e-6, "{values:?}");
    }
}

#[test]
fn slices_are_contiguous_from_start_angle() {
    let slices = chart(&[1.0, 1.0, 2.0], PieOptions::default())
        .slices()
        .unwrap();
    assert!((slices[0].arc.start_deg + 90.0).abs() < 1e-9);
    assert!((slices[0].arc.end_deg).abs() < 1e-9);
    assert!((slices[1].arc.start_deg - slices[0].arc.end_deg).abs() < 1e-9);
    assert!((slices[2].arc.end_deg - 270.0).abs() < 1e-9);
    assert!((slices[2].fraction - 0.5).abs() < 1e-12);
}

#[test]
fn custom_start_angle() {
    let options = PieOptions {
        start_angle: 0.0,
        ..PieOptions::default()
    };
    let slices = chart(&[1.0, 1.0], options).slices().unwrap();
    assert!((slices[1].arc.start_deg - 180.0).abs() < 1e-9);
}

#[test]
fn single_entry_renders_full_circle() {
    let pie = chart(&[42.0], PieOptions::default());
    let slices = pie.slices().unwrap();
    assert_eq!(slices.len(), 1);
    assert!((slices[0].arc.sweep() - 360.0).abs() < 1e-9);

    // a full turn is drawn as two half arcs
    let path = slices[0].arc.path();
    assert_eq!(path.matches('A').count(), 2);
    assert!(pie.render().unwrap().contains(">100%</text>"));
}

#[test]
fn single_entry_donut_renders_full_annulus() {
    let options = PieOptions {
        hole_size: 0.5,
        ..PieOptions::default()
    };
    let slices = chart(&[3.0], options).slices().unwrap();
    let path = slices[0].arc.path();
    assert_eq!(path.matches('A').count(), 4);
}

#[test]
fn donut_inner_radius_follows_hole_size() {
    let options = PieOptions {
        width: 240.0,
        height: 240.0,
        padding: 20.0,
        hole_size: 0.5,
        ..PieOptions::default()
    };
    let pie = chart(&[1.0, 2.0], options);
    assert!((pie.outer_radius() - 100.0).abs() < 1e-9);
    assert!((pie.inner_radius() - 50.0).abs() < 1e-9);

    let slices = pie.slices().unwrap();
    assert!(slices.iter().all(|s| (s.arc.inner_radius - 50.0).abs() < 1e-9));
}

#[test]
fn zero_slices_are_skipped() {
    let slices = chart(&[1.0, 0.0, 1.0], PieOptions::default())
        .slices()
        .unwrap();
    assert_eq!(slices.len(), 2);
    assert_eq!(slices[1].label, "P2");
    assert!((total_sweep(&slices) - 360.0).abs() < 1e-6);
}

#[test]
fn zero_total_renders_placeholder() {
    let svg = chart(&[0.0, 0.0], PieOptions::default()).render().unwrap();
    assert!(svg.contains("No data available"));
    assert!(!svg.contains("<path"));

    let svg = chart(&[], PieOptions::default()).render().unwrap();
    assert!(svg.contains("No data available"));
}

#[test]
fn explode_moves_slice_along_mid_angle() {
    let options = PieOptions {
        explode_slices: true,
        explode_offset: 10.0,
        start_angle: 0.0,
        ..PieOptions::default()
    };
    let pie = chart(&[1.0, 1.0, 1.0, 1.0], options);
    let slices = pie.slices().unwrap();
    // first slice spans 0..90, so its centre moves down-right along 45 degrees
    let shift = 10.0 / 2.0_f64.sqrt();
    assert!((slices[0].arc.center.x - (pie.center().x + shift)).abs() < 1e-9);
    assert!((slices[0].arc.center.y - (pie.center().y + shift)).abs() < 1e-9);
}

#[test]
fn explode_leaves_full_circle_centred() {
    let options = PieOptions {
        explode_slices: true,
        ..PieOptions::default()
    };
    let pie = chart(&[5.0], options);
    assert_eq!(pie.slices().unwrap()[0].arc.center, pie.center());
}

#[test]
fn render_emits_slice_per_value() {
    let svg = chart(&[35.0, 25.0, 20.0, 15.0, 5.0], PieOptions::default())
        .render()
        .unwrap();
    assert_eq!(svg.matches(r#"<path class="slice""#).count(), 5);
    assert_eq!(svg.matches(r#"<g class="slice-group">"#).count(), 5);
    assert!(svg.contains(">35%</text>"));
    assert!(svg.contains(">35 (35.0%)</text>"));
    assert!(svg.contains(".slice:hover"));
}

#[test]
fn without_tooltips_slices_carry_titles() {
    let options = PieOptions {
        show_tooltips: false,
        show_labels: false,
        ..PieOptions::default()
    };
    let svg = chart(&[1.0, 3.0], options).render().unwrap();
    assert!(svg.contains("<title>P1: 3</title>"));
    assert!(!svg.contains("class=\"tooltip\""));
    assert!(!svg.contains("slice-label"));
}

#[test]
fn nan_value_is_rejected() {
    let err = chart(&[f64::NAN], PieOptions::default())
        .render()
        .unwrap_err();
    assert!(matches!(err, ChartError::NonFiniteValue { index: 0, .. }));
}

#[test]
fn configured_colors_are_escaped() {
    let options = PieOptions {
        colors: vec!["#fff' x='1".to_string()],
        ..PieOptions::default()
    };
    let svg = chart(&[1.0, 2.0], options).render().unwrap();

    assert!(svg.contains(r##"fill="#fff&#39; x=&#39;1""##));
    assert!(!svg.contains("x='1"));
}

#[test]
fn overflowing_total_is_invalid_data() {
    let err = chart(&[f64::MAX, f64::MAX], PieOptions::default())
        .render()
        .unwrap_err();
    assert!(matches!(err, ChartError::InvalidData(_)));
}
