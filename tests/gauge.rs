//! End-to-end rendering tests: drive the public API and assert on the
//! serialized SVG structure, plus property tests for the fill partition.

use quickcheck_macros::quickcheck;

use stargauge::{
    DataView, Gauge, GaugeConfig, Measure, Role, SymbolKind, Viewport, render_gauge,
};

fn viewport() -> Viewport {
    Viewport::new(400.0, 100.0)
}

fn value_view(value: f64) -> DataView {
    let mut view = DataView::new();
    view.push(Measure::new(Role::Value, value));
    view
}

#[test]
fn bare_row_has_the_base_viewbox() {
    let config = GaugeConfig {
        show_label: Some(false),
        ..Default::default()
    };
    let svg = render_gauge(&value_view(2.5), &config, viewport());
    assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg""#));
    assert!(svg.contains(r#"width="400" height="100""#));
    // 5 star symbols at 88.46 pitch
    assert!(svg.contains(r#"viewBox="0 0 442.3 80.32""#));
}

#[test]
fn half_filled_row_emits_one_clipped_symbol() {
    let config = GaugeConfig {
        show_label: Some(false),
        ..Default::default()
    };
    let svg = render_gauge(&value_view(2.5), &config, viewport());

    // clip shape + 4 whole symbols + 1 clipped symbol
    assert_eq!(svg.matches("<polygon").count(), 6);
    assert_eq!(svg.matches("<rect").count(), 1);
    assert!(svg.contains(r#"<clipPath id="clip-star">"#));
    assert!(svg.contains(r#"clip-path="url(#clip-star)""#));
    // the mask covers the unfilled half: (1 - 0.5) * 84.46
    assert!(svg.contains(r##"<rect width="42.23" height="80.32" fill="#E6E7E8""##));
}

#[test]
fn whole_valued_row_has_no_clipped_symbol() {
    let config = GaugeConfig {
        show_label: Some(false),
        ..Default::default()
    };
    let svg = render_gauge(&value_view(3.0), &config, viewport());
    assert!(!svg.contains("clip-path="));
    assert_eq!(svg.matches("<rect").count(), 0);
}

#[test]
fn value_label_offsets_the_symbol_row() {
    let svg = render_gauge(&value_view(3.5), &GaugeConfig::default(), viewport());
    // half the symbol height, positioned two thirds down
    assert!(svg.contains(r#"font-size="40.16px""#));
    assert!(svg.contains(r#"translate(0,53.5467)"#));
    assert!(svg.contains(">3.5</text>"));
    // "3.5" measures 51.963 at 40.16px; plus 16 padding
    assert!(svg.contains(r#"transform="translate(67.963)""#));
}

#[test]
fn target_line_widens_the_viewbox_and_pushes_the_row_down() {
    let config = GaugeConfig {
        show_label: Some(false),
        show_target_label: Some(false),
        target: Some(3.0),
        ..Default::default()
    };
    let svg = render_gauge(&value_view(2.0), &config, viewport());
    assert!(svg.contains(r#"viewBox="0 0 442.3 88.32""#));
    assert!(svg.contains(r#"<g transform="translate(0,4)">"#));
    // whole target centers in the inter-symbol gap: 3 * 88.46 - 2
    assert!(svg.contains(r#"class="target-line-group" transform="translate(263.38)""#));
    assert!(svg.contains(r##"<rect width="2" height="88.32" fill="#666666" transform="translate(-1,0)"/>"##));
}

#[test]
fn fractional_target_lands_inside_the_symbol() {
    let config = GaugeConfig {
        show_label: Some(false),
        show_target_label: Some(false),
        target: Some(3.5),
        ..Default::default()
    };
    let svg = render_gauge(&value_view(2.0), &config, viewport());
    // 3 * 88.46 + 0.5 * 84.46
    assert!(svg.contains(r#"transform="translate(307.61)""#));
}

#[test]
fn target_label_takes_a_taller_row() {
    let config = GaugeConfig {
        show_label: Some(false),
        target: Some(3.0),
        ..Default::default()
    };
    let svg = render_gauge(&value_view(2.0), &config, viewport());
    assert!(svg.contains(r#"viewBox="0 0 442.3 112.32""#));
    assert!(svg.contains(r#"<g transform="translate(0,28)">"#));
    assert!(svg.contains(">3</text>"));
    // line drops below the label
    assert!(svg.contains(r#"transform="translate(-1,24)""#));
}

#[test]
fn min_max_labels_appear_under_the_row() {
    let config = GaugeConfig {
        show_label: Some(false),
        ..Default::default()
    };
    let mut view = value_view(5.0);
    view.push(Measure::new(Role::Min, 0.0));
    view.push(Measure::new(Role::Max, 10.0));
    let svg = render_gauge(&view, &config, viewport());

    assert!(svg.contains(r#"viewBox="0 0 442.3 104.32""#));
    assert!(svg.contains(r#"font-size="24px""#));
    // min label sits just right of the zero target position
    assert!(svg.contains(r#"translate(0,102.32)"#));
    assert!(svg.contains(">0</text>"));
    assert!(svg.contains(">10</text>"));
}

#[test]
fn min_max_labels_can_be_turned_off() {
    let config = GaugeConfig {
        show_label: Some(false),
        show_min_max_labels: Some(false),
        ..Default::default()
    };
    let mut view = value_view(5.0);
    view.push(Measure::new(Role::Max, 10.0));
    let svg = render_gauge(&view, &config, viewport());
    assert!(svg.contains(r#"viewBox="0 0 442.3 80.32""#));
    assert!(!svg.contains("<text"));
}

#[test]
fn heart_gauge_uses_path_geometry() {
    let config = GaugeConfig {
        symbol: Some(SymbolKind::Heart),
        show_label: Some(false),
        ..Default::default()
    };
    let svg = render_gauge(&value_view(1.5), &config, viewport());
    assert!(svg.contains(r#"<clipPath id="clip-heart">"#));
    assert!(svg.contains("<path"));
    assert!(!svg.contains("<polygon"));
    assert!(svg.contains("#ed2024"));
}

#[test]
fn stroke_outline_survives_the_partial_fill_mask() {
    let config = GaugeConfig {
        show_label: Some(false),
        show_stroke: Some(true),
        ..Default::default()
    };
    let svg = render_gauge(&value_view(2.5), &config, viewport());
    // the clipped symbol gets an unclipped outline redraw on top
    assert!(svg.contains(r##"fill="none" stroke="#FBB040" stroke-width="2""##));
}

#[test]
fn degenerate_domain_renders_an_empty_row() {
    let config = GaugeConfig {
        min: Some(3.0),
        max: Some(3.0),
        target: Some(3.0),
        show_label: Some(false),
        show_min_max_labels: Some(false),
        ..Default::default()
    };
    let svg = render_gauge(&value_view(3.0), &config, viewport());
    // every symbol empty, target suppressed
    assert_eq!(svg.matches(r##"fill="#E6E7E8""##).count(), 5);
    assert!(!svg.contains("target-line-group"));
}

#[test]
fn zero_target_still_draws_a_marker() {
    let config = GaugeConfig {
        show_label: Some(false),
        target: Some(0.0),
        ..Default::default()
    };
    let svg = render_gauge(&value_view(2.0), &config, viewport());
    assert!(svg.contains("target-line-group"));
}

#[test]
fn gauge_instance_matches_one_shot_rendering() {
    let config = GaugeConfig {
        num_symbols: Some(10),
        ..Default::default()
    };
    let view = value_view(7.2);
    let gauge = Gauge::new(config.clone());
    assert_eq!(
        gauge.update(&view, viewport()),
        render_gauge(&view, &config, viewport())
    );
}

#[test]
fn reconfiguring_a_gauge_changes_the_next_update() {
    let mut gauge = Gauge::new(GaugeConfig::default());
    let view = value_view(2.0);
    let before = gauge.update(&view, viewport());

    gauge.set_config(GaugeConfig {
        symbol: Some(SymbolKind::DollarSign),
        ..Default::default()
    });
    let after = gauge.update(&view, viewport());

    assert_ne!(before, after);
    assert!(after.contains("clip-dollarsign"));
    assert_eq!(gauge.symbol_options().symbol, SymbolKind::DollarSign);
}

#[quickcheck]
fn fill_levels_sum_to_the_clamped_value(tenths: u16, count: u8) {
    let value = (tenths % 1500) as f64 / 10.0;
    let count = (count % 100) as u32 + 1;
    let sum: f64 = (0..count).map(|i| stargauge::render::fill_level(value, i)).sum();
    assert!((sum - value.min(count as f64)).abs() < 1e-9);
}

#[quickcheck]
fn at_most_one_symbol_is_partial(tenths: u16, count: u8) {
    let value = (tenths % 1500) as f64 / 10.0;
    let count = (count % 100) as u32 + 1;
    let partials = (0..count)
        .map(|i| stargauge::render::fill_level(value, i))
        .filter(|f| *f > 0.0 && *f < 1.0)
        .count();
    assert!(partials <= 1);
}

#[quickcheck]
fn fill_levels_never_increase_along_the_row(tenths: u16, count: u8) {
    let value = (tenths % 1500) as f64 / 10.0;
    let count = (count % 100) as u32 + 1;
    let levels: Vec<f64> = (0..count)
        .map(|i| stargauge::render::fill_level(value, i))
        .collect();
    assert!(levels.windows(2).all(|w| w[0] >= w[1]));
}

#[quickcheck]
fn rendering_is_deterministic(tenths: u16, count: u8, show_label: bool, target_tenths: u16) {
    let config = GaugeConfig {
        num_symbols: Some((count % 100) as i64 + 1),
        show_label: Some(show_label),
        target: Some((target_tenths % 100) as f64 / 10.0),
        ..Default::default()
    };
    let view = value_view((tenths % 1500) as f64 / 10.0);
    let first = render_gauge(&view, &config, viewport());
    let second = render_gauge(&view, &config, viewport());
    assert_eq!(first, second);
    assert!(first.starts_with("<svg"));
    assert!(first.contains("viewBox"));
}
