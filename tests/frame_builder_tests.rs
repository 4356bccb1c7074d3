use report_charts::api::{
    ChartStyleSheet, GroupedBarStyle, InvolvementStyle, LegendEntry, LegendLayoutConfig,
    LegendOrientation, RadarStyle, TimelineStyle, build_grouped_bar_frame,
    build_involvement_frame, build_legend_rows, build_radar_frame, build_timeline_frame,
    palette,
};
use report_charts::content;
use report_charts::core::Viewport;
use report_charts::render::{Color, NullRenderer, RectCorners, Renderer};

#[test]
fn radar_frame_has_grid_spokes_area_and_labels() {
    let viewport = Viewport::new(400, 400);
    let style = RadarStyle::default();
    let scene = build_radar_frame(&content::diagnosis_radar_data(), viewport, &style)
        .expect("radar frame");

    // One grid ring per level plus the value polygon.
    assert_eq!(scene.frame.polygons.len(), style.grid_levels as usize + 1);
    assert_eq!(scene.frame.lines.len(), 6);
    assert_eq!(scene.frame.texts.len(), 6);
    scene.frame.validate().expect("valid frame");
}

#[test]
fn grouped_bar_frame_counts_bars_labels_and_legend() {
    let viewport = Viewport::new(500, 448);
    let style = GroupedBarStyle::default();
    let scene = build_grouped_bar_frame(&content::objectives_bar_data(), viewport, &style)
        .expect("bar frame");

    // 10 bars plus 2 legend swatches.
    assert_eq!(scene.frame.rects.len(), 12);
    // 5 category labels plus 2 legend labels.
    assert_eq!(scene.frame.texts.len(), 7);
    scene.frame.validate().expect("valid frame");
}

#[test]
fn bars_round_only_their_top_corners() {
    let viewport = Viewport::new(500, 448);
    let style = GroupedBarStyle::default();
    let scene = build_grouped_bar_frame(&content::objectives_bar_data(), viewport, &style)
        .expect("bar frame");

    let bars: Vec<_> = scene
        .frame
        .rects
        .iter()
        .filter(|rect| rect.rounded_corners == RectCorners::Top)
        .collect();
    assert_eq!(bars.len(), 10);
    for bar in &bars {
        assert_eq!(bar.corner_radius, style.corner_radius);
    }

    // Legend swatches are not bars and keep square corners.
    assert!(
        scene
            .frame
            .rects
            .iter()
            .filter(|rect| rect.rounded_corners == RectCorners::All)
            .all(|rect| rect.corner_radius == 0.0)
    );
}

#[test]
fn involvement_frame_tracks_and_legend_keep_input_order() {
    let viewport = Viewport::new(600, 300);
    let points = content::stakeholder_data();
    let scene = build_involvement_frame(&points, viewport, &InvolvementStyle::default())
        .expect("involvement frame");

    // Track + value arc per ring, except rings with a zero sweep.
    assert!(scene.frame.arcs.len() >= points.len());
    assert_eq!(scene.rings.len(), points.len());

    // Legend labels appear in dataset order within the text stream.
    let labels: Vec<&str> = scene
        .frame
        .texts
        .iter()
        .map(|text| text.text.as_str())
        .filter(|text| points.iter().any(|point| point.name == *text))
        .collect();
    assert_eq!(
        labels,
        ["Service RH", "Membres", "Experts Ext.", "Resp. Comm", "PDG"]
    );
}

#[test]
fn timeline_frame_draws_one_arc_per_segment() {
    let viewport = Viewport::new(300, 336);
    let scene = build_timeline_frame(&content::timeline_data(), viewport, &TimelineStyle::default())
        .expect("timeline frame");

    assert_eq!(scene.frame.arcs.len(), 3);
    // Circular legend markers, one per horizon.
    assert_eq!(scene.frame.rects.len(), 3);
    assert_eq!(scene.frame.texts.len(), 3);
}

#[test]
fn empty_datasets_build_empty_frames_without_error() {
    let viewport = Viewport::new(400, 400);

    let radar = build_radar_frame(&[], viewport, &RadarStyle::default()).expect("radar");
    assert!(radar.frame.is_empty());

    let bars = build_grouped_bar_frame(&[], viewport, &GroupedBarStyle::default()).expect("bars");
    assert!(bars.frame.is_empty());

    let rings =
        build_involvement_frame(&[], viewport, &InvolvementStyle::default()).expect("rings");
    assert!(rings.frame.is_empty());

    let donut =
        build_timeline_frame(&[], viewport, &TimelineStyle::default()).expect("donut");
    assert!(donut.frame.is_empty());
}

#[test]
fn null_renderer_reports_primitive_counts() {
    let viewport = Viewport::new(400, 400);
    let scene = build_radar_frame(&content::diagnosis_radar_data(), viewport, &RadarStyle::default())
        .expect("radar frame");

    let mut renderer = NullRenderer::default();
    renderer.render(&scene.frame).expect("render");

    assert_eq!(renderer.last_polygon_count, scene.frame.polygons.len());
    assert_eq!(renderer.last_line_count, scene.frame.lines.len());
    assert_eq!(renderer.last_text_count, scene.frame.texts.len());
}

#[test]
fn legend_rows_preserve_entry_order_in_both_orientations() {
    let viewport = Viewport::new(600, 300);
    let entries = [
        LegendEntry::new("RH", palette::BLUE_900),
        LegendEntry::new("Membres", palette::ORANGE_500),
        LegendEntry::new("Experts", palette::SLATE_500),
        LegendEntry::new("Comm", palette::PURPLE_600),
        LegendEntry::new("PDG", palette::CYAN_500),
    ];

    for orientation in [LegendOrientation::VerticalRight, LegendOrientation::HorizontalBottom] {
        let rows = build_legend_rows(&entries, viewport, orientation, LegendLayoutConfig::default())
            .expect("legend layout");
        let labels: Vec<&str> = rows.iter().map(|row| row.label.as_str()).collect();
        assert_eq!(labels, ["RH", "Membres", "Experts", "Comm", "PDG"]);
    }
}

#[test]
fn color_tokens_parse_from_hex() {
    let orange = Color::from_hex("#f97316").expect("parse");
    assert_eq!(orange, palette::ORANGE_500);

    let with_alpha = Color::from_hex("#1e3a8a80").expect("parse");
    assert!((with_alpha.alpha - 128.0 / 255.0).abs() <= 1e-9);

    assert!(Color::from_hex("#12345").is_err());
    assert!(Color::from_hex("not-a-color").is_err());
}

#[test]
fn style_sheet_round_trips_through_json() {
    let styles = ChartStyleSheet::default();
    let json = styles.to_json_pretty().expect("serialize");
    let restored = ChartStyleSheet::from_json_str(&json).expect("parse");
    assert_eq!(styles, restored);
}
