use tracing::debug;

use crate::api::{
    GroupedBarStyle, LegendEntry, LegendLayoutConfig, LegendOrientation, build_legend_rows,
};
use crate::core::{BarPoint, GroupedBarGeometry, Viewport, project_grouped_bars};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    LinePrimitive, LineStrokeStyle, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

/// Assembled objectives scene: the validated frame plus bar geometry kept
/// for hover hit-testing. `plot_viewport` is the region above the category
/// labels and legend strip.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedBarScene {
    pub frame: RenderFrame,
    pub geometry: GroupedBarGeometry,
    pub plot_viewport: Viewport,
}

const GRID_STROKE_WIDTH: f64 = 1.0;
const CATEGORY_LABEL_OFFSET_PX: f64 = 8.0;

/// Builds the objectives frame: dashed horizontal gridlines, two rounded
/// bars per category (current left, target right), category labels and a
/// bottom legend naming both series.
pub fn build_grouped_bar_frame(
    points: &[BarPoint],
    viewport: Viewport,
    style: &GroupedBarStyle,
) -> ChartResult<GroupedBarScene> {
    debug!(categories = points.len(), "assembling grouped bar frame");

    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }

    let plot_height = (f64::from(viewport.height) - style.footer_height_px).max(1.0);
    let plot_viewport = Viewport::new(viewport.width, plot_height as u32);
    let geometry = project_grouped_bars(points, plot_viewport, style.layout)?;

    let mut frame = RenderFrame::new(viewport);
    if geometry.categories.is_empty() {
        return Ok(GroupedBarScene {
            frame,
            geometry,
            plot_viewport,
        });
    }

    // Horizontal gridlines only; vertical ones stay off.
    for level in 0..=style.grid_lines.max(1) {
        let y = plot_height * (1.0 - f64::from(level) / f64::from(style.grid_lines.max(1)));
        frame.lines.push(
            LinePrimitive::new(
                0.0,
                y,
                f64::from(viewport.width),
                y,
                GRID_STROKE_WIDTH,
                style.grid_color,
            )
            .with_stroke_style(LineStrokeStyle::Dashed),
        );
    }

    for category in &geometry.categories {
        for (bar, fill) in [
            (category.current, style.current_fill),
            (category.target, style.target_fill),
        ] {
            if bar.height <= 0.0 {
                continue;
            }
            // Bars sit on the baseline, so only their top corners round.
            frame.rects.push(
                RectPrimitive::new(bar.x, bar.y, bar.width, bar.height, fill)
                    .with_top_corner_radius(style.corner_radius),
            );
        }

        frame.texts.push(TextPrimitive::new(
            category.name.clone(),
            category.slot_center_x,
            plot_height + CATEGORY_LABEL_OFFSET_PX,
            style.label_font_size_px,
            style.label_color,
            TextHAlign::Center,
        ));
    }

    let legend_entries = [
        LegendEntry::new(style.current_label.clone(), style.current_fill),
        LegendEntry::new(style.target_label.clone(), style.target_fill),
    ];
    push_legend(&mut frame, &legend_entries, viewport, style)?;

    frame.validate()?;
    Ok(GroupedBarScene {
        frame,
        geometry,
        plot_viewport,
    })
}

fn push_legend(
    frame: &mut RenderFrame,
    entries: &[LegendEntry],
    viewport: Viewport,
    style: &GroupedBarStyle,
) -> ChartResult<()> {
    let config = LegendLayoutConfig {
        font_size_px: style.label_font_size_px,
        ..LegendLayoutConfig::default()
    };
    for row in build_legend_rows(entries, viewport, LegendOrientation::HorizontalBottom, config)? {
        frame.rects.push(RectPrimitive::new(
            row.swatch_x,
            row.swatch_y,
            row.swatch_size,
            row.swatch_size,
            row.swatch,
        ));
        frame.texts.push(TextPrimitive::new(
            row.label,
            row.label_x,
            row.label_y,
            config.font_size_px,
            style.label_color,
            TextHAlign::Left,
        ));
    }
    Ok(())
}
