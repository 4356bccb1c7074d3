//! Exports the four shipped report charts to PNG files.
//!
//! Usage: `cargo run --bin render_report --features cairo-backend [out_dir]`

use std::path::PathBuf;

use report_charts::api::{
    ChartStyleSheet, build_grouped_bar_frame, build_involvement_frame, build_radar_frame,
    build_timeline_frame,
};
use report_charts::content;
use report_charts::core::Viewport;
use report_charts::render::{CairoRenderer, Renderer};
use report_charts::{ChartResult, telemetry};

fn main() -> ChartResult<()> {
    let _ = telemetry::init_default_tracing();

    let out_dir = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from("."), PathBuf::from);
    let styles = ChartStyleSheet::default();

    let large = Viewport::new(700, 350);
    let small = Viewport::new(600, 300);

    let charts = [
        (
            "diagnosis_radar.png",
            build_radar_frame(&content::diagnosis_radar_data(), large, &styles.radar)?.frame,
        ),
        (
            "objectives_bars.png",
            build_grouped_bar_frame(&content::objectives_bar_data(), large, &styles.bars)?.frame,
        ),
        (
            "stakeholder_involvement.png",
            build_involvement_frame(&content::stakeholder_data(), small, &styles.involvement)?
                .frame,
        ),
        (
            "timeline_donut.png",
            build_timeline_frame(&content::timeline_data(), small, &styles.timeline)?.frame,
        ),
    ];

    for (file_name, frame) in charts {
        let mut renderer =
            CairoRenderer::new(frame.viewport.width as i32, frame.viewport.height as i32)?;
        renderer.render(&frame)?;
        let path = out_dir.join(file_name);
        renderer.write_png(&path)?;
        println!("wrote {}", path.display());
    }

    Ok(())
}
