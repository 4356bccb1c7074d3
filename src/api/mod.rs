mod grouped_bar_frame_builder;
mod involvement_frame_builder;
mod legend_layout_builder;
mod radar_frame_builder;
pub mod style;
mod timeline_frame_builder;
mod tooltip_resolver;

pub use grouped_bar_frame_builder::{GroupedBarScene, build_grouped_bar_frame};
pub use involvement_frame_builder::{InvolvementScene, build_involvement_frame};
pub use legend_layout_builder::{
    LegendEntry, LegendLayoutConfig, LegendOrientation, LegendRowGeometry, build_legend_rows,
};
pub use radar_frame_builder::{RadarScene, build_radar_frame};
pub use style::{
    ChartStyleSheet, GroupedBarStyle, InvolvementStyle, RadarStyle, TimelineStyle, palette,
};
pub use timeline_frame_builder::{TimelineScene, build_timeline_frame};
pub use tooltip_resolver::{
    TooltipContent, resolve_bar_tooltip, resolve_involvement_tooltip, resolve_radar_tooltip,
    resolve_timeline_tooltip,
};
