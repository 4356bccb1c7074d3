pub mod donut;
pub mod grouped_bar;
pub mod polar;
pub mod radar;
pub mod radial_bar;
pub mod scale;
pub mod types;

pub use donut::{DonutLayout, SegmentGeometry, TimelinePoint, project_donut_segments};
pub use grouped_bar::{
    BarPoint, BarRect, CategoryGeometry, GroupedBarGeometry, GroupedBarLayout,
    project_grouped_bars,
};
pub use polar::PolarScale;
pub use radar::{RadarAxisGeometry, RadarGeometry, RadarPoint, axis_angle_deg, project_radar};
pub use radial_bar::{RingGeometry, RingLayout, StakeholderPoint, project_involvement_rings};
pub use scale::LinearScale;
pub use types::Viewport;
