use approx::assert_abs_diff_eq;
use report_charts::core::{PolarScale, RadarPoint, Viewport, axis_angle_deg, project_radar};

fn six_axis_fixture() -> Vec<RadarPoint> {
    vec![
        RadarPoint::new("Finance", 1.0, 5.0),
        RadarPoint::new("Vie Assoc.", 2.0, 5.0),
        RadarPoint::new("Planification", 1.0, 5.0),
        RadarPoint::new("Projets", 2.0, 5.0),
        RadarPoint::new("Visibilité", 0.0, 5.0),
        RadarPoint::new("Stabilité", 3.0, 5.0),
    ]
}

#[test]
fn one_fifth_of_full_mark_plots_at_twenty_percent_of_radial_extent() {
    let polar = PolarScale::fit(Viewport::new(400, 400), 1.0).expect("fit");
    let points = [RadarPoint::new("Finance", 1.0, 5.0)];

    let geometry = project_radar(&points, polar).expect("projection");
    let (x, y) = geometry.vertices[0];

    assert_abs_diff_eq!(polar.distance_of(x, y), polar.radius() * 0.2, epsilon = 1e-9);
}

#[test]
fn axes_spread_evenly_clockwise_from_top() {
    let polar = PolarScale::fit(Viewport::new(400, 400), 0.8).expect("fit");
    let geometry = project_radar(&six_axis_fixture(), polar).expect("projection");

    assert_eq!(geometry.axes.len(), 6);
    for (index, axis) in geometry.axes.iter().enumerate() {
        assert_abs_diff_eq!(axis.angle_deg, 90.0 - index as f64 * 60.0, epsilon = 1e-9);
    }
}

#[test]
fn vertices_keep_input_order_and_carry_values() {
    let polar = PolarScale::fit(Viewport::new(400, 400), 0.8).expect("fit");
    let points = six_axis_fixture();
    let geometry = project_radar(&points, polar).expect("projection");

    assert_eq!(geometry.vertices.len(), points.len());
    for (axis, point) in geometry.axes.iter().zip(&points) {
        assert_eq!(axis.subject, point.subject);
        assert_eq!(axis.value, point.current);
    }
}

#[test]
fn zero_value_collapses_to_center() {
    let polar = PolarScale::fit(Viewport::new(400, 400), 1.0).expect("fit");
    let points = [RadarPoint::new("Visibilité", 0.0, 5.0)];

    let geometry = project_radar(&points, polar).expect("projection");
    let (x, y) = geometry.vertices[0];
    let (center_x, center_y) = polar.center();

    assert_abs_diff_eq!(x, center_x, epsilon = 1e-9);
    assert_abs_diff_eq!(y, center_y, epsilon = 1e-9);
}

#[test]
fn out_of_range_value_is_projected_as_given() {
    let polar = PolarScale::fit(Viewport::new(400, 400), 1.0).expect("fit");
    let points = [RadarPoint::new("Hors échelle", 7.5, 5.0)];

    let geometry = project_radar(&points, polar).expect("projection");
    let (x, y) = geometry.vertices[0];

    // 150% of the rim: garbage in, garbage out, no clamping.
    assert_abs_diff_eq!(polar.distance_of(x, y), polar.radius() * 1.5, epsilon = 1e-9);
}

#[test]
fn non_positive_full_mark_degrades_to_center_instead_of_nan() {
    let point = RadarPoint::new("Finance", 1.0, 0.0);
    assert_eq!(point.radial_fraction(), 0.0);
}

#[test]
fn empty_dataset_yields_empty_geometry() {
    let polar = PolarScale::fit(Viewport::new(400, 400), 1.0).expect("fit");
    let geometry = project_radar(&[], polar).expect("projection");

    assert!(geometry.is_empty());
    assert!(geometry.vertices.is_empty());
}

#[test]
fn axis_angle_of_first_axis_is_twelve_oclock() {
    assert_abs_diff_eq!(axis_angle_deg(0, 6), 90.0, epsilon = 1e-9);
    assert_abs_diff_eq!(axis_angle_deg(3, 6), -90.0, epsilon = 1e-9);
}
