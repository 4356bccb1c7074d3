use approx::assert_abs_diff_eq;
use report_charts::core::{BarPoint, GroupedBarLayout, Viewport, project_grouped_bars};

fn objectives_fixture() -> Vec<BarPoint> {
    vec![
        BarPoint::new("Vie Assoc", 20.0, 90.0),
        BarPoint::new("Chrono.", 10.0, 100.0),
        BarPoint::new("Compétences", 25.0, 85.0),
        BarPoint::new("Staff RH", 10.0, 100.0),
        BarPoint::new("Visibilité", 5.0, 95.0),
    ]
}

#[test]
fn projection_emits_two_bars_per_category() {
    let viewport = Viewport::new(500, 400);
    let geometry =
        project_grouped_bars(&objectives_fixture(), viewport, GroupedBarLayout::default())
            .expect("projection");

    assert_eq!(geometry.categories.len(), 5);
    assert_eq!(geometry.bar_count(), 10);
}

#[test]
fn categories_keep_input_order_without_interleaving() {
    let viewport = Viewport::new(500, 400);
    let points = objectives_fixture();
    let geometry = project_grouped_bars(&points, viewport, GroupedBarLayout::default())
        .expect("projection");

    let slot_width = 100.0;
    for (index, (category, point)) in geometry.categories.iter().zip(&points).enumerate() {
        assert_eq!(category.name, point.name);

        // Both bars stay inside their own slot, current left of target.
        let slot_start = index as f64 * slot_width;
        let slot_end = slot_start + slot_width;
        assert!(category.current.x >= slot_start);
        assert!(category.current.x + category.current.width <= category.target.x);
        assert!(category.target.x + category.target.width <= slot_end);
    }
}

#[test]
fn bar_heights_follow_the_shared_value_scale() {
    let viewport = Viewport::new(500, 400);
    let geometry =
        project_grouped_bars(&objectives_fixture(), viewport, GroupedBarLayout::default())
            .expect("projection");

    // Max of the dataset is 100, so a value of 20 fills 20% of the plot.
    assert_abs_diff_eq!(geometry.value_max, 100.0, epsilon = 1e-9);
    let first = &geometry.categories[0];
    assert_abs_diff_eq!(first.current.height, 80.0, epsilon = 1e-9);
    assert_abs_diff_eq!(first.target.height, 360.0, epsilon = 1e-9);
    assert_abs_diff_eq!(first.current.y + first.current.height, 400.0, epsilon = 1e-9);
}

#[test]
fn scale_is_derived_from_data_not_clamped_to_hundred() {
    let viewport = Viewport::new(300, 300);
    let points = [BarPoint::new("Dépassement", 40.0, 140.0)];
    let geometry = project_grouped_bars(&points, viewport, GroupedBarLayout::default())
        .expect("projection");

    assert_abs_diff_eq!(geometry.value_max, 140.0, epsilon = 1e-9);
    assert_abs_diff_eq!(geometry.categories[0].target.height, 300.0, epsilon = 1e-9);
}

#[test]
fn current_above_target_is_rendered_as_given() {
    let viewport = Viewport::new(300, 300);
    let points = [BarPoint::new("Régression", 90.0, 30.0)];
    let geometry = project_grouped_bars(&points, viewport, GroupedBarLayout::default())
        .expect("projection");

    let category = &geometry.categories[0];
    assert!(category.current.height > category.target.height);
}

#[test]
fn empty_dataset_yields_empty_geometry() {
    let viewport = Viewport::new(500, 400);
    let geometry =
        project_grouped_bars(&[], viewport, GroupedBarLayout::default()).expect("projection");

    assert!(geometry.categories.is_empty());
    assert_eq!(geometry.bar_count(), 0);
}

#[test]
fn invalid_layout_is_rejected() {
    let viewport = Viewport::new(500, 400);
    let layout = GroupedBarLayout {
        group_width_ratio: 0.0,
        ..GroupedBarLayout::default()
    };

    assert!(project_grouped_bars(&objectives_fixture(), viewport, layout).is_err());
}
