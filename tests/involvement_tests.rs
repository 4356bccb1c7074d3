use approx::assert_abs_diff_eq;
use report_charts::api::palette;
use report_charts::core::{
    PolarScale, RingLayout, StakeholderPoint, Viewport, project_involvement_rings,
};

fn stakeholder_fixture() -> Vec<StakeholderPoint> {
    vec![
        StakeholderPoint::new("Service RH", 5.0, palette::BLUE_900),
        StakeholderPoint::new("Membres", 3.0, palette::ORANGE_500),
        StakeholderPoint::new("Experts Ext.", 2.0, palette::SLATE_500),
        StakeholderPoint::new("Resp. Comm", 2.0, palette::PURPLE_600),
        StakeholderPoint::new("PDG", 1.0, palette::CYAN_500),
    ]
}

fn fixture_polar() -> PolarScale {
    PolarScale::fit(Viewport::new(600, 300), 0.95).expect("fit")
}

#[test]
fn first_input_takes_the_outermost_ring() {
    let rings = project_involvement_rings(
        &stakeholder_fixture(),
        fixture_polar(),
        RingLayout::default(),
    )
    .expect("projection");

    assert_eq!(rings.len(), 5);
    for pair in rings.windows(2) {
        assert!(pair[0].radius > pair[1].radius);
    }
    assert_eq!(rings[0].name, "Service RH");
    assert_eq!(rings[4].name, "PDG");
}

#[test]
fn ring_order_matches_input_order_exactly() {
    let points = stakeholder_fixture();
    let rings = project_involvement_rings(&points, fixture_polar(), RingLayout::default())
        .expect("projection");

    let names: Vec<&str> = rings.iter().map(|ring| ring.name.as_str()).collect();
    assert_eq!(
        names,
        ["Service RH", "Membres", "Experts Ext.", "Resp. Comm", "PDG"]
    );
}

#[test]
fn sweep_is_proportional_to_value_over_max() {
    let rings = project_involvement_rings(
        &stakeholder_fixture(),
        fixture_polar(),
        RingLayout::default(),
    )
    .expect("projection");

    assert_abs_diff_eq!(rings[0].sweep_fraction(), 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(rings[1].sweep_fraction(), 0.6, epsilon = 1e-9);
    assert_abs_diff_eq!(rings[4].sweep_fraction(), 0.2, epsilon = 1e-9);

    // Max involvement sweeps the full half circle, 180 down to 0.
    assert_abs_diff_eq!(rings[0].start_angle_deg, 180.0, epsilon = 1e-9);
    assert_abs_diff_eq!(rings[0].end_angle_deg, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(rings[4].end_angle_deg, 144.0, epsilon = 1e-9);
}

#[test]
fn every_ring_keeps_the_full_background_track() {
    let rings = project_involvement_rings(
        &stakeholder_fixture(),
        fixture_polar(),
        RingLayout::default(),
    )
    .expect("projection");

    for ring in &rings {
        assert_abs_diff_eq!(ring.track_end_angle_deg, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(ring.start_angle_deg, 180.0, epsilon = 1e-9);
    }
}

#[test]
fn empty_dataset_yields_no_rings() {
    let rings = project_involvement_rings(&[], fixture_polar(), RingLayout::default())
        .expect("projection");
    assert!(rings.is_empty());
}

#[test]
fn all_zero_values_collapse_sweeps_without_erroring() {
    let points = vec![
        StakeholderPoint::new("A", 0.0, palette::BLUE_900),
        StakeholderPoint::new("B", 0.0, palette::ORANGE_500),
    ];
    let rings = project_involvement_rings(&points, fixture_polar(), RingLayout::default())
        .expect("projection");

    for ring in &rings {
        assert_abs_diff_eq!(ring.sweep_fraction(), 0.0, epsilon = 1e-9);
    }
}
