extern crate flo_keyframes;

use flo_keyframes::*;

fn approx_equal(a: f64, b: f64) -> bool {
    (a-b).abs() < 0.0001
}

fn translate(x: f64, y: f64, z: f64) -> TransformOperations {
    let mut operations = TransformOperations::new();
    operations.append_translate(x, y, z);
    operations
}

fn rotate_z(degrees: f64) -> TransformOperations {
    let mut operations = TransformOperations::new();
    operations.append_rotate(0.0, 0.0, 1.0, degrees);
    operations
}

fn unit_box() -> Bounds3 {
    Bounds3::from_min_max(Vector3(0.0, 0.0, 0.0), Vector3(1.0, 1.0, 0.0))
}

#[test]
fn translation_from_identity_is_linear() {
    let curve = TransformCurve::with_keyframes(vec![
        Keyframe::linear(0.0, TransformOperations::new()),
        Keyframe::linear(1.0, translate(100.0, 40.0, 0.0))
    ]).unwrap();

    let halfway = curve.value_at(0.5).unwrap();
    let moved   = halfway.apply().map_point(&Vector3(0.0, 0.0, 0.0));

    assert!(approx_equal(moved.x(), 50.0));
    assert!(approx_equal(moved.y(), 20.0));
    assert!(approx_equal(moved.z(), 0.0));
}

#[test]
fn rotation_goes_the_long_way_round() {
    let curve = TransformCurve::with_keyframes(vec![
        Keyframe::linear(0.0, rotate_z(0.0)),
        Keyframe::linear(1.0, rotate_z(270.0))
    ]).unwrap();

    let moved = curve.value_at(0.5).unwrap().apply().map_point(&Vector3(1.0, 0.0, 0.0));

    // 135 degrees
    assert!(approx_equal(moved.x(), -(0.5f64.sqrt())));
    assert!(approx_equal(moved.y(), 0.5f64.sqrt()));
}

#[test]
fn bounds_of_translation() {
    let curve = TransformCurve::with_keyframes(vec![
        Keyframe::linear(0.0, translate(0.0, 0.0, 0.0)),
        Keyframe::linear(1.0, translate(10.0, 0.0, 0.0)),
        Keyframe::linear(2.0, translate(10.0, -5.0, 0.0))
    ]).unwrap();

    let bounds = curve.animated_bounds_for_box(&unit_box()).unwrap();

    assert!(approx_equal(bounds.min().x(), 0.0));
    assert!(approx_equal(bounds.min().y(), -5.0));
    assert!(approx_equal(bounds.max().x(), 11.0));
    assert!(approx_equal(bounds.max().y(), 1.0));
}

#[test]
fn overshooting_easing_widens_bounds() {
    let curve = TransformCurve::with_keyframes(vec![
        Keyframe::eased(0.0, translate(0.0, 0.0, 0.0), CubicBezierTimingFunction::custom(0.5, -1.0, 0.5, 2.0).unwrap()),
        Keyframe::linear(1.0, translate(100.0, 0.0, 0.0))
    ]).unwrap();

    let bounds = curve.animated_bounds_for_box(&unit_box()).unwrap();

    assert!(bounds.min().x() < 0.0);
    assert!(bounds.max().x() > 101.0);
}

fn assert_bounds_contain_samples(curve: &TransformCurve, bounds: &Bounds3) {
    let start       = curve.start_time().unwrap();
    let duration    = curve.duration().unwrap();

    for sample in 0..=1000 {
        let time    = start + duration * (sample as f64) / 1000.0;
        let moved   = curve.value_at(time).unwrap().apply().map_bounds(&unit_box());

        assert!(moved.min().x() >= bounds.min().x() - 0.000001);
        assert!(moved.max().x() <= bounds.max().x() + 0.000001);
        assert!(moved.min().y() >= bounds.min().y() - 0.000001);
        assert!(moved.max().y() <= bounds.max().y() + 0.000001);
    }
}

#[test]
fn overshooting_curve_timing_widens_bounds() {
    let mut curve = TransformCurve::with_keyframes(vec![
        Keyframe::linear(0.0, translate(0.0, 0.0, 0.0)),
        Keyframe::linear(1.0, translate(100.0, 0.0, 0.0))
    ]).unwrap();
    curve.set_timing_function(Some(Box::new(CubicBezierTimingFunction::custom(0.5, -1.0, 0.5, 2.0).unwrap())));

    let bounds = curve.animated_bounds_for_box(&unit_box()).unwrap();

    // The curve timing function runs from about -0.207 to 1.207
    assert!(bounds.min().x() < -20.0);
    assert!(bounds.max().x() > 121.0);
    assert_bounds_contain_samples(&curve, &bounds);
}

#[test]
fn overshooting_curve_timing_extrapolates_end_segments() {
    let mut curve = TransformCurve::with_keyframes(vec![
        Keyframe::linear(0.0, translate(0.0, 0.0, 0.0)),
        Keyframe::linear(1.0, translate(100.0, 0.0, 0.0)),
        Keyframe::linear(2.0, translate(100.0, 50.0, 0.0))
    ]).unwrap();
    curve.set_timing_function(Some(Box::new(CubicBezierTimingFunction::custom(0.5, -1.0, 0.5, 2.0).unwrap())));

    let bounds = curve.animated_bounds_for_box(&unit_box()).unwrap();

    // Curve time runs from about -0.414 to 2.414
    assert!(bounds.min().x() < -40.0);
    assert!(bounds.max().y() > 71.0);
    assert_bounds_contain_samples(&curve, &bounds);
}

#[test]
fn bounds_from_identity_list_of_any_length() {
    let mut identity = TransformOperations::new();
    identity.append_translate(0.0, 0.0, 0.0);
    identity.append_scale(1.0, 1.0, 1.0);

    let curve = TransformCurve::with_keyframes(vec![
        Keyframe::linear(0.0, identity),
        Keyframe::linear(1.0, rotate_z(360.0))
    ]).unwrap();

    // Half way through a full turn
    let moved = curve.value_at(0.5).unwrap().apply().map_point(&Vector3(1.0, 0.0, 0.0));
    assert!(approx_equal(moved.x(), -1.0));
    assert!(approx_equal(moved.y(), 0.0));

    let bounds = curve.animated_bounds_for_box(&unit_box()).unwrap();
    assert!(approx_equal(bounds.min().x(), -2.0f64.sqrt()));
    assert!(approx_equal(bounds.max().x(), 2.0f64.sqrt()));
    assert!(approx_equal(bounds.min().y(), -2.0f64.sqrt()));
    assert!(approx_equal(bounds.max().y(), 2.0f64.sqrt()));
}

#[test]
fn bounds_of_rotation_follow_the_arc() {
    let curve = TransformCurve::with_keyframes(vec![
        Keyframe::linear(0.0, rotate_z(0.0)),
        Keyframe::linear(1.0, rotate_z(90.0))
    ]).unwrap();

    let bounds = curve.animated_bounds_for_box(&unit_box()).unwrap();

    // The far corner of the box passes through (0, sqrt(2)) at 45 degrees
    assert!(approx_equal(bounds.min().x(), -1.0));
    assert!(approx_equal(bounds.max().x(), 1.0));
    assert!(approx_equal(bounds.min().y(), 0.0));
    assert!(approx_equal(bounds.max().y(), 2.0f64.sqrt()));
}

#[test]
fn single_keyframe_bounds_are_transformed_box() {
    let curve   = TransformCurve::with_keyframes(vec![Keyframe::linear(0.0, translate(3.0, 4.0, 0.0))]).unwrap();
    let bounds  = curve.animated_bounds_for_box(&unit_box()).unwrap();

    assert!(bounds.min() == Vector3(3.0, 4.0, 0.0));
    assert!(bounds.max() == Vector3(4.0, 5.0, 0.0));
}

#[test]
fn mismatched_operations_have_no_bounds() {
    let mut scale = TransformOperations::new();
    scale.append_scale(2.0, 2.0, 1.0);

    let curve = TransformCurve::with_keyframes(vec![
        Keyframe::linear(0.0, translate(10.0, 0.0, 0.0)),
        Keyframe::linear(1.0, scale)
    ]).unwrap();

    assert!(curve.animated_bounds_for_box(&unit_box()).is_none());

    // The value can still be worked out by blending the matrices
    let moved = curve.value_at(0.5).unwrap().apply().map_point(&Vector3(0.0, 0.0, 0.0));
    assert!(approx_equal(moved.x(), 5.0));
}

#[test]
fn structural_queries() {
    let mut scale = TransformOperations::new();
    scale.append_scale(2.0, 3.0, 1.0);

    let translation = TransformCurve::with_keyframes(vec![Keyframe::linear(0.0, translate(0.0, 0.0, 0.0)), Keyframe::linear(1.0, translate(5.0, 5.0, 0.0))]).unwrap();
    let scaling     = TransformCurve::with_keyframes(vec![Keyframe::linear(0.0, TransformOperations::new()), Keyframe::linear(1.0, scale)]).unwrap();
    let rotation    = TransformCurve::with_keyframes(vec![Keyframe::linear(0.0, rotate_z(0.0)), Keyframe::linear(1.0, rotate_z(45.0))]).unwrap();

    assert!(translation.is_translation());
    assert!(!translation.affects_scale());
    assert!(translation.preserves_axis_alignment());

    assert!(!scaling.is_translation());
    assert!(scaling.affects_scale());
    assert!(scaling.preserves_axis_alignment());
    assert!(scaling.animation_start_scale(true) == Some(1.0));
    assert!(scaling.animation_start_scale(false) == Some(3.0));
    assert!(scaling.maximum_target_scale(true) == Some(3.0));
    assert!(scaling.maximum_target_scale(false) == Some(1.0));

    assert!(!rotation.preserves_axis_alignment());
}

#[test]
fn matrix_keyframes_blend_through_decomposition() {
    let mut from    = TransformOperations::new();
    let mut to      = TransformOperations::new();
    from.append_matrix(Matrix44::translate(0.0, 0.0, 0.0));
    to.append_matrix(Matrix44::translate(20.0, 0.0, 0.0) * Matrix44::scale(3.0, 3.0, 1.0));

    let curve   = TransformCurve::with_keyframes(vec![Keyframe::linear(0.0, from), Keyframe::linear(1.0, to)]).unwrap();
    let moved   = curve.value_at(0.5).unwrap().apply().map_point(&Vector3(1.0, 0.0, 0.0));

    // Halfway: translate by 10, scale by 2
    assert!(approx_equal(moved.x(), 12.0));
    assert!(approx_equal(moved.y(), 0.0));
}
