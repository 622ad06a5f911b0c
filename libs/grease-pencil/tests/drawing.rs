//! End-to-end drawing through the public API: sample, place, style, rotate.

use approx::assert_abs_diff_eq;
use glam::DVec3;
use grease_pencil::{
    create_gpencil_material, draw_bezier, draw_circle, draw_curve, get_grease_pencil,
    get_grease_pencil_layer, rotate_stroke, CanvasError, DisplayMode, DrawTarget, MaterialRef,
    RotateMode, Scene, StrokeStyle,
};
use stroke_geometry::{
    sample, Axis, AxisPermutation, BezierParams, CircleParams, CurveSpec, OutOfArc,
};

const TOLERANCE: f64 = 1e-9;

fn example_bezier() -> BezierParams {
    BezierParams::new(
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(1.0, 1.0, 0.0),
        DVec3::new(2.0, 1.0, 0.0),
        DVec3::new(3.0, 0.0, 0.0),
    )
}

#[test]
fn draw_circle_with_call_site_defaults() {
    let mut scene = Scene::new();
    let id = draw_circle(
        &mut scene,
        &DrawTarget::default(),
        &CircleParams::drawing(),
        &StrokeStyle::circle(),
    )
    .unwrap();

    let object = scene.object_id("GLunaPencil").unwrap();
    let layer = scene.layer_id(object, "GLunaLayer").unwrap();
    assert_eq!(id.frame().layer(), layer);
    assert_eq!(id.frame().frame_number(), 0);

    let stroke = scene.stroke(id).unwrap();
    assert_eq!(stroke.points.len(), 64);
    assert!(stroke.cyclic);
    assert_eq!(stroke.line_width, 50);
    assert_eq!(stroke.display_mode, DisplayMode::ThreeDSpace);
    for p in &stroke.points {
        assert_abs_diff_eq!(p.length(), 5.0, epsilon = TOLERANCE);
        assert_eq!(p.y, 0.0);
    }
}

#[test]
fn four_segment_circle_lands_on_quarter_points() {
    let mut scene = Scene::new();
    let params = CircleParams::new(5.0)
        .with_segments(4)
        .with_axes(AxisPermutation::XYZ);
    let id = draw_circle(&mut scene, &DrawTarget::default(), &params, &StrokeStyle::circle())
        .unwrap();

    let expected = [
        DVec3::new(5.0, 0.0, 0.0),
        DVec3::new(0.0, 5.0, 0.0),
        DVec3::new(-5.0, 0.0, 0.0),
        DVec3::new(0.0, -5.0, 0.0),
    ];
    let points = &scene.stroke(id).unwrap().points;
    for (actual, expected) in points.iter().zip(expected) {
        assert!(actual.abs_diff_eq(expected, TOLERANCE), "{actual} vs {expected}");
    }
}

#[test]
fn legacy_arc_keeps_one_point_per_segment() {
    let mut scene = Scene::new();
    let params = CircleParams::new(1.0)
        .with_segments(8)
        .with_arc(0.0, 180.0)
        .with_out_of_arc(OutOfArc::Origin);
    let id = draw_circle(&mut scene, &DrawTarget::default(), &params, &StrokeStyle::circle())
        .unwrap();

    let points = &scene.stroke(id).unwrap().points;
    assert_eq!(points.len(), 8);
    assert_eq!(points[7], DVec3::ZERO);
}

#[test]
fn draw_bezier_keeps_end_points() {
    let mut scene = Scene::new();
    let id = draw_bezier(
        &mut scene,
        &DrawTarget::new("Curves", "Ink"),
        &example_bezier().with_segments(3),
        &StrokeStyle::bezier(),
    )
    .unwrap();

    let stroke = scene.stroke(id).unwrap();
    assert_eq!(stroke.points.len(), 3);
    assert_eq!(stroke.points[0], DVec3::ZERO);
    assert_eq!(stroke.points[2], DVec3::new(3.0, 0.0, 0.0));
    assert!(!stroke.cyclic);
    assert_eq!(stroke.line_width, 10);
}

#[test]
fn repeated_draws_append_to_the_same_frame() {
    let mut scene = Scene::new();
    let target = DrawTarget::default().with_frame(5);
    let first = draw_circle(&mut scene, &target, &CircleParams::new(1.0), &StrokeStyle::circle())
        .unwrap();
    let second = draw_bezier(&mut scene, &target, &example_bezier(), &StrokeStyle::bezier())
        .unwrap();

    assert_eq!(first.frame(), second.frame());
    assert_eq!(scene.frame(first.frame()).unwrap().strokes.len(), 2);
}

#[test]
fn clearing_target_removes_previous_strokes() {
    let mut scene = Scene::new();
    draw_circle(
        &mut scene,
        &DrawTarget::default().with_frame(1),
        &CircleParams::new(1.0),
        &StrokeStyle::circle(),
    )
    .unwrap();
    let id = draw_circle(
        &mut scene,
        &DrawTarget::default().clearing(),
        &CircleParams::new(2.0),
        &StrokeStyle::circle(),
    )
    .unwrap();

    let layer = scene.layer(id.frame().layer()).unwrap();
    assert_eq!(layer.frames.len(), 1);
    assert_eq!(layer.stroke_count(), 1);
}

#[test]
fn stroke_material_resolved_by_name() {
    let mut scene = Scene::new();
    get_grease_pencil(&mut scene, "GLunaPencil").unwrap();
    create_gpencil_material(&mut scene, "GLunaPencil", "Base", [1.0; 4], [0.0, 0.0, 0.0, 1.0])
        .unwrap();
    create_gpencil_material(&mut scene, "GLunaPencil", "Moon", [0.837, 0.862, 0.227, 1.0], [0.042, 0.002, 0.041, 1.0])
        .unwrap();

    let style = StrokeStyle::circle().with_material_name("Moon");
    let id = draw_circle(&mut scene, &DrawTarget::default(), &CircleParams::new(1.0), &style)
        .unwrap();
    assert_eq!(scene.stroke(id).unwrap().material_index, 1);

    let style = StrokeStyle::circle().with_material(MaterialRef::Index(7));
    let id = draw_circle(&mut scene, &DrawTarget::default(), &CircleParams::new(1.0), &style)
        .unwrap();
    assert_eq!(scene.stroke(id).unwrap().material_index, 7);
}

#[test]
fn unknown_material_name_is_not_found() {
    let mut scene = Scene::new();
    let style = StrokeStyle::circle().with_material_name("Ghost");
    let err = draw_circle(&mut scene, &DrawTarget::default(), &CircleParams::new(1.0), &style)
        .unwrap_err();
    assert!(matches!(err, CanvasError::NotFound { .. }));
}

#[test]
fn malformed_axis_code_never_reaches_the_scene() {
    let err = "XXY".parse::<AxisPermutation>().unwrap_err();
    let err: CanvasError = err.into();
    assert!(matches!(err, CanvasError::InvalidArgument(_)));
}

#[test]
fn rotate_in_place_keeps_centroid() {
    let mut scene = Scene::new();
    let center = DVec3::new(4.0, 0.0, 2.0);
    let id = draw_circle(
        &mut scene,
        &DrawTarget::default(),
        &CircleParams::new(1.0).with_center(center).with_segments(12),
        &StrokeStyle::circle(),
    )
    .unwrap();
    let before = scene.stroke(id).unwrap().points.clone();

    let same = rotate_stroke(&mut scene, id, Axis::X, 90.0, RotateMode::InPlace).unwrap();
    assert_eq!(same, id);

    let after = &scene.stroke(id).unwrap().points;
    assert_eq!(scene.frame(id.frame()).unwrap().strokes.len(), 1);
    let centroid = after.iter().copied().sum::<DVec3>() / after.len() as f64;
    assert!(centroid.abs_diff_eq(center, TOLERANCE));
    // XZ-plane circle turned a quarter about X now lies in the XY plane
    for p in after {
        assert_abs_diff_eq!(p.z, center.z, epsilon = TOLERANCE);
    }
    assert_ne!(&before, after);
}

#[test]
fn duplicate_rotates_about_origin() {
    let mut scene = Scene::new();
    let id = draw_bezier(
        &mut scene,
        &DrawTarget::default(),
        &example_bezier().with_segments(5),
        &StrokeStyle::bezier(),
    )
    .unwrap();

    let copy = rotate_stroke(&mut scene, id, Axis::Z, 180.0, RotateMode::Duplicate).unwrap();
    assert_ne!(copy, id);
    assert_eq!(copy.frame(), id.frame());

    let original = scene.stroke(id).unwrap().clone();
    let rotated = scene.stroke(copy).unwrap();
    assert_eq!(rotated.line_width, original.line_width);
    for (a, b) in original.points.iter().zip(&rotated.points) {
        assert!(b.abs_diff_eq(DVec3::new(-a.x, -a.y, a.z), TOLERANCE));
    }
}

#[test]
fn explicit_pipeline_matches_draw_curve() {
    let spec = CurveSpec::Circle(CircleParams::new(3.0).with_segments(16));

    let mut manual = Scene::new();
    let object = get_grease_pencil(&mut manual, "GLunaPencil").unwrap();
    let layer = get_grease_pencil_layer(&mut manual, object, "GLunaLayer", false).unwrap();
    let frame = manual.new_frame(layer, 0).unwrap();
    manual
        .add_stroke(frame, &sample(&spec).unwrap(), &StrokeStyle::for_spec(&spec))
        .unwrap();

    let mut drawn = Scene::new();
    draw_curve(&mut drawn, &DrawTarget::default(), &spec, &StrokeStyle::for_spec(&spec)).unwrap();

    assert_eq!(manual, drawn);
}

#[test]
fn scene_snapshot_survives_round_trip() {
    let mut scene = Scene::new();
    draw_circle(&mut scene, &DrawTarget::default(), &CircleParams::new(2.0), &StrokeStyle::circle())
        .unwrap();
    let restored = Scene::from_json(&scene.to_json().unwrap()).unwrap();
    assert_eq!(restored.objects().len(), 1);
    assert_eq!(restored, scene);
}
