// Host-side tests for dimension projection and the annotation lifecycle.

use freight_core::*;
use glam::Vec3;

const EPS: f32 = 1e-6;

fn assert_vec_close(actual: Vec3, expected: Vec3) {
    assert!(
        (actual - expected).abs().max_element() < EPS,
        "expected {expected:?}, got {actual:?}"
    );
}

fn projected(length: f64, width: f64, height: f64) -> (SceneGraph, DimensionProjector) {
    let mut scene = SceneGraph::new();
    let mut projector = DimensionProjector::new(&mut scene);
    projector.project(&mut scene, &Dimensions::new(length, width, height));
    (scene, projector)
}

#[test]
fn scale_maps_length_height_width_onto_xyz() {
    for (l, w, h) in [
        (100.0, 50.0, 40.0),
        (0.0, 0.0, 0.0),
        (12.5, 300.0, 7.0),
        (1.0, 2.0, 3.0),
    ] {
        let mut scene = SceneGraph::new();
        let mut projector = DimensionProjector::new(&mut scene);
        let (scale, _) = projector.project(&mut scene, &Dimensions::new(l, w, h));
        let expected = Vec3::new(
            (l / 100.0) as f32,
            (h / 100.0) as f32,
            (w / 100.0) as f32,
        );
        assert_eq!(scale, expected);
        assert_eq!(Dimensions::new(l, w, h).scale(), expected);
    }
}

#[test]
fn box_is_rescaled_in_place() {
    let (mut scene, mut projector) = projected(100.0, 100.0, 100.0);
    let box_id = projector.box_id();
    projector.project(&mut scene, &Dimensions::new(200.0, 50.0, 40.0));

    assert_eq!(projector.box_id(), box_id);
    assert_eq!(scene.boxes().count(), 1);
    match scene.get(box_id) {
        Some(Renderable::Box(mesh)) => assert_eq!(mesh.scale, Vec3::new(2.0, 0.4, 0.5)),
        other => panic!("expected the box mesh, got {other:?}"),
    }
}

#[test]
fn exactly_three_lines_and_labels_after_each_projection() {
    let (mut scene, mut projector) = projected(100.0, 50.0, 40.0);
    assert_eq!(scene.lines().count(), 3);
    assert_eq!(scene.labels().count(), 3);

    for i in 1..=5 {
        projector.project(&mut scene, &Dimensions::new(10.0 * i as f64, 20.0, 30.0));
        assert_eq!(scene.lines().count(), 3);
        assert_eq!(scene.labels().count(), 3);
        // box + 3 lines + 3 labels
        assert_eq!(scene.len(), 7);
    }
}

#[test]
fn previous_labels_are_detached() {
    let (mut scene, mut projector) = projected(100.0, 50.0, 40.0);
    projector.project(&mut scene, &Dimensions::new(200.0, 60.0, 30.0));

    let texts: Vec<&str> = scene.labels().map(|l| l.text.as_str()).collect();
    assert!(!texts.contains(&"L=100cm"));
    assert!(texts.contains(&"L=200cm"));
    assert!(texts.contains(&"W=60cm"));
    assert!(texts.contains(&"H=30cm"));
}

#[test]
fn labels_show_unscaled_centimeters() {
    let (_, projector) = projected(100.0, 50.0, 40.0);
    let set = projector.annotations().expect("annotations after project");
    assert_eq!(set.indicator(Axis::Length).label.text, "L=100cm");
    assert_eq!(set.indicator(Axis::Width).label.text, "W=50cm");
    assert_eq!(set.indicator(Axis::Height).label.text, "H=40cm");

    let (_, projector) = projected(12.5, 0.0, 7.25);
    let set = projector.annotations().expect("annotations after project");
    assert_eq!(set.indicator(Axis::Length).label.text, "L=12.5cm");
    assert_eq!(set.indicator(Axis::Width).label.text, "W=0cm");
    assert_eq!(set.indicator(Axis::Height).label.text, "H=7.25cm");
}

#[test]
fn edges_start_at_min_corner_and_run_along_their_axis() {
    let (_, projector) = projected(100.0, 50.0, 40.0);
    let set = projector.annotations().expect("annotations after project");
    let corner = Vec3::new(-0.5, -0.2, -0.25);

    let length = set.indicator(Axis::Length);
    assert_vec_close(length.line.start, corner);
    assert_vec_close(length.line.end, Vec3::new(0.5, -0.2, -0.25));
    assert_vec_close(length.label.position, Vec3::new(0.6, -0.2, -0.25));

    let width = set.indicator(Axis::Width);
    assert_vec_close(width.line.start, corner);
    assert_vec_close(width.line.end, Vec3::new(-0.5, -0.2, 0.25));
    assert_vec_close(width.label.position, Vec3::new(-0.5, -0.2, 0.35));

    let height = set.indicator(Axis::Height);
    assert_vec_close(height.line.start, corner);
    assert_vec_close(height.line.end, Vec3::new(-0.5, 0.2, -0.25));
    assert_vec_close(height.label.position, Vec3::new(-0.5, 0.3, -0.25));
}

#[test]
fn projection_is_idempotent() {
    let dims = Dimensions::new(80.0, 60.0, 45.0);
    let mut scene = SceneGraph::new();
    let mut projector = DimensionProjector::new(&mut scene);

    let (first_scale, first) = projector.project(&mut scene, &dims);
    let first = first.clone();
    let (second_scale, second) = projector.project(&mut scene, &dims);

    assert_eq!(first_scale, second_scale);
    assert_eq!(&first, second);
    assert_eq!(scene.len(), 7);
}

#[test]
fn zero_dimensions_give_degenerate_box() {
    let (scene, projector) = projected(0.0, 0.0, 0.0);
    assert_eq!(scene.boxes().next().map(|b| b.scale), Some(Vec3::ZERO));

    let set = projector.annotations().expect("annotations after project");
    for indicator in &set.indicators {
        assert_eq!(indicator.line.start, Vec3::ZERO);
        assert_eq!(indicator.line.end, Vec3::ZERO);
        assert_vec_close(
            indicator.label.position,
            indicator.axis.render_axis() * 0.1,
        );
    }
}

#[test]
fn invalid_dimensions_are_normalized_to_zero() {
    let dims = Dimensions::new(-5.0, f64::NAN, f64::INFINITY);
    assert_eq!(dims, Dimensions::default());
    assert_eq!(dims.scale(), Vec3::ZERO);
}
