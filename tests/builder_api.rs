// Copyright 2025 Lars Brubaker
// End-to-end: real-world coordinates in, IntTin out.

use tin_delaunay::{BuilderOption, ScaleModel, TinBuilder, TinError};

/// z = 2x + 3y + 100 sampled on a 1 m grid; decimetre plan, millimetre z.
fn plane_builder() -> TinBuilder {
    let scale = ScaleModel::new(10.0, 10.0, 1000.0).unwrap();
    let mut builder = TinBuilder::new(scale);
    for i in 0..=10 {
        for j in 0..=10 {
            let (x, y) = (i as f64, j as f64);
            builder.insert_point(x, y, 2.0 * x + 3.0 * y + 100.0).unwrap();
        }
    }
    builder
}

#[test]
fn plane_round_trips_through_tin() {
    let mut builder = plane_builder();
    assert_eq!(builder.bounding_box(), Some([0.0, 0.0, 10.0, 10.0]));

    let tin = builder.new_tin().unwrap();
    // 121 points, 40 on the hull.
    assert_eq!(tin.triangle_count(), 2 * 121 - 2 - 40);
    assert_eq!(tin.bounding_box(), Some([0.0, 0.0, 10.0, 10.0]));

    for (x, y) in [(0.5, 0.5), (3.25, 7.75), (9.9, 0.1), (5.0, 5.0)] {
        let z = tin.elevation(x, y);
        assert!((z - (2.0 * x + 3.0 * y + 100.0)).abs() < 1e-9, "z({x}, {y}) = {z}");
    }
    assert!(tin.elevation(-1.0, 5.0).is_nan());
    assert!(tin.elevation(5.0, 10.5).is_nan());
}

#[test]
fn tin_vertices_are_input_vertices() {
    let mut builder = plane_builder();
    let tin = builder.new_tin().unwrap();
    for t in 0..tin.triangle_count() {
        for v in 0..3 {
            let (x, y, z) = (tin.vertex_x(t, v), tin.vertex_y(t, v), tin.vertex_z(t, v));
            assert_eq!(x.fract(), 0.0);
            assert_eq!(y.fract(), 0.0);
            assert!((z - (2.0 * x + 3.0 * y + 100.0)).abs() < 1e-9);
        }
    }
}

#[test]
fn sorted_option_builds_the_same_count() {
    let mut unsorted = plane_builder();
    let mut sorted = plane_builder();
    sorted.set_option(BuilderOption::SortVertices, true);
    assert_eq!(
        unsorted.new_tin().unwrap().triangle_count(),
        sorted.new_tin().unwrap().triangle_count()
    );
}

#[test]
fn triangles_at_shared_vertex() {
    let mut builder = plane_builder();
    let tin = builder.new_tin().unwrap();
    // An interior grid vertex is a corner of four to eight triangles.
    let around = tin.triangles_at(5.0, 5.0);
    assert!(around.len() >= 4 && around.len() <= 8, "{}", around.len());
    for t in &around {
        assert!(t.contains(5.0, 5.0));
    }
}

#[test]
fn float_enumeration_uses_real_units() {
    let mut builder = plane_builder();
    let mut count = 0;
    builder
        .for_each_triangle(|t| {
            count += 1;
            for v in 0..3 {
                let (x, y, z) = (t[v * 3], t[v * 3 + 1], t[v * 3 + 2]);
                assert!((0.0..=10.0).contains(&x) && (0.0..=10.0).contains(&y));
                assert!((z - (2.0 * x + 3.0 * y + 100.0)).abs() < 1e-9);
            }
        })
        .unwrap();
    assert_eq!(count, 200);
}

#[test]
fn duplicates_collapse() {
    let mut builder = TinBuilder::new(ScaleModel::new(10.0, 10.0, 10.0).unwrap());
    for (x, y) in [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (0.01, 0.0), (1.0, 0.04)] {
        builder.insert_point(x, y, 0.0).unwrap();
    }
    // (0.01, 0) and (1.0, 0.04) quantise onto existing vertices.
    assert_eq!(builder.vertex_count(), 5);
    assert_eq!(builder.new_tin().unwrap().triangle_count(), 1);
}

#[test]
fn bad_scale_is_rejected() {
    assert!(matches!(
        ScaleModel::new(1.0, 0.0, 1.0),
        Err(TinError::InvalidScale { axis: 'y', .. })
    ));
}
