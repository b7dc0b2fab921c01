use approx::assert_relative_eq;
use footprint::{split, FootprintError, Polygon2D, RidgeFrame, SplitLine};
use glam::DVec2;
use roof_mesh::{generate, MeshError, ShapeKind, ShapeOptions};

fn good_rectangle() -> Polygon2D {
    Polygon2D::new(vec![
        DVec2::new(-2.0, -1.0),
        DVec2::new(-2.0, 1.0),
        DVec2::new(2.0, 1.0),
        DVec2::new(2.0, -1.0),
    ])
}

fn wedge_options() -> ShapeOptions {
    ShapeOptions::default()
        .with_angle(0.0)
        .with_depth(5.0)
        .with_center(DVec2::ZERO)
}

/// Splitting a rectangle on its ridge gives the outline and two halves.
#[test]
fn wedge_split_produces_three_rings() {
    let polygon = footprint::normalize(&good_rectangle()).unwrap();
    let local = RidgeFrame::default().polygon_to_local(&polygon);
    let rings = split(&local.outer, &SplitLine::x_axis()).unwrap().rings();
    let sizes: Vec<usize> = rings.iter().map(Vec::len).collect();
    assert_eq!(sizes, vec![6, 4, 4]);
}

/// A wedge on a rectangle has roof, floor and walls.
#[test]
fn wedge_on_rectangle() {
    let mesh = generate(ShapeKind::Wedge, &good_rectangle(), &wedge_options()).unwrap();
    assert_eq!(mesh.vertex_count(), 36);
    assert_eq!(mesh.positions_f32().len(), 108);
    assert_relative_eq!(mesh.max_z(), 5.0, epsilon = 1e-12);
}

/// Generating leaves the caller's footprint untouched.
#[test]
fn wedge_does_not_touch_input() {
    let polygon = good_rectangle();
    let before = polygon.clone();
    generate(ShapeKind::Wedge, &polygon, &wedge_options()).unwrap();
    assert_eq!(polygon, before);
}

/// Reversing the outline does not change the wedge.
#[test]
fn wedge_winding_does_not_matter() {
    let mut reversed = good_rectangle();
    reversed.outer.reverse();
    let a = generate(ShapeKind::Wedge, &good_rectangle(), &wedge_options()).unwrap();
    let b = generate(ShapeKind::Wedge, &reversed, &wedge_options()).unwrap();
    assert_eq!(a.vertex_count(), b.vertex_count());
    assert_relative_eq!(a.surface_area(), b.surface_area(), epsilon = 1e-9);
}

/// Rounded roofs keep the wedge's straight slopes between their cuts.
#[test]
fn rounded_slopes_match_wedge() {
    let options = wedge_options().with_segments(4);
    let mesh = generate(ShapeKind::Rounded, &good_rectangle(), &options).unwrap();
    assert_relative_eq!(mesh.max_z(), 5.0, epsilon = 1e-12);
    // Every roof point lies on z = 5 * (1 - |y|).
    let mut cut_points = 0;
    for p in mesh.positions() {
        if p.z > 0.0 {
            assert_relative_eq!(p.z, 5.0 * (1.0 - p.y.abs()), epsilon = 1e-9);
        }
        if (p.y - 0.6).abs() < 1e-9 && p.z > 0.0 {
            cut_points += 1;
        }
    }
    assert!(cut_points > 0);
}

/// Ramps along an axis and along a diagonal.
#[test]
fn ramp_scenarios() {
    let options = ShapeOptions::default().with_depth(5.0);
    let flat = generate(ShapeKind::Ramp, &good_rectangle(), &options).unwrap();
    assert_eq!(flat.triangle_count(), 8);

    let diagonal = generate(
        ShapeKind::Ramp,
        &good_rectangle(),
        &options.with_angle(std::f64::consts::FRAC_PI_4),
    )
    .unwrap();
    assert_eq!(diagonal.triangle_count(), 10);
}

/// A pyramid on the default unit square.
#[test]
fn pyramid_on_default_footprint() {
    let mesh = generate(
        ShapeKind::Pyramid,
        &Polygon2D::default(),
        &ShapeOptions::default().with_depth(1.0),
    )
    .unwrap();
    assert_eq!(mesh.vertex_count(), 18);
    assert_eq!(mesh.max_z(), 1.0);
}

/// Every shape rejects a footprint that is not a polygon.
#[test]
fn invalid_footprint_fails_every_shape() {
    let polygon = Polygon2D::new(vec![DVec2::ZERO, DVec2::X, DVec2::X]);
    for kind in ShapeKind::ALL {
        let result = generate(kind, &polygon, &ShapeOptions::default());
        assert!(
            matches!(result, Err(MeshError::Footprint(_))),
            "{kind} accepted a two-point footprint"
        );
    }
}

/// Every shape rejects a footprint with a NaN or infinite coordinate.
#[test]
fn non_finite_footprint_fails_every_shape() {
    for bad in [f64::NAN, f64::INFINITY] {
        let mut polygon = good_rectangle();
        polygon.outer[1].y = bad;
        for kind in ShapeKind::ALL {
            let result = generate(kind, &polygon, &wedge_options());
            assert!(
                matches!(
                    result,
                    Err(MeshError::Footprint(FootprintError::InvalidPolygon { .. }))
                ),
                "{kind} accepted a footprint with {bad}"
            );
        }
    }
}

/// Every shape rejects non-finite options.
#[test]
fn invalid_options_fail_every_shape() {
    let options = ShapeOptions::default().with_depth(f64::NAN);
    for kind in ShapeKind::ALL {
        let result = generate(kind, &Polygon2D::default(), &options);
        assert!(matches!(result, Err(MeshError::InvalidOptions { .. })));
    }
}

/// Every shape has a floor covering the footprint.
#[test]
fn every_shape_is_closed_underneath() {
    for kind in ShapeKind::ALL {
        let mesh = generate(kind, &good_rectangle(), &wedge_options()).unwrap();
        let normals = mesh.normals().unwrap();
        let floor: f64 = mesh
            .triangles()
            .zip(normals.chunks(3))
            .filter(|(_, n)| n[0].z < -0.5)
            .map(|(t, _)| (t[1] - t[0]).cross(t[2] - t[0]).length() / 2.0)
            .sum();
        assert_relative_eq!(floor, 8.0, epsilon = 1e-9);
    }
}
