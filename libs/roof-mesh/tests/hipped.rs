use approx::assert_relative_eq;
use footprint::Polygon2D;
use glam::DVec2;
use roof_mesh::{generate, ShapeKind, ShapeOptions};

fn rectangle() -> Polygon2D {
    Polygon2D::new(vec![
        DVec2::new(-25.0, -25.0),
        DVec2::new(75.0, -25.0),
        DVec2::new(75.0, 25.0),
        DVec2::new(-25.0, 25.0),
    ])
}

fn doughnut() -> Polygon2D {
    Polygon2D::with_holes(
        vec![
            DVec2::new(-25.0, -25.0),
            DVec2::new(25.0, -25.0),
            DVec2::new(25.0, 25.0),
            DVec2::new(-25.0, 25.0),
        ],
        vec![vec![
            DVec2::new(-5.0, 5.0),
            DVec2::new(5.0, 5.0),
            DVec2::new(5.0, -5.0),
            DVec2::new(-5.0, -5.0),
        ]],
    )
}

/// Depth sets the ridge height of a hipped roof.
#[test]
fn depth_sets_ridge_height() {
    let mesh = generate(
        ShapeKind::Hipped,
        &rectangle(),
        &ShapeOptions::default().with_depth(6.0),
    )
    .unwrap();
    assert_eq!(mesh.vertex_count(), 24);
    assert_eq!(mesh.vertex_count() % 3, 0);
    assert_relative_eq!(mesh.max_z(), 6.0, epsilon = 1e-9);
}

/// No depth or pitch keeps raw skeleton distances.
#[test]
fn empty_options_keep_raw_distances() {
    let mesh = generate(ShapeKind::Hipped, &rectangle(), &ShapeOptions::default()).unwrap();
    assert_eq!(mesh.vertex_count(), 24);
    assert_relative_eq!(mesh.max_z(), 25.0, epsilon = 1e-9);
}

/// Pitch turns the half-width into the ridge height.
#[test]
fn pitch_drives_ridge_height() {
    let options = ShapeOptions::default().with_pitch(26.57_f64.to_radians());
    let mesh = generate(ShapeKind::Hipped, &rectangle(), &options).unwrap();
    assert_relative_eq!(mesh.max_z(), 12.5, epsilon = 0.01);
    let buffer = mesh.positions_f32();
    let top = buffer.chunks(3).map(|p| p[2]).fold(f32::MIN, f32::max);
    assert!((top - 12.5).abs() < 0.01);
}

/// Every point on the ridge line sits at the same height.
#[test]
fn ridge_points_share_one_height() {
    let mesh = generate(
        ShapeKind::Hipped,
        &rectangle(),
        &ShapeOptions::default().with_depth(6.0),
    )
    .unwrap();
    for p in mesh.positions() {
        if p.y.abs() < 1e-9 && (p.x.abs() < 1e-9 || (p.x - 50.0).abs() < 1e-9) {
            assert_relative_eq!(p.z, 6.0, epsilon = 1e-9);
        }
    }
}

/// Nothing is roofed over the courtyard of a doughnut.
#[test]
fn doughnut_roof_leaves_hole_open() {
    let mesh = generate(
        ShapeKind::Hipped,
        &doughnut(),
        &ShapeOptions::default().with_depth(3.0),
    )
    .unwrap();
    // 8 quad facets and an 8 triangle floor.
    assert_eq!(mesh.vertex_count(), 72);
    assert_relative_eq!(mesh.max_z(), 3.0, epsilon = 1e-9);
    for triangle in mesh.triangles() {
        let mid = (triangle[0] + triangle[1] + triangle[2]).truncate() / 3.0;
        assert!(mid.x.abs() >= 5.0 - 1e-9 || mid.y.abs() >= 5.0 - 1e-9);
    }
}

/// The doughnut roof projects onto the ring between outline and hole.
#[test]
fn doughnut_roof_covers_ring_area() {
    let mesh = generate(ShapeKind::Hipped, &doughnut(), &ShapeOptions::default()).unwrap();
    let projected: f64 = mesh
        .triangles()
        .map(|t| (t[1] - t[0]).truncate().perp_dot((t[2] - t[0]).truncate()) / 2.0)
        .filter(|&area| area > 0.0)
        .sum();
    assert_relative_eq!(projected, 2500.0 - 100.0, epsilon = 1e-6);
}

/// A footprint the skeleton cannot resolve yields an empty mesh.
#[test]
fn unskeletonizable_footprint_gives_empty_mesh() {
    let mut polygon = rectangle();
    // A hole with no area passes normalization but has no skeleton.
    polygon.holes.push(vec![
        DVec2::new(0.0, 0.0),
        DVec2::new(1.0, 0.0),
        DVec2::new(2.0, 0.0),
    ]);
    let mesh = generate(ShapeKind::Hipped, &polygon, &ShapeOptions::default()).unwrap();
    assert!(mesh.is_empty());
}

/// A courtyard whose long sides meet the outer wavefront along whole segments.
#[test]
fn courtyard_roof_is_built() {
    let polygon = Polygon2D::with_holes(
        vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(30.0, 0.0),
            DVec2::new(30.0, 10.0),
            DVec2::new(0.0, 10.0),
        ],
        vec![vec![
            DVec2::new(5.0, 3.0),
            DVec2::new(9.0, 3.0),
            DVec2::new(9.0, 7.0),
            DVec2::new(5.0, 7.0),
        ]],
    );
    let mesh = generate(ShapeKind::Hipped, &polygon, &ShapeOptions::default()).unwrap();
    assert!(!mesh.is_empty());
    assert_eq!(mesh.vertex_count() % 3, 0);
    assert_relative_eq!(mesh.max_z(), 5.0, epsilon = 1e-9);
    let projected: f64 = mesh
        .triangles()
        .map(|t| (t[1] - t[0]).truncate().perp_dot((t[2] - t[0]).truncate()) / 2.0)
        .filter(|&area| area > 0.0)
        .sum();
    assert_relative_eq!(projected, 300.0 - 16.0, epsilon = 1e-6);
}
