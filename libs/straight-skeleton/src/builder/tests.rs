use super::*;
use crate::skeleton::Facet;
use approx::assert_relative_eq;
use proptest::prelude::*;

fn rectangle() -> Vec<DVec2> {
    vec![
        DVec2::new(-25.0, -25.0),
        DVec2::new(75.0, -25.0),
        DVec2::new(75.0, 25.0),
        DVec2::new(-25.0, 25.0),
    ]
}

fn square(half: f64) -> Vec<DVec2> {
    vec![
        DVec2::new(-half, -half),
        DVec2::new(half, -half),
        DVec2::new(half, half),
        DVec2::new(-half, half),
    ]
}

fn facet_area(facet: &Facet) -> f64 {
    signed_area(&facet.points)
}

fn total_area(skeleton: &StraightSkeleton) -> f64 {
    skeleton.facets().iter().map(facet_area).sum()
}

fn rect(min: DVec2, max: DVec2) -> Vec<DVec2> {
    vec![
        min,
        DVec2::new(max.x, min.y),
        max,
        DVec2::new(min.x, max.y),
    ]
}

/// Largest gap between a node's recorded distance and its perpendicular
/// distance to the facet's source edge.
fn distance_error(skeleton: &StraightSkeleton) -> f64 {
    let mut worst: f64 = 0.0;
    for facet in skeleton.facets() {
        let (a, b) = (facet.points[0], facet.points[1]);
        let normal = (b - a).normalize().perp();
        for (p, d) in facet.points.iter().zip(&facet.distances) {
            worst = worst.max(((*p - a).dot(normal) - d).abs());
        }
    }
    worst
}

/// Asserts the skeleton tiles `outer` minus `holes` with exact distances.
fn assert_tiles(skeleton: &StraightSkeleton, outer: &[DVec2], holes: &[Vec<DVec2>]) {
    let edges = outer.len() + holes.iter().map(Vec::len).sum::<usize>();
    let area = signed_area(outer).abs() - holes.iter().map(|h| signed_area(h).abs()).sum::<f64>();
    assert_eq!(skeleton.facets().len(), edges);
    assert_relative_eq!(total_area(skeleton), area, max_relative = 1e-9);
    assert!(distance_error(skeleton) < 1e-9);
}

#[test]
fn test_rectangle_skeleton() {
    let skeleton = SkeletonBuilder::default().build(&rectangle(), &[]).unwrap();
    let sizes: Vec<usize> = skeleton.facets().iter().map(Facet::len).collect();
    assert_eq!(sizes, vec![4, 3, 4, 3]);
    assert_relative_eq!(skeleton.max_distance(), 25.0, epsilon = 1e-9);
    assert_relative_eq!(total_area(&skeleton), 5000.0, epsilon = 1e-6);

    // The ridge runs along y = 0 between x = 0 and x = 50.
    assert_eq!(skeleton.distance_of(DVec2::new(0.0, 0.0)), Some(25.0));
    assert_eq!(skeleton.distance_of(DVec2::new(50.0, 0.0)), Some(25.0));
    assert_eq!(skeleton.distance_of(DVec2::new(75.0, 25.0)), Some(0.0));
}

#[test]
fn test_facets_start_with_their_edge() {
    let outer = rectangle();
    let skeleton = SkeletonBuilder::default().build(&outer, &[]).unwrap();
    for (i, facet) in skeleton.facets().iter().enumerate() {
        assert_eq!(facet.edge, i);
        assert_eq!(facet.points[0], outer[i]);
        assert_eq!(facet.points[1], outer[(i + 1) % 4]);
        assert_eq!(facet.points.len(), facet.distances.len());
        assert!(facet_area(facet) > 0.0);
    }
}

#[test]
fn test_square_meets_at_center() {
    let skeleton = SkeletonBuilder::default().build(&square(1.0), &[]).unwrap();
    assert_eq!(skeleton.facets().len(), 4);
    for facet in skeleton.facets() {
        assert_eq!(facet.len(), 3);
        assert_relative_eq!(facet.points[2].length(), 0.0, epsilon = 1e-9);
        assert_relative_eq!(facet.distances[2], 1.0, epsilon = 1e-9);
    }
}

#[test]
fn test_triangle_meets_at_incenter() {
    let triangle = [DVec2::ZERO, DVec2::new(4.0, 0.0), DVec2::new(0.0, 3.0)];
    let skeleton = SkeletonBuilder::default().build(&triangle, &[]).unwrap();
    assert_eq!(skeleton.facets().len(), 3);
    assert_relative_eq!(skeleton.max_distance(), 1.0, epsilon = 1e-9);
    for facet in skeleton.facets() {
        assert_eq!(facet.len(), 3);
        assert_relative_eq!(facet.points[2].x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(facet.points[2].y, 1.0, epsilon = 1e-6);
    }
}

#[test]
fn test_l_shape() {
    let outer = [
        DVec2::new(0.0, 0.0),
        DVec2::new(4.0, 0.0),
        DVec2::new(4.0, 2.0),
        DVec2::new(2.0, 2.0),
        DVec2::new(2.0, 4.0),
        DVec2::new(0.0, 4.0),
    ];
    let skeleton = SkeletonBuilder::default().build(&outer, &[]).unwrap();
    let sizes: Vec<usize> = skeleton.facets().iter().map(Facet::len).collect();
    assert_eq!(sizes, vec![4, 3, 4, 4, 3, 4]);
    assert_relative_eq!(skeleton.max_distance(), 1.0, epsilon = 1e-9);
    assert_relative_eq!(total_area(&skeleton), 12.0, epsilon = 1e-9);
    // The reflex corner's facet reaches the inner node at (1, 1).
    assert!(skeleton.facets()[2]
        .points
        .iter()
        .any(|p| p.distance(DVec2::ONE) < 1e-9));
}

#[test]
fn test_doughnut_facets_are_quads() {
    let hole = vec![
        DVec2::new(-5.0, -5.0),
        DVec2::new(-5.0, 5.0),
        DVec2::new(5.0, 5.0),
        DVec2::new(5.0, -5.0),
    ];
    let skeleton = SkeletonBuilder::default().build(&square(25.0), &[hole]).unwrap();
    assert_eq!(skeleton.facets().len(), 8);
    for facet in skeleton.facets() {
        assert_eq!(facet.len(), 4);
        assert!(facet_area(facet) > 0.0);
    }
    assert_relative_eq!(skeleton.max_distance(), 10.0, epsilon = 1e-9);
    assert_relative_eq!(total_area(&skeleton), 2500.0 - 100.0, epsilon = 1e-6);
}

/// A courtyard as far from both long sides as they are from each other's
/// midline: the hole's top and bottom meet the outer wavefront along whole
/// segments at the same moment.
#[test]
fn test_courtyard_touching_both_long_sides() {
    let outer = rect(DVec2::ZERO, DVec2::new(30.0, 10.0));
    let holes = vec![rect(DVec2::new(5.0, 3.0), DVec2::new(9.0, 7.0))];
    let skeleton = SkeletonBuilder::default().build(&outer, &holes).unwrap();
    assert_tiles(&skeleton, &outer, &holes);
    assert_relative_eq!(total_area(&skeleton), 284.0, epsilon = 1e-9);
    assert_relative_eq!(skeleton.max_distance(), 5.0, epsilon = 1e-9);
}

/// Two courtyards whose sides collide with the outer wavefront at
/// different times.
#[test]
fn test_two_courtyards() {
    let outer = rect(DVec2::ZERO, DVec2::new(30.0, 10.0));
    let holes = vec![
        rect(DVec2::new(5.0, 2.5), DVec2::new(9.0, 7.0)),
        rect(DVec2::new(20.0, 3.0), DVec2::new(24.0, 7.2)),
    ];
    let skeleton = SkeletonBuilder::default().build(&outer, &holes).unwrap();
    assert_tiles(&skeleton, &outer, &holes);
    assert_relative_eq!(total_area(&skeleton), 265.2, epsilon = 1e-9);
}

/// A comb: several reflex corners reach the same wavefront together.
#[test]
fn test_comb() {
    let outer = vec![
        DVec2::new(0.0, 0.0),
        DVec2::new(7.0, 0.0),
        DVec2::new(7.0, 3.0),
        DVec2::new(6.0, 3.0),
        DVec2::new(6.0, 1.0),
        DVec2::new(4.0, 1.0),
        DVec2::new(4.0, 3.0),
        DVec2::new(3.0, 3.0),
        DVec2::new(3.0, 1.0),
        DVec2::new(1.0, 1.0),
        DVec2::new(1.0, 3.0),
        DVec2::new(0.0, 3.0),
    ];
    let skeleton = SkeletonBuilder::default().build(&outer, &[]).unwrap();
    assert_tiles(&skeleton, &outer, &[]);
}

#[test]
fn test_clockwise_outer_is_reoriented() {
    let mut outer = rectangle();
    outer.reverse();
    let skeleton = SkeletonBuilder::default().build(&outer, &[]).unwrap();
    assert_relative_eq!(skeleton.max_distance(), 25.0, epsilon = 1e-9);
    assert_relative_eq!(total_area(&skeleton), 5000.0, epsilon = 1e-6);
}

#[test]
fn test_repeated_closing_point_is_ignored() {
    let mut outer = square(1.0);
    outer.push(outer[0]);
    let skeleton = SkeletonBuilder::default().build(&outer, &[]).unwrap();
    assert_eq!(skeleton.facets().len(), 4);
}

#[test]
fn test_degenerate_input_returns_none() {
    let builder = SkeletonBuilder::default();
    assert!(builder.build(&[DVec2::ZERO, DVec2::X], &[]).is_none());
    assert!(builder
        .build(&[DVec2::ZERO, DVec2::X, DVec2::new(2.0, 0.0)], &[])
        .is_none());
    assert!(builder
        .build(&[DVec2::ZERO, DVec2::X, DVec2::new(f64::NAN, 1.0)], &[])
        .is_none());
}

#[test]
fn test_degenerate_hole_returns_none() {
    let hole = vec![DVec2::ZERO, DVec2::new(0.5, 0.0)];
    assert!(SkeletonBuilder::default()
        .build(&square(5.0), &[hole])
        .is_none());
}

#[test]
fn test_build_multi() {
    let multipolygon = vec![
        vec![vec![[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0]]],
        vec![vec![[10.0, 0.0], [14.0, 0.0], [14.0, 4.0], [10.0, 4.0]]],
    ];
    let skeleton = SkeletonBuilder::default().build_multi(&multipolygon).unwrap();
    assert_eq!(skeleton.facets().len(), 8);
    let edges: Vec<usize> = skeleton.facets().iter().map(|f| f.edge).collect();
    assert_eq!(edges, (0..8).collect::<Vec<_>>());
    assert_relative_eq!(skeleton.max_distance(), 2.0, epsilon = 1e-9);
}

#[test]
fn test_build_multi_rejects_empty_polygon() {
    let multipolygon: Vec<Vec<Vec<[f64; 2]>>> = vec![Vec::new()];
    assert!(SkeletonBuilder::default().build_multi(&multipolygon).is_none());
}

#[test]
fn test_shared_builder_is_initialised_once() {
    let first = SkeletonBuilder::shared() as *const SkeletonBuilder;
    let second = SkeletonBuilder::shared() as *const SkeletonBuilder;
    assert_eq!(first, second);
    assert_eq!(*SkeletonBuilder::shared().config(), SkeletonConfig::default());
}

#[test]
fn test_tiny_budget_gives_up() {
    let builder = SkeletonBuilder::new(SkeletonConfig {
        max_events: Some(1),
        ..SkeletonConfig::default()
    });
    assert!(builder.build(&rectangle(), &[]).is_none());
}

#[test]
fn test_budget_scales_with_vertices() {
    let config = SkeletonConfig::default();
    assert!(config.budget(100) > config.budget(4));
    let fixed = SkeletonConfig {
        max_events: Some(7),
        ..config
    };
    assert_eq!(fixed.budget(100), 7);
}

proptest! {
    /// Facets of a convex polygon tile it exactly.
    #[test]
    fn prop_convex_facets_cover_polygon(
        gaps in prop::collection::vec(0.3..1.0f64, 3..10),
        radius in 1.0..50.0f64,
    ) {
        let total: f64 = gaps.iter().sum();
        let mut angle: f64 = 0.0;
        let outer: Vec<DVec2> = gaps
            .iter()
            .map(|gap| {
                let p = DVec2::new(angle.cos(), angle.sin()) * radius;
                angle += gap / total * std::f64::consts::TAU;
                p
            })
            .collect();

        let skeleton = SkeletonBuilder::default().build(&outer, &[]).unwrap();
        prop_assert_eq!(skeleton.facets().len(), outer.len());
        let expected = signed_area(&outer);
        prop_assert!((total_area(&skeleton) - expected).abs() <= 1e-6 * expected);
        for facet in skeleton.facets() {
            prop_assert!(facet.len() >= 3);
            for &d in &facet.distances {
                prop_assert!(d >= 0.0 && d <= skeleton.max_distance() + 1e-12);
            }
        }
    }

    /// Facets tile a rectangle with courtyards on a cell grid. Integer
    /// coordinates line hole sides up with each other and with the outer
    /// ring, so many events coincide.
    #[test]
    fn prop_courtyard_facets_tile_footprint(
        cols in 1usize..=4,
        rows in 1usize..=3,
        cells in prop::collection::vec((any::<bool>(), 0u8..2, 0u8..2, 1u8..3, 1u8..3), 12),
        scale in prop_oneof![Just(1.0), 0.5..3.0f64],
    ) {
        let extent = DVec2::new((4 * cols + 1) as f64, (4 * rows + 1) as f64) * scale;
        let outer = rect(DVec2::ZERO, extent);
        let mut holes = Vec::new();
        for j in 0..rows {
            for i in 0..cols {
                let (present, dx, dy, w, h) = cells[j * 4 + i];
                if !present {
                    continue;
                }
                let min = DVec2::new((4 * i + 1) as f64 + f64::from(dx), (4 * j + 1) as f64 + f64::from(dy));
                let max = min + DVec2::new(f64::from(w), f64::from(h));
                holes.push(rect(min * scale, max * scale));
            }
        }

        let skeleton = SkeletonBuilder::default().build(&outer, &holes);
        prop_assert!(skeleton.is_some());
        let skeleton = skeleton.unwrap();
        let expected = signed_area(&outer) - holes.iter().map(|h| signed_area(h)).sum::<f64>();
        prop_assert_eq!(skeleton.facets().len(), 4 + 4 * holes.len());
        prop_assert!((total_area(&skeleton) - expected).abs() <= 1e-6 * expected);
        prop_assert!(distance_error(&skeleton) <= 1e-6 * scale);
    }

    /// Facets tile an orthogonal skyline: columns of random width and
    /// height standing on a common base.
    #[test]
    fn prop_skyline_facets_tile_footprint(
        columns in prop::collection::vec((1u8..5, 1u8..7), 2..8),
        scale in prop_oneof![Just(1.0), 0.5..3.0f64],
    ) {
        let mut merged: Vec<(f64, f64)> = Vec::new();
        for (w, h) in columns {
            let (w, h) = (f64::from(w), f64::from(h));
            match merged.last_mut() {
                Some(last) if last.1 == h => last.0 += w,
                _ => merged.push((w, h)),
            }
        }
        let mut xs = vec![0.0];
        for (w, _) in &merged {
            xs.push(xs[xs.len() - 1] + w);
        }
        let width = xs[xs.len() - 1];
        let mut outer = vec![DVec2::ZERO, DVec2::new(width, 0.0)];
        for k in (0..merged.len()).rev() {
            outer.push(DVec2::new(xs[k + 1], merged[k].1));
            outer.push(DVec2::new(xs[k], merged[k].1));
        }
        let outer: Vec<DVec2> = outer.into_iter().map(|p| p * scale).collect();

        let skeleton = SkeletonBuilder::default().build(&outer, &[]);
        prop_assert!(skeleton.is_some());
        let skeleton = skeleton.unwrap();
        let expected = signed_area(&outer);
        prop_assert_eq!(skeleton.facets().len(), outer.len());
        prop_assert!((total_area(&skeleton) - expected).abs() <= 1e-6 * expected);
        prop_assert!(distance_error(&skeleton) <= 1e-6 * scale);
    }
}
