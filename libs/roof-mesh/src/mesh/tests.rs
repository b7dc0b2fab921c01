use super::*;
use approx::assert_relative_eq;

fn unit_triangle() -> Mesh {
    let mut mesh = Mesh::new();
    mesh.push_triangle(DVec3::ZERO, DVec3::X, DVec3::Y);
    mesh
}

#[test]
fn test_mesh_new() {
    let mesh = Mesh::new();
    assert!(mesh.is_empty());
    assert_eq!(mesh.vertex_count(), 0);
    assert_eq!(mesh.triangle_count(), 0);
    assert_eq!(mesh.bounding_box(), (DVec3::ZERO, DVec3::ZERO));
}

#[test]
fn test_push_triangle() {
    let mesh = unit_triangle();
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.triangle_count(), 1);
    assert_eq!(
        mesh.triangles().next(),
        Some([DVec3::ZERO, DVec3::X, DVec3::Y])
    );
}

#[test]
fn test_normals_are_per_triangle() {
    let mut mesh = unit_triangle();
    // A wall facing -y.
    mesh.push_triangle(DVec3::ZERO, DVec3::X, DVec3::Z);
    mesh.compute_normals();
    let normals = mesh.normals().unwrap();
    assert_eq!(normals.len(), 6);
    assert!(normals[..3].iter().all(|&n| n == DVec3::Z));
    assert!(normals[3..].iter().all(|&n| n == DVec3::NEG_Y));
}

#[test]
fn test_degenerate_triangle_has_zero_normal() {
    let mut mesh = Mesh::new();
    mesh.push_triangle(DVec3::ZERO, DVec3::X, DVec3::X * 2.0);
    mesh.compute_normals();
    assert_eq!(mesh.normals().unwrap()[0], DVec3::ZERO);
}

#[test]
fn test_push_invalidates_normals() {
    let mut mesh = unit_triangle();
    mesh.compute_normals();
    mesh.push_triangle(DVec3::ZERO, DVec3::X, DVec3::Y);
    assert!(mesh.normals().is_none());
}

#[test]
fn test_bounding_box_and_max_z() {
    let mut mesh = Mesh::new();
    mesh.push_triangle(
        DVec3::new(-1.0, -2.0, -3.0),
        DVec3::new(4.0, 5.0, 6.0),
        DVec3::new(0.0, 0.0, 1.0),
    );
    let (min, max) = mesh.bounding_box();
    assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
    assert_eq!(max, DVec3::new(4.0, 5.0, 6.0));
    assert_eq!(mesh.max_z(), 6.0);
}

#[test]
fn test_surface_area() {
    let mut mesh = unit_triangle();
    mesh.push_triangle(DVec3::X, DVec3::new(1.0, 1.0, 0.0), DVec3::Y);
    assert_relative_eq!(mesh.surface_area(), 1.0, epsilon = 1e-12);
}

#[test]
fn test_translate() {
    let mut mesh = unit_triangle();
    mesh.translate(DVec3::new(0.0, 0.0, 2.0));
    assert!(mesh.positions().iter().all(|p| p.z == 2.0));
}

#[test]
fn test_merge() {
    let mut first = unit_triangle();
    first.compute_normals();
    let mut second = unit_triangle();
    second.translate(DVec3::Z);
    second.compute_normals();

    first.merge(&second);
    assert_eq!(first.triangle_count(), 2);
    assert_eq!(first.normals().map(<[DVec3]>::len), Some(6));

    first.merge(&unit_triangle());
    assert_eq!(first.triangle_count(), 3);
    assert!(first.normals().is_none());
}

#[test]
fn test_positions_f32() {
    let mut mesh = Mesh::new();
    mesh.push_triangle(DVec3::new(1.0, 2.0, 3.0), DVec3::X, DVec3::Y);
    let buffer = mesh.positions_f32();
    assert_eq!(buffer.len(), 9);
    assert_eq!(&buffer[..3], &[1.0f32, 2.0, 3.0]);
    assert!(mesh.normals_f32().is_none());

    mesh.compute_normals();
    assert_eq!(mesh.normals_f32().unwrap()[..3], [0.0f32, 0.0, 1.0]);
}
