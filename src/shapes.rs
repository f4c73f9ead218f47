//! Procedural geometry for the board pieces.
//!
//! Everything is built on the CPU as [`RawGeometry`] and uploaded with
//! [`Mesh::from_geometry`](crate::Mesh::from_geometry). Shapes face +Z (towards
//! the default camera) and use counter-clockwise winding.

use std::f32::consts::{FRAC_PI_4, TAU};

use glam::{Mat4, Quat, Vec3};

use crate::mesh::Vertex3d;

/// Vertex and index data before GPU upload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawGeometry {
    pub vertices: Vec<Vertex3d>,
    pub indices: Vec<u32>,
}

impl RawGeometry {
    pub fn new(vertices: Vec<Vertex3d>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    /// Axis-aligned bounding box as `(min, max)`.
    pub fn bounds(&self) -> (Vec3, Vec3) {
        self.vertices.iter().fold(
            (Vec3::splat(f32::INFINITY), Vec3::splat(f32::NEG_INFINITY)),
            |(min, max), v| {
                let p = Vec3::from(v.position);
                (min.min(p), max.max(p))
            },
        )
    }

    pub fn center(&self) -> Vec3 {
        let (min, max) = self.bounds();
        (min + max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        let (min, max) = self.bounds();
        max - min
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns a copy with positions and normals run through `matrix`.
    pub fn transformed(mut self, matrix: Mat4) -> Self {
        let normal_matrix = matrix.inverse().transpose();
        for v in &mut self.vertices {
            v.position = matrix.transform_point3(Vec3::from(v.position)).to_array();
            v.normal = normal_matrix
                .transform_vector3(Vec3::from(v.normal))
                .normalize_or_zero()
                .to_array();
        }
        self
    }

    /// Merges `other` into this geometry.
    pub fn append(&mut self, other: RawGeometry) {
        let base = self.vertices.len() as u32;
        self.vertices.extend(other.vertices);
        self.indices.extend(other.indices.into_iter().map(|i| i + base));
    }
}

/// A box centered at the origin with the given full dimensions.
///
/// Each face has its own four vertices so normals stay flat.
pub fn cuboid(size: Vec3) -> RawGeometry {
    let h = size * 0.5;
    // (normal, tangent u, tangent v) with u × v = normal so quads wind CCW.
    let faces = [
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
    ];

    let mut geometry = RawGeometry::default();
    for (normal, u, v) in faces {
        let base = geometry.vertices.len() as u32;
        for (su, sv, uv) in [
            (-1.0, -1.0, [0.0, 1.0]),
            (1.0, -1.0, [1.0, 1.0]),
            (1.0, 1.0, [1.0, 0.0]),
            (-1.0, 1.0, [0.0, 0.0]),
        ] {
            let p = (normal + u * su + v * sv) * h;
            geometry
                .vertices
                .push(Vertex3d::new(p.to_array(), normal.to_array(), uv));
        }
        geometry
            .indices
            .extend([base, base + 1, base + 2, base + 2, base + 3, base]);
    }
    geometry
}

/// The X: two bars crossed at 45°, `size` long, sitting in front of `z = 0`.
pub fn cross_mark(size: f32, thickness: f32, depth: f32) -> RawGeometry {
    let bar = cuboid(Vec3::new(size, thickness, depth));
    let lift = Vec3::new(0.0, 0.0, depth * 0.5);

    let mut geometry = RawGeometry::default();
    for angle in [FRAC_PI_4, -FRAC_PI_4] {
        let matrix = Mat4::from_rotation_translation(Quat::from_rotation_z(angle), lift);
        geometry.append(bar.clone().transformed(matrix));
    }
    geometry
}

/// The O: a torus in the XY plane, sitting in front of `z = 0`.
///
/// `radius` is measured to the middle of the tube, `tube` is the tube radius.
pub fn ring_mark(radius: f32, tube: f32, segments: u32, sides: u32) -> RawGeometry {
    let segments = segments.max(3);
    let sides = sides.max(3);

    let mut geometry = RawGeometry::default();
    for i in 0..=segments {
        let u = i as f32 / segments as f32;
        let (sin_t, cos_t) = (u * TAU).sin_cos();
        for j in 0..=sides {
            let v = j as f32 / sides as f32;
            let (sin_p, cos_p) = (v * TAU).sin_cos();

            let normal = Vec3::new(cos_p * cos_t, cos_p * sin_t, sin_p);
            let position = Vec3::new(radius * cos_t, radius * sin_t, tube) + normal * tube;
            geometry
                .vertices
                .push(Vertex3d::new(position.to_array(), normal.to_array(), [u, v]));
        }
    }

    let stride = sides + 1;
    for i in 0..segments {
        for j in 0..sides {
            let a = i * stride + j;
            let b = (i + 1) * stride + j;
            let c = b + 1;
            let d = a + 1;
            geometry.indices.extend([a, b, c, a, c, d]);
        }
    }
    geometry
}

/// A square backing plate whose front face lies on `z = 0`.
pub fn cover_tile(size: f32, depth: f32) -> RawGeometry {
    cuboid(Vec3::new(size, size, depth))
        .transformed(Mat4::from_translation(Vec3::new(0.0, 0.0, -depth * 0.5)))
}

/// The four bars separating a 3×3 board with cells `spacing` apart.
pub fn board_frame(spacing: f32, length: f32, thickness: f32, depth: f32) -> RawGeometry {
    let vertical = cuboid(Vec3::new(thickness, length, depth));
    let horizontal = cuboid(Vec3::new(length, thickness, depth));
    let half = spacing * 0.5;
    let z = depth * 0.5;

    let mut geometry = RawGeometry::default();
    for offset in [-half, half] {
        geometry.append(
            vertical
                .clone()
                .transformed(Mat4::from_translation(Vec3::new(offset, 0.0, z))),
        );
        geometry.append(
            horizontal
                .clone()
                .transformed(Mat4::from_translation(Vec3::new(0.0, offset, z))),
        );
    }
    geometry
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_well_formed(geometry: &RawGeometry) {
        assert!(!geometry.indices.is_empty());
        assert_eq!(geometry.indices.len() % 3, 0);
        let count = geometry.vertices.len() as u32;
        assert!(geometry.indices.iter().all(|&i| i < count));
        for v in &geometry.vertices {
            let n = Vec3::from(v.normal);
            assert!((n.length() - 1.0).abs() < 1e-4, "normal {n:?} is not unit");
        }
    }

    /// Every triangle's winding agrees with its vertex normals.
    fn assert_ccw(geometry: &RawGeometry) {
        for tri in geometry.indices.chunks(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| geometry.vertices[i as usize]);
            let face = (Vec3::from(b.position) - Vec3::from(a.position))
                .cross(Vec3::from(c.position) - Vec3::from(a.position));
            if face.length_squared() < 1e-12 {
                continue;
            }
            let normal = Vec3::from(a.normal) + Vec3::from(b.normal) + Vec3::from(c.normal);
            assert!(face.dot(normal) > 0.0, "triangle {tri:?} winds clockwise");
        }
    }

    #[test]
    fn cuboid_has_flat_faces() {
        let cube = cuboid(Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(cube.vertices.len(), 24);
        assert_eq!(cube.triangle_count(), 12);
        assert_eq!(cube.size(), Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(cube.center(), Vec3::ZERO);
        assert_well_formed(&cube);
        assert_ccw(&cube);
    }

    #[test]
    fn append_offsets_indices() {
        let mut geometry = cuboid(Vec3::ONE);
        geometry.append(cuboid(Vec3::ONE));
        assert_eq!(geometry.vertices.len(), 48);
        assert_eq!(geometry.indices[36], 24);
        assert_well_formed(&geometry);
    }

    #[test]
    fn cross_sits_in_front_of_plane() {
        let cross = cross_mark(4.0, 0.8, 0.6);
        let (min, max) = cross.bounds();
        assert!(min.z.abs() < 1e-5);
        assert!((max.z - 0.6).abs() < 1e-5);
        assert!(cross.center().truncate().length() < 1e-4);
        assert_well_formed(&cross);
        assert_ccw(&cross);
    }

    #[test]
    fn ring_is_a_closed_torus() {
        let ring = ring_mark(1.5, 0.3, 32, 12);
        assert_eq!(ring.vertices.len(), 33 * 13);
        assert_eq!(ring.triangle_count(), 32 * 12 * 2);
        let size = ring.size();
        assert!((size.x - 3.6).abs() < 1e-3);
        assert!((size.z - 0.6).abs() < 1e-3);
        assert!(ring.bounds().0.z.abs() < 1e-4);
        assert_well_formed(&ring);
        assert_ccw(&ring);
    }

    #[test]
    fn cover_front_face_on_plane() {
        let tile = cover_tile(5.6, 0.4);
        let (min, max) = tile.bounds();
        assert!(max.z.abs() < 1e-6);
        assert!((min.z + 0.4).abs() < 1e-6);
        assert_ccw(&tile);
    }

    #[test]
    fn frame_bars_sit_between_cells() {
        let frame = board_frame(6.0, 18.0, 0.3, 0.5);
        assert_eq!(frame.vertices.len(), 4 * 24);
        let (min, max) = frame.bounds();
        assert!((max.x - 9.0).abs() < 1e-5);
        assert!((min.y + 9.0).abs() < 1e-5);
        assert_well_formed(&frame);
    }
}
