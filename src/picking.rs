//! Mouse picking: rays, collision shapes, and ray casts against the ECS world.
//!
//! Each board cell is registered as an entity carrying a [`Transform`], a
//! [`Collider`] and a [`CellIndex`]. A click is turned into a [`Ray`] with
//! [`Ray::from_screen`], cast against every collider, and the nearest hit's
//! `CellIndex` names the cell.
//!
//! # Example
//!
//! ```
//! use tictactoe3d::{picking, Board, Camera, Vec3};
//!
//! let board = Board::new(3.0);
//! let mut world = hecs::World::new();
//! picking::spawn_cell_colliders(&mut world, &board, Vec3::new(1.4, 1.4, 0.5));
//!
//! let camera = Camera::default();
//! let ray = camera.ray_from_screen(400.0, 300.0, 800.0, 600.0);
//! assert_eq!(picking::pick_cell(&world, &ray, 50.0), Some(4));
//! ```

use glam::{Mat4, Vec3, Vec4};

use crate::board::Board;
use crate::mesh::Transform;

/// A ray with a normalized direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray. The direction is normalized.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Unprojects a window pixel into a world-space ray.
    ///
    /// `screen_y` counts down from the top of the window. The ray starts on
    /// the near plane and points towards the matching far-plane point.
    pub fn from_screen(
        screen_x: f32,
        screen_y: f32,
        screen_width: f32,
        screen_height: f32,
        view_matrix: Mat4,
        projection_matrix: Mat4,
    ) -> Self {
        let ndc_x = (2.0 * screen_x / screen_width) - 1.0;
        let ndc_y = 1.0 - (2.0 * screen_y / screen_height);

        let inv_view_proj = (projection_matrix * view_matrix).inverse();
        let unproject = |depth: f32| {
            let world = inv_view_proj * Vec4::new(ndc_x, ndc_y, depth, 1.0);
            world.truncate() / world.w
        };

        let near_point = unproject(0.0);
        let far_point = unproject(1.0);

        Self::new(near_point, far_point - near_point)
    }

    #[inline]
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Slab test against an axis-aligned box.
    ///
    /// Returns the distance to the nearest intersection in front of the origin.
    pub fn intersect_aabb(&self, min: Vec3, max: Vec3) -> Option<f32> {
        let mut t_min = f32::NEG_INFINITY;
        let mut t_max = f32::INFINITY;

        for axis in 0..3 {
            let origin = self.origin[axis];
            let dir = self.direction[axis];

            if dir.abs() < f32::EPSILON {
                if origin < min[axis] || origin > max[axis] {
                    return None;
                }
                continue;
            }

            let inv_dir = 1.0 / dir;
            let t1 = (min[axis] - origin) * inv_dir;
            let t2 = (max[axis] - origin) * inv_dir;

            t_min = t_min.max(t1.min(t2));
            t_max = t_max.min(t1.max(t2));

            if t_min > t_max {
                return None;
            }
        }

        nearest_positive(t_min, t_max)
    }

    /// Returns the distance to the nearest intersection with a sphere in front of the origin.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let a = self.direction.dot(self.direction);
        let b = 2.0 * oc.dot(self.direction);
        let c = oc.dot(oc) - radius * radius;
        let discriminant = b * b - 4.0 * a * c;

        if discriminant < 0.0 || a == 0.0 {
            return None;
        }

        let sqrt_disc = discriminant.sqrt();
        nearest_positive((-b - sqrt_disc) / (2.0 * a), (-b + sqrt_disc) / (2.0 * a))
    }
}

fn nearest_positive(near: f32, far: f32) -> Option<f32> {
    if near > 0.0 {
        Some(near)
    } else if far > 0.0 {
        Some(far)
    } else {
        None
    }
}

/// A collision shape centered on its entity's [`Transform`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Collider {
    /// Axis-aligned box; `half_extents` (1, 1, 1) spans -1..1 on every axis.
    Box { half_extents: Vec3 },
    Sphere { radius: f32 },
}

impl Collider {
    /// Box collider from full dimensions.
    pub fn box_collider(size: Vec3) -> Self {
        Self::Box {
            half_extents: size * 0.5,
        }
    }

    pub fn box_half_extents(half_extents: Vec3) -> Self {
        Self::Box { half_extents }
    }

    pub fn sphere(radius: f32) -> Self {
        Self::Sphere { radius }
    }

    /// Distance along `ray` to this collider placed at `position` with `scale`.
    ///
    /// Rotation is ignored; spheres use the mean scale.
    pub fn intersect(&self, ray: &Ray, position: Vec3, scale: Vec3) -> Option<f32> {
        match *self {
            Collider::Box { half_extents } => {
                let scaled_half = half_extents * scale;
                ray.intersect_aabb(position - scaled_half, position + scaled_half)
            }
            Collider::Sphere { radius } => {
                let avg_scale = (scale.x + scale.y + scale.z) / 3.0;
                ray.intersect_sphere(position, radius * avg_scale)
            }
        }
    }
}

/// Flat row-major index of the board cell a collider belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellIndex(pub usize);

/// A ray-collider intersection.
#[derive(Clone, Copy, Debug)]
pub struct RayHit {
    pub entity: hecs::Entity,
    pub distance: f32,
    /// World-space hit point.
    pub point: Vec3,
}

/// Casts `ray` against every entity with a `Transform` and `Collider`.
///
/// Hits are sorted nearest first.
pub fn raycast_all(world: &hecs::World, ray: &Ray) -> Vec<RayHit> {
    let mut query = world.query::<(&Transform, &Collider)>();
    let mut hits: Vec<RayHit> = query
        .iter()
        .filter_map(|(entity, (transform, collider))| {
            collider
                .intersect(ray, transform.position, transform.scale)
                .map(|distance| RayHit {
                    entity,
                    distance,
                    point: ray.point_at(distance),
                })
        })
        .collect();

    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}

/// Nearest hit no further than `max_distance` along the ray.
pub fn raycast(world: &hecs::World, ray: &Ray, max_distance: f32) -> Option<RayHit> {
    raycast_all(world, ray)
        .into_iter()
        .next()
        .filter(|hit| hit.distance <= max_distance)
}

/// Registers one box collider per board cell, tagged with the cell's flat index.
pub fn spawn_cell_colliders(
    world: &mut hecs::World,
    board: &Board,
    half_extents: Vec3,
) -> Vec<hecs::Entity> {
    let grid = board.grid();
    grid.iter()
        .filter_map(|(row, column, cell)| {
            let index = grid.index_of(row, column)?;
            Some(world.spawn((
                Transform::from_position(cell.position),
                Collider::box_half_extents(half_extents),
                CellIndex(index),
            )))
        })
        .collect()
}

/// Index of the board cell under `ray`, if one is hit within `max_distance`.
pub fn pick_cell(world: &hecs::World, ray: &Ray, max_distance: f32) -> Option<usize> {
    let hit = raycast(world, ray, max_distance)?;
    world
        .get::<&CellIndex>(hit.entity)
        .ok()
        .map(|index| index.0)
}
