//! 2D vector and oriented-box math used by the collision test.
//!
//! Angles are in degrees throughout, matching the sprite rotation the
//! renderer receives. Screen space: +x is right, +y is down.

use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn dot(self, other: Vector2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, rhs: f64) -> Vector2 {
        Vector2::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

// ── Axis helpers ──────────────────────────────────────────────────────────────

/// Unit axis of a box rotated by `angle_degrees`.
///
/// `index` 0 is the box's local right, `index` 1 is its local down; the two
/// are 90° apart so together they form an orthonormal basis.
pub fn axis_from_angle(angle_degrees: f64, index: usize) -> Vector2 {
    let theta = (angle_degrees + 90.0 * index as f64).to_radians();
    Vector2::new(theta.cos(), theta.sin())
}

/// `m1 * v1 + m2 * v2`, componentwise.
pub fn scaled_sum(m1: f64, v1: Vector2, m2: f64, v2: Vector2) -> Vector2 {
    v1 * m1 + v2 * m2
}

/// Absolute value of the dot product.
pub fn dot_abs(v1: Vector2, v2: Vector2) -> f64 {
    v1.dot(v2).abs()
}

// ── Oriented boxes ────────────────────────────────────────────────────────────

/// A rectangle with arbitrary rotation. Derived fresh every frame from an
/// entity; never stored on the entity itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrientedBox {
    pub center: Vector2,
    pub half_extents: Vector2,
    /// Local right and local down, both unit length and perpendicular.
    pub axes: [Vector2; 2],
}

impl OrientedBox {
    /// Box for a sprite whose unrotated top-left corner is `position`,
    /// rotated about its center.
    pub fn from_rect(position: Vector2, size: Vector2, angle_degrees: f64) -> Self {
        let half_extents = size * 0.5;
        Self {
            center: position + half_extents,
            half_extents,
            axes: [
                axis_from_angle(angle_degrees, 0),
                axis_from_angle(angle_degrees, 1),
            ],
        }
    }

    /// Half-extent offset vector along the box's own axes: the vector from
    /// the center to one corner.
    pub fn corner_offset(&self) -> Vector2 {
        scaled_sum(
            self.half_extents.x,
            self.axes[0],
            self.half_extents.y,
            self.axes[1],
        )
    }

    /// Exact half-length of the box's shadow on `axis` (a unit vector).
    pub fn projected_radius(&self, axis: Vector2) -> f64 {
        (self.half_extents.x * self.axes[0].dot(axis)).abs()
            + (self.half_extents.y * self.axes[1].dot(axis)).abs()
    }

    /// The four corners, clockwise from the local top-left.
    pub fn corners(&self) -> [Vector2; 4] {
        let right = self.axes[0] * self.half_extents.x;
        let down = self.axes[1] * self.half_extents.y;
        [
            self.center - right - down,
            self.center + right - down,
            self.center + right + down,
            self.center - right + down,
        ]
    }
}
