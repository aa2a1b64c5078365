#![warn(missing_docs)]
//! Physics primitives (AABB, collisions, etc.).

use glam::Vec3;

/// Axis-aligned bounding box used for collisions.
///
/// Block shapes are expressed in block-local unit-cube coordinates
/// ([0, 1] per axis) and translated into world space by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// Create a new AABB ensuring min <= max per axis.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        debug_assert!(min.x <= max.x && min.y <= max.y && min.z <= max.z);
        Self { min, max }
    }

    /// Returns this box shifted by `offset` (e.g. into world coordinates).
    pub fn translate(&self, offset: Vec3) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Extent along each axis.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Tests intersection with another AABB.
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_moves_both_corners() {
        let unit = Aabb::new(Vec3::ZERO, Vec3::ONE);
        let moved = unit.translate(Vec3::new(3.0, 64.0, -2.0));
        assert_eq!(moved.min, Vec3::new(3.0, 64.0, -2.0));
        assert_eq!(moved.max, Vec3::new(4.0, 65.0, -1.0));
        assert_eq!(moved.size(), unit.size());
    }

    #[test]
    fn intersects_is_symmetric() {
        let a = Aabb::new(Vec3::ZERO, Vec3::ONE);
        let b = Aabb::new(Vec3::new(0.5, 0.5, 0.5), Vec3::new(1.5, 1.5, 1.5));
        let c = Aabb::new(Vec3::new(2.0, 0.0, 0.0), Vec3::new(3.0, 1.0, 1.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
        assert!(!c.intersects(&a));
    }

    #[test]
    fn touching_faces_count_as_intersecting() {
        let lower = Aabb::new(Vec3::ZERO, Vec3::new(1.0, 0.5, 1.0));
        let upper = Aabb::new(Vec3::new(0.0, 0.5, 0.0), Vec3::ONE);
        assert!(lower.intersects(&upper));
    }
}
