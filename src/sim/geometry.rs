//! Axis-aligned geometry for the ball, paddle and bricks
//!
//! Screen space: x grows right, y grows down. Bounds are always derived from
//! a shape's defining fields on demand so they can never go stale after the
//! shape moves.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// The four boundary scalars of a shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Bounds {
    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Strict AABB intersection (touching edges do not overlap)
    #[inline]
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.right > other.left
            && other.right > self.left
            && self.bottom > other.top
            && other.bottom > self.top
    }

    /// Strict point containment (points on an edge are outside)
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        self.left < point.x && point.x < self.right && self.top < point.y && point.y < self.bottom
    }
}

/// A circle defined by its center
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            left: self.center.x - self.radius,
            top: self.center.y - self.radius,
            right: self.center.x + self.radius,
            bottom: self.center.y + self.radius,
        }
    }
}

/// A rectangle defined by its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(pos: Vec2, width: f32, height: f32) -> Self {
        Self { pos, width, height }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            left: self.pos.x,
            top: self.pos.y,
            right: self.pos.x + self.width,
            bottom: self.pos.y + self.height,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::new(self.width, self.height) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_circle_bounds() {
        let circle = Circle::new(Vec2::new(100.0, 50.0), 8.0);
        let b = circle.bounds();
        assert_eq!(b.left, 92.0);
        assert_eq!(b.top, 42.0);
        assert_eq!(b.right, 108.0);
        assert_eq!(b.bottom, 58.0);
    }

    #[test]
    fn test_rect_bounds_follow_position() {
        let mut rect = Rect::new(Vec2::new(10.0, 20.0), 75.0, 10.0);
        assert_eq!(rect.bounds().right, 85.0);

        rect.pos.x += 5.0;
        let b = rect.bounds();
        assert_eq!(b.left, 15.0);
        assert_eq!(b.right, 90.0);
        assert_eq!(rect.center(), Vec2::new(52.5, 25.0));
    }

    #[test]
    fn test_overlap_is_strict() {
        let a = Rect::new(Vec2::ZERO, 10.0, 10.0).bounds();
        let touching = Rect::new(Vec2::new(10.0, 0.0), 10.0, 10.0).bounds();
        let crossing = Rect::new(Vec2::new(9.5, 9.5), 10.0, 10.0).bounds();

        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&crossing));
        assert!(crossing.overlaps(&a));
    }

    #[test]
    fn test_contains_is_strict() {
        let b = Rect::new(Vec2::new(30.0, 30.0), 75.0, 20.0).bounds();
        assert!(b.contains(Vec2::new(31.0, 31.0)));
        assert!(!b.contains(Vec2::new(30.0, 40.0)));
        assert!(!b.contains(Vec2::new(60.0, 50.0)));
    }

    proptest! {
        #[test]
        fn circle_bounds_span_diameter(
            x in -1000.0f32..1000.0,
            y in -1000.0f32..1000.0,
            r in 0.5f32..50.0,
        ) {
            let b = Circle::new(Vec2::new(x, y), r).bounds();
            prop_assert!((b.height() - 2.0 * r).abs() < 1e-3);
            prop_assert!((b.width() - 2.0 * r).abs() < 1e-3);
        }

        #[test]
        fn rect_bounds_span_size(
            x in -1000.0f32..1000.0,
            y in -1000.0f32..1000.0,
            w in 0.5f32..200.0,
            h in 0.5f32..200.0,
        ) {
            let b = Rect::new(Vec2::new(x, y), w, h).bounds();
            prop_assert!((b.width() - w).abs() < 1e-3);
            prop_assert!((b.height() - h).abs() < 1e-3);
        }
    }
}
