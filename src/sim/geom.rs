//! Axis-aligned geometry helpers
//!
//! Everything in the arena is an axis-aligned rectangle, so collision
//! detection reduces to a half-open AABB overlap test plus a
//! center-to-center distance for the burst and placement checks.

use glam::Vec2;

/// An axis-aligned rectangle in play-area coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Center point of the rectangle
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }
}

/// Strict half-open AABB intersection test
///
/// Touching edges do not count as overlap.
pub fn overlaps(a: Rect, b: Rect) -> bool {
    a.pos.x < b.pos.x + b.size.x
        && a.pos.x + a.size.x > b.pos.x
        && a.pos.y < b.pos.y + b.size.y
        && a.pos.y + a.size.y > b.pos.y
}

/// Euclidean distance between rectangle centers
pub fn center_distance(a: Rect, b: Rect) -> f32 {
    a.center().distance(b.center())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_overlaps_basic() {
        let a = rect(0.0, 0.0, 30.0, 30.0);
        let b = rect(15.0, 15.0, 30.0, 30.0);
        assert!(overlaps(a, b));

        let far = rect(100.0, 100.0, 30.0, 30.0);
        assert!(!overlaps(a, far));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = rect(0.0, 0.0, 30.0, 30.0);
        let right = rect(30.0, 0.0, 30.0, 30.0);
        let below = rect(0.0, 30.0, 30.0, 30.0);
        assert!(!overlaps(a, right));
        assert!(!overlaps(a, below));
    }

    #[test]
    fn test_contained_rect_overlaps() {
        let outer = rect(0.0, 0.0, 100.0, 100.0);
        let inner = rect(40.0, 40.0, 10.0, 10.0);
        assert!(overlaps(outer, inner));
        assert!(overlaps(inner, outer));
    }

    #[test]
    fn test_center_distance_self_is_zero() {
        let a = rect(12.0, 34.0, 30.0, 30.0);
        assert_eq!(center_distance(a, a), 0.0);
    }

    #[test]
    fn test_center_distance_known() {
        // Centers at (15, 15) and (45, 55): 3-4-5 triangle scaled by 10
        let a = rect(0.0, 0.0, 30.0, 30.0);
        let b = rect(30.0, 40.0, 30.0, 30.0);
        assert!((center_distance(a, b) - 50.0).abs() < 1e-4);
    }

    proptest! {
        #[test]
        fn prop_overlaps_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 1.0f32..200.0, ah in 1.0f32..200.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            bw in 1.0f32..200.0, bh in 1.0f32..200.0,
        ) {
            let a = rect(ax, ay, aw, ah);
            let b = rect(bx, by, bw, bh);
            prop_assert_eq!(overlaps(a, b), overlaps(b, a));
        }

        #[test]
        fn prop_center_distance_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
        ) {
            let a = rect(ax, ay, 30.0, 30.0);
            let b = rect(bx, by, 30.0, 30.0);
            prop_assert!((center_distance(a, b) - center_distance(b, a)).abs() < 1e-3);
        }
    }
}
