//! Axis-aligned rectangle geometry for the playfield, paddle, and bricks
//!
//! Everything in the simulation collides as an axis-aligned bounding box,
//! the ball included: its box is the square circumscribing the circle.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build the bounding box of a circle
    pub fn around_circle(center: Vec2, radius: f32) -> Self {
        Self {
            x: center.x - radius,
            y: center.y - radius,
            width: radius * 2.0,
            height: radius * 2.0,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Center point of the rectangle
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Strict overlap test: touching edges do not count as a collision
    pub fn intersects(&self, other: &Rect) -> bool {
        self.right() > other.left()
            && self.left() < other.right()
            && self.bottom() > other.top()
            && self.top() < other.bottom()
    }

    /// Check if a point is inside the rectangle (inclusive of edges)
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersects_overlap() {
        let a = Rect::new(0.0, 0.0, 40.0, 20.0);
        let b = Rect::new(30.0, 10.0, 40.0, 20.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_intersects_separated() {
        let a = Rect::new(0.0, 0.0, 40.0, 20.0);
        let b = Rect::new(100.0, 0.0, 40.0, 20.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_intersects_touching_is_not_overlap() {
        // Right edge of a meets left edge of b exactly
        let a = Rect::new(0.0, 0.0, 40.0, 20.0);
        let b = Rect::new(40.0, 0.0, 40.0, 20.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_around_circle() {
        let bounds = Rect::around_circle(Vec2::new(400.0, 530.0), 10.0);
        assert_eq!(bounds.left(), 390.0);
        assert_eq!(bounds.top(), 520.0);
        assert_eq!(bounds.width, 20.0);
        assert_eq!(bounds.center(), Vec2::new(400.0, 530.0));
    }

    #[test]
    fn test_contains_point() {
        let r = Rect::new(80.0, 60.0, 40.0, 20.0);
        assert!(r.contains_point(Vec2::new(100.0, 70.0)));
        assert!(r.contains_point(Vec2::new(80.0, 60.0)));
        assert!(!r.contains_point(Vec2::new(130.0, 70.0)));
    }
}
