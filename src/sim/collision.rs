//! Collision detection and response
//!
//! The ball collides as an axis-aligned box against rectangular targets.
//! Hit side is picked by the smallest overlap depth against the four edges;
//! response reflects the matching velocity component and pushes the ball out
//! along that axis so it cannot stick inside a target.

use super::rect::Rect;
use super::state::Ball;

/// Which face of the target the ball struck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitSide {
    Left,
    Right,
    Top,
    Bottom,
}

impl HitSide {
    /// True when the reflected component is horizontal
    pub fn is_horizontal(&self) -> bool {
        matches!(self, HitSide::Left | HitSide::Right)
    }
}

/// Result of a collision check
#[derive(Debug, Clone, Copy)]
pub struct Hit {
    pub side: HitSide,
    /// Overlap depth along the resolved axis (for position correction)
    pub penetration: f32,
}

/// Check the ball's bounding box against a target rectangle
///
/// Returns the struck face and penetration depth, or `None` when the boxes
/// do not strictly overlap.
pub fn ball_rect_collision(ball_bounds: &Rect, target: &Rect) -> Option<Hit> {
    if !ball_bounds.intersects(target) {
        return None;
    }

    // Overlap depth measured from each face of the target
    let from_left = ball_bounds.right() - target.left();
    let from_right = target.right() - ball_bounds.left();
    let from_top = ball_bounds.bottom() - target.top();
    let from_bottom = target.bottom() - ball_bounds.top();

    let min = from_left.min(from_right).min(from_top).min(from_bottom);

    // Ties resolve vertically: a corner contact behaves like a face bounce
    let (side, penetration) = if min == from_top {
        (HitSide::Top, from_top)
    } else if min == from_bottom {
        (HitSide::Bottom, from_bottom)
    } else if min == from_left {
        (HitSide::Left, from_left)
    } else {
        (HitSide::Right, from_right)
    };

    Some(Hit { side, penetration })
}

/// Reflect the ball off the struck face and push it clear of the target
pub fn resolve_ball_hit(ball: &mut Ball, hit: &Hit) {
    match hit.side {
        HitSide::Left => {
            ball.pos.x -= hit.penetration;
            ball.vel.x = -ball.vel.x.abs();
        }
        HitSide::Right => {
            ball.pos.x += hit.penetration;
            ball.vel.x = ball.vel.x.abs();
        }
        HitSide::Top => {
            ball.pos.y -= hit.penetration;
            ball.vel.y = -ball.vel.y.abs();
        }
        HitSide::Bottom => {
            ball.pos.y += hit.penetration;
            ball.vel.y = ball.vel.y.abs();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn ball_at(x: f32, y: f32, vx: f32, vy: f32) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            vel: Vec2::new(vx, vy),
            radius: 10.0,
        }
    }

    #[test]
    fn test_miss_when_separated() {
        let ball = ball_at(100.0, 100.0, 3.0, 3.0);
        let target = Rect::new(300.0, 300.0, 40.0, 20.0);
        assert!(ball_rect_collision(&ball.bounds(), &target).is_none());
    }

    #[test]
    fn test_hit_from_above_picks_top() {
        // Ball descending onto the top face of a brick
        let ball = ball_at(100.0, 95.0, 0.0, 3.0);
        let target = Rect::new(80.0, 100.0, 40.0, 20.0);

        let hit = ball_rect_collision(&ball.bounds(), &target).expect("should hit");
        assert_eq!(hit.side, HitSide::Top);
        assert!((hit.penetration - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_hit_from_side_picks_side() {
        // Ball moving right into the left face of a brick
        let ball = ball_at(75.0, 110.0, 3.0, 0.0);
        let target = Rect::new(80.0, 100.0, 40.0, 20.0);

        let hit = ball_rect_collision(&ball.bounds(), &target).expect("should hit");
        assert_eq!(hit.side, HitSide::Left);
        assert!(hit.side.is_horizontal());
    }

    #[test]
    fn test_resolve_reflects_and_pushes_out() {
        let mut ball = ball_at(100.0, 95.0, 2.0, 3.0);
        let target = Rect::new(80.0, 100.0, 40.0, 20.0);

        let hit = ball_rect_collision(&ball.bounds(), &target).unwrap();
        resolve_ball_hit(&mut ball, &hit);

        // Vertical component now points up, horizontal untouched
        assert_eq!(ball.vel.y, -3.0);
        assert_eq!(ball.vel.x, 2.0);
        // Ball no longer overlaps the target
        assert!(ball_rect_collision(&ball.bounds(), &target).is_none());
    }

    #[test]
    fn test_resolve_bottom_sends_ball_down() {
        // Ball rising into the underside of an obstacle
        let mut ball = ball_at(100.0, 126.0, 0.0, -3.0);
        let target = Rect::new(80.0, 100.0, 40.0, 20.0);

        let hit = ball_rect_collision(&ball.bounds(), &target).unwrap();
        assert_eq!(hit.side, HitSide::Bottom);
        resolve_ball_hit(&mut ball, &hit);
        assert!(ball.vel.y > 0.0);
    }
}
