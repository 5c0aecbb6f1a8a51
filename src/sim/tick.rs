//! Per-frame simulation update
//!
//! One `tick` runs per animation frame. Collisions resolve in a fixed
//! precedence order - obstacles, playfield walls, paddle, breakable bricks -
//! and only the first collision found in a frame is resolved.

use super::collision::{ball_rect_collision, resolve_ball_hit};
use super::level;
use super::state::{Ball, BrickKind, GameEvent, GamePhase, GameState, Paddle};
use crate::consts::*;

/// Input for a single tick
///
/// `pointer_x` is the shared pointer-tracking field written by move events;
/// last write before the tick wins. `press` is the discrete pointer-down
/// used to launch and to restart.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Tracked pointer x-coordinate
    pub pointer_x: Option<f32>,
    /// Pointer went down since the last tick
    pub press: bool,
    /// Toggle auto-play (paddle follows the ball)
    pub toggle_auto_play: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    // Events are per-tick; the shell drains them after each call
    state.events.clear();

    if input.toggle_auto_play {
        state.auto_play = !state.auto_play;
        log::info!("auto-play: {}", state.auto_play);
    }

    match state.phase {
        GamePhase::Serve => {
            state.time_ticks += 1;

            // Ball rides the paddle until launch
            state.ball.ride_paddle(&state.paddle);

            if input.press {
                state.ball.launch();
                state.phase = GamePhase::Playing;
            }
        }

        GamePhase::Playing => {
            state.time_ticks += 1;

            // Paddle chases the pointer (or the ball, in auto-play)
            let target = if state.auto_play {
                Some(state.ball.pos.x)
            } else {
                input.pointer_x
            };
            if let Some(x) = target {
                state.paddle.move_toward(x);
            }

            // Euler step; no sub-stepping, so a fast ball can tunnel
            // through thin targets - accepted limitation
            state.ball.pos += state.ball.vel;

            resolve_first_collision(state);

            state.ball.clamp_speed();

            if state.ball.pos.y >= PLAYFIELD_HEIGHT {
                state.phase = GamePhase::GameOver;
                state.events.push(GameEvent::GameOver { score: state.score });
                log::info!("game over, score {}", state.score);
            }
        }

        GamePhase::GameOver | GamePhase::Completed => {
            if input.press {
                restart(state);
            }
        }
    }
}

/// Reset the session and reload the first level
fn restart(state: &mut GameState) {
    state.score = 0;
    state.level_index = 0;
    state.auto_play = false;
    state.reset_ball_and_paddle();
    state.phase = GamePhase::Serve;
    level::load_level(state);
}

/// Resolve at most one collision, in precedence order
fn resolve_first_collision(state: &mut GameState) -> bool {
    let ball_bounds = state.ball.bounds();

    // Obstacle bricks first
    for i in 0..state.bricks.len() {
        if state.bricks[i].kind != BrickKind::Obstacle {
            continue;
        }
        let rect = state.bricks[i].rect;
        if let Some(hit) = ball_rect_collision(&ball_bounds, &rect) {
            resolve_ball_hit(&mut state.ball, &hit);
            return true;
        }
    }

    // Playfield walls
    if resolve_wall_collision(&mut state.ball) {
        return true;
    }

    // Paddle
    if resolve_paddle_collision(&mut state.ball, &state.paddle) {
        return true;
    }

    // Breakable bricks
    let mut found = None;
    for (i, brick) in state.bricks.iter().enumerate() {
        if brick.kind != BrickKind::Breakable || !brick.visible {
            continue;
        }
        if let Some(hit) = ball_rect_collision(&ball_bounds, &brick.rect) {
            found = Some((i, hit));
            break;
        }
    }
    if let Some((i, hit)) = found {
        resolve_ball_hit(&mut state.ball, &hit);
        state.bricks[i].visible = false;
        state.score += BRICK_POINTS;
        state.events.push(GameEvent::BrickDestroyed {
            points: BRICK_POINTS,
        });
        if state.score > state.high_score {
            state.high_score = state.score;
            state.events.push(GameEvent::HighScore { score: state.score });
        }
        level::check_level_complete(state);
        return true;
    }

    false
}

/// Reflect off the left, right, and top playfield edges
fn resolve_wall_collision(ball: &mut Ball) -> bool {
    let bounds = ball.bounds();

    if bounds.left() < 0.0 {
        ball.pos.x = ball.radius;
        ball.vel.x = ball.vel.x.abs();
        return true;
    }
    if bounds.right() > PLAYFIELD_WIDTH {
        ball.pos.x = PLAYFIELD_WIDTH - ball.radius;
        ball.vel.x = -ball.vel.x.abs();
        return true;
    }
    if bounds.top() < 0.0 {
        ball.pos.y = ball.radius;
        ball.vel.y = ball.vel.y.abs();
        return true;
    }

    false
}

/// Paddle contact always sends the ball up; off-center contact steers it
fn resolve_paddle_collision(ball: &mut Ball, paddle: &Paddle) -> bool {
    let face = paddle.bounds();
    if ball_rect_collision(&ball.bounds(), &face).is_none() {
        return false;
    }

    ball.pos.y = face.top() - ball.radius;
    ball.vel.y = -ball.vel.y.abs();

    let hit_offset = ((ball.pos.x - paddle.x) / paddle.width).clamp(0.0, 1.0);
    ball.vel.x += (hit_offset - 0.5) * PADDLE_DEFLECT;

    true
}
