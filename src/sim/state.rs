//! Game state and core simulation types
//!
//! Everything the update loop mutates lives here. The shell owns exactly one
//! `GameState` and passes it to `tick` once per animation frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball rides the paddle, waiting for a pointer press
    Serve,
    /// Active gameplay
    Playing,
    /// Ball reached the bottom of the playfield
    GameOver,
    /// Every level cleared
    Completed,
}

/// Events raised by the simulation for the shell to act on
///
/// Drained once per frame: HUD refresh, high-score persistence, and
/// score-history writes all key off these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A level's bricks were (re)built
    LevelLoaded { level: u32 },
    /// A breakable brick was destroyed
    BrickDestroyed { points: u64 },
    /// The session score passed the stored high score
    HighScore { score: u64 },
    /// All breakable bricks cleared, next level loaded
    LevelAdvanced { level: u32 },
    /// No level left in the table
    GameCompleted { score: u64 },
    /// Ball fell past the paddle
    GameOver { score: u64 },
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: Vec2::new(BALL_START_X, BALL_START_Y),
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
        }
    }
}

impl Ball {
    /// Bounding box used for every collision test
    pub fn bounds(&self) -> Rect {
        Rect::around_circle(self.pos, self.radius)
    }

    /// Put the ball back at the serve position, motionless
    pub fn reset(&mut self) {
        self.pos = Vec2::new(BALL_START_X, BALL_START_Y);
        self.vel = Vec2::ZERO;
    }

    /// Follow the paddle center while waiting for launch
    pub fn ride_paddle(&mut self, paddle: &Paddle) {
        self.pos.x = paddle.center_x();
        self.pos.y = BALL_START_Y;
    }

    /// Leave the paddle with the fixed serve velocity
    pub fn launch(&mut self) {
        self.vel = Vec2::new(BALL_LAUNCH_VX, BALL_LAUNCH_VY);
    }

    /// Rescale velocity to the speed cap, preserving direction
    pub fn clamp_speed(&mut self) {
        let speed = self.vel.length();
        if speed > BALL_MAX_SPEED {
            self.vel = self.vel.normalize_or_zero() * BALL_MAX_SPEED;
        }
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left x; y is fixed at PADDLE_Y
    pub x: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            x: PADDLE_START_X,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
        }
    }
}

impl Paddle {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, PADDLE_Y, self.width, self.height)
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Ease toward the pointer, then clamp to the playfield margins
    pub fn move_toward(&mut self, pointer_x: f32) {
        let target = pointer_x - self.width / 2.0;
        self.x += (target - self.x) * PADDLE_EASE;
        self.x = self
            .x
            .clamp(PADDLE_MARGIN, PLAYFIELD_WIDTH - self.width - PADDLE_MARGIN);
    }

    pub fn reset(&mut self) {
        self.x = PADDLE_START_X;
    }
}

/// Brick types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BrickKind {
    /// Destroyed on contact, awards points
    #[default]
    Breakable,
    /// Indestructible wall/obstacle, never destroyed
    Obstacle,
}

/// A brick entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub id: u32,
    pub kind: BrickKind,
    pub rect: Rect,
    /// Row color index (breakable bricks only)
    pub color: u8,
    /// Cleared when a breakable brick is destroyed; obstacles stay true
    pub visible: bool,
}

impl Brick {
    /// Whether the ball can still collide with this brick
    pub fn is_solid(&self) -> bool {
        match self.kind {
            BrickKind::Breakable => self.visible,
            BrickKind::Obstacle => true,
        }
    }

    /// Whether this brick must be destroyed to clear the level
    pub fn counts_for_clear(&self) -> bool {
        self.kind == BrickKind::Breakable
    }
}

/// Complete game state for one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed for deterministic obstacle placement
    pub seed: u64,
    /// Session score
    pub score: u64,
    /// Best score seen, persisted by the shell on `HighScore` events
    pub high_score: u64,
    /// Username of the registered player, if any
    pub current_user: Option<String>,
    /// Current level index (0-based)
    pub level_index: u32,
    /// Current phase
    pub phase: GamePhase,
    /// When set, the paddle tracks the ball instead of the pointer
    pub auto_play: bool,
    /// Player paddle
    pub paddle: Paddle,
    /// The ball
    pub ball: Ball,
    /// Bricks for the current level (breakables and obstacles)
    pub bricks: Vec<Brick>,
    /// Events raised this tick, drained by the shell
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Tick counter
    pub time_ticks: u64,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a fresh state with the given seed; call
    /// `sim::level::load_level` before the first tick.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            score: 0,
            high_score: 0,
            current_user: None,
            level_index: 0,
            phase: GamePhase::Serve,
            auto_play: false,
            paddle: Paddle::default(),
            ball: Ball::default(),
            bricks: Vec::new(),
            events: Vec::new(),
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Count of breakable bricks still standing
    pub fn visible_breakable_bricks(&self) -> usize {
        self.bricks
            .iter()
            .filter(|b| b.counts_for_clear() && b.visible)
            .count()
    }

    /// Reposition ball and paddle for a serve
    pub fn reset_ball_and_paddle(&mut self) {
        self.ball.reset();
        self.paddle.reset();
    }
}
