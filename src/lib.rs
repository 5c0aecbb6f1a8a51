//! Brick Breaker - a browser brick-breaker arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (collisions, levels, game state)
//! - `platform`: Key-value storage abstraction (LocalStorage on web)
//! - `scores`: Persisted high score
//! - `users`: Local user registration and score history
//! - `renderer`: Canvas 2D rendering (wasm only)
//! - `ui`: Registration modal (wasm only)

pub mod platform;
pub mod scores;
pub mod sim;
pub mod users;

#[cfg(target_arch = "wasm32")]
pub mod renderer;
#[cfg(target_arch = "wasm32")]
pub mod ui;

pub use scores::HighScore;
pub use users::{RegisterError, UserDirectory, UserRecord};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Paddle defaults - paddle slides along the bottom of the playfield
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    pub const PADDLE_Y: f32 = 550.0;
    pub const PADDLE_START_X: f32 = 350.0;
    /// Inset kept between the paddle and the playfield edges
    pub const PADDLE_MARGIN: f32 = 10.0;
    /// Fraction of the remaining distance to the pointer covered per tick
    pub const PADDLE_EASE: f32 = 0.1;
    /// Horizontal speed imparted by an off-center paddle hit
    pub const PADDLE_DEFLECT: f32 = 10.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_START_X: f32 = 400.0;
    pub const BALL_START_Y: f32 = 530.0;
    /// Launch velocity on serve (units per tick)
    pub const BALL_LAUNCH_VX: f32 = -3.0;
    pub const BALL_LAUNCH_VY: f32 = -3.0;
    /// Maximum ball speed (units per tick)
    pub const BALL_MAX_SPEED: f32 = 8.0;

    /// Brick defaults
    pub const BRICK_WIDTH: f32 = 40.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    /// Grid origin and spacing for breakable bricks
    pub const BRICK_ORIGIN_X: f32 = 80.0;
    pub const BRICK_ORIGIN_Y: f32 = 60.0;
    pub const BRICK_STEP_X: f32 = 45.0;
    pub const BRICK_STEP_Y: f32 = 30.0;
    /// Points awarded per destroyed brick
    pub const BRICK_POINTS: u64 = 10;

    /// Obstacle band (randomized placement happens inside this strip)
    pub const OBSTACLE_BAND_TOP: f32 = 200.0;
    pub const OBSTACLE_BAND_BOTTOM: f32 = 260.0;
    /// Minimum distance between obstacle centers
    pub const OBSTACLE_MIN_SPACING: f32 = 60.0;
    /// Placement attempts per obstacle before it is skipped
    pub const OBSTACLE_PLACE_ATTEMPTS: u32 = 16;
}
