//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per animation frame
//! - Seeded RNG only (obstacle placement)
//! - No rendering or platform dependencies

pub mod collision;
pub mod level;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{ball_rect_collision, resolve_ball_hit, Hit, HitSide};
pub use level::{check_level_complete, layout, load_level, LevelLayout, LEVELS};
pub use rect::Rect;
pub use state::{Ball, Brick, BrickKind, GameEvent, GamePhase, GameState, Paddle};
pub use tick::{tick, TickInput};
