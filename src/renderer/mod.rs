//! Canvas 2D rendering
//!
//! Draws the whole playfield from `GameState` every frame: bricks, paddle,
//! ball, HUD text, and the end-of-game banners. Pure output; nothing here
//! feeds back into the simulation.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::*;
use crate::sim::{BrickKind, GamePhase, GameState};

/// Row colors for breakable bricks, top row first
pub const ROW_COLORS: [&str; 5] = ["#ff0000", "#ff7f00", "#ffff00", "#00ff00", "#0000ff"];

const BACKGROUND_COLOR: &str = "#1099bb";
const PADDLE_COLOR: &str = "#00ff00";
const BALL_COLOR: &str = "#ffffff";
const OBSTACLE_COLOR: &str = "#555555";
const TEXT_COLOR: &str = "#ffffff";

/// Canvas-backed renderer
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2D canvas unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }

    /// Draw one frame
    pub fn render(&self, state: &GameState) -> Result<(), JsValue> {
        let ctx = &self.ctx;

        ctx.set_fill_style_str(BACKGROUND_COLOR);
        ctx.fill_rect(0.0, 0.0, PLAYFIELD_WIDTH as f64, PLAYFIELD_HEIGHT as f64);

        for brick in &state.bricks {
            if !brick.visible {
                continue;
            }
            let color = match brick.kind {
                BrickKind::Obstacle => OBSTACLE_COLOR,
                BrickKind::Breakable => ROW_COLORS[brick.color as usize % ROW_COLORS.len()],
            };
            ctx.set_fill_style_str(color);
            ctx.fill_rect(
                brick.rect.x as f64,
                brick.rect.y as f64,
                brick.rect.width as f64,
                brick.rect.height as f64,
            );
        }

        let paddle = state.paddle.bounds();
        ctx.set_fill_style_str(PADDLE_COLOR);
        ctx.fill_rect(
            paddle.x as f64,
            paddle.y as f64,
            paddle.width as f64,
            paddle.height as f64,
        );

        ctx.set_fill_style_str(BALL_COLOR);
        ctx.begin_path();
        ctx.arc(
            state.ball.pos.x as f64,
            state.ball.pos.y as f64,
            state.ball.radius as f64,
            0.0,
            std::f64::consts::TAU,
        )?;
        ctx.fill();

        self.draw_hud(state)?;

        Ok(())
    }

    fn draw_hud(&self, state: &GameState) -> Result<(), JsValue> {
        let ctx = &self.ctx;

        ctx.set_fill_style_str(TEXT_COLOR);
        ctx.set_font("32px Arial");
        ctx.set_text_baseline("top");
        ctx.set_text_align("left");
        ctx.fill_text(&format!("Score: {}", state.score), 16.0, 16.0)?;
        ctx.fill_text(
            &format!("Level: {}", state.level_index + 1),
            PLAYFIELD_WIDTH as f64 - 150.0,
            16.0,
        )?;

        match state.phase {
            GamePhase::GameOver => self.draw_banner("Game Over!")?,
            GamePhase::Completed => {
                self.draw_banner("Congratulations!")?;
                self.draw_subtitle("You completed all levels!")?;
            }
            _ => {}
        }

        Ok(())
    }

    fn draw_banner(&self, text: &str) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        ctx.set_fill_style_str(TEXT_COLOR);
        ctx.set_font("48px Arial");
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        ctx.fill_text(
            text,
            PLAYFIELD_WIDTH as f64 / 2.0,
            PLAYFIELD_HEIGHT as f64 / 2.0,
        )
    }

    fn draw_subtitle(&self, text: &str) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        ctx.set_font("32px Arial");
        ctx.fill_text(
            text,
            PLAYFIELD_WIDTH as f64 / 2.0,
            PLAYFIELD_HEIGHT as f64 / 2.0 + 48.0,
        )
    }
}
