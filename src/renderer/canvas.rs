//! Canvas 2D renderer
//!
//! One frame is: clear (or fill the background), translate the origin to
//! the surface center, stroke the hexagon from its 6 current vertices,
//! fill the ball at its current position.

use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::sim::hexagon_vertices;
use crate::simulator::HexagonBallSimulator;

/// Hexagon outline width relative to min(width, height)
const OUTLINE_WIDTH_RATIO: f64 = 0.008;
/// Ball outline width relative to min(width, height)
const BALL_STROKE_RATIO: f64 = 0.002;
const BALL_STROKE_COLOR: &str = "rgba(0, 0, 0, 0.2)";

pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    /// Draw one frame of the given simulator state
    pub fn render(&self, simulator: &HexagonBallSimulator) {
        let state = simulator.state();
        if state.is_degenerate() {
            return;
        }
        let config = simulator.config();
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;
        let scale = state.surface_scale as f64;

        match &config.background_color {
            Some(color) => {
                self.ctx.set_fill_style_str(color);
                self.ctx.fill_rect(0.0, 0.0, width, height);
            }
            None => self.ctx.clear_rect(0.0, 0.0, width, height),
        }

        self.ctx.save();
        let _ = self.ctx.translate(width / 2.0, height / 2.0);

        // Hexagon outline
        let vertices = hexagon_vertices(state.rotation, state.circumradius);
        self.ctx.begin_path();
        self.ctx.move_to(vertices[0].x as f64, vertices[0].y as f64);
        for vertex in &vertices[1..] {
            self.ctx.line_to(vertex.x as f64, vertex.y as f64);
        }
        self.ctx.close_path();
        self.ctx.set_stroke_style_str(&config.hexagon_color);
        self.ctx.set_line_width(scale * OUTLINE_WIDTH_RATIO);
        self.ctx.stroke();

        // Ball
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            state.ball.pos.x as f64,
            state.ball.pos.y as f64,
            state.ball.radius as f64,
            0.0,
            TAU,
        );
        self.ctx.set_fill_style_str(&config.ball_color);
        self.ctx.fill();
        self.ctx.set_stroke_style_str(BALL_STROKE_COLOR);
        self.ctx.set_line_width(scale * BALL_STROKE_RATIO);
        self.ctx.stroke();

        self.ctx.restore();
    }
}
