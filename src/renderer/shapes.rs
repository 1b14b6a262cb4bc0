//! Shape generation for the play field
//!
//! Everything is an axis-aligned rectangle in canvas pixels (origin top-left,
//! y down); the pipeline maps pixels to clip space.

use super::vertex::{Vertex, colors};
use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{GameState, TrailPoint};

/// Center line dash and gap lengths
const DASH_LENGTH: f32 = 5.0;
const DASH_GAP: f32 = 15.0;
const CENTER_LINE_WIDTH: f32 = 1.0;

/// Append two triangles covering a rectangle
pub fn rect(out: &mut Vec<Vertex>, x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) {
    let (x1, y1) = (x + w, y + h);
    out.extend_from_slice(&[
        Vertex::new(x, y, color),
        Vertex::new(x1, y, color),
        Vertex::new(x, y1, color),
        Vertex::new(x, y1, color),
        Vertex::new(x1, y, color),
        Vertex::new(x1, y1, color),
    ]);
}

/// Dashed vertical line down the middle of the field
pub fn center_line(out: &mut Vec<Vertex>) {
    let x = CANVAS_WIDTH / 2.0 - CENTER_LINE_WIDTH / 2.0;
    let mut y = 0.0;
    while y < CANVAS_HEIGHT {
        let h = DASH_LENGTH.min(CANVAS_HEIGHT - y);
        rect(out, x, y, CENTER_LINE_WIDTH, h, colors::WHITE);
        y += DASH_LENGTH + DASH_GAP;
    }
}

/// Fading squares at recent ball positions, oldest drawn first
pub fn ball_trail(out: &mut Vec<Vertex>, trail: &[TrailPoint]) {
    for point in trail.iter().rev() {
        let [r, g, b, _] = colors::WHITE;
        let color = [r, g, b, point.opacity * colors::TRAIL_ALPHA];
        rect(out, point.pos.x, point.pos.y, BALL_SIZE, BALL_SIZE, color);
    }
}

/// Build the full frame: background, center line, trail, paddles, ball
pub fn build_scene(state: &GameState, settings: &Settings) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(6 * (4 + TRAIL_LENGTH + 20));

    rect(&mut out, 0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT, colors::BACKGROUND);
    center_line(&mut out);

    if settings.trails {
        ball_trail(&mut out, state.trail.points());
    }

    rect(
        &mut out,
        0.0,
        state.player.y,
        PADDLE_WIDTH,
        PADDLE_HEIGHT,
        colors::WHITE,
    );
    rect(
        &mut out,
        CANVAS_WIDTH - PADDLE_WIDTH,
        state.computer.y,
        PADDLE_WIDTH,
        PADDLE_HEIGHT,
        colors::WHITE,
    );

    let ball = state.ball.pos;
    rect(&mut out, ball.x, ball.y, BALL_SIZE, BALL_SIZE, colors::WHITE);

    out
}
