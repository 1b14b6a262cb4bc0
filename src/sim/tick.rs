//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically, one 1/60 s
//! tick at a time.

use super::ai;
use super::collision::{deflect, paddle_contact, wall_bounce};
use super::state::{GameEvent, GamePhase, GameState, Side};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move the player paddle up (held)
    pub up: bool,
    /// Move the player paddle down (held)
    pub down: bool,
    /// Launch the ball (player serve only)
    pub serve: bool,
    /// Pause toggle
    pub pause: bool,
    /// Idle/demo mode - autopilot plays the player side
    pub idle_mode: bool,
}

/// Advance the game state by one fixed tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    if input.pause {
        state.paused = !state.paused;
        log::info!("{}", if state.paused { "Paused" } else { "Resumed" });
    }
    if state.paused {
        return;
    }

    state.time_ticks += 1;

    // Idle/demo mode - autopilot drives the player paddle and serves
    let mut input = *input;
    if input.idle_mode {
        let (up, down) = ai::autopilot_keys(state);
        input.up = up;
        input.down = down;
        input.serve = state.awaiting_player_serve();
    }

    if input.serve && state.awaiting_player_serve() {
        state.launch();
        log::info!("Player serves, vel = {:?}", state.ball.vel);
    }

    state.trail.record(state.ball.pos);

    // Up then down: holding both nets out except where a clamp intervenes
    if input.up {
        state.player.move_by(-PADDLE_SPEED);
    }
    if input.down {
        state.player.move_by(PADDLE_SPEED);
    }

    let prev_x = state.ball.pos.x;
    match state.phase {
        GamePhase::Serving => {
            state.pin_ball();
            if state.server == Side::Computer {
                state.serve_countdown = state.serve_countdown.saturating_sub(1);
                if state.serve_countdown == 0 {
                    state.launch();
                    log::info!("Computer serves, vel = {:?}", state.ball.vel);
                }
            }
        }
        GamePhase::Rallying => {
            state.ball.pos += state.ball.vel;
        }
    }

    if wall_bounce(&mut state.ball) {
        state.events.push(GameEvent::WallBounce);
    }

    for side in [Side::Player, Side::Computer] {
        let paddle = *state.paddle(side);
        if paddle_contact(&state.ball, prev_x, &paddle, side) {
            deflect(&mut state.ball, &paddle, side);
            state.events.push(GameEvent::PaddleHit { side });
            log::debug!("{:?} hit, speed = {:.2}", side, state.ball.speed());
        }
    }

    if state.phase == GamePhase::Rallying {
        if state.ball.pos.x <= 0.0 {
            score_point(state, Side::Computer);
        } else if state.ball.pos.x >= CANVAS_WIDTH {
            score_point(state, Side::Player);
        }
    }

    ai::move_opponent(state);
}

/// Award a point to `scorer`; the side that conceded serves next
fn score_point(state: &mut GameState, scorer: Side) {
    state.score.award(scorer);
    state.reset_for_serve(scorer.opponent());
    state.events.push(GameEvent::PointScored {
        scorer,
        score: state.score,
    });
    log::info!(
        "Point to {:?}: {} - {}",
        scorer,
        state.score.player,
        state.score.computer
    );
}
