//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only (speeds are pixels per tick)
//! - Seeded RNG only
//! - Side effects are reported as `GameEvent`s, never performed
//! - No rendering or platform dependencies

pub mod ai;
pub mod collision;
pub mod state;
pub mod tick;

pub use ai::{autopilot_keys, move_opponent, predict_crossing_y};
pub use collision::{bounce_angle, cap_speed, deflect, paddle_contact, wall_bounce};
pub use state::{
    Ball, GameEvent, GamePhase, GameState, Paddle, RngState, Score, Side, Trail, TrailPoint,
};
pub use tick::{TickInput, tick};
