//! Retro Pong - a two-paddle arcade Pong
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, serving, opponent)
//! - `input`: Keyboard adapter producing one `TickInput` per tick
//! - `renderer`: WebGPU rendering of the play field
//! - `hud`: Score and prompt text for the DOM overlay
//! - `audio`: Sound effects driven by simulation events
//! - `settings`: Persisted player preferences

pub mod audio;
pub mod hud;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use hud::HudView;
pub use input::{InputAdapter, Key};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, all speeds are per tick)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum ticks per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Play field dimensions (pixels)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 400.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Player paddle travel per tick while a key is held
    pub const PADDLE_SPEED: f32 = 6.0;
    /// Opponent paddle speed as a fraction of the player's
    pub const COMPUTER_SPEED_FACTOR: f32 = 0.85;
    /// Opponent ignores targets closer than this to its paddle center
    pub const COMPUTER_DEAD_ZONE: f32 = 2.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 10.0;
    pub const INITIAL_BALL_SPEED: f32 = 5.0;
    pub const MAX_BALL_SPEED: f32 = 15.0;
    /// Speed boost when ball hits a paddle (multiplicative)
    pub const PADDLE_BOOST: f32 = 1.15;
    /// Speed boost when ball bounces off the top or bottom wall
    pub const WALL_BOOST: f32 = 1.05;
    /// Largest deflection off a paddle edge (60 degrees)
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_3;
    /// Serve angle is uniform in [-30, +30] degrees
    pub const MAX_SERVE_ANGLE: f32 = std::f32::consts::FRAC_PI_6;

    /// Computer waits this long before serving (1 second)
    pub const AUTO_SERVE_DELAY_TICKS: u32 = 60;

    /// Number of ball positions kept for the trail effect
    pub const TRAIL_LENGTH: usize = 10;
}

/// Top-left y of a paddle clamped to the play field
#[inline]
pub fn clamp_paddle_y(y: f32) -> f32 {
    y.clamp(0.0, consts::CANVAS_HEIGHT - consts::PADDLE_HEIGHT)
}
