//! HUD text shown over the canvas
//!
//! Scores and prompts are plain DOM text; this is the view the shell copies
//! into the page after each frame.

use crate::sim::GameState;

/// Prompt shown while the player holds the ball
pub const SERVE_PROMPT: &str = "Press SPACE to serve";
/// Controls hint under the canvas
pub const CONTROLS_HINT: &str =
    "W/S or arrows to move, SPACE to serve, P to pause, I for attract mode, M to mute, F for FPS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudView {
    pub player_score: String,
    pub computer_score: String,
    /// `Some` only while the player has to serve
    pub serve_prompt: Option<&'static str>,
    pub paused: bool,
}

impl HudView {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            player_score: state.score.player.to_string(),
            computer_score: state.score.computer.to_string(),
            serve_prompt: state.awaiting_player_serve().then_some(SERVE_PROMPT),
            paused: state.paused,
        }
    }
}
