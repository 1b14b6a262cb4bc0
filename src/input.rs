//! Keyboard input adapter
//!
//! Browser key events arrive between ticks. The adapter folds them into held
//! flags and one-shot commands, and hands the simulation exactly one
//! `TickInput` per tick.

use crate::sim::{GameState, TickInput};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Serve,
    Pause,
    /// Toggle attract mode
    Idle,
    /// Shell-level preference toggles, never part of a tick
    Mute,
    ShowFps,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "ArrowUp" | "w" | "W" => Key::Up,
            "ArrowDown" | "s" | "S" => Key::Down,
            " " | "Spacebar" => Key::Serve,
            "Escape" | "p" | "P" => Key::Pause,
            "i" | "I" => Key::Idle,
            "m" | "M" => Key::Mute,
            "f" | "F" => Key::ShowFps,
            _ => Key::Other,
        }
    }
}

/// Accumulates key events until the next tick consumes them
#[derive(Debug, Clone, Default)]
pub struct InputAdapter {
    up: bool,
    down: bool,
    serve: bool,
    pause: bool,
    idle_mode: bool,
}

impl InputAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press. Returns true if the key belongs to the game and
    /// the browser's default action should be suppressed.
    pub fn key_down(&mut self, key: Key) -> bool {
        match key {
            Key::Up => self.up = true,
            Key::Down => self.down = true,
            Key::Serve => self.serve = true,
            Key::Pause => self.pause = true,
            Key::Idle => {
                self.idle_mode = !self.idle_mode;
                log::info!("Idle mode: {}", self.idle_mode);
            }
            Key::Mute | Key::ShowFps | Key::Other => return false,
        }
        true
    }

    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Up => self.up = false,
            Key::Down => self.down = false,
            _ => {}
        }
    }

    /// Drop held keys (e.g. the window lost focus and key-ups will not arrive)
    pub fn release_all(&mut self) {
        self.up = false;
        self.down = false;
    }

    /// Request a pause toggle on the next tick
    pub fn request_pause(&mut self) {
        self.pause = true;
    }

    /// Build the input for the next tick and clear one-shot commands
    ///
    /// A serve press only counts while the player is the one to serve;
    /// presses at any other time are dropped.
    pub fn next_tick_input(&mut self, state: &GameState) -> TickInput {
        let input = TickInput {
            up: self.up,
            down: self.down,
            serve: self.serve && state.awaiting_player_serve(),
            pause: self.pause,
            idle_mode: self.idle_mode,
        };
        self.serve = false;
        self.pause = false;
        input
    }
}
