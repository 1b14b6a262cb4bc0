//! Audio system using Web Audio API
//!
//! Procedurally generated beeps - no external files needed. Playback is
//! best-effort: any Web Audio failure just means no sound.

use crate::sim::{GameEvent, Side};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits a paddle
    PaddleHit,
    /// Ball bounces off the top or bottom wall
    WallHit,
    /// Ball launched
    Serve,
    /// Player won a point
    PlayerPoint,
    /// Computer won a point
    ComputerPoint,
}

impl SoundEffect {
    /// Sound to play for a simulation event
    pub fn for_event(event: &GameEvent) -> Self {
        match event {
            GameEvent::PaddleHit { .. } => SoundEffect::PaddleHit,
            GameEvent::WallBounce => SoundEffect::WallHit,
            GameEvent::Served { .. } => SoundEffect::Serve,
            GameEvent::PointScored {
                scorer: Side::Player,
                ..
            } => SoundEffect::PlayerPoint,
            GameEvent::PointScored {
                scorer: Side::Computer,
                ..
            } => SoundEffect::ComputerPoint,
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::SoundEffect;
    use crate::settings::Settings;

    /// Audio manager for the game
    pub struct AudioManager {
        ctx: Option<AudioContext>,
        volume: f32,
    }

    impl AudioManager {
        pub fn new(settings: &Settings) -> Self {
            // Try to create audio context (may fail if not in secure context)
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self {
                ctx,
                volume: settings.effective_volume(),
            }
        }

        pub fn apply_settings(&mut self, settings: &Settings) {
            self.volume = settings.effective_volume();
        }

        /// Play a sound effect
        pub fn play(&self, effect: SoundEffect) {
            if self.volume <= 0.0 {
                return;
            }
            let Some(ctx) = &self.ctx else { return };

            // Resume context if suspended (browsers require user gesture)
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            let vol = self.volume;
            match effect {
                SoundEffect::PaddleHit => self.beep(ctx, 440.0, vol * 0.5, 0.06),
                SoundEffect::WallHit => self.beep(ctx, 220.0, vol * 0.3, 0.05),
                SoundEffect::Serve => self.play_serve(ctx, vol),
                SoundEffect::PlayerPoint => self.play_point(ctx, vol, &[520.0, 780.0]),
                SoundEffect::ComputerPoint => self.play_point(ctx, vol, &[300.0, 200.0]),
            }
        }

        // === Sound generators ===

        /// Create an oscillator with gain envelope
        fn create_osc(
            &self,
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }

        /// Short square-wave blip, the classic Pong sound
        fn beep(&self, ctx: &AudioContext, freq: f32, vol: f32, length: f64) {
            let Some((osc, gain)) = self.create_osc(ctx, freq, OscillatorType::Square) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(vol, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + length)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + length + 0.02).ok();
        }

        /// Serve - rising chirp
        fn play_serve(&self, ctx: &AudioContext, vol: f32) {
            let Some((osc, gain)) = self.create_osc(ctx, 200.0, OscillatorType::Triangle) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(vol * 0.3, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.2)
                .ok();
            osc.frequency().set_value_at_time(200.0, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(600.0, t + 0.15)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + 0.25).ok();
        }

        /// Point - two notes, rising for the player, falling for the computer
        fn play_point(&self, ctx: &AudioContext, vol: f32, notes: &[f32]) {
            for (i, freq) in notes.iter().enumerate() {
                let delay = i as f64 * 0.12;
                if let Some((osc, gain)) = self.create_osc(ctx, *freq, OscillatorType::Square) {
                    let t = ctx.current_time() + delay;
                    gain.gain().set_value_at_time(vol * 0.25, t).ok();
                    gain.gain()
                        .exponential_ramp_to_value_at_time(0.01, t + 0.1)
                        .ok();
                    osc.start_with_when(t).ok();
                    osc.stop_with_when(t + 0.12).ok();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Score;

    #[test]
    fn test_event_sounds() {
        assert_eq!(
            SoundEffect::for_event(&GameEvent::PaddleHit { side: Side::Player }),
            SoundEffect::PaddleHit
        );
        assert_eq!(
            SoundEffect::for_event(&GameEvent::WallBounce),
            SoundEffect::WallHit
        );
        assert_eq!(
            SoundEffect::for_event(&GameEvent::Served {
                server: Side::Computer
            }),
            SoundEffect::Serve
        );
    }

    #[test]
    fn test_point_sound_depends_on_scorer() {
        let computer = GameEvent::PointScored {
            scorer: Side::Computer,
            score: Score::default(),
        };
        assert_eq!(
            SoundEffect::for_event(&computer),
            SoundEffect::ComputerPoint
        );
        let player = GameEvent::PointScored {
            scorer: Side::Player,
            score: Score::default(),
        };
        assert_eq!(SoundEffect::for_event(&player), SoundEffect::PlayerPoint);
    }
}
