//! Audio
//!
//! Every sound is a single procedurally generated tone - no external files.
//! The simulation never waits on audio; events are fire-and-forget.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player leaves the plane
    Jump,
    /// Canopy opens
    Parachute,
    /// Obstacle hit or hard landing
    Crash,
    /// Soft landing
    Landing,
    /// Wind changes
    Wind,
}

/// Oscillator shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

/// A decaying tone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency: f32,
    /// Seconds
    pub duration: f32,
    pub waveform: Waveform,
}

/// Starting gain, decays exponentially to `TONE_END_GAIN`
pub const TONE_START_GAIN: f32 = 0.1;
pub const TONE_END_GAIN: f32 = 0.01;

impl SoundEffect {
    /// Sound for a simulation event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Jump => Some(SoundEffect::Jump),
            GameEvent::Deploy => Some(SoundEffect::Parachute),
            GameEvent::Crash => Some(SoundEffect::Crash),
            GameEvent::Land => Some(SoundEffect::Landing),
            GameEvent::WindShift { .. } => Some(SoundEffect::Wind),
            GameEvent::RoundOver(_) | GameEvent::Reset => None,
        }
    }

    pub fn tone(self) -> Tone {
        let (frequency, duration, waveform) = match self {
            SoundEffect::Jump => (440.0, 0.3, Waveform::Square),
            SoundEffect::Parachute => (880.0, 0.5, Waveform::Sawtooth),
            SoundEffect::Crash => (220.0, 0.8, Waveform::Square),
            SoundEffect::Landing => (660.0, 0.4, Waveform::Sine),
            SoundEffect::Wind => (110.0, 0.6, Waveform::Triangle),
        };
        Tone {
            frequency,
            duration,
            waveform,
        }
    }
}

/// Something that can play sound effects
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Native sink: logs each effect and remembers what was played
#[derive(Debug, Clone, Default)]
pub struct LogAudio {
    pub played: Vec<SoundEffect>,
    pub muted: bool,
}

impl LogAudio {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        if self.muted {
            return;
        }
        let tone = effect.tone();
        log::debug!(
            "♪ {:?}: {} Hz {:?} for {}s",
            effect,
            tone.frequency,
            tone.waveform,
            tone.duration
        );
        self.played.push(effect);
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::WebAudio;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, OscillatorType};

    use super::{AudioSink, SoundEffect, TONE_END_GAIN, TONE_START_GAIN, Waveform};

    /// Web Audio API sink
    pub struct WebAudio {
        ctx: Option<AudioContext>,
        volume: f32,
    }

    impl Default for WebAudio {
        fn default() -> Self {
            Self::new()
        }
    }

    impl WebAudio {
        pub fn new() -> Self {
            // Try to create audio context (may fail if not in secure context)
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self { ctx, volume: 1.0 }
        }

        /// Set volume multiplier (0.0 - 1.0)
        pub fn set_volume(&mut self, volume: f32) {
            self.volume = volume.clamp(0.0, 1.0);
        }

        /// Resume audio context (required after user gesture)
        pub fn resume(&self) {
            if let Some(ctx) = &self.ctx {
                let _ = ctx.resume();
            }
        }
    }

    fn osc_type(waveform: Waveform) -> OscillatorType {
        match waveform {
            Waveform::Sine => OscillatorType::Sine,
            Waveform::Square => OscillatorType::Square,
            Waveform::Sawtooth => OscillatorType::Sawtooth,
            Waveform::Triangle => OscillatorType::Triangle,
        }
    }

    impl AudioSink for WebAudio {
        fn play(&mut self, effect: SoundEffect) {
            if self.volume <= 0.0 {
                return;
            }
            let Some(ctx) = &self.ctx else { return };

            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            let tone = effect.tone();
            let (Ok(osc), Ok(gain)) = (ctx.create_oscillator(), ctx.create_gain()) else {
                return;
            };
            osc.set_type(osc_type(tone.waveform));
            osc.frequency().set_value(tone.frequency);
            if osc.connect_with_audio_node(&gain).is_err()
                || gain.connect_with_audio_node(&ctx.destination()).is_err()
            {
                return;
            }

            let t = ctx.current_time();
            let end = t + tone.duration as f64;
            gain.gain()
                .set_value_at_time(TONE_START_GAIN * self.volume, t)
                .ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(TONE_END_GAIN * self.volume, end)
                .ok();

            osc.start().ok();
            osc.stop_with_when(end).ok();
        }
    }
}
