//! Sound cue abstraction
//!
//! The host plays the actual sounds; the game only says which one and never
//! waits for or observes the result.

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player left the ground
    Jump,
    /// Player hit a tree
    Collision,
}

impl SoundEffect {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundEffect::Jump => "jump",
            SoundEffect::Collision => "collision",
        }
    }
}

/// Fire-and-forget audio sink. Implementations swallow their own failures.
pub trait AudioCue {
    fn play(&mut self, effect: SoundEffect);
}

/// Audio sink that only logs (headless runs, muted sessions)
#[derive(Debug, Default)]
pub struct LogAudio;

impl AudioCue for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        log::trace!("sound: {}", effect.as_str());
    }
}
