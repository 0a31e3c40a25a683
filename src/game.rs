//! Host-facing game wrapper
//!
//! Owns the session, buffers input between frames and fans simulation events
//! out to the audio and score collaborators.

use crate::audio::{AudioCue, SoundEffect};
use crate::platform::{Renderer, ScoreDisplay};
use crate::render::draw_frame;
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, Viewport, tick};

/// Game instance holding all state
pub struct Game {
    state: GameState,
    input: TickInput,
    muted: bool,
}

impl Game {
    pub fn new(seed: u64, settings: &Settings, viewport: Viewport) -> Self {
        log::info!("Started new game with seed: {}", seed);
        Self {
            state: GameState::new(seed, settings.tuning, viewport),
            input: TickInput::default(),
            muted: settings.muted,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Let the simulation time jumps itself
    pub fn set_autopilot(&mut self, enabled: bool) {
        self.input.autopilot = enabled;
    }

    /// Jump on the next frame (dropped if airborne or the run is over)
    pub fn on_jump_requested(&mut self) {
        self.input.jump = true;
    }

    /// Start a new run on the next frame (only honoured after game over)
    pub fn on_restart_requested(&mut self) {
        self.input.restart = true;
    }

    /// Run one tick, then render and dispatch side effects.
    ///
    /// Returns whether the host should keep scheduling frames. After a game
    /// over it returns false until a restart request arrives.
    pub fn frame<R, A, S>(
        &mut self,
        viewport: Viewport,
        renderer: &mut R,
        audio: &mut A,
        display: &mut S,
    ) -> bool
    where
        R: Renderer + ?Sized,
        A: AudioCue + ?Sized,
        S: ScoreDisplay + ?Sized,
    {
        tick(&mut self.state, &self.input, viewport);

        // Clear one-shot inputs after processing
        self.input.jump = false;
        self.input.restart = false;

        for event in self.state.drain_events() {
            match event {
                GameEvent::Jumped => self.cue(audio, SoundEffect::Jump),
                GameEvent::Collided { .. } => self.cue(audio, SoundEffect::Collision),
                GameEvent::NewBest { .. } => display.show_best(&self.state.best.display_text()),
                _ => {}
            }
        }

        draw_frame(&self.state, viewport, renderer);

        self.state.phase == GamePhase::Playing
    }

    fn cue<A: AudioCue + ?Sized>(&self, audio: &mut A, effect: SoundEffect) {
        if !self.muted {
            audio.play(effect);
        }
    }
}
