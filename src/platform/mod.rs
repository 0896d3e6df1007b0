//! External collaborator seams
//!
//! The simulation core is driven by a host loop through three
//! collaborators: an input source, a renderer, and a score store. The core
//! never calls into a platform directly; the host translates events into
//! per-frame intents and drains simulation events back out into effects.

use crate::settings::Settings;
use crate::sim::{FrameInput, GameEvent, GamePhase, GameState};

/// Keys the core reacts to; anything else is ignored by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Fire,
    /// Keyboard shortcut for the play button
    Start,
    Quit,
}

/// Discrete input events yielded by the input source
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Window close request
    Quit,
    KeyDown(Key),
    KeyUp(Key),
    PointerClick { x: f32, y: f32 },
}

/// Polls the windowing layer for this frame's events
pub trait InputSource {
    fn poll(&mut self) -> Vec<InputEvent>;
}

/// Produces one visible frame from the current state, and owns the
/// pointer-visibility and play-button surfaces
pub trait Renderer {
    fn draw(&mut self, state: &GameState, settings: &Settings);
    fn set_pointer_visible(&mut self, visible: bool);
    /// Hit test a click position against the play button
    fn play_button_contains(&self, x: f32, y: f32) -> bool;
}

/// Persistent high score storage
pub trait ScoreStore {
    fn high_score(&self) -> u64;
    /// Record a new best score together with the level it was reached at
    fn record(&mut self, score: u64, level: u32);
}

/// Held and one-shot input state accumulated between frames. One-shot
/// intents (fire, start) are cleared when the frame input is taken.
#[derive(Debug, Default)]
pub struct InputState {
    move_left: bool,
    move_right: bool,
    fire: bool,
    start: bool,
    quit: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event into the accumulated state. Pointer clicks are
    /// routed through the renderer's play-button hit test, and only count
    /// while the session is inactive.
    pub fn apply<R: Renderer>(&mut self, event: &InputEvent, phase: GamePhase, renderer: &R) {
        match *event {
            InputEvent::Quit | InputEvent::KeyDown(Key::Quit) => self.quit = true,
            InputEvent::KeyDown(Key::Left) => self.move_left = true,
            InputEvent::KeyUp(Key::Left) => self.move_left = false,
            InputEvent::KeyDown(Key::Right) => self.move_right = true,
            InputEvent::KeyUp(Key::Right) => self.move_right = false,
            InputEvent::KeyDown(Key::Fire) => self.fire = true,
            InputEvent::KeyDown(Key::Start) => self.start = true,
            InputEvent::PointerClick { x, y } => {
                if phase == GamePhase::Inactive && renderer.play_button_contains(x, y) {
                    self.start = true;
                }
            }
            InputEvent::KeyUp(_) => {}
        }
    }

    /// Take this frame's input, clearing the one-shot intents
    pub fn frame_input(&mut self) -> FrameInput {
        let input = FrameInput {
            move_left: self.move_left,
            move_right: self.move_right,
            fire: self.fire,
            start: self.start,
        };
        self.fire = false;
        self.start = false;
        input
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }
}

/// Drain this frame's simulation events into collaborator effects:
/// pointer visibility on start/game-over and high score persistence.
pub fn apply_events<R: Renderer, S: ScoreStore>(
    state: &mut GameState,
    renderer: &mut R,
    scores: &mut S,
) {
    for event in state.drain_events() {
        match event {
            GameEvent::Started => renderer.set_pointer_visible(false),
            GameEvent::GameOver => renderer.set_pointer_visible(true),
            GameEvent::HighScoreChanged => scores.record(state.high_score, state.level),
            GameEvent::ScoreChanged
            | GameEvent::LivesChanged
            | GameEvent::LevelChanged
            | GameEvent::ShipDestroyed => {
                log::debug!("Display refresh: {event:?}");
            }
        }
    }
}
