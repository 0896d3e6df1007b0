//! Alien Invasion entry point
//!
//! Runs a scripted headless demo session: the real windowing, sprite and
//! text layers plug in through the same `platform` traits the demo
//! collaborators implement here.

use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

use alien_invasion::consts::TICKS_PER_SECOND;
use alien_invasion::highscores::{HighScores, now_ms};
use alien_invasion::platform::{
    InputEvent, InputSource, InputState, Key, Renderer, ScoreStore, apply_events,
};
use alien_invasion::settings::Settings;
use alien_invasion::sim::{GameState, Rect, tick};

/// Renderer stand-in for the headless demo: draws by logging, and hosts
/// the play button hit target.
struct HeadlessRenderer {
    play_button: Rect,
}

impl HeadlessRenderer {
    fn new(settings: &Settings) -> Self {
        // Play button centered in the field
        let (w, h) = (200.0, 50.0);
        Self {
            play_button: Rect::new(
                (settings.field_width - w) / 2.0,
                (settings.field_height - h) / 2.0,
                w,
                h,
            ),
        }
    }
}

impl Renderer for HeadlessRenderer {
    fn draw(&mut self, state: &GameState, _settings: &Settings) {
        if state.time_ticks % u64::from(TICKS_PER_SECOND) == 0 && state.time_ticks > 0 {
            log::debug!(
                "tick {}: score {} level {} lives {} aliens {} shots {}",
                state.time_ticks,
                state.score,
                state.level,
                state.lives,
                state.fleet.len(),
                state.projectiles.len(),
            );
        }
    }

    fn set_pointer_visible(&mut self, visible: bool) {
        log::info!("Pointer {}", if visible { "shown" } else { "hidden" });
    }

    fn play_button_contains(&self, x: f32, y: f32) -> bool {
        self.play_button.contains(x, y)
    }
}

/// Deterministic input script: idle on the attract screen, click play,
/// sweep right then left while firing, then quit.
struct ScriptedInput {
    frame: u64,
    click: (f32, f32),
}

impl ScriptedInput {
    fn new(play_button: &Rect) -> Self {
        Self {
            frame: 0,
            click: (
                play_button.x + play_button.w / 2.0,
                play_button.y + play_button.h / 2.0,
            ),
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Vec<InputEvent> {
        let frame = self.frame;
        self.frame += 1;

        let mut events = Vec::new();
        match frame {
            30 => events.push(InputEvent::PointerClick {
                x: self.click.0,
                y: self.click.1,
            }),
            40 => events.push(InputEvent::KeyDown(Key::Right)),
            200 => events.push(InputEvent::KeyUp(Key::Right)),
            210 => events.push(InputEvent::KeyDown(Key::Left)),
            380 => events.push(InputEvent::KeyUp(Key::Left)),
            f if f >= 430 => events.push(InputEvent::KeyDown(Key::Quit)),
            _ => {}
        }
        if (40..420).contains(&frame) && frame % 10 == 0 {
            events.push(InputEvent::KeyDown(Key::Fire));
        }
        events
    }
}

/// File-backed leaderboard behind the score store seam
struct FileScores {
    scores: HighScores,
    path: PathBuf,
}

impl FileScores {
    fn open(path: PathBuf) -> Self {
        let scores = HighScores::load(&path);
        Self { scores, path }
    }
}

impl ScoreStore for FileScores {
    fn high_score(&self) -> u64 {
        self.scores.top_score().unwrap_or(0)
    }

    fn record(&mut self, score: u64, level: u32) {
        self.scores.add_score(score, level, now_ms());
        if let Err(e) = self.scores.save(&self.path) {
            log::error!("Failed to save high scores: {e}");
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Alien Invasion starting...");

    let settings = Settings::load(Path::new("settings.json"));
    let mut scores = FileScores::open(PathBuf::from("highscores.json"));
    let mut renderer = HeadlessRenderer::new(&settings);
    let mut source = ScriptedInput::new(&renderer.play_button);
    let mut input = InputState::new();
    let mut state = GameState::new(&settings, scores.high_score());

    let frame_budget = Duration::from_secs(1) / TICKS_PER_SECOND;
    loop {
        let frame_start = Instant::now();

        for event in source.poll() {
            input.apply(&event, state.phase, &renderer);
        }
        if input.quit_requested() {
            break;
        }

        tick(&mut state, &settings, &input.frame_input());
        apply_events(&mut state, &mut renderer, &mut scores);
        renderer.draw(&state, &settings);

        if let Some(remaining) = frame_budget.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }

    log::info!(
        "Session ended: score {}, level {}, high score {}",
        state.score,
        state.level,
        state.high_score,
    );
}
