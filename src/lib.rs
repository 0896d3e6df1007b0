//! Alien Invasion - a fixed-tick arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, fleet, collisions, session state)
//! - `platform`: Input/render/persistence collaborator seams
//! - `settings`: Data-driven game configuration
//! - `highscores`: Persistent high score leaderboard

pub mod highscores;
pub mod platform;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use settings::Settings;

/// Game loop constants
pub mod consts {
    /// Logical simulation rate - one tick per rendered frame
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Post-hit respawn delay (0.5 seconds at 60 Hz). The loop keeps
    /// polling input during the delay, so quit stays responsive.
    pub const RESPAWN_DELAY_TICKS: u32 = TICKS_PER_SECOND / 2;
}
