//! Session state and core simulation types
//!
//! Everything the per-frame update cycle reads or mutates lives here,
//! threaded explicitly through [`tick`](super::tick::tick) rather than
//! held as ambient globals.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::fleet::Fleet;
use super::projectiles::ProjectilePool;
use super::rect::Rect;
use crate::settings::Settings;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Attract/menu mode - no simulation updates
    Inactive,
    /// Full simulation
    Active,
    /// Short post-hit pause before the next wave. Modeled as a counted
    /// sub-state so the host loop stays responsive to quit.
    RespawnDelay,
}

/// Horizontal movement direction for ship intents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// The player's ship. Owned by the session for its entire lifetime -
/// never destroyed, only recentered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
    /// Left movement key currently held
    pub moving_left: bool,
    /// Right movement key currently held
    pub moving_right: bool,
}

impl Ship {
    /// Create the ship centered at the bottom of the field
    pub fn new(settings: &Settings) -> Self {
        Self {
            pos: Vec2::new(
                (settings.field_width - settings.ship_width) / 2.0,
                settings.field_height - settings.ship_height,
            ),
            moving_left: false,
            moving_right: false,
        }
    }

    pub fn rect(&self, settings: &Settings) -> Rect {
        Rect::at(self.pos, settings.ship_size())
    }

    /// Record a movement key being held or released. Idempotent.
    pub fn set_intent(&mut self, direction: Direction, held: bool) {
        match direction {
            Direction::Left => self.moving_left = held,
            Direction::Right => self.moving_right = held,
        }
    }

    /// Apply movement intents for one tick. The two branches are checked
    /// independently, so holding both keys produces no net movement.
    pub fn advance(&mut self, speed: f32, settings: &Settings) {
        let rect = self.rect(settings);
        if self.moving_right && rect.right() < settings.field_width {
            self.pos.x += speed;
        }
        if self.moving_left && rect.left() > 0.0 {
            self.pos.x -= speed;
        }
    }

    /// Reset to the horizontal field center, used on respawn and restart
    pub fn recenter(&mut self, settings: &Settings) {
        self.pos.x = (settings.field_width - settings.ship_width) / 2.0;
    }

    /// Spawn point for a new projectile: the ship's top center
    pub fn fire_origin(&self, settings: &Settings) -> Vec2 {
        Vec2::new(
            self.pos.x + (settings.ship_width - settings.bullet_width) / 2.0,
            self.pos.y,
        )
    }
}

/// Dynamic difficulty values. Reset to the settings' base values on every
/// restart, scaled multiplicatively on every fleet clear.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedSet {
    /// Ship horizontal speed, pixels per tick
    pub ship: f32,
    /// Projectile upward speed, pixels per tick
    pub bullet: f32,
    /// Fleet horizontal speed, pixels per tick
    pub alien: f32,
    /// Score value of one alien at the current level
    pub alien_points: u64,
}

impl SpeedSet {
    /// Base values for a fresh session
    pub fn base(settings: &Settings) -> Self {
        Self {
            ship: settings.ship_speed,
            bullet: settings.bullet_speed,
            alien: settings.alien_speed,
            alien_points: settings.alien_points,
        }
    }

    /// Scale up on fleet clear
    pub fn increase(&mut self, settings: &Settings) {
        self.ship *= settings.speedup_scale;
        self.bullet *= settings.speedup_scale;
        self.alien *= settings.speedup_scale;
        self.alien_points = (self.alien_points as f64 * settings.score_scale as f64).round() as u64;
    }
}

/// State changes the host reacts to: scoreboard refresh, high score
/// persistence, pointer visibility. Drained once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Session started or restarted
    Started,
    ScoreChanged,
    HighScoreChanged,
    LivesChanged,
    LevelChanged,
    /// Ship collided with an alien or the fleet reached the bottom
    ShipDestroyed,
    /// Last life lost; session returned to attract mode
    GameOver,
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Current dynamic speeds and point values
    pub speeds: SpeedSet,
    pub phase: GamePhase,
    /// Ticks remaining in the post-hit pause
    pub respawn_ticks: u32,
    pub score: u64,
    /// Best score seen, compared against on every scoring pass
    pub high_score: u64,
    /// 1-based level, incremented on every fleet clear
    pub level: u32,
    /// Lives remaining
    pub lives: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub ship: Ship,
    pub projectiles: ProjectilePool,
    pub fleet: Fleet,
    /// Events raised this frame, drained by the host
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session in attract mode. The fleet is populated so the
    /// idle screen has something to show; nothing moves until start.
    pub fn new(settings: &Settings, high_score: u64) -> Self {
        let mut fleet = Fleet::new();
        fleet.populate(settings);
        Self {
            speeds: SpeedSet::base(settings),
            phase: GamePhase::Inactive,
            respawn_ticks: 0,
            score: 0,
            high_score,
            level: 1,
            lives: settings.ship_limit,
            time_ticks: 0,
            ship: Ship::new(settings),
            projectiles: ProjectilePool::new(),
            fleet,
            events: Vec::new(),
        }
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take this frame's events, leaving the queue empty
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ship_advance_respects_field_bounds() {
        let settings = Settings::default();
        let mut ship = Ship::new(&settings);
        ship.pos.x = 0.0;
        ship.set_intent(Direction::Left, true);
        ship.advance(settings.ship_speed, &settings);
        assert_eq!(ship.pos.x, 0.0);

        ship.pos.x = settings.field_width - settings.ship_width;
        ship.set_intent(Direction::Left, false);
        ship.set_intent(Direction::Right, true);
        ship.advance(settings.ship_speed, &settings);
        assert_eq!(ship.pos.x, settings.field_width - settings.ship_width);
    }

    #[test]
    fn test_ship_both_intents_cancel() {
        let settings = Settings::default();
        let mut ship = Ship::new(&settings);
        let x = ship.pos.x;
        ship.set_intent(Direction::Left, true);
        ship.set_intent(Direction::Right, true);
        ship.advance(settings.ship_speed, &settings);
        assert_eq!(ship.pos.x, x);
    }

    #[test]
    fn test_ship_recenter() {
        let settings = Settings::default();
        let mut ship = Ship::new(&settings);
        ship.pos.x = 17.0;
        ship.recenter(&settings);
        assert_eq!(
            ship.pos.x,
            (settings.field_width - settings.ship_width) / 2.0
        );
    }

    #[test]
    fn test_fire_origin_is_top_center() {
        let settings = Settings::default();
        let ship = Ship::new(&settings);
        let origin = ship.fire_origin(&settings);
        let ship_center = ship.pos.x + settings.ship_width / 2.0;
        assert_eq!(origin.x + settings.bullet_width / 2.0, ship_center);
        assert_eq!(origin.y, ship.pos.y);
    }

    #[test]
    fn test_speed_set_increase() {
        let settings = Settings::default();
        let mut speeds = SpeedSet::base(&settings);
        speeds.increase(&settings);
        assert_eq!(speeds.ship, settings.ship_speed * settings.speedup_scale);
        assert_eq!(speeds.alien, settings.alien_speed * settings.speedup_scale);
        assert_eq!(speeds.alien_points, 75);
    }

    #[test]
    fn test_new_session_is_inactive_with_fleet() {
        let settings = Settings::default();
        let state = GameState::new(&settings, 120);
        assert_eq!(state.phase, GamePhase::Inactive);
        assert_eq!(state.high_score, 120);
        assert_eq!(state.lives, settings.ship_limit);
        assert!(!state.fleet.is_empty());
        assert!(state.projectiles.is_empty());
    }
}
