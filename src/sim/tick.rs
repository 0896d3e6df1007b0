//! Per-frame orchestrator and session transitions
//!
//! One logical tick per rendered frame: apply input intents, advance the
//! ship, advance and prune projectiles, then run the collision-and-fleet
//! cycle. Session transitions (start, life loss, fleet clear) live here so
//! every trigger routes through the same code path.

use super::collision::resolve_frame;
use super::state::{Direction, GameEvent, GamePhase, GameState, SpeedSet};
use crate::consts::RESPAWN_DELAY_TICKS;
use crate::settings::Settings;

/// Input intents for a single frame. Movement intents are held states
/// maintained by the host across frames; `fire` and `start` are one-shots.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Left movement key held
    pub move_left: bool,
    /// Right movement key held
    pub move_right: bool,
    /// Fire requested this frame
    pub fire: bool,
    /// Play button clicked (or start key pressed) this frame
    pub start: bool,
}

/// Advance the session by one logical frame
pub fn tick(state: &mut GameState, settings: &Settings, input: &FrameInput) {
    if input.start && state.phase == GamePhase::Inactive {
        start_or_restart(state, settings);
    }

    match state.phase {
        GamePhase::Inactive => return,
        GamePhase::RespawnDelay => {
            state.respawn_ticks = state.respawn_ticks.saturating_sub(1);
            if state.respawn_ticks == 0 {
                state.phase = GamePhase::Active;
            }
            return;
        }
        GamePhase::Active => {}
    }

    state.time_ticks += 1;

    state.ship.set_intent(Direction::Left, input.move_left);
    state.ship.set_intent(Direction::Right, input.move_right);
    state.ship.advance(state.speeds.ship, settings);

    if input.fire {
        let origin = state.ship.fire_origin(settings);
        state.projectiles.fire(origin, state.speeds.bullet, settings);
    }
    state.projectiles.advance_all(settings);

    resolve_frame(state, settings);
}

/// Start a fresh session from attract mode: dynamic values back to base,
/// statistics reset, fresh fleet, ship centered.
pub fn start_or_restart(state: &mut GameState, settings: &Settings) {
    state.speeds = SpeedSet::base(settings);
    state.score = 0;
    state.level = 1;
    state.lives = settings.ship_limit;
    state.respawn_ticks = 0;

    state.fleet.clear();
    state.fleet.direction = 1.0;
    state.fleet.populate(settings);
    state.projectiles.clear();
    state.ship.recenter(settings);

    state.phase = GamePhase::Active;
    state.push_event(GameEvent::Started);
    state.push_event(GameEvent::ScoreChanged);
    state.push_event(GameEvent::LevelChanged);
    state.push_event(GameEvent::LivesChanged);
    log::info!("Session started: {} lives", state.lives);
}

/// Life-loss transition, shared by ship-alien contact and the fleet
/// reaching the bottom.
pub(crate) fn ship_hit(state: &mut GameState, settings: &Settings) {
    state.push_event(GameEvent::ShipDestroyed);
    if state.lives > 0 {
        state.lives -= 1;
        state.push_event(GameEvent::LivesChanged);

        state.fleet.clear();
        state.fleet.populate(settings);
        state.projectiles.clear();
        state.ship.recenter(settings);

        state.phase = GamePhase::RespawnDelay;
        state.respawn_ticks = RESPAWN_DELAY_TICKS;
        log::info!("Ship destroyed, {} lives remaining", state.lives);
    } else {
        state.phase = GamePhase::Inactive;
        state.push_event(GameEvent::GameOver);
        log::info!(
            "Game over at level {} with score {}",
            state.level,
            state.score
        );
    }
}

/// Fleet-cleared transition: next wave, scaled difficulty
pub(crate) fn fleet_cleared(state: &mut GameState, settings: &Settings) {
    state.projectiles.clear();
    state.fleet.populate(settings);
    state.speeds.increase(settings);
    state.level += 1;
    state.push_event(GameEvent::LevelChanged);
    log::info!("Fleet cleared, level {}", state.level);
}
