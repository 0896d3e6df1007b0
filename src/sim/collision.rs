//! Per-frame collision and fleet resolution
//!
//! Runs once per active frame in a fixed order: fleet edge handling, fleet
//! advance, ship contact, bottom contact, projectile matching, fleet-clear.
//! A life loss ends alien processing for the frame so nothing is counted
//! twice.

use super::state::{GameEvent, GameState};
use super::tick::{fleet_cleared, ship_hit};
use crate::settings::Settings;

/// Resolve one frame of fleet motion, collisions and scoring
pub fn resolve_frame(state: &mut GameState, settings: &Settings) {
    // One edge check per frame: a single drop-and-reverse regardless of
    // how many aliens touch the edge simultaneously.
    if state.fleet.check_edges(settings) {
        state.fleet.drop_and_reverse(settings.fleet_drop);
    }
    state.fleet.advance_all(state.speeds.alien);

    let ship_rect = state.ship.rect(settings);
    if state
        .fleet
        .aliens
        .iter()
        .any(|alien| alien.rect(settings).intersects(&ship_rect))
    {
        ship_hit(state, settings);
        return;
    }

    // An alien reaching the bottom carries the same penalty as a hit
    if state.fleet.reaches_bottom(settings) {
        ship_hit(state, settings);
        return;
    }

    resolve_projectile_hits(state, settings);

    if state.fleet.is_empty() {
        fleet_cleared(state, settings);
    }
}

/// Match projectiles against aliens and apply score. Matches are collected
/// against this frame's snapshot first, then removed, so no entry is
/// skipped or double-counted. One projectile consumes at most one alien
/// and each alien matches at most once per frame.
fn resolve_projectile_hits(state: &mut GameState, settings: &Settings) {
    let mut spent_projectiles = Vec::new();
    let mut hit_aliens = vec![false; state.fleet.len()];

    for (pi, projectile) in state.projectiles.iter().enumerate() {
        let projectile_rect = projectile.rect(settings);
        for (ai, alien) in state.fleet.aliens.iter().enumerate() {
            if hit_aliens[ai] {
                continue;
            }
            if projectile_rect.intersects(&alien.rect(settings)) {
                spent_projectiles.push(pi);
                hit_aliens[ai] = true;
                break;
            }
        }
    }

    let destroyed = spent_projectiles.len() as u64;
    if destroyed == 0 {
        return;
    }

    state.projectiles.remove_indices(spent_projectiles);
    let mut index = 0;
    state.fleet.aliens.retain(|_| {
        let keep = !hit_aliens[index];
        index += 1;
        keep
    });

    state.score += state.speeds.alien_points * destroyed;
    state.push_event(GameEvent::ScoreChanged);
    if state.score > state.high_score {
        state.high_score = state.score;
        state.push_event(GameEvent::HighScoreChanged);
        log::info!("New high score: {}", state.high_score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::GamePhase;
    use glam::Vec2;

    fn active_state(settings: &Settings) -> GameState {
        let mut state = GameState::new(settings, 0);
        state.phase = GamePhase::Active;
        state
    }

    #[test]
    fn test_projectile_hits_score_and_shrink_fleet() {
        let settings = Settings::default();
        let mut state = active_state(&settings);
        let fleet_size = state.fleet.len();

        // Park two projectiles on top of two distinct aliens
        let targets: Vec<Vec2> = state.fleet.aliens.iter().take(2).map(|a| a.pos).collect();
        for pos in targets {
            state
                .projectiles
                .fire(pos + Vec2::new(2.0, 2.0), settings.bullet_speed, &settings);
        }

        resolve_frame(&mut state, &settings);

        assert_eq!(state.fleet.len(), fleet_size - 2);
        assert!(state.projectiles.is_empty());
        assert_eq!(state.score, 2 * settings.alien_points);
        assert_eq!(state.high_score, state.score);
        let events = state.drain_events();
        assert!(events.contains(&GameEvent::ScoreChanged));
        assert!(events.contains(&GameEvent::HighScoreChanged));
    }

    #[test]
    fn test_one_projectile_destroys_at_most_one_alien() {
        let settings = Settings::default();
        let mut state = active_state(&settings);

        // Two aliens stacked on the same spot, one projectile
        let target = state.fleet.aliens[0].pos;
        state.fleet.aliens[1].pos = target;
        state
            .projectiles
            .fire(target + Vec2::new(2.0, 2.0), settings.bullet_speed, &settings);

        let fleet_size = state.fleet.len();
        resolve_frame(&mut state, &settings);
        assert_eq!(state.fleet.len(), fleet_size - 1);
        assert_eq!(state.score, settings.alien_points);
    }

    #[test]
    fn test_high_score_only_rises() {
        let settings = Settings::default();
        let mut state = active_state(&settings);
        state.high_score = 1_000_000;

        let target = state.fleet.aliens[0].pos;
        state
            .projectiles
            .fire(target + Vec2::new(2.0, 2.0), settings.bullet_speed, &settings);
        resolve_frame(&mut state, &settings);

        assert_eq!(state.high_score, 1_000_000);
        assert!(!state.drain_events().contains(&GameEvent::HighScoreChanged));
    }

    #[test]
    fn test_ship_contact_and_bottom_reach_are_identical_transitions() {
        let settings = Settings::default();

        // Contact path: drop an alien onto the ship
        let mut by_contact = active_state(&settings);
        by_contact.fleet.aliens[0].pos = by_contact.ship.pos;

        // Bottom path: move an alien past the field bottom, away from the
        // ship and the field edges
        let mut by_bottom = active_state(&settings);
        by_bottom.fleet.aliens[0].pos = Vec2::new(100.0, settings.field_height);

        resolve_frame(&mut by_contact, &settings);
        resolve_frame(&mut by_bottom, &settings);

        assert_eq!(by_contact.lives, by_bottom.lives);
        assert_eq!(by_contact.lives, settings.ship_limit - 1);
        assert_eq!(by_contact.phase, by_bottom.phase);
        assert_eq!(by_contact.respawn_ticks, by_bottom.respawn_ticks);
        assert_eq!(by_contact.fleet.len(), by_bottom.fleet.len());
        assert_eq!(by_contact.fleet.direction, by_bottom.fleet.direction);
        assert_eq!(by_contact.ship.pos, by_bottom.ship.pos);
        assert_eq!(by_contact.drain_events(), by_bottom.drain_events());
    }

    #[test]
    fn test_life_loss_frame_skips_scoring() {
        let settings = Settings::default();
        let mut state = active_state(&settings);

        // A projectile sits on an alien, but another alien hits the ship:
        // alien processing stops before the scoring pass.
        let target = state.fleet.aliens[5].pos;
        state
            .projectiles
            .fire(target + Vec2::new(2.0, 2.0), settings.bullet_speed, &settings);
        state.fleet.aliens[0].pos = state.ship.pos;

        resolve_frame(&mut state, &settings);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_fleet_clear_levels_up_and_respawns() {
        let settings = Settings::default();
        let mut state = active_state(&settings);
        state.fleet.clear();
        state
            .projectiles
            .fire(Vec2::new(600.0, 400.0), settings.bullet_speed, &settings);

        let base = state.speeds;
        resolve_frame(&mut state, &settings);

        assert_eq!(state.level, 2);
        assert!(!state.fleet.is_empty());
        assert!(state.projectiles.is_empty());
        assert_eq!(state.speeds.alien, base.alien * settings.speedup_scale);
        assert!(state.drain_events().contains(&GameEvent::LevelChanged));
    }

    #[test]
    fn test_single_drop_per_frame_with_many_edge_contacts() {
        let settings = Settings::default();
        let mut state = active_state(&settings);

        // Put an entire column of aliens on the left edge
        for alien in &mut state.fleet.aliens {
            alien.pos.x -= settings.alien_width;
        }
        let direction = state.fleet.direction;
        let top = state.fleet.aliens[0].pos.y;

        resolve_frame(&mut state, &settings);

        // Exactly one flip and one drop increment despite many contacts
        assert_eq!(state.fleet.direction, -direction);
        assert_eq!(state.fleet.aliens[0].pos.y, top + settings.fleet_drop);
    }
}
