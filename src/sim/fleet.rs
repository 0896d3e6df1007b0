//! Fleet controller
//!
//! Owns the alien population. All aliens share one horizontal velocity
//! (speed times a fleet-wide direction sign); the drop-and-reverse on edge
//! contact is a single atomic fleet-wide event, never a per-alien reaction.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::settings::Settings;

/// One member of the fleet. No per-instance velocity - motion comes from
/// the fleet's shared speed and direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alien {
    pub pos: Vec2,
}

impl Alien {
    pub fn rect(&self, settings: &Settings) -> Rect {
        Rect::at(self.pos, settings.alien_size())
    }
}

/// The full set of live aliens plus their shared direction sign
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fleet {
    pub aliens: Vec<Alien>,
    /// +1.0 moving right, -1.0 moving left
    pub direction: f32,
}

impl Default for Fleet {
    fn default() -> Self {
        Self::new()
    }
}

/// Grid dimensions that fit the field: one alien-width margin on each side
/// with doubled column spacing, and doubled row spacing below the top
/// margin, reserving room for the ship at the bottom.
pub fn grid_dimensions(settings: &Settings) -> (usize, usize) {
    let columns =
        ((settings.field_width - 2.0 * settings.alien_width) / (2.0 * settings.alien_width))
            .floor()
            .max(0.0) as usize;
    let rows = ((settings.field_height - 3.0 * settings.alien_height - settings.ship_height)
        / (2.0 * settings.alien_height))
        .floor()
        .max(0.0) as usize;
    (columns, rows)
}

impl Fleet {
    pub fn new() -> Self {
        Self {
            aliens: Vec::new(),
            direction: 1.0,
        }
    }

    /// Fill the fleet with a fresh grid. Pure function of the settings:
    /// same settings, same grid. A field too small for even one alien
    /// yields a valid empty fleet.
    pub fn populate(&mut self, settings: &Settings) {
        self.aliens.clear();
        let (columns, rows) = grid_dimensions(settings);
        self.aliens.reserve(columns * rows);
        for row in 0..rows {
            for column in 0..columns {
                self.aliens.push(Alien {
                    pos: Vec2::new(
                        settings.alien_width + 2.0 * settings.alien_width * column as f32,
                        settings.alien_height + 2.0 * settings.alien_height * row as f32,
                    ),
                });
            }
        }
        log::debug!("Populated fleet: {rows} rows x {columns} columns");
    }

    /// Advance every alien by the shared horizontal velocity
    pub fn advance_all(&mut self, speed: f32) {
        let velocity = speed * self.direction;
        for alien in &mut self.aliens {
            alien.pos.x += velocity;
        }
    }

    /// True if any alien touches a horizontal field edge
    pub fn check_edges(&self, settings: &Settings) -> bool {
        self.aliens.iter().any(|alien| {
            let rect = alien.rect(settings);
            rect.left() <= 0.0 || rect.right() >= settings.field_width
        })
    }

    /// Shift the whole fleet down and flip the shared direction. Called at
    /// most once per frame, however many aliens sit at the edge.
    pub fn drop_and_reverse(&mut self, drop: f32) {
        for alien in &mut self.aliens {
            alien.pos.y += drop;
        }
        self.direction = -self.direction;
    }

    /// True if any alien's bottom edge has reached the field bottom
    pub fn reaches_bottom(&self, settings: &Settings) -> bool {
        self.aliens
            .iter()
            .any(|alien| alien.rect(settings).bottom() >= settings.field_height)
    }

    pub fn is_empty(&self) -> bool {
        self.aliens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.aliens.len()
    }

    pub fn clear(&mut self) {
        self.aliens.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_grid_matches_formula_for_default_field() {
        // 1200x800 field, 20x20 aliens, 40-tall ship:
        // columns = floor((1200 - 40) / 40) = 29
        // rows = floor((800 - 60 - 40) / 40) = 17
        let settings = Settings::default();
        let (columns, rows) = grid_dimensions(&settings);
        assert_eq!(columns, 29);
        assert_eq!(rows, 17);

        let mut fleet = Fleet::new();
        fleet.populate(&settings);
        assert_eq!(fleet.len(), 493);
    }

    #[test]
    fn test_populate_positions_are_deterministic() {
        let settings = Settings::default();
        let mut a = Fleet::new();
        let mut b = Fleet::new();
        a.populate(&settings);
        b.populate(&settings);
        assert_eq!(a.len(), b.len());
        for (x, y) in a.aliens.iter().zip(&b.aliens) {
            assert_eq!(x.pos, y.pos);
        }
        // First alien sits one margin in from the top-left corner
        assert_eq!(
            a.aliens[0].pos,
            Vec2::new(settings.alien_width, settings.alien_height)
        );
    }

    #[test]
    fn test_tiny_field_yields_empty_fleet() {
        let settings = Settings {
            field_width: 30.0,
            field_height: 50.0,
            ..Settings::default()
        };
        let mut fleet = Fleet::new();
        fleet.populate(&settings);
        assert!(fleet.is_empty());
    }

    #[test]
    fn test_drop_and_reverse_is_atomic() {
        let settings = Settings::default();
        let mut fleet = Fleet::new();
        fleet.populate(&settings);
        let before: Vec<f32> = fleet.aliens.iter().map(|a| a.pos.y).collect();

        fleet.drop_and_reverse(settings.fleet_drop);
        assert_eq!(fleet.direction, -1.0);
        for (alien, y) in fleet.aliens.iter().zip(before) {
            assert_eq!(alien.pos.y, y + settings.fleet_drop);
        }

        fleet.drop_and_reverse(settings.fleet_drop);
        assert_eq!(fleet.direction, 1.0);
    }

    #[test]
    fn test_check_edges() {
        let settings = Settings::default();
        let mut fleet = Fleet::new();
        fleet.populate(&settings);
        assert!(!fleet.check_edges(&settings));

        // Walk the fleet right until its rightmost member touches the edge
        while !fleet.check_edges(&settings) {
            fleet.advance_all(settings.alien_speed);
        }
        let rightmost = fleet
            .aliens
            .iter()
            .map(|a| a.rect(&settings).right())
            .fold(f32::MIN, f32::max);
        assert!(rightmost >= settings.field_width);
    }

    #[test]
    fn test_reaches_bottom() {
        let settings = Settings::default();
        let mut fleet = Fleet::new();
        fleet.populate(&settings);
        assert!(!fleet.reaches_bottom(&settings));

        for alien in &mut fleet.aliens {
            alien.pos.y += settings.field_height;
        }
        assert!(fleet.reaches_bottom(&settings));
    }

    #[test]
    fn test_vertical_position_never_rises() {
        let settings = Settings::default();
        let mut fleet = Fleet::new();
        fleet.populate(&settings);
        let start_y: Vec<f32> = fleet.aliens.iter().map(|a| a.pos.y).collect();

        for _ in 0..1000 {
            if fleet.check_edges(&settings) {
                fleet.drop_and_reverse(settings.fleet_drop);
            }
            fleet.advance_all(settings.alien_speed);
        }
        for (alien, y) in fleet.aliens.iter().zip(start_y) {
            assert!(alien.pos.y >= y);
        }
    }

    proptest! {
        #[test]
        fn prop_populate_is_reproducible(
            field_width in 40.0f32..4000.0,
            field_height in 40.0f32..4000.0,
            alien in 4.0f32..64.0,
        ) {
            let settings = Settings {
                field_width,
                field_height,
                alien_width: alien,
                alien_height: alien,
                ..Settings::default()
            };
            let mut a = Fleet::new();
            let mut b = Fleet::new();
            a.populate(&settings);
            b.populate(&settings);
            let (columns, rows) = grid_dimensions(&settings);
            prop_assert_eq!(a.len(), columns * rows);
            prop_assert_eq!(a.len(), b.len());
            for (x, y) in a.aliens.iter().zip(&b.aliens) {
                prop_assert_eq!(x.pos, y.pos);
            }
        }
    }
}
