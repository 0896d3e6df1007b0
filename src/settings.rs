//! Game settings
//!
//! Field dimensions, entity sizes and base speeds, difficulty scaling.
//! Base values here are immutable during a session; the per-session
//! dynamic speeds live in [`crate::sim::SpeedSet`] and are re-derived
//! from these on every restart.

use std::fs;
use std::io;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    // === Field ===
    /// Playable field width in pixels
    pub field_width: f32,
    /// Playable field height in pixels
    pub field_height: f32,

    // === Entity sizes ===
    pub ship_width: f32,
    pub ship_height: f32,
    pub alien_width: f32,
    pub alien_height: f32,
    pub bullet_width: f32,
    pub bullet_height: f32,

    // === Base speeds (pixels per tick) ===
    pub ship_speed: f32,
    pub bullet_speed: f32,
    pub alien_speed: f32,
    /// Vertical distance the whole fleet drops on edge contact
    pub fleet_drop: f32,

    // === Session rules ===
    /// Lives at the start of a session
    pub ship_limit: u32,
    /// Maximum concurrent projectiles
    pub bullets_allowed: usize,
    /// Multiplier applied to dynamic speeds on every fleet clear
    pub speedup_scale: f32,
    /// Multiplier applied to per-alien points on every fleet clear
    pub score_scale: f32,
    /// Base score value of one alien
    pub alien_points: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_width: 1200.0,
            field_height: 800.0,

            ship_width: 60.0,
            ship_height: 40.0,
            alien_width: 20.0,
            alien_height: 20.0,
            bullet_width: 3.0,
            bullet_height: 15.0,

            ship_speed: 1.5,
            bullet_speed: 3.0,
            alien_speed: 1.0,
            fleet_drop: 10.0,

            ship_limit: 3,
            bullets_allowed: 3,
            speedup_scale: 1.1,
            score_scale: 1.5,
            alien_points: 50,
        }
    }
}

impl Settings {
    pub fn ship_size(&self) -> Vec2 {
        Vec2::new(self.ship_width, self.ship_height)
    }

    pub fn alien_size(&self) -> Vec2 {
        Vec2::new(self.alien_width, self.alien_height)
    }

    pub fn bullet_size(&self) -> Vec2 {
        Vec2::new(self.bullet_width, self.bullet_height)
    }

    /// Load settings from a JSON file, falling back to defaults if the
    /// file is missing or unreadable.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings file {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings as JSON.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
