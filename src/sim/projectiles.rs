//! Projectile pool
//!
//! Owns the live projectiles, enforces the concurrent cap, and prunes
//! anything that leaves the top of the field.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::settings::Settings;

/// An upward-moving projectile. Speed is captured at fire time, so shots
/// already in flight keep their speed across a level change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub speed: f32,
}

impl Projectile {
    pub fn rect(&self, settings: &Settings) -> Rect {
        Rect::at(self.pos, settings.bullet_size())
    }

    /// Up is negative y in field coordinates
    fn advance(&mut self) {
        self.pos.y -= self.speed;
    }
}

/// Pool of live projectiles
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectilePool {
    projectiles: Vec<Projectile>,
}

impl ProjectilePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a projectile at `origin`. A silent no-op at the cap.
    pub fn fire(&mut self, origin: Vec2, speed: f32, settings: &Settings) -> bool {
        if self.projectiles.len() >= settings.bullets_allowed {
            return false;
        }
        self.projectiles.push(Projectile { pos: origin, speed });
        true
    }

    /// Move every projectile, then drop any whose bottom edge has passed
    /// the top of the field.
    pub fn advance_all(&mut self, settings: &Settings) {
        for projectile in &mut self.projectiles {
            projectile.advance();
        }
        let height = settings.bullet_height;
        self.projectiles.retain(|p| p.pos.y + height > 0.0);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Projectile> {
        self.projectiles.iter()
    }

    pub fn len(&self) -> usize {
        self.projectiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projectiles.is_empty()
    }

    pub fn clear(&mut self) {
        self.projectiles.clear();
    }

    /// Remove the projectiles consumed by a collision pass. Indices refer
    /// to this frame's iteration order.
    pub(crate) fn remove_indices(&mut self, mut indices: Vec<usize>) {
        indices.sort_unstable_by(|a, b| b.cmp(a));
        for index in indices {
            self.projectiles.remove(index);
        }
    }
}
