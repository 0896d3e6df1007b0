//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - One logical tick per rendered frame
//! - No randomness (the fleet grid is a pure function of settings)
//! - No rendering or platform dependencies
//!
//! The host owns sequencing: components expose mutation-causing operations
//! but never run them autonomously.

pub mod collision;
pub mod fleet;
pub mod projectiles;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::resolve_frame;
pub use fleet::{Alien, Fleet, grid_dimensions};
pub use projectiles::{Projectile, ProjectilePool};
pub use rect::Rect;
pub use state::{Direction, GameEvent, GamePhase, GameState, Ship, SpeedSet};
pub use tick::{FrameInput, start_or_restart, tick};
