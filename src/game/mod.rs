//! Pigeon Dodge game core.
//!
//! A pigeon dodges stones falling from a band at the top of the screen.
//! Stones that fall past the bottom edge score points and ramp up the
//! spawn rate and stone cap; touching one costs a life and clears the
//! field. Everything here is tick-driven and takes its randomness from
//! the caller, so a seeded RNG replays a session exactly.

pub mod collision;
pub mod difficulty;
pub mod entity;
pub mod logic;
pub mod pigeon;
pub mod session;
pub mod spawn;
pub mod sprites;
pub mod stone;

pub use difficulty::DifficultyState;
pub use entity::{DrawCommand, Entity, SpriteId, TextKind};
pub use logic::*;
pub use pigeon::{Direction, Facing, Pigeon};
pub use session::Session;
pub use spawn::{find_spawn_x, Placement, SpawnBand};
pub use stone::{Stone, StoneState};
