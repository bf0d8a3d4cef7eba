//! Pigeon Dodge - a small arcade game library.
//!
//! This module exposes the game core for the terminal front-end, the
//! headless simulator and tests.

pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod input;
pub mod simulator;
pub mod ui;

pub use config::GameConfig;
pub use error::{GameError, Result};
pub use game::{GameInput, Session, TickReport};
