//! Headless session simulator.
//!
//! Plays many seeded sessions with a scripted input strategy to look at
//! scoring and difficulty pacing. It drives the same `tick_session` the
//! interactive front-end uses, so the numbers match real play.

mod config;
mod report;
mod runner;

pub use config::{SimConfig, Strategy};
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run};
