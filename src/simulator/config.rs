//! Simulation configuration.

/// Scripted input used for every simulated session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Strategy {
    /// Never touch the controls.
    #[default]
    Idle,
    /// Steer away from the nearest stone above the pigeon.
    Dodge,
}

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of sessions to play
    pub num_runs: u32,

    /// Base seed; run `i` uses `seed + i` (None = entropy)
    pub seed: Option<u64>,

    /// Tick budget per session. A session also stops at game over.
    pub max_ticks_per_run: u64,

    pub strategy: Strategy,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            seed: None,
            max_ticks_per_run: 36_000,
            strategy: Strategy::Idle,
        }
    }
}
