//! Simulation report generation.

/// Per-session results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    pub points: u64,
    pub ticks_played: u64,
    pub lives_lost: u32,
    pub stones_spawned: u64,
    pub stones_exited: u64,
    pub degraded_placements: u64,
    pub game_over: bool,
    pub final_cooldown_ceiling: u32,
    pub final_stone_cap: usize,
}

/// Aggregated results from multiple simulated sessions.
#[derive(Debug, Clone)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_game_over: u32,
    pub runs_survived: u32,

    pub avg_points: f64,
    pub best_points: u64,
    pub avg_ticks: f64,
    pub avg_lives_lost: f64,
    pub avg_stones_spawned: f64,
    pub avg_degraded_placements: f64,
    pub avg_final_ceiling: f64,
    pub avg_final_cap: f64,

    pub runs: Vec<RunStats>,
}

fn mean(runs: &[RunStats], f: impl Fn(&RunStats) -> f64) -> f64 {
    runs.iter().map(f).sum::<f64>() / runs.len().max(1) as f64
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>, max_ticks: u64) -> Self {
        let num_runs = runs.len() as u32;

        Self {
            num_runs,
            runs_game_over: runs.iter().filter(|r| r.game_over).count() as u32,
            runs_survived: runs
                .iter()
                .filter(|r| !r.game_over && r.ticks_played >= max_ticks)
                .count() as u32,
            avg_points: mean(&runs, |r| r.points as f64),
            best_points: runs.iter().map(|r| r.points).max().unwrap_or(0),
            avg_ticks: mean(&runs, |r| r.ticks_played as f64),
            avg_lives_lost: mean(&runs, |r| r.lives_lost as f64),
            avg_stones_spawned: mean(&runs, |r| r.stones_spawned as f64),
            avg_degraded_placements: mean(&runs, |r| r.degraded_placements as f64),
            avg_final_ceiling: mean(&runs, |r| r.final_cooldown_ceiling as f64),
            avg_final_cap: mean(&runs, |r| r.final_stone_cap as f64),
            runs,
        }
    }

    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} game over, {} survived the tick budget\n\n",
            self.num_runs, self.runs_game_over, self.runs_survived
        ));

        report.push_str("── SCORING ──────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Points:          {:.1}\n", self.avg_points));
        report.push_str(&format!("  Best Points:         {}\n", self.best_points));
        report.push_str(&format!("  Avg Ticks Played:    {:.0}\n", self.avg_ticks));
        report.push_str(&format!(
            "  Avg Lives Lost:      {:.2}\n\n",
            self.avg_lives_lost
        ));

        report.push_str("── SPAWNING ─────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Stones Spawned:  {:.1}\n",
            self.avg_stones_spawned
        ));
        report.push_str(&format!(
            "  Avg Degraded:        {:.2}\n\n",
            self.avg_degraded_placements
        ));

        report.push_str("── DIFFICULTY ───────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Final Cooldown:  {:.1} ticks\n",
            self.avg_final_ceiling
        ));
        report.push_str(&format!("  Avg Final Cap:       {:.1}\n", self.avg_final_cap));

        report
    }
}
