//! Simulation runner. Statistics are gathered from the `TickReport`s the
//! session returns, never by diffing state.

use super::config::{SimConfig, Strategy};
use super::report::{RunStats, SimReport};
use crate::config::GameConfig;
use crate::constants::PIGEON_WIDTH;
use crate::error::Result;
use crate::game::{process_input, tick_session, Direction, GameInput, Session, TickReport};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Run every session and aggregate the results.
pub fn run_simulation(sim: &SimConfig, game: &GameConfig) -> Result<SimReport> {
    let mut all_runs = Vec::with_capacity(sim.num_runs as usize);

    for run_idx in 0..sim.num_runs {
        let mut rng = match sim.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let stats = simulate_single_run(sim, game.clone(), &mut rng)?;
        tracing::debug!(
            run = run_idx + 1,
            points = stats.points,
            ticks = stats.ticks_played,
            game_over = stats.game_over,
            "run finished"
        );
        all_runs.push(stats);
    }

    Ok(SimReport::from_runs(all_runs, sim.max_ticks_per_run))
}

/// Play one session until game over or the tick budget runs out.
pub fn simulate_single_run<R: Rng>(
    sim: &SimConfig,
    game: GameConfig,
    rng: &mut R,
) -> Result<RunStats> {
    let mut session = Session::new(game)?;
    let mut stats = RunStats::default();

    while stats.ticks_played < sim.max_ticks_per_run && !session.game_over {
        if sim.strategy == Strategy::Dodge {
            steer(&mut session);
        }
        let report = tick_session(&mut session, rng);
        record(&mut stats, &report);
    }

    stats.points = session.points;
    stats.game_over = session.game_over;
    stats.final_cooldown_ceiling = session.difficulty.cooldown_ceiling;
    stats.final_stone_cap = session.difficulty.stone_cap;
    Ok(stats)
}

fn record(stats: &mut RunStats, report: &TickReport) {
    if !report.stepped {
        return;
    }
    stats.ticks_played += 1;
    stats.stones_exited += report.stones_exited as u64;
    if report.player_hit {
        stats.lives_lost += 1;
    }
    if let Some(placement) = report.spawned {
        stats.stones_spawned += 1;
        if placement.is_degraded() {
            stats.degraded_placements += 1;
        }
    }
}

/// Horizontal direction that moves the pigeon out from under the nearest
/// falling stone overlapping its column, or back inside the screen.
pub(crate) fn dodge_direction(session: &Session) -> Option<Direction> {
    let pigeon = &session.pigeon;
    let width = session.config.screen_width;
    if pigeon.x < 0 {
        return Some(Direction::Right);
    }
    if pigeon.x + PIGEON_WIDTH > width {
        return Some(Direction::Left);
    }

    let me = pigeon.rect();
    let threat = session
        .stones
        .iter()
        .filter(|s| s.is_falling())
        .map(|s| s.rect())
        .filter(|r| r.bottom() <= me.bottom() && r.left < me.right() && r.right() > me.left)
        .max_by_key(|r| r.bottom())?;

    let threat_center = threat.left + threat.width / 2;
    let my_center = me.left + me.width / 2;
    let go_left = threat_center >= my_center;
    // Running into the wall is worse than crossing under the stone
    if go_left && me.left - session.config.player_speed < 0 {
        Some(Direction::Right)
    } else if !go_left && me.right() + session.config.player_speed > width {
        Some(Direction::Left)
    } else if go_left {
        Some(Direction::Left)
    } else {
        Some(Direction::Right)
    }
}

fn steer(session: &mut Session) {
    let wanted = dodge_direction(session);
    for direction in [Direction::Left, Direction::Right] {
        let moving = session.pigeon.is_moving(direction);
        if Some(direction) == wanted && !moving {
            process_input(session, GameInput::Press(direction));
        } else if Some(direction) != wanted && moving {
            process_input(session, GameInput::Release(direction));
        }
    }
}
