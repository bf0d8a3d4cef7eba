//! Session logic: input processing, the fixed-tick update and collision handling.

use super::pigeon::Direction;
use super::session::Session;
use super::spawn::Placement;
use rand::Rng;
use std::time::Duration;

/// Largest frame delta fed into the accumulator (prevents a burst of ticks after a stall).
const MAX_FRAME_DT: Duration = Duration::from_millis(100);

/// UI-agnostic input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    Quit,
    Press(Direction),
    Release(Direction),
    /// Space. Only meaningful on the game-over screen, where it starts over.
    PauseResume,
    Reset,
}

/// What happened during one tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    /// False when the tick was skipped (game over).
    pub stepped: bool,
    pub points_awarded: u64,
    pub stones_exited: u32,
    pub player_hit: bool,
    /// Game over was reached on this tick.
    pub game_over: bool,
    pub spawned: Option<Placement>,
}

pub fn process_input(session: &mut Session, input: GameInput) {
    match input {
        GameInput::Quit => {
            session.running = false;
        }
        GameInput::Reset => session.reset(),
        GameInput::PauseResume => {
            if session.game_over {
                session.reset();
            }
        }
        GameInput::Press(direction) => {
            if !session.game_over {
                session.pigeon.press(direction);
            }
        }
        // Releases always land so no key stays stuck across a reset
        GameInput::Release(direction) => session.pigeon.release(direction),
    }
}

/// Feed elapsed wall time and step as many fixed ticks as fit.
/// Returns the reports of the ticks that ran.
pub fn advance_session<R: Rng>(
    session: &mut Session,
    dt: Duration,
    rng: &mut R,
) -> Vec<TickReport> {
    if session.game_over {
        return Vec::new();
    }
    session.accumulated_time += dt.min(MAX_FRAME_DT);

    let interval = session.tick_interval();
    let mut reports = Vec::new();
    while session.accumulated_time >= interval {
        session.accumulated_time -= interval;
        let report = tick_session(session, rng);
        let ended = report.game_over;
        reports.push(report);
        if ended {
            session.accumulated_time = Duration::ZERO;
            break;
        }
    }
    reports
}

/// One fixed tick: pigeon (movement + collision), stones, then spawning.
pub fn tick_session<R: Rng>(session: &mut Session, rng: &mut R) -> TickReport {
    let mut report = TickReport::default();
    if session.game_over {
        return report;
    }
    report.stepped = true;
    session.tick_count += 1;

    // 1. Pigeon
    session.pigeon.apply_movement();
    session.pigeon.animate();
    let mode = session.config.collision_mode;
    if let Some(index) = session.pigeon.first_hit(&session.stones, mode) {
        apply_hit(session, index, &mut report);
        if session.game_over {
            return report;
        }
    }

    // 2. Stones
    for stone in &mut session.stones {
        if let Some(exit) = stone.advance(session.config.screen_height) {
            session.points += exit.points;
            report.points_awarded += exit.points;
            report.stones_exited += 1;
            session.difficulty.on_stone_exited();
            tracing::debug!(
                points = exit.points,
                ceiling = session.difficulty.cooldown_ceiling,
                cap = session.difficulty.stone_cap,
                "stone exited"
            );
        }
    }
    session.stones.retain(|s| s.is_falling());

    // 3. Spawning
    let live = session.live_stone_count();
    if session.difficulty.tick_cooldown(live) {
        report.spawned = Some(session.spawn_stone(rng));
        session.difficulty.rearm();
    }

    report
}

/// Consequences of the pigeon touching `stones[index]`.
fn apply_hit(session: &mut Session, index: usize, report: &mut TickReport) {
    session.stones[index].destroy();
    // Every other stone on the field goes with it
    session.stones.clear();
    session.pigeon.recenter();
    session.lives = session.lives.saturating_sub(1);
    report.player_hit = true;

    tracing::info!(lives = session.lives, points = session.points, "pigeon hit");
    if session.lives == 0 {
        session.game_over = true;
        report.game_over = true;
        tracing::info!(points = session.points, ticks = session.tick_count, "game over");
    }
}
