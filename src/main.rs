use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{
        self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
    ExecutableCommand,
};
use pigeon_dodge::game::{advance_session, process_input};
use pigeon_dodge::input::map_key;
use pigeon_dodge::{ui, GameConfig, Session};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pigeon-dodge", about = "Dodge the falling stones", version)]
struct Cli {
    /// TOML game config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// RNG seed for a reproducible session
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write logs to this file (the terminal belongs to the game)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                EnvFilter::builder()
                    .with_default_directive(tracing::Level::INFO.into())
                    .from_env_lossy(),
            )
            .init();
    }

    let config = GameConfig::load_or_default(cli.config.as_deref())
        .context("failed to load game config")?;
    let mut session = Session::new(config).context("failed to start session")?;
    let mut rng = match cli.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let release_events = supports_keyboard_enhancement().unwrap_or(false);
    if release_events {
        stdout.execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    tracing::info!(release_events, seed = ?cli.seed, "session started");

    let result = run(&mut terminal, &mut session, &mut rng, release_events);

    let restored = restore_terminal(&mut terminal, release_events);
    result?;
    restored?;
    println!("Final score: {} points", session.points);
    Ok(())
}

/// Undo the terminal setup. Every step runs even if an earlier one fails.
fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    release_events: bool,
) -> io::Result<()> {
    let steps = [
        if release_events {
            terminal
                .backend_mut()
                .execute(PopKeyboardEnhancementFlags)
                .map(|_| ())
        } else {
            Ok(())
        },
        disable_raw_mode(),
        terminal
            .backend_mut()
            .execute(LeaveAlternateScreen)
            .map(|_| ()),
        terminal.show_cursor(),
    ];
    first_error(steps)
}

/// The first failure among already-run steps.
fn first_error(steps: impl IntoIterator<Item = io::Result<()>>) -> io::Result<()> {
    steps.into_iter().collect()
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    session: &mut Session,
    rng: &mut ChaCha8Rng,
    release_events: bool,
) -> anyhow::Result<()> {
    let frame_budget = session.tick_interval();
    let mut last_frame = Instant::now();

    while session.running {
        terminal.draw(|frame| ui::draw_ui(frame, session))?;

        // Wait out the rest of the frame, handling every key that arrives
        let mut timeout = frame_budget.saturating_sub(last_frame.elapsed());
        while event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if let Some(input) = map_key(key, release_events, &session.pigeon) {
                    process_input(session, input);
                }
            }
            timeout = frame_budget.saturating_sub(last_frame.elapsed());
        }

        let now = Instant::now();
        advance_session(session, now.duration_since(last_frame), rng);
        last_frame = now;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed(msg: &str) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::Other, msg.to_string()))
    }

    #[test]
    fn test_first_error_keeps_earliest_failure() {
        let err = first_error([Ok(()), failed("raw mode"), failed("cursor")]).unwrap_err();
        assert_eq!(err.to_string(), "raw mode");
    }

    #[test]
    fn test_first_error_all_ok() {
        assert!(first_error([Ok(()), Ok(()), Ok(())]).is_ok());
    }
}
