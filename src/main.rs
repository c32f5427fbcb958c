//! Terminal 2048 runner (default binary).
//!
//! Input is read on a background thread and queued; this loop owns the game
//! state, applies one queued action at a time, and redraws when the visible
//! state changes or the idle interval elapses.

use std::fs::File;
use std::path::PathBuf;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tui_2048p::core::GameState;
use tui_2048p::input::{handle_key_event, spawn_reader, InputEvent};
use tui_2048p::term::{FrameBuffer, GameView, RedrawPolicy, TerminalRenderer, Viewport};
use tui_2048p::types::{GameAction, IDLE_REDRAW_MS};

#[derive(Parser, Debug)]
#[command(name = "tui-2048p")]
#[command(version, about = "Play 2048 with special P tiles in the terminal")]
struct Args {
    /// Seed for tile spawning (defaults to one derived from the clock)
    #[arg(long)]
    seed: Option<u32>,

    /// Redraw at least this often while idle, in milliseconds
    #[arg(long, default_value_t = IDLE_REDRAW_MS)]
    idle_ms: u64,

    /// Tracing filter, e.g. "info", "debug"
    #[arg(long, default_value = "info")]
    log: String,

    /// Write logs to this file (the terminal UI owns stdout)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let seed = args.seed.unwrap_or_else(seed_from_clock);
    info!(seed, idle_ms = args.idle_ms, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, seed, args.idle_ms);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(args: &Args) -> Result<()> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(args.log.clone()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .init();
    Ok(())
}

fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32 ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, seed: u32, idle_ms: u64) -> Result<()> {
    let mut game = GameState::new(seed);
    let events = spawn_reader().context("failed to start input reader")?;

    let view = GameView::default();
    let mut policy = RedrawPolicy::new(idle_ms);
    let mut fb = FrameBuffer::new(0, 0);
    let started = Instant::now();
    let idle = Duration::from_millis(idle_ms.max(1));

    loop {
        let snap = game.snapshot();
        let now_ms = started.elapsed().as_millis() as u64;
        if policy.should_redraw(now_ms, snap.fingerprint()) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw(&fb)?;
        }

        match events.recv_timeout(idle) {
            Ok(InputEvent::Key(key)) => {
                let Some(action) = handle_key_event(key) else {
                    continue;
                };
                if action == GameAction::Quit {
                    info!(
                        score = game.score(),
                        high_score = game.high_score(),
                        "quit"
                    );
                    return Ok(());
                }
                let changed = game.apply_action(action);
                debug!(action = action.as_str(), changed, "action");
            }
            Ok(InputEvent::Resize(w, h)) => {
                debug!(width = w, height = h, "resize");
                term.invalidate();
                policy.invalidate();
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                info!("input closed");
                return Ok(());
            }
        }
    }
}
