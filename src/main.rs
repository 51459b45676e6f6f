//! Terminal falling-block runner (default binary).
//!
//! One frame per tick: render, collect input until the tick is due, then advance
//! the game (gravity, then horizontal shift).

use std::env;
use std::fs::OpenOptions;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{error, info, Level};

use blockfall::core::{Clock, GameConfig, GameState, MonotonicClock};
use blockfall::input::{should_quit, InputHandler};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, ViewConfig, Viewport};
use blockfall::types::TICK_MS;

fn main() -> Result<()> {
    init_logging()?;

    let config = GameConfig::from_env();
    let view = GameView::new(ViewConfig::from_env());

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, &view);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        error!("exiting on error: {:#}", err);
    }
    result
}

/// Log to `BLOCKFALL_LOG_PATH` when set. The terminal itself is owned by the game.
fn init_logging() -> Result<()> {
    let Some(path) = env::var("BLOCKFALL_LOG_PATH")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
    else {
        return Ok(());
    };

    let level = env::var("BLOCKFALL_LOG_LEVEL")
        .ok()
        .and_then(|s| s.trim().parse::<Level>().ok())
        .unwrap_or(Level::INFO);

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path))?;

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &GameConfig, view: &GameView) -> Result<()> {
    let clock = MonotonicClock::new();
    let mut game = GameState::new(config);
    game.start(clock.now());
    info!(
        seed = config.seed,
        fall_speed = f64::from(config.fall_speed),
        key_release_events = term.key_release_events(),
        "game started"
    );

    let mut input = InputHandler::new();
    let mut fb = FrameBuffer::new(0, 0);
    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(game.board(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input until the next tick is due.
        loop {
            let timeout = tick_duration.saturating_sub(last_tick.elapsed());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Release && should_quit(key) {
                        info!(pieces = game.board().pieces().len(), "quit");
                        return Ok(());
                    }
                    input.handle_event(key, Instant::now());
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        last_tick = Instant::now();
        game.tick(clock.now(), input.held(last_tick));
    }
}
