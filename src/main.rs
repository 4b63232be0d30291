//! Terminal runner (default binary).
//!
//! One frame per `frame_ms`: pending key presses are applied to the session,
//! the session advances by the measured frame time, and the snapshot is drawn.
//! The loop keeps running after game over so `R` can restart in place.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event};
use log::info;

use blockfall::config::{init_logging, Args, RunConfig};
use blockfall::core::{GameSession, GameSnapshot, InstantTicks, RandomPieces};
use blockfall::input::{map_key, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = RunConfig::try_from(Args::parse())?;
    init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &RunConfig) -> Result<()> {
    let source = match config.seed {
        Some(seed) => RandomPieces::seeded(seed),
        None => RandomPieces::from_entropy(),
    };
    let mut session = GameSession::with_source(source);
    info!("starting game (seed {:?})", config.seed);

    let view = GameView::new(config.cell_width);
    let frame = Duration::from_millis(u64::from(config.frame_ms));
    let mut ticks = InstantTicks::new();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let frame_start = Instant::now();

        // Drain input until the frame deadline.
        while let Some(timeout) = frame.checked_sub(frame_start.elapsed()) {
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        info!("quit with score {}", session.score());
                        return Ok(());
                    }
                    if let Some(action) = map_key(key) {
                        session.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        session.run_frame(&mut ticks);
        if let Some(event) = session.take_last_event() {
            if event.lines_cleared > 0 {
                info!(
                    "cleared {} rows (+{}), score {}",
                    event.lines_cleared,
                    event.line_clear_score,
                    session.score()
                );
            }
        }

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;
    }
}
