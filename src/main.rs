//! Terminal lane runner (default binary).
//!
//! crossterm for input and a framebuffer-based renderer; the session is driven
//! on a fixed 16ms timestep.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use lane_runner::config::HostConfig;
use lane_runner::core::{GameSession, SessionSnapshot, SimpleRng};
use lane_runner::input::{should_quit, InputQueue};
use lane_runner::logging::{init_logging, LogObserver};
use lane_runner::term::{FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport};
use lane_runner::types::TICK_MS;

type Session = GameSession<SimpleRng, LogObserver>;

fn main() -> Result<()> {
    let config = HostConfig::from_env()?;
    let _guard = init_logging(&config.log_dir)?;

    let seed = config.seed.unwrap_or_else(clock_seed);
    tracing::info!(
        seed,
        track_length = config.session.track_length,
        jump_ms = config.session.jump_time_ms,
        log = %config.log_file().display(),
        "starting"
    );

    let mut session = Session::with_observer(
        config.session,
        SimpleRng::new(seed),
        LogObserver::new(),
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();

    let tally = session.observer();
    tracing::info!(
        games = tally.games(),
        wins = tally.wins(),
        best = tally.best_score(),
        "exiting"
    );
    if let Err(err) = &result {
        tracing::error!(error = %err, "terminal loop failed");
    }
    result
}

fn run(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    let view = GameView::default();
    let mut input = InputQueue::new();
    let mut throttle = RenderThrottle::default();
    let mut snap = SessionSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let started = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        session.snapshot_into(&mut snap);
        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, &snap) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            let ev = event::read()?;
            match &ev {
                Event::Key(key) if key.kind == KeyEventKind::Press && should_quit(*key) => {
                    return Ok(());
                }
                Event::Resize(..) => {
                    term.invalidate();
                    throttle.force();
                }
                _ => {
                    if let Some(action) = input.push_event(&ev) {
                        tracing::trace!(action = action.as_str(), "input");
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            for action in input.drain() {
                session.handle_action(action);
            }
            if let Some(outcome) = session.tick(TICK_MS) {
                tracing::debug!(?outcome, "jump finished");
            }
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
