//! Terminal word game runner (default binary).
//!
//! crossterm for input and the framebuffer renderer from `wordris-term`
//! for output. Configuration comes from `WORDRIS_*` environment variables.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use log::{error, info};

use wordris::core::SimpleRng;
use wordris::engine::{Controller, Speaker};
use wordris::input::{is_fast_fall_key, map_key, should_quit, FastFallHold};
use wordris::term::{FrameBuffer, GameView, TerminalRenderer, ToastQueue, Viewport};
use wordris::types::{Command, TICK_MS};
use wordris::{logging, resolve_seed, speaker_for, AppConfig};

type Game = Controller<SimpleRng, ToastQueue, Box<dyn Speaker>>;

fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    if let Some(path) = &config.log_path {
        logging::init_file_logger(path)?;
    }

    let seed = resolve_seed(&config);
    info!(
        "starting seed={} speed={} sound={}",
        seed,
        config.speed.as_str(),
        config.sound_enabled
    );

    let mut game: Game = Controller::new(SimpleRng::new(seed), ToastQueue::new(), speaker_for(&config))
        .with_speed(config.speed)
        .with_sound(config.sound_enabled);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        error!("fatal: {:#}", e);
    }
    result
}

fn run(term: &mut TerminalRenderer, game: &mut Game) -> Result<()> {
    let mut view = GameView::default();
    let mut hold = if term.reports_key_release() {
        FastFallHold::new().without_release_timeout()
    } else {
        FastFallHold::new()
    };
    let mut snap = game.snapshot();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, game.notifier(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && should_quit(key) {
                        return Ok(());
                    }
                    handle_key(key, game, &mut view, &mut hold);
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);

            if let Some(command) = hold.update(elapsed_ms) {
                game.apply(command);
            }
            game.advance(elapsed_ms);
            game.notifier_mut().update(elapsed_ms);
        }
    }
}

fn handle_key(key: KeyEvent, game: &mut Game, view: &mut GameView, hold: &mut FastFallHold) {
    if is_fast_fall_key(key.code) {
        let command = match key.kind {
            KeyEventKind::Press => hold.press(),
            KeyEventKind::Repeat => hold.repeat(),
            KeyEventKind::Release => hold.release(),
        };
        if let Some(command) = command {
            game.apply(command);
        }
        return;
    }

    let Some(command) = map_key(key) else {
        return;
    };
    match (key.kind, command) {
        (KeyEventKind::Release, _) => {}
        // Held arrows keep steering; other keys act once per press.
        (KeyEventKind::Repeat, Command::Move(_)) => {
            game.apply(command);
        }
        (KeyEventKind::Repeat, _) => {}
        (KeyEventKind::Press, Command::ToggleHelp) => view.toggle_help(),
        (KeyEventKind::Press, command) => {
            game.apply(command);
        }
    }
}
