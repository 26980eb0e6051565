mod display;

use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::thread_rng;

use flappy_bird::compute::{apply_input, frame_view, init_session, restart, step};
use flappy_bird::config::GameConfig;
use flappy_bird::entities::GameStatus;
use flappy_bird::input::{InputEvent, KeyTracker};
use flappy_bird::timer::FrameTimer;

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.
///
/// Each frame: drain input → run the simulation steps the timer says are
/// owed → render. Input is applied before simulation, and simulation
/// finishes before the frame is drawn. The pause state of the session and
/// of the timer are kept in lockstep so paused time is never simulated.
fn game_loop<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    config: GameConfig,
    keyboard_enhanced: bool,
) -> std::io::Result<()> {
    let mut rng = thread_rng();
    let mut tracker = KeyTracker::new(keyboard_enhanced);
    let step_len = Duration::from_millis(config.tick_ms);

    let mut session = init_session(config);
    let mut timer = FrameTimer::new();
    timer.start();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(key) = ev else { continue };
            let Some(input) = tracker.translate(&key, frame) else {
                continue;
            };

            if input == InputEvent::Quit {
                log::info!(
                    "quit requested at score {} after {:.1?} of play",
                    session.score,
                    timer.ticks()
                );
                return Ok(());
            }
            if input.is_restart() && session.status == GameStatus::Ended {
                session = restart(&session);
                timer.start();
                continue;
            }

            session = apply_input(&session, &input);
            match session.status {
                GameStatus::Paused => timer.pause(),
                GameStatus::Running => timer.unpause(),
                GameStatus::Ended => {}
            }
        }

        // ── Fixed-step simulation ─────────────────────────────────────────────
        for _ in 0..timer.due_steps(step_len) {
            session = step(&session, &timer, &mut rng);
        }

        display::render(out, &frame_view(&session))?;

        let elapsed = frame_start.elapsed();
        if elapsed < step_len {
            thread::sleep(step_len - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// Optional first argument: path to a JSON config file.
fn load_config() -> std::io::Result<GameConfig> {
    match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => {
            let config = GameConfig::load(&path)?;
            log::info!("loaded config from {}", path.display());
            Ok(config)
        }
        None => Ok(GameConfig::default()),
    }
}

fn main() -> std::io::Result<()> {
    // Logs go to stderr; redirect it (`2>flappy.log`) to keep the screen clean.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    // Fail on a bad config before the terminal is touched.
    let config = load_config()?;

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back to hold-window
    // repeat detection in `KeyTracker`.
    let keyboard_enhanced = matches!(terminal::supports_keyboard_enhancement(), Ok(true))
        && out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();
    log::debug!("keyboard enhancement: {keyboard_enhanced}");

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(e) => {
                log::warn!("event thread stopped: {e}");
                break;
            }
        }
    });

    let result = game_loop(&mut out, &rx, config, keyboard_enhanced);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
