//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameSession` (and, where needed, an RNG handle) and returns a brand-new
//! `GameSession`. Side effects are limited to the injected RNG and logging.

use rand::Rng;

use crate::collision::first_hit;
use crate::config::GameConfig;
use crate::entities::{
    Bird, EndReason, FrameView, GameSession, GameStatus, Pipe, PipeKind, PipeSprite, Sprite,
};
use crate::input::InputEvent;
use crate::timer::Clock;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build a fresh session: bird at its spawn point, no pipes, score 0.
pub fn init_session(config: GameConfig) -> GameSession {
    log::info!(
        "new session: bird at ({}, {}), playfield {}x{}",
        config.bird_spawn.x,
        config.bird_spawn.y,
        config.playfield_width,
        config.playfield_height
    );
    GameSession {
        bird: Bird::spawn(&config),
        pipes: Vec::new(),
        score: 0,
        status: GameStatus::Running,
        end_reason: None,
        frame: 0,
        config,
    }
}

/// Start over with the same configuration.
pub fn restart(session: &GameSession) -> GameSession {
    log::info!("restarting after score {}", session.score);
    init_session(session.config.clone())
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

pub fn flap(session: &GameSession) -> GameSession {
    if session.status != GameStatus::Running {
        return session.clone();
    }
    let mut bird = session.bird.clone();
    bird.flap(&session.config);
    GameSession {
        bird,
        ..session.clone()
    }
}

/// Running ↔ Paused. A session that has ended stays ended.
pub fn toggle_pause(session: &GameSession) -> GameSession {
    let status = match session.status {
        GameStatus::Running => GameStatus::Paused,
        GameStatus::Paused => GameStatus::Running,
        GameStatus::Ended => return session.clone(),
    };
    log::debug!("status {:?} -> {:?}", session.status, status);
    GameSession {
        status,
        ..session.clone()
    }
}

/// Apply one input event. Repeats, key-ups and unknown keys are ignored;
/// quitting and restarting are the caller's business.
pub fn apply_input(session: &GameSession, event: &InputEvent) -> GameSession {
    if event.is_flap() {
        flap(session)
    } else if event.is_pause() {
        toggle_pause(session)
    } else {
        session.clone()
    }
}

// ── Per-frame tick (RNG is injected) ──────────────────────────────────────────────

/// Y of the bottom pipe's top edge for a new pair.
fn random_gap_bottom(config: &GameConfig, rng: &mut impl Rng) -> f64 {
    if config.gap_offset_range > 0.0 {
        config.gap_offset_min + rng.gen_range(0.0..config.gap_offset_range)
    } else {
        config.gap_offset_min
    }
}

/// Append a pair if this step is on the spawn cadence, then discard it again
/// if it landed too close to the previous pair.
fn spawn_pipes(pipes: &mut Vec<Pipe>, frame: u64, config: &GameConfig, rng: &mut impl Rng) {
    if frame % config.spawn_cadence.max(1) != 0 {
        return;
    }

    let previous_x = pipes.last().map(|p| p.position.x);
    let pair = Pipe::spawn_pair(config.spawn_x, random_gap_bottom(config, rng), config);
    pipes.extend(pair);

    if let Some(previous_x) = previous_x {
        if config.spawn_x - previous_x < config.min_spawn_interval {
            pipes.truncate(pipes.len() - 2);
            log::trace!(
                "frame {frame}: discarded pair only {:.1} from the previous one",
                config.spawn_x - previous_x
            );
            return;
        }
    }
    log::debug!("frame {frame}: spawned pipe pair at x={}", config.spawn_x);
}

/// Advance the simulation by one step. A session that is not Running is
/// returned unchanged. All randomness comes through `rng` so callers control
/// determinism (useful for tests with a seeded RNG).
pub fn tick(session: &GameSession, rng: &mut impl Rng) -> GameSession {
    if session.status != GameStatus::Running {
        return session.clone();
    }
    let config = &session.config;
    let frame = session.frame + 1;

    // ── 1. Bird ──────────────────────────────────────────────────────────────
    let mut bird = session.bird.clone();
    let in_bounds = bird.update(config);

    // ── 2. Scroll and prune pipes ────────────────────────────────────────────
    let mut pipes: Vec<Pipe> = session
        .pipes
        .iter()
        .filter_map(|p| {
            let mut p = p.clone();
            p.update().then_some(p)
        })
        .collect();

    // ── 3. Spawn ─────────────────────────────────────────────────────────────
    spawn_pipes(&mut pipes, frame, config, rng);

    // ── 4. Collision and bounds ──────────────────────────────────────────────
    let end_reason = if !in_bounds {
        Some(EndReason::OutOfBounds)
    } else if first_hit(&bird, &pipes, config.sat_policy).is_some() {
        Some(EndReason::Collision)
    } else {
        None
    };

    if let Some(reason) = end_reason {
        log::info!(
            "game over at frame {frame}: {:?}, final score {}",
            reason,
            session.score
        );
        return GameSession {
            bird,
            pipes,
            status: GameStatus::Ended,
            end_reason,
            frame,
            ..session.clone()
        };
    }

    // ── 5. Score: one point per bottom pipe the bird has fully cleared ───────
    let mut score_gain = 0;
    for pipe in pipes
        .iter_mut()
        .filter(|p| p.kind == PipeKind::Bottom && !p.passed)
    {
        if pipe.right_edge() < bird.position.x {
            pipe.passed = true;
            score_gain += 1;
        }
    }

    GameSession {
        bird,
        pipes,
        score: session.score + score_gain,
        frame,
        ..session.clone()
    }
}

/// Consult the timer once, then tick only if it is running and unpaused.
pub fn step(session: &GameSession, clock: &impl Clock, rng: &mut impl Rng) -> GameSession {
    if clock.is_running() && !clock.is_paused() {
        tick(session, rng)
    } else {
        session.clone()
    }
}

// ── Render snapshot ──────────────────────────────────────────────────────────

fn pipe_sprite(pipe: &Pipe) -> PipeSprite {
    PipeSprite {
        sprite: Sprite {
            position: pipe.position,
            width: pipe.width,
            height: pipe.height,
            rotation_angle: pipe.rotation_angle,
        },
        kind: pipe.kind,
    }
}

/// Everything the renderer needs for one frame, and nothing else.
pub fn frame_view(session: &GameSession) -> FrameView {
    let bird = &session.bird;
    FrameView {
        playfield_width: session.config.playfield_width,
        playfield_height: session.config.playfield_height,
        bird: Sprite {
            position: bird.position,
            width: bird.width,
            height: bird.height,
            rotation_angle: bird.rotation_angle,
        },
        pipes: session.pipes.iter().map(pipe_sprite).collect(),
        score: session.score,
        paused: session.status == GameStatus::Paused,
        ended: session.status == GameStatus::Ended,
        end_reason: session.end_reason,
    }
}
