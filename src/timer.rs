//! Pause-aware game timer and fixed-step scheduling.
//!
//! The simulation advances in whole fixed steps. `FrameTimer` measures play
//! time (wall-clock time minus time spent paused) and hands out the number
//! of steps owed since the last frame, so game speed does not depend on how
//! fast the terminal redraws.
//!
//! Every time-dependent method has an `_at` variant taking the current
//! `Instant`, which keeps the timer deterministic under test.

use std::time::{Duration, Instant};

/// Steps run in a single frame at most. Backlog beyond this is dropped so a
/// stall (terminal resize, suspended process) does not fast-forward the game.
pub const MAX_CATCH_UP_STEPS: u32 = 5;

/// What the orchestrator reads once per frame to decide whether to advance.
pub trait Clock {
    fn is_running(&self) -> bool;
    fn is_paused(&self) -> bool;
}

#[derive(Clone, Debug, Default)]
pub struct FrameTimer {
    /// Play-time origin. `None` while stopped; shifted forward on unpause.
    started_at: Option<Instant>,
    /// Play time frozen at the moment of pausing.
    paused_ticks: Option<Duration>,
    /// Play time already handed out as simulation steps.
    consumed: Duration,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    pub fn start_at(&mut self, now: Instant) {
        self.started_at = Some(now);
        self.paused_ticks = None;
        self.consumed = Duration::ZERO;
    }

    pub fn stop(&mut self) {
        *self = Self::default();
    }

    pub fn pause(&mut self) {
        self.pause_at(Instant::now());
    }

    pub fn pause_at(&mut self, now: Instant) {
        if let (Some(start), None) = (self.started_at, self.paused_ticks) {
            self.paused_ticks = Some(now.saturating_duration_since(start));
        }
    }

    pub fn unpause(&mut self) {
        self.unpause_at(Instant::now());
    }

    pub fn unpause_at(&mut self, now: Instant) {
        if let (Some(_), Some(paused)) = (self.started_at, self.paused_ticks) {
            self.started_at = Some(now.checked_sub(paused).unwrap_or(now));
            self.paused_ticks = None;
        }
    }

    /// Flip between paused and unpaused.
    pub fn toggle_pause_at(&mut self, now: Instant) {
        if self.paused_ticks.is_some() {
            self.unpause_at(now);
        } else {
            self.pause_at(now);
        }
    }

    /// Play time elapsed, excluding pauses. Zero while stopped.
    pub fn ticks_at(&self, now: Instant) -> Duration {
        match (self.started_at, self.paused_ticks) {
            (None, _) => Duration::ZERO,
            (Some(_), Some(paused)) => paused,
            (Some(start), None) => now.saturating_duration_since(start),
        }
    }

    pub fn ticks(&self) -> Duration {
        self.ticks_at(Instant::now())
    }

    /// Number of whole `step`s owed since the previous call, at most
    /// `MAX_CATCH_UP_STEPS`. Returns 0 while stopped or paused.
    pub fn due_steps_at(&mut self, now: Instant, step: Duration) -> u32 {
        if !self.is_running() || self.is_paused() || step.is_zero() {
            return 0;
        }
        let owed = self.ticks_at(now).saturating_sub(self.consumed);
        let steps = (owed.as_nanos() / step.as_nanos()) as u64;
        self.consumed += step * steps.min(u32::MAX as u64) as u32;

        if steps > MAX_CATCH_UP_STEPS as u64 {
            log::debug!(
                "dropping {} simulation steps after a stall",
                steps - MAX_CATCH_UP_STEPS as u64
            );
            MAX_CATCH_UP_STEPS
        } else {
            steps as u32
        }
    }

    pub fn due_steps(&mut self, step: Duration) -> u32 {
        self.due_steps_at(Instant::now(), step)
    }
}

impl Clock for FrameTimer {
    fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    fn is_paused(&self) -> bool {
        self.started_at.is_some() && self.paused_ticks.is_some()
    }
}
