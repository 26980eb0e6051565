//! All game entity types. Pure data, no logic.
//!
//! Motion lives in `bird.rs` and `pipe.rs`; per-frame orchestration lives in
//! `compute.rs`.

use crate::config::GameConfig;
use crate::geometry::Vector2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Paused,
    /// Terminal for physics. Rendering and quit handling carry on.
    Ended,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndReason {
    /// The bird left the playfield through the top or bottom edge.
    OutOfBounds,
    /// The bird's box overlapped a pipe's box.
    Collision,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipeKind {
    /// Rises from the floor, drawn upright (0°).
    Bottom,
    /// Hangs from the ceiling, drawn inverted (180°).
    Top,
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Bird {
    /// Top-left corner of the unrotated sprite.
    pub position: Vector2,
    /// Pixels per step, positive = downward.
    pub vertical_velocity: f64,
    /// Nose tilt in degrees, positive = nose down.
    pub rotation_angle: f64,
    pub width: f64,
    pub height: f64,
}

// ── Obstacles ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Pipe {
    /// Top-left corner of the unrotated sprite.
    pub position: Vector2,
    pub width: f64,
    pub height: f64,
    pub scroll_speed: f64,
    /// Static: 0° for a bottom pipe, 180° for a top pipe.
    pub rotation_angle: f64,
    pub kind: PipeKind,
    /// Set once the bird has flown past this pipe and it has been scored.
    pub passed: bool,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// One play-through. Cloneable so the pure update functions in `compute.rs`
/// can return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameSession {
    pub config: GameConfig,
    pub bird: Bird,
    /// Active pipes in spawn order. Each pair is pushed bottom then top, so
    /// the field is also ordered left to right.
    pub pipes: Vec<Pipe>,
    pub score: u32,
    pub status: GameStatus,
    pub end_reason: Option<EndReason>,
    /// Simulation steps taken while Running.
    pub frame: u64,
}

// ── Render contract ───────────────────────────────────────────────────────────

/// What the renderer needs to draw one entity: no physics state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    pub position: Vector2,
    pub width: f64,
    pub height: f64,
    pub rotation_angle: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PipeSprite {
    pub sprite: Sprite,
    pub kind: PipeKind,
}

/// Read-only snapshot of a session for one rendered frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameView {
    pub playfield_width: f64,
    pub playfield_height: f64,
    pub bird: Sprite,
    pub pipes: Vec<PipeSprite>,
    pub score: u32,
    pub paused: bool,
    pub ended: bool,
    pub end_reason: Option<EndReason>,
}
