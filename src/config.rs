//! Tunable constants for one game session.
//!
//! Every physics and spawn constant lives in `GameConfig` so the same
//! Bird/Pipe/collision code serves any variant of the game. A config can be
//! loaded from a JSON file; missing fields fall back to the defaults.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::geometry::Vector2;

/// How the collision test measures a box's extent along a tested axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SatPolicy {
    /// Exact projected radius, `|hw·(a0·L)| + |hh·(a1·L)|`.
    #[default]
    Textbook,
    /// Absolute projection of the single corner vector `hw·a0 + hh·a1`.
    /// Under-estimates the extent of a box tilted against the tested axis.
    Legacy,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Physics ──────────────────────────────────────────────────────────────
    /// Added to the bird's vertical velocity every simulation step.
    pub gravity_accel: f64,
    /// Vertical velocity the bird is set to on a flap (negative = up).
    pub flap_impulse: f64,
    /// Pixels a pipe moves left per simulation step.
    pub scroll_speed: f64,
    /// Notional forward speed used only to derive the bird's tilt.
    pub bird_horizontal_speed: f64,
    /// Tilt clamp, in degrees either side of level.
    pub max_tilt_degrees: f64,

    // ── Playfield ────────────────────────────────────────────────────────────
    pub playfield_width: f64,
    pub playfield_height: f64,

    // ── Bird ─────────────────────────────────────────────────────────────────
    /// Top-left corner of the bird at session start.
    pub bird_spawn: Vector2,
    pub bird_width: f64,
    pub bird_height: f64,

    // ── Pipes ────────────────────────────────────────────────────────────────
    pub pipe_width: f64,
    pub pipe_height: f64,
    /// Vertical opening between the top and bottom pipe of a pair.
    pub pipe_gap_height: f64,
    /// X coordinate new pairs appear at.
    pub spawn_x: f64,
    /// A candidate pair is spawned every `spawn_cadence` steps.
    pub spawn_cadence: u64,
    /// Candidates closer than this to the previous pair are discarded.
    pub min_spawn_interval: f64,
    /// Lowest y of the bottom pipe's top edge.
    pub gap_offset_min: f64,
    /// Random span added to `gap_offset_min`.
    pub gap_offset_range: f64,

    // ── Collision / timing ───────────────────────────────────────────────────
    pub sat_policy: SatPolicy,
    /// Length of one fixed simulation step in milliseconds.
    pub tick_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            gravity_accel: 0.1,
            flap_impulse: -5.0,
            scroll_speed: 10.0,
            bird_horizontal_speed: 5.0,
            max_tilt_degrees: 30.0,

            playfield_width: 800.0,
            playfield_height: 430.0,

            bird_spawn: Vector2::new(400.0, 215.0),
            bird_width: 57.0,
            bird_height: 40.0,

            pipe_width: 80.0,
            pipe_height: 460.0,
            pipe_gap_height: 150.0,
            spawn_x: 805.0,
            spawn_cadence: 1,
            min_spawn_interval: 300.0,
            gap_offset_min: 150.0,
            gap_offset_range: 250.0,

            sat_policy: SatPolicy::Textbook,
            tick_ms: 16,
        }
    }
}

impl GameConfig {
    /// Read a JSON config file. Fields that are absent keep their defaults.
    pub fn load(path: &Path) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> io::Result<Self> {
        let config: GameConfig = serde_json::from_str(text)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configs the simulation cannot run with.
    pub fn validate(&self) -> io::Result<()> {
        let finite = [
            ("gravity_accel", self.gravity_accel),
            ("flap_impulse", self.flap_impulse),
            ("scroll_speed", self.scroll_speed),
            ("max_tilt_degrees", self.max_tilt_degrees),
            ("bird_spawn.x", self.bird_spawn.x),
            ("bird_spawn.y", self.bird_spawn.y),
            ("spawn_x", self.spawn_x),
            ("gap_offset_min", self.gap_offset_min),
            ("gap_offset_range", self.gap_offset_range),
            ("min_spawn_interval", self.min_spawn_interval),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(invalid(format!("{name} must be a finite number")));
            }
        }

        let positive = [
            ("bird_horizontal_speed", self.bird_horizontal_speed),
            ("playfield_width", self.playfield_width),
            ("playfield_height", self.playfield_height),
            ("bird_width", self.bird_width),
            ("bird_height", self.bird_height),
            ("pipe_width", self.pipe_width),
            ("pipe_height", self.pipe_height),
            ("pipe_gap_height", self.pipe_gap_height),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(format!("{name} must be greater than zero")));
            }
        }

        if self.scroll_speed <= 0.0 {
            return Err(invalid("scroll_speed must be greater than zero".into()));
        }
        if self.max_tilt_degrees < 0.0 {
            return Err(invalid("max_tilt_degrees must not be negative".into()));
        }
        if self.gap_offset_range < 0.0 || self.min_spawn_interval < 0.0 {
            return Err(invalid(
                "gap_offset_range and min_spawn_interval must not be negative".into(),
            ));
        }
        if self.spawn_cadence == 0 {
            return Err(invalid("spawn_cadence must be at least 1".into()));
        }
        if self.tick_ms == 0 {
            return Err(invalid("tick_ms must be at least 1".into()));
        }
        Ok(())
    }
}

fn invalid(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, message)
}
