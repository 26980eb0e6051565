//! Pipe scrolling and pair construction.

use crate::config::GameConfig;
use crate::entities::{Pipe, PipeKind};
use crate::geometry::{OrientedBox, Vector2};

impl PipeKind {
    pub fn rotation_angle(self) -> f64 {
        match self {
            PipeKind::Bottom => 0.0,
            PipeKind::Top => 180.0,
        }
    }
}

impl Pipe {
    pub fn new(kind: PipeKind, position: Vector2, config: &GameConfig) -> Self {
        Self {
            position,
            width: config.pipe_width,
            height: config.pipe_height,
            scroll_speed: config.scroll_speed,
            rotation_angle: kind.rotation_angle(),
            kind,
            passed: false,
        }
    }

    /// A bottom/top pair at `x`. The bottom pipe's top edge sits at
    /// `gap_bottom` and the top pipe ends `pipe_gap_height` above it.
    pub fn spawn_pair(x: f64, gap_bottom: f64, config: &GameConfig) -> [Pipe; 2] {
        let gap_top = gap_bottom - config.pipe_gap_height;
        [
            Pipe::new(PipeKind::Bottom, Vector2::new(x, gap_bottom), config),
            Pipe::new(
                PipeKind::Top,
                Vector2::new(x, gap_top - config.pipe_height),
                config,
            ),
        ]
    }

    /// Scroll one step left. Returns `false` once the pipe's right edge has
    /// reached the left boundary, at which point it should be dropped.
    pub fn update(&mut self) -> bool {
        self.position.x -= self.scroll_speed;
        self.right_edge() > 0.0
    }

    pub fn right_edge(&self) -> f64 {
        self.position.x + self.width
    }

    pub fn size(&self) -> Vector2 {
        Vector2::new(self.width, self.height)
    }

    pub fn compute_box(&self) -> OrientedBox {
        OrientedBox::from_rect(self.position, self.size(), self.rotation_angle)
    }
}
