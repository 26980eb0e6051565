//! Bird flight dynamics.
//!
//! Fixed-timestep integration: each call to `update` is one simulation step,
//! and gravity is never scaled by wall-clock time.

use crate::config::GameConfig;
use crate::entities::Bird;
use crate::geometry::{OrientedBox, Vector2};

impl Bird {
    /// A level, motionless bird at the configured spawn point.
    pub fn spawn(config: &GameConfig) -> Self {
        Self {
            position: config.bird_spawn,
            vertical_velocity: 0.0,
            rotation_angle: 0.0,
            width: config.bird_width,
            height: config.bird_height,
        }
    }

    /// Advance one step. Returns `false` when the bird has left the
    /// playfield through the top or bottom edge.
    pub fn update(&mut self, config: &GameConfig) -> bool {
        self.vertical_velocity += config.gravity_accel;
        self.position.y += self.vertical_velocity;

        let tilt = self
            .vertical_velocity
            .atan2(config.bird_horizontal_speed)
            .to_degrees();
        self.rotation_angle = tilt.clamp(-config.max_tilt_degrees, config.max_tilt_degrees);

        !(self.position.y < 0.0 || self.position.y + self.height > config.playfield_height)
    }

    /// Replace the current velocity with the upward flap impulse.
    pub fn flap(&mut self, config: &GameConfig) {
        self.vertical_velocity = config.flap_impulse;
    }

    pub fn size(&self) -> Vector2 {
        Vector2::new(self.width, self.height)
    }

    pub fn compute_box(&self) -> OrientedBox {
        OrientedBox::from_rect(self.position, self.size(), self.rotation_angle)
    }
}
