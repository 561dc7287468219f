use crate::config;
use crate::disc::Disc;
use crate::types::{Bounds, Direction, Point, WHITE};

/// The single user-controlled disc. Drawn as an outline rather than a
/// filled circle; eliminates non-player discs on contact and is never
/// deflected by them.
#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub disc: Disc,
    pub max_velocity: f64,
    pub line_width: f32, // Render-only stroke width
    pub max_radius: Option<f64>,
}

impl Player {
    /// Spawn centered in the arena with zero velocity.
    pub fn new(bounds: Bounds, radius: f64, max_velocity: f64, max_radius: Option<f64>) -> Self {
        let center = Point {
            x: bounds.width / 2.0,
            y: bounds.height / 2.0,
        };
        Player {
            disc: Disc::new(center, Point::default(), radius, WHITE),
            max_velocity,
            line_width: config::PLAYER_LINE_WIDTH,
            max_radius,
        }
    }

    /// Nudge velocity one step in the given direction. Each axis clamps
    /// independently: once the component in that direction has reached
    /// `max_velocity`, further events are no-ops rather than a hard clamp
    /// of an unbounded value.
    pub fn accelerate(&mut self, direction: Direction) {
        let step = config::PLAYER_ACCEL_STEP;
        let vel = &mut self.disc.velocity;
        match direction {
            Direction::Up => {
                if -vel.y < self.max_velocity {
                    vel.y -= step;
                }
            }
            Direction::Down => {
                if vel.y < self.max_velocity {
                    vel.y += step;
                }
            }
            Direction::Left => {
                if -vel.x < self.max_velocity {
                    vel.x -= step;
                }
            }
            Direction::Right => {
                if vel.x < self.max_velocity {
                    vel.x += step;
                }
            }
        }
    }

    /// Grow the radius by `amount`, clamped to the configured cap.
    pub fn grow(&mut self, amount: f64) {
        if amount <= 0.0 {
            return;
        }
        let next = self.disc.radius + amount;
        self.disc.radius = match self.max_radius {
            Some(cap) => {
                if next >= cap && self.disc.radius < cap {
                    crate::debug_physics!("Player radius capped at {:.1}", cap);
                }
                next.min(cap)
            }
            None => next,
        };
    }
}
