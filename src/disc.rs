use crate::types::{Bounds, Point, Rgb};

/// A simulated circular entity. Eliminated discs stay in the collection as
/// tombstones (`alive == false`) so indices remain stable for the rest of
/// the frame; they are skipped by motion, collision, and rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disc {
    pub position: Point,
    pub velocity: Point,
    pub radius: f64,
    pub color: Rgb,
    pub alive: bool,
}

impl Disc {
    pub fn new(position: Point, velocity: Point, radius: f64, color: Rgb) -> Self {
        Disc {
            position,
            velocity,
            radius,
            color,
            alive: true,
        }
    }

    /// One Euler step. The timestep is a fixed single unit per frame, so
    /// simulation speed is tied to the frame rate.
    pub fn advance(&mut self) {
        self.position.x += self.velocity.x;
        self.position.y += self.velocity.y;
    }

    /// Reflect velocity off any arena wall the disc's edge has crossed.
    /// Axes are handled independently; a corner hit reflects both in the
    /// same frame. A component is only negated while it still points into
    /// the wall, so a disc stranded past the boundary on a slow frame
    /// cannot flip sign every frame and jitter in place.
    pub fn reflect(&mut self, bounds: Bounds) {
        if self.position.x - self.radius <= 0.0 && self.velocity.x < 0.0 {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.x + self.radius >= bounds.width && self.velocity.x > 0.0 {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y - self.radius <= 0.0 && self.velocity.y < 0.0 {
            self.velocity.y = -self.velocity.y;
        }
        if self.position.y + self.radius >= bounds.height && self.velocity.y > 0.0 {
            self.velocity.y = -self.velocity.y;
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn kill(&mut self) {
        self.alive = false;
    }

    /// Center distance within the sum of radii counts as contact
    /// (inclusive, matching the detection condition `dist <= rA + rB`).
    pub fn overlaps(&self, other: &Disc) -> bool {
        self.position.distance(&other.position) <= self.radius + other.radius
    }
}
