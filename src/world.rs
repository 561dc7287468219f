use crate::config::{self, WorldConfig};
use crate::disc::Disc;
use crate::error::WorldError;
use crate::player::Player;
use crate::types::{Bounds, Point, Rgb};
use ::rand::prelude::*;
use log::info;

/// Owns everything that exists for one session: the disc collection, the
/// player, the score/round counters, the arena bounds, and the RNG used
/// for population. Resets are always wholesale; there is no partial
/// teardown.
pub struct World {
    pub discs: Vec<Disc>,
    pub player: Player,
    pub score: u32,
    pub round: u32,
    pub bounds: Bounds,
    pub config: WorldConfig,
    rng: StdRng,
}

impl World {
    /// Create a fully populated world. A fixed `seed` makes placement,
    /// velocities, radii, and colors reproducible run to run.
    pub fn new(config: WorldConfig, bounds: Bounds, seed: Option<u64>) -> Result<Self, WorldError> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut world = World {
            discs: Vec::with_capacity(config.disc_count as usize),
            player: Self::spawn_player(&config, bounds),
            score: 0,
            round: 1,
            bounds,
            config,
            rng,
        };
        world.populate()?;
        Ok(world)
    }

    /// Wholesale reset: fresh centered player, fresh random population,
    /// score back to zero. `advance_round` distinguishes a won round from
    /// a resize-triggered rebuild, which keeps the round counter.
    pub fn reset(&mut self, bounds: Bounds, advance_round: bool) -> Result<(), WorldError> {
        self.bounds = bounds;
        if advance_round {
            self.round += 1;
        }
        self.score = 0;
        self.player = Self::spawn_player(&self.config, bounds);
        self.populate()
    }

    /// All eliminations for the round have been scored.
    pub fn round_won(&self) -> bool {
        self.score as usize == self.discs.len()
    }

    pub fn living_discs(&self) -> usize {
        self.discs.iter().filter(|d| d.alive).count()
    }

    fn spawn_player(config: &WorldConfig, bounds: Bounds) -> Player {
        let radius = bounds.width * config::PLAYER_RAD_PROP / 2.0;
        let max_radius =
            (config.growth > 0.0).then(|| bounds.width * config::PLAYER_MAX_RADIUS_PROP);
        Player::new(bounds, radius, config::PLAYER_MAX_VEL, max_radius)
    }

    fn populate(&mut self) -> Result<(), WorldError> {
        let cfg = self.config;
        if cfg.disc_count == 0 {
            return Err(WorldError::EmptyPopulation);
        }
        if !(cfg.rad_min > 0.0 && cfg.rad_min <= cfg.rad_max) {
            return Err(WorldError::InvalidRadiusRange {
                min: cfg.rad_min,
                max: cfg.rad_max,
            });
        }
        // Checked up front so the placement loop never sees an empty range.
        if cfg.rad_max * 2.0 >= self.bounds.width || cfg.rad_max * 2.0 >= self.bounds.height {
            return Err(WorldError::DiscTooLarge {
                radius: cfg.rad_max,
                width: self.bounds.width,
                height: self.bounds.height,
            });
        }

        self.discs.clear();
        for index in 0..cfg.disc_count {
            let disc = self.spawn_disc(index)?;
            self.discs.push(disc);
        }
        info!(
            "Populated {} discs in a {:.0}x{:.0} arena (round {})",
            self.discs.len(),
            self.bounds.width,
            self.bounds.height,
            self.round
        );
        Ok(())
    }

    fn spawn_disc(&mut self, index: u32) -> Result<Disc, WorldError> {
        let radius = self.rng.gen_range(self.config.rad_min..=self.config.rad_max);
        for _ in 0..config::MAX_PLACEMENT_ATTEMPTS {
            let position = Point {
                x: self.rng.gen_range(radius..=self.bounds.width - radius),
                y: self.rng.gen_range(radius..=self.bounds.height - radius),
            };
            // A disc spawned in contact with the player would hand over a
            // free elimination on the round's first frame.
            if position.distance(&self.player.disc.position) <= radius + self.player.disc.radius {
                continue;
            }
            let velocity = Point {
                x: self.random_velocity(),
                y: self.random_velocity(),
            };
            let color = Rgb {
                r: self.rng.gen_range(0..=255u8),
                g: self.rng.gen_range(0..=255u8),
                b: self.rng.gen_range(0..=255u8),
            };
            return Ok(Disc::new(position, velocity, radius, color));
        }
        Err(WorldError::PlacementFailed {
            index,
            attempts: config::MAX_PLACEMENT_ATTEMPTS,
        })
    }

    /// Per-axis component in [-range, range], nudged off zero so no disc
    /// spawns at rest on an axis.
    fn random_velocity(&mut self) -> f64 {
        let v = self
            .rng
            .gen_range(-self.config.vel_range..=self.config.vel_range);
        if v == 0.0 { 1.0 } else { v }
    }
}
