use crate::collision;
use crate::config::{self, WorldConfig};
use crate::error::WorldError;
use crate::render::Renderer;
use crate::types::{Bounds, Direction};
use crate::world::World;
use log::info;
use macroquad::prelude::{
    KeyCode, get_time, is_key_pressed, next_frame, screen_height, screen_width,
};

/// Frame driver phase. Only `Running` ticks the simulation; the other two
/// phases are how frame scheduling is "cancelled" on win and on resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// Normal simulation.
    Running,
    /// Round complete; waiting for the player to acknowledge before the
    /// world is rebuilt.
    Won,
    /// Window size changed; a full reset fires at `deadline` (seconds on
    /// the host clock) unless the size changes again first.
    ResizePending { deadline: f64 },
}

/// The frame driver: owns the world and the phase machine, applies the
/// per-frame update ordering, and runs the macroquad render loop.
pub struct Game {
    pub world: World,
    pub phase: Phase,
    last_bounds: Bounds,
}

impl Game {
    pub fn new(config: WorldConfig, bounds: Bounds, seed: Option<u64>) -> Result<Self, WorldError> {
        Ok(Game {
            world: World::new(config, bounds, seed)?,
            phase: Phase::Running,
            last_bounds: bounds,
        })
    }

    /// Advance the simulation by one frame.
    ///
    /// Every living disc, in collection order: advance, reflect off the
    /// walls, resolve disc partners, then player contact. The player then
    /// does the same pass, where every contact is an elimination.
    /// Resolution is sequential and immediate: a velocity swapped by an
    /// earlier pairing is visible to later pairings in the same frame
    /// (preserved source behavior, not snapshotted physics).
    pub fn tick(&mut self) {
        let world = &mut self.world;

        for i in 0..world.discs.len() {
            if !world.discs[i].alive {
                continue;
            }
            world.discs[i].advance();
            world.discs[i].reflect(world.bounds);

            let partners = collision::partners_of(&world.discs[i], &world.discs, Some(i));
            for j in partners {
                collision::swap_velocities(&mut world.discs, i, j);
            }
            // Contact with the player eliminates this disc no matter whose
            // update pass detects it.
            if world.discs[i].overlaps(&world.player.disc) {
                collision::eliminate(
                    &mut world.discs[i],
                    &mut world.player,
                    &mut world.score,
                    world.config.growth,
                );
            }
        }

        world.player.disc.advance();
        world.player.disc.reflect(world.bounds);
        let partners = collision::partners_of(&world.player.disc, &world.discs, None);
        for j in partners {
            collision::eliminate(
                &mut world.discs[j],
                &mut world.player,
                &mut world.score,
                world.config.growth,
            );
        }
    }

    /// Resize debounce: any change in the observed window size halts
    /// ticking and (re)arms the reset deadline. The world is rebuilt only
    /// once the size has been stable for the debounce window, so a drag
    /// resize does not trigger a re-init storm.
    pub fn observe_bounds(&mut self, bounds: Bounds, now: f64) {
        if bounds != self.last_bounds {
            self.last_bounds = bounds;
            let deadline = now + config::RESIZE_DEBOUNCE;
            crate::debug_round!(
                "Window now {:.0}x{:.0}; reset armed for t={:.2}",
                bounds.width,
                bounds.height,
                deadline
            );
            self.phase = Phase::ResizePending { deadline };
        }
    }

    /// Fire the pending resize reset once its deadline has passed.
    pub fn settle_resize(&mut self, now: f64) -> Result<(), WorldError> {
        if let Phase::ResizePending { deadline } = self.phase {
            if now >= deadline {
                info!(
                    "Window settled at {:.0}x{:.0}; rebuilding world",
                    self.last_bounds.width, self.last_bounds.height
                );
                self.world.reset(self.last_bounds, false)?;
                self.phase = Phase::Running;
            }
        }
        Ok(())
    }

    fn check_win(&mut self) {
        if self.world.round_won() {
            info!(
                "Round {} won with score {}",
                self.world.round, self.world.score
            );
            self.phase = Phase::Won;
        }
    }

    /// The win notification has been acknowledged; rebuild for the next
    /// round.
    pub fn acknowledge_win(&mut self) -> Result<(), WorldError> {
        self.world.reset(self.last_bounds, true)?;
        self.phase = Phase::Running;
        Ok(())
    }

    /// Input only ever touches the player's velocity, and only here,
    /// before the frame's simulation pass.
    fn poll_input(&mut self) {
        let bindings = [
            (KeyCode::W, KeyCode::Up, Direction::Up),
            (KeyCode::S, KeyCode::Down, Direction::Down),
            (KeyCode::A, KeyCode::Left, Direction::Left),
            (KeyCode::D, KeyCode::Right, Direction::Right),
        ];
        for (key, alt, direction) in bindings {
            if is_key_pressed(key) || is_key_pressed(alt) {
                self.world.player.accelerate(direction);
            }
        }
    }

    fn announcement(&self) -> Option<String> {
        match self.phase {
            Phase::Won => Some(format!(
                "Round {} cleared! Press Space to continue",
                self.world.round
            )),
            _ => None,
        }
    }

    /// Run the main game loop using the provided renderer. One full
    /// simulation update completes per rendered frame; `next_frame()` is
    /// the suspension point back to the display scheduler.
    pub async fn run(&mut self, renderer: &mut Renderer) -> Result<(), WorldError> {
        info!("Starting main loop...");

        loop {
            if is_key_pressed(KeyCode::Escape) {
                break;
            }

            let now = get_time();
            let bounds = Bounds {
                width: screen_width() as f64,
                height: screen_height() as f64,
            };
            self.observe_bounds(bounds, now);

            match self.phase {
                Phase::Running => {
                    self.poll_input();
                    self.tick();
                    self.check_win();
                }
                Phase::Won => {
                    if is_key_pressed(KeyCode::Space) || is_key_pressed(KeyCode::Enter) {
                        self.acknowledge_win()?;
                    }
                }
                Phase::ResizePending { .. } => {
                    self.settle_resize(now)?;
                }
            }

            renderer.draw_frame(&self.world, self.announcement().as_deref());
            next_frame().await;
        }

        info!("Exiting Disc Pop.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disc::Disc;
    use crate::types::{Point, WHITE};
    use assert_approx_eq::assert_approx_eq;

    const BOUNDS: Bounds = Bounds {
        width: 800.0,
        height: 600.0,
    };

    fn game(disc_count: u32, seed: u64) -> Game {
        let cfg = WorldConfig {
            disc_count,
            ..Default::default()
        };
        Game::new(cfg, BOUNDS, Some(seed)).unwrap()
    }

    fn still_disc(x: f64, y: f64, radius: f64) -> Disc {
        Disc::new(Point { x, y }, Point::default(), radius, WHITE)
    }

    #[test]
    fn test_tick_advances_living_discs() {
        let mut game = game(3, 1);
        // Replace the random population with a single known disc far from
        // everything else.
        game.world.discs = vec![Disc::new(
            Point { x: 100.0, y: 100.0 },
            Point { x: 4.0, y: -2.0 },
            10.0,
            WHITE,
        )];
        game.tick();
        assert_approx_eq!(game.world.discs[0].position.x, 104.0);
        assert_approx_eq!(game.world.discs[0].position.y, 98.0);
    }

    #[test]
    fn test_tick_skips_dead_discs() {
        let mut game = game(3, 1);
        let mut dead = still_disc(100.0, 100.0, 10.0);
        dead.velocity = Point { x: 5.0, y: 5.0 };
        dead.kill();
        game.world.discs = vec![dead];
        game.tick();
        assert_approx_eq!(game.world.discs[0].position.x, 100.0);
        assert_approx_eq!(game.world.discs[0].position.y, 100.0);
    }

    #[test]
    fn test_sequential_resolution_uses_updated_velocities() {
        let mut game = game(2, 1);
        // Two overlapping discs away from walls and player. Disc 0 is at
        // rest so positions stay overlapped through both passes; disc 1
        // carries a marker velocity. Disc 0's pass swaps the pair; disc
        // 1's own pass then sees the already-updated velocities and swaps
        // them straight back. A snapshotted resolver would have left the
        // pair swapped once.
        let a = still_disc(100.0, 100.0, 10.0);
        let mut b = still_disc(112.0, 100.0, 10.0);
        let marker = Point { x: 9.0, y: -3.0 };
        b.velocity = marker;
        // Disc 1 must not move during its pass either, or the pair could
        // separate before the second resolution; the swap from disc 0's
        // pass guarantees that (disc 1 advances with disc 0's rest
        // velocity).
        game.world.discs = vec![a, b];

        game.tick();
        assert_eq!(game.world.discs[0].velocity, Point::default());
        assert_eq!(game.world.discs[1].velocity, marker);
    }

    #[test]
    fn test_player_contact_eliminates_and_scores() {
        let mut game = game(2, 1);
        let player_pos = game.world.player.disc.position;
        game.world.discs = vec![
            still_disc(player_pos.x, player_pos.y, 10.0),
            still_disc(50.0, 50.0, 10.0),
        ];
        game.tick();
        assert!(!game.world.discs[0].alive);
        assert!(game.world.discs[1].alive);
        assert_eq!(game.world.score, 1);
        // Player velocity unaffected by the contact.
        assert_eq!(game.world.player.disc.velocity, Point::default());
    }

    #[test]
    fn test_eliminated_disc_stays_out_of_later_frames() {
        let mut game = game(1, 1);
        let player_pos = game.world.player.disc.position;
        game.world.discs = vec![still_disc(player_pos.x, player_pos.y, 10.0)];
        game.tick();
        assert_eq!(game.world.score, 1);
        game.tick();
        game.tick();
        // Dead disc is never re-eliminated and never moves again.
        assert_eq!(game.world.score, 1);
        assert_eq!(game.world.living_discs(), 0);
    }

    #[test]
    fn test_win_then_ack_resets_world() {
        let mut game = game(3, 9);
        let player_pos = game.world.player.disc.position;
        game.world.discs = vec![
            still_disc(player_pos.x, player_pos.y, 10.0),
            still_disc(player_pos.x + 5.0, player_pos.y, 10.0),
            still_disc(player_pos.x, player_pos.y + 5.0, 10.0),
        ];
        game.tick();
        assert_eq!(game.world.score, 3);
        game.check_win();
        assert_eq!(game.phase, Phase::Won);

        game.acknowledge_win().unwrap();
        assert_eq!(game.phase, Phase::Running);
        assert_eq!(game.world.round, 2);
        assert_eq!(game.world.score, 0);
        assert_eq!(game.world.living_discs(), 3);
    }

    #[test]
    fn test_score_is_monotonic_over_many_frames() {
        let mut game = game(10, 11);
        let mut last = 0;
        for _ in 0..200 {
            game.tick();
            assert!(game.world.score >= last);
            last = game.world.score;
            if game.world.round_won() {
                break;
            }
        }
    }

    #[test]
    fn test_resize_arms_and_rearms_debounce() {
        let mut game = game(3, 1);
        let bigger = Bounds {
            width: 1000.0,
            height: 700.0,
        };
        game.observe_bounds(bigger, 10.0);
        assert_eq!(
            game.phase,
            Phase::ResizePending {
                deadline: 10.0 + config::RESIZE_DEBOUNCE
            }
        );

        // A second change while pending pushes the deadline back.
        let even_bigger = Bounds {
            width: 1100.0,
            height: 700.0,
        };
        game.observe_bounds(even_bigger, 10.1);
        assert_eq!(
            game.phase,
            Phase::ResizePending {
                deadline: 10.1 + config::RESIZE_DEBOUNCE
            }
        );

        // An unchanged size does not re-arm.
        game.observe_bounds(even_bigger, 10.15);
        assert_eq!(
            game.phase,
            Phase::ResizePending {
                deadline: 10.1 + config::RESIZE_DEBOUNCE
            }
        );
    }

    #[test]
    fn test_resize_reset_fires_once_after_window() {
        let mut game = game(3, 1);
        let bigger = Bounds {
            width: 1000.0,
            height: 700.0,
        };
        game.observe_bounds(bigger, 10.0);

        // Too early: still pending, world untouched.
        game.settle_resize(10.1).unwrap();
        assert!(matches!(game.phase, Phase::ResizePending { .. }));
        assert_eq!(game.world.bounds, BOUNDS);

        // Deadline passed: one full reset at the new bounds, round kept.
        game.settle_resize(10.0 + config::RESIZE_DEBOUNCE).unwrap();
        assert_eq!(game.phase, Phase::Running);
        assert_eq!(game.world.bounds, bigger);
        assert_eq!(game.world.round, 1);
        assert_eq!(game.world.score, 0);
        assert_eq!(game.world.living_discs(), 3);
    }
}
