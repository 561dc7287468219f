//! Brute-force pairwise collision detection and role-dispatched resolution.
//!
//! The scan is O(n^2) per frame, which is fine at the tens of discs this
//! game runs with; a spatial grid or quadtree would only pay off at much
//! larger populations and is deliberately omitted.

use crate::disc::Disc;
use crate::player::Player;

/// Indices of living discs in `discs` that overlap `origin`, in collection
/// order. `skip` excludes the origin's own slot when it lives in the slice,
/// so a disc never collides with itself.
pub fn partners_of(origin: &Disc, discs: &[Disc], skip: Option<usize>) -> Vec<usize> {
    let mut partners = Vec::new();
    for (j, other) in discs.iter().enumerate() {
        if Some(j) == skip || !other.alive {
            continue;
        }
        if origin.overlaps(other) {
            partners.push(j);
        }
    }
    partners
}

/// Symmetric velocity exchange between two non-player discs. Deliberately
/// not an elastic collision: the full vectors swap with no mass or
/// angle-of-incidence terms.
pub fn swap_velocities(discs: &mut [Disc], i: usize, j: usize) {
    let vi = discs[i].velocity;
    discs[i].velocity = discs[j].velocity;
    discs[j].velocity = vi;
}

/// Player contact: the non-player disc dies, the score advances by one,
/// and the player grows toward its cap. The player's own velocity is
/// untouched (no bounce-back).
pub fn eliminate(disc: &mut Disc, player: &mut Player, score: &mut u32, growth: f64) {
    disc.kill();
    *score += 1;
    player.grow(growth);
    crate::debug_physics!(
        "Disc eliminated at ({:.1}, {:.1}); score {}",
        disc.position.x,
        disc.position.y,
        score
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Bounds, Point, WHITE};
    use assert_approx_eq::assert_approx_eq;

    fn disc(x: f64, vx: f64, vy: f64) -> Disc {
        Disc::new(
            Point { x, y: 100.0 },
            Point { x: vx, y: vy },
            10.0,
            WHITE,
        )
    }

    fn test_player() -> Player {
        let bounds = Bounds {
            width: 800.0,
            height: 600.0,
        };
        Player::new(bounds, 20.0, 20.0, Some(30.0))
    }

    #[test]
    fn test_partners_in_collection_order() {
        let origin = disc(100.0, 0.0, 0.0);
        let discs = vec![
            disc(115.0, 0.0, 0.0), // overlapping
            disc(400.0, 0.0, 0.0), // far away
            disc(85.0, 0.0, 0.0),  // overlapping
        ];
        assert_eq!(partners_of(&origin, &discs, None), vec![0, 2]);
    }

    #[test]
    fn test_partners_skips_self_and_dead() {
        let discs = vec![disc(100.0, 0.0, 0.0), disc(110.0, 0.0, 0.0), {
            let mut d = disc(105.0, 0.0, 0.0);
            d.kill();
            d
        }];
        // Disc 0 against the collection: itself and the dead disc excluded.
        assert_eq!(partners_of(&discs[0], &discs, Some(0)), vec![1]);
    }

    #[test]
    fn test_swap_exchanges_full_vectors() {
        let mut discs = vec![disc(100.0, 3.0, -1.0), disc(110.0, -7.0, 2.0)];
        swap_velocities(&mut discs, 0, 1);
        assert_approx_eq!(discs[0].velocity.x, -7.0);
        assert_approx_eq!(discs[0].velocity.y, 2.0);
        assert_approx_eq!(discs[1].velocity.x, 3.0);
        assert_approx_eq!(discs[1].velocity.y, -1.0);
    }

    #[test]
    fn test_eliminate_kills_scores_and_grows() {
        let mut d = disc(100.0, 1.0, 1.0);
        let mut player = test_player();
        let mut score = 4;
        eliminate(&mut d, &mut player, &mut score, 2.0);
        assert!(!d.alive);
        assert_eq!(score, 5);
        assert_approx_eq!(player.disc.radius, 22.0);
        // Player velocity is never touched by contact.
        assert_eq!(player.disc.velocity, Point::default());
    }

    #[test]
    fn test_eliminate_without_growth() {
        let mut d = disc(100.0, 1.0, 1.0);
        let mut player = test_player();
        let mut score = 0;
        eliminate(&mut d, &mut player, &mut score, 0.0);
        assert_eq!(score, 1);
        assert_approx_eq!(player.disc.radius, 20.0);
    }
}
