// World population errors: degenerate configurations fail fast instead of
// retrying placement forever.

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum WorldError {
    #[error("disc population must be non-zero")]
    EmptyPopulation,
    #[error("invalid disc radius range {min}..{max}")]
    InvalidRadiusRange { min: f64, max: f64 },
    #[error("disc radius {radius} cannot fit inside a {width}x{height} arena")]
    DiscTooLarge {
        radius: f64,
        width: f64,
        height: f64,
    },
    #[error("could not place disc {index} clear of the player after {attempts} attempts")]
    PlacementFailed { index: u32, attempts: u32 },
}
