use crate::config;
use crate::disc::Disc;
use crate::player::Player;
use crate::types::Rgb;
use crate::world::World;
use macroquad::prelude::*;

// Conversion helper
fn to_color(c: Rgb) -> Color {
    Color::from_rgba(c.r, c.g, c.b, 255)
}

/// Handles rendering the world state using macroquad. Non-player discs are
/// filled circles, the player is a stroked outline, and a translucent
/// black rect fades the previous frame for motion trails.
pub struct Renderer {
    trail_alpha: f32,
}

impl Renderer {
    pub fn new() -> Self {
        Renderer {
            trail_alpha: config::TRAIL_ALPHA,
        }
    }

    /// Draw one frame. Dead discs are skipped implicitly by the liveness
    /// filter.
    pub fn draw_frame(&self, world: &World, announcement: Option<&str>) {
        draw_rectangle(
            0.0,
            0.0,
            screen_width(),
            screen_height(),
            Color::new(0.0, 0.0, 0.0, self.trail_alpha),
        );

        for disc in world.discs.iter().filter(|d| d.alive) {
            self.draw_disc(disc);
        }
        self.draw_player(&world.player);
        self.draw_hud(world);

        if let Some(text) = announcement {
            self.draw_announcement(text);
        }
    }

    fn draw_disc(&self, disc: &Disc) {
        draw_circle(
            disc.position.x as f32,
            disc.position.y as f32,
            disc.radius as f32,
            to_color(disc.color),
        );
    }

    fn draw_player(&self, player: &Player) {
        draw_circle_lines(
            player.disc.position.x as f32,
            player.disc.position.y as f32,
            player.disc.radius as f32,
            player.line_width,
            to_color(player.disc.color),
        );
    }

    fn draw_hud(&self, world: &World) {
        let text = format!(
            "Round {}   Score {}/{}",
            world.round,
            world.score,
            world.discs.len()
        );
        draw_text(&text, 16.0, 32.0, 28.0, WHITE);
    }

    fn draw_announcement(&self, text: &str) {
        let font_size = 48.0;
        let dims = measure_text(text, None, font_size as u16, 1.0);
        draw_text(
            text,
            (screen_width() - dims.width) / 2.0,
            screen_height() / 2.0,
            font_size,
            YELLOW,
        );
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
