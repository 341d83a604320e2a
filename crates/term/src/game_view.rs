//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, relative to the view origin:
//!
//! ```text
//! row 0 .. height-1   the lanes, one terminal cell per grid cell
//! row height          Score: N   (bold)
//! row height+1        GAME OVER. Press ENTER to quit.   (once the game stops)
//! ```

use crate::core::GameState;
use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub const BORDER_GLYPH: char = '|';
pub const OBSTACLE_GLYPH: char = '~';
pub const PLAYER_GLYPH: char = '@';
pub const GAME_OVER_TEXT: &str = "GAME OVER. Press ENTER to quit.";

const PLAYER_STYLE: CellStyle = CellStyle::colored(Rgb::new(0, 205, 205));

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Smallest viewport that shows the whole grid and both text rows.
    pub fn fitting(state: &GameState) -> Self {
        let text_w = GAME_OVER_TEXT.chars().count() as u16;
        Self {
            width: state.width().max(text_w),
            height: state.height().saturating_add(2),
        }
    }
}

/// Renders the lanes, the player and the score.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView {
    origin_x: u16,
    origin_y: u16,
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offset the whole view inside the viewport.
    pub fn with_origin(mut self, x: u16, y: u16) -> Self {
        self.origin_x = x;
        self.origin_y = y;
        self
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// The frame is rebuilt from scratch every call; callers can reuse one
    /// framebuffer across ticks.
    pub fn render_into(&self, state: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let player = state.player();
        let (w, h) = (state.width(), state.height());

        for row in 0..h {
            for col in 0..w {
                let corner = (row == 0 || row == h - 1) && (col == 0 || col == w - 1);
                let (ch, style) = if state.obstacle_at(col, row) {
                    (OBSTACLE_GLYPH, CellStyle::PLAIN)
                } else if player.x == col && player.y == row {
                    (PLAYER_GLYPH, PLAYER_STYLE)
                } else if corner {
                    (BORDER_GLYPH, CellStyle::PLAIN)
                } else {
                    continue;
                };
                fb.put_char(
                    self.origin_x.saturating_add(col),
                    self.origin_y.saturating_add(row),
                    ch,
                    style,
                );
            }
        }

        let score_row = self.origin_y.saturating_add(h);
        let score = format!("Score: {}", state.score());
        fb.put_str(
            self.origin_x,
            score_row,
            &score,
            CellStyle::PLAIN.bold(),
        );

        if !state.running() {
            fb.put_str(
                self.origin_x,
                score_row.saturating_add(1),
                GAME_OVER_TEXT,
                CellStyle::PLAIN,
            );
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
        fb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Chance, GameConfig};
    use crate::types::{MAX_LANE_COUNT, MAX_LANE_WIDTH};

    fn still(width: u16, height: u16) -> GameState {
        let config = GameConfig::new(width, height)
            .with_spawn_chance(Chance::NEVER)
            .with_step_chance(Chance::NEVER);
        GameState::new(config).unwrap()
    }

    #[test]
    fn test_fitting_viewport() {
        let state = still(100, 30);
        assert_eq!(Viewport::fitting(&state), Viewport::new(100, 32));

        let state = still(5, 3);
        assert_eq!(Viewport::fitting(&state).width, 31);
    }

    #[test]
    fn test_largest_grid_fits_without_overflow() {
        let state = still(MAX_LANE_WIDTH, MAX_LANE_COUNT);
        assert_eq!(
            Viewport::fitting(&state),
            Viewport::new(MAX_LANE_WIDTH, MAX_LANE_COUNT + 2)
        );
        assert!(GameState::new(GameConfig::new(1, u16::MAX)).is_err());
    }

    #[test]
    fn test_corners_and_player() {
        let state = still(6, 4);
        let fb = GameView::new().render(&state, Viewport::new(10, 6));
        assert_eq!(fb.row_text(0), "|  @ |");
        assert_eq!(fb.row_text(1), "");
        assert_eq!(fb.row_text(3), "|    |");
        assert_eq!(fb.get(3, 0).unwrap().style, PLAYER_STYLE);
    }

    #[test]
    fn test_origin_offsets_everything() {
        let state = still(4, 3);
        let fb = GameView::new()
            .with_origin(2, 1)
            .render(&state, Viewport::new(12, 6));
        assert_eq!(fb.row_text(0), "");
        assert_eq!(fb.get(2, 1).unwrap().ch, BORDER_GLYPH);
        assert_eq!(fb.row_text(4), "  Score: 0");
    }
}
