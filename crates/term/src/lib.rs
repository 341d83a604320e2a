//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the view draws the game state into
//! a framebuffer, and the renderer flushes that framebuffer to the terminal.
//! No widget toolkit is involved.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the view pure so frames can be asserted on in tests
//! - Guarantee the terminal is restored on every exit path

pub mod fb;
pub mod game_view;
pub mod pacer;
pub mod renderer;

pub use lane_hopper_core as core;
pub use lane_hopper_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{
    GameView, Viewport, BORDER_GLYPH, GAME_OVER_TEXT, OBSTACLE_GLYPH, PLAYER_GLYPH,
};
pub use pacer::FramePacer;
pub use renderer::{encode_diff_into, encode_full_into, restore_terminal, TerminalRenderer};
