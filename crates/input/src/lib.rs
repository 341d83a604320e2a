//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and wraps the
//! two ways the game reads the keyboard: a non-blocking single-key poll per
//! tick, and a blocking wait on the game-over screen.

pub mod map;
pub mod poll;

pub use lane_hopper_types as types;

pub use map::{handle_key_event, is_confirm, should_quit};
pub use poll::{poll_action, wait_for_confirm};
