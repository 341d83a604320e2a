//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the simulation rules and the world state. It has no
//! dependency on the terminal, so it can be driven headless by tests and
//! benchmarks as easily as by the interactive binary.
//!
//! # Module Structure
//!
//! - [`lane`]: one scrolling row of obstacle cells
//! - [`player`]: the player's grid position and clamped movement
//! - [`game_state`]: lanes + player + score, the per-tick logic
//! - [`rng`]: seeded LCG and probability rolls
//! - [`config`]: grid size, odds and seed
//!
//! # Game Rules
//!
//! - The top and bottom rows are safe zones: no traffic, no collisions
//! - Each tick every other lane advances with 1/10 odds; an advancing lane
//!   spawns an obstacle at its leading edge with 1/10 odds
//! - Sharing a cell with an obstacle ends the game
//! - Reaching the bottom row scores a point, sends the player back to the top
//!   and reverses one random lane
//!
//! # Example
//!
//! ```
//! use lane_hopper_core::{Chance, GameConfig, GameState};
//! use lane_hopper_types::GameAction;
//!
//! let config = GameConfig::new(10, 4).with_spawn_chance(Chance::NEVER);
//! let mut game = GameState::new(config).unwrap();
//!
//! for _ in 0..3 {
//!     game.tick(Some(GameAction::MoveDown));
//! }
//!
//! assert_eq!(game.score(), 1);
//! assert_eq!(game.player().y, 0);
//! assert!(game.running());
//! ```

pub mod config;
pub mod game_state;
pub mod lane;
pub mod player;
pub mod rng;

pub use lane_hopper_types as types;

// Re-export commonly used types for convenience
pub use config::GameConfig;
pub use game_state::GameState;
pub use lane::Lane;
pub use player::Player;
pub use rng::{Chance, SimpleRng};
