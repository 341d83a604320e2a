//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data with no external dependencies, so they can be used
//! by the simulation, the input mapping and the terminal view alike.
//!
//! # Grid Dimensions
//!
//! - **Width**: 100 cells per lane (indexed 0-99)
//! - **Height**: 30 lanes (indexed 0-29)
//! - Row 0 (start) and row 29 (finish) are safe zones
//!
//! # Timing and Probabilities
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 25 | Minimum frame duration |
//! | `SPAWN_ONE_IN` | 10 | An advancing lane spawns an obstacle 1 time in 10 |
//! | `STEP_ONE_IN` | 10 | Each tick, a lane advances 1 time in 10 |
//!
//! # Examples
//!
//! ```
//! use lane_hopper_types::{Direction, GameAction, LANE_COUNT, LANE_WIDTH};
//!
//! assert_eq!(Direction::Left.reversed(), Direction::Right);
//! assert_eq!(GameAction::MoveUp.delta(), Some((0, -1)));
//! assert_eq!(GameAction::Quit.delta(), None);
//!
//! assert_eq!(LANE_WIDTH, 100);
//! assert_eq!(LANE_COUNT, 30);
//! ```

/// Number of cells per lane.
pub const LANE_WIDTH: u16 = 100;

/// Number of lanes, safe zones included.
pub const LANE_COUNT: u16 = 30;

/// Minimum frame duration in milliseconds (caps the refresh rate at 40 FPS).
pub const FRAME_MS: u32 = 25;

/// An advancing lane spawns an obstacle with probability `1 / SPAWN_ONE_IN`.
pub const SPAWN_ONE_IN: u32 = 10;

/// Each non-safe lane advances with probability `1 / STEP_ONE_IN` per tick.
pub const STEP_ONE_IN: u32 = 10;

/// Smallest playable grid height: start row, one lane, finish row.
pub const MIN_LANE_COUNT: u16 = 3;

/// Largest accepted lane width; the view needs headroom past the grid.
pub const MAX_LANE_WIDTH: u16 = 1024;

/// Largest accepted lane count; the view draws two text rows below the grid.
pub const MAX_LANE_COUNT: u16 = 1024;

/// Scroll direction of a lane.
///
/// - **Right**: new cells enter at index 0 and leave at `width - 1`
/// - **Left**: new cells enter at `width - 1` and leave at index 0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// The opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Commands the player can issue during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move one row towards the start line
    MoveUp,
    /// Move one row towards the finish line
    MoveDown,
    /// Move one column left
    MoveLeft,
    /// Move one column right
    MoveRight,
    /// End the game
    Quit,
}

impl GameAction {
    /// Grid offset `(dx, dy)` for movement commands, `None` otherwise.
    pub fn delta(&self) -> Option<(i32, i32)> {
        match self {
            GameAction::MoveUp => Some((0, -1)),
            GameAction::MoveDown => Some((0, 1)),
            GameAction::MoveLeft => Some((-1, 0)),
            GameAction::MoveRight => Some((1, 0)),
            GameAction::Quit => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveUp => "moveUp",
            GameAction::MoveDown => "moveDown",
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Quit => "quit",
        }
    }
}

/// Why a game stopped running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// The player shared a cell with an obstacle
    Collision,
    /// The player asked to quit
    Quit,
}

/// Lifecycle of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Over(EndReason),
}

impl GameStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, GameStatus::Running)
    }
}
