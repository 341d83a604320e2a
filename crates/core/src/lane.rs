//! Lane module - one scrolling row of obstacle cells
//!
//! A lane is a fixed-width ring of cells. Each advance pushes one cell in at the
//! leading edge (an obstacle with some probability) and drops one cell off the
//! trailing edge, so traffic slides one column in the direction of travel.
//! Coordinates: index 0 is the leftmost column.

use std::collections::VecDeque;

use crate::rng::{Chance, SimpleRng};
use crate::types::Direction;

/// A single horizontal lane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lane {
    /// Obstacle presence per column, left to right
    cells: VecDeque<bool>,
    direction: Direction,
}

impl Lane {
    /// Create an empty lane with a random direction.
    pub fn new(width: u16, rng: &mut SimpleRng) -> Self {
        Self::with_direction(width, rng.direction())
    }

    /// Create an empty lane travelling in `direction`.
    pub fn with_direction(width: u16, direction: Direction) -> Self {
        Self {
            cells: VecDeque::from(vec![false; width as usize]),
            direction,
        }
    }

    pub fn width(&self) -> u16 {
        self.cells.len() as u16
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Shift the lane by one cell in its direction of travel.
    ///
    /// The entering cell holds an obstacle when `spawn` rolls true. The width
    /// is unchanged afterwards.
    pub fn advance(&mut self, rng: &mut SimpleRng, spawn: Chance) {
        let incoming = rng.roll(spawn);
        self.push(incoming);
    }

    /// Shift the lane by one cell, inserting `incoming` at the leading edge.
    pub fn push(&mut self, incoming: bool) {
        if self.cells.is_empty() {
            return;
        }
        match self.direction {
            Direction::Right => {
                self.cells.push_front(incoming);
                self.cells.pop_back();
            }
            Direction::Left => {
                self.cells.push_back(incoming);
                self.cells.pop_front();
            }
        }
    }

    /// Whether column `position` holds an obstacle.
    ///
    /// Columns outside the lane are reported empty.
    pub fn has_obstacle(&self, position: u16) -> bool {
        self.cells.get(position as usize).copied().unwrap_or(false)
    }

    /// Flip the direction of travel; applies from the next advance.
    pub fn reverse_direction(&mut self) {
        self.direction = self.direction.reversed();
    }

    /// Number of occupied cells.
    pub fn obstacle_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    pub fn cells(&self) -> impl Iterator<Item = bool> + '_ {
        self.cells.iter().copied()
    }
}
