//! Game configuration.

use anyhow::{bail, Result};

use crate::rng::Chance;
use crate::types::{LANE_COUNT, LANE_WIDTH, MAX_LANE_COUNT, MAX_LANE_WIDTH, MIN_LANE_COUNT};

/// Parameters fixed for the lifetime of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Cells per lane
    pub width: u16,
    /// Number of lanes, both safe rows included
    pub height: u16,
    /// Odds that an advancing lane spawns an obstacle
    pub spawn_chance: Chance,
    /// Odds that a lane advances in a given tick
    pub step_chance: Chance,
    /// RNG seed
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: LANE_WIDTH,
            height: LANE_COUNT,
            spawn_chance: Chance::SPAWN,
            step_chance: Chance::STEP,
            seed: 1,
        }
    }
}

impl GameConfig {
    /// Default odds on a custom grid.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_spawn_chance(mut self, chance: Chance) -> Self {
        self.spawn_chance = chance;
        self
    }

    pub fn with_step_chance(mut self, chance: Chance) -> Self {
        self.step_chance = chance;
        self
    }

    /// Reject grids with no column, no lane between the safe rows, or more
    /// cells than a terminal view can address.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.width > MAX_LANE_WIDTH {
            bail!(
                "grid width must be in 1..={}, got {}",
                MAX_LANE_WIDTH,
                self.width
            );
        }
        if self.height < MIN_LANE_COUNT || self.height > MAX_LANE_COUNT {
            bail!(
                "grid height must be in {}..={}, got {}",
                MIN_LANE_COUNT,
                MAX_LANE_COUNT,
                self.height
            );
        }
        Ok(())
    }
}
