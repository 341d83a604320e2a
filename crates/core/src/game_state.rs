//! Game state module - the whole simulated world
//!
//! Owns every lane, the player, the score and the RNG. A frontend drives it one
//! tick at a time: [`GameState::apply_action`] for the input phase, then
//! [`GameState::update`] for the logic phase.

use anyhow::Result;
use log::{debug, info};

use crate::config::GameConfig;
use crate::lane::Lane;
use crate::player::Player;
use crate::rng::SimpleRng;
use crate::types::{EndReason, GameAction, GameStatus};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    /// One lane per row; row 0 is the start line
    lanes: Vec<Lane>,
    player: Player,
    rng: SimpleRng,
    score: u32,
    status: GameStatus,
    /// Logic phases run so far
    ticks: u64,
}

impl GameState {
    /// Create a new game on the configured grid.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;

        let mut rng = SimpleRng::new(config.seed);
        let lanes = (0..config.height)
            .map(|_| Lane::new(config.width, &mut rng))
            .collect();

        info!(
            "new game: {}x{} grid, seed {}",
            config.width, config.height, config.seed
        );

        Ok(Self {
            config,
            lanes,
            player: Player::new(config.width),
            rng,
            score: 0,
            status: GameStatus::Running,
            ticks: 0,
        })
    }

    pub fn width(&self) -> u16 {
        self.config.width
    }

    pub fn height(&self) -> u16 {
        self.config.height
    }

    pub fn lanes(&self) -> &[Lane] {
        &self.lanes
    }

    pub fn lane(&self, row: u16) -> Option<&Lane> {
        self.lanes.get(row as usize)
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn running(&self) -> bool {
        self.status.is_running()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Start and finish rows never carry traffic.
    pub fn is_safe_row(&self, row: u16) -> bool {
        row == 0 || row + 1 == self.config.height
    }

    /// Whether `(x, y)` currently holds a visible obstacle.
    pub fn obstacle_at(&self, x: u16, y: u16) -> bool {
        !self.is_safe_row(y) && self.lane(y).is_some_and(|lane| lane.has_obstacle(x))
    }

    /// Input phase: apply one player command.
    ///
    /// Returns `true` when the command changed the state. Commands are ignored
    /// once the game is over.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if !self.running() {
            return false;
        }

        match action.delta() {
            Some((dx, dy)) => {
                let before = self.player;
                self.player
                    .step(dx, dy, self.config.width, self.config.height);
                self.player != before
            }
            None => {
                info!("player quit with score {}", self.score);
                self.status = GameStatus::Over(EndReason::Quit);
                true
            }
        }
    }

    /// Logic phase: move traffic, detect collisions, then score a crossing.
    pub fn update(&mut self) {
        if !self.running() {
            return;
        }
        self.ticks += 1;

        let last_row = self.config.height - 1;
        for row in 1..last_row {
            let lane = &mut self.lanes[row as usize];
            if self.rng.roll(self.config.step_chance) {
                lane.advance(&mut self.rng, self.config.spawn_chance);
            }

            if self.player.y == row && lane.has_obstacle(self.player.x) {
                info!(
                    "collision at ({}, {}) on tick {}, final score {}",
                    self.player.x, row, self.ticks, self.score
                );
                self.status = GameStatus::Over(EndReason::Collision);
                return;
            }
        }

        // Once per tick, outside the lane loop.
        if self.player.y == last_row {
            self.score += 1;
            self.player.y = 0;
            let row = self.rng.next_range(self.config.height as u32) as usize;
            self.lanes[row].reverse_direction();
            debug!(
                "crossing #{}; lane {} now heads {}",
                self.score,
                row,
                self.lanes[row].direction().as_str()
            );
        }
    }

    /// One full tick without rendering: optional input, then logic.
    pub fn tick(&mut self, action: Option<GameAction>) {
        if let Some(action) = action {
            self.apply_action(action);
        }
        self.update();
    }

    /// Direct player access (for tests and scripted drivers).
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Direct lane access (for tests and scripted drivers).
    pub fn lane_mut(&mut self, row: u16) -> Option<&mut Lane> {
        self.lanes.get_mut(row as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Chance;
    use crate::types::Direction;

    fn quiet(width: u16, height: u16) -> GameState {
        let config = GameConfig::new(width, height)
            .with_spawn_chance(Chance::NEVER)
            .with_step_chance(Chance::NEVER);
        GameState::new(config).unwrap()
    }

    #[test]
    fn test_new_game_layout() {
        let state = GameState::new(GameConfig::default()).unwrap();
        assert_eq!(state.lanes().len(), 30);
        assert!(state.lanes().iter().all(|l| l.width() == 100));
        assert_eq!(state.player(), Player { x: 50, y: 0 });
        assert_eq!(state.score(), 0);
        assert!(state.running());
        assert_eq!(state.ticks(), 0);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        assert!(GameState::new(GameConfig::new(10, 2)).is_err());
    }

    #[test]
    fn test_safe_rows() {
        let state = quiet(5, 6);
        assert!(state.is_safe_row(0));
        assert!(state.is_safe_row(5));
        for row in 1..5 {
            assert!(!state.is_safe_row(row));
        }
    }

    #[test]
    fn test_apply_action_moves_and_clamps() {
        let mut state = quiet(5, 5);
        assert!(state.apply_action(GameAction::MoveDown));
        assert_eq!(state.player(), Player { x: 2, y: 1 });

        assert!(state.apply_action(GameAction::MoveLeft));
        assert!(state.apply_action(GameAction::MoveLeft));
        assert!(!state.apply_action(GameAction::MoveLeft));
        assert_eq!(state.player(), Player { x: 0, y: 1 });

        assert!(state.apply_action(GameAction::MoveUp));
        assert!(!state.apply_action(GameAction::MoveUp));
        assert_eq!(state.player().y, 0);
    }

    #[test]
    fn test_quit_ends_game() {
        let mut state = quiet(5, 5);
        assert!(state.apply_action(GameAction::Quit));
        assert_eq!(state.status(), GameStatus::Over(EndReason::Quit));

        // Nothing moves afterwards.
        assert!(!state.apply_action(GameAction::MoveDown));
        state.update();
        assert_eq!(state.ticks(), 0);
    }

    #[test]
    fn test_collision_is_terminal() {
        let mut state = quiet(5, 5);
        state.player_mut().y = 2;
        let x = state.player().x;
        let lane = state.lane_mut(2).unwrap();
        *lane = Lane::with_direction(5, Direction::Right);
        for _ in 0..=x {
            lane.push(true);
        }

        state.update();
        assert_eq!(state.status(), GameStatus::Over(EndReason::Collision));
        assert_eq!(state.ticks(), 1);

        state.update();
        assert_eq!(state.ticks(), 1);
    }

    #[test]
    fn test_obstacle_in_other_row_is_harmless() {
        let mut state = quiet(5, 5);
        state.player_mut().y = 1;
        let lane = state.lane_mut(2).unwrap();
        for _ in 0..5 {
            lane.push(true);
        }
        state.update();
        assert!(state.running());
    }

    #[test]
    fn test_crossing_scores_once_and_respawns() {
        let mut state = quiet(5, 6);
        state.player_mut().y = 5;
        state.update();
        assert_eq!(state.score(), 1);
        assert_eq!(state.player().y, 0);

        // Standing on the start row scores nothing more.
        state.update();
        assert_eq!(state.score(), 1);
    }

    #[test]
    fn test_crossing_reverses_exactly_one_lane() {
        let mut state = quiet(4, 8);
        let before: Vec<Direction> = state.lanes().iter().map(|l| l.direction()).collect();
        state.player_mut().y = 7;
        state.update();
        let flipped = state
            .lanes()
            .iter()
            .zip(&before)
            .filter(|(l, d)| l.direction() != **d)
            .count();
        assert_eq!(flipped, 1);
    }

    #[test]
    fn test_obstacle_at_hides_safe_rows() {
        let mut state = quiet(3, 3);
        for row in 0..3 {
            let lane = state.lane_mut(row).unwrap();
            for _ in 0..3 {
                lane.push(true);
            }
        }
        assert!(!state.obstacle_at(0, 0));
        assert!(state.obstacle_at(0, 1));
        assert!(!state.obstacle_at(0, 2));
        assert!(!state.obstacle_at(7, 1));
    }

    #[test]
    fn test_same_seed_same_game() {
        let config = GameConfig::new(30, 10).with_seed(77);
        let mut a = GameState::new(config).unwrap();
        let mut b = GameState::new(config).unwrap();
        for _ in 0..200 {
            a.tick(None);
            b.tick(None);
        }
        assert_eq!(a.lanes(), b.lanes());
    }
}
