//! Player token position.

/// The player's cell on the grid. `y == 0` is the start row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Player {
    pub x: u16,
    pub y: u16,
}

impl Player {
    /// Spawn in the middle of the start row.
    pub fn new(width: u16) -> Self {
        Self { x: width / 2, y: 0 }
    }

    /// Move by `(dx, dy)`, clamped to a `width` x `height` grid.
    pub fn step(&mut self, dx: i32, dy: i32, width: u16, height: u16) {
        self.x = clamp_axis(self.x, dx, width);
        self.y = clamp_axis(self.y, dy, height);
    }
}

fn clamp_axis(value: u16, delta: i32, len: u16) -> u16 {
    let max = len.saturating_sub(1) as i32;
    (value as i32 + delta).clamp(0, max) as u16
}
