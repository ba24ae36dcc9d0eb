use glam::IVec2;

/// Which end of the screen a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }
}

/// Paddle - represents a player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paddle {
    pub side: Side,
    pub y: i32, // top edge, clamped to screen
}

impl Paddle {
    pub fn new(side: Side, y: i32) -> Self {
        Self { side, y }
    }

    /// Inclusive vertical overlap with a box of `size` starting at `top`
    pub fn overlaps(&self, top: i32, size: i32, paddle_height: i32) -> bool {
        top + size >= self.y && top <= self.y + paddle_height
    }
}

/// Ball - the pong ball, top-left corner and per-tick velocity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ball {
    pub pos: IVec2,
    pub vel: IVec2,
}

impl Ball {
    pub fn new(pos: IVec2, vel: IVec2) -> Self {
        Self { pos, vel }
    }

    /// Reset to `center` and serve back the way the ball did not go
    pub fn serve(&mut self, center: IVec2, speed: i32) {
        self.pos = center;
        let dx = if self.vel.x > 0 { -speed } else { speed };
        self.vel = IVec2::new(dx, speed);
    }
}
