use glam::IVec2;

use crate::{Ball, Config, Paddle, Side};

/// Everything that changes from tick to tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub ball: Ball,
    pub paddles: [Paddle; 2], // [left, right]
}

impl GameState {
    /// Power-on state: ball in the middle heading down-right, paddles near the top
    pub fn new(config: &Config) -> Self {
        let speed = config.ball_speed;
        Self {
            ball: Ball::new(config.center(), IVec2::new(speed, speed)),
            paddles: [
                Paddle::new(Side::Left, config.paddle_start_y),
                Paddle::new(Side::Right, config.paddle_start_y),
            ],
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        &self.paddles[side.index()]
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        &mut self.paddles[side.index()]
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub ball_hit_paddle: Option<Side>,
    pub served: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_wall = false;
        self.ball_hit_paddle = None;
        self.served = false;
    }
}

/// Values written to the output registers at the end of a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Registers {
    pub paddle_diag: u16,
    pub ball_x: i32,
    pub ball_y: i32,
}
