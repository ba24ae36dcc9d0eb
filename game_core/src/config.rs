use core::time::Duration;

use glam::IVec2;

use crate::Params;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub screen_width: i32,
    pub screen_height: i32,
    pub paddle_height: i32,
    pub paddle_start_y: i32,
    pub ball_size: i32,
    pub ball_speed: i32,
    pub left_band_x: i32,
    pub right_band_x: i32,
    pub left_snap_x: i32,
    pub tick_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: Params::SCREEN_WIDTH,
            screen_height: Params::SCREEN_HEIGHT,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_start_y: Params::PADDLE_START_Y,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
            left_band_x: Params::LEFT_BAND_X,
            right_band_x: Params::RIGHT_BAND_X,
            left_snap_x: Params::LEFT_SNAP_X,
            tick_ms: Params::TICK_MS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highest Y a paddle's top edge may take
    pub fn paddle_max(&self) -> i32 {
        self.screen_height - self.paddle_height
    }

    pub fn ball_max_x(&self) -> i32 {
        self.screen_width - self.ball_size
    }

    pub fn ball_max_y(&self) -> i32 {
        self.screen_height - self.ball_size
    }

    /// Serve position, the middle of the screen
    pub fn center(&self) -> IVec2 {
        IVec2::new(self.screen_width / 2, self.screen_height / 2)
    }

    /// X the ball is pushed back to after a right paddle return
    pub fn right_snap_x(&self) -> i32 {
        self.right_band_x - self.ball_size - 1
    }

    /// Clamp a raw paddle reading to the screen
    pub fn clamp_paddle_y(&self, raw: i32) -> i32 {
        raw.clamp(0, self.paddle_max())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}
