/// Game tuning parameters for Pong, in screen pixels
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Screen
    pub const SCREEN_WIDTH: i32 = 640;
    pub const SCREEN_HEIGHT: i32 = 480;

    // Paddle
    pub const PADDLE_WIDTH: i32 = 10; // drawn by the display hardware only
    pub const PADDLE_HEIGHT: i32 = 40;
    pub const PADDLE_START_Y: i32 = 100;

    // Ball
    pub const BALL_SIZE: i32 = 8;
    pub const BALL_SPEED: i32 = 2; // pixels per tick on each axis

    // Collision bands (tuned, not derived from the sizes above)
    pub const LEFT_BAND_X: i32 = 20;
    pub const RIGHT_BAND_X: i32 = 610;
    pub const LEFT_SNAP_X: i32 = 21;

    // Timing
    pub const TICK_MS: u64 = 25; // ~40 ticks per second
}
