use crate::{Ball, Config, Events};

/// Re-serve the ball if it left the screen horizontally.
///
/// There is no score counter; a point only resets the ball.
pub fn check_out_of_bounds(ball: &mut Ball, config: &Config, events: &mut Events) {
    if ball.pos.x < 0 || ball.pos.x > config.ball_max_x() {
        ball.serve(config.center(), config.ball_speed);
        events.served = true;
    }
}
