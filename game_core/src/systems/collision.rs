use crate::{Ball, Config, Events, GameState, Side};

/// Bounce off the top and bottom edges.
///
/// Checked every tick, not only on first contact, so the ball never ends a
/// tick more than one step outside the screen.
pub fn check_walls(ball: &mut Ball, config: &Config, events: &mut Events) {
    let max_y = config.ball_max_y();
    if ball.pos.y <= 0 || ball.pos.y >= max_y {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = ball.pos.y.clamp(0, max_y);
        events.ball_hit_wall = true;
    }
}

/// Return the ball off either paddle.
///
/// The proximity bands are fixed pixel columns, not paddle geometry.
pub fn check_paddles(state: &mut GameState, config: &Config, events: &mut Events) {
    let size = config.ball_size;
    let ball = &mut state.ball;

    // Left before right; the right check sees any snap the left one made
    for paddle in state.paddles {
        let in_band = match paddle.side {
            Side::Left => ball.pos.x <= config.left_band_x,
            Side::Right => ball.pos.x + size >= config.right_band_x,
        };

        if in_band && paddle.overlaps(ball.pos.y, size, config.paddle_height) {
            ball.vel.x = -ball.vel.x;
            // Snap out of the band so the next tick doesn't bounce again
            ball.pos.x = match paddle.side {
                Side::Left => config.left_snap_x,
                Side::Right => config.right_snap_x(),
            };
            events.ball_hit_paddle = Some(paddle.side);
        }
    }
}
