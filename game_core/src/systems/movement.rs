use crate::Ball;

/// Advance the ball by one tick of velocity
pub fn move_ball(ball: &mut Ball) {
    ball.pos += ball.vel;
}
