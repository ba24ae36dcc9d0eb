//! Deterministic two-paddle Pong for a soft-core processor.
//!
//! One tick reads both paddle inputs, clamps them, moves the ball, and
//! writes the paddle diagnostic word and ball position back out. The
//! platform supplies the registers through [`IoPort`] and the tick wait
//! through [`Delay`].

#![cfg_attr(not(test), no_std)]

pub mod components;
pub mod config;
pub mod io;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use io::*;
pub use params::*;
pub use resources::*;

use log::{info, trace};
use systems::*;

/// Printed once before the first tick
pub const BANNER: &str = "Starting Pong game on Nios II...";

/// Advance the ball one tick: move, bounce, return off paddles, re-serve
pub fn update_ball(state: &mut GameState, config: &Config, events: &mut Events) {
    // 1. Move
    move_ball(&mut state.ball);

    // 2. Top/bottom walls
    check_walls(&mut state.ball, config, events);

    // 3. + 4. Paddles
    check_paddles(state, config, events);

    // 5. Ball left the screen
    check_out_of_bounds(&mut state.ball, config, events);
}

/// Run the physics for one tick and return what the output registers should hold
pub fn step(
    state: &mut GameState,
    config: &Config,
    raw_p1: i32,
    raw_p2: i32,
    events: &mut Events,
) -> Registers {
    events.clear();

    let paddle_diag = update_paddles(state, config, raw_p1, raw_p2);
    update_ball(state, config, events);

    Registers {
        paddle_diag,
        ball_x: state.ball.pos.x,
        ball_y: state.ball.pos.y,
    }
}

/// One full tick against the hardware: read, step, write
pub fn tick<P: IoPort>(
    port: &mut P,
    state: &mut GameState,
    config: &Config,
    events: &mut Events,
) -> Registers {
    let raw_p1 = port.read_input(InputChannel::Paddle1);
    let raw_p2 = port.read_input(InputChannel::Paddle2);

    let regs = step(state, config, raw_p1, raw_p2, events);

    // Ball coordinates are in range once step returns
    port.write_output(OutputChannel::PaddleDiag, u32::from(regs.paddle_diag));
    port.write_output(OutputChannel::BallX, regs.ball_x as u32);
    port.write_output(OutputChannel::BallY, regs.ball_y as u32);

    if events.ball_hit_wall {
        trace!("ball bounced off wall at x={}", regs.ball_x);
    }
    if let Some(side) = events.ball_hit_paddle {
        trace!("ball returned by {:?} paddle at y={}", side, regs.ball_y);
    }
    if events.served {
        trace!("ball out, serving dx={}", state.ball.vel.x);
    }

    regs
}

/// Print the banner and play forever at the configured tick rate
pub fn run<P: IoPort, D: Delay>(mut port: P, mut delay: D, config: &Config) -> ! {
    info!("{}", BANNER);

    let mut state = GameState::new(config);
    let mut events = Events::new();
    let interval = config.tick_interval();

    loop {
        tick(&mut port, &mut state, config, &mut events);
        delay.delay(interval);
    }
}
