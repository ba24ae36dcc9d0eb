//! Hardware seams: where paddle readings come from, where ball state goes,
//! and how a tick waits.

use core::time::Duration;

/// Readable input ports, one per paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputChannel {
    Paddle1,
    Paddle2,
}

/// Writable output ports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputChannel {
    /// `(paddle2 << 8) | paddle1`, 16 bits
    PaddleDiag,
    BallX,
    BallY,
}

/// Register-level access to the host platform
pub trait IoPort {
    /// Raw reading; any value is accepted and clamped downstream.
    fn read_input(&mut self, channel: InputChannel) -> i32;
    fn write_output(&mut self, channel: OutputChannel, value: u32);
}

/// Blocking wait between ticks
pub trait Delay {
    fn delay(&mut self, duration: Duration);
}

impl<T: IoPort + ?Sized> IoPort for &mut T {
    fn read_input(&mut self, channel: InputChannel) -> i32 {
        (**self).read_input(channel)
    }

    fn write_output(&mut self, channel: OutputChannel, value: u32) {
        (**self).write_output(channel, value);
    }
}

impl<T: Delay + ?Sized> Delay for &mut T {
    fn delay(&mut self, duration: Duration) {
        (**self).delay(duration);
    }
}
