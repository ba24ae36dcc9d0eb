//! Register map of the reference hardware design.
//!
//! Base addresses mirror the BSP's `system.h` for the Platform Designer
//! system the game ships with. Regenerate them when the hardware changes.

use game_core::{InputChannel, OutputChannel};

use crate::error::{Error, Result};

/// End of on-chip memory; `memory.x` places the firmware below it
pub const ON_CHIP_MEMORY_END: usize = 0x0002_0000;

/// Debug PIO, 16 bits: packed paddle positions
pub const PIO_0_BASE: usize = 0x0002_1000;
pub const PIO_PADDLE1_BASE: usize = 0x0002_1010;
pub const PIO_PADDLE2_BASE: usize = 0x0002_1020;
pub const PIO_BALL_X_BASE: usize = 0x0002_1030;
pub const PIO_BALL_Y_BASE: usize = 0x0002_1040;
pub const JTAG_UART_BASE: usize = 0x0002_1050;

/// Base addresses of every peripheral the game touches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterMap {
    pub paddle1: usize,
    pub paddle2: usize,
    pub paddle_diag: usize,
    pub ball_x: usize,
    pub ball_y: usize,
    pub jtag_uart: usize,
}

impl RegisterMap {
    pub const DEFAULT: Self = Self {
        paddle1: PIO_PADDLE1_BASE,
        paddle2: PIO_PADDLE2_BASE,
        paddle_diag: PIO_0_BASE,
        ball_x: PIO_BALL_X_BASE,
        ball_y: PIO_BALL_Y_BASE,
        jtag_uart: JTAG_UART_BASE,
    };

    pub fn input(&self, channel: InputChannel) -> usize {
        match channel {
            InputChannel::Paddle1 => self.paddle1,
            InputChannel::Paddle2 => self.paddle2,
        }
    }

    pub fn output(&self, channel: OutputChannel) -> usize {
        match channel {
            OutputChannel::PaddleDiag => self.paddle_diag,
            OutputChannel::BallX => self.ball_x,
            OutputChannel::BallY => self.ball_y,
        }
    }

    /// Reject addresses no 32-bit register can live at
    pub fn validate(&self) -> Result<()> {
        let registers = [
            ("paddle1", self.paddle1),
            ("paddle2", self.paddle2),
            ("paddle_diag", self.paddle_diag),
            ("ball_x", self.ball_x),
            ("ball_y", self.ball_y),
            ("jtag_uart", self.jtag_uart),
        ];

        for (name, addr) in registers {
            if addr == 0 {
                return Err(Error::NullRegister { name });
            }
            if addr % core::mem::align_of::<u32>() != 0 {
                return Err(Error::MisalignedRegister { name, addr });
            }
        }
        Ok(())
    }
}

impl Default for RegisterMap {
    fn default() -> Self {
        Self::DEFAULT
    }
}
