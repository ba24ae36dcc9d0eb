//! Heap-backed stand-in for the peripheral bus.

use core::ptr;

use crate::system::RegisterMap;

const WORDS: usize = 8;

/// Word 0..=4 are the PIO ports in `RegisterMap` field order, 5 and 6 the
/// JTAG UART data and control registers.
pub struct FakeBus {
    words: *mut [u32; WORDS],
}

impl FakeBus {
    pub fn new() -> Self {
        Self {
            words: Box::into_raw(Box::new([0; WORDS])),
        }
    }

    fn addr(&self, index: usize) -> usize {
        assert!(index < WORDS);
        self.words as usize + index * 4
    }

    pub fn map(&self) -> RegisterMap {
        RegisterMap {
            paddle1: self.addr(0),
            paddle2: self.addr(1),
            paddle_diag: self.addr(2),
            ball_x: self.addr(3),
            ball_y: self.addr(4),
            jtag_uart: self.addr(5),
        }
    }

    pub fn peek(&self, index: usize) -> u32 {
        unsafe { ptr::read_volatile(self.addr(index) as *const u32) }
    }

    pub fn poke(&self, index: usize, value: u32) {
        unsafe { ptr::write_volatile(self.addr(index) as *mut u32, value) }
    }
}

impl Drop for FakeBus {
    fn drop(&mut self) {
        drop(unsafe { Box::from_raw(self.words) });
    }
}
