use core::ptr;

use game_core::{InputChannel, IoPort, OutputChannel};

use crate::system::RegisterMap;

/// PIO data registers accessed in place
#[derive(Debug)]
pub struct MmioPort {
    map: RegisterMap,
}

impl MmioPort {
    /// # Safety
    ///
    /// Every port address in `map` must be a word-aligned 32-bit register
    /// that stays mapped for as long as the port is used.
    pub unsafe fn new(map: RegisterMap) -> Self {
        Self { map }
    }

    pub fn map(&self) -> &RegisterMap {
        &self.map
    }
}

impl IoPort for MmioPort {
    fn read_input(&mut self, channel: InputChannel) -> i32 {
        let addr = self.map.input(channel) as *const u32;
        // SAFETY: guaranteed by the contract of `MmioPort::new`
        unsafe { ptr::read_volatile(addr) as i32 }
    }

    fn write_output(&mut self, channel: OutputChannel, value: u32) {
        let addr = self.map.output(channel) as *mut u32;
        // SAFETY: guaranteed by the contract of `MmioPort::new`
        unsafe { ptr::write_volatile(addr, value) }
    }
}
