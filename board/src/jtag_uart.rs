//! JTAG UART console and the `log` backend that writes to it.
//!
//! Register layout: data at offset 0 (low byte is the character), control
//! at offset 4 (bits 31..16 hold the free space in the write FIFO).

use core::fmt;
use core::ptr;

use log::{LevelFilter, Log, Metadata, Record};

use crate::error::{Error, Result};

const DATA: usize = 0;
const CONTROL: usize = 4;
const WSPACE_SHIFT: u32 = 16;

/// Blocking writer for the JTAG UART
#[derive(Debug, Clone, Copy)]
pub struct JtagUart {
    base: usize,
}

impl JtagUart {
    /// # Safety
    ///
    /// `base` must be the word-aligned base of a JTAG UART that stays mapped
    /// for as long as the writer is used.
    pub const unsafe fn new(base: usize) -> Self {
        Self { base }
    }

    /// Free slots in the transmit FIFO
    pub fn write_space(&self) -> u32 {
        // SAFETY: guaranteed by the contract of `JtagUart::new`
        let control = unsafe { ptr::read_volatile((self.base + CONTROL) as *const u32) };
        control >> WSPACE_SHIFT
    }

    /// Wait for FIFO space, then send one byte
    pub fn put_byte(&self, byte: u8) {
        while self.write_space() == 0 {
            core::hint::spin_loop();
        }
        // SAFETY: guaranteed by the contract of `JtagUart::new`
        unsafe { ptr::write_volatile((self.base + DATA) as *mut u32, u32::from(byte)) }
    }
}

impl fmt::Write for JtagUart {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for byte in s.bytes() {
            self.put_byte(byte);
        }
        Ok(())
    }
}

/// `log` backend printing `[LEVEL] message` lines to the JTAG UART
pub struct UartLogger {
    uart: JtagUart,
    level: LevelFilter,
}

impl UartLogger {
    pub const fn new(uart: JtagUart, level: LevelFilter) -> Self {
        Self { uart, level }
    }

    /// Install as the global logger
    pub fn install(&'static self) -> Result<()> {
        log::set_logger(self).map_err(|_| Error::LoggerInstalled)?;
        log::set_max_level(self.level);
        Ok(())
    }
}

impl Log for UartLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut uart = self.uart;
        // The UART never reports a write error
        let _ = fmt::Write::write_fmt(
            &mut uart,
            format_args!("[{}] {}\n", record.level(), record.args()),
        );
    }

    fn flush(&self) {}
}
