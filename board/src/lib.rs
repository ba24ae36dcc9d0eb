//! Platform binding for the soft-core FPGA board: memory-mapped PIO ports,
//! a calibrated busy-wait and a JTAG UART console.

#![cfg_attr(not(test), no_std)]

pub mod delay;
pub mod error;
pub mod jtag_uart;
pub mod mmio;
pub mod system;

#[cfg(test)]
mod test_bus;

pub use delay::BusyWait;
pub use error::{Error, Result};
pub use jtag_uart::{JtagUart, UartLogger};
pub use mmio::MmioPort;
pub use system::RegisterMap;

/// Check the register map, install `logger` and hand back the game's I/O.
///
/// # Safety
///
/// `map` must describe the peripherals actually present on the bus, and
/// `logger` must write to the JTAG UART at `map.jtag_uart`.
pub unsafe fn init(
    map: RegisterMap,
    logger: &'static UartLogger,
    iterations_per_ms: u32,
) -> Result<(MmioPort, BusyWait)> {
    map.validate()?;
    let delay = BusyWait::new(iterations_per_ms)?;
    logger.install()?;

    // SAFETY: the map is valid and describes real registers per this fn's contract
    let port = unsafe { MmioPort::new(map) };
    Ok((port, delay))
}
