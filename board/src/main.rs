//! `pong` firmware for the soft core.
//!
//! Build with `cargo firmware`. On any other target the binary only says so.

#![cfg_attr(target_arch = "riscv32", no_std, no_main)]

#[cfg(target_arch = "riscv32")]
use board::{BusyWait, JtagUart, RegisterMap, UartLogger};
#[cfg(target_arch = "riscv32")]
use log::{error, LevelFilter};

#[cfg(target_arch = "riscv32")]
static LOGGER: UartLogger = UartLogger::new(
    // SAFETY: the JTAG UART is always present in the reference design
    unsafe { JtagUart::new(RegisterMap::DEFAULT.jtag_uart) },
    LevelFilter::Info,
);

#[cfg(target_arch = "riscv32")]
#[riscv_rt::entry]
fn main() -> ! {
    let config = game_core::Config::new();

    // SAFETY: RegisterMap::DEFAULT is generated from the hardware this runs on
    let started = unsafe {
        board::init(
            RegisterMap::DEFAULT,
            &LOGGER,
            BusyWait::DEFAULT_ITERATIONS_PER_MS,
        )
    };

    match started {
        Ok((port, delay)) => game_core::run(port, delay, &config),
        Err(err) => {
            error!("startup failed: {err}");
            halt()
        }
    }
}

#[cfg(target_arch = "riscv32")]
#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    error!("{info}");
    halt()
}

#[cfg(target_arch = "riscv32")]
fn halt() -> ! {
    loop {
        core::hint::spin_loop();
    }
}

#[cfg(not(target_arch = "riscv32"))]
fn main() {
    eprintln!("pong runs on the riscv32 soft core only; build it with `cargo firmware`");
    std::process::exit(1);
}
