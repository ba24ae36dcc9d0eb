use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("register `{name}` has a null base address")]
    NullRegister { name: &'static str },

    #[error("register `{name}` at {addr:#010x} is not word aligned")]
    MisalignedRegister { name: &'static str, addr: usize },

    #[error("busy-wait calibration must be at least one iteration per millisecond")]
    ZeroCalibration,

    #[error("a logger is already installed")]
    LoggerInstalled,
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
