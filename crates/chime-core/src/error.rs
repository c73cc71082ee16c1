use thiserror::Error;

use crate::buzzer::NumberingMode;

/// Errors raised while driving the buzzer. `E` is the backend's own error.
#[derive(Debug, Error)]
pub enum Error<E> {
    /// Rendered with `{:#}` so chained backend errors keep their root cause.
    #[error("gpio: {0:#}")]
    Gpio(E),

    #[error("pin numbering {0:?} is not supported by this backend")]
    UnsupportedMode(NumberingMode),

    #[error("tone out of range: {frequency_hz}Hz for {duration_ms}ms")]
    InvalidTone { frequency_hz: u32, duration_ms: u32 },
}

pub type Result<T, E> = core::result::Result<T, Error<E>>;
