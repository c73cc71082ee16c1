#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod buzzer;
pub mod consts;
pub mod error;
pub mod session;
pub mod tone;

#[cfg(any(test, feature = "std"))]
pub mod log_capture;

#[cfg(test)]
mod fake;

pub use buzzer::{Delay, GpioFacility, NumberingMode};
pub use error::{Error, Result};
pub use session::{Session, SessionState, run};
pub use tone::{Melody, STARTUP_CHIME, Tone};
