// Platform-agnostic buzzer traits
use core::fmt;
use core::time::Duration;

/// How pin numbers handed to [`GpioFacility::setup_output`] are interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumberingMode {
    /// Chip-relative (Broadcom) line numbers.
    Bcm,
    /// Physical header positions.
    Board,
}

/// The GPIO controller a buzzer hangs off.
///
/// Backends only have to provide these five operations; sequencing, timing
/// and release guarantees live in [`crate::Session`].
pub trait GpioFacility {
    type Error: fmt::Debug + fmt::Display;

    /// Whether `set_mode` can honour `mode`. Checked before any hardware call.
    fn supports(&self, _mode: NumberingMode) -> bool {
        true
    }

    fn set_mode(&mut self, mode: NumberingMode) -> Result<(), Self::Error>;

    /// Claim `pin` as a digital output.
    fn setup_output(&mut self, pin: u8) -> Result<(), Self::Error>;

    /// Start a periodic signal on a claimed pin. `duty_cycle` is a fraction in `0.0..=1.0`.
    fn start_pwm(&mut self, pin: u8, frequency_hz: f64, duty_cycle: f64) -> Result<(), Self::Error>;

    fn stop_pwm(&mut self, pin: u8) -> Result<(), Self::Error>;

    /// Release every claimed pin and forget the numbering mode.
    fn cleanup(&mut self) -> Result<(), Self::Error>;
}

/// Blocking wall-clock wait.
pub trait Delay {
    fn delay(&mut self, duration: Duration);
}

/// [`Delay`] backed by `std::thread::sleep`.
#[cfg(feature = "std")]
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadDelay;

#[cfg(feature = "std")]
impl Delay for ThreadDelay {
    fn delay(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
