//! Hardware session - owns the buzzer pin claim from setup to release.
//!
//! A [`Session`] selects the numbering mode, claims the buzzer pin and plays
//! tones on it. The claim is released exactly once: either explicitly through
//! [`Session::close`] or, on any early return or unwind, when the session is
//! dropped.

use crate::buzzer::{Delay, GpioFacility, NumberingMode};
use crate::consts::{BUZZER_PIN, DUTY_CYCLE};
use crate::error::{Error, Result};
use crate::tone::Tone;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Uninitialized,
    Ready,
    Released,
}

pub struct Session<G: GpioFacility, D: Delay> {
    gpio: G,
    delay: D,
    pin: u8,
    state: SessionState,
}

impl<G: GpioFacility, D: Delay> Session<G, D> {
    /// Select `mode` and claim `pin` as an output.
    ///
    /// A mode the backend cannot honour is refused before any hardware call.
    /// If either step fails the facility is still cleaned up before the error
    /// is returned.
    pub fn open(gpio: G, delay: D, mode: NumberingMode, pin: u8) -> Result<Self, G::Error> {
        let mut session = Self {
            gpio,
            delay,
            pin,
            state: SessionState::Uninitialized,
        };

        log::info!("Claiming GPIO{} ({:?} numbering)", pin, mode);
        if !session.gpio.supports(mode) {
            return Err(Error::UnsupportedMode(mode));
        }
        session.gpio.set_mode(mode).map_err(Error::Gpio)?;
        session.gpio.setup_output(pin).map_err(Error::Gpio)?;
        session.state = SessionState::Ready;

        Ok(session)
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Sound one tone and block until it has finished.
    ///
    /// The signal is stopped before this returns `Ok`.
    pub fn emit(&mut self, tone: Tone) -> Result<(), G::Error> {
        if !tone.is_valid() {
            log::warn!("Rejecting tone {}Hz for {}ms", tone.frequency_hz, tone.duration_ms);
            return Err(Error::InvalidTone {
                frequency_hz: tone.frequency_hz,
                duration_ms: tone.duration_ms,
            });
        }

        log::info!("Buzzer: {}Hz for {}ms", tone.frequency_hz, tone.duration_ms);
        self.gpio
            .start_pwm(self.pin, f64::from(tone.frequency_hz), DUTY_CYCLE)
            .map_err(Error::Gpio)?;
        self.delay.delay(tone.duration());
        self.gpio.stop_pwm(self.pin).map_err(Error::Gpio)
    }

    /// Play tones in order, stopping at the first failure.
    pub fn play(&mut self, melody: &[Tone]) -> Result<(), G::Error> {
        melody.iter().try_for_each(|tone| self.emit(*tone))
    }

    /// Release the pin now and report how that went.
    pub fn close(mut self) -> Result<(), G::Error> {
        self.release()
    }

    fn release(&mut self) -> Result<(), G::Error> {
        if self.state == SessionState::Released {
            return Ok(());
        }
        self.state = SessionState::Released;

        log::info!("Releasing GPIO{}", self.pin);
        self.gpio.cleanup().map_err(Error::Gpio)
    }
}

impl<G: GpioFacility, D: Delay> Drop for Session<G, D> {
    fn drop(&mut self) {
        if let Err(e) = self.release() {
            log::error!("GPIO cleanup failed: {}", e);
        }
    }
}

/// Claim the buzzer pin, play `melody` on it and release the pin.
///
/// The first error wins; the pin is released exactly once on every path.
pub fn run<G: GpioFacility, D: Delay>(gpio: G, delay: D, melody: &[Tone]) -> Result<(), G::Error> {
    let mut session = Session::open(gpio, delay, NumberingMode::Bcm, BUZZER_PIN)?;
    session.play(melody)?;
    session.close()
}
