//! Buzzer GPIO on a Raspberry Pi
//!
//! Drives the buzzer with rppal's software PWM on a plain output pin. Pins
//! are held in a map while claimed; dropping an `OutputPin` resets the line to
//! the state it had before we touched it, which is what cleanup relies on.

use std::collections::HashMap;

use anyhow::{Context as _, bail};
use chime_core::buzzer::{GpioFacility, NumberingMode};
use rppal::gpio::{Gpio, OutputPin};

#[derive(Default)]
pub struct RppalGpio {
    gpio: Option<Gpio>,
    pins: HashMap<u8, OutputPin>,
}

impl RppalGpio {
    pub fn new() -> Self {
        Self::default()
    }

    fn pin_mut(&mut self, pin: u8) -> anyhow::Result<&mut OutputPin> {
        self.pins
            .get_mut(&pin)
            .with_context(|| format!("GPIO{} is not set up as an output", pin))
    }
}

impl GpioFacility for RppalGpio {
    type Error = anyhow::Error;

    // rppal addresses lines by BCM number only
    fn supports(&self, mode: NumberingMode) -> bool {
        mode == NumberingMode::Bcm
    }

    fn set_mode(&mut self, mode: NumberingMode) -> anyhow::Result<()> {
        match mode {
            NumberingMode::Bcm => {
                let gpio = Gpio::new().context("failed to open the GPIO peripheral")?;
                self.gpio = Some(gpio);
                log::info!("GPIO initialized (BCM numbering)");
                Ok(())
            }
            NumberingMode::Board => bail!("physical header numbering is not supported"),
        }
    }

    fn setup_output(&mut self, pin: u8) -> anyhow::Result<()> {
        let Some(gpio) = &self.gpio else {
            bail!("numbering mode must be selected before claiming GPIO{}", pin);
        };
        let output = gpio
            .get(pin)
            .with_context(|| format!("failed to claim GPIO{}", pin))?
            .into_output_low();
        self.pins.insert(pin, output);
        Ok(())
    }

    fn start_pwm(&mut self, pin: u8, frequency_hz: f64, duty_cycle: f64) -> anyhow::Result<()> {
        self.pin_mut(pin)?
            .set_pwm_frequency(frequency_hz, duty_cycle)
            .with_context(|| format!("failed to start PWM on GPIO{}", pin))
    }

    fn stop_pwm(&mut self, pin: u8) -> anyhow::Result<()> {
        self.pin_mut(pin)?
            .clear_pwm()
            .with_context(|| format!("failed to stop PWM on GPIO{}", pin))
    }

    fn cleanup(&mut self) -> anyhow::Result<()> {
        let released = self.pins.len();
        self.pins.clear();
        self.gpio = None;
        log::info!("Released {} GPIO line(s)", released);
        Ok(())
    }
}
