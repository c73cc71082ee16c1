use std::time::Duration;

use anyhow::{Context as _, bail};
use chime_core::buzzer::{GpioFacility, NumberingMode};
use rodio::{OutputStream, OutputStreamHandle, Sink, Source};

const SAMPLE_RATE: u32 = 48000;
const AMPLITUDE: f32 = 0.15;

// Square wave generator, runs until its sink is stopped
struct SquareWave {
    frequency: f32,
    duty_cycle: f32,
    sample_rate: u32,
    current_sample: u64,
}

impl SquareWave {
    fn new(frequency: f32, duty_cycle: f32, sample_rate: u32) -> Self {
        Self {
            frequency,
            duty_cycle,
            sample_rate,
            current_sample: 0,
        }
    }
}

impl Iterator for SquareWave {
    type Item = f32;

    fn next(&mut self) -> Option<Self::Item> {
        let sample_position = self.current_sample as f64 / self.sample_rate as f64;
        let cycle_position = (sample_position * self.frequency as f64) % 1.0;

        self.current_sample += 1;

        if cycle_position < self.duty_cycle as f64 {
            Some(AMPLITUDE)
        } else {
            Some(-AMPLITUDE)
        }
    }
}

impl Source for SquareWave {
    fn current_frame_len(&self) -> Option<usize> {
        None
    }

    fn channels(&self) -> u16 {
        1
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn total_duration(&self) -> Option<Duration> {
        None
    }
}

/// Stands in for the buzzer pin by playing its PWM signal on the default
/// sound card.
#[derive(Default)]
pub struct SpeakerGpio {
    mode: Option<NumberingMode>,
    output: Option<(OutputStream, OutputStreamHandle)>,
    pin: Option<u8>,
    sink: Option<Sink>,
}

impl SpeakerGpio {
    pub fn new() -> Self {
        Self::default()
    }

    fn claimed(&self, pin: u8) -> anyhow::Result<&OutputStreamHandle> {
        match (&self.output, self.pin) {
            (Some((_, handle)), Some(claimed)) if claimed == pin => Ok(handle),
            _ => bail!("GPIO{} is not set up as an output", pin),
        }
    }
}

impl GpioFacility for SpeakerGpio {
    type Error = anyhow::Error;

    fn set_mode(&mut self, mode: NumberingMode) -> anyhow::Result<()> {
        log::debug!("Speaker: {:?} numbering", mode);
        self.mode = Some(mode);
        Ok(())
    }

    fn setup_output(&mut self, pin: u8) -> anyhow::Result<()> {
        if self.mode.is_none() {
            bail!("numbering mode must be selected before claiming GPIO{}", pin);
        }
        let output = OutputStream::try_default().context("failed to open audio output")?;
        self.output = Some(output);
        self.pin = Some(pin);
        Ok(())
    }

    fn start_pwm(&mut self, pin: u8, frequency_hz: f64, duty_cycle: f64) -> anyhow::Result<()> {
        let handle = self.claimed(pin)?;
        let sink = Sink::try_new(handle).context("failed to create audio sink")?;
        sink.append(SquareWave::new(frequency_hz as f32, duty_cycle as f32, SAMPLE_RATE));

        if let Some(previous) = self.sink.replace(sink) {
            previous.stop();
        }
        Ok(())
    }

    fn stop_pwm(&mut self, pin: u8) -> anyhow::Result<()> {
        self.claimed(pin)?;
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
        Ok(())
    }

    fn cleanup(&mut self) -> anyhow::Result<()> {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
        self.pin = None;
        self.output = None;
        self.mode = None;
        Ok(())
    }
}
