use core::time::Duration;

use crate::consts::{MAX_FREQUENCY_HZ, MIN_FREQUENCY_HZ, NOTE_C5, NOTE_E5, NOTE_G5, TONE_DURATION_MS};

/// A single square-wave tone: pitch and how long to hold it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tone {
    pub frequency_hz: u32,
    pub duration_ms: u32,
}

/// Ordered, immutable list of tones played back to back.
pub type Melody = &'static [Tone];

/// C5, E5, G5 - the rising chime played on every run.
pub const STARTUP_CHIME: Melody = &[
    Tone::new(NOTE_C5, TONE_DURATION_MS),
    Tone::new(NOTE_E5, TONE_DURATION_MS),
    Tone::new(NOTE_G5, TONE_DURATION_MS),
];

impl Tone {
    pub const fn new(frequency_hz: u32, duration_ms: u32) -> Self {
        Self {
            frequency_hz,
            duration_ms,
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.duration_ms))
    }

    /// Audible, non-zero frequency and a non-zero hold time.
    pub fn is_valid(&self) -> bool {
        (MIN_FREQUENCY_HZ..=MAX_FREQUENCY_HZ).contains(&self.frequency_hz) && self.duration_ms > 0
    }
}
