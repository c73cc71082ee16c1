/// Buzzer line, BCM numbering.
pub const BUZZER_PIN: u8 = 26;

/// Square wave: on for half of each period.
pub const DUTY_CYCLE: f64 = 0.5;

pub const MIN_FREQUENCY_HZ: u32 = 1;
pub const MAX_FREQUENCY_HZ: u32 = 20_000;

pub const NOTE_C5: u32 = 523;
pub const NOTE_E5: u32 = 659;
pub const NOTE_G5: u32 = 784;

pub const TONE_DURATION_MS: u32 = 300;
