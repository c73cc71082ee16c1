use chime_core::buzzer::ThreadDelay;
use chime_core::{STARTUP_CHIME, log_capture};

mod pwm;

use pwm::RppalGpio;

fn main() -> anyhow::Result<()> {
    log_capture::init(log::LevelFilter::Info);

    chime_core::run(RppalGpio::new(), ThreadDelay, STARTUP_CHIME)?;

    Ok(())
}
