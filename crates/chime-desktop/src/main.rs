use chime_core::buzzer::ThreadDelay;
use chime_core::{STARTUP_CHIME, log_capture};

mod buzzer;

use buzzer::SpeakerGpio;

fn main() -> anyhow::Result<()> {
    log_capture::init(log::LevelFilter::Info);

    log::info!("chime-desktop: playing startup chime through the speaker");
    chime_core::run(SpeakerGpio::new(), ThreadDelay, STARTUP_CHIME)?;

    Ok(())
}
