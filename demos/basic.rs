use sizelog::{Level, Logger};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let logger = Logger::instance();
    logger.open("./test.log")?;
    logger.set_level(Level::Info);
    logger.set_max_bytes(1024);

    sizelog::debug!("debug")?;
    sizelog::info!("info")?;
    sizelog::warn!("warn")?;
    sizelog::error!("error")?;
    sizelog::info!("name is {}, age is {}", "wad", 12)?;

    Ok(())
}
