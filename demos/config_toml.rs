//! Load logger configuration from TOML and route `tracing` events into it.
//!
//! Run with:
//! ```bash
//! cargo run --example config_toml
//! ```

use serde::Deserialize;

#[derive(Deserialize)]
struct Config {
    log: sizelog::LogConfig,
}

const CONFIG: &str = r#"
[log]
path = "demo.log"
level = "info"
max_bytes = "4K"
console = true
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let root: Config = toml::from_str(CONFIG)?;
    let logger = sizelog::init_logging(&root.log)?;

    tracing::debug!("This is a debug message (filtered by level)");
    tracing::info!(user = "bob", action = "logout", "User session ended");
    tracing::warn!("This is a warning message");

    for i in 0..100 {
        sizelog::info!(logger: logger, "Log message number {}", i)?;
    }

    Ok(())
}
