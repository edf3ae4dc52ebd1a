use std::path::PathBuf;

use anyhow::Context;
use log::LevelFilter;
use rand::{rngs::SmallRng, SeedableRng};
use rocpp_mock::v16::{ChargePoint, MockConfig, SystemClock};

const CONFIG_ENV: &str = "ROCPP_MOCK_CONFIG";

fn load_config() -> anyhow::Result<MockConfig> {
    let path = std::env::args_os()
        .nth(1)
        .or_else(|| std::env::var_os(CONFIG_ENV))
        .map(PathBuf::from);
    let Some(path) = path else {
        return Ok(MockConfig::default());
    };
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("reading config {}", path.display()))?;
    MockConfig::from_json(&raw).with_context(|| format!("parsing config {}", path.display()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout carries the protocol, logs go to stderr
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();

    let config = load_config()?;
    log::info!("mock charge point started, connector {}", config.connector_id);

    let cp = ChargePoint::new(config, SystemClock, SmallRng::from_os_rng());
    cp.run(tokio::io::stdin(), tokio::io::stdout())
        .await
        .context("transport failed")?;
    log::info!("mock charge point exited");
    Ok(())
}
