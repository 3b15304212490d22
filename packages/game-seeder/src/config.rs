use std::time::Duration;

use clap::Parser;

pub const DEFAULT_HOST: &str = "redis_game";
pub const DEFAULT_PORT: u16 = 6379;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Command-line flags, each falling back to an environment variable.
#[derive(Debug, Parser)]
#[command(
    name = "game-seeder",
    about = "Seed the game service store with a development game"
)]
pub struct SeederArgs {
    /// Redis host
    #[arg(long, env = "REDIS_HOST", default_value = DEFAULT_HOST, value_parser = parse_host)]
    pub host: String,

    /// Redis port
    #[arg(long, env = "REDIS_PORT", default_value_t = DEFAULT_PORT, value_parser = parse_port)]
    pub port: u16,

    /// Full redis:// URL; takes precedence over host and port
    #[arg(long, env = "REDIS_URL")]
    pub url: Option<String>,

    /// Seconds to wait for the connection before giving up
    #[arg(
        long,
        env = "REDIS_CONNECT_TIMEOUT_SECS",
        default_value_t = DEFAULT_CONNECT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub connect_timeout_secs: u64,
}

/// Blank values (e.g. `REDIS_HOST=`) count as unset.
fn parse_host(value: &str) -> Result<String, String> {
    let value = value.trim();
    if value.is_empty() {
        Ok(DEFAULT_HOST.to_string())
    } else {
        Ok(value.to_string())
    }
}

fn parse_port(value: &str) -> Result<u16, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(DEFAULT_PORT);
    }
    value
        .parse::<u16>()
        .map_err(|e| format!("invalid port '{}': {}", value, e))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub host: String,
    pub port: u16,
    pub url: Option<String>,
    pub connect_timeout: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            url: None,
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

impl From<SeederArgs> for StoreConfig {
    fn from(args: SeederArgs) -> Self {
        Self {
            host: args.host,
            port: args.port,
            url: args.url.filter(|url| !url.trim().is_empty()),
            connect_timeout: Duration::from_secs(args.connect_timeout_secs),
        }
    }
}

impl StoreConfig {
    pub fn connection_url(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None => format!("redis://{}:{}", self.host, self.port),
        }
    }

    /// Where the seeder is pointed, safe to log. A configured URL may carry
    /// credentials so it is not echoed.
    pub fn target(&self) -> String {
        match &self.url {
            Some(_) => "REDIS_URL".to_string(),
            None => format!("{}:{}", self.host, self.port),
        }
    }
}
