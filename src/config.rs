use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

/// Server settings.
///
/// Defaults match the fixed constants the server has always used; a YAML
/// file named by `CONFIG` and the `LISTEN`, `BACKLOG` and `WORK_DELAY_MS`
/// environment variables can override them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address to bind, e.g. "0.0.0.0:8124"
    pub listen_addr: String,
    /// Queue depth for connections not yet accepted
    pub backlog: u32,
    /// Placeholder delay before each response, in milliseconds
    pub work_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8124".to_string(),
            backlog: 10_000,
            work_delay_ms: 200,
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var("CONFIG") {
            Ok(path) => {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read config file {}", path))?;
                Self::from_yaml(&raw)
                    .with_context(|| format!("invalid config file {}", path))?
            }
            Err(_) => Self::default(),
        };

        if let Ok(addr) = std::env::var("LISTEN") {
            cfg.listen_addr = addr;
        }
        if let Ok(backlog) = std::env::var("BACKLOG") {
            cfg.backlog = backlog
                .parse()
                .with_context(|| format!("BACKLOG is not a number: {:?}", backlog))?;
        }
        if let Ok(delay) = std::env::var("WORK_DELAY_MS") {
            cfg.work_delay_ms = delay
                .parse()
                .with_context(|| format!("WORK_DELAY_MS is not a number: {:?}", delay))?;
        }

        Ok(cfg)
    }

    pub fn from_yaml(raw: &str) -> anyhow::Result<Self> {
        let cfg = serde_yaml::from_str(raw)?;
        Ok(cfg)
    }

    pub fn work_delay(&self) -> Duration {
        Duration::from_millis(self.work_delay_ms)
    }
}
