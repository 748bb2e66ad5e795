use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::scene::Scene;
use crate::solver::SolverParams;

pub const DEFAULT_PATH: &str = "fluidsim.yaml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub solver: SolverParams,
    pub run: RunConfig,
    pub scene: Scene,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub steps: usize,
    /// Log diagnostics every this many steps; 0 disables periodic reports.
    pub report_every: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            steps: 200,
            report_every: 20,
        }
    }
}

pub fn parse(contents: &str) -> Result<Config, ConfigError> {
    Ok(serde_yaml::from_str(contents)?)
}

pub fn read(path: &Path) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    parse(&contents)
}

/// Load `path`, falling back to defaults when it is absent or broken.
pub fn load(path: &Path) -> Config {
    if !path.exists() {
        return Config::default();
    }
    match read(path) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::warn!("{}: {e}; using defaults", path.display());
            Config::default()
        }
    }
}
