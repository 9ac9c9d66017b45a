pub mod run_options;

use crate::{error::AppError, estimation::ClimateConstants};
use run_options::Args;
use serde::Deserialize;
use std::fs;
use tracing::warn;

pub const CONFIG_FILE: &str = "rtrwh.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WebServer {
    pub address: String,
}

impl Default for WebServer {
    fn default() -> Self {
        Self { address: "0.0.0.0:8080".to_owned() }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Simulation {
    pub month_interval_ms: i64,
    pub frame_interval_ms: u64,
    pub tank_capacity_liters: u64,
    pub rain_intensity: f64,
}

impl Default for Simulation {
    fn default() -> Self {
        Self { month_interval_ms: 2000, frame_interval_ms: 16, tank_capacity_liters: 50_000, rain_intensity: 0.8 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Log {
    pub level: String,
}

impl Default for Log {
    fn default() -> Self {
        Self { level: "info".to_owned() }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub web_server: WebServer,
    pub climate: ClimateConstants,
    pub simulation: Simulation,
    pub log: Log,
}

impl Config {
    pub fn load(args: &Args) -> Result<Self, AppError> {
        if let Some(cfg_str) = &args.cfg_str {
            return Self::load_from_str(cfg_str);
        }
        if !args.cfg_file.exists() {
            warn!(file = %args.cfg_file.display(), "Config file not found. Proceeding with defaults.");
            return Ok(Self::default());
        }
        let config_content = fs::read_to_string(&args.cfg_file)?;
        Self::load_from_str(&config_content)
    }

    pub fn load_from_str(config_str: &str) -> Result<Self, AppError> {
        let config: Config = toml::from_str(config_str)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), AppError> {
        if !(0. ..=1.).contains(&self.climate.catchment_efficiency) {
            return Err(AppError::ConfigError(format!(
                "catchment_efficiency must be within 0..=1, got {}",
                self.climate.catchment_efficiency
            )));
        }
        if self.climate.annual_rainfall_mm < 0. {
            return Err(AppError::ConfigError("annual_rainfall_mm must not be negative".to_owned()));
        }
        if self.simulation.month_interval_ms <= 0 || self.simulation.frame_interval_ms == 0 {
            return Err(AppError::ConfigError("simulation intervals must be positive".to_owned()));
        }
        if self.simulation.tank_capacity_liters == 0 {
            return Err(AppError::ConfigError("tank_capacity_liters must be positive".to_owned()));
        }
        Ok(())
    }
}
