/**
* filename : config
* author : HAMA
* date: 2025. 8. 25.
* description: 
**/

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::TradingError;
use crate::execution::BatchFeePolicy;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub trading: TradingConfig,
    pub market_data: MarketDataConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradingConfig {
    pub initial_capital: f64,
    pub default_fee: f64,
    pub charge_batch_fee_when_empty: bool,
}

impl TradingConfig {
    /// Resolve the configured batch fee behavior into a policy.
    pub fn batch_fee_policy(&self) -> BatchFeePolicy {
        if self.charge_batch_fee_when_empty {
            BatchFeePolicy::Always
        } else {
            BatchFeePolicy::OnlyWhenFilled
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketDataConfig {
    pub data_file: Option<PathBuf>,
    pub delimiter: char,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: Option<String>,
}

impl Config {
    /// Load configuration from a file
    pub fn load() -> Result<Self, TradingError> {
        // Try to load from config.json
        let config_path = Path::new("config.json");

        if config_path.exists() {
            let mut file = File::open(config_path)
                .map_err(|e| TradingError::ConfigError(format!("Failed to open config file: {}", e)))?;

            let mut contents = String::new();
            file.read_to_string(&mut contents)
                .map_err(|e| TradingError::ConfigError(format!("Failed to read config file: {}", e)))?;

            let mut cfg: Config = serde_json::from_str(&contents)
                .map_err(|e| TradingError::ConfigError(format!("Failed to parse config file: {}", e)))?;
            // environment overrides
            cfg.apply_env_overrides();
            Ok(cfg)
        } else {
            // Return default configuration
            let mut cfg = Config::default();
            cfg.apply_env_overrides();
            Ok(cfg)
        }
    }

    /// Apply environment variable overrides for runtime fields
    fn apply_env_overrides(&mut self) {
        use std::env;
        if let Ok(v) = env::var("DATA_FILE") { if !v.is_empty() { self.market_data.data_file = Some(PathBuf::from(v)); } }
        if let Ok(v) = env::var("DEFAULT_FEE") { if let Ok(fee) = v.parse() { self.trading.default_fee = fee; } }
        if let Ok(v) = env::var("CHARGE_BATCH_FEE_WHEN_EMPTY") {
            let lower = v.to_lowercase();
            if ["1","true","yes"].contains(&lower.as_str()) { self.trading.charge_batch_fee_when_empty = true; }
            if ["0","false","no"].contains(&lower.as_str()) { self.trading.charge_batch_fee_when_empty = false; }
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            trading: TradingConfig {
                initial_capital: 10000.0,
                default_fee: 10.0,
                // reference behavior: fee charged even for an empty batch
                charge_batch_fee_when_empty: true,
            },
            market_data: MarketDataConfig {
                data_file: None,
                delimiter: ',',
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: None,
            },
        }
    }
}
