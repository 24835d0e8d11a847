use std::path::PathBuf;

use log::LevelFilter;
use serde::Deserialize;

use crate::table::{LoadError, StrategyTable};

fn default_strategy_file() -> PathBuf {
    PathBuf::from("blackjackbook.csv")
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Log settings; the only options the browser entry points read.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: default_log_level(),
        }
    }
}

impl LoggingConfig {
    /// Unknown level names fall back to `Info`.
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

/// Native configuration. The strategy file is read from disk by `load_table`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisorConfig {
    #[serde(default = "default_strategy_file")]
    pub strategy_file: PathBuf,
    #[serde(flatten)]
    pub logging: LoggingConfig,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        AdvisorConfig {
            strategy_file: default_strategy_file(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AdvisorConfig {
    pub fn level_filter(&self) -> LevelFilter {
        self.logging.level_filter()
    }

    pub fn load_table(&self) -> Result<StrategyTable, LoadError> {
        StrategyTable::from_path(&self.strategy_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg: AdvisorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, AdvisorConfig::default());
        assert_eq!(cfg.strategy_file, PathBuf::from("blackjackbook.csv"));
        assert_eq!(cfg.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn level_names_are_parsed() {
        let cfg: AdvisorConfig = serde_json::from_str(r#"{"logLevel": "debug"}"#).unwrap();
        assert_eq!(cfg.level_filter(), LevelFilter::Debug);

        let cfg: AdvisorConfig = serde_json::from_str(r#"{"logLevel": "chatty"}"#).unwrap();
        assert_eq!(cfg.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn logging_options_carry_no_strategy_file() {
        let logging: LoggingConfig =
            serde_json::from_str(r#"{"logLevel": "warn", "strategyFile": "other.csv"}"#).unwrap();
        assert_eq!(
            logging,
            LoggingConfig {
                log_level: "warn".to_string()
            }
        );
        assert_eq!(logging.level_filter(), LevelFilter::Warn);
    }
}
