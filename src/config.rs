use std::path::PathBuf;

use thiserror::Error;

pub const DATA_PATH_VAR: &str = "PITCHSIDE_DATA";
pub const AGE_BINS_VAR: &str = "PITCHSIDE_AGE_BINS";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {key}")]
    InvalidValue { key: String, value: String },
}

// ---------------------------------------------------------------------------
// Dashboard configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Player table opened on startup.
    pub data_path: PathBuf,
    /// Bin count of the age histogram.
    pub age_bins: usize,
    pub window_size: [f32; 2],
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/players.csv"),
            age_bins: 20,
            window_size: [1280.0, 900.0],
        }
    }
}

impl DashboardConfig {
    /// Defaults, then `.env`, then process environment, then the first
    /// command-line argument as the data path.
    ///
    /// An invalid value keeps its default and is reported alongside the
    /// config; every other override still applies.
    pub fn from_env() -> (Self, Vec<ConfigError>) {
        if let Ok(path) = dotenvy::dotenv() {
            log::debug!("loaded environment from {}", path.display());
        }
        Self::resolve(
            |key| std::env::var(key).ok(),
            std::env::args().nth(1),
        )
    }

    fn resolve(
        lookup: impl Fn(&str) -> Option<String>,
        arg_path: Option<String>,
    ) -> (Self, Vec<ConfigError>) {
        let mut config = Self::default();
        let mut errors = Vec::new();

        if let Some(path) = lookup(DATA_PATH_VAR).filter(|p| !p.trim().is_empty()) {
            config.data_path = PathBuf::from(path);
        }
        if let Some(raw) = lookup(AGE_BINS_VAR) {
            match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => config.age_bins = n,
                _ => errors.push(ConfigError::InvalidValue {
                    key: AGE_BINS_VAR.to_string(),
                    value: raw,
                }),
            }
        }
        if let Some(path) = arg_path {
            config.data_path = PathBuf::from(path);
        }

        (config, errors)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_overrides() {
        let (config, errors) = DashboardConfig::resolve(env(&[]), None);
        assert_eq!(config, DashboardConfig::default());
        assert!(errors.is_empty());
    }

    #[test]
    fn environment_overrides_defaults() {
        let (config, errors) = DashboardConfig::resolve(
            env(&[(DATA_PATH_VAR, "/tmp/p.parquet"), (AGE_BINS_VAR, "12")]),
            None,
        );
        assert!(errors.is_empty());
        assert_eq!(config.data_path, PathBuf::from("/tmp/p.parquet"));
        assert_eq!(config.age_bins, 12);
    }

    #[test]
    fn argument_wins_over_environment() {
        let (config, _) = DashboardConfig::resolve(
            env(&[(DATA_PATH_VAR, "env.csv")]),
            Some("arg.csv".to_string()),
        );
        assert_eq!(config.data_path, PathBuf::from("arg.csv"));
    }

    #[test]
    fn invalid_bin_count_is_rejected() {
        for bad in ["zero", "0", "-3"] {
            let (config, errors) = DashboardConfig::resolve(env(&[(AGE_BINS_VAR, bad)]), None);
            assert_eq!(config.age_bins, DashboardConfig::default().age_bins);
            assert_eq!(
                errors,
                vec![ConfigError::InvalidValue {
                    key: AGE_BINS_VAR.to_string(),
                    value: bad.to_string(),
                }]
            );
        }
    }

    #[test]
    fn invalid_bin_count_keeps_other_overrides() {
        let (config, errors) = DashboardConfig::resolve(
            env(&[(DATA_PATH_VAR, "env.csv"), (AGE_BINS_VAR, "abc")]),
            Some("mine.csv".to_string()),
        );
        assert_eq!(errors.len(), 1);
        assert_eq!(config.data_path, PathBuf::from("mine.csv"));

        let (config, _) =
            DashboardConfig::resolve(env(&[(DATA_PATH_VAR, "env.csv"), (AGE_BINS_VAR, "")]), None);
        assert_eq!(config.data_path, PathBuf::from("env.csv"));
    }
}
