use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::allowance::AllowanceMethod;
use crate::error::ValidationError;

/// Tunable scoring rules, loaded from `fairway.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub points: PointsConfig,
    pub handicap: HandicapConfig,
    pub team: TeamConfig,
}

/// Tournament points awarded per match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointsConfig {
    pub win: f64,
    pub halve: f64,
}

impl Default for PointsConfig {
    fn default() -> Self {
        Self {
            win: 1.0,
            halve: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandicapConfig {
    /// Share of a foursomes pair's combined handicap the side plays off.
    pub foursomes_allowance_percent: f64,
}

impl Default for HandicapConfig {
    fn default() -> Self {
        Self {
            foursomes_allowance_percent: 50.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamConfig {
    /// Allowance used for scramble cards when the round does not name one.
    pub default_allowance: AllowanceMethod,
}

impl ScoringConfig {
    /// Load config from `FAIRWAY_CONFIG` or `config/fairway.toml`, falling
    /// back to defaults if neither exists or parses.
    pub fn load() -> Self {
        Self::load_from(config_path(std::env::var("FAIRWAY_CONFIG").ok()))
    }

    /// Load config from `path`, falling back to defaults if the file is
    /// missing or invalid.
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml(&content) {
                Ok(cfg) => {
                    tracing::info!("Loaded scoring configuration from {}", path.display());
                    cfg
                },
                Err(e) => {
                    tracing::warn!("Failed to load {}: {e}, using defaults", path.display());
                    Self::default()
                },
            },
            Err(_) => Self::default(),
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(content: &str) -> Result<Self, ValidationError> {
        let cfg: Self =
            toml::from_str(content).map_err(|e| ValidationError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let PointsConfig { win, halve } = self.points;
        if !(win.is_finite() && win > 0.0) {
            return Err(ValidationError::Config("points.win must be > 0".to_string()));
        }
        if !(halve.is_finite() && (0.0..=win).contains(&halve)) {
            return Err(ValidationError::Config(
                "points.halve must be between 0 and points.win".to_string(),
            ));
        }
        if !(0.0..=100.0).contains(&self.handicap.foursomes_allowance_percent) {
            return Err(ValidationError::Config(
                "handicap.foursomes_allowance_percent must be within 0..=100".to_string(),
            ));
        }
        if let AllowanceMethod::Percentage(ref pcts) = self.team.default_allowance {
            if pcts.is_empty() {
                return Err(ValidationError::Config(
                    "team.default_allowance percentages must not be empty".to_string(),
                ));
            }
            if pcts.iter().any(|p| !(0.0..=100.0).contains(p)) {
                return Err(ValidationError::Config(
                    "team.default_allowance percentages must be within 0..=100".to_string(),
                ));
            }
        }
        Ok(())
    }
}

const DEFAULT_CONFIG_PATH: &str = "config/fairway.toml";

/// The override path when one is set, otherwise the default location.
fn config_path(override_path: Option<String>) -> PathBuf {
    override_path
        .filter(|p| !p.is_empty())
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = ScoringConfig::default();
        assert!((cfg.points.win - 1.0).abs() < f64::EPSILON);
        assert!((cfg.points.halve - 0.5).abs() < f64::EPSILON);
        assert!((cfg.handicap.foursomes_allowance_percent - 50.0).abs() < f64::EPSILON);
        assert_eq!(cfg.team.default_allowance, AllowanceMethod::Usga);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn parse_partial_toml() {
        let toml_str = r#"
[points]
win = 2.0
"#;
        let cfg = ScoringConfig::from_toml(toml_str).unwrap();
        assert!((cfg.points.win - 2.0).abs() < f64::EPSILON);
        assert!((cfg.points.halve - 0.5).abs() < f64::EPSILON);
        assert_eq!(cfg.handicap, HandicapConfig::default());
    }

    #[test]
    fn parse_full_toml() {
        let toml_str = r#"
[points]
win = 1.0
halve = 0.5

[handicap]
foursomes_allowance_percent = 40.0

[team.default_allowance]
method = "percentage"
percentages = [25.0, 20.0, 15.0, 10.0]
"#;
        let cfg = ScoringConfig::from_toml(toml_str).unwrap();
        assert!((cfg.handicap.foursomes_allowance_percent - 40.0).abs() < f64::EPSILON);
        assert_eq!(
            cfg.team.default_allowance,
            AllowanceMethod::Percentage(vec![25.0, 20.0, 15.0, 10.0])
        );
    }

    #[test]
    fn rejects_halve_above_win() {
        let toml_str = r#"
[points]
win = 1.0
halve = 1.5
"#;
        assert!(matches!(
            ScoringConfig::from_toml(toml_str),
            Err(ValidationError::Config(_))
        ));
    }

    #[test]
    fn rejects_empty_percentages() {
        let cfg = ScoringConfig {
            team: TeamConfig {
                default_allowance: AllowanceMethod::Percentage(vec![]),
            },
            ..ScoringConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let err = ScoringConfig::from_toml("[points\nwin = ").unwrap_err();
        assert!(err.to_string().starts_with("invalid config:"));
    }

    fn temp_config(name: &str, content: &str) -> PathBuf {
        let file = format!("fairway-{}-{name}.toml", std::process::id());
        let path = std::env::temp_dir().join(file);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn override_path_wins() {
        assert_eq!(
            config_path(Some("/etc/fairway/custom.toml".to_string())),
            PathBuf::from("/etc/fairway/custom.toml")
        );
        assert_eq!(config_path(None), PathBuf::from(DEFAULT_CONFIG_PATH));
        assert_eq!(config_path(Some(String::new())), PathBuf::from(DEFAULT_CONFIG_PATH));
    }

    #[test]
    fn load_from_reads_file() {
        let path = temp_config("valid", "[points]\nwin = 2.0\nhalve = 1.0\n");
        let cfg = ScoringConfig::load_from(&path);
        std::fs::remove_file(&path).unwrap();
        assert!((cfg.points.win - 2.0).abs() < f64::EPSILON);
        assert!((cfg.points.halve - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn load_from_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("fairway-does-not-exist.toml");
        assert_eq!(ScoringConfig::load_from(path), ScoringConfig::default());
    }

    #[test]
    fn load_from_invalid_file_uses_defaults() {
        let path = temp_config("invalid", "[points]\nwin = 1.0\nhalve = 3.0\n");
        let cfg = ScoringConfig::load_from(&path);
        std::fs::remove_file(&path).unwrap();
        assert_eq!(cfg, ScoringConfig::default());
    }
}
