use crate::core::animation::DEFAULT_DURATION;
use crate::core::easing::{Direction, EasingFamily};
use crate::core::error::{Error, Result};
use crate::core::resolver::{DEFAULT_EXPONENT, DEFAULT_POWER, EasingResolver};
use crate::core::taxonomy::CandidateSource;
use crate::utils::get_data_dir;
use crate::validators;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "config.json";

/// Persisted gallery settings: the last easing selection and its parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub family: EasingFamily,
    #[serde(default)]
    pub direction: Direction,
    /// Animation length in seconds (default: 0.5s, max: 60s)
    #[serde(default = "default_duration_secs")]
    pub duration_secs: f64,
    /// Exponent for the Exponential family
    #[serde(default = "default_exponent")]
    pub exponent: f64,
    /// Power for the Power family
    #[serde(default = "default_power")]
    pub power: f64,
    /// Frames sampled per run by `gallery ease`
    #[serde(default = "default_frames")]
    pub frames: u32,
    #[serde(default)]
    pub suggestion_source: CandidateSource,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            family: EasingFamily::default(),
            direction: Direction::default(),
            duration_secs: default_duration_secs(),
            exponent: DEFAULT_EXPONENT,
            power: DEFAULT_POWER,
            frames: default_frames(),
            suggestion_source: CandidateSource::default(),
        }
    }
}

fn default_duration_secs() -> f64 {
    DEFAULT_DURATION.as_secs_f64()
}

fn default_exponent() -> f64 {
    DEFAULT_EXPONENT
}

fn default_power() -> f64 {
    DEFAULT_POWER
}

fn default_frames() -> u32 {
    20
}

impl AppConfig {
    /// Checks every numeric field.
    pub fn validate(&self) -> Result<()> {
        validators::validate_duration_secs(self.duration_secs)?;
        validators::validate_exponent(self.exponent)?;
        validators::validate_power(self.power)?;
        validators::validate_frames(self.frames)?;
        Ok(())
    }

    pub fn resolver(&self) -> EasingResolver {
        EasingResolver::new(self.exponent, self.power)
    }

    /// The configured duration, or the default when out of range.
    pub fn duration(&self) -> Duration {
        validators::validate_duration_secs(self.duration_secs).unwrap_or(DEFAULT_DURATION)
    }
}

pub fn config_path() -> Option<PathBuf> {
    get_data_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Saves the config to the data directory using an atomic write pattern.
///
/// See [`save_config_to`].
pub fn save_config(config: &AppConfig) -> Result<()> {
    let path = config_path().ok_or(Error::NoDataDir)?;
    crate::utils::ensure_dirs()?;
    save_config_to(&path, config)
}

/// Writes `config` to `path` atomically.
/// 1. Writes to a temporary file in the same directory.
/// 2. Sets restrictive permissions (0o600).
/// 3. Atomically renames to the target path.
///
/// Invalid configs are rejected before anything touches the disk.
pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<()> {
    config.validate()?;
    let json = serde_json::to_string_pretty(config)?;

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut temp = tempfile::NamedTempFile::new_in(dir)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        temp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o600))?;
    }

    temp.write_all(json.as_bytes())?;
    temp.as_file().sync_all()?;
    temp.persist(path)?;

    tracing::info!("Saved config to {}", path.display());
    Ok(())
}

/// Loads the config from the data directory, or returns default if not found.
pub fn load_config() -> AppConfig {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => AppConfig::default(),
    }
}

/// Loads the config at `path`.
///
/// Missing, unreadable, malformed or out-of-range configs all fall back to
/// defaults; the reason is logged.
pub fn load_config_from(path: &Path) -> AppConfig {
    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return AppConfig::default(),
        Err(e) => {
            tracing::warn!("Failed to read config {}: {}", path.display(), e);
            return AppConfig::default();
        }
    };

    match serde_json::from_str::<AppConfig>(&json) {
        Ok(config) => match config.validate() {
            Ok(()) => config,
            Err(e) => {
                tracing::warn!("Ignoring invalid config {}: {}", path.display(), e);
                AppConfig::default()
            }
        },
        Err(e) => {
            tracing::warn!("Failed to parse config {}: {}", path.display(), e);
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_gallery_sample() {
        let config = AppConfig::default();
        assert_eq!(config.family, EasingFamily::Back);
        assert_eq!(config.direction, Direction::Out);
        assert_eq!(config.duration(), Duration::from_millis(500));
        assert_eq!(config.exponent, 6.0);
        assert_eq!(config.power, 6.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"family": "Elastic"}"#).unwrap();
        assert_eq!(config.family, EasingFamily::Elastic);
        assert_eq!(config.direction, Direction::Out);
        assert_eq!(config.power, DEFAULT_POWER);
        assert_eq!(config.suggestion_source, CandidateSource::Controls);
    }

    #[test]
    fn test_direction_serializes_kebab_case() {
        let config = AppConfig {
            direction: Direction::InOut,
            ..AppConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""direction":"in-out""#));
    }

    #[test]
    fn test_resolver_uses_config_parameters() {
        let config = AppConfig {
            exponent: 2.0,
            power: 3.0,
            ..AppConfig::default()
        };
        let resolver = config.resolver();
        assert_eq!(
            resolver.resolve("Exponential", Direction::In).parameter,
            Some(2.0)
        );
        assert_eq!(resolver.resolve("Power", Direction::In).parameter, Some(3.0));
    }

    #[test]
    fn test_out_of_range_duration_falls_back() {
        let config = AppConfig {
            duration_secs: 600.0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
        assert_eq!(config.duration(), DEFAULT_DURATION);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let config = AppConfig {
            family: EasingFamily::Bounce,
            direction: Direction::In,
            duration_secs: 1.25,
            ..AppConfig::default()
        };

        save_config_to(&path, &config).unwrap();
        assert_eq!(load_config_from(&path), config);
    }

    #[cfg(unix)]
    #[test]
    fn test_saved_config_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        save_config_to(&path, &AppConfig::default()).unwrap();
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_invalid_config_is_not_saved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let config = AppConfig {
            power: 0.0,
            ..AppConfig::default()
        };
        assert!(matches!(
            save_config_to(&path, &config),
            Err(Error::Validation { .. })
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_load_missing_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("nope.json"));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_corrupt_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_config_from(&path), AppConfig::default());

        std::fs::write(&path, r#"{"power": -3.0}"#).unwrap();
        assert_eq!(load_config_from(&path), AppConfig::default());
    }
}
