//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.mathquiz/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::category::Category;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct QuizConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub starting_category: Option<Category>,
    pub seed: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub show_feedback: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_SHOW_FEEDBACK: bool = true;

pub const ENV_CATEGORY: &str = "MATHQUIZ_CATEGORY";
pub const ENV_SEED: &str = "MATHQUIZ_SEED";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub starting_category: Category,
    /// Fixed RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
    pub show_feedback: bool,
}

/// Settings supplied on the command line (None = not specified).
#[derive(Debug, Default, Clone, Copy)]
pub struct CliOverrides {
    pub category: Option<Category>,
    pub seed: Option<u64>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.mathquiz/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".mathquiz").join("config.toml"))
}

/// Load config from `~/.mathquiz/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `QuizConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<QuizConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(QuizConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<QuizConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(QuizConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: QuizConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# Math Quiz Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# starting_category = "addition"     # "addition", "subtract", "multiply", "division"
# seed = 42                          # Fixed seed for a repeatable question sequence

# [display]
# show_feedback = true               # Show "Correct!" / "Incorrect" after each answer
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &QuizConfig, cli: CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading environment variables through `env`.
pub fn resolve_with_env<F>(config: &QuizConfig, cli: CliOverrides, env: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    // Category: CLI → env → config → default
    let starting_category = cli
        .category
        .or_else(|| {
            env(ENV_CATEGORY).and_then(|raw| {
                let parsed = Category::from_key(&raw);
                if parsed.is_none() {
                    warn!("Ignoring {}={:?}: not a category", ENV_CATEGORY, raw);
                }
                parsed
            })
        })
        .or(config.general.starting_category)
        .unwrap_or_default();

    // Seed: CLI → env → config → none
    let seed = cli
        .seed
        .or_else(|| {
            env(ENV_SEED).and_then(|raw| match raw.trim().parse::<u64>() {
                Ok(seed) => Some(seed),
                Err(e) => {
                    warn!("Ignoring {}={:?}: {}", ENV_SEED, raw, e);
                    None
                }
            })
        })
        .or(config.general.seed);

    ResolvedConfig {
        starting_category,
        seed,
        show_feedback: config.display.show_feedback.unwrap_or(DEFAULT_SHOW_FEEDBACK),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config_is_empty() {
        let config = QuizConfig::default();
        assert!(config.general.starting_category.is_none());
        assert!(config.general.seed.is_none());
        assert!(config.display.show_feedback.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&QuizConfig::default(), CliOverrides::default(), no_env);
        assert_eq!(resolved.starting_category, Category::Addition);
        assert_eq!(resolved.seed, None);
        assert_eq!(resolved.show_feedback, DEFAULT_SHOW_FEEDBACK);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = QuizConfig {
            general: GeneralConfig {
                starting_category: Some(Category::Division),
                seed: Some(9),
            },
            display: DisplayConfig {
                show_feedback: Some(false),
            },
        };
        let resolved = resolve_with_env(&config, CliOverrides::default(), no_env);
        assert_eq!(resolved.starting_category, Category::Division);
        assert_eq!(resolved.seed, Some(9));
        assert!(!resolved.show_feedback);
    }

    #[test]
    fn test_env_beats_config() {
        let config = QuizConfig {
            general: GeneralConfig {
                starting_category: Some(Category::Division),
                seed: Some(9),
            },
            ..Default::default()
        };
        let env = env_from(&[(ENV_CATEGORY, "multiply"), (ENV_SEED, "123")]);
        let resolved = resolve_with_env(&config, CliOverrides::default(), env);
        assert_eq!(resolved.starting_category, Category::Multiply);
        assert_eq!(resolved.seed, Some(123));
    }

    #[test]
    fn test_cli_wins() {
        let env = env_from(&[(ENV_CATEGORY, "multiply"), (ENV_SEED, "123")]);
        let cli = CliOverrides {
            category: Some(Category::Subtract),
            seed: Some(1),
        };
        let resolved = resolve_with_env(&QuizConfig::default(), cli, env);
        assert_eq!(resolved.starting_category, Category::Subtract);
        assert_eq!(resolved.seed, Some(1));
    }

    #[test]
    fn test_bad_env_values_fall_through() {
        let config = QuizConfig {
            general: GeneralConfig {
                starting_category: Some(Category::Division),
                seed: Some(9),
            },
            ..Default::default()
        };
        let env = env_from(&[(ENV_CATEGORY, "modulo"), (ENV_SEED, "-5")]);
        let resolved = resolve_with_env(&config, CliOverrides::default(), env);
        assert_eq!(resolved.starting_category, Category::Division);
        assert_eq!(resolved.seed, Some(9));
    }

    #[test]
    fn test_toml_parses() {
        let toml_str = r#"
[general]
starting_category = "multiply"
seed = 42

[display]
show_feedback = false
"#;
        let config: QuizConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.starting_category, Some(Category::Multiply));
        assert_eq!(config.general.seed, Some(42));
        assert_eq!(config.display.show_feedback, Some(false));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let toml_str = r#"
[display]
show_feedback = true
"#;
        let config: QuizConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.display.show_feedback, Some(true));
        assert!(config.general.starting_category.is_none());
    }

    #[test]
    fn test_unknown_category_is_parse_error() {
        let result: Result<QuizConfig, _> =
            toml::from_str("[general]\nstarting_category = \"modulo\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_generated_default_is_valid_toml() {
        let config: QuizConfig = toml::from_str(DEFAULT_CONFIG_CONTENT).unwrap();
        assert!(config.general.starting_category.is_none());
    }

    #[test]
    fn test_load_config_from_generates_missing_file() {
        let dir = std::env::temp_dir().join(format!("mathquiz-config-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_dir_all(&dir);

        let config = load_config_from(&path).unwrap();
        assert!(config.general.seed.is_none());
        assert!(path.exists());

        fs::write(&path, "[general]\nseed = 5\n").unwrap();
        let config = load_config_from(&path).unwrap();
        assert_eq!(config.general.seed, Some(5));

        fs::write(&path, "[general\n").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));

        let _ = fs::remove_dir_all(&dir);
    }
}
