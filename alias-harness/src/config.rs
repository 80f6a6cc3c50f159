use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

/// Harness configuration loaded from file and/or environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Directory holding one sub-directory per scenario.
    pub scenarios_dir: PathBuf,
    /// Emit JSON instead of text.
    pub json: bool,
}

/// Raw TOML file structure for `~/.config/alias-harness/config.toml`.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    scenarios_dir: Option<PathBuf>,
    json: Option<bool>,
}

/// Default config file location.
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("alias-harness").join("config.toml"))
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            scenarios_dir: PathBuf::from("scenarios"),
            json: false,
        }
    }
}

impl HarnessConfig {
    /// Load configuration from file and environment variables.
    ///
    /// Priority: environment variables override file values. A missing file
    /// yields defaults; an unreadable or malformed one is an error.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let path = config_path.map(Path::to_path_buf).or_else(default_config_path);

        let file_config = read_config_file(path.as_deref())?;

        Self::from_file_and_env(
            file_config,
            std::env::var("ALIAS_HARNESS_SCENARIOS_DIR").ok(),
            std::env::var("ALIAS_HARNESS_JSON").ok(),
        )
    }

    /// Build config from parsed file values and environment values.
    fn from_file_and_env(
        file_config: ConfigFile,
        env_scenarios_dir: Option<String>,
        env_json: Option<String>,
    ) -> Result<Self> {
        let defaults = Self::default();

        let scenarios_dir = env_scenarios_dir
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .or(file_config.scenarios_dir)
            .unwrap_or(defaults.scenarios_dir);

        let json = match env_json {
            Some(raw) => parse_bool(&raw)
                .with_context(|| format!("invalid ALIAS_HARNESS_JSON value: {raw}"))?,
            None => file_config.json.unwrap_or(defaults.json),
        };

        Ok(Self {
            scenarios_dir,
            json,
        })
    }
}

/// Parse the config file, or defaults when there is none.
fn read_config_file(path: Option<&Path>) -> Result<ConfigFile> {
    match path {
        Some(path) if path.exists() => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<ConfigFile>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))
        }
        _ => Ok(ConfigFile::default()),
    }
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" | "" => Ok(false),
        other => bail!("expected a boolean, got '{other}'"),
    }
}
