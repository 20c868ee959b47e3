//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.folio/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::content::Portfolio;
use crate::core::input::{DEFAULT_SETTLE, DEFAULT_SWIPE_DISTANCE, DEFAULT_WHEEL_THRESHOLD};
use crate::core::navigator::DEFAULT_COOLDOWN;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct GeneralConfig {
    /// Section id shown at startup ("hero", "about", ...).
    pub start_section: Option<String>,
    /// "dark" or "light".
    pub theme: Option<String>,
    /// Path to a portfolio TOML file, relative to `~/.folio/`.
    pub portfolio_file: Option<String>,
    /// Skip the startup splash entirely.
    pub skip_splash: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NavigationConfig {
    pub cooldown_ms: Option<u64>,
    pub settle_ms: Option<u64>,
    pub wheel_threshold: Option<i32>,
    pub swipe_distance: Option<i32>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub start_section: String,
    pub theme: String,
    pub skip_splash: bool,
    pub cooldown: Duration,
    pub settle: Duration,
    pub wheel_threshold: i32,
    pub swipe_distance: i32,
    pub portfolio: Portfolio,
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

/// Returns the path to `~/.folio/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".folio").join("config.toml"))
}

/// Load config from `~/.folio/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `FolioConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<FolioConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(FolioConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(FolioConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: FolioConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Folio Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_section = "hero"       # hero, about, skills, experience, projects, education, contact
# theme = "dark"               # "dark" or "light"
# portfolio_file = "me.toml"   # Path relative to ~/.folio/
# skip_splash = false

# [navigation]
# cooldown_ms = 300            # Lock window after each section transition
# settle_ms = 500              # Wheel gesture suppression window
# wheel_threshold = 10         # Minimum wheel delta magnitude
# swipe_distance = 50          # Minimum drag displacement for a swipe
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_*` arguments are from CLI flags (None = not specified).
pub fn resolve(
    config: &FolioConfig,
    cli_section: Option<&str>,
    cli_theme: Option<&str>,
    cli_portfolio: Option<&Path>,
) -> ResolvedConfig {
    resolve_from(
        config,
        cli_section,
        cli_theme,
        cli_portfolio,
        std::env::var("FOLIO_SECTION").ok(),
        std::env::var("FOLIO_THEME").ok(),
    )
}

/// The actual collapse, with the env layer passed in so tests don't touch
/// process-global state.
fn resolve_from(
    config: &FolioConfig,
    cli_section: Option<&str>,
    cli_theme: Option<&str>,
    cli_portfolio: Option<&Path>,
    env_section: Option<String>,
    env_theme: Option<String>,
) -> ResolvedConfig {
    // Start section: CLI → env → config → default
    let start_section = cli_section
        .map(|s| s.to_string())
        .or(env_section)
        .or_else(|| config.general.start_section.clone())
        .unwrap_or_else(|| "hero".to_string());

    // Theme: CLI → env → config → default
    let theme = cli_theme
        .map(|s| s.to_string())
        .or(env_theme)
        .or_else(|| config.general.theme.clone())
        .unwrap_or_else(|| "dark".to_string());

    let portfolio = resolve_portfolio(config, cli_portfolio);

    ResolvedConfig {
        start_section,
        theme,
        skip_splash: config.general.skip_splash.unwrap_or(false),
        cooldown: config
            .navigation
            .cooldown_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_COOLDOWN),
        settle: config
            .navigation
            .settle_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_SETTLE),
        wheel_threshold: config
            .navigation
            .wheel_threshold
            .unwrap_or(DEFAULT_WHEEL_THRESHOLD),
        swipe_distance: config
            .navigation
            .swipe_distance
            .unwrap_or(DEFAULT_SWIPE_DISTANCE),
        portfolio,
    }
}

/// Resolves the portfolio content: a `--portfolio` path wins over the
/// config-file key, which wins over the built-in default profile. A missing
/// or malformed file logs a warning and falls back rather than aborting
/// startup.
fn resolve_portfolio(config: &FolioConfig, cli_path: Option<&Path>) -> Portfolio {
    if let Some(path) = cli_path
        && let Some(portfolio) = load_portfolio_file(path)
    {
        return portfolio;
    }

    if let Some(ref file) = config.general.portfolio_file
        && let Some(home) = dirs::home_dir()
        && let Some(portfolio) = load_portfolio_file(&home.join(".folio").join(file))
    {
        return portfolio;
    }

    Portfolio::default()
}

fn load_portfolio_file(path: &Path) -> Option<Portfolio> {
    match fs::read_to_string(path) {
        Ok(contents) => match Portfolio::from_toml(&contents) {
            Ok(portfolio) => {
                info!("Loaded portfolio from {}", path.display());
                Some(portfolio)
            }
            Err(e) => {
                warn!("Malformed portfolio file {}: {}", path.display(), e);
                None
            }
        },
        Err(e) => {
            warn!("Failed to read portfolio file {}: {}", path.display(), e);
            None
        }
    }
}
