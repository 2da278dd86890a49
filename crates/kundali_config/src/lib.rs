//! Configuration for the kundali engine and CLI.
//!
//! Resolution order (highest priority first):
//! 1. CLI flags ([`CliOverrides`])
//! 2. Environment variables (`KUNDALI_NAVAMSA`, `KUNDALI_POLAR_LIMIT`,
//!    `KUNDALI_FORMAT`, `KUNDALI_LOG`)
//! 3. TOML file (explicit path, or `kundali.toml` in the working directory)
//! 4. Compiled defaults
//!
//! ```toml
//! [chart]
//! navamsa = "parity-offset"
//! polar_latitude_limit_deg = 89.0
//!
//! [output]
//! format = "json"
//!
//! [logging]
//! filter = "kundali_chart=debug"
//! ```

pub mod error;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use kundali_chart::ChartOptions;
use kundali_vedic::{DEFAULT_POLAR_LIMIT_DEG, NavamsaConvention};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use error::ConfigError;

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "kundali.toml";

pub const ENV_NAVAMSA: &str = "KUNDALI_NAVAMSA";
pub const ENV_POLAR_LIMIT: &str = "KUNDALI_POLAR_LIMIT";
pub const ENV_FORMAT: &str = "KUNDALI_FORMAT";
pub const ENV_LOG: &str = "KUNDALI_LOG";

pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::invalid(
                "output.format",
                format!("unknown format '{other}' (expected text or json)"),
            )),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSection {
    pub navamsa: Option<NavamsaConvention>,
    pub polar_latitude_limit_deg: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// `tracing_subscriber::EnvFilter` directive string.
    pub filter: Option<String>,
}

/// Top-level configuration. Unset values fall back to compiled defaults
/// through the accessors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KundaliConfig {
    pub chart: ChartSection,
    pub output: OutputSection,
    pub logging: LoggingSection,
}

/// Values given on the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOverrides {
    pub navamsa: Option<NavamsaConvention>,
    pub polar_latitude_limit_deg: Option<f64>,
    pub format: Option<OutputFormat>,
    pub log_filter: Option<String>,
}

impl KundaliConfig {
    /// Resolve all layers against the process environment.
    pub fn load(path: Option<&Path>, cli: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, cli, |key| std::env::var(key).ok())
    }

    /// [`load`](Self::load) with an explicit environment lookup.
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load_with_env<F>(
        path: Option<&Path>,
        cli: Option<&CliOverrides>,
        env: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        match path {
            Some(p) => config.merge(&Self::from_file(p)?),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    config.merge(&Self::from_file(default)?);
                }
            }
        }

        config.apply_env(env)?;
        if let Some(cli) = cli {
            config.apply_cli(cli);
        }
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        debug!(path = %path.display(), "loading config file");
        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Overlay the values `other` sets.
    pub fn merge(&mut self, other: &KundaliConfig) {
        if other.chart.navamsa.is_some() {
            self.chart.navamsa = other.chart.navamsa;
        }
        if other.chart.polar_latitude_limit_deg.is_some() {
            self.chart.polar_latitude_limit_deg = other.chart.polar_latitude_limit_deg;
        }
        if other.output.format.is_some() {
            self.output.format = other.output.format;
        }
        if other.logging.filter.is_some() {
            self.logging.filter.clone_from(&other.logging.filter);
        }
    }

    fn apply_env<F>(&mut self, env: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = env(ENV_NAVAMSA) {
            let conv = val
                .parse::<NavamsaConvention>()
                .map_err(|e| ConfigError::invalid(ENV_NAVAMSA, e.to_string()))?;
            self.chart.navamsa = Some(conv);
        }
        if let Some(val) = env(ENV_POLAR_LIMIT) {
            let limit = val
                .trim()
                .parse::<f64>()
                .map_err(|e| ConfigError::invalid(ENV_POLAR_LIMIT, e.to_string()))?;
            self.chart.polar_latitude_limit_deg = Some(limit);
        }
        if let Some(val) = env(ENV_FORMAT) {
            self.output.format = Some(val.parse()?);
        }
        if let Some(val) = env(ENV_LOG) {
            self.logging.filter = Some(val);
        }
        Ok(())
    }

    pub fn apply_cli(&mut self, cli: &CliOverrides) {
        if cli.navamsa.is_some() {
            self.chart.navamsa = cli.navamsa;
        }
        if cli.polar_latitude_limit_deg.is_some() {
            self.chart.polar_latitude_limit_deg = cli.polar_latitude_limit_deg;
        }
        if cli.format.is_some() {
            self.output.format = cli.format;
        }
        if cli.log_filter.is_some() {
            self.logging.filter.clone_from(&cli.log_filter);
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(limit) = self.chart.polar_latitude_limit_deg {
            if !(limit.is_finite() && limit > 0.0 && limit < 90.0) {
                return Err(ConfigError::invalid(
                    "chart.polar_latitude_limit_deg",
                    format!("{limit} must lie in (0, 90)"),
                ));
            }
        }
        if let Some(filter) = &self.logging.filter {
            if filter.trim().is_empty() {
                return Err(ConfigError::invalid("logging.filter", "must not be empty"));
            }
        }
        Ok(())
    }

    pub fn navamsa(&self) -> NavamsaConvention {
        self.chart.navamsa.unwrap_or_default()
    }

    pub fn polar_latitude_limit_deg(&self) -> f64 {
        self.chart
            .polar_latitude_limit_deg
            .unwrap_or(DEFAULT_POLAR_LIMIT_DEG)
    }

    pub fn format(&self) -> OutputFormat {
        self.output.format.unwrap_or_default()
    }

    pub fn log_filter(&self) -> &str {
        self.logging.filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    pub fn to_chart_options(&self) -> ChartOptions {
        ChartOptions {
            navamsa: self.navamsa(),
            polar_limit_deg: self.polar_latitude_limit_deg(),
        }
    }
}
