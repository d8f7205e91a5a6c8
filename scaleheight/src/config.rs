use std::{path::Path, str::FromStr};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use url::Url;

pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const DEFAULT_ENDPOINT_URL: &str = "https://script.google.com/macros/s/AKfycbxi4ixomXSmEGQFeix3vjJHNwkl-ZMMib5T77y0A9QtcLw2-5l1VPWZknrcFJX1tt90Zw/exec";
pub const DEFAULT_DASHBOARD_URL: &str = "https://sites.google.com/view/scaleheight/dashboard";

fn deserialize_fromstr<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    <T as FromStr>::Err: std::fmt::Display,
{
    let string = String::deserialize(deserializer)?;
    T::from_str(&string)
        .map_err(|e| de::Error::custom(format!("Error parsing '{}': '{}'", string, e)))
}

pub fn serialize_to_string<T: std::fmt::Display, S: Serializer>(
    field: T,
    s: S,
) -> Result<S::Ok, S::Error> {
    s.serialize_str(&field.to_string())
}

fn default_loglevel() -> log::LevelFilter {
    log::LevelFilter::Info
}

fn default_endpoint_url() -> Url {
    Url::parse(DEFAULT_ENDPOINT_URL).expect("Valid static url")
}

fn default_dashboard_url() -> Url {
    Url::parse(DEFAULT_DASHBOARD_URL).expect("Valid static url")
}

/// A label and the value the user may want to copy, ie a bank account number.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PackageDetail {
    pub label: String,
    pub value: String,
}

/// What the package popup displays.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PackageConfig {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub details: Vec<PackageDetail>,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            title: "ScaleHeight package".to_string(),
            description: "Contact us to receive the coupon code required to create your account."
                .to_string(),
            details: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// The endpoint receiving the coupon validation and registration requests
    #[serde(default = "default_endpoint_url")]
    pub endpoint_url: Url,
    /// Where the user is sent once registered
    #[serde(default = "default_dashboard_url")]
    pub dashboard_url: Url,
    /// What messages to log
    #[serde(
        deserialize_with = "deserialize_fromstr",
        serialize_with = "serialize_to_string",
        default = "default_loglevel"
    )]
    pub log_level: log::LevelFilter,
    #[serde(default)]
    pub package: PackageConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint_url: default_endpoint_url(),
            dashboard_url: default_dashboard_url(),
            log_level: default_loglevel(),
            package: PackageConfig::default(),
        }
    }
}

#[derive(PartialEq, Eq, Debug)]
pub enum ConfigError {
    FileNotFound,
    ReadingFile(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &self {
            Self::FileNotFound => write!(f, "Could not locate the configuration file."),
            Self::ReadingFile(e) => write!(f, "Failed to read configuration file: {}", e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::NotFound => Self::FileNotFound,
            _ => Self::ReadingFile(e.to_string()),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| ConfigError::ReadingFile(e.to_string()))
    }

    /// Same as [`Config::from_file`] but a missing file means the default configuration.
    pub fn from_file_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::from_file(path) {
            Err(ConfigError::FileNotFound) => {
                tracing::info!(
                    "No configuration file at {}, using defaults",
                    path.display()
                );
                Ok(Self::default())
            }
            res => res,
        }
    }
}
