use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// On-disk state locations.
#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    /// Directory holding the session record. Default: "data".
    #[serde(default = "default_data_dir")]
    pub dir: String,
}

fn default_data_dir() -> String {
    "data".into()
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
        }
    }
}

/// CLI application configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub data: DataConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var("TRIVIUM_CONFIG").unwrap_or_else(|_| "config/config".to_string());

        let s = Config::builder()
            .set_default("data.dir", "data")?
            .add_source(File::with_name(&config_path).required(false))
            .add_source(Environment::with_prefix("TRIVIUM").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
