use crate::error::{Result, ShopError};
use crate::model::DatePolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_ADMIN_CODE: &str = "1234";

/// Configuration for shopkeep, stored in `<data-dir>/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShopConfig {
    /// Static shared secret gating the admin commands.
    #[serde(default = "default_admin_code")]
    pub admin_code: String,

    /// Whether back-dated orders are rejected.
    #[serde(default)]
    pub date_policy: DatePolicy,
}

fn default_admin_code() -> String {
    DEFAULT_ADMIN_CODE.to_string()
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            admin_code: default_admin_code(),
            date_policy: DatePolicy::default(),
        }
    }
}

impl ShopConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShopError::Io)?;
        let config: ShopConfig =
            serde_json::from_str(&content).map_err(ShopError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ShopError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ShopError::Serialization)?;
        fs::write(config_path, content).map_err(ShopError::Io)?;
        Ok(())
    }

    /// Check an operator-supplied admin code against the configured one.
    pub fn verify_code(&self, code: &str) -> Result<()> {
        if code == self.admin_code {
            Ok(())
        } else {
            Err(ShopError::AdminCode)
        }
    }
}
