use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::model::settings::DEFAULT_MEAL_COST;

pub const CONFIG_FILE_NAME: &str = "config.json";
const DATA_DIR_NAME: &str = ".messly";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// Cost per meal for months without their own settings.
    #[serde(default = "default_meal_cost")]
    pub default_meal_cost: Decimal,
}

fn default_meal_cost() -> Decimal {
    DEFAULT_MEAL_COST
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_meal_cost: default_meal_cost(),
        }
    }
}

impl Config {
    /// Reads `config.json` from `dir`. A missing file yields the defaults.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        if config.default_meal_cost < Decimal::ZERO {
            return Err(anyhow!(
                "default_meal_cost must be non-negative, got {}",
                config.default_meal_cost
            ));
        }
        Ok(config)
    }

    pub fn load_or_default(dir: &Path) -> Self {
        match Self::load(dir) {
            Ok(config) => config,
            Err(e) => {
                warn!("falling back to default config: {:#}", e);
                Self::default()
            }
        }
    }
}

/// Uses `base_dir` when given, otherwise `~/.messly`. The directory is created if missing.
pub fn resolve_data_dir(base_dir: Option<PathBuf>) -> Result<PathBuf> {
    let path = match base_dir {
        Some(dir) => dir,
        None => {
            let home_dir = dirs::home_dir()
                .ok_or_else(|| anyhow!("Could not determine home directory"))?;
            home_dir.join(DATA_DIR_NAME)
        }
    };
    fs::create_dir_all(&path)?;
    Ok(path)
}
