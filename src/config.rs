//! Runtime configuration, read from the environment.
use std::env;
use std::path::PathBuf;

pub const STORE_PATH_VAR: &str = "FORMFLOW_STORE";
pub const ASSET_ROOT_VAR: &str = "FORMFLOW_ASSETS";

/// Where the engine keeps its flows and their template assets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Snapshot file of the flow store.
    pub store_path: PathBuf,
    /// Root directory holding one asset directory per flow.
    pub asset_root: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from("flows.bin"),
            asset_root: PathBuf::from("assets"),
        }
    }
}

impl EngineConfig {
    /// Reads `FORMFLOW_STORE` and `FORMFLOW_ASSETS`, falling back to the defaults
    /// for unset or empty variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let path = |name: &str, default: PathBuf| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(default)
        };
        Self {
            store_path: path(STORE_PATH_VAR, defaults.store_path),
            asset_root: path(ASSET_ROOT_VAR, defaults.asset_root),
        }
    }

    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = path.into();
        self
    }

    pub fn with_asset_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.asset_root = path.into();
        self
    }
}
