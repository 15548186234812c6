//! CLI configuration: `gratitree.toml` plus environment overrides.

use std::{env, fs, path::{Path, PathBuf}};

use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "gratitree.toml";
const DEFAULT_STORE_FILE: &str = "gratitree.json";

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub identity: IdentityConfig,
}

#[derive(Debug, Deserialize)]
pub struct StoreConfig {
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_STORE_FILE),
        }
    }
}

/// The identity the CLI acts as; stands in for the hosted auth
/// provider's session.
#[derive(Debug, Default, Deserialize)]
pub struct IdentityConfig {
    pub uid: Option<String>,
    pub display_name: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub admin: bool,
}

impl Config {
    /// Reads the given file (which must then exist), or the default
    /// file if present, and applies environment overrides on top.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::parse_file(path)?,
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::parse_file(default)?
                } else {
                    Self::default()
                }
            }
        };
        Ok(config.apply_env())
    }

    fn parse_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Could not read config file {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("Could not parse config file {}", path.display()))
    }

    fn apply_env(mut self) -> Self {
        if let Ok(path) = env::var("GRATITREE_STORE") {
            self.store.path = PathBuf::from(path);
        }
        if let Ok(uid) = env::var("GRATITREE_UID") {
            self.identity.uid = Some(uid);
        }
        if let Ok(name) = env::var("GRATITREE_NAME") {
            self.identity.display_name = Some(name);
        }
        if let Ok(email) = env::var("GRATITREE_EMAIL") {
            self.identity.email = Some(email);
        }
        if let Ok(admin) = env::var("GRATITREE_ADMIN") {
            self.identity.admin = admin == "1" || admin.eq_ignore_ascii_case("true");
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_a_file() {
        let config = Config::default();
        assert_eq!(config.store.path, PathBuf::from(DEFAULT_STORE_FILE));
        assert_eq!(config.identity.uid, None);
        assert!(!config.identity.admin);
    }

    #[test]
    fn parse_a_full_file() {
        let config: Config = toml::from_str(
            r#"
            [store]
            path = "/tmp/trees.json"

            [identity]
            uid = "uid-1"
            display_name = "Jo"
            admin = true
            "#,
        )
        .unwrap();
        assert_eq!(config.store.path, PathBuf::from("/tmp/trees.json"));
        assert_eq!(config.identity.uid.as_deref(), Some("uid-1"));
        assert!(config.identity.admin);
        assert_eq!(config.identity.email, None);
    }
}
