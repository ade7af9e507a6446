use certify_core::{LicenseCatalog, Route};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Path to a TOML file with an [`AppConfig`].
pub const CONFIG_ENV: &str = "CERTIFY_CONFIG";
/// Overrides `catalog_path` from the config file.
pub const CATALOG_ENV: &str = "CERTIFY_CATALOG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window_title: String,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    /// Path the app opens on, e.g. "/manufacturer/register".
    pub start_path: String,
    pub catalog_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "Manufacturer Certification Portal".to_string(),
            window_size: [1200.0, 860.0],
            min_window_size: [800.0, 600.0],
            start_path: "/".to_string(),
            catalog_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Reads `CERTIFY_CONFIG` and `CERTIFY_CATALOG`; falls back to defaults.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> anyhow::Result<Self> {
        use anyhow::Context;

        let mut config = match std::env::var_os(CONFIG_ENV) {
            Some(path) => {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading config {}", PathBuf::from(&path).display()))?;
                Self::from_toml_str(&raw)?
            }
            None => Self::default(),
        };

        if let Some(catalog) = std::env::var_os(CATALOG_ENV) {
            config.catalog_path = Some(PathBuf::from(catalog));
        }
        Ok(config)
    }

    pub fn start_route(&self) -> Route {
        Route::parse(&self.start_path).unwrap_or_else(|e| {
            log::warn!("Ignoring start path: {}", e);
            Route::Landing
        })
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_catalog(&self) -> anyhow::Result<LicenseCatalog> {
        Ok(certify_core::load_or_builtin(self.catalog_path.as_deref())?)
    }

    /// The browser build has no filesystem; it always uses the built-in table.
    #[cfg(target_arch = "wasm32")]
    pub fn load_catalog(&self) -> anyhow::Result<LicenseCatalog> {
        Ok(LicenseCatalog::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml_str(r#"start_path = "/manufacturer/register""#).unwrap();

        assert_eq!(config.start_route(), Route::CompanyRegistration);
        assert_eq!(config.window_title, AppConfig::default().window_title);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_bad_start_path_falls_back_to_landing() {
        let config = AppConfig {
            start_path: "/nowhere".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.start_route(), Route::Landing);
    }

    #[test]
    fn test_default_catalog_is_builtin() {
        let catalog = AppConfig::default().load_catalog().unwrap();
        assert_eq!(catalog, LicenseCatalog::builtin());
    }
}
