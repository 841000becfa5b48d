use crate::error::CatalogError;
use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Products shown before the first "load more"
    pub initial_page_size: usize,
    /// Products added per "load more"
    pub page_increment: usize,
    /// Simulated latency of "load more"
    #[serde(default = "default_load_more_delay_ms")]
    pub load_more_delay_ms: u32,
}

fn default_load_more_delay_ms() -> u32 {
    800
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[catalog]
initial_page_size = 6
page_increment = 3
load_more_delay_ms = 800
"#;

/// Load the embedded default configuration
pub fn load_config() -> anyhow::Result<SiteConfig> {
    load_config_from_str(DEFAULT_CONFIG).context("embedded default config is invalid")
}

/// Parse and validate a configuration document
pub fn load_config_from_str(contents: &str) -> anyhow::Result<SiteConfig> {
    let config: SiteConfig = toml::from_str(contents)?;
    config.validate()?;
    Ok(config)
}

impl SiteConfig {
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.catalog.page_increment == 0 {
            return Err(CatalogError::InvalidConfig(
                "catalog.page_increment must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            initial_page_size: 6,
            page_increment: 3,
            load_more_delay_ms: default_load_more_delay_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config().unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.catalog.initial_page_size, 6);
        assert_eq!(config.catalog.page_increment, 3);
        assert_eq!(config.catalog.load_more_delay_ms, 800);
    }

    #[test]
    fn test_delay_is_optional() {
        let config = load_config_from_str(
            r#"
            [catalog]
            initial_page_size = 9
            page_increment = 9
            "#,
        )
        .unwrap();
        assert_eq!(config.catalog.initial_page_size, 9);
        assert_eq!(config.catalog.load_more_delay_ms, 800);
    }

    #[test]
    fn test_zero_increment_is_rejected() {
        let err = load_config_from_str(
            r#"
            [catalog]
            initial_page_size = 6
            page_increment = 0
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("page_increment"));
    }

    #[test]
    fn test_malformed_config() {
        assert!(load_config_from_str("[catalog]\ninitial_page_size = \"six\"").is_err());
        assert!(load_config_from_str("").is_err());
    }
}
