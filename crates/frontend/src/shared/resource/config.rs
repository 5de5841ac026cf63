//! Endpoint configuration for the storefront API.
//!
//! Defaults are embedded in the bundle; the base URL can be fixed at build
//! time through the `API_URL` environment variable. An empty base URL sends
//! requests to the page origin.

use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
base_url = ""
timeout_ms = 15000

[resources.category]
list = "/auth/get-categories"
create = "/auth/add-category"

[resources.model]
list = "/auth/get-models"
create = "/auth/add-model"

[resources.hero]
list = "/auth/get-hero"
create = "/auth/add-hero"
delete = "/auth/delete-hero/{id}"

[resources.product]
list = "/auth/get-products"
create = "/auth/add-product"
update = "/auth/update-product/{id}"
delete = "/auth/delete-product/{id}"
"#;

const DEFAULT_TIMEOUT_MS: u32 = 15_000;

/// Resource collections managed by the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Category,
    Model,
    Hero,
    Product,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Model => "model",
            Self::Hero => "hero",
            Self::Product => "product",
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid API configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("no endpoints configured for resource `{0}`")]
    MissingResource(&'static str),
}

/// Endpoint paths of one collection. `{id}` is replaced by the entity id.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResourcePaths {
    pub list: String,
    pub create: String,
    #[serde(default)]
    pub update: Option<String>,
    #[serde(default)]
    pub delete: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u32,
    pub resources: BTreeMap<String, ResourcePaths>,
}

fn default_timeout_ms() -> u32 {
    DEFAULT_TIMEOUT_MS
}

impl ApiConfig {
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Embedded defaults plus the build-time `API_URL` override
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_toml(DEFAULT_CONFIG)?;
        if let Some(url) = option_env!("API_URL") {
            log::info!("Using API base URL from build environment: {}", url);
            config.base_url = url.to_string();
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn paths(&self, kind: ResourceKind) -> Result<&ResourcePaths, ConfigError> {
        self.resources
            .get(kind.as_str())
            .ok_or(ConfigError::MissingResource(kind.as_str()))
    }

    /// Join the base URL and an endpoint path
    pub fn url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }

    /// URL of an endpoint template with `{id}` substituted (percent-encoded)
    pub fn url_for_id(&self, template: &str, id: &str) -> String {
        let path = template.replace("{id}", &urlencoding::encode(id));
        self.url(&path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = ApiConfig::from_toml(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.timeout_ms, 15_000);
        for kind in [
            ResourceKind::Category,
            ResourceKind::Model,
            ResourceKind::Hero,
            ResourceKind::Product,
        ] {
            assert!(config.paths(kind).is_ok(), "missing {}", kind.as_str());
        }
        let product = config.paths(ResourceKind::Product).unwrap();
        assert_eq!(product.update.as_deref(), Some("/auth/update-product/{id}"));
        assert!(config.paths(ResourceKind::Category).unwrap().update.is_none());
    }

    #[test]
    fn test_url_joining() {
        let config = ApiConfig::from_toml(DEFAULT_CONFIG)
            .unwrap()
            .with_base_url("https://api.shop.test/");
        assert_eq!(
            config.url("/auth/get-hero"),
            "https://api.shop.test/auth/get-hero"
        );
        assert_eq!(
            config.url_for_id("/auth/delete-product/{id}", "a b/c"),
            "https://api.shop.test/auth/delete-product/a%20b%2Fc"
        );
    }

    #[test]
    fn test_same_origin_when_base_is_empty() {
        let config = ApiConfig::from_toml(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.url("/auth/get-models"), "/auth/get-models");
    }

    #[test]
    fn test_missing_resource_is_reported() {
        let config = ApiConfig::from_toml(
            r#"
            [resources.hero]
            list = "/h"
            create = "/h"
            "#,
        )
        .unwrap();
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
        assert!(matches!(
            config.paths(ResourceKind::Product),
            Err(ConfigError::MissingResource("product"))
        ));
    }
}
