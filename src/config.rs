//! Configuration types for page size limits
//!
//! A `PageConfig` carries the default and maximum page size for one
//! endpoint. `PaginationSettings` groups a default `PageConfig` with
//! per-endpoint overrides and is loaded from YAML or JSON.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Page size used when the request does not name one
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Upper bound applied to requested page sizes
pub const MAX_PAGE_SIZE: u64 = 100;

// ============================================================================
// Page Config
// ============================================================================

/// Default and maximum page size for one endpoint
///
/// Always satisfies `1 <= default_size <= max_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PageConfigDef")]
pub struct PageConfig {
    default_size: u64,
    max_size: u64,
}

impl PageConfig {
    /// Create a validated page config
    pub fn new(default_size: u64, max_size: u64) -> Result<Self> {
        if max_size < 1 {
            return Err(Error::invalid_config("max_size", "must be positive"));
        }
        if default_size < 1 {
            return Err(Error::invalid_config("default_size", "must be positive"));
        }
        if default_size > max_size {
            return Err(Error::invalid_config(
                "default_size",
                format!("{default_size} exceeds max_size {max_size}"),
            ));
        }

        Ok(Self {
            default_size,
            max_size,
        })
    }

    pub fn default_size(&self) -> u64 {
        self.default_size
    }

    pub fn max_size(&self) -> u64 {
        self.max_size
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            default_size: DEFAULT_PAGE_SIZE,
            max_size: MAX_PAGE_SIZE,
        }
    }
}

/// Unvalidated shape of a `PageConfig` as it appears in a config file
#[derive(Debug, Clone, Deserialize)]
struct PageConfigDef {
    #[serde(default = "default_page_size")]
    default_size: u64,
    #[serde(default = "default_max_size")]
    max_size: u64,
}

impl TryFrom<PageConfigDef> for PageConfig {
    type Error = Error;

    fn try_from(def: PageConfigDef) -> Result<Self> {
        PageConfig::new(def.default_size, def.max_size)
    }
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

fn default_max_size() -> u64 {
    MAX_PAGE_SIZE
}

// ============================================================================
// Pagination Settings
// ============================================================================

/// Page size limits for a whole service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaginationSettings {
    /// Limits used by endpoints without an override
    #[serde(default)]
    pub defaults: PageConfig,

    /// Per-endpoint overrides, keyed by endpoint name
    #[serde(default)]
    pub endpoints: HashMap<String, EndpointOverride>,
}

/// Partial page config for a single endpoint
///
/// Missing fields are taken from `PaginationSettings::defaults`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EndpointOverride {
    #[serde(default)]
    pub default_size: Option<u64>,

    #[serde(default)]
    pub max_size: Option<u64>,
}

impl PaginationSettings {
    /// Resolve the page config for an endpoint
    ///
    /// Unknown endpoints get the defaults. When an override lowers
    /// `max_size` without naming a `default_size`, the inherited default is
    /// capped at the new maximum.
    pub fn for_endpoint(&self, name: &str) -> Result<PageConfig> {
        let Some(over) = self.endpoints.get(name) else {
            tracing::debug!("No pagination override for endpoint '{}', using defaults", name);
            return Ok(self.defaults);
        };

        let max_size = over.max_size.unwrap_or(self.defaults.max_size());
        let default_size = over
            .default_size
            .unwrap_or_else(|| self.defaults.default_size().min(max_size));

        PageConfig::new(default_size, max_size).map_err(|e| {
            Error::config(format!("Invalid pagination for endpoint '{name}': {e}"))
        })
    }

    /// Check every endpoint override resolves to a valid config
    pub fn validate(&self) -> Result<()> {
        for name in self.endpoints.keys() {
            self.for_endpoint(name)?;
        }
        Ok(())
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Load pagination settings from a YAML or JSON file
///
/// Files ending in `.json` are parsed as JSON, everything else as YAML.
pub fn load_settings(path: impl AsRef<Path>) -> Result<PaginationSettings> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        Error::config(format!(
            "Failed to read pagination config '{}': {}",
            path.display(),
            e
        ))
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let settings: PaginationSettings = if is_json {
        serde_json::from_str(&content)?
    } else {
        serde_yaml::from_str(&content)?
    };

    settings.validate()?;
    tracing::debug!(
        "Loaded pagination config from {} ({} endpoint overrides)",
        path.display(),
        settings.endpoints.len()
    );
    Ok(settings)
}

/// Load pagination settings from a YAML string
pub fn load_settings_from_str(yaml: &str) -> Result<PaginationSettings> {
    let settings: PaginationSettings = serde_yaml::from_str(yaml)?;
    settings.validate()?;
    Ok(settings)
}
