//! Generator configuration

use crate::error::{StubError, StubResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration shared by all backends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Backend to generate with (default: `rust`)
    #[serde(default = "default_backend")]
    pub backend: String,

    /// Run the backend's formatter over generated files
    #[serde(default = "default_apply_formatter")]
    pub apply_formatter: bool,

    /// Formatter executable, looked up on `PATH`
    #[serde(default = "default_formatter")]
    pub formatter: String,

    /// Module that holds the hand-written implementation of generated traits
    #[serde(default = "default_impl_module")]
    pub impl_module: String,
}

fn default_backend() -> String {
    "rust".to_string()
}

fn default_apply_formatter() -> bool {
    true
}

fn default_formatter() -> String {
    "rustfmt".to_string()
}

fn default_impl_module() -> String {
    "imp".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            apply_formatter: default_apply_formatter(),
            formatter: default_formatter(),
            impl_module: default_impl_module(),
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from TOML.
    pub fn from_toml_str(content: &str) -> StubResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from JSON bytes; empty input yields the defaults.
    pub fn from_json(bytes: &[u8]) -> StubResult<Self> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_slice(bytes)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a `.toml` or `.json` file.
    pub fn from_file(path: impl AsRef<Path>) -> StubResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read(path)
            .map_err(|e| StubError::io(format!("reading {}", path.display()), e))?;

        if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json(&content)
        } else {
            let text = String::from_utf8(content).map_err(|e| {
                StubError::Config(format!("{} is not valid UTF-8: {e}", path.display()))
            })?;
            Self::from_toml_str(&text)
        }
    }

    /// Disable the post-generation formatter.
    pub fn without_formatter(mut self) -> Self {
        self.apply_formatter = false;
        self
    }

    fn validate(&self) -> StubResult<()> {
        if self.backend.trim().is_empty() {
            return Err(StubError::Config("backend cannot be empty".to_string()));
        }
        if self.apply_formatter && self.formatter.trim().is_empty() {
            return Err(StubError::Config(
                "formatter cannot be empty while apply_formatter is set".to_string(),
            ));
        }
        if !crate::java_type::is_identifier(&self.impl_module) || self.impl_module.contains('$') {
            return Err(StubError::Config(format!(
                "impl_module `{}` is not a valid module name",
                self.impl_module
            )));
        }
        Ok(())
    }
}
