//! Error types for stub generation

use thiserror::Error;

/// Result type alias for stub generation
pub type StubResult<T> = Result<T, StubError>;

/// Error type for stub generation
#[derive(Error, Debug)]
pub enum StubError {
    /// A declared type could not be resolved
    #[error("cannot resolve type in {}: {reason}", location(class, method.as_deref()))]
    Resolution {
        class: String,
        method: Option<String>,
        reason: String,
    },

    /// The requested class is unknown to the class source
    #[error("class not found: {0}")]
    ClassNotFound(String),

    /// The active backend cannot render a declaration
    #[error("unsupported type in {}: {detail}", location(class, method.as_deref()))]
    UnsupportedType {
        class: String,
        method: Option<String>,
        detail: String,
    },

    /// Writing generated code failed
    #[error("I/O error while {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// Malformed configuration or class manifest
    #[error("configuration error: {0}")]
    Config(String),
}

fn location(class: &str, method: Option<&str>) -> String {
    match method {
        Some(method) => format!("{class}.{method}"),
        None => class.to_string(),
    }
}

impl StubError {
    /// Wrap an I/O failure with a short description of the operation.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        StubError::Io {
            context: context.into(),
            source,
        }
    }

    /// Name of the class this error was raised for, if any.
    pub fn class_name(&self) -> Option<&str> {
        match self {
            StubError::Resolution { class, .. } | StubError::UnsupportedType { class, .. } => {
                Some(class)
            }
            StubError::ClassNotFound(class) => Some(class),
            StubError::Io { .. } | StubError::Config(_) => None,
        }
    }
}

impl From<toml::de::Error> for StubError {
    fn from(err: toml::de::Error) -> Self {
        StubError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for StubError {
    fn from(err: serde_json::Error) -> Self {
        StubError::Config(err.to_string())
    }
}

/// Non-fatal diagnostic raised by an external formatting tool.
///
/// Never returned as an `Err` from generation; callers receive it alongside
/// the emitted file and it is logged at `warn` level.
#[derive(Error, Debug)]
pub enum ToolInvocationWarning {
    /// The tool is not installed or not on `PATH`
    #[error("{tool} isn't available in PATH, skipping")]
    NotFound { tool: String },

    /// The tool could not be started or waited on
    #[error("failed to run {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// The tool ran but reported failure
    #[error("{tool} exited with {status}: {stderr}")]
    NonZeroExit {
        tool: String,
        status: String,
        stderr: String,
    },
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;
