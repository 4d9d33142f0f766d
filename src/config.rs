//! Session configuration (`arbor.toml`).
//!
//! Typed configuration for the client session embedding this layer:
//! which workspace to bind by default, how strictly to parse caller-supplied
//! paths, and an optional guard on batch size. Missing fields use sensible
//! defaults; a missing file is all defaults, not an error.

use std::fmt;
use std::path::Path;

use serde::Deserialize;

use crate::model::types::ValidationError;
use crate::model::{RepoPath, WorkspaceName};

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Top-level session configuration, parsed from `arbor.toml`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    /// Session-level settings.
    #[serde(default)]
    pub session: SessionSection,

    /// Path handling settings.
    #[serde(default)]
    pub paths: PathsSection,

    /// Batch guard settings.
    #[serde(default)]
    pub batch: BatchSection,
}

// ---------------------------------------------------------------------------
// SessionSection
// ---------------------------------------------------------------------------

/// Session-level settings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionSection {
    /// The workspace a session binds when none is named explicitly
    /// (default: `"default"`). Validated as a [`WorkspaceName`] at parse
    /// time.
    #[serde(default = "default_workspace")]
    pub default_workspace: WorkspaceName,
}

impl Default for SessionSection {
    fn default() -> Self {
        Self {
            default_workspace: default_workspace(),
        }
    }
}

fn default_workspace() -> WorkspaceName {
    WorkspaceName::new("default").expect("literal is a valid workspace name")
}

// ---------------------------------------------------------------------------
// PathsSection
// ---------------------------------------------------------------------------

/// Path handling settings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathsSection {
    /// Strict path parsing (default: `true`). Strict parsing rejects `.`,
    /// `..`, and empty segments outright; lenient parsing normalizes them
    /// first.
    #[serde(default = "default_strict")]
    pub strict: bool,
}

impl Default for PathsSection {
    fn default() -> Self {
        Self {
            strict: default_strict(),
        }
    }
}

const fn default_strict() -> bool {
    true
}

impl PathsSection {
    /// Parse a caller-supplied absolute path under this section's policy.
    ///
    /// # Errors
    /// Returns the underlying [`ValidationError`] if the path is invalid
    /// under the selected policy.
    pub fn parse_repo_path(&self, s: &str) -> Result<RepoPath, ValidationError> {
        if self.strict {
            RepoPath::parse(s)
        } else {
            RepoPath::parse_lenient(s)
        }
    }
}

// ---------------------------------------------------------------------------
// BatchSection
// ---------------------------------------------------------------------------

/// Batch guard settings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct BatchSection {
    /// Maximum number of operations one batch may hold; `0` (the default)
    /// means unlimited. The guard exists for sessions queueing mutations
    /// from untrusted input.
    #[serde(default)]
    pub max_ops: usize,
}

impl BatchSection {
    /// True if a batch of `len` operations may accept one more.
    #[must_use]
    pub const fn admits(&self, len: usize) -> bool {
        self.max_ops == 0 || len < self.max_ops
    }
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// A configuration file could not be read or parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigError {
    /// The path that was being loaded (if available).
    pub path: Option<std::path::PathBuf>,
    /// Human-readable message with line-level detail when possible.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(p) = &self.path {
            write!(f, "{}: {}", p.display(), self.message)
        } else {
            write!(f, "config error: {}", self.message)
        }
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

impl SessionConfig {
    /// Load configuration from a TOML file.
    ///
    /// - If the file does not exist, returns all defaults (not an error).
    /// - If the file exists but contains invalid TOML or unknown fields,
    ///   returns a [`ConfigError`] with line-level detail.
    ///
    /// # Errors
    /// Returns `ConfigError` on I/O errors (other than not-found) or parse
    /// errors.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(ConfigError {
                    path: Some(path.to_owned()),
                    message: format!("could not read file: {e}"),
                });
            }
        };
        Self::parse(&contents).map_err(|mut e| {
            e.path = Some(path.to_owned());
            e
        })
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `ConfigError` on invalid TOML, unknown fields, or an
    /// invalid workspace name.
    pub fn parse(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| {
            let mut message = e.message().to_owned();
            if let Some(span) = e.span() {
                let line = toml_str[..span.start]
                    .chars()
                    .filter(|&c| c == '\n')
                    .count()
                    + 1;
                message = format!("line {line}: {message}");
            }
            ConfigError {
                path: None,
                message,
            }
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
