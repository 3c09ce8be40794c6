//! Lexer configuration
//!
//! Options are read from the `[lexer]` table of a `ligo.toml` file. Every
//! field has a default, so an empty file (or a missing table) yields
//! [`LexerConfig::default`].
//!
//! ```toml
//! [lexer]
//! strip_comments = true
//! trace_tokens = false
//! ```
//!
//! # Usage
//!
//! ```rust
//! use ligo_lexer::util::config::LexerConfig;
//!
//! let config = LexerConfig::from_toml_str("[lexer]\ntrace_tokens = true\n").unwrap();
//! assert!(config.strip_comments);
//! assert!(config.trace_tokens);
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Options for [`scan_tokens_with`](crate::lexer::scan_tokens_with)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexerConfig {
    /// Remove `;` comments before scanning
    #[serde(default = "default_true")]
    pub strip_comments: bool,
    /// Emit a `trace` event for every token produced
    #[serde(default)]
    pub trace_tokens: bool,
}

fn default_true() -> bool {
    true
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            strip_comments: true,
            trace_tokens: false,
        }
    }
}

/// Layout of a `ligo.toml` file; only the `[lexer]` table is read
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    lexer: LexerConfig,
}

impl LexerConfig {
    /// Parse a `ligo.toml` document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        Ok(file.lexer)
    }

    /// Load configuration from a file; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("loaded lexer config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
