use serde::{Deserialize, Serialize};

use crate::case::CaseLocale;
use crate::error::{Result, TkError};

/// Default chunk size for draining a reader.
pub const DEFAULT_READ_BUFFER: usize = 1024;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextKitConfig {
    pub case: CaseConfig,
    pub read: ReadConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseConfig {
    pub locale: CaseLocale,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadConfig {
    pub buffer_size: usize,
    pub on_error: ReadErrorPolicy,
}

/// What a stream read does when the source fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadErrorPolicy {
    /// Drop the error and return an empty string.
    #[default]
    Empty,
    /// Return the error to the caller.
    Propagate,
}

impl Default for ReadConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_READ_BUFFER,
            on_error: ReadErrorPolicy::Empty,
        }
    }
}

impl ReadConfig {
    pub fn validate(&self) -> Result<()> {
        if self.buffer_size == 0 {
            return Err(TkError::InvalidArgument("read.buffer_size must be > 0".into()));
        }
        Ok(())
    }
}

impl TextKitConfig {
    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json(input: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        tracing::debug!(locale = ?config.case.locale, buffer_size = config.read.buffer_size, "loaded textkit config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.read.validate()
    }
}
