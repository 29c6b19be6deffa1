//! Draining a reader into a string.

use std::io::{ErrorKind, Read};

use tk_core::{ReadConfig, ReadErrorPolicy, Result};
use tracing::{debug, warn};

/// Reads a whole stream into a `String` using a validated [`ReadConfig`].
///
/// The reader is taken by value and dropped before any of the read methods
/// return, on success and on error. Pass `&mut reader` to keep it.
#[derive(Debug, Clone, Default)]
pub struct StreamReader {
    config: ReadConfig,
}

impl StreamReader {
    pub fn new(config: ReadConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ReadConfig {
        &self.config
    }

    /// Read according to the configured [`ReadErrorPolicy`].
    pub fn read<R: Read>(&self, input: R) -> Result<String> {
        match self.config.on_error {
            ReadErrorPolicy::Empty => Ok(self.read_or_empty(input)),
            ReadErrorPolicy::Propagate => self.try_read(input),
        }
    }

    /// Read everything, returning `""` if the source fails. Bytes read before
    /// the failure are discarded.
    pub fn read_or_empty<R: Read>(&self, input: R) -> String {
        match self.try_read(input) {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "stream read failed, returning empty string");
                String::new()
            }
        }
    }

    /// Read everything. Invalid UTF-8 is replaced with U+FFFD.
    pub fn try_read<R: Read>(&self, mut input: R) -> Result<String> {
        let mut buffer = vec![0u8; self.config.buffer_size];
        let mut collected = Vec::new();
        loop {
            match input.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => collected.extend_from_slice(&buffer[..n]),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        debug!(bytes = collected.len(), "drained stream");
        Ok(String::from_utf8_lossy(&collected).into_owned())
    }
}

/// Read all of `input` into a string. I/O failure gives `""`, which callers
/// cannot tell apart from an empty stream; use [`try_read_from`] to see the
/// error.
pub fn read_from<R: Read>(input: R) -> String {
    StreamReader::default().read_or_empty(input)
}

pub fn try_read_from<R: Read>(input: R) -> Result<String> {
    StreamReader::default().try_read(input)
}
