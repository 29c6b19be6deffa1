//! Shared pieces for the textkit crates: errors, configuration and the
//! locale-parameterized case primitive.

pub mod case;
pub mod config;
pub mod error;

pub use case::CaseLocale;
pub use config::{CaseConfig, ReadConfig, ReadErrorPolicy, TextKitConfig};
pub use error::{Result, TkError};

#[cfg(test)]
mod tests;
