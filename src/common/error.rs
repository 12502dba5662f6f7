//! Error handling primitives shared across the crate.

use thiserror::Error;

/// Stable status codes that cross the FFI boundary.
#[repr(u32)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ScriptCode {
    /// Success code used as a sentinel.
    Ok = 0,
    /// The host library could not be opened.
    LibraryUnavailable = 1,
    /// The host does not export a required entry point.
    MissingSymbol = 2,
    /// A host has already been installed for this process.
    AlreadyInstalled = 3,
    /// Input failed validation before reaching the host.
    InvalidInput = 4,
    /// Every provider slot is taken.
    ProvidersExhausted = 5,
    /// An environment value could not be interpreted.
    Config = 6,
}

/// Canonical error type for the crate.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to open host library `{name}`")]
    Library {
        name: String,
        #[source]
        source: libloading::Error,
    },

    #[error("host does not export `{symbol}`")]
    MissingSymbol {
        symbol: &'static str,
        #[source]
        source: libloading::Error,
    },

    #[error("a host is already installed for this process")]
    AlreadyInstalled,

    #[error("a null host table was passed")]
    NullTable,

    #[error("{field} contains a NUL byte at offset {offset}")]
    InteriorNul { field: &'static str, offset: usize },

    #[error("requested size {0} does not fit in this address space")]
    SizeOverflow(u64),

    #[error("invalid color literal `{0}`")]
    InvalidColor(String),

    #[error("all {0} provider slots are in use")]
    ProvidersExhausted(usize),

    #[error("invalid value `{value}` for {key}")]
    Config { key: &'static str, value: String },
}

/// Result alias used throughout the crate.
pub type ScriptResult<T> = Result<T, ScriptError>;

impl ScriptError {
    /// Machine parsable code for this error.
    pub fn code(&self) -> ScriptCode {
        match self {
            Self::Library { .. } => ScriptCode::LibraryUnavailable,
            Self::MissingSymbol { .. } => ScriptCode::MissingSymbol,
            Self::AlreadyInstalled => ScriptCode::AlreadyInstalled,
            Self::NullTable
            | Self::InteriorNul { .. }
            | Self::SizeOverflow(_)
            | Self::InvalidColor(_) => ScriptCode::InvalidInput,
            Self::ProvidersExhausted(_) => ScriptCode::ProvidersExhausted,
            Self::Config { .. } => ScriptCode::Config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(ScriptCode::Ok as u32, 0);
        assert_eq!(ScriptCode::LibraryUnavailable as u32, 1);
        assert_eq!(ScriptCode::MissingSymbol as u32, 2);
        assert_eq!(ScriptCode::AlreadyInstalled as u32, 3);
        assert_eq!(ScriptCode::InvalidInput as u32, 4);
        assert_eq!(ScriptCode::ProvidersExhausted as u32, 5);
        assert_eq!(ScriptCode::Config as u32, 6);
    }

    #[test]
    fn validation_errors_share_a_code() {
        let nul = ScriptError::InteriorNul {
            field: "name",
            offset: 3,
        };
        assert_eq!(nul.code(), ScriptCode::InvalidInput);
        assert_eq!(ScriptError::SizeOverflow(u64::MAX).code(), ScriptCode::InvalidInput);
        assert_eq!(nul.to_string(), "name contains a NUL byte at offset 3");
    }
}
