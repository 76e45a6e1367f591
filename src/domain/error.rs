//! Error types for vaultview operations.
//!
//! Rendering and address resolution are infallible by design (unrecognized
//! scripts and absent associations are normal `"N/A"` outcomes), so the only
//! fallible surface is the persisted display configuration.

use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Crate error type for vaultview.
#[derive(Debug, Error)]
pub enum VaultError {
    /// Reading or writing the settings file failed.
    #[error("Config I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file held malformed JSON.
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// No platform configuration directory could be determined.
    #[error("Could not determine config directory")]
    NoConfigDir,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            format!("{}", VaultError::NoConfigDir),
            "Could not determine config directory"
        );

        let io = VaultError::from(std::io::Error::other("disk gone"));
        assert_eq!(format!("{io}"), "Config I/O error: disk gone");
    }

    #[test]
    fn test_parse_error_wraps_serde() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err = VaultError::from(json_err);
        assert!(matches!(err, VaultError::Parse(_)));
    }
}
