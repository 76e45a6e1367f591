//! Keychain records.

// ============================================================================
// Keychain
// ============================================================================

/// Read-only record of a keychain registered with the vault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keychain {
    /// Keychain name.
    pub name: String,
    /// Whether the private half of the keychain is present.
    pub is_private: bool,
    /// Numeric id assigned by the vault.
    pub id: u64,
    /// Keychain hash bytes.
    pub hash: Vec<u8>,
}

impl Keychain {
    /// Type literal for display: `"PRIVATE"` when the private half is
    /// present, `"PUBLIC"` otherwise.
    #[must_use]
    pub const fn type_str(&self) -> &'static str {
        if self.is_private { "PRIVATE" } else { "PUBLIC" }
    }
}

// ============================================================================
// Tests
// ============================================================================
