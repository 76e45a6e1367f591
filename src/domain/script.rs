//! Signing script views and their lifecycle status.
//!
//! A signing script belongs to a wallet derivation path (account, bin,
//! index) and carries a lifecycle status from issuance through use.

use std::fmt;

// ============================================================================
// Script Status
// ============================================================================

/// Lifecycle status of a signing script.
///
/// The display strings here are the model's own string-conversion contract;
/// the renderer calls [`ScriptStatus::as_str`] and invents no mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStatus {
    /// Generated but never handed out.
    Unused,
    /// Reserved for change.
    Change,
    /// Issued to a payer, payment not yet seen.
    Pending,
    /// A payment to this script has been observed.
    Received,
    /// Issued then withdrawn.
    Canceled,
}

impl ScriptStatus {
    /// Fixed display string for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unused => "UNUSED",
            Self::Change => "CHANGE",
            Self::Pending => "PENDING",
            Self::Received => "RECEIVED",
            Self::Canceled => "CANCELED",
        }
    }
}

impl fmt::Display for ScriptStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Signing Script View
// ============================================================================

/// Read-only view of a signing script, as supplied by the vault model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningScriptView {
    /// Name of the owning account.
    pub account_name: String,
    /// Name of the account bin the script was issued from.
    pub bin_name: String,
    /// Derivation index within the bin.
    pub index: u32,
    /// Raw locking script bytes.
    pub script: Vec<u8>,
    /// Lifecycle status.
    pub status: ScriptStatus,
}

// ============================================================================
// Tests
// ============================================================================
