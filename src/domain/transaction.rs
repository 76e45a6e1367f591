//! Transaction input/output records and views.
//!
//! This module defines the read-only transaction shapes the renderer
//! consumes, along with the derived display values that have real rules
//! behind them: outpoint text, confirmation arithmetic, authoritative-hash
//! selection for unsigned transactions, and the receiving-account status
//! fallback.

use std::fmt;

use data_encoding::HEXLOWER;

use crate::constants::NOT_AVAILABLE;

// ============================================================================
// Transaction Status
// ============================================================================

/// Status of a transaction in the vault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxStatus {
    /// Not all signatures collected yet.
    Unsigned,
    /// Fully signed but never broadcast.
    Unsent,
    /// Broadcast to the network.
    Propagated,
    /// Withdrawn before confirmation.
    Canceled,
    /// Included in a block.
    Confirmed,
}

impl TxStatus {
    /// Fixed display string for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unsigned => "UNSIGNED",
            Self::Unsent => "UNSENT",
            Self::Propagated => "PROPAGATED",
            Self::Canceled => "CANCELED",
            Self::Confirmed => "CONFIRMED",
        }
    }
}

impl fmt::Display for TxStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Output Status
// ============================================================================

/// Spend status of a transaction output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStatus {
    /// Not yet consumed by a later transaction.
    Unspent,
    /// Consumed by a later transaction.
    Spent,
}

impl OutputStatus {
    /// Fixed display string for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unspent => "UNSPENT",
            Self::Spent => "SPENT",
        }
    }
}

impl fmt::Display for OutputStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Output Role
// ============================================================================

/// Which side of a transfer an output represents for the wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputRole {
    /// Funds leaving a wallet account.
    Send,
    /// Funds arriving at a wallet account.
    Receive,
    /// Both sides belong to the wallet (e.g. change).
    Both,
}

impl OutputRole {
    /// Fixed display string for this role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Send => "SEND",
            Self::Receive => "RECEIVE",
            Self::Both => "BOTH",
        }
    }
}

impl fmt::Display for OutputRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Transaction Input
// ============================================================================

/// Read-only record of a transaction input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxIn {
    /// Position of this input within its transaction.
    pub tx_index: u32,
    /// Hash of the transaction whose output is being spent.
    pub outpoint_hash: Vec<u8>,
    /// Index of the spent output within that transaction.
    pub outpoint_index: u32,
}

impl TxIn {
    /// Outpoint text: lowercase hex of the outpoint hash, a colon, then the
    /// outpoint index, e.g. `"aabbcc:3"`.
    #[must_use]
    pub fn outpoint(&self) -> String {
        format!(
            "{}:{}",
            HEXLOWER.encode(&self.outpoint_hash),
            self.outpoint_index
        )
    }
}

// ============================================================================
// Transaction Output
// ============================================================================

/// Read-only record of a transaction output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxOut {
    /// Position of this output within its transaction.
    pub tx_index: u32,
    /// Output value in the smallest currency unit.
    pub value: u64,
    /// Raw locking script bytes.
    pub script: Vec<u8>,
    /// Name of the receiving wallet account, if any is associated.
    pub receiving_account: Option<String>,
    /// Spend status. Only meaningful when a receiving account is associated.
    pub status: OutputStatus,
}

impl TxOut {
    /// Status text for display: `"N/A"` iff no receiving account is
    /// associated, else the model's status string.
    #[must_use]
    pub fn display_status(&self) -> &'static str {
        if self.receiving_account.is_some() {
            self.status.as_str()
        } else {
            NOT_AVAILABLE
        }
    }
}

// ============================================================================
// Transaction Output View
// ============================================================================

/// Denormalized view of a transaction output joined with its account, bin,
/// and containing transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxOutView {
    /// Name of the account on the role side of the transfer.
    pub account_name: String,
    /// Name of the bin on the role side of the transfer.
    pub bin_name: String,
    /// Which side of the transfer this output represents.
    pub role: OutputRole,
    /// Output value in the smallest currency unit.
    pub value: u64,
    /// Raw locking script bytes.
    pub script: Vec<u8>,
    /// Height of the containing block, or 0 if unconfirmed.
    pub block_height: u32,
    /// Status of the containing transaction.
    pub tx_status: TxStatus,
    /// Final hash of the containing transaction.
    pub tx_hash: Vec<u8>,
    /// Hash of the containing transaction before any signatures.
    pub tx_unsigned_hash: Vec<u8>,
}

impl TxOutView {
    /// Confirmation count relative to a caller-supplied best height.
    ///
    /// Zero while unconfirmed (`block_height == 0`), else
    /// `best_height - block_height + 1` so the containing block itself
    /// counts as one confirmation.
    #[must_use]
    pub fn confirmations(&self, best_height: u32) -> u32 {
        if self.block_height == 0 {
            0
        } else {
            best_height - self.block_height + 1
        }
    }

    /// The hash that is authoritative for display.
    ///
    /// While the transaction is unsigned its final hash is not yet fixed, so
    /// the unsigned hash is shown instead.
    #[must_use]
    pub fn display_hash(&self) -> &[u8] {
        if self.tx_status == TxStatus::Unsigned {
            &self.tx_unsigned_hash
        } else {
            &self.tx_hash
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample_view() -> TxOutView {
        TxOutView {
            account_name: "savings".to_string(),
            bin_name: "@default".to_string(),
            role: OutputRole::Receive,
            value: 50_000,
            script: vec![],
            block_height: 0,
            tx_status: TxStatus::Propagated,
            tx_hash: vec![0xaa; 32],
            tx_unsigned_hash: vec![0xbb; 32],
        }
    }

    #[test]
    fn test_outpoint_text() {
        let txin = TxIn {
            tx_index: 0,
            outpoint_hash: vec![0xaa, 0xbb, 0xcc],
            outpoint_index: 3,
        };
        assert_eq!(txin.outpoint(), "aabbcc:3");
    }

    /// Unconfirmed outputs report zero confirmations regardless of best
    /// height; confirmed outputs count the containing block inclusively.
    #[rstest]
    #[case::unconfirmed(0, 100, 0)]
    #[case::unconfirmed_high_tip(0, 1_000_000, 0)]
    #[case::tip_block(100, 100, 1)]
    #[case::deep(90, 100, 11)]
    fn test_confirmations(#[case] block_height: u32, #[case] best_height: u32, #[case] expected: u32) {
        let view = TxOutView {
            block_height,
            ..sample_view()
        };
        assert_eq!(view.confirmations(best_height), expected);
    }

    #[test]
    fn test_display_hash_prefers_unsigned_hash_while_unsigned() {
        let mut view = sample_view();
        view.tx_status = TxStatus::Unsigned;
        assert_eq!(view.display_hash(), &[0xbb; 32]);

        view.tx_status = TxStatus::Confirmed;
        assert_eq!(view.display_hash(), &[0xaa; 32]);
    }

    #[test]
    fn test_txout_display_status_fallback() {
        let mut txout = TxOut {
            tx_index: 0,
            value: 1_000,
            script: vec![],
            receiving_account: None,
            status: OutputStatus::Unspent,
        };
        assert_eq!(txout.display_status(), "N/A");

        txout.receiving_account = Some("savings".to_string());
        assert_eq!(txout.display_status(), "UNSPENT");

        txout.status = OutputStatus::Spent;
        assert_eq!(txout.display_status(), "SPENT");
    }

    #[test]
    fn test_status_and_role_strings() {
        let statuses = [
            (TxStatus::Unsigned, "UNSIGNED"),
            (TxStatus::Unsent, "UNSENT"),
            (TxStatus::Propagated, "PROPAGATED"),
            (TxStatus::Canceled, "CANCELED"),
            (TxStatus::Confirmed, "CONFIRMED"),
        ];
        for (status, expected) in statuses {
            assert_eq!(status.as_str(), expected, "{status:?}");
        }

        let roles = [
            (OutputRole::Send, "SEND"),
            (OutputRole::Receive, "RECEIVE"),
            (OutputRole::Both, "BOTH"),
        ];
        for (role, expected) in roles {
            assert_eq!(role.as_str(), expected, "{role:?}");
        }
    }
}
