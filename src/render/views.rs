//! The six table definitions.
//!
//! Each constructor returns a [`Table`] whose column order, widths, and
//! alignments are fixed per record kind. Numeric fields are right-aligned,
//! text fields left-aligned. Address columns resolve through
//! [`resolve_address`] with the caller's [`AddressConfig`]; the best block
//! height for confirmation counts is supplied per rendering call, never
//! cached.

use data_encoding::HEXLOWER;

use crate::address::{AddressConfig, resolve_address};
use crate::domain::{AccountInfo, Keychain, SigningScriptView, TxIn, TxOut, TxOutView};

use super::table::{Column, Table};

/// Lowercase hex of raw bytes, no separators.
fn hex(bytes: &[u8]) -> String {
    HEXLOWER.encode(bytes)
}

// ============================================================================
// Signing Scripts
// ============================================================================

/// Table of signing scripts: account, bin, derivation index, script, address,
/// lifecycle status.
#[must_use]
pub fn signing_script_table(config: AddressConfig) -> Table<SigningScriptView> {
    Table::new(vec![
        Column::left("account name", 15, |v: &SigningScriptView| {
            v.account_name.clone()
        }),
        Column::left("bin name", 15, |v: &SigningScriptView| v.bin_name.clone()),
        Column::right("index", 5, |v: &SigningScriptView| v.index.to_string()),
        Column::left("script", 50, |v: &SigningScriptView| hex(&v.script)),
        Column::left("address", 36, move |v: &SigningScriptView| {
            resolve_address(&v.script, &config)
        }),
        Column::left("status", 8, |v: &SigningScriptView| {
            v.status.as_str().to_string()
        }),
    ])
}

// ============================================================================
// Transaction Inputs
// ============================================================================

/// Table of transaction inputs: index, outpoint, and a value placeholder
/// that always renders blank (input values live on the spent outputs).
#[must_use]
pub fn txin_table() -> Table<TxIn> {
    Table::new(vec![
        Column::right("input", 5, |txin: &TxIn| txin.tx_index.to_string()),
        Column::left("outpoint", 68, |txin: &TxIn| txin.outpoint()),
        Column::right("value", 15, |_: &TxIn| String::new()),
    ])
}

// ============================================================================
// Transaction Outputs
// ============================================================================

/// Table of transaction outputs: index, value, script, address, spend status.
#[must_use]
pub fn txout_table(config: AddressConfig) -> Table<TxOut> {
    Table::new(vec![
        Column::right("output", 6, |txout: &TxOut| txout.tx_index.to_string()),
        Column::right("value", 15, |txout: &TxOut| txout.value.to_string()),
        Column::left("script", 50, |txout: &TxOut| hex(&txout.script)),
        Column::left("address", 36, move |txout: &TxOut| {
            resolve_address(&txout.script, &config)
        }),
        Column::left("status", 7, |txout: &TxOut| {
            txout.display_status().to_string()
        }),
    ])
}

/// Table of denormalized output views, including confirmation counts against
/// `best_height` and the hash that is authoritative for the transaction's
/// current status.
#[must_use]
pub fn txout_view_table(config: AddressConfig, best_height: u32) -> Table<TxOutView> {
    Table::new(vec![
        Column::left("account name", 15, |v: &TxOutView| v.account_name.clone()),
        Column::left("bin name", 15, |v: &TxOutView| v.bin_name.clone()),
        Column::left("type", 10, |v: &TxOutView| v.role.as_str().to_string()),
        Column::right("value", 15, |v: &TxOutView| v.value.to_string()),
        Column::left("script", 50, |v: &TxOutView| hex(&v.script)),
        Column::left("address", 36, move |v: &TxOutView| {
            resolve_address(&v.script, &config)
        }),
        Column::right("confirmations", 13, move |v: &TxOutView| {
            v.confirmations(best_height).to_string()
        }),
        Column::left("tx status", 11, |v: &TxOutView| {
            v.tx_status.as_str().to_string()
        }),
        Column::left("tx hash", 64, |v: &TxOutView| hex(v.display_hash())),
    ])
}

// ============================================================================
// Keychains
// ============================================================================

/// Table of keychains: name, PRIVATE/PUBLIC, id, hash.
#[must_use]
pub fn keychain_table() -> Table<Keychain> {
    Table::new(vec![
        Column::left("keychain name", 15, |k: &Keychain| k.name.clone()),
        Column::left("type", 7, |k: &Keychain| k.type_str().to_string()),
        Column::right("id", 5, |k: &Keychain| k.id.to_string()),
        Column::left("hash", 40, |k: &Keychain| hex(&k.hash)),
    ])
}

// ============================================================================
// Accounts
// ============================================================================

/// Table of accounts: name, id, signing policy.
#[must_use]
pub fn account_table() -> Table<AccountInfo> {
    Table::new(vec![
        Column::left("account name", 15, |a: &AccountInfo| a.name.clone()),
        Column::right("id", 5, |a: &AccountInfo| a.id.to_string()),
        Column::left("policy", 64, |a: &AccountInfo| a.policy()),
    ])
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OutputRole, OutputStatus, ScriptStatus, TxStatus};

    const MAINNET: AddressConfig = AddressConfig {
        p2pkh_version: 0x00,
        p2sh_version: 0x05,
    };

    /// Split a rendered row back into trimmed field texts.
    fn fields(row: &str) -> Vec<String> {
        row.split(" | ").map(|f| f.trim().to_string()).collect()
    }

    fn assert_rule_matches(header: &str) {
        let (line, rule) = header.split_once('\n').unwrap();
        assert_eq!(rule.len(), line.len(), "rule width for {line:?}");
        assert!(rule.chars().all(|c| c == '='));
    }

    fn p2pkh_script(hash: [u8; 20]) -> Vec<u8> {
        let mut script = vec![0x76, 0xa9, 0x14];
        script.extend_from_slice(&hash);
        script.extend_from_slice(&[0x88, 0xac]);
        script
    }

    #[test]
    fn test_every_header_rule_matches_its_width() {
        assert_rule_matches(&signing_script_table(MAINNET).header());
        assert_rule_matches(&txin_table().header());
        assert_rule_matches(&txout_table(MAINNET).header());
        assert_rule_matches(&txout_view_table(MAINNET, 100).header());
        assert_rule_matches(&keychain_table().header());
        assert_rule_matches(&account_table().header());
    }

    #[test]
    fn test_signing_script_row_resolves_address() {
        let view = SigningScriptView {
            account_name: "savings".to_string(),
            bin_name: "@default".to_string(),
            index: 12,
            script: p2pkh_script([0x11u8; 20]),
            status: ScriptStatus::Received,
        };

        let row = signing_script_table(MAINNET).row(&view);
        let fields = fields(&row);
        assert_eq!(fields[0], "savings");
        assert_eq!(fields[1], "@default");
        assert_eq!(fields[2], "12");
        assert!(fields[3].starts_with("76a914"));
        assert!(fields[4].starts_with('1'), "mainnet p2pkh address: {}", fields[4]);
        assert_eq!(fields[5], "RECEIVED");
    }

    #[test]
    fn test_txin_row_outpoint_and_blank_value() {
        let txin = TxIn {
            tx_index: 0,
            outpoint_hash: vec![0xaa, 0xbb, 0xcc],
            outpoint_index: 3,
        };

        let row = txin_table().row(&txin);
        let fields = fields(&row);
        assert_eq!(fields[0], "0");
        assert_eq!(fields[1], "aabbcc:3");
        assert_eq!(fields[2], "", "value placeholder renders blank");
    }

    #[test]
    fn test_txout_row_status_fallback() {
        let mut txout = TxOut {
            tx_index: 1,
            value: 25_000,
            script: vec![],
            receiving_account: None,
            status: OutputStatus::Unspent,
        };

        let table = txout_table(MAINNET);
        let row = fields(&table.row(&txout));
        assert_eq!(row[1], "25000");
        assert_eq!(row[3], "N/A", "empty script has no address");
        assert_eq!(row[4], "N/A", "no receiving account");

        txout.receiving_account = Some("savings".to_string());
        let row = fields(&table.row(&txout));
        assert_eq!(row[4], "UNSPENT");
    }

    #[test]
    fn test_txout_view_row() {
        let view = TxOutView {
            account_name: "savings".to_string(),
            bin_name: "@default".to_string(),
            role: OutputRole::Receive,
            value: 50_000,
            script: p2pkh_script([0x11u8; 20]),
            block_height: 90,
            tx_status: TxStatus::Confirmed,
            tx_hash: vec![0xaa; 32],
            tx_unsigned_hash: vec![0xbb; 32],
        };

        let row = fields(&txout_view_table(MAINNET, 100).row(&view));
        assert_eq!(row[2], "RECEIVE");
        assert_eq!(row[6], "11", "90..=100 inclusive");
        assert_eq!(row[7], "CONFIRMED");
        assert_eq!(row[8], "aa".repeat(32));
    }

    #[test]
    fn test_txout_view_row_unsigned_shows_unsigned_hash() {
        let view = TxOutView {
            account_name: "savings".to_string(),
            bin_name: "@default".to_string(),
            role: OutputRole::Send,
            value: 10,
            script: vec![],
            block_height: 0,
            tx_status: TxStatus::Unsigned,
            tx_hash: vec![0xaa; 32],
            tx_unsigned_hash: vec![0xbb; 32],
        };

        let row = fields(&txout_view_table(MAINNET, 12_345).row(&view));
        assert_eq!(row[6], "0", "unconfirmed regardless of best height");
        assert_eq!(row[8], "bb".repeat(32));
    }

    #[test]
    fn test_keychain_row() {
        let keychain = Keychain {
            name: "alice".to_string(),
            is_private: true,
            id: 7,
            hash: vec![0x0d, 0x0e],
        };

        let row = fields(&keychain_table().row(&keychain));
        assert_eq!(row, vec!["alice", "PRIVATE", "7", "0d0e"]);
    }

    #[test]
    fn test_account_row_policy() {
        let account = AccountInfo {
            name: "vault".to_string(),
            id: 3,
            minsigs: 2,
            keychain_names: vec!["alice".to_string(), "bob".to_string(), "carol".to_string()],
        };

        let row = fields(&account_table().row(&account));
        assert_eq!(row[0], "vault");
        assert_eq!(row[1], "3");
        assert_eq!(row[2], "2 of alice, bob, carol");
    }

    /// Oversized content widens its row instead of being truncated.
    #[test]
    fn test_overflow_passes_through() {
        let account = AccountInfo {
            name: "a-name-much-longer-than-fifteen-characters".to_string(),
            id: 1,
            minsigs: 1,
            keychain_names: vec!["alice".to_string()],
        };

        let table = account_table();
        let row = table.row(&account);
        assert!(row.contains("a-name-much-longer-than-fifteen-characters"));
        let header = table.header();
        let (header_line, _) = header.split_once('\n').unwrap();
        assert!(row.len() > header_line.len());
    }
}
