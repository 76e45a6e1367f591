//! Locking-script classification and Base58Check address resolution.
//!
//! This module turns a raw output script into a human-readable payment
//! address. Classification recognizes the two standard single-hash payee
//! patterns (pay-to-public-key-hash and pay-to-script-hash); the extracted
//! 20-byte payload is encoded with `base58(version || payload ||
//! first4(sha256d(version || payload)))`. Any other script shape resolves to
//! the `"N/A"` sentinel rather than an error.

use sha2::{Digest, Sha256};
use tracing::trace;

use crate::constants::{CHECKSUM_LEN, NOT_AVAILABLE, PAYLOAD_LEN};

// ============================================================================
// Script Opcodes
// ============================================================================

// Only the opcodes that appear in the two recognized payee patterns.
const OP_DUP: u8 = 0x76;
const OP_HASH160: u8 = 0xa9;
const OP_PUSH_20: u8 = 0x14;
const OP_EQUAL: u8 = 0x87;
const OP_EQUALVERIFY: u8 = 0x88;
const OP_CHECKSIG: u8 = 0xac;

// ============================================================================
// Address Config
// ============================================================================

/// Version-prefix bytes for the two recognized address kinds.
///
/// Passed explicitly into [`resolve_address`] so the resolver stays a pure
/// function of `(script, config)`; there is no process-wide network state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressConfig {
    /// Version byte prepended to pay-to-public-key-hash payloads.
    pub p2pkh_version: u8,
    /// Version byte prepended to pay-to-script-hash payloads.
    pub p2sh_version: u8,
}

// ============================================================================
// Payee Classification
// ============================================================================

/// The payee pattern of a locking script, with its extracted payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payee {
    /// `OP_DUP OP_HASH160 <20B> OP_EQUALVERIFY OP_CHECKSIG`
    PubKeyHash([u8; PAYLOAD_LEN]),
    /// `OP_HASH160 <20B> OP_EQUAL`
    ScriptHash([u8; PAYLOAD_LEN]),
    /// Anything else, including empty or malformed scripts.
    NonStandard,
}

/// Classify a raw locking script into its payee pattern.
///
/// The input is never mutated; malformed or empty scripts classify as
/// [`Payee::NonStandard`] rather than failing.
#[must_use]
pub fn classify(script: &[u8]) -> Payee {
    // P2PKH: 25 bytes, hash at [3..23].
    if script.len() == 25
        && script[0] == OP_DUP
        && script[1] == OP_HASH160
        && script[2] == OP_PUSH_20
        && script[23] == OP_EQUALVERIFY
        && script[24] == OP_CHECKSIG
    {
        let mut hash = [0u8; PAYLOAD_LEN];
        hash.copy_from_slice(&script[3..23]);
        return Payee::PubKeyHash(hash);
    }

    // P2SH: 23 bytes, hash at [2..22].
    if script.len() == 23 && script[0] == OP_HASH160 && script[1] == OP_PUSH_20 && script[22] == OP_EQUAL {
        let mut hash = [0u8; PAYLOAD_LEN];
        hash.copy_from_slice(&script[2..22]);
        return Payee::ScriptHash(hash);
    }

    Payee::NonStandard
}

// ============================================================================
// Base58Check Encoding
// ============================================================================

/// Double SHA-256 of the input.
fn sha256d(data: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    second.into()
}

/// Encode `version || payload` with a 4-byte sha256d checksum in Base58.
#[must_use]
pub fn to_base58_check(version: u8, payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(1 + payload.len() + CHECKSUM_LEN);
    data.push(version);
    data.extend_from_slice(payload);
    let checksum = sha256d(&data);
    data.extend_from_slice(&checksum[..CHECKSUM_LEN]);
    bs58::encode(&data).into_string()
}

// ============================================================================
// Address Resolution
// ============================================================================

/// Resolve a locking script to its displayable payment address.
///
/// Pay-to-public-key-hash scripts encode under `config.p2pkh_version`,
/// pay-to-script-hash scripts under `config.p2sh_version`. Unrecognized
/// patterns resolve to the `"N/A"` sentinel; that is a defined output for
/// "address not displayable", not an error.
#[must_use]
pub fn resolve_address(script: &[u8], config: &AddressConfig) -> String {
    match classify(script) {
        Payee::PubKeyHash(hash) => to_base58_check(config.p2pkh_version, &hash),
        Payee::ScriptHash(hash) => to_base58_check(config.p2sh_version, &hash),
        Payee::NonStandard => {
            trace!(script_len = script.len(), "script matched no payee pattern");
            NOT_AVAILABLE.to_string()
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
