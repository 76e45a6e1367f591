//! Shared constants for address encoding.
//!
//! This module centralizes the network version-prefix bytes and the fixed
//! sizes used by the checksummed Base58 address encoding. Version bytes are
//! never read from global state at resolution time; they flow into the
//! resolver through [`crate::address::AddressConfig`].

// ============================================================================
// Network Version Prefixes
// ============================================================================

/// Mainnet pay-to-public-key-hash version byte (addresses start with '1').
pub const MAINNET_P2PKH_VERSION: u8 = 0x00;

/// Mainnet pay-to-script-hash version byte (addresses start with '3').
pub const MAINNET_P2SH_VERSION: u8 = 0x05;

/// Testnet pay-to-public-key-hash version byte (addresses start with 'm'/'n').
pub const TESTNET_P2PKH_VERSION: u8 = 0x6f;

/// Testnet pay-to-script-hash version byte (addresses start with '2').
pub const TESTNET_P2SH_VERSION: u8 = 0xc4;

// ============================================================================
// Encoding Sizes
// ============================================================================

/// Length in bytes of the hash payload extracted from a locking script.
pub const PAYLOAD_LEN: usize = 20;

/// Length in bytes of the checksum appended before Base58 encoding.
pub const CHECKSUM_LEN: usize = 4;

/// Sentinel shown wherever an address or status is not displayable.
pub const NOT_AVAILABLE: &str = "N/A";
