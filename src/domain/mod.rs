//! Domain views for the vaultview table renderer.
//!
//! These are read-only snapshots of wallet entities supplied by the vault
//! model. The renderer never mutates them and owns no entity lifecycle; it
//! only reads fields and the display-string contracts declared here.
//!
//! # Module Organization
//!
//! - [`error`] - Crate error type for config persistence
//! - [`script`] - Signing script views and their lifecycle status
//! - [`transaction`] - Transaction input/output records and views
//! - [`keychain`] - Keychain records
//! - [`account`] - Account summaries and policy text

// ============================================================================
// Module Declarations
// ============================================================================

pub mod account;
pub mod error;
pub mod keychain;
pub mod script;
pub mod transaction;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::VaultError;

pub use script::{ScriptStatus, SigningScriptView};

pub use transaction::{OutputRole, OutputStatus, TxIn, TxOut, TxOutView, TxStatus};

pub use keychain::Keychain;

pub use account::AccountInfo;
