//! vaultview - fixed-width table rendering for multisig vault wallets.
//!
//! This crate is the presentation layer of a vault wallet CLI. It renders
//! read-only wallet views (signing scripts, transaction inputs and outputs,
//! keychains, accounts) as fixed-width ASCII tables, and resolves locking
//! scripts into checksummed Base58 payment addresses. It owns no wallet
//! state, performs no I/O beyond its optional settings file, and every
//! rendering operation is a pure function of its inputs.
//!
//! # Example
//!
//! ```
//! use vaultview::config::Network;
//! use vaultview::domain::AccountInfo;
//! use vaultview::render::account_table;
//!
//! let accounts = vec![AccountInfo {
//!     name: "vault".to_string(),
//!     id: 1,
//!     minsigs: 2,
//!     keychain_names: vec!["alice".to_string(), "bob".to_string()],
//! }];
//!
//! let table = account_table();
//! println!("{}", table.header());
//! for account in &accounts {
//!     println!("{}", table.row(account));
//! }
//! # let _ = Network::Mainnet.address_config();
//! ```

// Declare modules
pub mod address;
pub mod config;
pub mod constants;
pub mod domain;
pub mod render;

// Re-export the everyday surface
pub use address::{AddressConfig, Payee, classify, resolve_address, to_base58_check};
pub use config::{DisplayConfig, Network};
pub use domain::VaultError;
pub use render::{Table, account_table, keychain_table, signing_script_table, txin_table, txout_table, txout_view_table};
