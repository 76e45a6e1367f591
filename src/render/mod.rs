//! Fixed-width table rendering.
//!
//! # Module Organization
//!
//! - [`table`] - Generic column-descriptor engine shared by every table kind
//! - [`views`] - The six per-kind table definitions
//!
//! Callers build the table for a record kind once, print its header, then
//! print one row per record. Rows from different kinds must not be mixed
//! under one header.

// ============================================================================
// Module Declarations
// ============================================================================

pub mod table;
pub mod views;

// ============================================================================
// Re-exports
// ============================================================================

pub use table::{Align, Column, Table};

pub use views::{
    account_table, keychain_table, signing_script_table, txin_table, txout_table, txout_view_table,
};
