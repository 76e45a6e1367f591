//! Account summaries and policy text.

// ============================================================================
// Account Info
// ============================================================================

/// Read-only summary of a multisig account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountInfo {
    /// Account name.
    pub name: String,
    /// Numeric id assigned by the vault.
    pub id: u64,
    /// Minimum number of signatures required to spend.
    pub minsigs: u32,
    /// Names of the keychains backing the account, in registration order.
    pub keychain_names: Vec<String>,
}

impl AccountInfo {
    /// Signing policy text, e.g. `"2 of alice, bob, carol"`.
    #[must_use]
    pub fn policy(&self) -> String {
        format!("{} of {}", self.minsigs, self.keychain_names.join(", "))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn account(minsigs: u32, names: &[&str]) -> AccountInfo {
        AccountInfo {
            name: "vault".to_string(),
            id: 1,
            minsigs,
            keychain_names: names.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn test_policy_text() {
        assert_eq!(
            account(2, &["alice", "bob", "carol"]).policy(),
            "2 of alice, bob, carol"
        );
    }

    #[test]
    fn test_policy_text_single_keychain() {
        assert_eq!(account(1, &["alice"]).policy(), "1 of alice");
    }
}
