//! Login credential verification.
//!
//! The server ships with a single shared credential pair held in
//! configuration. [`CredentialProvider`] keeps the login handler decoupled
//! from that choice so an alternate backend (LDAP, a user table, …) can be
//! plugged in without touching route code.

/// Verifies candidate login credentials.
pub trait CredentialProvider: Send + Sync + 'static {
    /// Returns `true` iff the candidate pair matches a known credential.
    fn verify(&self, user_id: &str, password: &str) -> bool;
}

/// The single shared (id, password) pair from [`crate::config::Config`].
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    user_id: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(user_id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            password: password.into(),
        }
    }
}

impl CredentialProvider for StaticCredentials {
    fn verify(&self, user_id: &str, password: &str) -> bool {
        // Exact equality: case-sensitive, no trimming.
        user_id == self.user_id && password == self.password
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn accepts_exact_match_only() {
        let creds = StaticCredentials::new("u", "p");
        assert!(creds.verify("u", "p"));
        assert!(!creds.verify("u", "p2"));
        assert!(!creds.verify("u2", "p"));
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let creds = StaticCredentials::new("User", "Pass");
        assert!(!creds.verify("user", "pass"));
    }

    #[test]
    fn no_trimming_is_applied() {
        let creds = StaticCredentials::new("u", "p");
        assert!(!creds.verify(" u", "p"));
        assert!(!creds.verify("u", "p "));
    }

    #[test]
    fn empty_candidates_fail_against_non_empty_pair() {
        let creds = StaticCredentials::new("u", "p");
        assert!(!creds.verify("", ""));
    }
}
