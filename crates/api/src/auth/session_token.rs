//! Opaque session tokens.
//!
//! The browser holds a random token in the session cookie. Only its SHA-256
//! hash is stored in `sessions.token_hash`, so a database leak does not
//! expose live sessions.

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Generate a new session token.
///
/// Returns `(plaintext, hash)`. The plaintext goes into the cookie; the hash
/// is persisted.
pub fn generate_session_token() -> (String, String) {
    let plaintext = Uuid::new_v4().to_string();
    let hash = hash_session_token(&plaintext);
    (plaintext, hash)
}

/// Compute the SHA-256 hex digest of a session token.
pub fn hash_session_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_token_hash_matches() {
        let (plaintext, hash) = generate_session_token();

        assert_eq!(hash, hash_session_token(&plaintext), "hash must be stable");
        assert_eq!(hash.len(), 64, "SHA-256 hex digest should be 64 chars");
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_session_tokens_are_unique() {
        let (a, _) = generate_session_token();
        let (b, _) = generate_session_token();
        assert_ne!(a, b, "two generated tokens must differ");
    }

    #[test]
    fn test_hash_differs_from_plaintext() {
        let (plaintext, hash) = generate_session_token();
        assert_ne!(plaintext, hash);
    }
}
