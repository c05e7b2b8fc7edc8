//! Random token and login code generation.
//!
//! Invite tokens are 32-character alphanumeric strings. Login codes are 6-digit numbers
//! that are never stored in plain text; only their SHA-256 hex digest is persisted.

use rand::Rng;
use sha2::{Digest, Sha256};

/// Length of generated invite tokens.
pub const TOKEN_LENGTH: usize = 32;

/// Generates a cryptographically secure random alphanumeric token.
///
/// Creates a 32-character string using uppercase letters, lowercase letters,
/// and digits (0-9).
///
/// # Returns
/// - `String` - A 32-character random alphanumeric string
pub fn generate_token() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                             abcdefghijklmnopqrstuvwxyz\
                             0123456789";

    let mut rng = rand::rng();

    (0..TOKEN_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// Generates a zero-padded 6-digit numeric login code.
pub fn generate_login_code() -> String {
    let code: u32 = rand::rng().random_range(0..1_000_000);
    format!("{:06}", code)
}

/// Hashes a login code for storage and comparison.
///
/// # Returns
/// - `String` - Lowercase hex SHA-256 digest of the trimmed code
pub fn hash_code(code: &str) -> String {
    hex::encode(Sha256::digest(code.trim().as_bytes()))
}
