//! Request signing helpers for providers that authenticate requests
//! with an MD5 digest over a per-request salt.

use std::time::{SystemTime, UNIX_EPOCH};

use md5::{Digest, Md5};

/// MD5 of the input, rendered as lowercase hex
pub fn md5_hex(input: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

/// Per-request salt: millisecond timestamp plus a 0..=10 jitter.
///
/// Salts only need practical uniqueness across requests; they are
/// request nonces for the providers' rate limiting, not secrets.
pub fn request_salt() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    let millis = now.as_millis();
    let jitter = (now.subsec_nanos() % 11) as u128;
    (millis + jitter).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_md5_hex_is_lowercase_hex() {
        let digest = md5_hex("hello");
        assert_eq!(digest.len(), 32);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_eq!(digest, "5d41402abc4b2a76b9719d911017c592");
    }

    #[test]
    fn test_md5_hex_is_deterministic() {
        assert_eq!(md5_hex("same input"), md5_hex("same input"));
        assert_ne!(md5_hex("same input"), md5_hex("same input!"));
    }

    #[test]
    fn test_salt_is_numeric() {
        let salt = request_salt();
        assert!(salt.parse::<u128>().is_ok());
    }
}
