//! Shared-secret generation.

use base64::Engine;

use crate::{CryptoError, Result};

/// Default number of random bytes in a generated secret.
pub const DEFAULT_SECRET_LENGTH: usize = 32;

/// Largest secret, in random bytes, that [`generate_hmac_secret`] will produce.
pub const MAX_SECRET_LENGTH: usize = 1024;

/// Generate a base64-encoded secret from `length` bytes of OS randomness.
///
/// # Errors
/// [`CryptoError::SecretTooLong`] if `length` exceeds [`MAX_SECRET_LENGTH`];
/// [`CryptoError::RandomSource`] if the operating system RNG is unavailable.
pub fn generate_hmac_secret(length: usize) -> Result<String> {
    if length > MAX_SECRET_LENGTH {
        return Err(CryptoError::SecretTooLong(length));
    }
    let mut bytes = vec![0u8; length];
    getrandom::getrandom(&mut bytes).map_err(|e| CryptoError::RandomSource(e.to_string()))?;
    Ok(base64::engine::general_purpose::STANDARD.encode(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decoded_len(secret: &str) -> usize {
        base64::engine::general_purpose::STANDARD
            .decode(secret)
            .unwrap()
            .len()
    }

    #[test]
    fn test_default_length() {
        let secret = generate_hmac_secret(DEFAULT_SECRET_LENGTH).unwrap();
        assert_eq!(secret.len(), 44);
        assert_eq!(decoded_len(&secret), 32);
    }

    #[test]
    fn test_custom_lengths() {
        assert_eq!(decoded_len(&generate_hmac_secret(16).unwrap()), 16);
        assert_eq!(generate_hmac_secret(0).unwrap(), "");
    }

    #[test]
    fn test_length_cap() {
        assert_eq!(decoded_len(&generate_hmac_secret(MAX_SECRET_LENGTH).unwrap()), 1024);
        assert_eq!(
            generate_hmac_secret(MAX_SECRET_LENGTH + 1),
            Err(CryptoError::SecretTooLong(1025))
        );
        assert_eq!(
            generate_hmac_secret(usize::MAX),
            Err(CryptoError::SecretTooLong(usize::MAX))
        );
    }

    #[test]
    fn test_secrets_differ() {
        let a = generate_hmac_secret(32).unwrap();
        let b = generate_hmac_secret(32).unwrap();
        assert_ne!(a, b);
    }
}
