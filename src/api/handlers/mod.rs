pub mod health;
pub use self::health::health;

pub mod signup;
pub use self::signup::signup;

pub mod login;
pub use self::login::login;

pub mod users;
pub use self::users::users;

// common functions for the handlers
use secrecy::{ExposeSecret, SecretString};

// bcrypt work factor, matches the moderate cost the service has always used
pub const HASH_COST: u32 = 10;

/// One-way salted hash of a plaintext secret. Computed once at signup, never
/// recomputed afterward.
pub fn hash_secret(secret: &SecretString) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(secret.expose_secret(), HASH_COST)
}

/// Constant-verification of a plaintext secret against a stored hash.
pub fn verify_secret(secret: &SecretString, hash: &str) -> Result<bool, bcrypt::BcryptError> {
    bcrypt::verify(secret.expose_secret(), hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_never_the_plaintext() {
        let secret = SecretString::from("hunter2");

        let hash = hash_secret(&secret).unwrap();
        assert_ne!(hash, "hunter2");
        assert!(hash.starts_with("$2"));
    }

    #[test]
    fn test_hashing_twice_gives_different_hashes() {
        // salted, so two hashes of the same secret differ
        let secret = SecretString::from("hunter2");

        let first = hash_secret(&secret).unwrap();
        let second = hash_secret(&secret).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_verify_round_trip() {
        let secret = SecretString::from("hunter2");

        let hash = hash_secret(&secret).unwrap();
        assert!(verify_secret(&secret, &hash).unwrap());
        assert!(!verify_secret(&SecretString::from("wrong"), &hash).unwrap());
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        let secret = SecretString::from("hunter2");

        assert!(verify_secret(&secret, "not-a-bcrypt-hash").is_err());
    }

    #[test]
    fn test_secret_debug_is_redacted() {
        let secret = SecretString::from("hunter2");

        assert!(!format!("{secret:?}").contains("hunter2"));
    }
}
