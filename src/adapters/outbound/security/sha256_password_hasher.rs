use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use rand::RngCore;
use sha2::{Digest, Sha256};

use crate::ports::security::PasswordHasher;

const SALT_SIZE: usize = 16;
const DEFAULT_ITERATIONS: u32 = 100_000;

/// Iterated salted SHA-256 hasher producing self-describing
/// `v1.<iterations>.<salt>.<hash>` strings, so the iteration count can be
/// raised without invalidating stored hashes.
pub struct Sha256PasswordHasher {
    iterations: u32,
}

impl Sha256PasswordHasher {
    pub fn new() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
        }
    }

    /// Lower iteration counts keep test suites fast.
    pub fn with_iterations(iterations: u32) -> Self {
        Self {
            iterations: iterations.max(1),
        }
    }

    fn derive(password: &str, salt: &[u8], iterations: u32) -> [u8; 32] {
        let mut hash: [u8; 32] = {
            let mut h = Sha256::new();
            h.update(salt);
            h.update(password.as_bytes());
            h.finalize().into()
        };
        for _ in 1..iterations {
            hash = Sha256::digest(hash).into();
        }
        hash
    }
}

impl Default for Sha256PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for Sha256PasswordHasher {
    fn hash(&self, password: &str) -> String {
        let mut salt = [0u8; SALT_SIZE];
        rand::thread_rng().fill_bytes(&mut salt);

        let hash = Self::derive(password, &salt, self.iterations);
        format!(
            "v1.{}.{}.{}",
            self.iterations,
            STANDARD.encode(salt),
            STANDARD.encode(hash)
        )
    }

    fn verify(&self, password: &str, password_hash: &str) -> bool {
        let parts: Vec<&str> = password_hash.split('.').collect();
        if parts.len() != 4 || parts[0] != "v1" {
            return false;
        }
        let Ok(iterations) = parts[1].parse::<u32>() else {
            return false;
        };
        let (Ok(salt), Ok(expected)) = (STANDARD.decode(parts[2]), STANDARD.decode(parts[3]))
        else {
            return false;
        };

        let computed = Self::derive(password, &salt, iterations);
        constant_time_eq(&computed, &expected)
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_round_trip() {
        let hasher = Sha256PasswordHasher::with_iterations(10);
        let hash = hasher.hash("s3cret");
        assert!(hasher.verify("s3cret", &hash));
        assert!(!hasher.verify("wrong", &hash));
    }

    #[test]
    fn hashes_are_salted() {
        let hasher = Sha256PasswordHasher::with_iterations(10);
        assert_ne!(hasher.hash("s3cret"), hasher.hash("s3cret"));
    }

    #[test]
    fn garbage_hash_rejected() {
        let hasher = Sha256PasswordHasher::with_iterations(10);
        assert!(!hasher.verify("s3cret", "not-a-hash"));
        assert!(!hasher.verify("s3cret", "v1.x.y.z"));
        assert!(!hasher.verify("s3cret", ""));
    }
}
