//! Raw token generation and hashing.

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Generate a fresh raw bearer token.
#[must_use]
pub fn generate() -> String {
    format!("sf_{}{}", Uuid::now_v7().simple(), Uuid::now_v7().simple())
}

/// Hash a raw token into the digest stored for lookup.
#[must_use]
pub fn digest(token: &str) -> String {
    format!("{:x}", Sha256::digest(token.as_bytes()))
}
