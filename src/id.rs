use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::num::NonZeroU64;
use std::ops::Deref;

// StarId uniquely identifies a registered star. Identifiers are chosen by the
// creator, must be positive, and are never reused or deleted once minted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StarId(NonZeroU64);

impl StarId {
    /// Create a StarId from a raw integer, rejecting zero
    pub fn new(raw: u64) -> Option<Self> {
        NonZeroU64::new(raw).map(StarId)
    }

    /// Get the raw integer value
    pub fn get(&self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for StarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "star:{}", self.0)
    }
}

// AccountId identifies a party that can own, approve, buy, or sell stars.
// It is a 32 byte long opaque identifier, resembling a public key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId([u8; 32]);

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format as a hex string with a prefix of the first 6 bytes
        let prefix = hex::encode(&self.0[0..6]);
        write!(f, "acct:{}", prefix)
    }
}

impl Ord for AccountId {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for AccountId {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Default for AccountId {
    fn default() -> Self {
        AccountId([0; 32])
    }
}

impl Deref for AccountId {
    type Target = [u8; 32];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AccountId {
    pub fn new(bytes: [u8; 32]) -> Self {
        AccountId(bytes)
    }

    /// Get a reference to the internal bytes
    pub fn bytes(&self) -> &[u8] {
        &self.0
    }

    /// Derive a deterministic AccountId from a seed string
    ///
    /// Hashes a domain separator together with the seed, so distinct seeds
    /// yield distinct identities and the same seed always yields the same one.
    pub fn from_seed(seed: &str) -> Self {
        let mut hasher = Sha256::new();

        // Domain separator
        hasher.update(b"STAR_NOTARY_Account");
        hasher.update(seed.as_bytes());

        AccountId(hasher.finalize().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_id_rejects_zero() {
        assert!(StarId::new(0).is_none());

        let id = StarId::new(7).expect("positive id");
        assert_eq!(id.get(), 7);
        assert_eq!(id.to_string(), "star:7");
    }

    #[test]
    fn test_star_id_ordering() {
        let a = StarId::new(1).unwrap();
        let b = StarId::new(2).unwrap();
        assert!(a < b);
        assert_eq!(a, StarId::new(1).unwrap());
    }

    #[test]
    fn test_from_seed_deterministic() {
        let alice = AccountId::from_seed("alice");
        let alice_again = AccountId::from_seed("alice");
        let bob = AccountId::from_seed("bob");

        assert_eq!(alice, alice_again);
        assert_ne!(alice, bob);

        // Seed-derived identities should not collide with the default
        assert_ne!(alice, AccountId::default());
    }

    #[test]
    fn test_account_display_prefix() {
        let id = AccountId::new([0xab; 32]);
        assert_eq!(id.to_string(), "acct:abababababab");
    }

    #[test]
    fn test_default_account() {
        let default_id = AccountId::default();
        assert_eq!(*default_id, [0u8; 32]);
    }
}
