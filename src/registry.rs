use crate::error::NotaryError;
use crate::id::{AccountId, StarId};
use crate::star::{Star, StarName};
use log::debug;
use std::collections::HashMap;

/// Registry of all minted stars, keyed by identifier
///
/// The registry only grows: an identifier, once created, maps to exactly one
/// Star record for the lifetime of the registry and is never reused or
/// deleted. Authorization is not the registry's concern; `set_owner` trusts
/// its caller to have checked permissions first.
#[derive(Debug, Clone, Default)]
pub struct StarRegistry {
    stars: HashMap<StarId, Star>,
}

impl StarRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a new star owned by its creator
    ///
    /// Fails with `DuplicateIdentifier` if the id is already taken; the
    /// existing record is left untouched in that case.
    pub fn create(
        &mut self,
        id: StarId,
        name: StarName,
        creator: AccountId,
    ) -> Result<&Star, NotaryError> {
        if self.stars.contains_key(&id) {
            return Err(NotaryError::DuplicateIdentifier { id });
        }

        debug!("minting {} ({}) for {}", id, name, creator);
        Ok(self
            .stars
            .entry(id)
            .or_insert_with(|| Star::new(id, name, creator)))
    }

    /// Get the current owner of a star
    pub fn owner_of(&self, id: StarId) -> Result<AccountId, NotaryError> {
        self.stars
            .get(&id)
            .map(|star| star.owner)
            .ok_or(NotaryError::NotFound { id })
    }

    /// Get the display name of a star
    pub fn name_of(&self, id: StarId) -> Result<&StarName, NotaryError> {
        self.stars
            .get(&id)
            .map(|star| &star.name)
            .ok_or(NotaryError::NotFound { id })
    }

    /// Get a star record, if it exists
    pub fn get(&self, id: StarId) -> Option<&Star> {
        self.stars.get(&id)
    }

    pub fn contains(&self, id: StarId) -> bool {
        self.stars.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Unconditionally reassign the owner of a star, returning the previous
    /// owner
    ///
    /// Marketplace-internal: callers are responsible for authorization checks
    /// beforehand, and must consume any outstanding approval for `id` so that
    /// stale approvals never survive an ownership change.
    pub(crate) fn set_owner(
        &mut self,
        id: StarId,
        new_owner: AccountId,
    ) -> Result<AccountId, NotaryError> {
        let star = self.stars.get_mut(&id).ok_or(NotaryError::NotFound { id })?;
        let previous = std::mem::replace(&mut star.owner, new_owner);
        debug!("{} owner {} -> {}", id, previous, new_owner);
        Ok(previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sid(raw: u64) -> StarId {
        StarId::new(raw).unwrap()
    }

    #[test]
    fn test_create_and_owner_of() {
        let mut registry = StarRegistry::new();
        let creator = AccountId::from_seed("creator");

        let star = registry
            .create(sid(1), StarName::new("Polaris").unwrap(), creator)
            .unwrap();
        assert_eq!(star.owner(), creator);

        assert_eq!(registry.owner_of(sid(1)).unwrap(), creator);
        assert_eq!(registry.name_of(sid(1)).unwrap().as_str(), "Polaris");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_create_leaves_original_untouched() {
        let mut registry = StarRegistry::new();
        let first = AccountId::from_seed("first");
        let second = AccountId::from_seed("second");

        registry
            .create(sid(1), StarName::new("Original").unwrap(), first)
            .unwrap();
        let err = registry
            .create(sid(1), StarName::new("Impostor").unwrap(), second)
            .unwrap_err();
        assert!(matches!(err, NotaryError::DuplicateIdentifier { .. }));

        assert_eq!(registry.owner_of(sid(1)).unwrap(), first);
        assert_eq!(registry.name_of(sid(1)).unwrap().as_str(), "Original");
    }

    #[test]
    fn test_lookup_unknown_id() {
        let registry = StarRegistry::new();
        assert!(matches!(
            registry.owner_of(sid(42)),
            Err(NotaryError::NotFound { .. })
        ));
        assert!(matches!(
            registry.name_of(sid(42)),
            Err(NotaryError::NotFound { .. })
        ));
        assert!(registry.get(sid(42)).is_none());
    }

    #[test]
    fn test_set_owner_returns_previous() {
        let mut registry = StarRegistry::new();
        let creator = AccountId::from_seed("creator");
        let next = AccountId::from_seed("next");

        registry
            .create(sid(5), StarName::new("s5").unwrap(), creator)
            .unwrap();
        let previous = registry.set_owner(sid(5), next).unwrap();

        assert_eq!(previous, creator);
        assert_eq!(registry.owner_of(sid(5)).unwrap(), next);

        assert!(matches!(
            registry.set_owner(sid(6), next),
            Err(NotaryError::NotFound { .. })
        ));
    }
}
