use crate::error::NotaryError;
use crate::id::{AccountId, StarId};
use crate::registry::StarRegistry;
use log::debug;
use std::collections::HashMap;

/// One-shot transfer authorizations, at most one per star
///
/// An entry grants the approved party the right to act as the owner for a
/// single ownership-changing operation. The entry is stored as an explicit
/// optional mapping (present/absent) rather than a flag plus address, so "no
/// approval" and "approval for X" are unambiguous. Granting a new approval
/// overwrites the previous one, and every successful ownership change consumes
/// whatever approval is outstanding.
#[derive(Debug, Clone, Default)]
pub struct ApprovalTable {
    approvals: HashMap<StarId, AccountId>,
}

impl ApprovalTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grant `approved` a one-time authorization over `id`
    ///
    /// Only the current owner may grant; any prior approval for the star is
    /// overwritten.
    pub fn approve(
        &mut self,
        registry: &StarRegistry,
        id: StarId,
        approved: AccountId,
        caller: AccountId,
    ) -> Result<(), NotaryError> {
        let owner = registry.owner_of(id)?;
        if owner != caller {
            return Err(NotaryError::NotOwner { id, caller });
        }

        debug!("{} approves {} to manage {}", caller, approved, id);
        self.approvals.insert(id, approved);
        Ok(())
    }

    /// Check whether `party` may perform an ownership-changing operation on
    /// `id`
    ///
    /// True for the current owner and for the currently approved party.
    /// Read-only: the approval is not consumed by this check.
    pub fn is_authorized(
        &self,
        registry: &StarRegistry,
        id: StarId,
        party: AccountId,
    ) -> Result<bool, NotaryError> {
        let owner = registry.owner_of(id)?;
        Ok(owner == party || self.approvals.get(&id) == Some(&party))
    }

    /// Get the currently approved party for a star, if any
    pub fn approved_for(&self, id: StarId) -> Option<AccountId> {
        self.approvals.get(&id).copied()
    }

    /// Remove any approval entry for `id`, regardless of its current value
    ///
    /// Called after every successful ownership change on the star.
    pub fn consume(&mut self, id: StarId) {
        if self.approvals.remove(&id).is_some() {
            debug!("approval for {} consumed", id);
        }
    }

    pub fn len(&self) -> usize {
        self.approvals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.approvals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::star::StarName;

    fn sid(raw: u64) -> StarId {
        StarId::new(raw).unwrap()
    }

    fn registry_with_star(id: StarId, owner: AccountId) -> StarRegistry {
        let mut registry = StarRegistry::new();
        registry
            .create(id, StarName::new("test star").unwrap(), owner)
            .unwrap();
        registry
    }

    #[test]
    fn test_only_owner_may_approve() {
        let owner = AccountId::from_seed("owner");
        let stranger = AccountId::from_seed("stranger");
        let registry = registry_with_star(sid(1), owner);
        let mut approvals = ApprovalTable::new();

        let err = approvals
            .approve(&registry, sid(1), stranger, stranger)
            .unwrap_err();
        assert!(matches!(err, NotaryError::NotOwner { .. }));
        assert!(approvals.approved_for(sid(1)).is_none());

        approvals
            .approve(&registry, sid(1), stranger, owner)
            .unwrap();
        assert_eq!(approvals.approved_for(sid(1)), Some(stranger));
    }

    #[test]
    fn test_approve_unknown_star() {
        let registry = StarRegistry::new();
        let mut approvals = ApprovalTable::new();
        let party = AccountId::from_seed("party");

        assert!(matches!(
            approvals.approve(&registry, sid(9), party, party),
            Err(NotaryError::NotFound { .. })
        ));
    }

    #[test]
    fn test_second_approval_overwrites_first() {
        let owner = AccountId::from_seed("owner");
        let first = AccountId::from_seed("first");
        let second = AccountId::from_seed("second");
        let registry = registry_with_star(sid(1), owner);
        let mut approvals = ApprovalTable::new();

        approvals.approve(&registry, sid(1), first, owner).unwrap();
        approvals.approve(&registry, sid(1), second, owner).unwrap();

        assert!(!approvals.is_authorized(&registry, sid(1), first).unwrap());
        assert!(approvals.is_authorized(&registry, sid(1), second).unwrap());
        assert_eq!(approvals.len(), 1);
    }

    #[test]
    fn test_is_authorized_owner_approved_and_stranger() {
        let owner = AccountId::from_seed("owner");
        let approved = AccountId::from_seed("approved");
        let stranger = AccountId::from_seed("stranger");
        let registry = registry_with_star(sid(1), owner);
        let mut approvals = ApprovalTable::new();

        // The owner is always authorized, with or without an approval entry
        assert!(approvals.is_authorized(&registry, sid(1), owner).unwrap());
        assert!(!approvals.is_authorized(&registry, sid(1), approved).unwrap());

        approvals
            .approve(&registry, sid(1), approved, owner)
            .unwrap();
        assert!(approvals.is_authorized(&registry, sid(1), approved).unwrap());
        assert!(!approvals.is_authorized(&registry, sid(1), stranger).unwrap());

        // The check is read-only
        assert_eq!(approvals.approved_for(sid(1)), Some(approved));
    }

    #[test]
    fn test_consume_removes_entry() {
        let owner = AccountId::from_seed("owner");
        let approved = AccountId::from_seed("approved");
        let registry = registry_with_star(sid(1), owner);
        let mut approvals = ApprovalTable::new();

        approvals
            .approve(&registry, sid(1), approved, owner)
            .unwrap();
        approvals.consume(sid(1));
        assert!(approvals.approved_for(sid(1)).is_none());
        assert!(approvals.is_empty());

        // Consuming an absent entry is a no-op
        approvals.consume(sid(1));
    }
}
