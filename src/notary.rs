use crate::approvals::ApprovalTable;
use crate::error::NotaryError;
use crate::id::{AccountId, StarId};
use crate::ledger::{Ledger, Price};
use crate::registry::StarRegistry;
use crate::star::{Star, StarName};
use log::debug;
use std::collections::HashMap;

/// Registry display name, fixed
pub const NOTARY_NAME: &str = "StarNotary";

/// Registry ticker symbol, fixed
pub const NOTARY_SYMBOL: &str = "STN";

/// The star marketplace: registry + approvals + sale listings + injected
/// ledger
///
/// Every operation runs to completion against `&mut self`, so the borrow
/// checker serializes all mutations on a notary instance end-to-end; there is
/// no partial visibility of an in-progress operation. Each operation validates
/// its preconditions before touching any state, which keeps every failure
/// all-or-nothing.
#[derive(Debug)]
pub struct StarNotary<L: Ledger> {
    registry: StarRegistry,
    approvals: ApprovalTable,
    listings: HashMap<StarId, Price>,
    ledger: L,
}

impl<L: Ledger> StarNotary<L> {
    /// Create an empty notary backed by the given ledger
    pub fn new(ledger: L) -> Self {
        Self {
            registry: StarRegistry::new(),
            approvals: ApprovalTable::new(),
            listings: HashMap::new(),
            ledger,
        }
    }

    pub fn name(&self) -> &'static str {
        NOTARY_NAME
    }

    pub fn symbol(&self) -> &'static str {
        NOTARY_SYMBOL
    }

    /// Mint a new star owned by the caller
    ///
    /// Creation is free and permissionless: any caller may mint any unused id.
    pub fn create_star(
        &mut self,
        id: StarId,
        name: StarName,
        caller: AccountId,
    ) -> Result<&Star, NotaryError> {
        self.registry.create(id, name, caller)
    }

    /// List a star for sale at an owner-chosen price
    ///
    /// Zero is a valid price. Re-listing overwrites the previous price.
    pub fn put_star_up_for_sale(
        &mut self,
        id: StarId,
        price: Price,
        caller: AccountId,
    ) -> Result<(), NotaryError> {
        let owner = self.registry.owner_of(id)?;
        if owner != caller {
            return Err(NotaryError::NotOwner { id, caller });
        }

        debug!("{} lists {} at {}", caller, id, price);
        self.listings.insert(id, price);
        Ok(())
    }

    /// Grant a one-time transfer authorization on a star
    pub fn allow_managing(
        &mut self,
        id: StarId,
        approved: AccountId,
        caller: AccountId,
    ) -> Result<(), NotaryError> {
        self.approvals.approve(&self.registry, id, approved, caller)
    }

    /// Buy a listed star, moving funds and ownership atomically
    ///
    /// The buyer must hold a valid approval (or already be the owner, the
    /// degenerate self-purchase case), and must send at least the listed
    /// price. The full amount sent is debited from the buyer while the seller
    /// is credited exactly the listed price; any excess is consumed, not
    /// refunded. On any failure nothing changes: not ownership, not the
    /// listing, not the approval, not balances.
    pub fn buy_star(
        &mut self,
        id: StarId,
        buyer: AccountId,
        funds_sent: Price,
    ) -> Result<(), NotaryError> {
        let price = *self
            .listings
            .get(&id)
            .ok_or(NotaryError::NotForSale { id })?;
        if funds_sent < price {
            return Err(NotaryError::InsufficientFunds {
                needed: price,
                available: funds_sent,
            });
        }
        if !self.approvals.is_authorized(&self.registry, id, buyer)? {
            return Err(NotaryError::NotAuthorized { id, caller: buyer });
        }

        let seller = self.registry.owner_of(id)?;

        // Funds first: the debit is the only remaining fallible step, so a
        // short buyer balance aborts before any ownership mutation.
        self.ledger.debit(buyer, funds_sent)?;
        self.ledger.credit(seller, price);

        self.settle_transfer(id, buyer)?;
        self.listings.remove(&id);
        debug!("{} bought {} from {} for {}", buyer, id, seller, price);
        Ok(())
    }

    /// Transfer a star directly, without payment
    ///
    /// Self-transfer is a harmless no-op. An active listing is deliberately
    /// left in place: the stale price stays visible to the new owner, matching
    /// the reference behavior.
    pub fn transfer_star(
        &mut self,
        id: StarId,
        to: AccountId,
        caller: AccountId,
    ) -> Result<(), NotaryError> {
        let owner = self.registry.owner_of(id)?;
        if owner != caller {
            return Err(NotaryError::NotOwner { id, caller });
        }

        self.settle_transfer(id, to)?;
        debug!("{} transferred {} to {}", caller, id, to);
        Ok(())
    }

    /// Swap the owners of two stars
    ///
    /// The caller needs authorization (owner-or-approved) on at least ONE of
    /// the two stars; holding an approval on one side is enough to move both.
    /// This asymmetric-trust shortcut is deliberate reference behavior, not an
    /// oversight. Approvals on both stars are consumed; listings on either are
    /// left in place.
    pub fn exchange_stars(
        &mut self,
        id_a: StarId,
        id_b: StarId,
        caller: AccountId,
    ) -> Result<(), NotaryError> {
        let owner_a = self.registry.owner_of(id_a)?;
        let owner_b = self.registry.owner_of(id_b)?;

        let authorized = self.approvals.is_authorized(&self.registry, id_a, caller)?
            || self.approvals.is_authorized(&self.registry, id_b, caller)?;
        if !authorized {
            return Err(NotaryError::NotAuthorized { id: id_a, caller });
        }

        self.settle_transfer(id_a, owner_b)?;
        self.settle_transfer(id_b, owner_a)?;
        debug!("{} exchanged {} and {}", caller, id_a, id_b);
        Ok(())
    }

    /// Get the current owner of a star
    pub fn owner_of(&self, id: StarId) -> Result<AccountId, NotaryError> {
        self.registry.owner_of(id)
    }

    /// Get the display name of a star
    pub fn lookup_star_info(&self, id: StarId) -> Result<&StarName, NotaryError> {
        self.registry.name_of(id)
    }

    /// Get the listed sale price of a star, if it is for sale
    pub fn sale_price(&self, id: StarId) -> Option<Price> {
        self.listings.get(&id).copied()
    }

    /// Get the currently approved manager of a star, if any
    pub fn approved_manager(&self, id: StarId) -> Option<AccountId> {
        self.approvals.approved_for(id)
    }

    /// Get a star record, if it exists
    pub fn star(&self, id: StarId) -> Option<&Star> {
        self.registry.get(id)
    }

    pub fn registry(&self) -> &StarRegistry {
        &self.registry
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut L {
        &mut self.ledger
    }

    /// Reassign ownership and invalidate the outstanding approval
    ///
    /// Single path for every ownership change, so the "approvals never survive
    /// an owner change" invariant holds across buy, transfer and exchange.
    fn settle_transfer(&mut self, id: StarId, new_owner: AccountId) -> Result<(), NotaryError> {
        self.registry.set_owner(id, new_owner)?;
        self.approvals.consume(id);
        Ok(())
    }
}
