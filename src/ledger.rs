use crate::error::NotaryError;
use crate::id::AccountId;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Amount of funds, in the host environment's smallest currency unit
pub type Price = u64;

/// Balance accounting injected by the host environment
///
/// The notary only dictates the required debit/credit amounts and their
/// ordering during a purchase; how balances are physically stored is the
/// host's business. A debit must fail without mutating anything when the
/// balance is short, so the notary can sequence it before its own state
/// changes and keep the whole purchase all-or-nothing.
pub trait Ledger {
    /// Remove `amount` from an account's balance
    ///
    /// Fails with `InsufficientFunds` and leaves the balance untouched if the
    /// account holds less than `amount`.
    fn debit(&mut self, account: AccountId, amount: Price) -> Result<(), NotaryError>;

    /// Add `amount` to an account's balance
    fn credit(&mut self, account: AccountId, amount: Price);

    /// Move `amount` between two accounts
    fn transfer(
        &mut self,
        from: AccountId,
        to: AccountId,
        amount: Price,
    ) -> Result<(), NotaryError> {
        self.debit(from, amount)?;
        self.credit(to, amount);
        Ok(())
    }
}

/// In-memory ledger with deterministic balances
///
/// Reference implementation of the `Ledger` seam, used by tests and by hosts
/// that do not bring their own balance store. Accounts without a recorded
/// balance hold zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InMemoryLedger {
    balances: HashMap<AccountId, Price>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fund an account
    pub fn deposit(&mut self, account: AccountId, amount: Price) {
        *self.balances.entry(account).or_insert(0) += amount;
    }

    /// Get an account's current balance
    pub fn balance_of(&self, account: AccountId) -> Price {
        self.balances.get(&account).copied().unwrap_or(0)
    }
}

impl Ledger for InMemoryLedger {
    fn debit(&mut self, account: AccountId, amount: Price) -> Result<(), NotaryError> {
        let balance = self.balances.entry(account).or_insert(0);
        if *balance < amount {
            return Err(NotaryError::InsufficientFunds {
                needed: amount,
                available: *balance,
            });
        }
        *balance -= amount;
        debug!("debited {} from {}", amount, account);
        Ok(())
    }

    fn credit(&mut self, account: AccountId, amount: Price) {
        *self.balances.entry(account).or_insert(0) += amount;
        debug!("credited {} to {}", amount, account);
    }
}
