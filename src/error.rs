use crate::id::{AccountId, StarId};
use crate::ledger::Price;
use thiserror::Error;

/// Represents all possible errors that can occur when operating on the notary
///
/// Every variant is caller-correctable (supply a correct id, obtain an
/// approval, send sufficient funds). Operations fail before any state
/// mutation, so a returned error never leaves partial changes behind.
#[derive(Error, Debug)]
pub enum NotaryError {
    /// A star with this identifier has already been created
    #[error("star {id} already exists")]
    DuplicateIdentifier { id: StarId },

    /// No star with this identifier exists in the registry
    #[error("star {id} not found")]
    NotFound { id: StarId },

    /// The caller is not the current owner of the star
    #[error("{caller} does not own star {id}")]
    NotOwner { id: StarId, caller: AccountId },

    /// The caller is neither the owner nor the approved manager of the star
    #[error("{caller} is not authorized to manage star {id}")]
    NotAuthorized { id: StarId, caller: AccountId },

    /// A purchase was attempted on a star without an active listing
    #[error("star {id} is not for sale")]
    NotForSale { id: StarId },

    /// Funds sent are below the listed price, or the buyer's balance is short
    #[error("insufficient funds: needed {needed}, available {available}")]
    InsufficientFunds { needed: Price, available: Price },

    /// A star name must contain at least one non-whitespace character
    #[error("star name must not be empty")]
    EmptyName,

    /// Anyhow error wrapper for error context
    #[error(transparent)]
    Context(#[from] anyhow::Error),
}
