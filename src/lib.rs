pub mod approvals;
pub mod error;
pub mod id;
pub mod ledger;
pub mod notary;
pub mod registry;
pub mod star;

// Re-export the main types for convenience
pub use approvals::ApprovalTable;
pub use error::NotaryError;
pub use id::{AccountId, StarId};
pub use ledger::{InMemoryLedger, Ledger, Price};
pub use notary::{StarNotary, NOTARY_NAME, NOTARY_SYMBOL};
pub use registry::StarRegistry;
pub use star::{Star, StarName};
