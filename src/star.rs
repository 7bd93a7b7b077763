use crate::error::NotaryError;
use crate::id::{AccountId, StarId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-empty text label for a star
///
/// The constructor is the only way to build a StarName, so every stored star
/// is guaranteed to carry a usable name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarName(String);

impl StarName {
    /// Create a StarName, rejecting empty or whitespace-only input
    pub fn new(name: impl Into<String>) -> Result<Self, NotaryError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(NotaryError::EmptyName);
        }
        Ok(StarName(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StarName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StarName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A registered star asset
///
/// Exactly one owner at all times after creation; id and name are immutable
/// once minted. The registry is the sole authority over the owner field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Star {
    /// Unique identifier for this star
    pub id: StarId,

    /// Immutable display name chosen at creation
    pub name: StarName,

    /// The AccountId of the party who currently controls this star
    pub owner: AccountId,
}

impl Star {
    /// Create a new Star owned by its creator
    pub fn new(id: StarId, name: StarName, owner: AccountId) -> Self {
        Self { id, name, owner }
    }

    /// Get the star ID
    pub fn id(&self) -> StarId {
        self.id
    }

    /// Get the display name
    pub fn name(&self) -> &StarName {
        &self.name
    }

    /// Get the current owner
    pub fn owner(&self) -> AccountId {
        self.owner
    }
}
