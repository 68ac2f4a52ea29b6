//! Product identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Catalog product identifier.
///
/// Serialized as a bare integer, matching the stored cart layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    /// Create an id from its integer value.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the integer value.
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}
