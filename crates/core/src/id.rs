//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a catalog product.
///
/// Product ids are nominally six decimal digits, but the catalog accepts any
/// `i32` the source carries. Use [`ProductId::is_canonical`] where the six-digit
/// form must be enforced.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i32);

impl ProductId {
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> i32 {
        self.0
    }

    /// Whether the id has exactly six digits (`100000..=999999`).
    pub fn is_canonical(self) -> bool {
        (100_000..=999_999).contains(&self.0)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i32> for ProductId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<ProductId> for i32 {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .parse::<i32>()
            .map_err(|e| DomainError::invalid_id(format!("ProductId {s:?}: {e}")))?;
        Ok(Self(raw))
    }
}
