//! Strongly-typed identifiers used across the domain.

use core::num::NonZeroU64;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a persisted product.
///
/// Assigned by the repository on first save; always positive.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(NonZeroU64);

impl ProductId {
    /// Build an identifier from a raw value. Zero is rejected.
    pub fn new(raw: u64) -> Result<Self, DomainError> {
        NonZeroU64::new(raw)
            .map(Self)
            .ok_or_else(|| DomainError::invalid_id("ProductId: must be positive"))
    }

    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<NonZeroU64> for ProductId {
    fn from(value: NonZeroU64) -> Self {
        Self(value)
    }
}

impl From<ProductId> for u64 {
    fn from(value: ProductId) -> Self {
        value.get()
    }
}

impl TryFrom<u64> for ProductId {
    type Error = DomainError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .trim()
            .parse::<u64>()
            .map_err(|e| DomainError::invalid_id(format!("ProductId: {e}")))?;
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zero_is_not_an_identity() {
        assert!(matches!(ProductId::new(0), Err(DomainError::InvalidId(_))));
    }

    #[test]
    fn parses_positive_numbers() {
        let id: ProductId = "23".parse().unwrap();
        assert_eq!(id.get(), 23);
        assert_eq!(id.to_string(), "23");
    }

    #[test]
    fn rejects_garbage_and_negative_input() {
        assert!(matches!("abc".parse::<ProductId>(), Err(DomainError::InvalidId(_))));
        assert!(matches!("-4".parse::<ProductId>(), Err(DomainError::InvalidId(_))));
        assert!(matches!("0".parse::<ProductId>(), Err(DomainError::InvalidId(_))));
    }

    #[test]
    fn serializes_as_plain_number() {
        let id = ProductId::new(7).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
        let back: ProductId = serde_json::from_str("7").unwrap();
        assert_eq!(back, id);
        assert!(serde_json::from_str::<ProductId>("0").is_err());
    }

    proptest! {
        /// Property: ordering of ids follows ordering of their raw values.
        #[test]
        fn ordering_matches_raw_values(a in 1u64.., b in 1u64..) {
            let ia = ProductId::new(a).unwrap();
            let ib = ProductId::new(b).unwrap();
            prop_assert_eq!(ia.cmp(&ib), a.cmp(&b));
        }
    }
}
