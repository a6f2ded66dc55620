//! Customer loyalty tiers.

use serde::{Deserialize, Serialize};

/// Loyalty tier assigned to a customer at provisioning time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum LoyaltyTier {
    #[default]
    Bronze,
    Silver,
    Gold,
}

impl std::fmt::Display for LoyaltyTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bronze => f.write_str("Bronze"),
            Self::Silver => f.write_str("Silver"),
            Self::Gold => f.write_str("Gold"),
        }
    }
}
