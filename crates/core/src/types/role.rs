//! User roles.

use serde::{Deserialize, Serialize};

/// Marketplace role attached to a signed-in user.
///
/// Buyers land on the home page after sign-in; creators land on their
/// dashboard, which only renders for this role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Shopper browsing and buying from the marketplace.
    #[default]
    Buyer,
    /// Maker selling through the marketplace.
    Creator,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buyer => write!(f, "buyer"),
            Self::Creator => write!(f, "creator"),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buyer" => Ok(Self::Buyer),
            "creator" => Ok(Self::Creator),
            _ => Err(format!("invalid user role: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_roundtrip() {
        for role in [UserRole::Buyer, UserRole::Creator] {
            let parsed: UserRole = role.to_string().parse().unwrap();
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("admin".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&UserRole::Creator).unwrap();
        assert_eq!(json, "\"creator\"");
    }
}
