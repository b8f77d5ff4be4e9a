//! Account kind discriminator.

use serde::{Deserialize, Serialize};

/// The `userType` value did not name a known account kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid user type: {0:?}")]
pub struct UserTypeError(pub String);

/// The two kinds of account the shop knows about.
///
/// Requests carry this as the `userType` string; it is parsed exactly once at
/// the request boundary and matched exhaustively from then on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    /// A shopper.
    Customer,
    /// A business owner selling through the shop.
    Business,
}

impl UserType {
    /// The wire value of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Business => "business",
        }
    }
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserType {
    type Err = UserTypeError;

    /// Exact, case-sensitive match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Self::Customer),
            "business" => Ok(Self::Business),
            _ => Err(UserTypeError(s.to_owned())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_kinds() {
        assert_eq!("customer".parse::<UserType>().unwrap(), UserType::Customer);
        assert_eq!("business".parse::<UserType>().unwrap(), UserType::Business);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Customer".parse::<UserType>().is_err());
        assert!("BUSINESS".parse::<UserType>().is_err());
    }

    #[test]
    fn test_parse_unknown() {
        let err = "admin".parse::<UserType>().unwrap_err();
        assert_eq!(err, UserTypeError("admin".to_string()));
        assert!("".parse::<UserType>().is_err());
    }

    #[test]
    fn test_serde_matches_display() {
        for kind in [UserType::Customer, UserType::Business] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{kind}\""));
        }
    }
}
