//! Status and category enums for catalog and order entities.

use serde::{Deserialize, Serialize};

/// Product category.
///
/// Matches the category facet used by the storefront filter sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    Running,
    Basketball,
    Casual,
    Training,
    Lifestyle,
    Football,
    Skateboarding,
    Golf,
    Tennis,
}

impl ProductCategory {
    /// The lowercase label used in URLs and query strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Basketball => "basketball",
            Self::Casual => "casual",
            Self::Training => "training",
            Self::Lifestyle => "lifestyle",
            Self::Football => "football",
            Self::Skateboarding => "skateboarding",
            Self::Golf => "golf",
            Self::Tennis => "tennis",
        }
    }
}

impl std::str::FromStr for ProductCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "running" => Ok(Self::Running),
            "basketball" => Ok(Self::Basketball),
            "casual" => Ok(Self::Casual),
            "training" => Ok(Self::Training),
            "lifestyle" => Ok(Self::Lifestyle),
            "football" => Ok(Self::Football),
            "skateboarding" => Ok(Self::Skateboarding),
            "golf" => Ok(Self::Golf),
            "tennis" => Ok(Self::Tennis),
            other => Err(UnknownCategory(other.to_owned())),
        }
    }
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized category label.
#[derive(Debug, thiserror::Error)]
#[error("unknown product category: {0}")]
pub struct UnknownCategory(pub String);

/// Order lifecycle status.
///
/// The admin can set any status from any status; there is no enforced
/// ordering between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Returned,
}

impl OrderStatus {
    /// All statuses, in lifecycle display order.
    pub const ALL: [Self; 6] = [
        Self::Pending,
        Self::Processing,
        Self::Shipped,
        Self::Delivered,
        Self::Cancelled,
        Self::Returned,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
            Self::Returned => "returned",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payment method kind stored on an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    CreditCard,
    Paypal,
    ApplePay,
    GooglePay,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_roundtrip() {
        for label in [
            "running",
            "basketball",
            "casual",
            "training",
            "lifestyle",
            "football",
            "skateboarding",
            "golf",
            "tennis",
        ] {
            let category: ProductCategory = label.parse().expect("known category");
            assert_eq!(category.as_str(), label);
        }
    }

    #[test]
    fn test_category_parse_is_case_insensitive() {
        let category: ProductCategory = "Running".parse().expect("parse");
        assert_eq!(category, ProductCategory::Running);
    }

    #[test]
    fn test_category_parse_unknown() {
        let err = "sandals".parse::<ProductCategory>().unwrap_err();
        assert!(err.to_string().contains("sandals"));
    }

    #[test]
    fn test_order_status_serde_snake_case() {
        let json = serde_json::to_string(&OrderStatus::Shipped).expect("serialize");
        assert_eq!(json, "\"shipped\"");
    }
}
