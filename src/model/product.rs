use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Fuel product tracked by alerts and orders.
///
/// Deserialization enforces the fixed enumeration, so any other value in a
/// request body is rejected before it reaches a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Product {
    Diesel,
    Gasoline,
}

impl Product {
    /// Returns the canonical string stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Product::Diesel => "Diesel",
            Product::Gasoline => "Gasoline",
        }
    }

    /// Parses the stored database string back into the enum.
    ///
    /// # Returns
    /// - `Some(Product)` - Known product name
    /// - `None` - Unknown value (corrupt or legacy row)
    pub fn from_str_opt(value: &str) -> Option<Self> {
        match value {
            "Diesel" => Some(Product::Diesel),
            "Gasoline" => Some(Product::Gasoline),
            _ => None,
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_known_products() {
        assert_eq!(Product::from_str_opt("Diesel"), Some(Product::Diesel));
        assert_eq!(Product::from_str_opt("Gasoline"), Some(Product::Gasoline));
        assert_eq!(Product::Diesel.as_str(), "Diesel");
    }

    #[test]
    fn rejects_unknown_products() {
        assert_eq!(Product::from_str_opt("Kerosene"), None);
        assert_eq!(Product::from_str_opt("diesel"), None);
    }

    #[test]
    fn deserializes_exact_names_only() {
        assert!(serde_json::from_str::<Product>("\"Diesel\"").is_ok());
        assert!(serde_json::from_str::<Product>("\"diesel\"").is_err());
    }
}
