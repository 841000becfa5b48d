use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Product categories shown in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Climate,
    Security,
    Components,
    Multimedia,
    Iot,
}

impl ProductCategory {
    /// Code used in filters, css classes and query strings
    pub fn code(&self) -> &'static str {
        match self {
            ProductCategory::Climate => "climate",
            ProductCategory::Security => "security",
            ProductCategory::Components => "components",
            ProductCategory::Multimedia => "multimedia",
            ProductCategory::Iot => "iot",
        }
    }

    /// Human readable label
    pub fn display_name(&self) -> &'static str {
        match self {
            ProductCategory::Climate => "Climate Control",
            ProductCategory::Security => "Security Systems",
            ProductCategory::Components => "Electronic Components",
            ProductCategory::Multimedia => "Multimedia",
            ProductCategory::Iot => "IOT & Smart Systems",
        }
    }

    /// Short upper-case text for the card badge
    pub fn badge(&self) -> String {
        self.code().to_uppercase()
    }

    /// All categories in filter-bar order
    pub fn all() -> Vec<ProductCategory> {
        vec![
            ProductCategory::Climate,
            ProductCategory::Security,
            ProductCategory::Components,
            ProductCategory::Multimedia,
            ProductCategory::Iot,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "climate" => Some(ProductCategory::Climate),
            "security" => Some(ProductCategory::Security),
            "components" => Some(ProductCategory::Components),
            "multimedia" => Some(ProductCategory::Multimedia),
            "iot" => Some(ProductCategory::Iot),
            _ => None,
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ProductCategory {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}
