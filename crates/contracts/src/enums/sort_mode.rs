use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Catalog ordering selected in the sort dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Source order
    #[default]
    Featured,
    /// Highest id first
    Newest,
    /// No popularity data exists, orders like `Newest`
    Popular,
    /// Prices are quote placeholders, order is left untouched
    Price,
}

impl SortMode {
    pub fn code(&self) -> &'static str {
        match self {
            SortMode::Featured => "featured",
            SortMode::Newest => "newest",
            SortMode::Popular => "popular",
            SortMode::Price => "price",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortMode::Featured => "Featured",
            SortMode::Newest => "Newest",
            SortMode::Popular => "Most Popular",
            SortMode::Price => "Price",
        }
    }

    pub fn all() -> Vec<SortMode> {
        vec![
            SortMode::Featured,
            SortMode::Newest,
            SortMode::Popular,
            SortMode::Price,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "featured" => Some(SortMode::Featured),
            "newest" => Some(SortMode::Newest),
            "popular" => Some(SortMode::Popular),
            "price" => Some(SortMode::Price),
            _ => None,
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for SortMode {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| CatalogError::UnknownSortMode(s.to_string()))
    }
}
