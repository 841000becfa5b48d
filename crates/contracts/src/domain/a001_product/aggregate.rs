use crate::enums::ProductCategory;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// ID Type
// ============================================================================

/// Product identifier, also the "newest" sort key
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl ProductId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(ProductId)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Catalog entry. Records are built once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub category: ProductCategory,
    pub description: String,
    /// Short labels, display only
    pub specs: Vec<String>,
    /// Placeholder text, not a number
    pub price: String,
    /// Icon class of the fallback glyph
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
}

impl Product {
    pub fn new(
        id: u32,
        title: &str,
        category: ProductCategory,
        description: &str,
        specs: &[&str],
        icon: &str,
    ) -> Self {
        Self {
            id: ProductId(id),
            title: title.to_string(),
            category,
            description: description.to_string(),
            specs: specs.iter().map(|s| s.to_string()).collect(),
            price: "Contact for Quote".to_string(),
            icon: icon.to_string(),
            img: None,
        }
    }

    pub fn with_image(mut self, img: &str) -> Self {
        self.img = Some(img.to_string());
        self
    }

    /// Case-insensitive match of an already lower-cased needle
    pub fn matches_search(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase().contains(needle_lower)
            || self.description.to_lowercase().contains(needle_lower)
            || self.category.code().contains(needle_lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_parse() {
        assert_eq!(" 12 ".parse::<ProductId>(), Ok(ProductId(12)));
        assert!("abc".parse::<ProductId>().is_err());
    }

    #[test]
    fn test_matches_search() {
        let p = Product::new(
            1,
            "LED Lighting System",
            ProductCategory::Components,
            "Energy-efficient LED lighting.",
            &["LED"],
            "fas fa-lightbulb",
        );
        assert!(p.matches_search("led"));
        assert!(p.matches_search("energy-efficient"));
        assert!(p.matches_search("compon"));
        assert!(!p.matches_search("camera"));
    }

    #[test]
    fn test_serde_shape() {
        let p = Product::new(7, "Fan", ProductCategory::Climate, "d", &["a"], "fas fa-wind");
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["category"], "climate");
        assert!(json.get("img").is_none());

        let back: Product = serde_json::from_value(json).unwrap();
        assert_eq!(back, p);
    }
}
