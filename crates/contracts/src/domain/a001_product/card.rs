//! Render-ready projection of a product with every text field escaped.

use super::aggregate::Product;
use crate::shared::html::escape;

/// Picture area of a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardImage {
    Picture { src: String, alt: String },
    /// No image, an icon glyph is shown instead
    Glyph { icon_class: String },
}

/// Escaped card fields. Safe to splice into markup as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub id: u32,
    pub category_code: String,
    pub badge: String,
    pub category_label: String,
    pub title: String,
    pub description: String,
    pub price: String,
    pub specs: Vec<String>,
    pub image: CardImage,
}

impl ProductCard {
    pub fn from_product(product: &Product) -> Self {
        let image = match &product.img {
            Some(src) => CardImage::Picture {
                src: escape(src),
                alt: escape(&product.title),
            },
            None => CardImage::Glyph {
                icon_class: escape(&product.icon),
            },
        };

        Self {
            id: product.id.value(),
            category_code: escape(product.category.code()),
            badge: escape(&product.category.badge()),
            category_label: escape(product.category.display_name()),
            title: escape(&product.title),
            description: escape(&product.description),
            price: escape(&product.price),
            specs: product.specs.iter().map(|s| escape(s)).collect(),
            image,
        }
    }

    /// Css classes of the card container
    pub fn container_class(&self) -> String {
        format!("product-item {}", self.category_code)
    }

    /// Markup of the card body: picture, badge, texts and spec chips.
    /// Action buttons are left to the caller.
    pub fn body_html(&self) -> String {
        let image = match &self.image {
            CardImage::Picture { src, alt } => format!(r#"<img src="{}" alt="{}" />"#, src, alt),
            CardImage::Glyph { icon_class } => format!(
                r#"<div class="product-image-fallback"><i class="{}"></i></div>"#,
                icon_class
            ),
        };

        let specs: String = self
            .specs
            .iter()
            .map(|spec| format!(r#"<div class="product-spec">{}</div>"#, spec))
            .collect();

        format!(
            concat!(
                r#"<div class="product-image">{image}"#,
                r#"<div class="product-badge">{badge}</div></div>"#,
                r#"<div class="product-content">"#,
                r#"<div class="product-category">{label}</div>"#,
                r#"<h3 class="product-title">{title}</h3>"#,
                r#"<p class="product-description">{description}</p>"#,
                r#"<div class="product-specs">{specs}</div>"#,
                r#"<div class="product-price">{price}</div>"#,
                r#"</div>"#,
            ),
            image = image,
            badge = self.badge,
            label = self.category_label,
            title = self.title,
            description = self.description,
            specs = specs,
            price = self.price,
        )
    }
}

/// JSON array of the product specs for the card's `data-tags` attribute.
/// Not escaped; the attribute setter does that.
pub fn tags_json(product: &Product) -> String {
    serde_json::to_string(&product.specs).unwrap_or_else(|_| "[]".to_string())
}
