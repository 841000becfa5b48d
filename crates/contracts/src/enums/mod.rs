pub mod product_category;
pub mod sort_mode;

pub use product_category::ProductCategory;
pub use sort_mode::SortMode;
