pub mod aggregate;
pub mod card;
pub mod catalog;
pub mod state;
pub mod view;

pub use aggregate::{Product, ProductId};
pub use catalog::list_catalog;
pub use state::{CatalogView, LoadTicket};
pub use view::{apply_view, find_by_id, has_more, load_more, page, CategoryFilter};
