use contracts::domain::a001_product::{list_catalog, CatalogView};
use contracts::shared::config::CatalogConfig;
use leptos::prelude::*;

pub type ProductListState = CatalogView<'static>;

pub fn create_state(config: &CatalogConfig) -> RwSignal<ProductListState> {
    RwSignal::new(CatalogView::new(list_catalog(), config))
}
