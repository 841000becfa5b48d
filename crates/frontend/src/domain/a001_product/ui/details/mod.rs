use crate::shared::modal::Modal;
use contracts::domain::a001_product::Product;
use leptos::prelude::*;
use thaw::*;

/// Quick-view dialog for a single product
#[component]
pub fn QuickView(product: &'static Product, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let media = match &product.img {
        Some(src) => view! {
            <img id="qv-img" src=src.clone() alt=product.title.clone() />
        }
        .into_any(),
        None => view! {
            <i id="qv-icon" class=product.icon.clone() style="font-size: 4rem;"></i>
        }
        .into_any(),
    };

    view! {
        <Modal title=product.title.clone() on_close=on_close class="quick-view">
            <div class="qv-layout">
                <div class="qv-media">{media}</div>
                <div class="qv-info">
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                        {product.category.badge()}
                    </Badge>
                    <div id="qv-category" class="qv-category">{product.category.display_name()}</div>
                    <p id="qv-desc" class="qv-desc">{product.description.clone()}</p>
                    <div id="qv-tags" class="qv-tags">
                        {product
                            .specs
                            .iter()
                            .map(|spec| view! { <span class="tag">{spec.clone()}</span> })
                            .collect_view()}
                    </div>
                    <div class="qv-price">{product.price.clone()}</div>
                </div>
            </div>
        </Modal>
    }
}
