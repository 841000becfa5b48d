pub mod state;

use crate::domain::a001_product::query::CatalogQuery;
use crate::domain::a001_product::ui::details::QuickView;
use crate::shared::icons::icon;
use contracts::domain::a001_product::card::{tags_json, ProductCard};
use contracts::domain::a001_product::{CategoryFilter, Product, ProductId};
use contracts::enums::{ProductCategory, SortMode};
use contracts::shared::config::SiteConfig;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use state::create_state;
use thaw::*;

/// Filter bar, product grid with "load more" and the quick-view modal
#[component]
pub fn ProductList() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let delay_ms = config.catalog.load_more_delay_ms;

    let state = create_state(&config.catalog);
    let query = CatalogQuery::from_location();
    if !query.is_empty() {
        log::info!("Products page opened with {:?}", query);
        state.update(|s| query.apply(s));
    }

    // Local values for thaw inputs
    let search = RwSignal::new(state.with_untracked(|s| s.search().to_string()));
    let sort_value = RwSignal::new(state.with_untracked(|s| s.sort().code().to_string()));

    // Sync inputs -> view state
    Effect::new(move |_| {
        let term = search.get();
        state.update(|s| s.set_search(&term));
    });
    Effect::new(move |_| {
        let code = sort_value.get();
        let sort = code.parse::<SortMode>().unwrap_or_else(|e| {
            log::warn!("{}, using {}", e, SortMode::Featured);
            SortMode::Featured
        });
        state.update(|s| s.set_sort(sort));
    });

    let (quick_view, set_quick_view) = signal(None::<&'static Product>);
    let open_quick_view = Callback::new(move |id: ProductId| {
        match state.with_untracked(|s| s.quick_view(id)) {
            Some(product) => set_quick_view.set(Some(product)),
            None => log::warn!("Quick view requested for unknown product {}", id),
        }
    });

    let on_load_more = move |_| {
        // Rejected while a load is pending, which keeps one click = one page
        let Some(ticket) = state.try_update(|s| s.begin_load_more()).flatten() else {
            return;
        };
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            let applied = state
                .try_update(|s| s.finish_load_more(ticket))
                .unwrap_or(false);
            if applied {
                state.with_untracked(|s| {
                    log::info!("Loaded more products: {} of {}", s.visible_count(), s.total())
                });
            }
        });
    };

    let filters: Vec<CategoryFilter> = std::iter::once(CategoryFilter::All)
        .chain(ProductCategory::all().into_iter().map(CategoryFilter::Only))
        .collect();

    view! {
        <section class="products-section">
            <div class="products-toolbar">
                <div class="filter-buttons">
                    {filters
                        .into_iter()
                        .map(|filter| {
                            let code = filter.code().to_string();
                            let label = filter.display_name().to_string();
                            let active_filter = filter.clone();
                            let is_active = move || state.with(|s| s.filter() == &active_filter);
                            view! {
                                <button
                                    class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                                    data-filter=code
                                    on:click=move |_| {
                                        let filter = filter.clone();
                                        state.update(|s| s.set_filter(filter));
                                    }
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="products-toolbar__controls">
                    <div class="search-box">
                        {icon("search")}
                        <Input value=search placeholder="Search products..." />
                    </div>
                    <Select value=sort_value>
                        {SortMode::all()
                            .into_iter()
                            .map(|mode| view! { <option value=mode.code()>{mode.display_name()}</option> })
                            .collect_view()}
                    </Select>
                </div>
            </div>

            <div class="products-count">
                {move || state.with(|s| format!("Showing {} of {} products", s.visible_count(), s.total()))}
            </div>

            <div class="products-grid" id="productsContainer">
                <For
                    each=move || state.with(|s| s.visible().to_vec())
                    key=|product| product.id
                    children=move |product| view! { <ProductTile product=product on_details=open_quick_view /> }
                />
            </div>

            <Show when=move || state.with(|s| s.total() == 0)>
                <div class="products-empty">
                    <p>"No products match your filters."</p>
                </div>
            </Show>

            <Show when=move || state.with(|s| s.has_more())>
                <div class="load-more">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_load_more
                        disabled=move || state.with(|s| s.is_loading())
                        loading=move || state.with(|s| s.is_loading())
                    >
                        {move || if state.with(|s| s.is_loading()) { "Loading..." } else { "Load More Products" }}
                    </Button>
                </div>
            </Show>

            {move || {
                quick_view.get().map(|product| {
                    view! {
                        <QuickView
                            product=product
                            on_close=Callback::new(move |_| set_quick_view.set(None))
                        />
                    }
                })
            }}
        </section>
    }
}

/// One product card. Body text comes pre-escaped from [`ProductCard`];
/// the data attributes carry raw values and are escaped by the renderer.
#[component]
fn ProductTile(product: &'static Product, on_details: Callback<ProductId>) -> impl IntoView {
    let card = ProductCard::from_product(product);
    let id = product.id;

    view! {
        <div
            class=card.container_class()
            data-id=id.to_string()
            data-title=product.title.clone()
            data-description=product.description.clone()
            data-img=product.img.clone().unwrap_or_default()
            data-tags=tags_json(product)
        >
            <div class="product-card__body" inner_html=card.body_html()></div>
            <div class="product-actions">
                <button class="product-btn view-details-btn" on:click=move |_| on_details.run(id)>
                    {icon("eye")}
                    <span>"View Details"</span>
                </button>
            </div>
        </div>
    }
}
