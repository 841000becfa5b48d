use crate::layout::Shell;
use crate::pages::not_found::NotFound;
use crate::pages::products::ProductsPage;
use crate::pages::solutions::SolutionsPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=ProductsPage />
                    <Route path=path!("/products") view=ProductsPage />
                    <Route path=path!("/solutions") view=SolutionsPage />
                </Routes>
            </Shell>
        </Router>
    }
}
