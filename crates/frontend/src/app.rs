use crate::routes::routes::AppRoutes;
use contracts::shared::config::{load_config, SiteConfig};
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config().unwrap_or_else(|e| {
        log::warn!("Falling back to default site config: {:#}", e);
        SiteConfig::default()
    });
    log::debug!("Site config: {:?}", config);

    // Provide the site config to every page via context.
    provide_context(config);

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}
