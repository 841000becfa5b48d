pub mod footer;
pub mod header;

use leptos::prelude::*;

/// Page frame: navigation bar, routed content, footer.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                   |
/// +------------------------------------------+
/// |                 Content                  |
/// +------------------------------------------+
/// |                 Footer                   |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="site-layout">
            <header::Header />
            <main class="site-main">
                {children()}
            </main>
            <footer::Footer />
        </div>
    }
}
