use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <header class="navbar">
            <div class="navbar__content">
                <A href="/" attr:class="navbar__brand">"LiftTech Systems"</A>
                <button
                    class="menu-toggle"
                    aria-label="Toggle navigation"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <span class="menu-line"></span>
                    <span class="menu-line"></span>
                </button>
                <nav
                    class=move || if menu_open.get() { "nav-links nav-links--open" } else { "nav-links" }
                    on:click=move |_| set_menu_open.set(false)
                >
                    <A href="/products">{icon("products")}<span>"Products"</span></A>
                    <A href="/solutions">{icon("solutions")}<span>"Solutions"</span></A>
                </nav>
            </div>
        </header>
    }
}
