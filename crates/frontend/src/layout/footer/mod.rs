use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__content">
                <span>"LiftTech Systems"</span>
                <span class="footer__note">"Elevator climate, security and smart systems"</span>
            </div>
        </footer>
    }
}
