use leptos::prelude::*;

/// PageHeader component - hero block at the top of a site page
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,

    /// Small caption above the title
    #[prop(optional, into)]
    eyebrow: Option<String>,

    /// Optional lead paragraph
    #[prop(optional, into)]
    subtitle: Option<String>,
) -> impl IntoView {
    view! {
        <section class="page-hero">
            <div class="page-hero__content">
                {eyebrow.map(|e| view! { <span class="page-hero__eyebrow">{e}</span> })}
                <h1 class="page-hero__title">{title}</h1>
                {subtitle.map(|s| view! { <p class="page-hero__subtitle">{s}</p> })}
            </div>
        </section>
    }
}
