use crate::shared::icons::icon;
use contracts::shared::disclosure::Accordion;
use leptos::prelude::*;

/// One question/answer pair
#[derive(Clone, Copy, Debug)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// FAQ list where opening a question closes the previously open one
#[component]
pub fn FaqAccordion(
    entries: Vec<FaqEntry>,
    /// Section heading
    #[prop(optional, into)]
    title: Option<String>,
) -> impl IntoView {
    let state = RwSignal::new(Accordion::new(entries.len()));

    view! {
        <section class="faq-section">
            {title.map(|t| view! { <h2 class="section-title">{t}</h2> })}
            <div class="faq-list">
                {entries
                    .into_iter()
                    .enumerate()
                    .map(|(index, entry)| {
                        let is_open = move || state.with(|s| s.is_expanded(index));
                        view! {
                            <div class=move || if is_open() { "faq-item active" } else { "faq-item" }>
                                <button
                                    class="faq-question"
                                    aria-expanded=move || is_open().to_string()
                                    on:click=move |_| state.update(|s| s.toggle(index))
                                >
                                    <span>{entry.question}</span>
                                    {icon("chevron-down")}
                                </button>
                                <div class="faq-answer">
                                    <p>{entry.answer}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
