use crate::domain::a001_product::ui::list::ProductList;
use crate::shared::components::faq_accordion::{FaqAccordion, FaqEntry};
use crate::shared::components::page_header::PageHeader;
use leptos::prelude::*;

const PRODUCT_FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "Can the products be fitted to an existing elevator?",
        answer: "Most components are designed for retrofit. Our engineers survey the cabin and shaft before recommending a configuration.",
    },
    FaqEntry {
        question: "Why is there no price listed?",
        answer: "Every installation is sized to the building, so pricing is quoted per project after a site survey.",
    },
    FaqEntry {
        question: "Do you provide installation and maintenance?",
        answer: "Yes. All products ship with certified installation and an optional maintenance contract.",
    },
    FaqEntry {
        question: "Are the products compliant with accessibility standards?",
        answer: "Control panels and floor indicators are ADA compliant and support braille and audio announcements.",
    },
];

#[component]
pub fn ProductsPage() -> impl IntoView {
    view! {
        <PageHeader
            eyebrow="Products"
            title="Elevator Components & Systems"
            subtitle="Climate control, security, multimedia and smart systems for modern elevator cabins."
        />
        <ProductList />
        <FaqAccordion title="Frequently Asked Questions" entries=PRODUCT_FAQ.to_vec() />
    }
}
