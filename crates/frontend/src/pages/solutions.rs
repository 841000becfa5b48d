use crate::shared::components::faq_accordion::{FaqAccordion, FaqEntry};
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use contracts::shared::disclosure::{Accordion, TabSet};
use leptos::ev;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug)]
struct SolutionTab {
    id: &'static str,
    label: &'static str,
    heading: &'static str,
    body: &'static str,
    highlights: &'static [&'static str],
}

const TABS: &[SolutionTab] = &[
    SolutionTab {
        id: "residential",
        label: "Residential",
        heading: "Quiet comfort for residential towers",
        body: "Low-noise climate control, LED lighting and intercom systems tuned for apartment buildings.",
        highlights: &["Low Noise", "Energy Saving", "Resident Intercom"],
    },
    SolutionTab {
        id: "commercial",
        label: "Commercial",
        heading: "High-traffic office and retail buildings",
        body: "Digital signage, destination control panels and surveillance for buildings moving thousands of people a day.",
        highlights: &["Digital Signage", "Access Control", "Traffic Analytics"],
    },
    SolutionTab {
        id: "healthcare",
        label: "Healthcare",
        heading: "Hygienic cabins for hospitals",
        body: "Air purification with UV sterilization, touchless controls and emergency communication for patient transport.",
        highlights: &["HEPA Filter", "Touchless Controls", "Priority Service"],
    },
    SolutionTab {
        id: "smart",
        label: "Smart Buildings",
        heading: "Connected elevators",
        body: "IOT sensor kits and cloud-connected control panels enable predictive maintenance and remote monitoring.",
        highlights: &["Predictive Alerts", "Remote Monitoring", "Cloud Connected"],
    },
];

#[derive(Clone, Copy, Debug)]
struct ProcessStep {
    title: &'static str,
    details: &'static str,
}

const STEPS: &[ProcessStep] = &[
    ProcessStep {
        title: "Consultation",
        details: "We review the building, traffic profile and your goals for the upgrade.",
    },
    ProcessStep {
        title: "Site Survey",
        details: "Engineers measure cabins and shafts and check electrical capacity.",
    },
    ProcessStep {
        title: "Solution Design",
        details: "A configuration and a fixed quote are prepared from the survey results.",
    },
    ProcessStep {
        title: "Installation",
        details: "Certified technicians install and commission the equipment with minimal downtime.",
    },
    ProcessStep {
        title: "Support",
        details: "Ongoing maintenance and remote monitoring keep the system running.",
    },
];

const SOLUTIONS_FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "How long does a typical upgrade take?",
        answer: "Most cabin upgrades are completed within one to three days per elevator.",
    },
    FaqEntry {
        question: "Can solutions be combined?",
        answer: "Yes. Climate, security and multimedia packages share the same control panel and can be installed together.",
    },
];

#[component]
pub fn SolutionsPage() -> impl IntoView {
    view! {
        <PageHeader
            eyebrow="Solutions"
            title="Solutions for Every Building"
            subtitle="Packages tailored to residential, commercial, healthcare and smart buildings."
        />
        <SolutionTabs />
        <ProcessSteps />
        <FaqAccordion title="Questions about our solutions" entries=SOLUTIONS_FAQ.to_vec() />
    }
}

#[component]
fn SolutionTabs() -> impl IntoView {
    let tabs = RwSignal::new(TabSet::new(TABS.iter().map(|t| t.id)));

    view! {
        <section class="solutions-tabs">
            <div class="tab-buttons" role="tablist">
                {TABS
                    .iter()
                    .map(|tab| {
                        let id = tab.id;
                        let is_active = move || tabs.with(|t| t.is_active(id));
                        view! {
                            <button
                                class=move || if is_active() { "tab-btn active" } else { "tab-btn" }
                                role="tab"
                                aria-selected=move || is_active().to_string()
                                data-tab=id
                                on:click=move |_| {
                                    tabs.update(|t| {
                                        t.select(id);
                                    });
                                }
                            >
                                {tab.label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            {move || {
                let active = tabs.with(|t| t.active_id().map(str::to_string));
                TABS.iter()
                    .find(|tab| Some(tab.id) == active.as_deref())
                    .map(|tab| {
                        view! {
                            <div class="tab-pane active" id=tab.id role="tabpanel">
                                <h3>{tab.heading}</h3>
                                <p>{tab.body}</p>
                                <ul class="tab-highlights">
                                    {tab.highlights.iter().map(|h| view! { <li>{*h}</li> }).collect_view()}
                                </ul>
                            </div>
                        }
                    })
            }}
        </section>
    }
}

#[component]
fn ProcessSteps() -> impl IntoView {
    let steps = RwSignal::new(Accordion::with_first_open(STEPS.len()));

    // Arrow keys walk the steps from the open one, Home/End jump to the ends
    let on_step_key = move |ev: ev::KeyboardEvent| {
        let action: fn(&mut Accordion) -> bool = match ev.key().as_str() {
            "ArrowDown" | "ArrowRight" => Accordion::focus_next,
            "ArrowUp" | "ArrowLeft" => Accordion::focus_prev,
            "Home" => Accordion::focus_first,
            "End" => Accordion::focus_last,
            _ => return,
        };
        ev.prevent_default();
        steps.update(|s| {
            action(s);
        });
    };

    view! {
        <section class="process-section">
            <div class="process-section__header">
                <h2 class="section-title">"Our Process"</h2>
                <button id="expandAllSteps" class="button button--ghost" on:click=move |_| steps.update(|s| s.toggle_all())>
                    {move || {
                        if steps.with(|s| s.all_expanded()) {
                            view! { {icon("compress")} <span>"Collapse All Steps"</span> }.into_any()
                        } else {
                            view! { {icon("expand")} <span>"Expand All Steps"</span> }.into_any()
                        }
                    }}
                </button>
            </div>
            <div class="process-steps">
                {STEPS
                    .iter()
                    .enumerate()
                    .map(|(index, step)| {
                        let is_open = move || steps.with(|s| s.is_expanded(index));
                        let details_id = format!("step-{}-details", index + 1);
                        view! {
                            <div class=move || if is_open() { "process-step expanded" } else { "process-step" }>
                                <button
                                    class="process-step-header"
                                    aria-expanded=move || is_open().to_string()
                                    aria-controls=details_id.clone()
                                    on:click=move |_| steps.update(|s| s.toggle(index))
                                    on:keydown=on_step_key
                                >
                                    <span class="process-step__number">{index + 1}</span>
                                    <span class="process-step__title">{step.title}</span>
                                    {icon("chevron-down")}
                                </button>
                                <div class="step-content-details" id=details_id>
                                    <p>{step.details}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
