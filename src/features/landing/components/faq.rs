use leptos::prelude::*;
use crate::core::FaqAccordion;

const QUESTIONS: [(&str, &str); 5] = [
    (
        "What is a Life Cycle Assessment?",
        "An LCA measures the environmental impact of a product from raw material extraction through manufacturing, use and end of life.",
    ),
    (
        "Which materials are supported?",
        "The demo covers steel, aluminum and copper, with a generic category for everything else.",
    ),
    (
        "How does the AI help?",
        "It fills data gaps from comparable processes and points out the stages with the largest footprint.",
    ),
    (
        "Is my data stored anywhere?",
        "Not in this demo. Everything lives in your browser tab and is gone after a reload.",
    ),
    (
        "Can I export reports?",
        "Report export is on the roadmap and shows as Coming Soon in the dashboard.",
    ),
];

#[component]
pub fn Faq() -> impl IntoView {
    let accordion = RwSignal::new(FaqAccordion::default());

    view! {
        <section id="faq" class="faq">
            <h2>"Frequently Asked Questions"</h2>
            <div class="faq-list">
                {QUESTIONS.iter().enumerate().map(|(index, (question, answer))| {
                    let is_open = move || accordion.with(|a| a.is_open(index));
                    view! {
                        <div class="faq-item" class:open=is_open>
                            <button class="faq-question" on:click=move |_| accordion.update(|a| a.toggle(index))>
                                <span>{*question}</span>
                                <span class="faq-chevron">{move || if is_open() { "−" } else { "+" }}</span>
                            </button>
                            <Show when=is_open>
                                <p class="faq-answer">{*answer}</p>
                            </Show>
                        </div>
                    }
                }).collect_view()}
            </div>
        </section>
    }
}
