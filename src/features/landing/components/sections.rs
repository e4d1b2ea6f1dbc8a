//! Static marketing sections of the landing page.

use leptos::prelude::*;
use crate::app::AppView;

#[component]
pub fn Hero() -> impl IntoView {
    let navigate = use_context::<WriteSignal<AppView>>().expect("navigate context");

    view! {
        <section id="top" class="hero">
            <span class="hero-eyebrow">"AI-powered Life Cycle Assessment"</span>
            <h1>"Measure the footprint of every material you make"</h1>
            <p>"Model metal production from ore to recycling, find the hotspots and compare scenarios in minutes instead of months."</p>
            <div class="hero-actions">
                <button class="btn-primary" on:click=move |_| navigate.set(AppView::Dashboard)>"Open the dashboard"</button>
                <a class="btn-secondary" href="#how-it-works">"See how it works"</a>
            </div>
        </section>
    }
}

const FEATURES: [(&str, &str, &str); 6] = [
    ("✦", "AI data gap filling", "Estimate missing inventory data from similar processes."),
    ("⚡", "Scenario optimizer", "Compare energy mixes, recycled content and transport routes."),
    ("▥", "Automated reports", "Produce ISO 14040-style summaries for stakeholders."),
    ("◎", "Circularity metrics", "Track recycled input and end-of-life recovery rates."),
    ("▦", "Hotspot analysis", "See which life cycle stage dominates each impact category."),
    ("⚙", "Team workspaces", "Share projects and assumptions across your organization."),
];

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="features">
            <h2>"Everything you need for material LCAs"</h2>
            <div class="feature-grid">
                {FEATURES.iter().map(|(icon, title, body)| view! {
                    <div class="feature-card">
                        <span class="feature-icon">{*icon}</span>
                        <h3>{*title}</h3>
                        <p>{*body}</p>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}

const STEPS: [(&str, &str); 4] = [
    ("Describe your product", "Pick the material and outline the production route."),
    ("Let the AI fill gaps", "Missing inventory data is estimated and flagged for review."),
    ("Explore the impact", "Browse results by stage, category and scenario."),
    ("Share the findings", "Export a report or invite colleagues to the project."),
];

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section id="how-it-works" class="how-it-works">
            <h2>"How it works"</h2>
            <ol class="steps">
                {STEPS.iter().enumerate().map(|(index, (title, body))| view! {
                    <li class="step">
                        <span class="step-number">{index + 1}</span>
                        <h3>{*title}</h3>
                        <p>{*body}</p>
                    </li>
                }).collect_view()}
            </ol>
        </section>
    }
}

const STATS: [(&str, &str); 4] = [
    ("70%", "faster assessments"),
    ("1,200+", "process datasets"),
    ("35%", "average CO₂e reduction found"),
    ("50+", "industrial teams"),
];

#[component]
pub fn Impact() -> impl IntoView {
    view! {
        <section id="impact" class="impact">
            <h2>"Impact in numbers"</h2>
            <div class="stat-grid">
                {STATS.iter().map(|(value, label)| view! {
                    <div class="stat-card">
                        <span class="stat-value">{*value}</span>
                        <span class="stat-label">{*label}</span>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}

const TESTIMONIALS: [(&str, &str, &str); 3] = [
    ("We cut our assessment turnaround from weeks to days.", "Priya N.", "Sustainability Lead, steel mill"),
    ("The hotspot view changed how we source aluminum.", "Tomás R.", "Procurement Manager"),
    ("Finally an LCA tool our engineers actually open.", "Hannah K.", "Head of R&D, cable maker"),
];

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section class="testimonials">
            <h2>"What teams are saying"</h2>
            <div class="testimonial-grid">
                {TESTIMONIALS.iter().map(|(quote, name, role)| view! {
                    <figure class="testimonial">
                        <blockquote>{*quote}</blockquote>
                        <figcaption>
                            <strong>{*name}</strong>
                            <span>{*role}</span>
                        </figcaption>
                    </figure>
                }).collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <span class="brand-name">"LCA Studio"</span>
            <nav>
                <a href="#features">"Features"</a>
                <a href="#faq">"FAQ"</a>
            </nav>
            <small>"© 2024 LCA Studio. Demo only."</small>
        </footer>
    }
}
