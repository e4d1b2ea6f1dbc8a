use leptos::prelude::*;
use crate::features::landing::{Faq, Features, Footer, Hero, HowItWorks, Impact, LandingHeader, Testimonials};

#[component]
pub fn Landing() -> impl IntoView {
    view! {
        <div class="landing-page">
            <LandingHeader />
            <main>
                <Hero />
                <Features />
                <HowItWorks />
                <Impact />
                <Testimonials />
                <Faq />
            </main>
            <Footer />
        </div>
    }
}
