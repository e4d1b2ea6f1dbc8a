use leptos::prelude::*;

#[component]
pub fn ComingSoon(
    #[prop(into)] title: String,
    #[prop(into)] blurb: String,
) -> impl IntoView {
    view! {
        <section class="panel coming-soon">
            <h1>{title}</h1>
            <div class="coming-soon-card">
                <span class="coming-soon-badge">"Coming Soon"</span>
                <p>{blurb}</p>
            </div>
        </section>
    }
}
