use leptos::prelude::*;
use leptos::ev;
use crate::app::AppView;
use crate::core::scroll_progress;

// Pixels scrolled before the header switches to its compact style
const COMPACT_AFTER: f64 = 20.0;

fn read_scroll_progress() -> (f64, f64) {
    let win = window();
    let scroll_y = win.scroll_y().unwrap_or(0.0);
    let viewport = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let document_height = document()
        .document_element()
        .map(|el| f64::from(el.scroll_height()))
        .unwrap_or(0.0);
    (scroll_y, scroll_progress(scroll_y, document_height, viewport))
}

fn is_compact(scroll_y: f64) -> bool {
    scroll_y > COMPACT_AFTER
}

#[component]
pub fn LandingHeader() -> impl IntoView {
    let navigate = use_context::<WriteSignal<AppView>>().expect("navigate context");
    // A page restored mid-scroll starts from its current position
    let (initial_y, initial_percent) = read_scroll_progress();
    let (progress, set_progress) = signal(initial_percent);
    let (compact, set_compact) = signal(is_compact(initial_y));

    let handle = window_event_listener(ev::scroll, move |_| {
        let (scroll_y, percent) = read_scroll_progress();
        set_progress.set(percent);
        set_compact.set(is_compact(scroll_y));
    });
    on_cleanup(move || handle.remove());

    view! {
        <header class="site-header" class:compact=compact>
            <div class="site-header-inner">
                <a class="brand" href="#top">
                    <span class="brand-mark">"◎"</span>
                    <span class="brand-name">"LCA Studio"</span>
                </a>
                <nav class="site-nav">
                    <a href="#features">"Features"</a>
                    <a href="#how-it-works">"How it works"</a>
                    <a href="#impact">"Impact"</a>
                    <a href="#faq">"FAQ"</a>
                </nav>
                <button class="btn-primary" on:click=move |_| navigate.set(AppView::Dashboard)>"Try the demo"</button>
            </div>
            <div class="scroll-progress" style:width=move || format!("{:.1}%", progress.get())></div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_compacts_only_past_threshold() {
        assert!(!is_compact(0.0));
        assert!(!is_compact(COMPACT_AFTER));
        assert!(is_compact(COMPACT_AFTER + 1.0));
    }
}
