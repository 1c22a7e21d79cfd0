use leptos::html;
use leptos::prelude::*;
use leptos_use::use_element_visibility;

/// Fade-and-rise wrapper for a page section. The section starts translated
/// down and transparent, then transitions in the first time it scrolls into
/// view. Once shown it stays shown.
#[component]
pub fn Reveal(#[prop(optional)] delay_ms: u32, children: Children) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(target);
    let (shown, set_shown) = signal(false);

    Effect::new(move |_| {
        if visible.get() {
            set_shown.set(true);
        }
    });

    view! {
        <div
            node_ref=target
            class=move || {
                if shown.get() { "reveal reveal-visible" } else { "reveal" }
            }
            style=format!("transition-delay: {delay_ms}ms")
        >
            {children()}
        </div>
    }
}
