use leptos::either::Either;
use leptos::prelude::*;

use super::icons::{MenuIcon, MoonIcon, SunIcon};
use super::theme::ThemeToggle;

const NAV_LINKS: [(&str, &str); 4] = [
    ("About", "#about"),
    ("Skills", "#skills"),
    ("Projects", "#projects"),
    ("Experience", "#experience"),
];

/// Fixed top bar: logo, anchor links to each section, theme toggle, and a
/// collapsible menu on small screens.
#[component]
pub fn Navbar() -> impl IntoView {
    let ThemeToggle { dark, toggle } = expect_context::<ThemeToggle>();
    let (menu_open, set_menu_open) = signal(false);

    let theme_button = move || {
        if dark.get() {
            Either::Left(view! { <SunIcon /> })
        } else {
            Either::Right(view! { <MoonIcon /> })
        }
    };

    view! {
        <nav class="fixed top-0 inset-x-0 z-50 bg-white/90 dark:bg-slate-900/90 backdrop-blur border-b border-slate-200 dark:border-slate-700">
            <div class="max-w-6xl mx-auto px-4 h-16 flex items-center justify-between">
                <a href="#" class="font-mono text-lg font-bold text-teal-600 dark:text-teal-400">
                    "//william_writes_code"
                </a>
                <div class="hidden md:flex items-center gap-6">
                    {NAV_LINKS
                        .iter()
                        .map(|(label, href)| {
                            view! {
                                <a
                                    href=*href
                                    class="text-sm font-medium hover:text-teal-600 dark:hover:text-teal-400 transition-colors"
                                >
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <a
                        href="#contact"
                        class="text-sm font-medium px-4 py-2 rounded-md bg-teal-600 text-white hover:bg-teal-700 transition-colors"
                    >
                        "Contact"
                    </a>
                    <button
                        type="button"
                        aria-label="Toggle color theme"
                        class="p-2 rounded-md hover:bg-slate-100 dark:hover:bg-slate-800 transition-colors"
                        on:click=move |_| toggle.run(())
                    >
                        {theme_button}
                    </button>
                </div>
                <div class="flex items-center gap-2 md:hidden">
                    <button
                        type="button"
                        aria-label="Toggle color theme"
                        class="p-2 rounded-md hover:bg-slate-100 dark:hover:bg-slate-800 transition-colors"
                        on:click=move |_| toggle.run(())
                    >
                        {theme_button}
                    </button>
                    <button
                        type="button"
                        aria-label="Toggle navigation menu"
                        class="p-2 rounded-md hover:bg-slate-100 dark:hover:bg-slate-800 transition-colors"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        <MenuIcon />
                    </button>
                </div>
            </div>
            <Show when=move || menu_open.get()>
                <div class="md:hidden px-4 pb-4 flex flex-col gap-2 border-t border-slate-200 dark:border-slate-700">
                    {NAV_LINKS
                        .iter()
                        .map(|(label, href)| {
                            view! {
                                <a
                                    href=*href
                                    class="py-2 text-sm font-medium hover:text-teal-600 dark:hover:text-teal-400"
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <a
                        href="#contact"
                        class="py-2 text-sm font-medium text-teal-600 dark:text-teal-400"
                        on:click=move |_| set_menu_open.set(false)
                    >
                        "Contact"
                    </a>
                </div>
            </Show>
        </nav>
    }
}
