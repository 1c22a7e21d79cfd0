use chrono::{DateTime, Datelike, Utc};
use leptos::prelude::*;

use super::icons::{GithubIcon, LinkedinIcon, TwitterIcon};

fn deployed_on() -> Option<String> {
    // Baked in by build.rs at compile time.
    let stamp = DateTime::parse_from_rfc3339(env!("BUILD_TIME")).ok()?;
    Some(stamp.format("%b %e, %Y").to_string())
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = Utc::now().year();

    view! {
        <footer class="border-t border-slate-200 dark:border-slate-700 bg-slate-50 dark:bg-slate-900">
            <div class="max-w-6xl mx-auto px-4 py-12 grid gap-10 sm:grid-cols-2 lg:grid-cols-4">
                <div>
                    <p class="font-mono text-lg font-bold text-teal-600 dark:text-teal-400">
                        "//william_writes_code"
                    </p>
                    <p class="mt-3 text-sm text-slate-500 dark:text-slate-400">
                        "Full-stack software engineer crafting polished web \
                         experiences from front to back."
                    </p>
                </div>
                <div>
                    <h3 class="text-sm font-semibold uppercase tracking-wider mb-3">
                        "Navigation"
                    </h3>
                    <ul class="space-y-2 text-sm text-slate-500 dark:text-slate-400">
                        <li><a href="#about" class="hover:text-teal-600 dark:hover:text-teal-400">"About"</a></li>
                        <li><a href="#skills" class="hover:text-teal-600 dark:hover:text-teal-400">"Skills"</a></li>
                        <li><a href="#projects" class="hover:text-teal-600 dark:hover:text-teal-400">"Projects"</a></li>
                        <li><a href="#experience" class="hover:text-teal-600 dark:hover:text-teal-400">"Experience"</a></li>
                        <li><a href="#contact" class="hover:text-teal-600 dark:hover:text-teal-400">"Contact"</a></li>
                    </ul>
                </div>
                <div>
                    <h3 class="text-sm font-semibold uppercase tracking-wider mb-3">
                        "Resources"
                    </h3>
                    <ul class="space-y-2 text-sm text-slate-500 dark:text-slate-400">
                        <li><a href="#" class="hover:text-teal-600 dark:hover:text-teal-400">"Resume"</a></li>
                        <li><a href="#" class="hover:text-teal-600 dark:hover:text-teal-400">"Privacy Policy"</a></li>
                        <li><a href="#" class="hover:text-teal-600 dark:hover:text-teal-400">"Terms of Service"</a></li>
                    </ul>
                </div>
                <div>
                    <h3 class="text-sm font-semibold uppercase tracking-wider mb-3">
                        "Connect"
                    </h3>
                    <div class="flex gap-4 text-slate-500 dark:text-slate-400">
                        <a
                            href="https://github.com/williamwritescode"
                            target="_blank"
                            rel="noreferrer"
                            aria-label="GitHub Profile"
                            class="hover:text-teal-600 dark:hover:text-teal-400"
                        >
                            <GithubIcon />
                        </a>
                        <a
                            href="https://linkedin.com/in/williamwritescode"
                            target="_blank"
                            rel="noreferrer"
                            aria-label="LinkedIn Profile"
                            class="hover:text-teal-600 dark:hover:text-teal-400"
                        >
                            <LinkedinIcon />
                        </a>
                        <a
                            href="https://twitter.com/williamwritescode"
                            target="_blank"
                            rel="noreferrer"
                            aria-label="Twitter Profile"
                            class="hover:text-teal-600 dark:hover:text-teal-400"
                        >
                            <TwitterIcon />
                        </a>
                    </div>
                </div>
            </div>
            <div class="border-t border-slate-200 dark:border-slate-700">
                <div class="max-w-6xl mx-auto px-4 py-4 flex flex-col sm:flex-row items-center justify-between gap-2 text-xs text-slate-500 dark:text-slate-400">
                    <p>{format!("© {year} William Writes Code. All rights reserved.")}</p>
                    {deployed_on()
                        .map(|date| view! { <p>{format!("Last deployed {date}")}</p> })}
                </div>
            </div>
        </footer>
    }
}
