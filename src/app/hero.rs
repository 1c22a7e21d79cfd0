use leptos::prelude::*;

use super::icons::{GithubIcon, LinkedinIcon, TwitterIcon};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="max-w-6xl mx-auto px-4 py-24 flex flex-col items-center text-center gap-6">
            <div
                class="w-24 h-24 rounded-full bg-gradient-to-br from-teal-500 to-sky-600 flex items-center justify-center text-white font-mono text-3xl font-bold shadow-lg"
                aria-hidden="true"
            >
                "W"
            </div>
            <p class="font-mono text-teal-600 dark:text-teal-400">"Hi, my name is"</p>
            <h1 class="text-4xl md:text-6xl font-bold tracking-tight">"This is William"</h1>
            <h2 class="text-2xl md:text-4xl font-bold text-slate-500 dark:text-slate-400">
                "Full-Stack Software Engineer"
            </h2>
            <p class="max-w-2xl text-slate-600 dark:text-slate-300">
                "I build exceptional digital experiences that live on the web. \
                 From responsive front-ends to robust back-end systems, I turn \
                 ideas into polished, production-ready software."
            </p>
            <div class="flex gap-4 mt-2">
                <a
                    href="#contact"
                    class="px-6 py-3 rounded-md bg-teal-600 text-white font-medium hover:bg-teal-700 transition-colors"
                >
                    "Get In Touch"
                </a>
                <a
                    href="#projects"
                    class="px-6 py-3 rounded-md border border-teal-600 text-teal-600 dark:text-teal-400 font-medium hover:bg-teal-600/10 transition-colors"
                >
                    "View My Work"
                </a>
            </div>
            <div class="flex gap-5 mt-4 text-slate-500 dark:text-slate-400">
                <a
                    href="https://github.com/williamwritescode"
                    target="_blank"
                    rel="noreferrer"
                    aria-label="GitHub Profile"
                    class="hover:text-teal-600 dark:hover:text-teal-400 transition-colors"
                >
                    <GithubIcon />
                </a>
                <a
                    href="https://linkedin.com/in/williamwritescode"
                    target="_blank"
                    rel="noreferrer"
                    aria-label="LinkedIn Profile"
                    class="hover:text-teal-600 dark:hover:text-teal-400 transition-colors"
                >
                    <LinkedinIcon />
                </a>
                <a
                    href="https://twitter.com/williamwritescode"
                    target="_blank"
                    rel="noreferrer"
                    aria-label="Twitter Profile"
                    class="hover:text-teal-600 dark:hover:text-teal-400 transition-colors"
                >
                    <TwitterIcon />
                </a>
            </div>
        </section>
    }
}
