use leptos::prelude::*;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="max-w-6xl mx-auto px-4 py-20">
            <h2 class="text-3xl font-bold mb-2">"About Me"</h2>
            <div class="w-16 h-1 bg-teal-600 rounded mb-8"></div>
            <div class="grid md:grid-cols-2 gap-10 items-start">
                <div class="space-y-4 text-slate-600 dark:text-slate-300">
                    <p>
                        "I'm a full-stack software engineer with over seven years of \
                         experience designing, building, and shipping web applications. \
                         I care about clean architecture, fast feedback loops, and \
                         interfaces that feel effortless to use."
                    </p>
                    <p>
                        "My journey started with a curiosity about how websites work and \
                         grew into a career spanning startups and established companies. \
                         These days I spend most of my time in the React and Node.js \
                         ecosystems, with regular detours into Python and cloud \
                         infrastructure."
                    </p>
                    <p>
                        "When I'm not writing code you'll find me contributing to open \
                         source, mentoring junior developers, or exploring the outdoors \
                         with a camera in hand."
                    </p>
                </div>
                <div class="grid grid-cols-2 gap-6">
                    <div class="p-6 rounded-lg bg-slate-50 dark:bg-slate-800 border border-slate-200 dark:border-slate-700">
                        <p class="text-3xl font-bold text-teal-600 dark:text-teal-400">"7+"</p>
                        <p class="text-sm text-slate-500 dark:text-slate-400">"Years of experience"</p>
                    </div>
                    <div class="p-6 rounded-lg bg-slate-50 dark:bg-slate-800 border border-slate-200 dark:border-slate-700">
                        <p class="text-3xl font-bold text-teal-600 dark:text-teal-400">"40+"</p>
                        <p class="text-sm text-slate-500 dark:text-slate-400">"Projects delivered"</p>
                    </div>
                    <div class="p-6 rounded-lg bg-slate-50 dark:bg-slate-800 border border-slate-200 dark:border-slate-700">
                        <p class="text-3xl font-bold text-teal-600 dark:text-teal-400">"15+"</p>
                        <p class="text-sm text-slate-500 dark:text-slate-400">"Happy clients"</p>
                    </div>
                    <div class="p-6 rounded-lg bg-slate-50 dark:bg-slate-800 border border-slate-200 dark:border-slate-700">
                        <p class="text-3xl font-bold text-teal-600 dark:text-teal-400">"3"</p>
                        <p class="text-sm text-slate-500 dark:text-slate-400">"Companies served"</p>
                    </div>
                </div>
            </div>
        </section>
    }
}
