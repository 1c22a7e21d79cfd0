use leptos::prelude::*;

struct Role {
    title: &'static str,
    company: &'static str,
    period: &'static str,
    description: &'static str,
    stack: &'static [&'static str],
}

const ROLES: [Role; 3] = [
    Role {
        title: "Senior Software Engineer",
        company: "TechSolutions Inc.",
        period: "Jan 2021 - Present",
        description: "Lead a team of five engineers building customer-facing \
                      web applications. Introduced CI/CD pipelines that cut \
                      release turnaround by 40% and mentor junior developers \
                      across the organization.",
        stack: &["React", "Node.js", "AWS"],
    },
    Role {
        title: "Software Engineer",
        company: "Digital Innovations",
        period: "Mar 2018 - Dec 2020",
        description: "Built and maintained analytics dashboards used by \
                      thousands of customers daily. Reduced page load times by \
                      60% through profiling, caching, and bundle optimization.",
        stack: &["JavaScript", "Python", "Django"],
    },
    Role {
        title: "Junior Developer",
        company: "StartUp Ventures",
        period: "Jun 2016 - Feb 2018",
        description: "Shipped features across the stack for an early-stage \
                      product, from interface components to data models, while \
                      learning the craft of production software.",
        stack: &["Angular", "Firebase", "NoSQL"],
    },
];

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id="experience" class="bg-slate-50 dark:bg-slate-800/50 py-20">
            <div class="max-w-4xl mx-auto px-4">
                <h2 class="text-3xl font-bold mb-2">"Experience"</h2>
                <div class="w-16 h-1 bg-teal-600 rounded mb-8"></div>
                <ol class="relative border-l-2 border-teal-600/40 space-y-10 pl-8">
                    {ROLES
                        .iter()
                        .map(|role| {
                            view! {
                                <li class="relative">
                                    <span class="absolute -left-[2.4rem] top-1.5 w-3 h-3 rounded-full bg-teal-600"></span>
                                    <p class="font-mono text-xs text-teal-600 dark:text-teal-400 mb-1">
                                        {role.period}
                                    </p>
                                    <h3 class="text-xl font-semibold">
                                        {role.title} " · " {role.company}
                                    </h3>
                                    <p class="mt-2 text-sm text-slate-600 dark:text-slate-300">
                                        {role.description}
                                    </p>
                                    <div class="flex flex-wrap gap-2 mt-3">
                                        {role
                                            .stack
                                            .iter()
                                            .map(|tech| {
                                                view! {
                                                    <span class="px-2 py-1 rounded text-xs font-mono bg-teal-600/10 text-teal-700 dark:text-teal-400">
                                                        {*tech}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </div>
        </section>
    }
}
