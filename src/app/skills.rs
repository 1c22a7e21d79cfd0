use leptos::prelude::*;

struct SkillGroup {
    icon: &'static str,
    title: &'static str,
    items: &'static [&'static str],
}

const SKILL_GROUPS: [SkillGroup; 4] = [
    SkillGroup {
        icon: "💻",
        title: "Frontend",
        items: &["React.js / Next.js", "TypeScript", "Tailwind CSS", "GraphQL"],
    },
    SkillGroup {
        icon: "⚙️",
        title: "Backend",
        items: &["Node.js", "Express.js", "Python", "REST APIs"],
    },
    SkillGroup {
        icon: "🗄️",
        title: "Database",
        items: &["MongoDB", "PostgreSQL", "Firebase", "Redis"],
    },
    SkillGroup {
        icon: "🚀",
        title: "DevOps",
        items: &["Docker", "AWS", "CI/CD Pipelines", "Kubernetes"],
    },
];

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="bg-slate-50 dark:bg-slate-800/50 py-20">
            <div class="max-w-6xl mx-auto px-4">
                <h2 class="text-3xl font-bold mb-2">"Skills"</h2>
                <div class="w-16 h-1 bg-teal-600 rounded mb-8"></div>
                <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-6">
                    {SKILL_GROUPS
                        .iter()
                        .map(|group| {
                            view! {
                                <div class="p-6 rounded-lg bg-white dark:bg-slate-800 border border-slate-200 dark:border-slate-700 shadow-sm">
                                    <div class="text-3xl mb-3">{group.icon}</div>
                                    <h3 class="text-lg font-semibold mb-3">{group.title}</h3>
                                    <ul class="space-y-2 text-sm text-slate-600 dark:text-slate-300">
                                        {group
                                            .items
                                            .iter()
                                            .map(|item| {
                                                view! {
                                                    <li class="flex items-center gap-2">
                                                        <span class="w-1.5 h-1.5 rounded-full bg-teal-600"></span>
                                                        {*item}
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
