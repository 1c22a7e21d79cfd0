use leptos::prelude::*;

struct Project {
    title: &'static str,
    description: &'static str,
    image: &'static str,
    tags: &'static [&'static str],
    demo: &'static str,
    source: &'static str,
}

const PROJECTS: [Project; 3] = [
    Project {
        title: "E-commerce Dashboard",
        description: "A comprehensive admin dashboard for online stores with \
                      real-time analytics, inventory management, and order \
                      processing.",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?auto=format&fit=crop&w=800&q=80",
        tags: &["React", "Node.js", "MongoDB"],
        demo: "https://example.com/ecommerce-dashboard",
        source: "https://github.com/williamwritescode/ecommerce-dashboard",
    },
    Project {
        title: "Financial Analytics Platform",
        description: "Interactive data visualization platform for financial \
                      metrics with customizable charts and automated reports.",
        image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?auto=format&fit=crop&w=800&q=80",
        tags: &["TypeScript", "D3.js", "Python"],
        demo: "https://example.com/financial-analytics",
        source: "https://github.com/williamwritescode/financial-analytics",
    },
    Project {
        title: "Task Management App",
        description: "Collaborative task manager with real-time updates, team \
                      workspaces, and progress tracking.",
        image: "https://images.unsplash.com/photo-1551434678-e076c223a692?auto=format&fit=crop&w=800&q=80",
        tags: &["Next.js", "Firebase", "Tailwind CSS"],
        demo: "https://example.com/task-manager",
        source: "https://github.com/williamwritescode/task-manager",
    },
];

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="max-w-6xl mx-auto px-4 py-20">
            <h2 class="text-3xl font-bold mb-2">"Projects"</h2>
            <div class="w-16 h-1 bg-teal-600 rounded mb-8"></div>
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                {PROJECTS
                    .iter()
                    .map(|project| {
                        view! {
                            <article class="flex flex-col rounded-lg overflow-hidden bg-white dark:bg-slate-800 border border-slate-200 dark:border-slate-700 shadow-sm hover:shadow-lg transition-shadow">
                                <img
                                    src=project.image
                                    alt=project.title
                                    loading="lazy"
                                    class="h-48 w-full object-cover"
                                />
                                <div class="flex flex-col flex-1 p-6">
                                    <h3 class="text-xl font-semibold mb-2">{project.title}</h3>
                                    <p class="text-sm text-slate-600 dark:text-slate-300 flex-1">
                                        {project.description}
                                    </p>
                                    <div class="flex flex-wrap gap-2 mt-4">
                                        {project
                                            .tags
                                            .iter()
                                            .map(|tag| {
                                                view! {
                                                    <span class="px-2 py-1 rounded text-xs font-mono bg-teal-600/10 text-teal-700 dark:text-teal-400">
                                                        {*tag}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                    <div class="flex gap-4 mt-4 text-sm font-medium">
                                        <a
                                            href=project.demo
                                            target="_blank"
                                            rel="noreferrer"
                                            class="text-teal-600 dark:text-teal-400 hover:underline"
                                        >
                                            "Live Demo"
                                        </a>
                                        <a
                                            href=project.source
                                            target="_blank"
                                            rel="noreferrer"
                                            class="text-slate-500 dark:text-slate-400 hover:underline"
                                        >
                                            "Source"
                                        </a>
                                    </div>
                                </div>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
