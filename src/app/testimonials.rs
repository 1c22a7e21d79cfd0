use leptos::prelude::*;

use super::icons::StarIcon;

struct Testimonial {
    quote: &'static str,
    name: &'static str,
    role: &'static str,
    avatar: &'static str,
    rating: u8,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "William is one of the most talented engineers I've worked with. \
                He delivered our platform redesign ahead of schedule and the \
                quality exceeded every expectation.",
        name: "Sarah Johnson",
        role: "CTO at TechSolutions",
        avatar: "https://randomuser.me/api/portraits/women/43.jpg",
        rating: 5,
    },
    Testimonial {
        quote: "Working with William was a pleasure. He communicates clearly, \
                asks the right questions, and writes code the rest of the team \
                loves to maintain.",
        name: "Michael Chen",
        role: "Product Manager at Digital Innovations",
        avatar: "https://randomuser.me/api/portraits/men/32.jpg",
        rating: 5,
    },
    Testimonial {
        quote: "William took our vague idea and turned it into a product our \
                customers rave about. His full-stack range meant one person \
                could own the whole build.",
        name: "Emily Rodriguez",
        role: "CEO at StartUp Ventures",
        avatar: "https://randomuser.me/api/portraits/women/65.jpg",
        rating: 5,
    },
];

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section id="testimonials" class="max-w-6xl mx-auto px-4 py-20">
            <h2 class="text-3xl font-bold mb-2">"Testimonials"</h2>
            <div class="w-16 h-1 bg-teal-600 rounded mb-8"></div>
            <div class="grid md:grid-cols-3 gap-8">
                {TESTIMONIALS
                    .iter()
                    .map(|t| {
                        view! {
                            <figure class="flex flex-col p-6 rounded-lg bg-white dark:bg-slate-800 border border-slate-200 dark:border-slate-700 shadow-sm">
                                <div class="flex gap-1 text-yellow-400 mb-4">
                                    {(0..t.rating).map(|_| view! { <StarIcon /> }).collect_view()}
                                </div>
                                <blockquote class="flex-1 text-sm text-slate-600 dark:text-slate-300 italic">
                                    "\u{201c}" {t.quote} "\u{201d}"
                                </blockquote>
                                <figcaption class="flex items-center gap-3 mt-6">
                                    <img
                                        src=t.avatar
                                        alt=t.name
                                        loading="lazy"
                                        class="w-10 h-10 rounded-full object-cover"
                                    />
                                    <div>
                                        <p class="text-sm font-semibold">{t.name}</p>
                                        <p class="text-xs text-slate-500 dark:text-slate-400">{t.role}</p>
                                    </div>
                                </figcaption>
                            </figure>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
