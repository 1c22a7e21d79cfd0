mod about;
mod code_window;
mod contact_form;
mod experience;
mod footer;
mod hero;
mod icons;
mod navbar;
mod projects;
mod reveal;
mod skills;
mod testimonials;
mod theme;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::About;
use code_window::CodeWindow;
use contact_form::ContactSection;
use experience::Experience;
use footer::Footer;
use hero::Hero;
use navbar::Navbar;
use projects::Projects;
use reveal::Reveal;
use skills::Skills;
use testimonials::Testimonials;
use theme::provide_theme;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-white text-slate-800 dark:bg-slate-900 dark:text-slate-100 transition-colors duration-300">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_theme();

    view! {
        // sets the document title
        <Title formatter=|title| format!("William Writes Code - {title}") />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// The single page: every section stacked under the fixed navbar, each one
/// below the hero fading in as it scrolls into view.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Full-Stack Software Engineer" />
        <Navbar />
        <main class="pt-16">
            <Hero />
            <Reveal>
                <CodeWindow />
            </Reveal>
            <Reveal delay_ms=100>
                <About />
            </Reveal>
            <Reveal delay_ms=150>
                <Skills />
            </Reveal>
            <Reveal delay_ms=200>
                <Projects />
            </Reveal>
            <Reveal delay_ms=250>
                <Experience />
            </Reveal>
            <Reveal delay_ms=300>
                <Testimonials />
            </Reveal>
            <Reveal delay_ms=350>
                <ContactSection />
            </Reveal>
        </main>
        <Footer />
    }
}
