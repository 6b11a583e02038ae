mod effects;
mod home;
mod nav;
mod sections;
mod tracker;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use home::HomePage;
use nav::Navigation;
use tracker::ScrollTracker;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body class="bg-dark text-white overflow-x-hidden">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    // Single owner of all scroll-derived state; children read it via context.
    ScrollTracker::provide();

    view! {
        // sets the document title
        <Title formatter=|title| format!("Parth Borate - {title}") />

        <Router>
            // fixed animated gradient backdrop behind every section
            <div class="fixed inset-0 z-0 bg-ether"></div>
            <Navigation />
            <main class="relative z-10 min-h-screen">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="relative z-10 py-8 bg-dark/80 backdrop-blur-sm border-t border-white/10">
            <div class="max-w-7xl mx-auto px-6 text-center">
                <p class="text-neutral-gray text-sm">
                    "© 2024 Parth Borate. All rights reserved."
                </p>
                <p class="text-neutral-gray/60 text-xs mt-2">
                    "Built with Rust, Leptos & TailwindCSS"
                </p>
                <p class="text-neutral-gray/40 text-xs mt-1">
                    {format!("Build {}", env!("BUILD_TIME"))}
                </p>
            </div>
        </footer>
    }
}
