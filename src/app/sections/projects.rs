//! Project showcases: full-bleed cards whose dark overlay is cut by a
//! flashlight that follows the cursor. Each card tracks its own cursor
//! position as a percentage and rests at dead center.

use leptos::{html, prelude::*};

use super::super::effects::{Reveal, SpotlightCard};
use crate::content::PROJECTS;

#[component]
pub fn Projects() -> impl IntoView {
    let cards = PROJECTS
        .iter()
        .enumerate()
        .map(|(index, project)| {
            let card_ref = NodeRef::<html::Div>::new();
            let spot = RwSignal::new((50.0_f64, 50.0_f64));

            let on_mousemove = move |ev: leptos::ev::MouseEvent| {
                let Some(el) = card_ref.get_untracked() else {
                    return;
                };
                let rect = el.get_bounding_client_rect();
                if rect.width() <= 0.0 || rect.height() <= 0.0 {
                    return;
                }
                let x = (ev.client_x() as f64 - rect.left()) / rect.width() * 100.0;
                let y = (ev.client_y() as f64 - rect.top()) / rect.height() * 100.0;
                spot.set((x, y));
            };

            let flashlight_style = move || {
                let (x, y) = spot();
                format!(
                    "background:radial-gradient(circle 200px at {x:.1}% {y:.1}%, transparent 0%, rgba(10, 10, 10, 0.7) 100%)"
                )
            };

            let tags = project
                .tags
                .iter()
                .map(|tag| {
                    view! {
                        <span class="px-3 py-1 bg-accent-blue/20 border border-accent-blue/30 rounded-full text-xs text-accent-cyan">
                            {*tag}
                        </span>
                    }
                })
                .collect_view();

            let achievements = project
                .achievements
                .iter()
                .map(|achievement| {
                    view! {
                        <div class="flex items-center gap-2 px-4 py-2 bg-surface/80 rounded-lg">
                            <span class="text-accent-magenta">"★"</span>
                            <span class="text-sm text-white/80">{*achievement}</span>
                        </div>
                    }
                })
                .collect_view();

            let demo_link = project.demo.map(|href| {
                view! {
                    <a
                        href=href
                        class="flex items-center gap-2 px-6 py-3 bg-accent-blue text-white rounded-full font-medium hover:bg-accent-cyan transition-all duration-300 hover:shadow-glow"
                    >
                        "Live Demo"
                    </a>
                }
            });
            let repo_link = project.repo.map(|href| {
                view! {
                    <a
                        href=href
                        class="flex items-center gap-2 px-6 py-3 border border-white/30 text-white rounded-full font-medium hover:border-accent-cyan hover:text-accent-cyan transition-all duration-300"
                    >
                        <i class="devicon-github-plain"></i>
                        "View Code"
                    </a>
                }
            });

            view! {
                <Reveal distance=100 delay_ms=(100 + index as u32 * 200)>
                    <SpotlightCard
                        class="overflow-hidden"
                        spotlight_color="rgba(255, 0, 85, 0.15)"
                    >
                        <div
                            node_ref=card_ref
                            on:mousemove=on_mousemove
                            class="relative h-[400px] sm:h-[500px] lg:h-[600px] overflow-hidden"
                        >
                            // Background image
                            <div
                                class="absolute inset-0 w-full h-full transition-transform duration-700 hover:scale-105 bg-cover bg-center"
                                style:background-image=format!("url({})", project.image)
                                style:filter="saturate(0.8)"
                            ></div>

                            // Flashlight overlay
                            <div
                                class="absolute inset-0 pointer-events-none transition-opacity duration-300"
                                style=flashlight_style
                            ></div>

                            // Gradient overlay
                            <div class="absolute inset-0 bg-gradient-to-t from-dark via-dark/50 to-transparent"></div>

                            // Content
                            <div class="absolute bottom-0 left-0 right-0 p-6 sm:p-8 lg:p-12">
                                <div class="max-w-3xl">
                                    <div class="flex flex-wrap gap-2 mb-4">{tags}</div>

                                    <h3 class="text-2xl sm:text-3xl lg:text-4xl font-display font-bold text-white mb-4">
                                        {project.title}
                                    </h3>

                                    <p class="text-neutral-gray text-base sm:text-lg mb-6 max-w-2xl">
                                        {project.description}
                                    </p>

                                    <div class="flex flex-wrap gap-3 mb-6">{achievements}</div>

                                    <div class="flex gap-4">{demo_link} {repo_link}</div>
                                </div>
                            </div>
                        </div>
                    </SpotlightCard>
                </Reveal>
            }
        })
        .collect_view();

    view! {
        <section id="projects" class="relative py-24 lg:py-32 bg-transparent overflow-hidden">
            // Background effect
            <div class="absolute top-1/2 left-0 w-96 h-96 bg-accent-magenta/5 rounded-full blur-3xl -translate-y-1/2"></div>

            <div class="relative z-10 max-w-7xl mx-auto px-6">
                <Reveal>
                    <div class="text-center mb-16">
                        <h2 class="text-4xl sm:text-5xl lg:text-6xl font-display font-bold text-white mb-4">
                            "PROJECTS"
                        </h2>
                        <p class="text-neutral-gray text-lg max-w-2xl mx-auto">
                            "Showcasing innovative solutions and award-winning VR experiences that push the boundaries of technology."
                        </p>
                    </div>
                </Reveal>

                <div class="space-y-16">{cards}</div>

                // More projects hint
                <Reveal distance=40 delay_ms=500>
                    <div class="text-center mt-16">
                        <p class="text-neutral-gray mb-4">"Want to see more of my work?"</p>
                        <a
                            href="https://github.com/parthborate"
                            target="_blank"
                            rel="noopener noreferrer"
                            class="inline-flex items-center gap-2 text-accent-blue hover:text-accent-cyan transition-colors"
                        >
                            <span>"View GitHub Profile"</span>
                            <span>"↗"</span>
                        </a>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
