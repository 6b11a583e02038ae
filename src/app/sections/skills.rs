//! Skills grid with a shared pointer tilt: the cursor position over the grid
//! rotates every card slightly; leaving the grid snaps back to neutral.

use leptos::{html, prelude::*};

use super::super::effects::{Reveal, RevealAxis, SpotlightCard};
use crate::content::{CERTIFICATIONS, CORE_PROFICIENCIES, SKILL_CATEGORIES};

const TILT_MAX_DEG: f64 = 5.0;

#[component]
pub fn Skills() -> impl IntoView {
    let grid_ref = NodeRef::<html::Div>::new();
    let tilt = RwSignal::new((0.0_f64, 0.0_f64));

    let on_mousemove = move |ev: leptos::ev::MouseEvent| {
        let Some(el) = grid_ref.get_untracked() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return;
        }
        let x = (ev.client_x() as f64 - rect.left()) / rect.width() - 0.5;
        let y = (ev.client_y() as f64 - rect.top()) / rect.height() - 0.5;
        tilt.set((x, y));
    };
    let on_mouseleave = move |_| tilt.set((0.0, 0.0));

    let card_style = move || {
        let (x, y) = tilt();
        format!(
            "transform-style:preserve-3d;transform:rotateY({:.2}deg) rotateX({:.2}deg)",
            x * TILT_MAX_DEG,
            -y * TILT_MAX_DEG,
        )
    };

    let categories = SKILL_CATEGORIES
        .iter()
        .enumerate()
        .map(|(index, category)| {
            let skills = category
                .skills
                .iter()
                .map(|skill| {
                    view! {
                        <span class="px-3 py-1.5 bg-surface border border-white/10 rounded-lg text-sm text-white/80 hover:border-accent-cyan hover:text-accent-cyan transition-all duration-300">
                            {*skill}
                        </span>
                    }
                })
                .collect_view();
            view! {
                <Reveal distance=60 delay_ms=(100 + index as u32 * 100)>
                    <SpotlightCard
                        class="p-6 h-full"
                        spotlight_color="rgba(45, 98, 255, 0.15)"
                    >
                        <div style=card_style>
                            <div class="flex items-center gap-4 mb-6">
                                <div
                                    class="w-12 h-12 rounded-xl flex items-center justify-center text-xl"
                                    style:background-color=format!("{}20", category.color)
                                    style:color=category.color
                                >
                                    <i class="extra-category"></i>
                                </div>
                                <h3 class="text-lg font-display font-semibold text-white">
                                    {category.title}
                                </h3>
                            </div>
                            <div class="flex flex-wrap gap-2">{skills}</div>
                        </div>
                    </SpotlightCard>
                </Reveal>
            }
        })
        .collect_view();

    let proficiency_bars = CORE_PROFICIENCIES
        .iter()
        .map(|skill| {
            view! {
                <div>
                    <div class="flex justify-between text-sm mb-1">
                        <span class="text-white/80">{skill.name}</span>
                        <span class="text-accent-cyan">{format!("{}%", skill.level)}</span>
                    </div>
                    <div class="h-2 bg-surface rounded-full overflow-hidden">
                        <div
                            class="h-full bg-gradient-to-r from-accent-blue to-accent-cyan rounded-full transition-all duration-1000"
                            style:width=format!("{}%", skill.level)
                        ></div>
                    </div>
                </div>
            }
        })
        .collect_view();

    let certifications = CERTIFICATIONS
        .iter()
        .map(|cert| {
            view! {
                <div class="flex items-start gap-3 p-3 rounded-lg bg-surface/50 hover:bg-surface transition-colors">
                    <div class="w-2 h-2 rounded-full bg-accent-blue mt-2 flex-shrink-0"></div>
                    <div>
                        <p class="text-white/90 text-sm font-medium">{cert.title}</p>
                        <p class="text-neutral-gray text-xs">{cert.org}</p>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="skills" class="relative py-24 lg:py-32 bg-dark overflow-hidden">
            // Background effects
            <div class="absolute top-0 right-0 w-96 h-96 bg-accent-blue/5 rounded-full blur-3xl"></div>
            <div class="absolute bottom-0 left-0 w-96 h-96 bg-accent-cyan/5 rounded-full blur-3xl"></div>

            <div class="relative z-10 max-w-7xl mx-auto px-6">
                <Reveal>
                    <div class="text-center mb-16">
                        <h2 class="text-4xl sm:text-5xl lg:text-6xl font-display font-bold text-white mb-4">
                            "SKILLS"
                        </h2>
                        <p class="text-neutral-gray text-lg max-w-2xl mx-auto">
                            "A comprehensive toolkit of technologies and expertise built over years of hands-on experience."
                        </p>
                    </div>
                </Reveal>

                // Skills grid
                <div
                    node_ref=grid_ref
                    class="grid sm:grid-cols-2 lg:grid-cols-3 gap-6"
                    style="perspective:1000px"
                    on:mousemove=on_mousemove
                    on:mouseleave=on_mouseleave
                >
                    {categories}
                </div>

                // Proficiency bars and certifications
                <div class="mt-16 grid md:grid-cols-2 gap-8">
                    <Reveal axis=RevealAxis::FromLeft distance=60 delay_ms=300>
                        <SpotlightCard class="p-6" spotlight_color="rgba(45, 98, 255, 0.15)">
                            <h3 class="text-xl font-display font-semibold text-white mb-6">
                                "Core Expertise"
                            </h3>
                            <div class="space-y-4">{proficiency_bars}</div>
                        </SpotlightCard>
                    </Reveal>

                    <Reveal axis=RevealAxis::FromRight distance=60 delay_ms=400>
                        <SpotlightCard class="p-6" spotlight_color="rgba(0, 229, 255, 0.15)">
                            <h3 class="text-xl font-display font-semibold text-white mb-6">
                                "Certifications & Awards"
                            </h3>
                            <div class="space-y-4">{certifications}</div>
                        </SpotlightCard>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
