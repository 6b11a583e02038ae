use leptos::prelude::*;

use super::super::effects::{Reveal, RevealAxis, SpotlightCard};
use crate::content::{CONTINUOUS_LEARNING, SCHOOLS};

#[component]
pub fn Education() -> impl IntoView {
    let cards = SCHOOLS
        .iter()
        .enumerate()
        .map(|(index, school)| {
            let axis = if index % 2 == 0 {
                RevealAxis::FromLeft
            } else {
                RevealAxis::FromRight
            };
            let highlights = school
                .highlights
                .iter()
                .map(|highlight| {
                    view! {
                        <li class="flex items-start gap-2 text-sm text-neutral-gray">
                            <span class="w-1.5 h-1.5 rounded-full bg-accent-blue mt-2 flex-shrink-0"></span>
                            <span>{*highlight}</span>
                        </li>
                    }
                })
                .collect_view();
            view! {
                <Reveal axis=axis distance=80 delay_ms=(100 + index as u32 * 200)>
                    <SpotlightCard
                        class="p-6 sm:p-8 h-full"
                        spotlight_color="rgba(45, 98, 255, 0.15)"
                    >
                        <div class="flex items-start gap-4 mb-6">
                            <div class="w-14 h-14 rounded-xl bg-accent-blue/20 flex items-center justify-center flex-shrink-0 text-accent-blue text-2xl">
                                <i class="extra-graduation"></i>
                            </div>
                            <div>
                                <h3 class="text-xl font-display font-semibold text-white">
                                    {school.institution}
                                </h3>
                                <p class="text-accent-cyan font-medium">{school.degree}</p>
                            </div>
                        </div>

                        <div class="flex flex-wrap gap-4 mb-6 text-sm text-neutral-gray">
                            <span>{school.period}</span>
                            <span>{school.location}</span>
                        </div>

                        <div class="space-y-3">
                            <h4 class="text-sm font-semibold text-white/80">"Highlights"</h4>
                            <ul class="space-y-2">{highlights}</ul>
                        </div>
                    </SpotlightCard>
                </Reveal>
            }
        })
        .collect_view();

    let courses = CONTINUOUS_LEARNING
        .iter()
        .map(|course| {
            view! {
                <div class="p-4 bg-surface/50 rounded-xl text-center hover:bg-surface transition-colors">
                    <p class="text-white/90 text-sm font-medium">{course.name}</p>
                    <p class="text-neutral-gray text-xs mt-1">{course.provider}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="education" class="relative py-24 lg:py-32 bg-dark overflow-hidden">
            // Background effect
            <div class="absolute top-0 right-1/4 w-96 h-96 bg-accent-blue/5 rounded-full blur-3xl"></div>

            <div class="relative z-10 max-w-7xl mx-auto px-6">
                <Reveal>
                    <div class="text-center mb-16">
                        <h2 class="text-4xl sm:text-5xl lg:text-6xl font-display font-bold text-white mb-4">
                            "EDUCATION"
                        </h2>
                        <p class="text-neutral-gray text-lg max-w-2xl mx-auto">
                            "Academic foundation combined with continuous learning and professional development."
                        </p>
                    </div>
                </Reveal>

                <div class="grid md:grid-cols-2 gap-8 max-w-5xl mx-auto">{cards}</div>

                // Continuous learning
                <Reveal distance=60 delay_ms=400>
                    <SpotlightCard
                        class="mt-16 p-6 sm:p-8 max-w-5xl mx-auto"
                        spotlight_color="rgba(0, 229, 255, 0.15)"
                    >
                        <h3 class="text-xl font-display font-semibold text-white mb-6 text-center">
                            "Continuous Learning"
                        </h3>
                        <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-4">{courses}</div>
                    </SpotlightCard>
                </Reveal>
            </div>
        </section>
    }
}
