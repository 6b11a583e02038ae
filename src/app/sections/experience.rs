//! Experience timeline. Each card flips between a summary front and an
//! achievements back; at most one card is flipped at a time.

use leptos::prelude::*;

use super::super::effects::{Reveal, RevealAxis, SpotlightCard};
use crate::content::JOBS;

#[component]
pub fn Experience() -> impl IntoView {
    let flipped = RwSignal::new(None::<usize>);

    let cards = JOBS
        .iter()
        .enumerate()
        .map(|(index, job)| {
            let axis = if index % 2 == 0 {
                RevealAxis::FromLeft
            } else {
                RevealAxis::FromRight
            };
            let achievements = job
                .achievements
                .iter()
                .map(|achievement| {
                    view! {
                        <li class="flex items-start gap-2 text-sm text-neutral-gray">
                            <span class="w-1.5 h-1.5 rounded-full bg-accent-blue mt-2 flex-shrink-0"></span>
                            <span>{*achievement}</span>
                        </li>
                    }
                })
                .collect_view();

            let front_class = move || {
                if flipped() == Some(index) {
                    "transition-all duration-500 opacity-0 rotate-y-180 absolute inset-0 pointer-events-none"
                } else {
                    "transition-all duration-500 opacity-100 rotate-y-0"
                }
            };
            let back_class = move || {
                if flipped() == Some(index) {
                    "transition-all duration-500 opacity-100 rotate-y-0"
                } else {
                    "transition-all duration-500 opacity-0 rotate-y-180 absolute inset-0 pointer-events-none"
                }
            };

            view! {
                <div class=format!(
                    "relative lg:grid lg:grid-cols-2 lg:gap-12{}",
                    if index > 0 { " lg:mt-12" } else { "" },
                )>
                    // Timeline node - desktop
                    <div class="hidden lg:flex absolute left-1/2 top-8 -translate-x-1/2 z-10">
                        <div class="w-4 h-4 rounded-full bg-accent-blue shadow-glow"></div>
                    </div>

                    <div class=if index % 2 == 0 {
                        "lg:pr-16"
                    } else {
                        "lg:col-start-2 lg:pl-16"
                    }>
                        <Reveal axis=axis distance=80 delay_ms=(100 + index as u32 * 200)>
                            <div
                                class="cursor-pointer"
                                on:click=move |_| {
                                    flipped
                                        .update(|f| {
                                            *f = if *f == Some(index) { None } else { Some(index) };
                                        })
                                }
                            >
                                <SpotlightCard
                                    class="p-6 sm:p-8 relative"
                                    spotlight_color="rgba(0, 229, 255, 0.15)"
                                >
                                    // Flip indicator
                                    <div class="absolute top-4 right-4 text-neutral-gray/50 hover:text-accent-cyan transition-colors text-sm">
                                        "⟲"
                                    </div>

                                    // Front of card
                                    <div class=front_class>
                                        <div class="flex items-start gap-4 mb-4">
                                            <div class="w-12 h-12 rounded-xl bg-accent-blue/20 flex items-center justify-center flex-shrink-0 text-accent-blue text-xl">
                                                <i class="extra-briefcase"></i>
                                            </div>
                                            <div>
                                                <h3 class="text-xl font-display font-semibold text-white">
                                                    {job.role}
                                                </h3>
                                                <p class="text-accent-cyan font-medium">{job.company}</p>
                                            </div>
                                        </div>

                                        <div class="flex flex-wrap gap-4 mb-4 text-sm text-neutral-gray">
                                            <span>{job.period}</span>
                                            <span>{job.location}</span>
                                        </div>

                                        <p class="text-neutral-gray text-sm">
                                            "Click to view key achievements and contributions..."
                                        </p>

                                        <div class="flex items-center gap-1 text-accent-blue text-sm mt-4">
                                            <span>"View Achievements"</span>
                                            <span>"›"</span>
                                        </div>
                                    </div>

                                    // Back of card - achievements
                                    <div class=back_class>
                                        <h4 class="text-lg font-display font-semibold text-white mb-4">
                                            "Key Achievements"
                                        </h4>
                                        <ul class="space-y-3">{achievements}</ul>
                                    </div>
                                </SpotlightCard>
                            </div>
                        </Reveal>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="experience" class="relative py-24 lg:py-32 bg-dark overflow-hidden">
            // Background glow
            <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-[800px] h-[800px] bg-accent-blue/5 rounded-full blur-3xl"></div>

            <div class="relative z-10 max-w-7xl mx-auto px-6">
                <Reveal>
                    <div class="text-center mb-16">
                        <h2 class="text-4xl sm:text-5xl lg:text-6xl font-display font-bold text-white mb-4">
                            "EXPERIENCE"
                        </h2>
                        <p class="text-neutral-gray text-lg max-w-2xl mx-auto">
                            "A journey through my professional career, showcasing key roles and impactful achievements."
                        </p>
                    </div>
                </Reveal>

                <div class="relative">
                    // Timeline line - desktop
                    <div class="hidden lg:block absolute left-1/2 top-0 bottom-0 w-px -translate-x-1/2">
                        <div class="w-full h-full bg-gradient-to-b from-accent-blue via-accent-cyan to-accent-blue opacity-50"></div>
                    </div>

                    <div class="space-y-12 lg:space-y-0">{cards}</div>
                </div>
            </div>
        </section>
    }
}
