use leptos::prelude::*;

use super::super::effects::{Reveal, RevealAxis, SpotlightCard};
use crate::content::{ABOUT_TAGS, STATS};

#[component]
pub fn About() -> impl IntoView {
    let tags = ABOUT_TAGS
        .iter()
        .map(|tag| {
            view! {
                <span class="px-4 py-2 bg-surface border border-white/10 rounded-full text-sm text-white/80 hover:border-accent-blue hover:text-accent-cyan transition-all duration-300">
                    {*tag}
                </span>
            }
        })
        .collect_view();

    let stats = STATS
        .iter()
        .enumerate()
        .map(|(index, stat)| {
            view! {
                <Reveal distance=60 delay_ms=(200 + index as u32 * 100)>
                    <SpotlightCard
                        class="p-6 sm:p-8 text-center h-full"
                        spotlight_color="rgba(45, 98, 255, 0.15)"
                    >
                        <div
                            class="text-3xl sm:text-4xl font-display font-bold mb-2"
                            style:color=stat.color
                        >
                            {stat.value}
                        </div>
                        <div class="text-sm text-neutral-gray">{stat.label}</div>
                    </SpotlightCard>
                </Reveal>
            }
        })
        .collect_view();

    view! {
        <section id="about" class="relative py-24 lg:py-32 bg-transparent backdrop-blur-sm">
            // Background grid
            <div class="absolute inset-0 opacity-5 bg-grid-lines"></div>

            <div class="relative z-10 max-w-7xl mx-auto px-6">
                <Reveal>
                    <h2 class="text-4xl sm:text-5xl lg:text-6xl font-display font-bold text-white mb-12 text-center">
                        "ABOUT ME"
                    </h2>
                </Reveal>

                <div class="grid lg:grid-cols-2 gap-12 lg:gap-20 items-center">
                    // Left side - content
                    <Reveal axis=RevealAxis::FromLeft distance=80 delay_ms=100>
                        <div class="space-y-6">
                            <p class="text-lg sm:text-xl text-white/90 leading-relaxed">
                                "A highly skilled "
                                <span class="text-accent-blue font-semibold">
                                    "Technical Consultant"
                                </span>
                                " with 4 years of experience in DevOps and cloud technologies, holding a Bachelor's in Computer Science and currently completed my Master's in Management Information Systems (MIS) from University of Illinois Chicago (UIC)."
                            </p>

                            <p class="text-base text-neutral-gray leading-relaxed">
                                "Proven expertise in cloud migration and DevSecOps implementation, with a strong track record of enhancing productivity and reducing costs. Proficient in multiple programming languages and cloud platforms, recognized for excellence in project execution and client relationship management."
                            </p>

                            <p class="text-base text-neutral-gray leading-relaxed">
                                "Seeking Full-Time job to leverage my extensive experience in a dynamic and innovative environment. Passionate about transforming complex infrastructure into seamless digital experiences."
                            </p>

                            // Key highlights
                            <div class="flex flex-wrap gap-3 pt-4">{tags}</div>
                        </div>
                    </Reveal>

                    // Right side - stats
                    <div class="grid grid-cols-2 gap-4 sm:gap-6">{stats}</div>
                </div>
            </div>
        </section>
    }
}
