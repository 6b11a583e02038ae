//! Full-viewport hero: headline, socials, and the profile image with a
//! cursor parallax. The parallax listener is window-level and scope-bound.

use leptos::prelude::*;
use leptos_use::{use_mouse, use_window_size, UseMouseReturn, UseWindowSizeReturn};

use crate::content::{OWNER_NAME, OWNER_TITLE, PROFILE_IMAGE, SOCIAL_LINKS};

const PARALLAX_MAX_DEG: f64 = 10.0;

#[component]
pub fn Hero() -> impl IntoView {
    let UseMouseReturn { x, y, .. } = use_mouse();
    let UseWindowSizeReturn { width, height } = use_window_size();

    // Cursor position relative to viewport center, mapped to a small rotation.
    let image_style = move || {
        let (w, h) = (width(), height());
        let (mx, my) = (x(), y());
        let (rotate_y, rotate_x) = if !w.is_finite() || !h.is_finite() || w <= 0.0 || h <= 0.0
            || (mx == 0.0 && my == 0.0)
        {
            (0.0, 0.0)
        } else {
            let x_percent = (mx / w - 0.5) * 2.0;
            let y_percent = (my / h - 0.5) * 2.0;
            (x_percent * PARALLAX_MAX_DEG, -y_percent * PARALLAX_MAX_DEG)
        };
        format!(
            "perspective:1000px;transform-style:preserve-3d;transform:rotateY({rotate_y:.2}deg) rotateX({rotate_x:.2}deg)"
        )
    };

    let socials = SOCIAL_LINKS
        .iter()
        .map(|social| {
            view! {
                <a
                    href=social.href
                    target="_blank"
                    rel="noopener noreferrer"
                    class="w-12 h-12 rounded-full glass flex items-center justify-center text-white text-xl hover:text-accent-cyan hover:border-accent-cyan transition-all duration-300 hover:scale-110"
                    aria-label=social.label
                >
                    <i class=social.icon></i>
                </a>
            }
        })
        .collect_view();

    view! {
        <section
            id="hero"
            class="relative min-h-screen flex items-center justify-center overflow-hidden"
        >
            // Gradient overlay
            <div class="absolute inset-0 backdrop-blur-sm bg-gradient-to-b from-transparent via-dark/50 to-dark z-[1]"></div>

            <div class="relative z-10 w-full max-w-7xl mx-auto px-6 py-20">
                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    // Left side - text content
                    <div class="text-center lg:text-left order-2 lg:order-1">
                        <h1 class="text-5xl sm:text-6xl md:text-7xl lg:text-8xl font-display font-bold mb-6 tracking-tight text-white uppercase">
                            {OWNER_NAME}
                        </h1>

                        <div class="mb-4">
                            <span class="shiny-text text-xl sm:text-2xl md:text-3xl font-display font-light">
                                {OWNER_TITLE}
                            </span>
                        </div>

                        <p class="text-neutral-gray text-base sm:text-lg max-w-xl mx-auto lg:mx-0 mb-8">
                            "Transforming complex infrastructure into seamless digital experiences. Specializing in DevOps, DevSecOps, Cloud Architecture, and Data Analytics."
                        </p>

                        // Social links
                        <div class="flex justify-center lg:justify-start gap-4">{socials}</div>
                    </div>

                    // Right side - profile image
                    <div class="order-1 lg:order-2 flex justify-center">
                        <div
                            class="relative w-64 h-80 sm:w-80 sm:h-96 lg:w-96 lg:h-[480px] transition-transform duration-500 ease-out"
                            style=image_style
                        >
                            // Glow behind the image
                            <div class="absolute inset-0 bg-accent-blue/30 rounded-2xl blur-3xl scale-110"></div>

                            <div class="relative w-full h-full rounded-2xl overflow-hidden border-2 border-white/10 hover:border-accent-blue/50 transition-all duration-500 floating">
                                <img
                                    src=PROFILE_IMAGE
                                    alt=OWNER_NAME
                                    class="w-full h-full object-cover"
                                />
                                <div class="absolute inset-0 bg-gradient-to-b from-transparent via-dark/30 to-transparent z-[1]"></div>
                            </div>

                            // Decorative corner frames
                            <div class="absolute -top-4 -right-4 w-24 h-24 border-t-2 border-r-2 border-accent-cyan/50 rounded-tr-2xl"></div>
                            <div class="absolute -bottom-4 -left-4 w-24 h-24 border-b-2 border-l-2 border-accent-blue/50 rounded-bl-2xl"></div>
                        </div>
                    </div>
                </div>
            </div>

            // Scroll indicator
            <div class="absolute bottom-8 left-1/2 -translate-x-1/2 z-10">
                <a
                    href="#about"
                    class="flex flex-col items-center text-neutral-gray hover:text-accent-cyan transition-colors duration-300"
                >
                    <span class="text-sm mb-2">"Scroll Down"</span>
                    <span class="animate-bounce text-xl">"▾"</span>
                </a>
            </div>
        </section>
    }
}
