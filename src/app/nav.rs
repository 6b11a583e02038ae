//! Fixed navbar: active-section highlight, mobile overlay menu, and the
//! scroll progress bar. All scroll-derived state comes from the tracker.

use leptos::prelude::*;

use super::tracker::ScrollTracker;
use crate::scroll::SectionId;

#[component]
pub fn Navigation() -> impl IntoView {
    let tracker = ScrollTracker::expect();
    let menu_open = tracker.menu_open();

    let nav_class = move || {
        if tracker.past_threshold() {
            "fixed top-0 left-0 right-0 z-50 transition-all duration-500 bg-dark/80 backdrop-blur-xl border-b border-white/10"
        } else {
            "fixed top-0 left-0 right-0 z-50 transition-all duration-500 bg-transparent"
        }
    };

    let link_class = move |id: SectionId| {
        if tracker.active() == id {
            "px-4 py-2 text-sm font-medium rounded-lg transition-all duration-300 text-accent-cyan bg-accent-blue/10"
        } else {
            "px-4 py-2 text-sm font-medium rounded-lg transition-all duration-300 text-white/70 hover:text-white hover:bg-white/5"
        }
    };

    let desktop_links = SectionId::ALL
        .into_iter()
        .map(|id| {
            view! {
                <a
                    href=format!("#{id}")
                    on:click=move |ev| {
                        ev.prevent_default();
                        tracker.scroll_to(id);
                    }
                    class=move || link_class(id)
                >
                    {id.label()}
                </a>
            }
        })
        .collect_view();

    let mobile_links = SectionId::ALL
        .into_iter()
        .enumerate()
        .map(|(index, id)| {
            view! {
                <a
                    href=format!("#{id}")
                    on:click=move |ev| {
                        ev.prevent_default();
                        tracker.scroll_to(id);
                    }
                    class=move || {
                        if tracker.active() == id {
                            "text-2xl font-display font-medium transition-all duration-300 text-accent-cyan"
                        } else {
                            "text-2xl font-display font-medium transition-all duration-300 text-white/70 hover:text-white"
                        }
                    }
                    style:transition-delay=move || {
                        if menu_open() { format!("{}ms", index * 50) } else { "0ms".to_string() }
                    }
                    style:transform=move || {
                        if menu_open() { "translateY(0)" } else { "translateY(20px)" }
                    }
                    style:opacity=move || if menu_open() { "1" } else { "0" }
                >
                    {id.label()}
                </a>
            }
        })
        .collect_view();

    view! {
        // Main navigation
        <nav class=nav_class>
            <div class="max-w-7xl mx-auto px-6">
                <div class="flex items-center justify-between h-16 lg:h-20">
                    // Logo
                    <a
                        href="#hero"
                        on:click=move |ev| {
                            ev.prevent_default();
                            tracker.scroll_to(SectionId::Hero);
                        }
                        class="text-xl font-display font-bold text-white hover:text-accent-cyan transition-colors"
                    >
                        <span class="text-accent-blue">"P"</span>
                        "B"
                    </a>

                    // Desktop navigation
                    <div class="hidden lg:flex items-center gap-1">{desktop_links}</div>

                    // CTA - desktop
                    <a
                        href="#contact"
                        on:click=move |ev| {
                            ev.prevent_default();
                            tracker.scroll_to(SectionId::Contact);
                        }
                        class="hidden lg:block px-5 py-2 bg-accent-blue text-white text-sm font-medium rounded-full hover:bg-accent-cyan transition-all duration-300 hover:shadow-glow"
                    >
                        "Hire Me"
                    </a>

                    // Mobile menu button
                    <button
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                        class="lg:hidden w-10 h-10 flex items-center justify-center text-white text-2xl"
                        aria-label="Toggle menu"
                    >
                        {move || if menu_open() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
        </nav>

        // Mobile menu overlay
        <div class=move || {
            if menu_open() {
                "fixed inset-0 z-40 lg:hidden transition-all duration-500 opacity-100 pointer-events-auto"
            } else {
                "fixed inset-0 z-40 lg:hidden transition-all duration-500 opacity-0 pointer-events-none"
            }
        }>
            // Backdrop
            <div
                class="absolute inset-0 bg-dark/95 backdrop-blur-xl"
                on:click=move |_| menu_open.set(false)
            ></div>

            // Menu content
            <div class="relative h-full flex flex-col items-center justify-center gap-4 p-6">
                {mobile_links}
                <a
                    href="#contact"
                    on:click=move |ev| {
                        ev.prevent_default();
                        tracker.scroll_to(SectionId::Contact);
                    }
                    class="mt-8 px-8 py-3 bg-accent-blue text-white font-medium rounded-full transition-all duration-300"
                    style:transition-delay=move || {
                        if menu_open() {
                            format!("{}ms", SectionId::ALL.len() * 50)
                        } else {
                            "0ms".to_string()
                        }
                    }
                    style:transform=move || {
                        if menu_open() { "translateY(0)" } else { "translateY(20px)" }
                    }
                    style:opacity=move || if menu_open() { "1" } else { "0" }
                >
                    "Hire Me"
                </a>
            </div>
        </div>

        // Scroll progress indicator
        <div
            class=move || {
                if tracker.past_threshold() {
                    "fixed top-0 left-0 h-0.5 bg-gradient-to-r from-accent-blue to-accent-cyan z-[60] transition-opacity duration-300 opacity-100"
                } else {
                    "fixed top-0 left-0 h-0.5 bg-gradient-to-r from-accent-blue to-accent-cyan z-[60] transition-opacity duration-300 opacity-0"
                }
            }
            style:width=move || format!("{:.2}%", tracker.progress())
        ></div>
    }
}
