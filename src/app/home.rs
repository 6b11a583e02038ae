use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_location;

use super::sections::{About, Contact, Education, Experience, Hero, Projects, Skills};
use super::tracker::ScrollTracker;
use crate::scroll::SectionId;

#[component]
pub fn HomePage() -> impl IntoView {
    let tracker = ScrollTracker::expect();
    let location = use_location();

    // Honor #anchor deep links once on load; unknown anchors are ignored.
    Effect::new(move |_| {
        let hash = location.hash.get_untracked();
        let anchor = hash.trim_start_matches('#');
        if anchor.is_empty() {
            return;
        }
        match anchor.parse::<SectionId>() {
            Ok(id) => tracker.scroll_to(id),
            Err(err) => log::debug!("deep link skipped: {err}"),
        }
    });

    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <Experience />
        <Skills />
        <Projects />
        <Education />
        <Contact />
    }
}
