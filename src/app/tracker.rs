//! Scroll/viewport tracker: owns the derived scroll state for the whole page.
//!
//! Window listeners come from `leptos-use`, so they are registered when the
//! app mounts and torn down with the owning scope; no listener outlives the
//! page. All policy lives in `crate::scroll` — this module only reads the DOM
//! and writes signals.

use leptos::prelude::*;
use leptos_use::{use_window_scroll, use_window_size, UseWindowSizeReturn};
use wasm_bindgen::JsCast;

use crate::scroll::{scroll_progress, ScrollState, SectionId};

#[derive(Clone, Copy)]
pub struct ScrollTracker {
    state: ReadSignal<ScrollState>,
    progress: ReadSignal<f64>,
    menu_open: RwSignal<bool>,
}

impl ScrollTracker {
    /// Set up the window subscriptions and put the tracker into context.
    /// Call once, from the component that owns the page.
    pub fn provide() -> Self {
        let (state, set_state) = signal(ScrollState::default());
        let (progress, set_progress) = signal(0.0_f64);
        let menu_open = RwSignal::new(false);

        let (_, scroll_y) = use_window_scroll();
        let UseWindowSizeReturn { height, .. } = use_window_size();

        Effect::new(move |_| {
            let offset = scroll_y.get();
            let vh = height.get();
            // window size reports infinite until the first client measurement
            if !vh.is_finite() {
                return;
            }
            set_state(ScrollState::compute(offset, vh, &section_offsets()));
            set_progress(scroll_progress(offset, vh, document_height()));
        });

        let tracker = ScrollTracker {
            state,
            progress,
            menu_open,
        };
        provide_context(tracker);
        tracker
    }

    pub fn expect() -> Self {
        expect_context::<ScrollTracker>()
    }

    /// Section currently highlighted in the navbar.
    pub fn active(&self) -> SectionId {
        self.state.get().active
    }

    /// True once the page has scrolled past the navbar threshold.
    pub fn past_threshold(&self) -> bool {
        self.state.get().past_threshold
    }

    /// Page scroll progress in percent.
    pub fn progress(&self) -> f64 {
        self.progress.get()
    }

    pub fn menu_open(&self) -> RwSignal<bool> {
        self.menu_open
    }

    /// Smooth-scroll a section's anchor into view and close the mobile menu.
    /// A missing anchor element is a no-op.
    pub fn scroll_to(&self, id: SectionId) {
        if let Some(el) = document().get_element_by_id(id.as_str()) {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
        self.menu_open.set(false);
    }
}

/// Document top offsets of the rendered sections. Anchors missing from the
/// DOM yield `None` and are skipped by the active-section scan.
fn section_offsets() -> Vec<(SectionId, Option<f64>)> {
    let doc = document();
    SectionId::ALL
        .into_iter()
        .map(|id| {
            let top = doc
                .get_element_by_id(id.as_str())
                .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
                .map(|el| el.offset_top() as f64);
            (id, top)
        })
        .collect()
}

fn document_height() -> f64 {
    document()
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0)
}
