//! Scroll-position policy for the single-page layout.
//!
//! Everything here is plain math over scroll offsets and viewport geometry so
//! it can be exercised without a DOM. The components in `app` read the window
//! and feed these functions; see `app::tracker` for the wiring.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Scroll offset past which the navbar switches to its condensed style.
pub const NAV_SCROLL_THRESHOLD: f64 = 100.0;

/// Fraction of viewport height a block's top edge must clear (scrolling down)
/// before it is revealed.
pub const REVEAL_ENTER_FRACTION: f64 = 0.8;

/// Fraction of viewport height below which a block's top edge must return
/// (scrolling up) before it is hidden again.
pub const REVEAL_EXIT_FRACTION: f64 = 0.5;

/// Anchor ids of the page sections, one per content block.
///
/// Variant order is document order; the navbar and the active-section scan
/// both rely on that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionId {
    Hero,
    About,
    Experience,
    Skills,
    Projects,
    Education,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 7] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Experience,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Education,
        SectionId::Contact,
    ];

    /// The DOM anchor id this section renders under.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Education => "education",
            SectionId::Contact => "contact",
        }
    }

    /// Label shown in the navbar.
    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::About => "About",
            SectionId::Experience => "Experience",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Education => "Education",
            SectionId::Contact => "Contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section anchor: {0:?}")]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Which way the page moved since the last scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Down,
    Up,
}

impl ScrollDirection {
    /// An unchanged offset (including the very first event) counts as down.
    pub fn from_change(prev: f64, current: f64) -> Self {
        if current < prev {
            ScrollDirection::Up
        } else {
            ScrollDirection::Down
        }
    }
}

/// Derived per-event scroll state; never persisted, recomputed on every
/// scroll and resize event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    pub offset: f64,
    pub viewport_h: f64,
    pub past_threshold: bool,
    pub active: SectionId,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            offset: 0.0,
            viewport_h: 0.0,
            past_threshold: false,
            active: SectionId::Hero,
        }
    }
}

impl ScrollState {
    /// Recompute from the current offset, viewport height, and the document
    /// top offsets of the rendered sections (`None` for anchors missing from
    /// the DOM, which are skipped rather than failed).
    pub fn compute(offset: f64, viewport_h: f64, tops: &[(SectionId, Option<f64>)]) -> Self {
        Self {
            offset,
            viewport_h,
            past_threshold: offset > NAV_SCROLL_THRESHOLD,
            active: active_section(offset, viewport_h, tops),
        }
    }
}

/// The active section is the last one (in document order) whose top offset is
/// at or above the probe line a third of the viewport below the scroll
/// offset. Falls back to the first section when nothing qualifies.
pub fn active_section(
    offset: f64,
    viewport_h: f64,
    tops: &[(SectionId, Option<f64>)],
) -> SectionId {
    let probe = offset + viewport_h / 3.0;
    tops.iter()
        .rev()
        .find_map(|(id, top)| match top {
            Some(top) if *top <= probe => Some(*id),
            _ => None,
        })
        .unwrap_or_else(|| tops.first().map(|(id, _)| *id).unwrap_or(SectionId::Hero))
}

/// Toggle policy for reveal-on-scroll blocks: reveal once the top edge
/// clears the 80% line scrolling down, hide again once it falls back past
/// the 50% line scrolling up. Deliberately reversible; a block replays its
/// entrance every time it is scrolled back into view.
pub fn reveal_visible(top: f64, viewport_h: f64, direction: ScrollDirection) -> bool {
    let fraction = match direction {
        ScrollDirection::Down => REVEAL_ENTER_FRACTION,
        ScrollDirection::Up => REVEAL_EXIT_FRACTION,
    };
    top <= viewport_h * fraction
}

/// Page scroll progress in percent, for the navbar progress bar.
pub fn scroll_progress(offset: f64, viewport_h: f64, document_h: f64) -> f64 {
    let track = document_h - viewport_h;
    if track <= 0.0 {
        0.0
    } else {
        (offset / track * 100.0).clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tops() -> Vec<(SectionId, Option<f64>)> {
        vec![
            (SectionId::Hero, Some(0.0)),
            (SectionId::About, Some(800.0)),
            (SectionId::Experience, Some(1600.0)),
        ]
    }

    #[test]
    fn test_section_ids_unique_and_ordered() {
        for pair in SectionId::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert_ne!(pair[0].as_str(), pair[1].as_str());
        }
    }

    #[test]
    fn test_section_id_round_trips_through_str() {
        for id in SectionId::ALL {
            assert_eq!(id.as_str().parse::<SectionId>(), Ok(id));
        }
        assert_eq!(
            "blog".parse::<SectionId>(),
            Err(UnknownSection("blog".to_string()))
        );
    }

    #[test]
    fn test_active_section_at_known_offsets() {
        // viewport 900 puts the probe line at offset + 300
        let tops = tops();
        assert_eq!(active_section(0.0, 900.0, &tops), SectionId::Hero);
        assert_eq!(active_section(700.0, 900.0, &tops), SectionId::About);
        assert_eq!(active_section(1500.0, 900.0, &tops), SectionId::Experience);
    }

    #[test]
    fn test_active_section_is_monotonic_scrolling_down() {
        let tops = tops();
        let mut last = SectionId::Hero;
        let mut offset = 0.0;
        while offset <= 2400.0 {
            let active = active_section(offset, 900.0, &tops);
            assert!(active >= last, "active moved backward at offset {offset}");
            last = active;
            offset += 50.0;
        }
    }

    #[test]
    fn test_active_section_skips_missing_anchors() {
        let tops = vec![
            (SectionId::Hero, Some(0.0)),
            (SectionId::About, None),
            (SectionId::Experience, Some(1600.0)),
        ];
        // about would win at this offset if it resolved; the scan skips it
        assert_eq!(active_section(700.0, 900.0, &tops), SectionId::Hero);
    }

    #[test]
    fn test_active_section_defaults_to_first() {
        let tops = vec![
            (SectionId::Hero, Some(500.0)),
            (SectionId::About, Some(1300.0)),
        ];
        assert_eq!(active_section(0.0, 900.0, &tops), SectionId::Hero);
        assert_eq!(active_section(0.0, 900.0, &[]), SectionId::Hero);
    }

    #[test]
    fn test_ties_go_to_the_later_section() {
        let tops = vec![
            (SectionId::Hero, Some(300.0)),
            (SectionId::About, Some(300.0)),
        ];
        assert_eq!(active_section(0.0, 900.0, &tops), SectionId::About);
    }

    #[test]
    fn test_nav_threshold_boundary() {
        assert!(!ScrollState::compute(99.0, 900.0, &tops()).past_threshold);
        assert!(ScrollState::compute(101.0, 900.0, &tops()).past_threshold);
    }

    #[test]
    fn test_reveal_toggles_and_replays() {
        let vh = 1000.0;
        // hidden below the fold, revealed once the top clears the 80% line
        assert!(!reveal_visible(900.0, vh, ScrollDirection::Down));
        assert!(reveal_visible(800.0, vh, ScrollDirection::Down));
        assert!(reveal_visible(200.0, vh, ScrollDirection::Down));
        // scrolling back up: stays revealed until the top falls past 50%
        assert!(reveal_visible(400.0, vh, ScrollDirection::Up));
        assert!(!reveal_visible(600.0, vh, ScrollDirection::Up));
        // scrolling down again replays the reveal from the same position
        assert!(reveal_visible(600.0, vh, ScrollDirection::Down));
    }

    #[test]
    fn test_direction_from_offset_change() {
        assert_eq!(
            ScrollDirection::from_change(100.0, 200.0),
            ScrollDirection::Down
        );
        assert_eq!(
            ScrollDirection::from_change(200.0, 100.0),
            ScrollDirection::Up
        );
        // first event has no previous offset; treated as down
        assert_eq!(
            ScrollDirection::from_change(0.0, 0.0),
            ScrollDirection::Down
        );
    }

    #[test]
    fn test_scroll_progress_clamps() {
        assert_eq!(scroll_progress(0.0, 900.0, 2700.0), 0.0);
        assert_eq!(scroll_progress(900.0, 900.0, 2700.0), 50.0);
        assert_eq!(scroll_progress(1800.0, 900.0, 2700.0), 100.0);
        assert_eq!(scroll_progress(2400.0, 900.0, 2700.0), 100.0);
        // degenerate document shorter than the viewport
        assert_eq!(scroll_progress(0.0, 900.0, 600.0), 0.0);
    }
}
