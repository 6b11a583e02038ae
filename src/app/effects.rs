//! Decorative building blocks: reveal-on-scroll wrapper and spotlight cards.

use leptos::{html, prelude::*};
use leptos_use::{use_window_scroll, use_window_size, UseWindowSizeReturn};

use crate::scroll::{reveal_visible, ScrollDirection};

/// Which direction a hidden block is offset toward before it reveals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealAxis {
    /// Offset downward, slides up into place.
    #[default]
    Up,
    /// Offset to the left, slides right into place.
    FromLeft,
    /// Offset to the right, slides left into place.
    FromRight,
}

/// Wraps its children in a block that fades/slides in when scrolled into
/// view and back out when scrolled away again. The toggle is deliberate:
/// scrubbing up and down replays the transition every time.
#[component]
pub fn Reveal(
    #[prop(optional)] axis: RevealAxis,
    #[prop(default = 50)] distance: u32,
    #[prop(default = 0)] delay_ms: u32,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let (visible, set_visible) = signal(false);

    let (_, scroll_y) = use_window_scroll();
    let UseWindowSizeReturn { height, .. } = use_window_size();

    // The previous offset decides scroll direction, which picks the
    // enter/exit threshold. Listeners are scope-bound and released on
    // unmount along with this effect.
    Effect::new(move |prev: Option<f64>| {
        let offset = scroll_y.get();
        let vh = height.get();
        if !vh.is_finite() {
            return offset;
        }
        let direction = ScrollDirection::from_change(prev.unwrap_or(offset), offset);
        if let Some(el) = node_ref.get() {
            let top = el.get_bounding_client_rect().top();
            set_visible(reveal_visible(top, vh, direction));
        }
        offset
    });

    let hidden_transform = move || match axis {
        RevealAxis::Up => format!("opacity:0;transform:translate3d(0,{distance}px,0)"),
        RevealAxis::FromLeft => format!("opacity:0;transform:translate3d(-{distance}px,0,0)"),
        RevealAxis::FromRight => format!("opacity:0;transform:translate3d({distance}px,0,0)"),
    };
    let style = move || {
        let placement = if visible() {
            "opacity:1;transform:translate3d(0,0,0)".to_string()
        } else {
            hidden_transform()
        };
        format!("{placement};transition-delay:{delay_ms}ms")
    };

    view! {
        <div node_ref=node_ref class=format!("reveal {class}") style=style>
            {children()}
        </div>
    }
}

/// Card with a cursor-tracking radial highlight. The cursor position is
/// written to CSS custom properties on the element itself; the gradient and
/// its hover opacity live in the stylesheet. Nothing persists between
/// interactions.
#[component]
pub fn SpotlightCard(
    #[prop(optional, into)] class: String,
    #[prop(default = "rgba(255, 255, 255, 0.25)")] spotlight_color: &'static str,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();

    let on_mousemove = move |ev: leptos::ev::MouseEvent| {
        let Some(el) = node_ref.get_untracked() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        let x = ev.client_x() as f64 - rect.left();
        let y = ev.client_y() as f64 - rect.top();
        let style = web_sys::HtmlElement::style(&el);
        let _ = style.set_property("--mouse-x", &format!("{x}px"));
        let _ = style.set_property("--mouse-y", &format!("{y}px"));
        let _ = style.set_property("--spotlight-color", spotlight_color);
    };

    view! {
        <div
            node_ref=node_ref
            on:mousemove=on_mousemove
            class=format!("card-spotlight {class}")
        >
            {children()}
        </div>
    }
}
