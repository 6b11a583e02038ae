//! Contact section: channel links plus the simulated message form.
//!
//! The form drives `crate::form::ContactForm` with two cancellable timeouts;
//! both are owned by this component's scope, so tearing the page down cancels
//! any pending transition.

use leptos::prelude::*;
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::super::effects::Reveal;
use crate::content::CONTACT_CHANNELS;
use crate::form::{ContactForm, FormPhase, LOADING_HOLD_MS, SUCCESS_HOLD_MS};

#[component]
pub fn Contact() -> impl IntoView {
    let channels = CONTACT_CHANNELS
        .iter()
        .map(|channel| {
            view! {
                <a
                    href=channel.href
                    class="flex items-center gap-4 p-4 glass rounded-xl hover:border-accent-blue/50 transition-all duration-300 group"
                >
                    <div class="w-12 h-12 rounded-lg bg-accent-blue/20 flex items-center justify-center transition-transform duration-300 group-hover:scale-110 text-accent-blue">
                        <i class=channel.icon></i>
                    </div>
                    <div>
                        <p class="text-neutral-gray text-sm">{channel.label}</p>
                        <p class="text-white font-medium">{channel.value}</p>
                    </div>
                </a>
            }
        })
        .collect_view();

    view! {
        <section id="contact" class="relative py-24 lg:py-32 bg-transparent overflow-hidden">
            <div class="relative z-10 max-w-2xl mx-auto px-6">
                <Reveal>
                    <div class="text-center mb-16">
                        <h2 class="text-4xl sm:text-5xl lg:text-6xl font-display font-bold text-white mb-4">
                            "INITIATE CONTACT"
                        </h2>
                        <p class="text-neutral-gray text-lg max-w-2xl mx-auto">
                            "Ready to collaborate on your next project? Let's connect and build something amazing together."
                        </p>
                    </div>
                </Reveal>

                <Reveal distance=80 delay_ms=100>
                    <h3 class="text-2xl font-display font-semibold text-white mb-8 text-center">
                        "Let's Talk"
                    </h3>

                    <div class="space-y-4">{channels}</div>

                    <div class="mt-8 p-4 glass rounded-xl border-l-4 border-accent-cyan">
                        <p class="text-white font-medium mb-1">"Currently Available"</p>
                        <p class="text-neutral-gray text-sm">
                            "Open to Summer 2025 internship opportunities in Cloud, DevOps, and Technical Consulting roles."
                        </p>
                    </div>

                    <MessageForm />
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn MessageForm() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());

    let UseTimeoutFnReturn {
        start: start_reset, ..
    } = use_timeout_fn(
        move |_: ()| form.update(|f| f.finish_success()),
        SUCCESS_HOLD_MS,
    );
    let UseTimeoutFnReturn {
        start: start_settle,
        ..
    } = use_timeout_fn(
        move |_: ()| {
            form.update(|f| f.finish_loading());
            start_reset(());
        },
        LOADING_HOLD_MS,
    );

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        // submit during loading/success returns nothing; the controls are
        // disabled then, this is just the backstop
        let Some(message) = form.try_update(|f| f.submit()).flatten() else {
            return;
        };
        match serde_json::to_string(&message) {
            Ok(payload) => log::info!("contact form submitted: {payload}"),
            Err(err) => log::warn!("contact payload failed to serialize: {err}"),
        }
        start_settle(());
    };

    let busy = move || form.with(ContactForm::is_busy);
    let button_label = move || match form.with(|f| f.phase) {
        FormPhase::Idle => "Send Message",
        FormPhase::Loading => "Sending...",
        FormPhase::Success => "Message Sent ✓",
    };
    let button_class = move || match form.with(|f| f.phase) {
        FormPhase::Success => {
            "w-full px-6 py-3 bg-accent-cyan/80 text-dark rounded-full font-medium transition-all duration-300"
        }
        _ => {
            "w-full px-6 py-3 bg-accent-blue text-white rounded-full font-medium hover:bg-accent-cyan transition-all duration-300 hover:shadow-glow disabled:opacity-60 disabled:cursor-not-allowed"
        }
    };

    let field_class = "w-full px-4 py-3 glass rounded-xl bg-transparent text-white placeholder:text-neutral-gray/60 focus:outline-none focus:ring-2 focus:ring-accent-blue disabled:opacity-60";

    view! {
        <form class="mt-8 p-6 glass rounded-xl space-y-4" on:submit=on_submit>
            <h4 class="text-lg font-display font-semibold text-white">"Send a Message"</h4>
            <input
                type="text"
                placeholder="Your Name"
                class=field_class
                prop:value=move || form.with(|f| f.name.clone())
                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                disabled=busy
            />
            <input
                type="email"
                placeholder="Your Email"
                class=field_class
                prop:value=move || form.with(|f| f.email.clone())
                on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                disabled=busy
            />
            <textarea
                placeholder="Your Message"
                rows="4"
                class=field_class
                prop:value=move || form.with(|f| f.message.clone())
                on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                disabled=busy
            ></textarea>
            <button type="submit" class=button_class disabled=busy>
                {button_label}
            </button>
        </form>
    }
}
