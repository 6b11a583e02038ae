//! Contact form state machine.
//!
//! The "submission" is simulated: there is no endpoint and no failure path.
//! Submit holds the form in `Loading` for a fixed delay, flips to `Success`
//! for a second delay, then clears the fields and returns to `Idle`. The
//! timers themselves live in the component layer (`app::sections::contact`)
//! as cancellable scheduled callbacks; this module owns the transitions.

use serde::Serialize;

/// How long the fake network round-trip appears to take.
pub const LOADING_HOLD_MS: f64 = 2000.0;
/// How long the success note stays up before the form resets.
pub const SUCCESS_HOLD_MS: f64 = 3000.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Loading,
    Success,
}

/// Snapshot of a submission, logged client-side in lieu of a real request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub phase: FormPhase,
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Begin a submission. Returns the captured payload, or `None` when the
    /// form is mid-flow (controls are disabled then, so this is the no-op
    /// backstop rather than the primary guard).
    pub fn submit(&mut self) -> Option<ContactMessage> {
        if self.phase != FormPhase::Idle {
            return None;
        }
        self.phase = FormPhase::Loading;
        Some(ContactMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        })
    }

    /// The fake round-trip finished.
    pub fn finish_loading(&mut self) {
        if self.phase == FormPhase::Loading {
            self.phase = FormPhase::Success;
        }
    }

    /// The success note expired; clear the fields and accept input again.
    pub fn finish_success(&mut self) {
        if self.phase == FormPhase::Success {
            *self = ContactForm::default();
        }
    }

    /// True while the controls should be disabled.
    pub fn is_busy(&self) -> bool {
        self.phase != FormPhase::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            phase: FormPhase::Idle,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn test_submit_moves_to_loading_and_captures_fields() {
        let mut form = filled();
        let msg = form.submit().expect("idle form should accept a submission");
        assert_eq!(form.phase, FormPhase::Loading);
        assert!(form.is_busy());
        assert_eq!(msg.name, "Ada");
        assert_eq!(msg.email, "ada@example.com");
        assert_eq!(msg.message, "Hello");
    }

    #[test]
    fn test_full_flow_resets_fields() {
        let mut form = filled();
        form.submit();
        form.finish_loading();
        assert_eq!(form.phase, FormPhase::Success);
        assert!(form.is_busy());
        form.finish_success();
        assert_eq!(form, ContactForm::default());
        assert!(!form.is_busy());
    }

    #[test]
    fn test_submit_is_noop_while_busy() {
        let mut form = filled();
        form.submit();
        assert!(form.submit().is_none());
        assert_eq!(form.phase, FormPhase::Loading);
        form.finish_loading();
        assert!(form.submit().is_none());
        assert_eq!(form.phase, FormPhase::Success);
        // fields survive until the reset
        assert_eq!(form.name, "Ada");
    }

    #[test]
    fn test_out_of_order_timer_callbacks_are_noops() {
        let mut form = filled();
        // stale success timer firing while idle
        form.finish_success();
        assert_eq!(form, filled());
        // loading-finished while idle
        form.finish_loading();
        assert_eq!(form.phase, FormPhase::Idle);
        // success-expired while still loading
        form.submit();
        form.finish_success();
        assert_eq!(form.phase, FormPhase::Loading);
    }

    #[test]
    fn test_message_serializes_for_logging() {
        let msg = ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
        };
        let json = serde_json::to_string(&msg).expect("message should serialize");
        assert!(json.contains("\"email\":\"ada@example.com\""));
    }
}
