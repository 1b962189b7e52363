//! Appointment booking form: draft state, submit flow, hand-off.
//!
//! The form owns one `AppointmentDraft` and an error message. Controls call
//! `change_field` on every edit; `submit` validates the whole draft and
//! either stores a validation message or hands a copy of the draft to the
//! `SubmissionHandler` and resets. Exactly one of the two happens per call.

use std::io;

use crate::clock::{Clock, LocalClock};
use crate::models::{AppointmentDraft, DraftField};
use crate::render;
use crate::validation::{self, ValidationError};

// ─── Collaborators ────────────────────────────────────────────────────────────

/// Receives a validated draft. Whatever happens next (display, storage,
/// transmission) belongs to the embedding page.
pub trait SubmissionHandler {
    fn on_submit(&mut self, draft: AppointmentDraft);

    /// Failure from the last hand-off, if the handler could not record the
    /// draft. Cleared on read.
    fn take_error(&mut self) -> Option<io::Error> {
        None
    }
}

impl<F> SubmissionHandler for F
where
    F: FnMut(AppointmentDraft),
{
    fn on_submit(&mut self, draft: AppointmentDraft) {
        self(draft)
    }
}

/// UI toolkit hosting the form; honours input-focus requests.
pub trait FocusHost {
    fn focus(&mut self, field: DraftField);
}

// ─── State ────────────────────────────────────────────────────────────────────

/// Observable form state, as rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub draft: AppointmentDraft,
    /// Empty when no error is shown.
    pub error_message: String,
}

pub struct AppointmentForm<H, C = LocalClock> {
    state: FormState,
    handler: H,
    clock: C,
    focus_requested: bool,
}

impl<H: SubmissionHandler> AppointmentForm<H> {
    pub fn new(handler: H) -> Self {
        Self::with_clock(handler, LocalClock)
    }
}

impl<H: SubmissionHandler, C: Clock> AppointmentForm<H, C> {
    pub fn with_clock(handler: H, clock: C) -> Self {
        Self {
            state: FormState::default(),
            handler,
            clock,
            focus_requested: false,
        }
    }

    /// Runs after the first render: focuses the name input once per
    /// instance. Returns whether a focus request was issued.
    pub fn mount(&mut self, host: &mut impl FocusHost) -> bool {
        if self.focus_requested {
            return false;
        }
        self.focus_requested = true;
        host.focus(DraftField::Name);
        true
    }

    /// Replaces one field of the draft. No validation, error untouched.
    pub fn change_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.state.draft = self.state.draft.with_field(field, value);
        tracing::debug!(field = field.as_str(), "Appointment field changed");
    }

    /// Validates and hands off the draft.
    ///
    /// On failure the message is stored for the banner and the draft is
    /// left as is. On success the error is cleared, the handler receives a
    /// copy of the draft and the draft is reset to empty.
    pub fn submit(&mut self) -> Result<(), ValidationError> {
        let today = self.clock.today_iso();

        if let Err(err) = validation::validate_draft(&self.state.draft, &today) {
            tracing::debug!(kind = err.kind(), "Appointment submission rejected");
            self.state.error_message = err.to_string();
            return Err(err);
        }

        self.state.error_message.clear();
        self.handler.on_submit(self.state.draft.clone());
        self.state.draft = AppointmentDraft::default();
        tracing::info!("Appointment submitted");
        Ok(())
    }

    pub fn draft(&self) -> &AppointmentDraft {
        &self.state.draft
    }

    pub fn error_message(&self) -> &str {
        &self.state.error_message
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Lowest selectable date for the date control.
    pub fn min_date(&self) -> String {
        self.clock.today_iso()
    }

    /// Current markup, bound to the draft and error banner.
    pub fn render(&self) -> String {
        render::render_form(&self.state.draft, &self.state.error_message, &self.min_date())
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
