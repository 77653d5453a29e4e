//! Waitlist form state machine.
//!
//! ```text
//!   Idle ──begin_submit (valid)──▶ Submitting ──finish_submit(Ok)──▶ Success
//!    ▲  │                               │                              │
//!    │  └─begin_submit (invalid): stays │ finish_submit(Err)           │ reset_after_display
//!    └──────────────────────────────────┴──────────────────────────────┘
//! ```
//!
//! The form owns its fields. Nothing here knows about time or rendering; the
//! [`crate::controller`] module sequences the transitions with delays.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::controller::SubmitError;
use crate::notify::Notice;

/// Shown when a required field is empty at submit time.
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all required fields";
/// Shown once the (simulated) submission went through.
pub const SUBSCRIBED_MESSAGE: &str = "You're on the waiting list! Check your email for updates.";
/// Shown when the submitter reports a failure.
pub const SUBMIT_FAILED_MESSAGE: &str = "Something went wrong. Please try again.";

/// Reasons `begin_submit` refuses to start a submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WaitlistError {
    /// First name or email is empty
    #[error("Please fill in all required fields")]
    MissingRequiredFields,
    /// A submission is in flight or the success panel is showing
    #[error("a waitlist submission is already in progress")]
    Busy,
}

/// Optional apartment classification offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ApartmentType {
    /// Studio apartment
    #[serde(rename = "studio")]
    Studio,
    /// One bedroom
    #[serde(rename = "1bed")]
    OneBedroom,
    /// Two bedrooms
    #[serde(rename = "2bed")]
    TwoBedrooms,
    /// Three or more bedrooms
    #[serde(rename = "3plus")]
    ThreePlus,
}

impl ApartmentType {
    /// All variants in the order the select lists them.
    pub const ALL: [ApartmentType; 4] = [
        ApartmentType::Studio,
        ApartmentType::OneBedroom,
        ApartmentType::TwoBedrooms,
        ApartmentType::ThreePlus,
    ];

    /// `<option value>` and wire value.
    pub fn value(&self) -> &'static str {
        match self {
            ApartmentType::Studio => "studio",
            ApartmentType::OneBedroom => "1bed",
            ApartmentType::TwoBedrooms => "2bed",
            ApartmentType::ThreePlus => "3plus",
        }
    }

    /// Human-readable option text.
    pub fn label(&self) -> &'static str {
        match self {
            ApartmentType::Studio => "Studio",
            ApartmentType::OneBedroom => "1 Bedroom",
            ApartmentType::TwoBedrooms => "2 Bedrooms",
            ApartmentType::ThreePlus => "3+ Bedrooms",
        }
    }

    /// Map a select value back to a variant. The placeholder option (`""`) and
    /// anything unknown mean "unset".
    pub fn parse_option(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.value() == value)
    }
}

/// Where the form is in its lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Form visible and editable
    #[default]
    Idle,
    /// Simulated request in flight; form disabled
    Submitting,
    /// Success panel replaces the form
    Success,
}

/// Validated snapshot handed to a [`crate::controller::Submitter`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistSubmission {
    /// Required, non-empty
    pub first_name: String,
    /// Required, non-empty
    pub email: String,
    /// Optional apartment classification
    pub apartment_type: Option<ApartmentType>,
    /// Updates opt-in
    pub wants_updates: bool,
}

/// Local, ephemeral state of the waitlist form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitlistForm {
    first_name: String,
    email: String,
    apartment_type: Option<ApartmentType>,
    wants_updates: bool,
    phase: Phase,
}

impl Default for WaitlistForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            email: String::new(),
            apartment_type: None,
            wants_updates: true,
            phase: Phase::Idle,
        }
    }
}

impl WaitlistForm {
    /// Current first name input.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Current email input.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Selected apartment type, if any.
    pub fn apartment_type(&self) -> Option<ApartmentType> {
        self.apartment_type
    }

    /// Updates opt-in checkbox.
    pub fn wants_updates(&self) -> bool {
        self.wants_updates
    }

    /// Lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Request in flight; the form should be disabled.
    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// Success panel is showing.
    pub fn is_subscribed(&self) -> bool {
        self.phase == Phase::Success
    }

    fn editable(&self, field: &'static str) -> bool {
        if self.phase != Phase::Idle {
            debug!(field, phase = ?self.phase, "ignoring edit outside idle phase");
            return false;
        }
        true
    }

    /// Replace the first name.
    pub fn set_first_name(&mut self, value: impl Into<String>) {
        if self.editable("first_name") {
            self.first_name = value.into();
        }
    }

    /// Replace the email.
    pub fn set_email(&mut self, value: impl Into<String>) {
        if self.editable("email") {
            self.email = value.into();
        }
    }

    /// Select (or clear) the apartment type.
    pub fn set_apartment_type(&mut self, value: Option<ApartmentType>) {
        if self.editable("apartment_type") {
            self.apartment_type = value;
        }
    }

    /// Toggle the updates opt-in.
    pub fn set_wants_updates(&mut self, value: bool) {
        if self.editable("wants_updates") {
            self.wants_updates = value;
        }
    }

    /// Validate and enter `Submitting`.
    ///
    /// Both required fields must be non-empty. Whitespace counts as content, the
    /// same as the browser's `required` attribute. On error nothing changes.
    pub fn begin_submit(&mut self) -> Result<WaitlistSubmission, WaitlistError> {
        if self.phase != Phase::Idle {
            return Err(WaitlistError::Busy);
        }
        if self.first_name.is_empty() || self.email.is_empty() {
            warn!(
                first_name_empty = self.first_name.is_empty(),
                email_empty = self.email.is_empty(),
                "waitlist submit rejected"
            );
            return Err(WaitlistError::MissingRequiredFields);
        }

        self.phase = Phase::Submitting;
        debug!("waitlist submission started");
        Ok(WaitlistSubmission {
            first_name: self.first_name.clone(),
            email: self.email.clone(),
            apartment_type: self.apartment_type,
            wants_updates: self.wants_updates,
        })
    }

    /// Leave `Submitting` with the submitter's outcome and return the one notice
    /// to show.
    ///
    /// Success clears first name, email and apartment type. Failure keeps them so
    /// the user can retry.
    pub fn finish_submit(&mut self, outcome: Result<(), SubmitError>) -> Notice {
        if self.phase != Phase::Submitting {
            debug!(phase = ?self.phase, "finish_submit outside submitting phase");
        }
        match outcome {
            Ok(()) => {
                self.phase = Phase::Success;
                self.first_name.clear();
                self.email.clear();
                self.apartment_type = None;
                info!("waitlist submission accepted");
                Notice::success(SUBSCRIBED_MESSAGE)
            }
            Err(err) => {
                self.phase = Phase::Idle;
                warn!(error = %err, "waitlist submission failed");
                Notice::error(SUBMIT_FAILED_MESSAGE)
            }
        }
    }

    /// Leave the success panel. The form comes back empty with the opt-in checked.
    pub fn reset_after_display(&mut self) {
        if self.phase != Phase::Success {
            return;
        }
        *self = Self::default();
        debug!("waitlist form reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> WaitlistForm {
        let mut form = WaitlistForm::default();
        form.set_first_name("Jane");
        form.set_email("jane@example.com");
        form
    }

    #[test]
    fn starts_idle_and_opted_in() {
        let form = WaitlistForm::default();
        assert_eq!(form.phase(), Phase::Idle);
        assert!(form.wants_updates());
        assert!(form.first_name().is_empty());
        assert!(form.email().is_empty());
        assert_eq!(form.apartment_type(), None);
    }

    #[test]
    fn empty_first_name_is_rejected_without_changes() {
        let mut form = WaitlistForm::default();
        form.set_email("jane@example.com");
        let before = form.clone();

        assert_eq!(form.begin_submit(), Err(WaitlistError::MissingRequiredFields));
        assert_eq!(form, before);
    }

    #[test]
    fn empty_email_is_rejected() {
        let mut form = WaitlistForm::default();
        form.set_first_name("Jane");
        assert_eq!(form.begin_submit(), Err(WaitlistError::MissingRequiredFields));
        assert_eq!(form.phase(), Phase::Idle);
    }

    #[test]
    fn whitespace_counts_as_content() {
        let mut form = WaitlistForm::default();
        form.set_first_name(" ");
        form.set_email(" ");
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn valid_submit_enters_submitting_with_snapshot() {
        let mut form = filled();
        form.set_apartment_type(Some(ApartmentType::TwoBedrooms));
        form.set_wants_updates(false);

        let submission = form.begin_submit().unwrap();
        assert!(form.is_submitting());
        assert_eq!(
            submission,
            WaitlistSubmission {
                first_name: "Jane".into(),
                email: "jane@example.com".into(),
                apartment_type: Some(ApartmentType::TwoBedrooms),
                wants_updates: false,
            }
        );
    }

    #[test]
    fn second_submit_while_in_flight_is_busy() {
        let mut form = filled();
        form.begin_submit().unwrap();
        assert_eq!(form.begin_submit(), Err(WaitlistError::Busy));
    }

    #[test]
    fn edits_are_ignored_while_submitting() {
        let mut form = filled();
        form.begin_submit().unwrap();
        form.set_first_name("John");
        form.set_wants_updates(false);
        assert_eq!(form.first_name(), "Jane");
        assert!(form.wants_updates());
    }

    #[test]
    fn success_clears_fields_and_shows_panel() {
        let mut form = filled();
        form.set_apartment_type(Some(ApartmentType::Studio));
        form.begin_submit().unwrap();

        let notice = form.finish_submit(Ok(()));
        assert_eq!(notice, Notice::success(SUBSCRIBED_MESSAGE));
        assert!(form.is_subscribed());
        assert!(form.first_name().is_empty());
        assert!(form.email().is_empty());
        assert_eq!(form.apartment_type(), None);
    }

    #[test]
    fn failure_keeps_fields_and_returns_to_idle() {
        let mut form = filled();
        form.begin_submit().unwrap();

        let notice = form.finish_submit(Err(SubmitError::Unavailable("offline".into())));
        assert_eq!(notice, Notice::error(SUBMIT_FAILED_MESSAGE));
        assert_eq!(form.phase(), Phase::Idle);
        assert_eq!(form.first_name(), "Jane");
        assert_eq!(form.email(), "jane@example.com");
    }

    #[test]
    fn reset_after_display_restores_defaults() {
        let mut form = filled();
        form.set_wants_updates(false);
        form.begin_submit().unwrap();
        form.finish_submit(Ok(()));

        form.reset_after_display();
        assert_eq!(form, WaitlistForm::default());
    }

    #[test]
    fn reset_is_noop_outside_success() {
        let mut form = filled();
        form.reset_after_display();
        assert_eq!(form.first_name(), "Jane");

        form.begin_submit().unwrap();
        form.reset_after_display();
        assert!(form.is_submitting());
    }

    #[test]
    fn opt_in_toggles_independently() {
        let mut form = filled();
        form.set_wants_updates(false);
        assert!(!form.wants_updates());
        assert_eq!(form.first_name(), "Jane");
        assert_eq!(form.email(), "jane@example.com");
        form.set_wants_updates(true);
        assert!(form.wants_updates());
    }

    #[test]
    fn apartment_options_round_trip_through_select_values() {
        for kind in ApartmentType::ALL {
            assert_eq!(ApartmentType::parse_option(kind.value()), Some(kind));
        }
        assert_eq!(ApartmentType::parse_option(""), None);
        assert_eq!(ApartmentType::parse_option("penthouse"), None);
        assert_eq!(ApartmentType::ThreePlus.label(), "3+ Bedrooms");
    }

    #[test]
    fn missing_fields_error_reads_like_the_toast() {
        assert_eq!(
            WaitlistError::MissingRequiredFields.to_string(),
            MISSING_FIELDS_MESSAGE
        );
    }
}
