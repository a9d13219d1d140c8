use std::fmt;

use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::page::Page;
use crate::scheduler::{Scheduler, Timer};

pub const SUBMITTING_LABEL: &str = "Submitting...";
pub const CONFIRMED_LABEL: &str = "Got it! Pick a time that works.";
pub const SUCCESS_MESSAGE: &str = "Got it. Pick a time that works.";

// ASCII digits only, like the browser's \d. The browser's \s also covers U+FEFF.
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9\s\x{FEFF}\-\(\)\+]{10,}$").expect("phone pattern compiles"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields.")]
    MissingField,
    #[error("Please enter a valid phone number.")]
    InvalidPhone,
}

/// Raw values of the audit form, as read from the inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub full_name: String,
    pub phone: String,
}

impl FormState {
    pub fn new(full_name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            phone: phone.into(),
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Lead {
    pub full_name: String,
    pub phone: String,
}

// Leads end up in logs; keep the contact details out.
impl fmt::Debug for Lead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lead")
            .field("full_name_chars", &self.full_name.chars().count())
            .field("phone_digits", &self.phone.chars().filter(char::is_ascii_digit).count())
            .finish()
    }
}

/// Trims like the browser's `String.prototype.trim`, which also strips U+FEFF.
fn trim_input(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone)
}

pub fn validate(form: &FormState) -> Result<Lead, ValidationError> {
    let full_name = trim_input(&form.full_name);
    let phone = trim_input(&form.phone);

    if full_name.is_empty() || phone.is_empty() {
        return Err(ValidationError::MissingField);
    }
    if !is_valid_phone(phone) {
        return Err(ValidationError::InvalidPhone);
    }

    Ok(Lead {
        full_name: full_name.to_string(),
        phone: phone.to_string(),
    })
}

/// Stand-in for the backend call. There is no network request; the
/// submission always succeeds.
fn simulate_submission(lead: &Lead) {
    info!("Simulated lead submission: {:?}", lead);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButtonState {
    pub label: String,
    pub disabled: bool,
    pub highlight_color: Option<String>,
}

impl SubmitButtonState {
    pub fn idle(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: false,
            highlight_color: None,
        }
    }

    fn submitting() -> Self {
        Self {
            label: SUBMITTING_LABEL.to_string(),
            disabled: true,
            highlight_color: None,
        }
    }

    fn confirmed(color: &str) -> Self {
        Self {
            label: CONFIRMED_LABEL.to_string(),
            disabled: true,
            highlight_color: Some(color.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting { cycle: u64 },
    Confirmed { cycle: u64 },
}

/// Submit button state machine:
/// idle -> submitting -> (latency) -> confirmed -> (hold) -> idle.
#[derive(Debug)]
pub struct LeadForm {
    phase: SubmitPhase,
    cycle: u64,
    original_label: String,
    latency_ms: u32,
    hold_ms: u32,
    success_color: String,
}

impl LeadForm {
    pub fn new(latency_ms: u32, hold_ms: u32, success_color: impl Into<String>) -> Self {
        Self {
            phase: SubmitPhase::Idle,
            cycle: 0,
            original_label: String::new(),
            latency_ms,
            hold_ms,
            success_color: success_color.into(),
        }
    }

    /// Starts a submission cycle. Validation failures leave the button
    /// untouched and are returned for the caller to report.
    pub fn submit<P: Page, S: Scheduler>(
        &mut self,
        form: &FormState,
        page: &mut P,
        scheduler: &mut S,
    ) -> Result<(), ValidationError> {
        if self.phase != SubmitPhase::Idle {
            debug!("Submit ignored while {:?}", self.phase);
            return Ok(());
        }

        let lead = validate(form)?;
        simulate_submission(&lead);

        self.original_label = page.submit_label();
        self.cycle += 1;
        self.phase = SubmitPhase::Submitting { cycle: self.cycle };
        page.render_submit_button(&SubmitButtonState::submitting());
        scheduler.schedule(self.latency_ms, Timer::SubmitConfirmed { cycle: self.cycle });
        Ok(())
    }

    /// Returns true when the button switched to its confirmed state.
    pub fn on_confirmed<P: Page, S: Scheduler>(&mut self, cycle: u64, page: &mut P, scheduler: &mut S) -> bool {
        if self.phase != (SubmitPhase::Submitting { cycle }) {
            debug!("Stale confirmation for cycle {}", cycle);
            return false;
        }

        self.phase = SubmitPhase::Confirmed { cycle };
        page.render_submit_button(&SubmitButtonState::confirmed(&self.success_color));
        scheduler.schedule(self.hold_ms, Timer::SubmitReset { cycle });
        true
    }

    pub fn on_reset<P: Page>(&mut self, cycle: u64, page: &mut P) {
        if self.phase != (SubmitPhase::Confirmed { cycle }) {
            debug!("Stale reset for cycle {}", cycle);
            return;
        }

        self.phase = SubmitPhase::Idle;
        page.render_submit_button(&SubmitButtonState::idle(self.original_label.clone()));
        page.clear_form();
    }
}
