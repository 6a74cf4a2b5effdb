//! Application state and the submission state machine

use super::forms::{FieldEdit, FieldId, Form, Preset, VendorForm};
use super::submission::{GenerationOutcome, SubmissionState};
use super::{build_message, validate, ValidationErrors};
use tracing::{debug, info, warn};

/// What currently has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Field(FieldId),
    GenerateButton,
    ResetButton,
}

/// The whole UI state. Rendering reads it; only the transition methods
/// below mutate it.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub form: VendorForm,
    /// Preset the sample-data switch points at
    pub preset: Preset,
    pub errors: ValidationErrors,
    pub submission: SubmissionState,
    pub focus_index: usize,
    /// Message from a render panic; the fallback screen is shown while set
    pub render_fault: Option<String>,
    /// Transient feedback such as "Link copied"
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(preset: Preset) -> Self {
        Self {
            form: preset.form(),
            preset,
            ..Default::default()
        }
    }

    pub fn sample_data_on(&self) -> bool {
        self.preset == Preset::Sample
    }

    pub fn is_loading(&self) -> bool {
        self.submission.is_loading()
    }

    pub fn error_for(&self, field: FieldId) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Replace one field's value. Clears that field's validation error
    /// without re-validating. Ignored while a request is in flight.
    pub fn edit_field(&mut self, field: FieldId, value: impl Into<String>) -> bool {
        if self.is_loading() {
            return false;
        }
        self.form.set(field, value);
        if self.errors.remove(&field).is_some() {
            debug!(field = field.key(), "cleared validation error on edit");
        }
        true
    }

    /// Apply a keystroke to the focused field
    pub fn apply_edit(&mut self, edit: FieldEdit) -> bool {
        let FocusTarget::Field(field) = self.focused() else {
            return false;
        };
        match self.form.edited_value(field, edit) {
            Some(value) => self.edit_field(field, value),
            None => false,
        }
    }

    /// Flip the sample-data switch: load the other preset and drop every
    /// result, error and validation message.
    pub fn toggle_sample(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        self.preset = self.preset.toggled();
        self.form = self.preset.form();
        self.errors.clear();
        self.submission = SubmissionState::Idle;
        self.clamp_focus();
        info!(sample = self.sample_data_on(), "sample data toggled");
        true
    }

    /// Validate and, if the form is valid, enter `Loading`.
    ///
    /// Returns the prompt to send, or `None` when nothing should be sent
    /// (invalid form, or a request already in flight).
    pub fn begin_generation(&mut self) -> Option<String> {
        if self.is_loading() {
            return None;
        }

        self.errors = validate(&self.form);
        if !self.errors.is_empty() {
            let fields: Vec<_> = self.errors.keys().map(|f| f.key()).collect();
            info!(?fields, "form invalid, generation blocked");
            return None;
        }

        self.submission = SubmissionState::Loading;
        self.status_message = None;
        Some(build_message(&self.form))
    }

    /// Leave `Loading` with the request's outcome
    pub fn finish_generation(&mut self, outcome: GenerationOutcome) {
        if !self.is_loading() {
            warn!("generation outcome arrived with no request in flight, ignoring");
            return;
        }
        match &outcome {
            GenerationOutcome::Success { pdf_url, .. } => {
                info!(has_pdf = pdf_url.is_some(), "document generated")
            }
            GenerationOutcome::Failure { message } => warn!(%message, "generation failed"),
        }
        self.submission = outcome.into_state();
        self.clamp_focus();
    }

    /// Back to the current preset with all feedback cleared
    pub fn reset(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        self.form = self.preset.form();
        self.errors.clear();
        self.submission = SubmissionState::Idle;
        self.status_message = None;
        self.clamp_focus();
        true
    }

    /// Hide the result/error banner, keeping the form as-is
    pub fn dismiss_banner(&mut self) -> bool {
        if !self.submission.has_outcome() {
            return false;
        }
        self.submission = SubmissionState::Idle;
        self.clamp_focus();
        true
    }

    pub fn record_render_fault(&mut self, message: String) {
        self.render_fault = Some(message);
    }

    pub fn clear_render_fault(&mut self) {
        self.render_fault = None;
    }

    /// Resolve the focus index to a target
    pub fn focused(&self) -> FocusTarget {
        match FieldId::from_index(self.focus_index) {
            Some(field) => FocusTarget::Field(field),
            None if self.focus_index > FieldId::COUNT && self.submission.has_outcome() => {
                FocusTarget::ResetButton
            }
            None => FocusTarget::GenerateButton,
        }
    }

    pub fn focus_field(&mut self, field: FieldId) {
        self.focus_index = field.index();
    }

    fn clamp_focus(&mut self) {
        let max = self.focus_count() - 1;
        self.focus_index = self.focus_index.min(max);
    }
}

impl Form for AppState {
    fn focus_count(&self) -> usize {
        // fields, generate button, and reset while a banner is up
        FieldId::COUNT + 1 + usize::from(self.submission.has_outcome())
    }
    fn focus_index(&self) -> usize {
        self.focus_index
    }
    fn set_focus_index(&mut self, index: usize) {
        self.focus_index = index.min(self.focus_count() - 1);
    }
}
