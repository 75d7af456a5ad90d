//! Survey form state machine.
//!
//! Owns the mutable draft for the create and edit flows. The draft is text
//! shaped while editing (the raffle field in particular stays raw text)
//! and is only materialized into a wire payload by a successful
//! [`FormController::validate_for_submit`]. All mutation goes through
//! [`FormController::apply_field_change`]; the field kind is an explicit
//! tag so the controller's branching stays exhaustive without a rendering
//! environment.

use survey_sdk::{SurveyClient, SurveyPayload, SurveyRecord};

use crate::raffle::{self, RaffleError};
use crate::signal::{SignalQueue, UiSignal};

/// Which flow the form serves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// New survey; the draft starts empty with today's date.
    Create,
    /// Editing the persisted survey with this id.
    Edit(i64),
}

/// The in-progress survey entry.
///
/// Every scalar is held as entered text; `raffle_text` is the raw
/// comma-separated field content, never a parsed sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurveyDraft {
    pub first_name: String,
    pub last_name: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub telephone: String,
    pub email: String,
    pub survey_date: String,
    pub liked_most: Vec<String>,
    pub interest_source: String,
    pub recommendation: String,
    pub raffle_text: String,
    pub comments: String,
}

impl SurveyDraft {
    /// Fresh draft for a new survey, dated today.
    fn empty_for_today() -> Self {
        Self {
            survey_date: today(),
            ..Default::default()
        }
    }

    /// Working copy of a fetched record. The raffle sequence becomes
    /// display text joined with `", "`.
    fn from_record(record: &SurveyRecord) -> Self {
        let raffle_text = record
            .raffle
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            street_address: record.street_address.clone(),
            city: record.city.clone(),
            state: record.state.clone(),
            zip: record.zip.clone(),
            telephone: record.telephone.clone(),
            email: record.email.clone(),
            survey_date: record.survey_date.clone(),
            liked_most: record.liked_most.clone(),
            interest_source: record.interest_source.clone(),
            recommendation: record.recommendation.clone(),
            raffle_text,
            comments: record.comments.clone(),
        }
    }

    /// Wire payload with the already-validated raffle sequence.
    fn to_payload(&self, raffle: Vec<u32>) -> SurveyPayload {
        SurveyPayload {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            street_address: self.street_address.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            zip: self.zip.clone(),
            telephone: self.telephone.clone(),
            email: self.email.clone(),
            survey_date: self.survey_date.clone(),
            liked_most: self.liked_most.clone(),
            interest_source: self.interest_source.clone(),
            recommendation: self.recommendation.clone(),
            raffle,
            comments: self.comments.clone(),
        }
    }
}

/// Scalar draft fields a text/date/radio/select input writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarField {
    FirstName,
    LastName,
    StreetAddress,
    City,
    State,
    Zip,
    Telephone,
    Email,
    SurveyDate,
    InterestSource,
    Recommendation,
    Comments,
}

/// A single user edit, tagged with its mutation semantics
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    /// Replace the named scalar with the new value.
    Scalar { field: ScalarField, value: String },
    /// Toggle membership of one campus-highlight token. Membership is
    /// exact-match on the token.
    HighlightToggle { token: String, checked: bool },
    /// Replace the raffle text and re-validate it immediately.
    RaffleText { value: String },
}

/// Two-step confirmation for discarding a create-mode draft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelState {
    Idle,
    ConfirmPending,
}

/// Controller for the survey form pages
pub struct FormController {
    client: SurveyClient,
    mode: FormMode,
    draft: SurveyDraft,
    raffle_error: Option<String>,
    submitting: bool,
    cancel_state: CancelState,
    signals: SignalQueue,
}

impl FormController {
    pub fn new(client: SurveyClient, mode: FormMode) -> Self {
        Self {
            client,
            mode,
            draft: SurveyDraft::default(),
            raffle_error: None,
            submitting: false,
            cancel_state: CancelState::Idle,
            signals: SignalQueue::default(),
        }
    }

    /// Prepare the draft for its mode.
    ///
    /// Create mode starts an empty draft dated today. Edit mode fetches
    /// the record and hydrates the draft from it; if the fetch fails the
    /// caller is told to leave for the list page.
    pub async fn initialize(&mut self) {
        match self.mode {
            FormMode::Create => {
                self.draft = SurveyDraft::empty_for_today();
                self.raffle_error = None;
                self.signals.push(UiSignal::FocusFirstName);
            }
            FormMode::Edit(id) => match self.client.get(id).await {
                Ok(record) => {
                    self.draft = SurveyDraft::from_record(&record);
                    self.raffle_error = None;
                    self.signals.push(UiSignal::FocusFirstName);
                }
                Err(err) => {
                    tracing::warn!("failed to load survey {id} for editing: {err}");
                    self.signals.error("Failed to load survey");
                    self.signals.push(UiSignal::NavigateToList);
                }
            },
        }
    }

    /// Apply one user edit to the draft.
    pub fn apply_field_change(&mut self, change: FieldChange) {
        match change {
            FieldChange::Scalar { field, value } => {
                let slot = match field {
                    ScalarField::FirstName => &mut self.draft.first_name,
                    ScalarField::LastName => &mut self.draft.last_name,
                    ScalarField::StreetAddress => &mut self.draft.street_address,
                    ScalarField::City => &mut self.draft.city,
                    ScalarField::State => &mut self.draft.state,
                    ScalarField::Zip => &mut self.draft.zip,
                    ScalarField::Telephone => &mut self.draft.telephone,
                    ScalarField::Email => &mut self.draft.email,
                    ScalarField::SurveyDate => &mut self.draft.survey_date,
                    ScalarField::InterestSource => &mut self.draft.interest_source,
                    ScalarField::Recommendation => &mut self.draft.recommendation,
                    ScalarField::Comments => &mut self.draft.comments,
                };
                *slot = value;
            }
            FieldChange::HighlightToggle { token, checked } => {
                if checked {
                    if !self.draft.liked_most.contains(&token) {
                        self.draft.liked_most.push(token);
                    }
                } else {
                    self.draft.liked_most.retain(|item| item != &token);
                }
            }
            FieldChange::RaffleText { value } => {
                self.raffle_error = raffle::validate(&value).err().map(|err| err.to_string());
                self.draft.raffle_text = value;
            }
        }
    }

    /// Gate the draft for submission.
    ///
    /// Re-runs the raffle validator on the current text; a failure is
    /// recorded in `raffle_error` and blocks submission before any
    /// network traffic. Success yields the payload with the raffle as an
    /// integer sequence.
    pub fn validate_for_submit(&mut self) -> Result<SurveyPayload, RaffleError> {
        match raffle::validate(&self.draft.raffle_text) {
            Ok(numbers) => {
                self.raffle_error = None;
                Ok(self.draft.to_payload(numbers))
            }
            Err(err) => {
                self.raffle_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Submit the draft to the store.
    ///
    /// A submit while one is already in flight is a no-op. Validation
    /// failure aborts without touching the network. On success, create
    /// mode resets to a fresh draft and edit mode navigates to the view
    /// page; on failure the draft is left unchanged so the user can
    /// retry.
    pub async fn submit(&mut self) {
        if self.submitting {
            tracing::debug!("submit ignored: one already in flight");
            return;
        }
        self.submitting = true;

        let payload = match self.validate_for_submit() {
            Ok(payload) => payload,
            Err(_) => {
                self.submitting = false;
                return;
            }
        };

        let result = match self.mode {
            FormMode::Create => self.client.create(&payload).await,
            FormMode::Edit(id) => self.client.update(id, &payload).await,
        };

        match result {
            Ok(record) => match self.mode {
                FormMode::Create => {
                    tracing::info!("survey {} created", record.id);
                    self.signals
                        .success("Survey submitted successfully! Thank you for your feedback.");
                    self.draft = SurveyDraft::empty_for_today();
                    self.raffle_error = None;
                    self.signals.push(UiSignal::FocusFirstName);
                }
                FormMode::Edit(id) => {
                    tracing::info!("survey {id} updated");
                    self.signals.success("Survey updated successfully!");
                    self.signals.push(UiSignal::NavigateToView(id));
                }
            },
            Err(err) => {
                let verb = match self.mode {
                    FormMode::Create => "submitting",
                    FormMode::Edit(_) => "updating",
                };
                tracing::warn!("error {verb} survey: {err}");
                self.signals.error(format!("Error {verb} survey: {err}"));
            }
        }

        self.submitting = false;
    }

    /// Ask to discard the draft.
    ///
    /// Edit mode leaves for the view page immediately: the server copy
    /// is untouched, so there is nothing ambiguous to discard. Create
    /// mode is destructive and moves to a pending confirmation instead.
    pub fn request_cancel(&mut self) {
        match self.mode {
            FormMode::Create => {
                self.cancel_state = CancelState::ConfirmPending;
            }
            FormMode::Edit(id) => {
                self.signals.push(UiSignal::NavigateToView(id));
            }
        }
    }

    /// Confirm the pending discard: reset to a fresh draft.
    pub fn confirm_cancel(&mut self) {
        if self.cancel_state != CancelState::ConfirmPending {
            return;
        }
        self.draft = SurveyDraft::empty_for_today();
        self.raffle_error = None;
        self.cancel_state = CancelState::Idle;
    }

    /// Keep the draft; dismiss the pending confirmation.
    pub fn abort_cancel(&mut self) {
        self.cancel_state = CancelState::Idle;
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn draft(&self) -> &SurveyDraft {
        &self.draft
    }

    /// Current raffle field error message, if the text is invalid.
    pub fn raffle_error(&self) -> Option<&str> {
        self.raffle_error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn cancel_state(&self) -> CancelState {
        self.cancel_state
    }

    /// Drain queued signals for the presentation layer.
    pub fn take_signals(&mut self) -> Vec<UiSignal> {
        self.signals.take()
    }
}

/// Current local date as `YYYY-MM-DD`.
fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}
