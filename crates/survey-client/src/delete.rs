//! Delete confirmation flow.
//!
//! A small state machine gating the destructive delete action. The state
//! field doubles as the double-delete guard: `confirm` is only honored
//! from `ConfirmPending`, so overlapping confirm clicks cannot issue two
//! delete calls.

use survey_sdk::SurveyClient;

use crate::signal::{SignalQueue, UiSignal};

/// Where the flow stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteState {
    /// Initial and terminal state; no dialog shown.
    Idle,
    /// Confirmation dialog is up, nothing sent yet.
    ConfirmPending,
    /// Delete request in flight.
    InFlight,
}

/// Confirmation flow for deleting one survey
pub struct DeleteFlow {
    client: SurveyClient,
    id: i64,
    state: DeleteState,
    signals: SignalQueue,
}

impl DeleteFlow {
    pub fn new(client: SurveyClient, id: i64) -> Self {
        Self {
            client,
            id,
            state: DeleteState::Idle,
            signals: SignalQueue::default(),
        }
    }

    /// Open the confirmation step. No network traffic.
    pub fn request_delete(&mut self) {
        if self.state == DeleteState::Idle {
            self.state = DeleteState::ConfirmPending;
        }
    }

    /// Dismiss the confirmation without deleting.
    pub fn cancel(&mut self) {
        if self.state == DeleteState::ConfirmPending {
            self.state = DeleteState::Idle;
        }
    }

    /// Perform the delete.
    ///
    /// Success navigates back to the list. Failure reports the error and
    /// still dismisses the confirmation; the user retries by requesting
    /// the delete again. Either way the flow ends Idle.
    pub async fn confirm(&mut self) {
        if self.state != DeleteState::ConfirmPending {
            return;
        }
        self.state = DeleteState::InFlight;

        match self.client.delete(self.id).await {
            Ok(()) => {
                tracing::info!("survey {} deleted", self.id);
                self.signals.success("Survey deleted successfully!");
                self.signals.push(UiSignal::NavigateToList);
            }
            Err(err) => {
                tracing::warn!("failed to delete survey {}: {err}", self.id);
                self.signals.error("Failed to delete survey");
            }
        }

        self.state = DeleteState::Idle;
    }

    pub fn state(&self) -> DeleteState {
        self.state
    }

    /// Drain queued signals for the presentation layer.
    pub fn take_signals(&mut self) -> Vec<UiSignal> {
        self.signals.take()
    }
}
