//! Single-survey view session state.

use survey_sdk::{SurveyClient, SurveyRecord};

use crate::delete::DeleteFlow;
use crate::signal::{SignalQueue, UiSignal};

/// Controller for the read-only survey page
pub struct ViewController {
    client: SurveyClient,
    id: i64,
    survey: Option<SurveyRecord>,
    loading: bool,
    delete: DeleteFlow,
    signals: SignalQueue,
}

impl ViewController {
    pub fn new(client: SurveyClient, id: i64) -> Self {
        let delete = DeleteFlow::new(client.clone(), id);
        Self {
            client,
            id,
            survey: None,
            loading: true,
            delete,
            signals: SignalQueue::default(),
        }
    }

    /// Fetch the survey. A missing record redirects to the list rather
    /// than leaving the user on a dead page.
    pub async fn load(&mut self) {
        self.loading = true;

        match self.client.get(self.id).await {
            Ok(record) => {
                self.survey = Some(record);
            }
            Err(err) if err.is_not_found() => {
                self.signals.error("Survey not found");
                self.signals.push(UiSignal::NavigateToList);
            }
            Err(err) => {
                tracing::warn!("failed to load survey {}: {err}", self.id);
                self.signals.error("Failed to load survey");
                self.signals.push(UiSignal::NavigateToList);
            }
        }

        self.loading = false;
    }

    /// Leave for the edit form.
    pub fn edit(&mut self) {
        self.signals.push(UiSignal::NavigateToEdit(self.id));
    }

    /// The delete confirmation flow for this survey.
    pub fn delete_flow(&mut self) -> &mut DeleteFlow {
        &mut self.delete
    }

    pub fn survey(&self) -> Option<&SurveyRecord> {
        self.survey.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Drain queued signals for the presentation layer.
    pub fn take_signals(&mut self) -> Vec<UiSignal> {
        self.signals.take()
    }
}
