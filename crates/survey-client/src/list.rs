//! Survey list session state.
//!
//! Holds the fetched base collection and the two filter inputs. Every
//! fetch failure leaves the controller holding an empty, usable
//! collection; the list page degrades, it never crashes.

use survey_sdk::{SurveyClient, SurveyRecord};

use crate::filter::filter_surveys;
use crate::signal::{SignalQueue, UiSignal};

/// Controller for the survey list page
pub struct ListController {
    client: SurveyClient,
    surveys: Vec<SurveyRecord>,
    name_filter: String,
    date_filter: String,
    loading: bool,
    signals: SignalQueue,
}

impl ListController {
    pub fn new(client: SurveyClient) -> Self {
        Self {
            client,
            surveys: Vec::new(),
            name_filter: String::new(),
            date_filter: String::new(),
            loading: true,
            signals: SignalQueue::default(),
        }
    }

    /// Fetch the base collection.
    ///
    /// A degraded outcome (server error) and every transport failure all
    /// land on the same empty collection, with a message chosen per
    /// failure kind. A stale in-flight response never replaces the empty
    /// state: the client call itself abandons the request at its
    /// deadline.
    pub async fn load(&mut self) {
        self.loading = true;

        match self.client.list().await {
            Ok(outcome) if outcome.degraded => {
                self.surveys = Vec::new();
                self.signals.error("Server error. Please try again later.");
            }
            Ok(outcome) => {
                self.surveys = outcome.surveys;
            }
            Err(err) => {
                tracing::warn!("failed to load surveys: {err}");
                self.surveys = Vec::new();
                if err.is_timeout() {
                    self.signals.error("Request timed out. Please try again.");
                } else if err.is_network() {
                    self.signals
                        .error("Unable to connect to server. Please check your connection.");
                } else {
                    self.signals.error("Failed to load surveys");
                }
            }
        }

        self.loading = false;
    }

    pub fn set_name_filter(&mut self, query: impl Into<String>) {
        self.name_filter = query.into();
    }

    pub fn set_date_filter(&mut self, query: impl Into<String>) {
        self.date_filter = query.into();
    }

    pub fn clear_filters(&mut self) {
        self.name_filter.clear();
        self.date_filter.clear();
    }

    pub fn has_active_filters(&self) -> bool {
        !self.name_filter.is_empty() || !self.date_filter.is_empty()
    }

    /// The filtered view, recomputed from the base collection on every
    /// call. The base is never mutated or reordered.
    pub fn visible(&self) -> Vec<SurveyRecord> {
        filter_surveys(&self.surveys, &self.name_filter, &self.date_filter)
    }

    /// `(visible, total)` counts for the "Showing X of Y" line.
    pub fn summary(&self) -> (usize, usize) {
        (self.visible().len(), self.surveys.len())
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Drain queued signals for the presentation layer.
    pub fn take_signals(&mut self) -> Vec<UiSignal> {
        self.signals.take()
    }
}
