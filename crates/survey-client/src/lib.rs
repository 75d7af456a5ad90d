//! Survey Client Core
//!
//! Page-agnostic state machines behind the survey application's create,
//! list, view, and edit flows. Routing, rendering, and notification
//! display are external collaborators: controllers here own the mutable
//! state and talk back exclusively through drained [`UiSignal`] values.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                      SURVEY CLIENT CORE                       │
//! │                                                               │
//! │  ┌────────────┐  ┌────────────┐  ┌────────────┐               │
//! │  │    Form    │  │    List    │  │    View    │  controllers  │
//! │  │ Controller │  │ Controller │  │ Controller │               │
//! │  └─────┬──────┘  └─────┬──────┘  └─────┬──────┘               │
//! │        │               │               ├─ DeleteFlow          │
//! │  ┌─────▼──────┐  ┌─────▼──────┐        │                      │
//! │  │   Raffle   │  │   Filter   │        │                      │
//! │  │ Validation │  │   Engine   │        │                      │
//! │  └────────────┘  └────────────┘        │                      │
//! │        │               │               │                      │
//! │  ┌─────▼───────────────▼───────────────▼──────┐               │
//! │  │        survey-sdk (SurveyClient)           │               │
//! │  └────────────────────────────────────────────┘               │
//! └───────────────────────────────────────────────────────────────┘
//! ```

pub mod delete;
pub mod filter;
pub mod form;
pub mod list;
pub mod raffle;
pub mod signal;
pub mod view;

pub use delete::{DeleteFlow, DeleteState};
pub use filter::filter_surveys;
pub use form::{CancelState, FieldChange, FormController, FormMode, ScalarField, SurveyDraft};
pub use list::ListController;
pub use raffle::RaffleError;
pub use signal::{NoticeLevel, UiSignal};
pub use view::ViewController;

pub use survey_sdk::{ApiError, SurveyClient, SurveyConfig, SurveyPayload, SurveyRecord};
