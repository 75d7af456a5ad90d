//! End-to-end controller flows against a mock survey store.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use survey_client::{
    DeleteState, FieldChange, FormController, FormMode, ListController, NoticeLevel, ScalarField,
    SurveyClient, SurveyConfig, UiSignal, ViewController,
};

fn stored_survey(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "first_name": "Anne",
        "last_name": "Lee",
        "street_address": "1234 Main St",
        "city": "Fairfax",
        "state": "VA",
        "zip": "22030",
        "telephone": "555-0100",
        "email": "anne@example.com",
        "survey_date": "2024-05-01",
        "liked_most": ["students", "campus"],
        "interest_source": "friends",
        "recommendation": "veryLikely",
        "raffle": [1, 5, 10, 15, 20, 25, 30, 35, 40, 45],
        "comments": "Great visit"
    })
}

fn errors_of(signals: &[UiSignal]) -> Vec<String> {
    signals
        .iter()
        .filter_map(|signal| match signal {
            UiSignal::Notice {
                level: NoticeLevel::Error,
                text,
            } => Some(text.clone()),
            _ => None,
        })
        .collect()
}

fn fill_valid_draft(form: &mut FormController) {
    form.apply_field_change(FieldChange::Scalar {
        field: ScalarField::FirstName,
        value: "Anne".into(),
    });
    form.apply_field_change(FieldChange::Scalar {
        field: ScalarField::LastName,
        value: "Lee".into(),
    });
    form.apply_field_change(FieldChange::RaffleText {
        value: "1, 5, 10, 15, 20, 25, 30, 35, 40, 45".into(),
    });
}

#[tokio::test]
async fn edit_initialize_hydrates_draft_from_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/surveys/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stored_survey(7)))
        .mount(&server)
        .await;

    let mut form = FormController::new(SurveyClient::new(server.uri()), FormMode::Edit(7));
    form.initialize().await;

    let draft = form.draft();
    assert_eq!(draft.first_name, "Anne");
    assert_eq!(draft.liked_most, vec!["students", "campus"]);
    // The stored integer sequence becomes display text.
    assert_eq!(draft.raffle_text, "1, 5, 10, 15, 20, 25, 30, 35, 40, 45");
    assert_eq!(form.take_signals(), vec![UiSignal::FocusFirstName]);
}

#[tokio::test]
async fn edit_initialize_failure_redirects_to_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/surveys/7"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Survey not found"})))
        .mount(&server)
        .await;

    let mut form = FormController::new(SurveyClient::new(server.uri()), FormMode::Edit(7));
    form.initialize().await;

    let signals = form.take_signals();
    assert_eq!(errors_of(&signals), vec!["Failed to load survey"]);
    assert!(signals.contains(&UiSignal::NavigateToList));
}

#[tokio::test]
async fn create_submit_success_resets_for_the_next_entry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/surveys/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(stored_survey(11)))
        .expect(1)
        .mount(&server)
        .await;

    let mut form = FormController::new(SurveyClient::new(server.uri()), FormMode::Create);
    form.initialize().await;
    fill_valid_draft(&mut form);
    form.take_signals();

    form.submit().await;

    assert!(!form.is_submitting());
    assert!(form.draft().first_name.is_empty());
    assert!(form.draft().raffle_text.is_empty());
    assert!(!form.draft().survey_date.is_empty());
    assert_eq!(form.raffle_error(), None);

    let signals = form.take_signals();
    assert_eq!(
        signals[0],
        UiSignal::success("Survey submitted successfully! Thank you for your feedback.")
    );
    assert_eq!(signals[1], UiSignal::FocusFirstName);
}

#[tokio::test]
async fn edit_submit_success_navigates_to_view() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/surveys/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stored_survey(7)))
        .expect(1)
        .mount(&server)
        .await;

    let mut form = FormController::new(SurveyClient::new(server.uri()), FormMode::Edit(7));
    fill_valid_draft(&mut form);

    form.submit().await;

    let signals = form.take_signals();
    assert_eq!(signals[0], UiSignal::success("Survey updated successfully!"));
    assert_eq!(signals[1], UiSignal::NavigateToView(7));
}

#[tokio::test]
async fn submit_rejection_reports_detail_and_keeps_the_draft() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/surveys/"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"detail": "raffle numbers must be 1-100"})),
        )
        .mount(&server)
        .await;

    let mut form = FormController::new(SurveyClient::new(server.uri()), FormMode::Create);
    form.initialize().await;
    fill_valid_draft(&mut form);
    form.take_signals();

    form.submit().await;

    // Draft untouched so the user can retry.
    assert_eq!(form.draft().first_name, "Anne");
    assert!(!form.is_submitting());
    assert_eq!(
        errors_of(&form.take_signals()),
        vec!["Error submitting survey: raffle numbers must be 1-100"]
    );
}

#[tokio::test]
async fn invalid_raffle_never_reaches_the_store() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/surveys/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(stored_survey(11)))
        .expect(0)
        .mount(&server)
        .await;

    let mut form = FormController::new(SurveyClient::new(server.uri()), FormMode::Create);
    form.initialize().await;
    form.apply_field_change(FieldChange::RaffleText {
        value: "1,2,3".into(),
    });

    form.submit().await;

    assert_eq!(
        form.raffle_error(),
        Some("Please enter at least 10 numbers.")
    );
}

#[tokio::test]
async fn delete_confirm_success_navigates_to_list() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/surveys/7"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let mut view = ViewController::new(SurveyClient::new(server.uri()), 7);
    let delete = view.delete_flow();
    delete.request_delete();
    delete.confirm().await;

    assert_eq!(delete.state(), DeleteState::Idle);
    let signals = delete.take_signals();
    assert_eq!(signals[0], UiSignal::success("Survey deleted successfully!"));
    assert_eq!(signals[1], UiSignal::NavigateToList);
}

#[tokio::test]
async fn delete_failure_dismisses_the_dialog_and_keeps_the_record() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/surveys/7"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/surveys/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([stored_survey(7)])))
        .mount(&server)
        .await;

    let client = SurveyClient::new(server.uri());
    let mut view = ViewController::new(client.clone(), 7);
    let delete = view.delete_flow();
    delete.request_delete();
    delete.confirm().await;

    // Back to Idle, dialog dismissed; retry goes through request_delete.
    assert_eq!(delete.state(), DeleteState::Idle);
    assert_eq!(errors_of(&delete.take_signals()), vec!["Failed to delete survey"]);

    // The record is still present in a subsequent list.
    let mut list = ListController::new(client);
    list.load().await;
    assert_eq!(list.summary(), (1, 1));
}

#[tokio::test]
async fn cancelled_delete_leaves_the_record_alone() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/surveys/7"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let mut view = ViewController::new(SurveyClient::new(server.uri()), 7);
    let delete = view.delete_flow();
    delete.request_delete();
    delete.cancel();

    assert_eq!(delete.state(), DeleteState::Idle);
    assert!(delete.take_signals().is_empty());
}

#[tokio::test]
async fn list_load_populates_the_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/surveys/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([stored_survey(1), stored_survey(2)])),
        )
        .mount(&server)
        .await;

    let mut list = ListController::new(SurveyClient::new(server.uri()));
    assert!(list.is_loading());
    list.load().await;

    assert!(!list.is_loading());
    assert_eq!(list.summary(), (2, 2));
    assert!(list.take_signals().is_empty());
}

#[tokio::test]
async fn list_degrades_to_empty_on_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/surveys/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut list = ListController::new(SurveyClient::new(server.uri()));
    list.load().await;

    assert!(!list.is_loading());
    assert_eq!(list.summary(), (0, 0));
    assert_eq!(
        errors_of(&list.take_signals()),
        vec!["Server error. Please try again later."]
    );
}

#[tokio::test]
async fn list_timeout_shows_empty_not_stale() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/surveys/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([stored_survey(1)]))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let client = SurveyClient::with_config(SurveyConfig {
        base_url: server.uri(),
        list_timeout: Duration::from_millis(200),
    });
    let mut list = ListController::new(client);
    list.load().await;

    // The late response is abandoned, not displayed.
    assert_eq!(list.summary(), (0, 0));
    assert_eq!(
        errors_of(&list.take_signals()),
        vec!["Request timed out. Please try again."]
    );
}

#[tokio::test]
async fn list_network_failure_has_its_own_message() {
    let mut list = ListController::new(SurveyClient::new("http://127.0.0.1:9"));
    list.load().await;

    assert_eq!(list.summary(), (0, 0));
    assert_eq!(
        errors_of(&list.take_signals()),
        vec!["Unable to connect to server. Please check your connection."]
    );
}

#[tokio::test]
async fn view_load_stores_the_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/surveys/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stored_survey(7)))
        .mount(&server)
        .await;

    let mut view = ViewController::new(SurveyClient::new(server.uri()), 7);
    view.load().await;

    assert!(!view.is_loading());
    assert_eq!(view.survey().unwrap().id, 7);
    assert!(view.take_signals().is_empty());
}

#[tokio::test]
async fn view_missing_record_redirects_to_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/surveys/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Survey not found"})))
        .mount(&server)
        .await;

    let mut view = ViewController::new(SurveyClient::new(server.uri()), 99);
    view.load().await;

    assert!(view.survey().is_none());
    let signals = view.take_signals();
    assert_eq!(errors_of(&signals), vec!["Survey not found"]);
    assert!(signals.contains(&UiSignal::NavigateToList));
}
