//! Submission lifecycle: admission, in-flight guarding, outcome
//! application, and the busy flag on every exit path.

mod common;

use common::mock_service::{MockResponse, MockService};
use common::{test_service_config, write_doc};
use condense::api::{ApiError, SummarizeClient, CONNECT_FALLBACK_MESSAGE};
use condense::workflow::{
    SubmissionController, SubmissionOutcome, WorkflowError, NO_FILE_MESSAGE,
};

const DOC_TEXT: &[u8] = b"First sentence. Second sentence. Third sentence.";

fn controller_with_doc(dir: &tempfile::TempDir) -> SubmissionController {
    let path = write_doc(dir, "doc.txt", DOC_TEXT);
    let mut controller = SubmissionController::new();
    controller.select_file(&path).unwrap();
    controller
}

#[tokio::test]
async fn submit_without_document_fails_locally_and_sends_nothing() {
    let mock = MockService::start().await;
    let client = SummarizeClient::new(&test_service_config(&mock.base_url())).unwrap();
    let mut controller = SubmissionController::new();

    let err = controller.submit(&client).await.unwrap_err();
    assert!(matches!(err, WorkflowError::NoFileSelected));
    assert!(!controller.is_busy());
    assert_eq!(
        controller.outcome().failure_message(),
        Some(NO_FILE_MESSAGE)
    );
    assert_eq!(mock.request_count().await, 0);
}

#[tokio::test]
async fn successful_submission_stores_summary_and_artifact() {
    let mock = MockService::start().await;
    mock.enqueue(MockResponse::summary("S1. S2.", "abc", "doc_summary.txt"))
        .await;
    let client = SummarizeClient::new(&test_service_config(&mock.base_url())).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let mut controller = controller_with_doc(&dir);
    controller.params_mut().set_ratio(0.3);
    controller.params_mut().set_min_sentences(3);
    controller.params_mut().set_max_sentences(10);

    controller.submit(&client).await.unwrap();

    match controller.outcome() {
        SubmissionOutcome::Success { summary, artifact } => {
            assert_eq!(summary, "S1. S2.");
            assert_eq!(artifact.server_path, "abc");
            assert_eq!(artifact.download_name, "doc_summary.txt");
        }
        other => panic!("expected Success, got {other:?}"),
    }
    assert!(!controller.is_busy());
    assert_eq!(mock.request_count().await, 1);
}

#[tokio::test]
async fn request_carries_file_bytes_and_parameter_fields() {
    let mock = MockService::start().await;
    mock.enqueue(MockResponse::summary("S.", "p", "n.txt")).await;
    let client = SummarizeClient::new(&test_service_config(&mock.base_url())).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let mut controller = controller_with_doc(&dir);
    controller.submit(&client).await.unwrap();

    let requests = mock.requests().await;
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/api/summarize");
    assert!(request
        .content_type
        .as_deref()
        .unwrap()
        .starts_with("multipart/form-data"));

    let body = request.body_text();
    assert!(body.contains("name=\"file\""));
    assert!(body.contains("filename=\"doc.txt\""));
    assert!(body.contains("First sentence. Second sentence."));
    assert!(body.contains("name=\"ratio\""));
    assert!(body.contains("0.3"));
    assert!(body.contains("name=\"min\""));
    assert!(body.contains("name=\"max\""));
}

#[tokio::test]
async fn server_error_surfaces_its_message() {
    let mock = MockService::start().await;
    mock.enqueue(MockResponse::error(400, "file too short")).await;
    let client = SummarizeClient::new(&test_service_config(&mock.base_url())).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let mut controller = controller_with_doc(&dir);
    controller.submit(&client).await.unwrap();

    assert_eq!(
        controller.outcome().failure_message(),
        Some("file too short")
    );
    assert!(!controller.is_busy());
}

#[tokio::test]
async fn error_status_without_message_gets_the_unspecified_fallback() {
    let mock = MockService::start().await;
    mock.enqueue(MockResponse::raw(500, b"{}")).await;
    let client = SummarizeClient::new(&test_service_config(&mock.base_url())).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let mut controller = controller_with_doc(&dir);
    controller.submit(&client).await.unwrap();

    assert_eq!(
        controller.outcome().failure_message(),
        Some("An error occurred during summarization")
    );
}

#[tokio::test]
async fn transport_failure_gets_the_generic_fallback() {
    // Nothing listens on the discard port; connection is refused.
    let client = SummarizeClient::new(&test_service_config("http://127.0.0.1:9")).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let mut controller = controller_with_doc(&dir);
    controller.submit(&client).await.unwrap();

    assert_eq!(
        controller.outcome().failure_message(),
        Some(CONNECT_FALLBACK_MESSAGE)
    );
    assert!(!controller.is_busy());
}

#[tokio::test]
async fn garbled_success_body_is_treated_as_transport_class() {
    let mock = MockService::start().await;
    mock.enqueue(MockResponse::raw(200, b"not json at all")).await;
    let client = SummarizeClient::new(&test_service_config(&mock.base_url())).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let mut controller = controller_with_doc(&dir);
    controller.submit(&client).await.unwrap();

    assert_eq!(
        controller.outcome().failure_message(),
        Some(CONNECT_FALLBACK_MESSAGE)
    );
}

#[test]
fn busy_holds_from_begin_to_finish_and_admits_one_at_a_time() {
    let dir = tempfile::tempdir().unwrap();
    let mut controller = controller_with_doc(&dir);

    assert!(!controller.is_busy());
    let _request = controller.begin().unwrap();
    assert!(controller.is_busy());
    assert!(controller.outcome().is_in_flight());

    // Second admission is refused while one is outstanding.
    assert!(matches!(
        controller.begin(),
        Err(WorkflowError::SubmissionInFlight)
    ));
    assert!(controller.outcome().is_in_flight());

    controller.finish(Err(ApiError::Server {
        status: 500,
        message: "boom".into(),
    }));
    assert!(!controller.is_busy());
    assert_eq!(controller.outcome().failure_message(), Some("boom"));

    // Terminal states are re-entrant.
    let _request = controller.begin().unwrap();
    assert!(controller.is_busy());
}

#[test]
fn request_snapshot_is_immune_to_later_parameter_edits() {
    let dir = tempfile::tempdir().unwrap();
    let mut controller = controller_with_doc(&dir);

    let request = controller.begin().unwrap();
    assert_eq!(request.params.ratio, 0.3);
    assert_eq!(request.file_name, "doc.txt");
    assert_eq!(request.bytes, DOC_TEXT);

    // SubmissionInFlight is only about new admissions; edits still land in
    // the store but cannot touch the pending snapshot.
    controller.params_mut().set_ratio(0.9);
    controller.params_mut().set_min_sentences(9);
    assert_eq!(request.params.ratio, 0.3);
    assert_eq!(request.params.min_sentences, 3);
}

#[test]
fn document_vanishing_before_submit_is_a_local_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_doc(&dir, "doc.txt", DOC_TEXT);
    let mut controller = SubmissionController::new();
    controller.select_file(&path).unwrap();

    std::fs::remove_file(&path).unwrap();
    let err = controller.begin().unwrap_err();
    assert!(matches!(err, WorkflowError::DocumentRead { .. }));
    assert!(!controller.is_busy());
    assert!(controller.outcome().failure_message().is_some());
}

#[tokio::test]
async fn busy_clears_even_when_the_service_is_slow() {
    let mock = MockService::start().await;
    mock.enqueue(
        MockResponse::summary("S.", "p", "n.txt").with_delay(150),
    )
    .await;
    let client = SummarizeClient::new(&test_service_config(&mock.base_url())).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let mut controller = controller_with_doc(&dir);
    controller.submit(&client).await.unwrap();

    assert!(!controller.is_busy());
    assert!(controller.outcome().summary().is_some());
}
