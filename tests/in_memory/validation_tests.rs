//! Boundary validation in front of the task service.

use super::helpers::{Store, store};
use rstest::rstest;
use serde_json::json;
use tasktrack::task::{
    domain::TaskDto, ports::TaskValidator, validation::DefaultTaskValidator,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn blank_payload_is_rejected_before_reaching_the_store(store: Store) {
    let payload = TaskDto::new("", "", "");

    let err = DefaultTaskValidator::new()
        .validate(&payload)
        .expect_err("blank payload is rejected");

    assert_eq!(
        err.to_json_body(),
        json!({
            "title": "Title is required",
            "description": "Description is required",
            "status": "Status is required",
        })
    );
    assert!(store.repository.is_empty().expect("emptiness is readable"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn validated_payload_is_created(store: Store) {
    let payload = TaskDto::new("Jira3", "JiraCodeTask3", "NEW");
    DefaultTaskValidator::new()
        .validate(&payload)
        .expect("payload is valid");

    let created = store
        .service
        .create_task(payload.clone())
        .await
        .expect("creation should succeed");

    assert_eq!(created, payload);
}
