//! In-memory integration tests for task tracking operations.

use super::helpers::{Store, id_of, seed_jira_tasks, store};
use rstest::rstest;
use tasktrack::task::{
    domain::{TaskDto, TaskId},
    ports::TaskRepositoryError,
    services::TaskServiceError,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_task_by_title_returns_stored_fields(store: Store) {
    seed_jira_tasks(&store).await.expect("seeding should succeed");

    let dto = store
        .service
        .get_task_by_title("Jira1")
        .await
        .expect("task should be found");

    assert_eq!(dto, TaskDto::new("Jira1", "JiraCodeTask1", "OPEN"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_task_by_title_reports_unknown_title(store: Store) {
    seed_jira_tasks(&store).await.expect("seeding should succeed");

    let result = store.service.get_task_by_title("Jira33").await;

    assert!(matches!(result, Err(TaskServiceError::NotFound(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_task_by_status_returns_matching_task(store: Store) {
    seed_jira_tasks(&store).await.expect("seeding should succeed");

    let found = store
        .service
        .get_task_by_status("NEW")
        .await
        .expect("task should be found");
    let missing = store.service.get_task_by_status("IN_PROGRESS").await;

    assert_eq!(found, TaskDto::new("Jira2", "JiraCodeTask2", "NEW"));
    assert!(missing.is_err_and(|err| err.is_not_found()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_assigns_identifier_and_returns_payload(store: Store) {
    let created = store
        .service
        .create_task(TaskDto::new("Jira3", "JiraCodeTask3", "NEW"))
        .await
        .expect("creation should succeed");

    assert_eq!(created, TaskDto::new("Jira3", "JiraCodeTask3", "NEW"));
    id_of(&store, "Jira3").await.expect("created task has an identifier");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_surfaces_duplicate_title_from_store(store: Store) {
    seed_jira_tasks(&store).await.expect("seeding should succeed");

    let result = store
        .service
        .create_task(TaskDto::new("Jira1", "Duplicate", "NEW"))
        .await;

    assert!(matches!(
        result,
        Err(TaskServiceError::Repository(TaskRepositoryError::DuplicateTitle(_)))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_task_replaces_all_fields_and_keeps_identifier(store: Store) {
    seed_jira_tasks(&store).await.expect("seeding should succeed");
    let id = id_of(&store, "Jira1").await.expect("seeded task exists");

    let updated = store
        .service
        .update_task(id, TaskDto::new("Jira11", "JiraCodeTask11", "IN_PROGRESS"))
        .await
        .expect("update should succeed");

    assert_eq!(updated, TaskDto::new("Jira11", "JiraCodeTask11", "IN_PROGRESS"));
    assert_eq!(id_of(&store, "Jira11").await.expect("renamed task exists"), id);
    assert!(store.service.get_task_by_title("Jira1").await.is_err());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_task_reports_unknown_identifier_without_writing(store: Store) {
    seed_jira_tasks(&store).await.expect("seeding should succeed");
    let before = store.service.get_all_tasks().await.expect("listing works");

    let result = store
        .service
        .update_task(
            TaskId::new(),
            TaskDto::new("Jira11", "JiraCodeTask11", "IN_PROGRESS"),
        )
        .await;

    assert!(matches!(result, Err(TaskServiceError::NotFound(_))));
    let after = store.service.get_all_tasks().await.expect("listing works");
    assert_eq!(before, after);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_task_removes_exactly_one_record(store: Store) {
    seed_jira_tasks(&store).await.expect("seeding should succeed");
    let id = id_of(&store, "Jira1").await.expect("seeded task exists");

    store.service.delete_task(id).await.expect("delete should succeed");

    assert_eq!(store.repository.len().expect("length is readable"), 1);
    let remaining = store.service.get_all_tasks().await.expect("listing works");
    assert_eq!(remaining, vec![TaskDto::new("Jira2", "JiraCodeTask2", "NEW")]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_task_reports_unknown_identifier_and_keeps_store(store: Store) {
    seed_jira_tasks(&store).await.expect("seeding should succeed");

    let result = store.service.delete_task(TaskId::new()).await;

    assert!(matches!(result, Err(TaskServiceError::NotFound(_))));
    assert_eq!(store.repository.len().expect("length is readable"), 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_all_tasks_returns_insertion_order(store: Store) {
    seed_jira_tasks(&store).await.expect("seeding should succeed");

    let all = store.service.get_all_tasks().await.expect("listing works");

    let titles: Vec<&str> = all.iter().map(|dto| dto.title.as_str()).collect();
    assert_eq!(titles, vec!["Jira1", "Jira2"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_all_tasks_on_empty_store_is_not_an_error(store: Store) {
    let all = store.service.get_all_tasks().await.expect("listing works");

    assert!(all.is_empty());
}
