//! Service orchestration tests for task record operations.

use std::sync::Arc;

use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::TaskDomainError,
    ports::{TaskRepositoryError, repository::MockTaskRepository},
    services::{
        CreateTaskRequest, StoreHealth, TaskRecordService, TaskServiceError, UpdateTaskRequest,
    },
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use uuid::Uuid;

type TestService = TaskRecordService<InMemoryTaskRepository, DefaultClock>;

#[fixture]
fn service() -> TestService {
    TaskRecordService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    )
}

fn nonexistent_id() -> String {
    Uuid::new_v4().to_string()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_then_get_returns_full_record(service: TestService) {
    let created = service
        .create(CreateTaskRequest::new("Comprar pan"))
        .await
        .expect("creation should succeed");

    assert_eq!(created.title().as_str(), "Comprar pan");
    assert_eq!(created.description(), "");
    assert!(!created.completed());

    let fetched = service
        .get(&created.id().to_string())
        .await
        .expect("lookup should succeed");
    assert_eq!(fetched, created);
}

#[rstest]
#[case(CreateTaskRequest::default())]
#[case(CreateTaskRequest::new(""))]
#[case(CreateTaskRequest::new("   "))]
#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_missing_or_blank_title(
    service: TestService,
    #[case] request: CreateTaskRequest,
) {
    let result = service.create(request).await;
    assert!(matches!(
        result,
        Err(TaskServiceError::Validation(TaskDomainError::EmptyTitle))
    ));

    // Nothing may be persisted for a rejected create.
    let tasks = service.list().await.expect("list should succeed");
    assert!(tasks.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_rejects_malformed_identifier_before_lookup(service: TestService) {
    let result = service.get("not-a-valid-id-format").await;
    assert!(matches!(
        result,
        Err(TaskServiceError::InvalidIdentifier(ref raw)) if raw == "not-a-valid-id-format"
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_reports_not_found_for_well_formed_absent_id(service: TestService) {
    let result = service.get(&nonexistent_id()).await;
    assert!(matches!(result, Err(TaskServiceError::NotFound(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_preserves_omitted_fields(service: TestService) {
    let created = service
        .create(
            CreateTaskRequest::new("Comprar pan").with_description("integral"),
        )
        .await
        .expect("creation should succeed");

    let updated = service
        .update(
            &created.id().to_string(),
            UpdateTaskRequest::new().with_completed(true),
        )
        .await
        .expect("update should succeed");

    assert_eq!(updated.id(), created.id());
    assert_eq!(updated.created_at(), created.created_at());
    assert_eq!(updated.title().as_str(), "Comprar pan");
    assert_eq!(updated.description(), "integral");
    assert!(updated.completed());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_with_no_fields_returns_record_unchanged(service: TestService) {
    let created = service
        .create(CreateTaskRequest::new("Comprar pan"))
        .await
        .expect("creation should succeed");

    let updated = service
        .update(&created.id().to_string(), UpdateTaskRequest::new())
        .await
        .expect("empty update should succeed");
    assert_eq!(updated, created);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_rejects_blank_supplied_title(service: TestService) {
    let created = service
        .create(CreateTaskRequest::new("Comprar pan"))
        .await
        .expect("creation should succeed");

    let result = service
        .update(
            &created.id().to_string(),
            UpdateTaskRequest::new().with_title("   "),
        )
        .await;
    assert!(matches!(
        result,
        Err(TaskServiceError::Validation(TaskDomainError::EmptyTitle))
    ));

    // The stored record must be untouched by the rejected update.
    let fetched = service
        .get(&created.id().to_string())
        .await
        .expect("lookup should succeed");
    assert_eq!(fetched, created);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_of_absent_record_reports_not_found(service: TestService) {
    let result = service
        .update(&nonexistent_id(), UpdateTaskRequest::new().with_completed(true))
        .await;
    assert!(matches!(result, Err(TaskServiceError::NotFound(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_then_get_reports_not_found(service: TestService) {
    let created = service
        .create(CreateTaskRequest::new("Comprar pan"))
        .await
        .expect("creation should succeed");
    let id = created.id().to_string();

    service.delete(&id).await.expect("delete should succeed");

    let result = service.get(&id).await;
    assert!(matches!(result, Err(TaskServiceError::NotFound(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_of_absent_record_reports_not_found(service: TestService) {
    let result = service.delete(&nonexistent_id()).await;
    assert!(matches!(result, Err(TaskServiceError::NotFound(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_rejects_malformed_identifier(service: TestService) {
    let result = service.delete("12345").await;
    assert!(matches!(result, Err(TaskServiceError::InvalidIdentifier(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_returns_newest_first(service: TestService) {
    let first = service
        .create(CreateTaskRequest::new("Primera"))
        .await
        .expect("creation should succeed");
    let second = service
        .create(CreateTaskRequest::new("Segunda"))
        .await
        .expect("creation should succeed");

    let tasks = service.list().await.expect("list should succeed");
    let ids: Vec<_> = tasks.iter().map(|task| task.id()).collect();
    assert_eq!(ids, vec![second.id(), first.id()]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn store_health_reports_connected_store(service: TestService) {
    assert_eq!(service.store_health().await, StoreHealth::Connected);
}

#[tokio::test(flavor = "multi_thread")]
async fn store_failure_surfaces_as_store_error() {
    let mut repository = MockTaskRepository::new();
    repository.expect_find_all().returning(|| {
        Err(TaskRepositoryError::persistence(std::io::Error::other(
            "connection refused",
        )))
    });

    let failing = TaskRecordService::new(Arc::new(repository), Arc::new(DefaultClock));
    let result = failing.list().await;
    assert!(matches!(result, Err(TaskServiceError::Store(_))));
}

#[tokio::test(flavor = "multi_thread")]
async fn store_health_reports_disconnected_store() {
    let mut repository = MockTaskRepository::new();
    repository.expect_ping().returning(|| {
        Err(TaskRepositoryError::persistence(std::io::Error::other(
            "connection refused",
        )))
    });

    let failing = TaskRecordService::new(Arc::new(repository), Arc::new(DefaultClock));
    assert_eq!(failing.store_health().await, StoreHealth::Disconnected);
}
