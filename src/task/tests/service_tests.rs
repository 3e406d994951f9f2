//! Service orchestration tests over the in-memory repository.

use std::sync::Arc;

use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Priority, Status, Task, TaskDraft, TaskId, TaskPatchDraft},
    ports::{MockTaskRepository, TaskRepositoryError},
    services::{TaskCrudError, TaskCrudService},
};
use rstest::{fixture, rstest};

type TestService = TaskCrudService<InMemoryTaskRepository>;

#[fixture]
fn service() -> TestService {
    TaskCrudService::new(Arc::new(InMemoryTaskRepository::new()))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_persists_and_is_retrievable(service: TestService) {
    let draft = TaskDraft::new("Buy milk")
        .with_description("two litres")
        .with_priority("high");

    let created = service.create(&draft).await.expect("creation should succeed");
    let fetched = service
        .get(created.id())
        .await
        .expect("lookup should succeed");

    assert_eq!(fetched, Some(created.clone()));
    assert_eq!(created.title(), "Buy milk");
    assert_eq!(created.description(), "two litres");
    assert_eq!(created.priority(), Priority::High);
    assert_eq!(created.status(), Status::Pending);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_creation_persists_nothing(service: TestService) {
    let result = service.create(&TaskDraft::new("   ")).await;

    assert!(matches!(result, Err(TaskCrudError::Domain(_))));
    let tasks = service.list().await.expect("list should succeed");
    assert!(tasks.is_empty(), "no task may be persisted on rejection");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn invalid_priority_is_rejected_before_the_store(service: TestService) {
    let result = service
        .create(&TaskDraft::new("Buy milk").with_priority("urgent"))
        .await;

    assert!(matches!(result, Err(TaskCrudError::Domain(_))));
    let tasks = service.list().await.expect("list should succeed");
    assert!(tasks.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_preserves_insertion_order(service: TestService) {
    for title in ["first", "second", "third"] {
        service
            .create(&TaskDraft::new(title))
            .await
            .expect("creation should succeed");
    }

    let tasks = service.list().await.expect("list should succeed");
    let titles: Vec<&str> = tasks.iter().map(Task::title).collect();
    assert_eq!(titles, ["first", "second", "third"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_only_update_preserves_every_other_field(service: TestService) {
    let created = service
        .create(
            &TaskDraft::new("Buy milk")
                .with_description("two litres")
                .with_priority("low"),
        )
        .await
        .expect("creation should succeed");

    let patch = TaskPatchDraft::default().with_status("completed");
    let updated = service
        .update(created.id(), &patch)
        .await
        .expect("update should succeed")
        .expect("task should exist");

    assert_eq!(updated.id(), created.id());
    assert_eq!(updated.created_at(), created.created_at());
    assert_eq!(updated.title(), "Buy milk");
    assert_eq!(updated.description(), "two litres");
    assert_eq!(updated.priority(), Priority::Low);
    assert_eq!(updated.status(), Status::Completed);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_of_unknown_id_is_absence_not_an_error(service: TestService) {
    let patch = TaskPatchDraft::default().with_status("completed");
    let updated = service
        .update(TaskId::new(), &patch)
        .await
        .expect("update should succeed");
    assert_eq!(updated, None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_rejects_invalid_fields_without_touching_the_task(service: TestService) {
    let created = service
        .create(&TaskDraft::new("Buy milk"))
        .await
        .expect("creation should succeed");

    let result = service
        .update(created.id(), &TaskPatchDraft::default().with_status("done"))
        .await;
    assert!(matches!(result, Err(TaskCrudError::Domain(_))));

    let fetched = service
        .get(created.id())
        .await
        .expect("lookup should succeed")
        .expect("task should exist");
    assert_eq!(fetched.status(), Status::Pending);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_and_second_delete_reports_absence(service: TestService) {
    let created = service
        .create(&TaskDraft::new("Buy milk"))
        .await
        .expect("creation should succeed");

    let removed = service
        .delete(created.id())
        .await
        .expect("delete should succeed");
    assert!(removed);

    let fetched = service
        .get(created.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(fetched, None);

    let removed_again = service
        .delete(created.id())
        .await
        .expect("delete should succeed");
    assert!(!removed_again, "second delete reports absence");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_surfaces_repository_failures() {
    let mut repository = MockTaskRepository::new();
    repository.expect_create().returning(|_| {
        Err(TaskRepositoryError::persistence(std::io::Error::other(
            "store offline",
        )))
    });
    let service = TaskCrudService::new(Arc::new(repository));

    let result = service.create(&TaskDraft::new("Buy milk")).await;
    assert!(matches!(result, Err(TaskCrudError::Repository(_))));
}
