//! Domain-focused tests for payload validation and patch application.

use crate::task::domain::{Priority, Status, TaskDomainError, TaskDraft, TaskPatchDraft};
use mockable::DefaultClock;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case("low", Priority::Low)]
#[case("medium", Priority::Medium)]
#[case("high", Priority::High)]
#[case("  HIGH  ", Priority::High)]
fn priority_parses_canonical_and_noisy_values(#[case] raw: &str, #[case] expected: Priority) {
    assert_eq!(Priority::try_from(raw), Ok(expected));
}

#[rstest]
fn priority_rejects_unknown_values() {
    assert_eq!(
        Priority::try_from("urgent"),
        Err(TaskDomainError::InvalidPriority("urgent".to_owned()))
    );
}

#[rstest]
#[case("pending", Status::Pending)]
#[case("in-progress", Status::InProgress)]
#[case("completed", Status::Completed)]
#[case(" In-Progress ", Status::InProgress)]
fn status_parses_canonical_and_noisy_values(#[case] raw: &str, #[case] expected: Status) {
    assert_eq!(Status::try_from(raw), Ok(expected));
}

#[rstest]
fn status_rejects_unknown_values() {
    assert_eq!(
        Status::try_from("done"),
        Err(TaskDomainError::InvalidStatus("done".to_owned()))
    );
}

#[rstest]
fn draft_validation_trims_title_and_applies_defaults() {
    let record = TaskDraft::new("  Buy milk  ")
        .validate()
        .expect("draft should validate");

    assert_eq!(record.title(), "Buy milk");
    assert_eq!(record.description(), "");
    assert_eq!(record.priority(), Priority::Medium);
    assert_eq!(record.status(), Status::Pending);
}

#[rstest]
#[case("")]
#[case("   ")]
fn draft_validation_rejects_blank_titles(#[case] title: &str) {
    assert_eq!(
        TaskDraft::new(title).validate(),
        Err(TaskDomainError::EmptyTitle)
    );
}

#[rstest]
fn draft_validation_rejects_invalid_priority() {
    let result = TaskDraft::new("Buy milk").with_priority("urgent").validate();
    assert_eq!(
        result,
        Err(TaskDomainError::InvalidPriority("urgent".to_owned()))
    );
}

#[rstest]
fn draft_validation_rejects_invalid_status() {
    let result = TaskDraft::new("Buy milk").with_status("done").validate();
    assert_eq!(result, Err(TaskDomainError::InvalidStatus("done".to_owned())));
}

#[rstest]
fn draft_validation_passes_description_through() {
    let record = TaskDraft::new("Buy milk")
        .with_description("two litres, semi-skimmed")
        .with_priority("high")
        .with_status("in-progress")
        .validate()
        .expect("draft should validate");

    assert_eq!(record.description(), "two litres, semi-skimmed");
    assert_eq!(record.priority(), Priority::High);
    assert_eq!(record.status(), Status::InProgress);
}

#[rstest]
fn default_draft_mirrors_a_fresh_form() {
    let draft = TaskDraft::default();

    assert_eq!(draft.title(), "");
    assert_eq!(draft.description(), "");
    assert_eq!(draft.priority(), Some("medium"));
    assert_eq!(draft.status(), Some("pending"));
}

#[rstest]
fn patch_validation_rejects_blank_replacement_title() {
    let result = TaskPatchDraft::default().with_title("   ").validate();
    assert_eq!(result, Err(TaskDomainError::EmptyTitle));
}

#[rstest]
fn patch_validation_keeps_absent_fields_absent() {
    let patch = TaskPatchDraft::default()
        .with_status("completed")
        .validate()
        .expect("patch should validate");

    assert_eq!(patch.title(), None);
    assert_eq!(patch.description(), None);
    assert_eq!(patch.priority(), None);
    assert_eq!(patch.status(), Some(Status::Completed));
}

#[rstest]
fn patch_application_preserves_untouched_fields() {
    let record = TaskDraft::new("Buy milk")
        .with_description("two litres")
        .with_priority("high")
        .validate()
        .expect("draft should validate");
    let mut task = crate::task::domain::Task::create(&record, &DefaultClock);
    let before_id = task.id();
    let before_created = task.created_at();

    let patch = TaskPatchDraft::default()
        .with_status("completed")
        .validate()
        .expect("patch should validate");
    task.apply(&patch);

    assert_eq!(task.id(), before_id);
    assert_eq!(task.created_at(), before_created);
    assert_eq!(task.title(), "Buy milk");
    assert_eq!(task.description(), "two litres");
    assert_eq!(task.priority(), Priority::High);
    assert_eq!(task.status(), Status::Completed);
}

#[rstest]
fn task_serialises_to_the_wire_shape() {
    let record = TaskDraft::new("Buy milk")
        .with_status("in-progress")
        .validate()
        .expect("draft should validate");
    let task = crate::task::domain::Task::create(&record, &DefaultClock);

    let value = serde_json::to_value(&task).expect("task should serialise");
    assert_eq!(value.get("title"), Some(&json!("Buy milk")));
    assert_eq!(value.get("priority"), Some(&json!("medium")));
    assert_eq!(value.get("status"), Some(&json!("in-progress")));
    assert!(value.get("id").is_some(), "wire shape carries id");
    assert!(
        value.get("createdAt").is_some(),
        "wire shape carries createdAt in camel case"
    );
}
