mod helpers;

use helpers::*;

use accessdesk::domain::errors::DomainError;
use accessdesk::models::{Permission, RoleDraft, UserDraft, UserStatus};
use accessdesk::services::{
    Confirmation, DeleteOutcome, RoleAdminService, SaveError, UserAdminService,
};
use std::sync::Arc;

#[tokio::test]
async fn test_invalid_draft_issues_no_data_service_calls() {
    let recorder = Arc::new(RecordingStore::new());
    let service = UserAdminService::new(recorder.clone());

    let result = service.save(&user_draft("ab", "bad", "")).await;

    match result {
        Err(SaveError::Validation(errors)) => assert_eq!(errors.len(), 3),
        other => panic!("expected validation failure, got {:?}", other.map(|u| u.id)),
    }
    assert!(recorder.calls().await.is_empty());
}

#[tokio::test]
async fn test_valid_draft_without_id_creates() {
    let recorder = Arc::new(RecordingStore::new());
    let service = UserAdminService::new(recorder.clone());

    let saved = service
        .save(&user_draft("alice", "alice@company.com", "Viewer"))
        .await
        .unwrap();

    assert!(!saved.id.is_empty());
    assert_eq!(recorder.calls().await, vec!["create_user"]);
}

#[tokio::test]
async fn test_valid_draft_with_id_updates() {
    let recorder = Arc::new(RecordingStore::new());
    let service = UserAdminService::new(recorder.clone());

    let mut draft = user_draft("alice", "alice@company.com", "Viewer");
    draft.id = Some("u1".to_string());
    draft.status = UserStatus::Inactive;

    let saved = service.save(&draft).await.unwrap();

    assert_eq!(saved.id, "u1");
    assert_eq!(saved.status, UserStatus::Inactive);
    assert_eq!(recorder.calls().await, vec!["update_user"]);
}

#[tokio::test]
async fn test_update_of_missing_user_surfaces_not_found() {
    let store = Arc::new(seeded_store());
    let service = UserAdminService::new(store);

    let mut draft = user_draft("ghost", "ghost@company.com", "Viewer");
    draft.id = Some("no-such-id".to_string());

    let result = service.save(&draft).await;
    assert!(matches!(
        result,
        Err(SaveError::Store(DomainError::NotFound(_)))
    ));
}

#[tokio::test]
async fn test_save_then_reload_reflects_new_record() {
    let store = Arc::new(seeded_store());
    let service = UserAdminService::new(store);

    let saved = service
        .save(&user_draft("carol", "carol@company.com", "Editor"))
        .await
        .unwrap();

    let users = service.load().await.unwrap();
    assert_eq!(users.len(), 3);
    assert_eq!(users[2], saved);
}

#[tokio::test]
async fn test_declined_delete_issues_no_calls_and_no_mutation() {
    let recorder = Arc::new(RecordingStore::new());
    let service = UserAdminService::new(recorder.clone());

    let outcome = service.delete("u1", Confirmation::Declined).await.unwrap();

    assert_eq!(outcome, DeleteOutcome::Declined);
    assert!(recorder.calls().await.is_empty());
}

#[tokio::test]
async fn test_confirmed_delete_removes_record() {
    let store = Arc::new(seeded_store());
    let service = UserAdminService::new(store);

    let users = service.load().await.unwrap();
    let outcome = service
        .delete(&users[0].id, Confirmation::Confirmed)
        .await
        .unwrap();

    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert_eq!(service.load().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_confirmed_delete_of_missing_id_reports_missing() {
    let store = Arc::new(seeded_store());
    let service = UserAdminService::new(store);

    let outcome = service
        .delete("no-such-id", Confirmation::Confirmed)
        .await
        .unwrap();

    assert_eq!(outcome, DeleteOutcome::Missing);
    assert_eq!(service.load().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_nameless_role_issues_no_data_service_calls() {
    let recorder = Arc::new(RecordingStore::new());
    let service = RoleAdminService::new(recorder.clone());

    let result = service.save(&RoleDraft::blank()).await;

    assert!(matches!(result, Err(SaveError::Validation(_))));
    assert!(recorder.calls().await.is_empty());
}

#[tokio::test]
async fn test_named_role_saves_through_service() {
    let recorder = Arc::new(RecordingStore::new());
    let service = RoleAdminService::new(recorder.clone());

    let mut draft = RoleDraft::blank();
    draft.name = "Moderator".to_string();
    draft.toggle_permission(Permission::Read);

    let saved = service.save(&draft).await.unwrap();

    assert_eq!(saved.name, "Moderator");
    assert!(saved.permissions.contains(&Permission::Read));
    assert_eq!(recorder.calls().await, vec!["create_role"]);
}

#[tokio::test]
async fn test_edit_draft_round_trip() {
    let store = Arc::new(seeded_store());
    let service = UserAdminService::new(store);

    let users = service.load().await.unwrap();
    let mut draft = UserDraft::edit(&users[1]);
    draft.role = "Viewer".to_string();

    let saved = service.save(&draft).await.unwrap();
    assert_eq!(saved.id, users[1].id);

    let after = service.load().await.unwrap();
    assert_eq!(after[1].role, "Viewer");
    assert_eq!(after[1].username, "john_doe");
}
