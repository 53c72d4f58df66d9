/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for task mutation and its notifications

mod common;

use common::*;
use entity::notification::NotificationType;
use entity::task::TaskStatus;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
use tracker_core::projects::delete_project;
use tracker_core::tasks::*;
use tracker_core::types::*;
use uuid::Uuid;

#[tokio::test]
async fn test_update_missing_task() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<MTask>::new()])
        .into_connection();

    let result = update_task(create_mock_state(db), Uuid::now_v7(), TaskPatch::default())
        .await
        .unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_update_to_done_broadcasts_completion() {
    let kanban = project("Kanban", "KAN");
    let previous = task(kanban.id, "KAN-1", "Login page", TaskStatus::InProgress);
    let mut updated = previous.clone();
    updated.status = TaskStatus::Done;

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![previous.clone()]])
        .append_query_results([vec![updated]])
        .append_query_results([vec![kanban]])
        .append_query_results([vec![notification(NotificationType::WorkCompleted, "")]])
        .into_connection();

    let patch = TaskPatch {
        status: Some(TaskStatus::Done),
        modified_by: Some("Admin".to_string()),
        ..Default::default()
    };

    let result = update_task(create_mock_state(db), previous.id, patch)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(result.task.status, TaskStatus::Done);
    assert_eq!(result.notices.len(), 1);
    assert_eq!(result.notices[0].kind, NotificationType::WorkCompleted);
    assert!(result.notices[0].is_broadcast());
    assert!(
        result.notices[0]
            .message
            .starts_with("Project 'Kanban': Work 'Login page' is completed by Admin on ")
    );
}

#[tokio::test]
async fn test_resaving_done_emits_nothing() {
    let kanban = project("Kanban", "KAN");
    let previous = task(kanban.id, "KAN-1", "Login page", TaskStatus::Done);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![previous.clone()]])
        .append_query_results([vec![previous.clone()]])
        .append_query_results([vec![kanban]])
        .into_connection();

    let patch = TaskPatch {
        status: Some(TaskStatus::Done),
        ..Default::default()
    };

    let result = update_task(create_mock_state(db), previous.id, patch)
        .await
        .unwrap()
        .unwrap();

    assert!(result.notices.is_empty());
}

#[tokio::test]
async fn test_assignment_targets_modifier_and_assignee() {
    let kanban = project("Kanban", "KAN");
    let previous = task(kanban.id, "KAN-1", "Login page", TaskStatus::ToDo);
    let alice = user("Alice");
    let modifier = Uuid::now_v7();

    let mut updated = previous.clone();
    updated.assignee = "Alice".to_string();
    updated.assignee_id = Some(alice.id);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![previous.clone()]])
        .append_query_results([vec![alice.clone()]])
        .append_query_results([vec![updated]])
        .append_query_results([vec![kanban]])
        .append_query_results([vec![notification(NotificationType::Assignment, "")]])
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 2,
        }])
        .into_connection();

    let patch = TaskPatch {
        assignee: Some("Alice".to_string()),
        modified_by: Some("Admin".to_string()),
        modifier_id: Some(modifier),
        ..Default::default()
    };

    let result = update_task(create_mock_state(db), previous.id, patch)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(result.task.assignee_id, Some(alice.id));
    assert_eq!(result.notices.len(), 1);
    assert_eq!(result.notices[0].kind, NotificationType::Assignment);
    assert_eq!(result.notices[0].recipients, vec![modifier, alice.id]);
    assert!(result.notices[0].message.starts_with(
        "Project 'Kanban': Task 'Login page' has been assigned to Alice by Admin on "
    ));
}

#[tokio::test]
async fn test_unassigning_emits_nothing() {
    let kanban = project("Kanban", "KAN");
    let mut previous = task(kanban.id, "KAN-1", "Login page", TaskStatus::ToDo);
    previous.assignee = "Alice".to_string();

    let mut updated = previous.clone();
    updated.assignee = "Unassigned".to_string();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![previous.clone()]])
        .append_query_results([vec![updated]])
        .append_query_results([vec![kanban]])
        .into_connection();

    let patch = TaskPatch {
        assignee: Some("Unassigned".to_string()),
        modifier_id: Some(Uuid::now_v7()),
        ..Default::default()
    };

    let result = update_task(create_mock_state(db), previous.id, patch)
        .await
        .unwrap()
        .unwrap();

    assert!(result.notices.is_empty());
}

#[tokio::test]
async fn test_notification_failure_keeps_update() {
    let previous = task(Uuid::now_v7(), "KAN-1", "Login page", TaskStatus::ToDo);
    let mut updated = previous.clone();
    updated.status = TaskStatus::Done;

    // No project and no prepared notification insert.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![previous.clone()]])
        .append_query_results([vec![updated]])
        .append_query_results([Vec::<MProject>::new()])
        .into_connection();

    let patch = TaskPatch {
        status: Some(TaskStatus::Done),
        ..Default::default()
    };

    let result = update_task(create_mock_state(db), previous.id, patch)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(result.task.status, TaskStatus::Done);
    assert!(result.notices[0].message.starts_with(
        "Project 'Unknown Project': Work 'Login page' is completed by Unknown on "
    ));
}

#[tokio::test]
async fn test_empty_modifier_name_reads_unknown() {
    let kanban = project("Kanban", "KAN");
    let previous = task(kanban.id, "KAN-1", "Login page", TaskStatus::ToDo);
    let mut updated = previous.clone();
    updated.status = TaskStatus::Done;

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![previous.clone()]])
        .append_query_results([vec![updated]])
        .append_query_results([vec![kanban]])
        .append_query_results([vec![notification(NotificationType::WorkCompleted, "")]])
        .into_connection();

    let patch = TaskPatch {
        status: Some(TaskStatus::Done),
        modified_by: Some(String::new()),
        ..Default::default()
    };

    let result = update_task(create_mock_state(db), previous.id, patch)
        .await
        .unwrap()
        .unwrap();

    assert!(result.notices[0].message.starts_with(
        "Project 'Kanban': Work 'Login page' is completed by Unknown on "
    ));
}

#[tokio::test]
async fn test_resaving_renamed_assignee_emits_nothing() {
    let kanban = project("Kanban", "KAN");
    let mut alice = user("Alice");
    alice.name = "Alice Smith".to_string();

    let mut previous = task(kanban.id, "KAN-1", "Login page", TaskStatus::ToDo);
    previous.assignee = "Alice".to_string();
    previous.assignee_id = Some(alice.id);

    let mut updated = previous.clone();
    updated.assignee = "Alice Smith".to_string();

    // A name lookup for the requested assignee would receive the updated
    // task row and fail.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![previous.clone()]])
        .append_query_results([vec![alice.clone()]])
        .append_query_results([vec![updated]])
        .append_query_results([vec![kanban]])
        .into_connection();

    let patch = TaskPatch {
        assignee: Some("Alice Smith".to_string()),
        modifier_id: Some(Uuid::now_v7()),
        ..Default::default()
    };

    let result = update_task(create_mock_state(db), previous.id, patch)
        .await
        .unwrap()
        .unwrap();

    assert!(result.notices.is_empty());
    assert_eq!(result.task.assignee, "Alice Smith");
    assert_eq!(result.task.assignee_id, Some(alice.id));
}

#[tokio::test]
async fn test_update_writes_back_renamed_assignee() {
    let kanban = project("Kanban", "KAN");
    let mut alice = user("Alice");
    alice.name = "Alice Smith".to_string();

    let mut previous = task(kanban.id, "KAN-1", "Login page", TaskStatus::ToDo);
    previous.assignee = "Alice".to_string();
    previous.assignee_id = Some(alice.id);

    let mut updated = previous.clone();
    updated.assignee = "Alice Smith".to_string();
    updated.status = TaskStatus::InProgress;

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![previous.clone()]])
        .append_query_results([vec![alice]])
        .append_query_results([vec![updated]])
        .append_query_results([vec![kanban]])
        .into_connection();
    let state = create_mock_state(db);

    let patch = TaskPatch {
        status: Some(TaskStatus::InProgress),
        ..Default::default()
    };

    let result = update_task(state.clone(), previous.id, patch)
        .await
        .unwrap()
        .unwrap();

    assert!(result.notices.is_empty());

    let sql = executed_sql(state);
    let update = sql
        .iter()
        .find(|s| s.starts_with(r#"UPDATE "task""#))
        .unwrap();
    assert!(update.contains(r#""assignee" = $1"#));
    assert!(update.contains(r#""status" = $2"#));
}

#[tokio::test]
async fn test_create_task_with_key() {
    let kanban = project("Kanban", "KAN");
    let created = task(kanban.id, "KAN-4", "Write docs", TaskStatus::ToDo);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![created.clone()]])
        .append_query_results([vec![notification(NotificationType::WorkAdded, "")]])
        .into_connection();

    let new_task = NewTask {
        key: Some("KAN-4".to_string()),
        title: Some("Write docs".to_string()),
        reporter: Some("Admin".to_string()),
        project_id: Some(kanban.id),
        ..Default::default()
    };

    let task = create_task(create_mock_state(db), &kanban, new_task)
        .await
        .unwrap();

    assert_eq!(task.key, "KAN-4");
    assert_eq!(task.project_id, kanban.id);
}

#[tokio::test]
async fn test_list_refreshes_assignee_names() {
    let project_id = Uuid::now_v7();
    let mut renamed = user("Alice");
    renamed.name = "Alice Smith".to_string();

    let mut assigned = task(project_id, "KAN-1", "Login page", TaskStatus::ToDo);
    assigned.assignee = "Alice".to_string();
    assigned.assignee_id = Some(renamed.id);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![assigned]])
        .append_query_results([vec![renamed]])
        .into_connection();

    let filter = TaskFilter {
        project_id: Some(project_id),
        assignee: None,
    };

    let tasks = list_tasks(create_mock_state(db), &filter).await.unwrap();

    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].assignee, "Alice Smith");
}

#[tokio::test]
async fn test_deleting_project_keeps_tasks() {
    let kanban = project("Kanban", "KAN");
    let orphan = task(kanban.id, "KAN-1", "Login page", TaskStatus::ToDo);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![kanban.clone()]])
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .append_query_results([vec![orphan.clone()]])
        .into_connection();
    let state = create_mock_state(db);

    let deleted = delete_project(state.clone(), kanban.id).await.unwrap();
    assert!(deleted.is_some());

    let filter = TaskFilter {
        project_id: Some(kanban.id),
        assignee: None,
    };
    let tasks = list_tasks(state, &filter).await.unwrap();

    assert_eq!(tasks, vec![orphan]);
}

#[tokio::test]
async fn test_delete_missing_task() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<MTask>::new()])
        .into_connection();

    let deleted = delete_task(create_mock_state(db), Uuid::now_v7(), None)
        .await
        .unwrap();

    assert!(deleted.is_none());
}
