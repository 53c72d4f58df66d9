/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for the overdue scanner

mod common;

use chrono::Utc;
use common::*;
use entity::notification::NotificationType;
use entity::task::TaskStatus;
use sea_orm::{DatabaseBackend, DbErr, MockDatabase};
use tracker_core::overdue::scan_overdue;
use tracker_core::types::*;
use uuid::Uuid;

#[tokio::test]
async fn test_scan_creates_missing_due_notifications() {
    let project_id = Uuid::now_v7();
    let setup = task(project_id, "KAN-1", "Setup", TaskStatus::ToDo);
    let deploy = task(project_id, "KAN-2", "Deploy", TaskStatus::InProgress);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![setup, deploy]])
        .append_query_results([Vec::<MNotification>::new()])
        .append_query_results([vec![notification(
            NotificationType::Due,
            "Task KAN-1: \"Setup\" is overdue",
        )]])
        .append_query_results([vec![notification(
            NotificationType::Due,
            "Task KAN-2: \"Deploy\" is overdue",
        )]])
        .into_connection();

    let created = scan_overdue(create_mock_state(db), Utc::now()).await.unwrap();

    assert_eq!(created, 1);
}

#[tokio::test]
async fn test_scan_is_idempotent() {
    let project_id = Uuid::now_v7();
    let setup = task(project_id, "KAN-1", "Setup", TaskStatus::ToDo);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![setup]])
        .append_query_results([vec![notification(
            NotificationType::Due,
            "Task KAN-1: \"Setup\" is overdue",
        )]])
        .into_connection();

    let created = scan_overdue(create_mock_state(db), Utc::now()).await.unwrap();

    assert_eq!(created, 0);
}

#[tokio::test]
async fn test_scan_without_overdue_tasks() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<MTask>::new()])
        .into_connection();

    let created = scan_overdue(create_mock_state(db), Utc::now()).await.unwrap();

    assert_eq!(created, 0);
}

#[tokio::test]
async fn test_scan_swallows_creation_failures() {
    let project_id = Uuid::now_v7();
    let setup = task(project_id, "KAN-1", "Setup", TaskStatus::ToDo);

    // The insert finds no prepared result and fails.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![setup]])
        .append_query_results([Vec::<MNotification>::new()])
        .into_connection();

    let created = scan_overdue(create_mock_state(db), Utc::now()).await.unwrap();

    assert_eq!(created, 0);
}

#[tokio::test]
async fn test_scan_continues_after_failed_lookup() {
    let project_id = Uuid::now_v7();
    let setup = task(project_id, "KAN-1", "Setup", TaskStatus::ToDo);
    let deploy = task(project_id, "KAN-2", "Deploy", TaskStatus::InProgress);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![setup, deploy]])
        .append_query_errors([DbErr::Custom("connection reset".to_string())])
        .append_query_results([Vec::<MNotification>::new()])
        .append_query_results([vec![notification(
            NotificationType::Due,
            "Task KAN-2: \"Deploy\" is overdue",
        )]])
        .into_connection();

    let created = scan_overdue(create_mock_state(db), Utc::now()).await.unwrap();

    assert_eq!(created, 1);
}
