/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

#![allow(dead_code)]

use entity::notification::NotificationType;
use entity::project::ProjectType;
use entity::task::{Issues, TaskPriority, TaskStatus};
use entity::user::UserRole;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tracker_core::types::*;
use uuid::Uuid;

pub fn create_mock_cli() -> Cli {
    Cli {
        log_level: "debug".to_string(),
        ip: "127.0.0.1".to_string(),
        port: 3001,
        serve_url: "http://localhost:5173".to_string(),
        database_url: Some("mock://test".to_string()),
        database_url_file: None,
        jwt_secret_file: "test_jwt".to_string(),
        token_expiry_days: 30,
        seed: false,
        admin_email: None,
        admin_name: "Administrator".to_string(),
        admin_password_file: None,
        sentry_dsn: None,
    }
}

pub fn create_mock_state(db: DatabaseConnection) -> Arc<ServerState> {
    Arc::new(ServerState {
        db,
        cli: create_mock_cli(),
    })
}

pub fn project(name: &str, key: &str) -> MProject {
    MProject {
        id: Uuid::now_v7(),
        name: name.to_string(),
        key: key.to_string(),
        kind: ProjectType::Software,
        lead: Some("Admin".to_string()),
        icon_color: None,
    }
}

pub fn user(name: &str) -> MUser {
    MUser {
        id: Uuid::now_v7(),
        email: format!("{}@example.com", name.to_lowercase()),
        password: "hashed".to_string(),
        name: name.to_string(),
        avatar_color: "#0052cc".to_string(),
        avatar_url: None,
        role: UserRole::Developer,
        last_login: None,
        last_logout: None,
    }
}

pub fn task(project_id: Uuid, key: &str, title: &str, status: TaskStatus) -> MTask {
    MTask {
        id: Uuid::now_v7(),
        key: key.to_string(),
        title: title.to_string(),
        description: None,
        assignee: "Unassigned".to_string(),
        assignee_id: None,
        reporter: Some("Admin".to_string()),
        priority: TaskPriority::Medium,
        status,
        resolution: "Unresolved".to_string(),
        created: None,
        updated: None,
        start_date: None,
        due_date: Some("2020-01-01T00:00:00.000Z".to_string()),
        parent_id: None,
        expanded: 0,
        project_id,
        issues: Issues::default(),
    }
}

pub fn notification(kind: NotificationType, message: &str) -> MNotification {
    MNotification {
        id: Uuid::now_v7(),
        message: message.to_string(),
        kind,
        is_read: 0,
        created_at: "2026-10-19T08:00:00.000Z".to_string(),
    }
}

/// SQL of every statement the mock connection received, in order.
pub fn executed_sql(state: Arc<ServerState>) -> Vec<String> {
    Arc::try_unwrap(state)
        .unwrap()
        .db
        .into_transaction_log()
        .iter()
        .flat_map(|t| t.statements().iter().map(|s| s.sql.clone()))
        .collect()
}
