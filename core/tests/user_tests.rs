/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for the user listing

mod common;

use chrono::Utc;
use common::*;
use sea_orm::{DatabaseBackend, MockDatabase, Value};
use std::collections::BTreeMap;
use tracker_core::users::list_users;

#[tokio::test]
async fn test_list_users_counts_overdue_tasks() {
    let alice = user("Alice");
    let bob = user("Bob");

    let due = BTreeMap::from([
        ("assignee_id", Value::Uuid(Some(Box::new(alice.id)))),
        ("due_count", Value::BigInt(Some(2))),
    ]);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![alice.clone(), bob.clone()]])
        .append_query_results([vec![due]])
        .into_connection();
    let state = create_mock_state(db);

    let users = list_users(state.clone(), Utc::now()).await.unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].user.name, "Alice");
    assert_eq!(users[0].due_count, 2);
    assert_eq!(users[1].user.name, "Bob");
    assert_eq!(users[1].due_count, 0);

    let sql = executed_sql(state);
    assert!(sql[0].contains(r#"ORDER BY "user"."name" ASC"#));
    assert!(sql[1].contains(r#"GROUP BY "task"."assignee_id""#));
}

#[tokio::test]
async fn test_list_users_serializes_due_count() {
    let alice = user("Alice");

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![alice]])
        .append_query_results([Vec::<BTreeMap<&str, Value>>::new()])
        .into_connection();

    let users = list_users(create_mock_state(db), Utc::now()).await.unwrap();
    let json = serde_json::to_value(&users[0]).unwrap();

    assert_eq!(json["name"], "Alice");
    assert_eq!(json["dueCount"], 0);
}
