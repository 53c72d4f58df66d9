/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod authorization;
pub mod endpoints;
pub mod error;

use anyhow::{Context, Result};
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post, put};
use axum::{Router, middleware};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracker_core::types::ServerState;

pub fn create_router(state: Arc<ServerState>) -> Result<Router> {
    let origin: HeaderValue = state
        .cli
        .serve_url
        .parse()
        .context("Invalid serve url for CORS")?;

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::exact(origin))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([AUTHORIZATION, ACCEPT, CONTENT_TYPE]);

    let api = Router::new()
        .route("/users", get(endpoints::users::get_users))
        .route(
            "/users/{id}",
            get(endpoints::users::get_user_by_id).put(endpoints::users::put_user),
        )
        .route("/projects", post(endpoints::projects::post_project))
        .route(
            "/projects/{id}",
            axum::routing::delete(endpoints::projects::delete_project_by_id),
        )
        .route(
            "/tasks",
            get(endpoints::tasks::get_tasks).post(endpoints::tasks::post_task),
        )
        .route(
            "/tasks/{id}",
            put(endpoints::tasks::put_task).delete(endpoints::tasks::delete_task_by_id),
        )
        .route(
            "/notifications",
            get(endpoints::notifications::get_notifications),
        )
        .route(
            "/notifications/{id}/read",
            put(endpoints::notifications::put_notification_read),
        )
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            authorization::authorize,
        ))
        .route("/projects", get(endpoints::projects::get_projects))
        .route("/register", post(endpoints::auth::post_register))
        .route("/login", post(endpoints::auth::post_login))
        .route("/logout", post(endpoints::auth::post_logout))
        .route("/health", get(endpoints::get_health));

    Ok(Router::new()
        .nest("/api", api)
        .fallback(endpoints::handle_404)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

pub async fn serve_web(state: Arc<ServerState>) -> Result<()> {
    let server_url = format!("{}:{}", state.cli.ip, state.cli.port);
    let app = create_router(Arc::clone(&state))?;

    let listener = tokio::net::TcpListener::bind(&server_url)
        .await
        .with_context(|| format!("Failed to bind {}", server_url))?;

    tracing::info!("Listening on {}", server_url);
    axum::serve(listener, app).await.context("Server error")
}
