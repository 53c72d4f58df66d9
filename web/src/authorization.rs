/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use axum::body::Body;
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode};
use sea_orm::EntityTrait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracker_core::input::load_secret;
use tracker_core::types::*;
use uuid::Uuid;

#[derive(Clone, Serialize, Deserialize)]
pub struct Claims {
    pub exp: usize,
    pub iat: usize,
    pub id: Uuid,
}

/// Resolves the bearer token to a user and stores it as a request
/// extension. A missing or malformed header is rejected with 403, an
/// invalid token or unknown user with 401.
pub async fn authorize(
    State(state): State<Arc<ServerState>>,
    mut req: Request,
    next: Next,
) -> WebResult<Response<Body>> {
    let auth_header = match req.headers().get(axum::http::header::AUTHORIZATION) {
        Some(header) => header
            .to_str()
            .map_err(|_| WebError::Forbidden("Authorization header empty".to_string()))?,
        None => {
            return Err(WebError::Forbidden(
                "Authorization header not found".to_string(),
            ));
        }
    };

    let mut header = auth_header.split_whitespace();

    let token = match (header.next(), header.next()) {
        (Some("Bearer"), Some(token)) => token.to_string(),
        _ => {
            return Err(WebError::Forbidden(
                "Invalid Authorization header".to_string(),
            ));
        }
    };

    let token_data = decode_jwt(Arc::clone(&state), &token)
        .map_err(|_| WebError::Unauthorized("Unable to decode token".to_string()))?;

    let current_user = EUser::find_by_id(token_data.claims.id)
        .one(&state.db)
        .await?
        .ok_or_else(|| WebError::Unauthorized("User not found".to_string()))?;

    req.extensions_mut().insert(current_user);
    Ok(next.run(req).await)
}

pub fn encode_jwt(state: Arc<ServerState>, id: Uuid) -> WebResult<String> {
    let now = Utc::now();
    let expire = Duration::days(state.cli.token_expiry_days);
    let exp: usize = (now + expire).timestamp() as usize;
    let iat: usize = now.timestamp() as usize;

    let claim = Claims { iat, exp, id };
    let secret = load_secret(&state.cli.jwt_secret_file);

    encode(
        &Header::default(),
        &claim,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map_err(|_| WebError::failed_to_generate_token())
}

pub fn decode_jwt(
    state: Arc<ServerState>,
    jwt: &str,
) -> Result<TokenData<Claims>, jsonwebtoken::errors::Error> {
    let secret = load_secret(&state.cli.jwt_secret_file);

    decode(
        jwt,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
}
