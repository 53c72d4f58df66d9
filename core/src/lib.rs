/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod consts;
pub mod database;
pub mod input;
pub mod messages;
pub mod notifications;
pub mod overdue;
pub mod projects;
pub mod rules;
pub mod seed;
pub mod tasks;
pub mod types;
pub mod users;

use anyhow::{Context, Result};
use clap::Parser;
use database::connect_db;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use types::*;

pub async fn init_state() -> Result<Arc<ServerState>> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).context("Invalid log level")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let db = connect_db(&cli).await?;
    let state = Arc::new(ServerState { db, cli });

    if state.cli.seed {
        seed::seed(Arc::clone(&state))
            .await
            .context("Failed to seed database")?;
    }

    Ok(state)
}
