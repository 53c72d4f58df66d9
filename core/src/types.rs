/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::input::{greater_than_zero, port_in_range};
use clap::Parser;
use entity::*;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(name = "Tracker", display_name = "Tracker", bin_name = "tracker-server", author = "Wavelens", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "TRACKER_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "TRACKER_IP", default_value = "127.0.0.1")]
    pub ip: String,
    #[arg(long, env = "TRACKER_PORT", value_parser = port_in_range, default_value_t = 3001)]
    pub port: u16,
    #[arg(long, env = "TRACKER_SERVE_URL", default_value = "http://localhost:5173")]
    pub serve_url: String,
    #[arg(long, env = "TRACKER_DATABASE_URL")]
    pub database_url: Option<String>,
    #[arg(long, env = "TRACKER_DATABASE_URL_FILE")]
    pub database_url_file: Option<String>,
    #[arg(long, env = "TRACKER_JWT_SECRET_FILE")]
    pub jwt_secret_file: String,
    #[arg(long, env = "TRACKER_TOKEN_EXPIRY_DAYS", value_parser = greater_than_zero::<i64>, default_value = "30")]
    pub token_expiry_days: i64,
    #[arg(long, env = "TRACKER_SEED", default_value = "true", action = clap::ArgAction::Set)]
    pub seed: bool,
    #[arg(long, env = "TRACKER_ADMIN_EMAIL")]
    pub admin_email: Option<String>,
    #[arg(long, env = "TRACKER_ADMIN_NAME", default_value = "Administrator")]
    pub admin_name: String,
    #[arg(long, env = "TRACKER_ADMIN_PASSWORD_FILE")]
    pub admin_password_file: Option<String>,
    #[arg(long, env = "TRACKER_SENTRY_DSN")]
    pub sentry_dsn: Option<String>,
}

#[derive(Debug)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub cli: Cli,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BaseResponse<T> {
    pub error: bool,
    pub message: T,
}

pub type ENotification = notification::Entity;
pub type ENotificationRecipient = notification_recipient::Entity;
pub type EProject = project::Entity;
pub type ETask = task::Entity;
pub type EUser = user::Entity;

pub type MNotification = notification::Model;
pub type MNotificationRecipient = notification_recipient::Model;
pub type MProject = project::Model;
pub type MTask = task::Model;
pub type MUser = user::Model;

pub type ANotification = notification::ActiveModel;
pub type ANotificationRecipient = notification_recipient::ActiveModel;
pub type AProject = project::ActiveModel;
pub type ATask = task::ActiveModel;
pub type AUser = user::ActiveModel;

pub type CNotification = notification::Column;
pub type CNotificationRecipient = notification_recipient::Column;
pub type CProject = project::Column;
pub type CTask = task::Column;
pub type CUser = user::Column;
