/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod notification;
pub mod notification_recipient;
pub mod project;
pub mod task;
pub mod user;
