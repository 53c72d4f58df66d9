/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use std::ops::RangeInclusive;

pub const PORT_RANGE: RangeInclusive<usize> = 1..=65535;

pub const UNASSIGNED: &str = "Unassigned";
pub const UNKNOWN_PROJECT: &str = "Unknown Project";
pub const UNKNOWN_ACTOR: &str = "Unknown";
pub const SYSTEM_ACTOR: &str = "System";

pub const RESOLUTION_DONE: &str = "Done";
pub const RESOLUTION_UNRESOLVED: &str = "Unresolved";

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_LIMIT: u64 = 10;

pub const DEFAULT_AVATAR_COLOR: &str = "#1F2E4D";
pub const DEFAULT_PROJECT_NAME: &str = "My Kanban Project";
pub const DEFAULT_PROJECT_KEY: &str = "KAN";
pub const DEFAULT_TASK_TITLE: &str = "Create Task Management Software";
pub const DEFAULT_TASK_DUE_DAYS: i64 = 2;
