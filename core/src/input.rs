/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use rand::Rng;

use super::consts::*;

pub fn port_in_range(s: &str) -> Result<u16, String> {
    let port: usize = s
        .parse()
        .map_err(|_| format!("`{s}` is not a port number"))?;

    if PORT_RANGE.contains(&port) {
        Ok(port as u16)
    } else {
        Err(format!(
            "port not in range {}-{}",
            PORT_RANGE.start(),
            PORT_RANGE.end()
        ))
    }
}

pub fn greater_than_zero<
    T: std::str::FromStr + std::cmp::PartialOrd + std::fmt::Display + Default,
>(
    s: &str,
) -> Result<T, String> {
    let num: T = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid number", s))?;

    if num > T::default() {
        Ok(num)
    } else {
        Err(format!("`{}` is not larger than 0", s))
    }
}

pub fn load_secret(f: &str) -> String {
    let s = std::fs::read_to_string(f).unwrap_or_default();
    s.trim().replace(char::from(25), "")
}

/// Empty strings count as absent, matching how the browser client submits
/// untouched form fields.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

pub fn email_local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

pub fn random_avatar_color() -> String {
    let color: u32 = rand::rng().random_range(0..0x1000000);
    format!("#{:06x}", color)
}

/// Sequence number of a `{PROJECT_KEY}-{N}` task key, if the key belongs to
/// the project. Trailing garbage after the digits is ignored.
pub fn task_key_number(project_key: &str, key: &str) -> Option<u64> {
    if !key.starts_with(project_key) {
        return None;
    }

    let number = key.split('-').nth(1)?;
    let digits: String = number.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

pub fn next_task_key<'a>(project_key: &str, keys: impl IntoIterator<Item = &'a str>) -> String {
    let max = keys
        .into_iter()
        .filter_map(|key| task_key_number(project_key, key))
        .max()
        .unwrap_or(0);

    format!("{}-{}", project_key, max + 1)
}
