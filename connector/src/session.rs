/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::auth::SessionUser;
use crate::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

const KEY_USER: &str = "jira_user";
const KEY_ACTIVE_PROJECT: &str = "activeProjectId";
const KEY_CURRENT_VIEW: &str = "currentView";
const KEY_ACTIVE_TAB: &str = "activeTab";

/// Key-value storage confined to one namespace.
pub trait ScopedStorage {
    fn get(&self, key: &str) -> ConnectorResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> ConnectorResult<()>;
    fn remove(&mut self, key: &str) -> ConnectorResult<()>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl ScopedStorage for MemoryStorage {
    fn get(&self, key: &str) -> ConnectorResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> ConnectorResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> ConnectorResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// JSON file per namespace, by default under the user's config directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(namespace: &str) -> ConnectorResult<Self> {
        let mut path = dirs::config_dir()
            .ok_or_else(|| ConnectorError::Storage("Could not find configuration directory".to_string()))?;
        path.push("tracker");
        path.push(format!("{}.json", namespace));

        Ok(FileStorage { path })
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        FileStorage { path: path.into() }
    }

    fn load(&self) -> ConnectorResult<HashMap<String, String>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }

        let contents = fs::read_to_string(&self.path)
            .map_err(|e| ConnectorError::Storage(format!("Failed to read {}: {}", self.path.display(), e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| ConnectorError::Storage(format!("Failed to parse {}: {}", self.path.display(), e)))
    }

    fn save(&self, entries: &HashMap<String, String>) -> ConnectorResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| ConnectorError::Storage(e.to_string()))?;
        }

        let contents = serde_json::to_string_pretty(entries).map_err(|e| ConnectorError::Storage(e.to_string()))?;
        fs::write(&self.path, contents).map_err(|e| ConnectorError::Storage(e.to_string()))
    }
}

impl ScopedStorage for FileStorage {
    fn get(&self, key: &str) -> ConnectorResult<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> ConnectorResult<()> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    fn remove(&mut self, key: &str) -> ConnectorResult<()> {
        let mut entries = self.load()?;

        if entries.remove(key).is_some() {
            self.save(&entries)?;
        }

        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Project,
    Users,
    Notifications,
    Profile,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    List,
    Board,
    Summary,
    Calendar,
    Timeline,
}

/// Client session state. Loaded once at startup and written back on
/// every change through the setters below.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub user: Option<SessionUser>,
    pub active_project_id: Option<Uuid>,
    pub current_view: View,
    pub active_tab: Tab,
}

fn read_json<T: serde::de::DeserializeOwned>(storage: &impl ScopedStorage, key: &str) -> ConnectorResult<Option<T>> {
    let Some(raw) = storage.get(key)? else {
        return Ok(None);
    };

    // stored views are bare strings, the user is a JSON object
    let parsed = serde_json::from_str::<T>(&raw)
        .or_else(|_| serde_json::from_value::<T>(serde_json::Value::String(raw.clone())));

    match parsed {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            tracing::warn!("Ignoring unreadable session entry {}: {}", key, e);
            Ok(None)
        }
    }
}

fn write_plain<T: Serialize>(storage: &mut impl ScopedStorage, key: &str, value: &T) -> ConnectorResult<()> {
    let value = serde_json::to_value(value).map_err(|e| ConnectorError::Storage(e.to_string()))?;

    match value {
        serde_json::Value::String(s) => storage.set(key, &s),
        other => storage.set(key, &other.to_string()),
    }
}

impl AppState {
    pub fn load(storage: &impl ScopedStorage) -> ConnectorResult<Self> {
        Ok(AppState {
            user: read_json(storage, KEY_USER)?,
            active_project_id: read_json(storage, KEY_ACTIVE_PROJECT)?,
            current_view: read_json(storage, KEY_CURRENT_VIEW)?.unwrap_or_default(),
            active_tab: read_json(storage, KEY_ACTIVE_TAB)?.unwrap_or_default(),
        })
    }

    pub fn save(&self, storage: &mut impl ScopedStorage) -> ConnectorResult<()> {
        match &self.user {
            Some(user) => write_plain(storage, KEY_USER, user)?,
            None => storage.remove(KEY_USER)?,
        }

        match &self.active_project_id {
            Some(id) => write_plain(storage, KEY_ACTIVE_PROJECT, id)?,
            None => storage.remove(KEY_ACTIVE_PROJECT)?,
        }

        write_plain(storage, KEY_CURRENT_VIEW, &self.current_view)?;
        write_plain(storage, KEY_ACTIVE_TAB, &self.active_tab)
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Request config carrying the session token, if any.
    pub fn request_config(&self, server_url: &str) -> RequestConfig {
        let config = RequestConfig::new(server_url);

        match &self.user {
            Some(user) => config.with_token(&user.token),
            None => config,
        }
    }

    pub fn login(&mut self, user: SessionUser, storage: &mut impl ScopedStorage) -> ConnectorResult<()> {
        self.user = Some(user);
        self.save(storage)
    }

    pub fn logout(&mut self, storage: &mut impl ScopedStorage) -> ConnectorResult<()> {
        self.user = None;
        self.save(storage)
    }

    pub fn set_view(&mut self, view: View, storage: &mut impl ScopedStorage) -> ConnectorResult<()> {
        self.current_view = view;
        self.save(storage)
    }

    pub fn set_tab(&mut self, tab: Tab, storage: &mut impl ScopedStorage) -> ConnectorResult<()> {
        self.active_tab = tab;
        self.save(storage)
    }

    pub fn set_active_project(&mut self, id: Option<Uuid>, storage: &mut impl ScopedStorage) -> ConnectorResult<()> {
        self.active_project_id = id;
        self.save(storage)
    }
}
