/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

//! Key/value persistence for auth data
//!
//! Two stores back every session: a persistent "local" store that survives
//! restarts and a volatile "session" store. A preference key decides which one
//! receives writes; reads fall back to the other store.

use crate::application::config::Config;
use crate::constants::{
    ACCESS_TOKEN_KEY, ACTIVE_COMPANY_KEY, CURRENT_USER_ID_KEY, PERSISTENCE_PREF_KEY,
    REFRESH_TOKEN_KEY, SELECTED_COMPANY_KEY, SESSION_KEYS, USER_KEY,
};
use crate::model::auth::User;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::{Arc, RwLock};
use tracing::{debug, warn};

/// Minimal synchronous key/value store
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`
    fn get(&self, key: &str) -> Option<String>;
    /// Stores `value` under `key`
    fn set(&self, key: &str, value: &str);
    /// Removes `key`, a no-op when absent
    fn remove(&self, key: &str);
}

/// Volatile store living as long as the process
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove(key);
    }
}

/// Store persisted as a flat JSON object in a file
///
/// The file is read once on open and rewritten after every mutation. Write
/// failures are logged; the in-memory view stays authoritative.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl FileStore {
    /// Opens the store at `path`, starting empty if the file is missing or unreadable
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str::<HashMap<String, String>>(&raw).unwrap_or_else(|e| {
                warn!("Ignoring corrupt session file {}: {}", path.display(), e);
                HashMap::new()
            }),
            Err(_) => HashMap::new(),
        };
        debug!("Opened session file {} ({} keys)", path.display(), entries.len());
        Self {
            path,
            entries: RwLock::new(entries),
        }
    }

    /// Location of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, entries: &HashMap<String, String>) {
        let result = serde_json::to_string_pretty(entries)
            .map_err(std::io::Error::other)
            .and_then(|raw| fs::write(&self.path, raw));
        if let Err(e) = result {
            warn!("Failed to write session file {}: {}", self.path.display(), e);
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        if entries.remove(key).is_some() {
            self.flush(&entries);
        }
    }
}

/// Where auth data is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Persistence {
    /// Survives restarts
    Local,
    /// Dropped with the process
    Session,
}

impl Persistence {
    /// Value written under the preference key
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Persistence::Local => "local",
            Persistence::Session => "session",
        }
    }
}

impl FromStr for Persistence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(Persistence::Local),
            "session" => Ok(Persistence::Session),
            other => Err(format!("unknown persistence: {other}")),
        }
    }
}

/// Snapshot of the persisted session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    /// Stored user
    pub user: Option<User>,
    /// Access token
    pub access_token: Option<String>,
    /// Refresh token
    pub refresh_token: Option<String>,
    /// Selected company id
    pub selected_company_id: Option<String>,
}

impl SessionState {
    /// Whether an access token is present
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }
}

/// Auth data storage over a local and a session [`KeyValueStore`]
#[derive(Clone)]
pub struct AuthStorage {
    local: Arc<dyn KeyValueStore>,
    session: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for AuthStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthStorage")
            .field("preference", &self.preferred_persistence())
            .finish()
    }
}

impl AuthStorage {
    /// Creates storage over the given stores
    pub fn new(local: Arc<dyn KeyValueStore>, session: Arc<dyn KeyValueStore>) -> Self {
        Self { local, session }
    }

    /// Storage backed by two [`MemoryStore`]s
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()), Arc::new(MemoryStore::new()))
    }

    /// Storage with a [`FileStore`] at `config.session.file` as the local store
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(FileStore::open(&config.session.file)),
            Arc::new(MemoryStore::new()),
        )
    }

    fn store_for(&self, persistence: Persistence) -> &Arc<dyn KeyValueStore> {
        match persistence {
            Persistence::Local => &self.local,
            Persistence::Session => &self.session,
        }
    }

    fn other(persistence: Persistence) -> Persistence {
        match persistence {
            Persistence::Local => Persistence::Session,
            Persistence::Session => Persistence::Local,
        }
    }

    /// Resolves where auth data currently lives
    ///
    /// An explicit preference wins (local first), then whichever store holds an
    /// access token (local first), then `Session`.
    #[must_use]
    pub fn preferred_persistence(&self) -> Persistence {
        if self.local.get(PERSISTENCE_PREF_KEY).as_deref() == Some("local") {
            return Persistence::Local;
        }
        if self.session.get(PERSISTENCE_PREF_KEY).as_deref() == Some("session") {
            return Persistence::Session;
        }
        if self.local.get(ACCESS_TOKEN_KEY).is_some() {
            return Persistence::Local;
        }
        if self.session.get(ACCESS_TOKEN_KEY).is_some() {
            return Persistence::Session;
        }
        Persistence::Session
    }

    /// Records where auth data should be written from now on
    pub fn set_preference(&self, persistence: Persistence) {
        self.store_for(persistence)
            .set(PERSISTENCE_PREF_KEY, persistence.as_str());
        self.store_for(Self::other(persistence))
            .remove(PERSISTENCE_PREF_KEY);
    }

    /// Writes or removes an auth item
    ///
    /// With `value == None` the key is removed from both stores. Otherwise it is
    /// written to `persistence` (or the preferred store) and removed from the
    /// other, so a key never lives in both.
    pub fn persist(&self, key: &str, value: Option<&str>, persistence: Option<Persistence>) {
        let target = persistence.unwrap_or_else(|| self.preferred_persistence());
        let fallback = Self::other(target);

        match value {
            None => {
                self.store_for(target).remove(key);
                self.store_for(fallback).remove(key);
            }
            Some(value) => {
                self.store_for(target).set(key, value);
                self.store_for(fallback).remove(key);
            }
        }
    }

    /// Reads an auth item from the preferred store, then the other
    #[must_use]
    pub fn read(&self, key: &str) -> Option<String> {
        let primary = self.preferred_persistence();
        self.store_for(primary)
            .get(key)
            .or_else(|| self.store_for(Self::other(primary)).get(key))
    }

    /// Removes every session key and the preference from both stores
    pub fn clear(&self) {
        for key in SESSION_KEYS {
            self.local.remove(key);
            self.session.remove(key);
        }
        self.local.remove(PERSISTENCE_PREF_KEY);
        self.session.remove(PERSISTENCE_PREF_KEY);
        debug!("Auth storage cleared");
    }

    /// Stored access token
    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        self.read(ACCESS_TOKEN_KEY)
    }

    /// Stored refresh token
    #[must_use]
    pub fn refresh_token(&self) -> Option<String> {
        self.read(REFRESH_TOKEN_KEY)
    }

    /// Stores both tokens; a `None` refresh token leaves the current one untouched
    pub fn set_tokens(&self, access: &str, refresh: Option<&str>) {
        self.persist(ACCESS_TOKEN_KEY, Some(access), None);
        if let Some(refresh) = refresh {
            self.persist(REFRESH_TOKEN_KEY, Some(refresh), None);
        }
    }

    /// Stored user; a corrupt entry reads as `None`
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        let raw = self.read(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!("Stored user is not valid JSON: {}", e);
                None
            }
        }
    }

    /// Stores (or with `None` removes) the user
    pub fn set_user(&self, user: Option<&User>) {
        match user.map(serde_json::to_string) {
            Some(Ok(raw)) => self.persist(USER_KEY, Some(&raw), None),
            Some(Err(e)) => warn!("Failed to serialize user: {}", e),
            None => self.persist(USER_KEY, None, None),
        }
    }

    /// Selected company id, falling back to the legacy key
    #[must_use]
    pub fn selected_company_id(&self) -> Option<String> {
        self.read(SELECTED_COMPANY_KEY)
            .or_else(|| self.read(ACTIVE_COMPANY_KEY))
            .filter(|id| !id.is_empty())
    }

    /// Stores (or with `None` removes) the selected company id
    pub fn set_selected_company_id(&self, company_id: Option<&str>) {
        self.persist(SELECTED_COMPANY_KEY, company_id, None);
        self.persist(ACTIVE_COMPANY_KEY, None, None);
    }

    /// Id of the user the session was opened for
    #[must_use]
    pub fn current_user_id(&self) -> Option<String> {
        self.read(CURRENT_USER_ID_KEY)
    }

    /// Pins the session to a user id
    pub fn set_current_user_id(&self, user_id: Option<&str>) {
        self.persist(CURRENT_USER_ID_KEY, user_id, None);
    }

    /// Snapshot of everything the session holds
    #[must_use]
    pub fn session_state(&self) -> SessionState {
        SessionState {
            user: self.current_user(),
            access_token: self.access_token(),
            refresh_token: self.refresh_token(),
            selected_company_id: self.selected_company_id(),
        }
    }
}

impl Default for AuthStorage {
    fn default() -> Self {
        Self::in_memory()
    }
}
