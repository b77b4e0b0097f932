//! Durable session storage: auth token, static admin key, base-URL override.
//!
//! The client never reads ambient global state; a [`SessionStore`] is built
//! over an explicit [`KeyValueStore`] and injected into
//! [`crate::AdminClient`] at construction.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use base64::Engine;

use crate::Error;

const TOKEN_KEY: &str = "unap-admin-token";
const ADMIN_KEY_KEY: &str = "unap-admin-key";
const BASE_URL_KEY: &str = "unap-admin-base-url";

/// Minimal durable key-value storage used for session state.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Volatile store for tests and one-shot invocations.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(key);
    }
}

/// JSON-file-backed store. The whole map is rewritten on every mutation;
/// session state is a handful of short strings, so this is cheap.
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileStore {
    /// Opens (or creates) the store at `path`. A missing or unreadable file
    /// starts empty rather than failing.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::StoreUnavailable(e.to_string()))?;
        }
        let entries = std::fs::read_to_string(&path)
            .ok()
            .and_then(|raw| serde_json::from_str::<HashMap<String, String>>(&raw).ok())
            .unwrap_or_default();
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Opens the store at the platform config directory
    /// (`<config>/unap-admin/session.json`).
    pub fn open_default() -> Result<Self, Error> {
        let base = dirs::config_dir()
            .ok_or_else(|| Error::StoreUnavailable("no config directory".to_string()))?;
        Self::open(base.join("unap-admin").join("session.json"))
    }

    fn persist(&self, entries: &HashMap<String, String>) {
        match serde_json::to_string_pretty(entries) {
            Ok(raw) => {
                if let Err(e) = std::fs::write(&self.path, raw) {
                    tracing::warn!("Failed to persist session store: {}", e);
                }
            }
            Err(e) => tracing::warn!("Failed to serialize session store: {}", e),
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.remove(key);
        self.persist(&entries);
    }
}

/// Session state accessor shared by the client and the view layer.
#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// In-memory session, mainly for tests.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn set_token(&self, token: &str) {
        self.store.set(TOKEN_KEY, token);
    }

    pub fn clear_token(&self) {
        self.store.remove(TOKEN_KEY);
    }

    pub fn admin_key(&self) -> Option<String> {
        self.store.get(ADMIN_KEY_KEY).filter(|k| !k.is_empty())
    }

    pub fn set_admin_key(&self, key: &str) {
        self.store.set(ADMIN_KEY_KEY, key);
    }

    /// Stored base-URL override, normalized without a trailing slash.
    pub fn base_url_override(&self) -> Option<String> {
        self.store
            .get(BASE_URL_KEY)
            .filter(|u| !u.is_empty())
            .map(|u| normalize_base_url(&u))
    }

    pub fn set_base_url(&self, url: &str) {
        self.store.set(BASE_URL_KEY, &normalize_base_url(url));
    }

    /// Whether a live session exists.
    ///
    /// A stored token whose payload segment decodes to JSON with an `exp`
    /// claim at or before now is expired: it is cleared and `false` is
    /// returned. A token that cannot be decoded at all is treated the same
    /// way, so a garbage token never wedges the login gate.
    pub fn has_session(&self) -> bool {
        let token = match self.token() {
            Some(token) => token,
            None => return false,
        };
        match token_expiry(&token) {
            Ok(Some(exp)) if exp <= chrono::Utc::now().timestamp() => {
                self.clear_token();
                false
            }
            Ok(_) => true,
            Err(()) => {
                self.clear_token();
                false
            }
        }
    }
}

fn normalize_base_url(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}

/// Extracts the `exp` claim (epoch seconds) from a JWT-shaped token.
/// `Ok(None)` means a well-formed payload without an expiry.
fn token_expiry(token: &str) -> Result<Option<i64>, ()> {
    let payload = token.split('.').nth(1).filter(|p| !p.is_empty()).ok_or(())?;
    let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(payload)
        .or_else(|_| base64::engine::general_purpose::STANDARD_NO_PAD.decode(payload))
        .map_err(|_| ())?;
    let claims: serde_json::Value = serde_json::from_slice(&bytes).map_err(|_| ())?;
    Ok(claims.get("exp").and_then(|e| e.as_i64()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with_exp(exp: i64) -> String {
        let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .encode(format!("{{\"exp\":{}}}", exp));
        format!("header.{}.sig", payload)
    }

    #[test]
    fn no_token_means_no_session() {
        let session = SessionStore::in_memory();
        assert!(!session.has_session());
    }

    #[test]
    fn valid_token_has_session() {
        let session = SessionStore::in_memory();
        session.set_token(&token_with_exp(chrono::Utc::now().timestamp() + 3600));
        assert!(session.has_session());
        assert!(session.token().is_some());
    }

    #[test]
    fn expired_token_is_cleared() {
        let session = SessionStore::in_memory();
        session.set_token(&token_with_exp(chrono::Utc::now().timestamp() - 10));
        assert!(!session.has_session());
        assert!(session.token().is_none());
    }

    #[test]
    fn token_without_expiry_counts_as_session() {
        let session = SessionStore::in_memory();
        let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode("{\"sub\":\"admin\"}");
        session.set_token(&format!("h.{}.s", payload));
        assert!(session.has_session());
    }

    #[test]
    fn garbage_token_is_cleared() {
        let session = SessionStore::in_memory();
        session.set_token("not-a-jwt");
        assert!(!session.has_session());
        assert!(session.token().is_none());
    }

    #[test]
    fn undecodable_payload_is_cleared() {
        let session = SessionStore::in_memory();
        session.set_token("header.!!!!.sig");
        assert!(!session.has_session());
        assert!(session.token().is_none());
    }

    #[test]
    fn base_url_override_is_normalized() {
        let session = SessionStore::in_memory();
        session.set_base_url("https://admin.example.com/");
        assert_eq!(
            session.base_url_override().as_deref(),
            Some("https://admin.example.com")
        );
    }

    #[test]
    fn empty_values_read_as_absent() {
        let session = SessionStore::in_memory();
        session.set_token("");
        session.set_admin_key("");
        assert!(session.token().is_none());
        assert!(session.admin_key().is_none());
    }
}
