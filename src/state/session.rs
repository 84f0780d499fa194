//! Session Store
//!
//! In-memory session state backed by one localStorage key. The store is an
//! injectable context object constructed with [`SessionStore::new`], so
//! tests can build isolated instances; rehydration happens synchronously at
//! construction, before the first render decision. The rehydrated profile
//! is considered stale until [`SessionStore::fetch_profile`] confirms it.

use leptos::*;
use serde::{Deserialize, Serialize};

use crate::api::auth;
use crate::api::models::ApiUser;

/// The one localStorage key holding the serialized session blob.
pub const STORAGE_KEY: &str = "badgeup_auth";

/// Persisted session triple. `user` must be absent whenever `token` is.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default, rename = "refreshToken")]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub user: Option<ApiUser>,
}

impl StoredSession {
    /// Enforce the invariant: without a token there is no session.
    fn normalized(mut self) -> Self {
        if self.token.is_none() {
            self.refresh_token = None;
            self.user = None;
        }
        self
    }
}

/// Decode a stored blob; anything unreadable counts as no session.
pub fn parse_blob(raw: &str) -> StoredSession {
    serde_json::from_str::<StoredSession>(raw)
        .map(StoredSession::normalized)
        .unwrap_or_default()
}

/// Read whatever is currently persisted. Called both at rehydration and by
/// the HTTP client before every request.
pub fn read_persisted() -> StoredSession {
    match read_raw() {
        Some(raw) => parse_blob(&raw),
        None => StoredSession::default(),
    }
}

/// Persist the blob, or clear the key when it holds no token.
pub fn persist(session: &StoredSession) {
    if session.token.is_some() {
        if let Ok(raw) = serde_json::to_string(session) {
            write_raw(Some(&raw));
        }
    } else {
        write_raw(None);
    }
}

// localStorage exists only in the browser; native builds (unit tests) see
// an empty session and writes vanish.
#[cfg(target_arch = "wasm32")]
fn read_raw() -> Option<String> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
}

#[cfg(not(target_arch = "wasm32"))]
fn read_raw() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
fn write_raw(raw: Option<&str>) {
    let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
        return;
    };
    match raw {
        Some(raw) => {
            let _ = storage.set_item(STORAGE_KEY, raw);
        }
        None => {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_raw(_raw: Option<&str>) {}

/// Reactive session state provided to the whole component tree.
#[derive(Clone)]
pub struct SessionStore {
    pub user: RwSignal<Option<ApiUser>>,
    pub token: RwSignal<Option<String>>,
    pub refresh_token: RwSignal<Option<String>>,
    /// Guards against concurrent duplicate profile fetches from multiple
    /// mounted consumers.
    pub loading_profile: RwSignal<bool>,
}

impl SessionStore {
    /// Rehydrate from storage so the first render already reflects a
    /// previous session without a network round trip.
    pub fn new() -> Self {
        let stored = read_persisted();
        Self {
            user: create_rw_signal(stored.user),
            token: create_rw_signal(stored.token),
            refresh_token: create_rw_signal(stored.refresh_token),
            loading_profile: create_rw_signal(false),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.get().is_some()
    }

    /// Replace all three fields atomically and persist. Called after login,
    /// registration, social callback and profile update.
    pub fn set_auth(&self, payload: StoredSession) {
        let payload = payload.normalized();
        persist(&payload);
        self.token.set(payload.token);
        self.refresh_token.set(payload.refresh_token);
        self.user.set(payload.user);
    }

    /// Merge a fresh profile, preserving the persisted refresh token.
    fn apply_profile(&self, profile: ApiUser) {
        let token = self.token.get_untracked();
        let refresh_token = read_persisted().refresh_token;
        let blob = StoredSession {
            token,
            refresh_token: refresh_token.clone(),
            user: Some(profile.clone()),
        };
        persist(&blob);
        self.refresh_token.set(refresh_token);
        self.user.set(Some(profile));
    }

    /// Claim the in-flight slot; false means no token or a fetch is already
    /// running and the caller must back off.
    fn begin_profile_fetch(&self) -> bool {
        if self.token.get_untracked().is_none() || self.loading_profile.get_untracked() {
            return false;
        }
        self.loading_profile.set(true);
        true
    }

    /// Refresh the profile from the server. Idempotent under concurrent
    /// invocation; a failed fetch means the token is invalid and logs out.
    pub async fn fetch_profile(&self) {
        if !self.begin_profile_fetch() {
            return;
        }
        match auth::me().await {
            Ok(profile) => self.apply_profile(profile),
            Err(_) => self.logout(),
        }
        self.loading_profile.set(false);
    }

    /// Clear storage and in-memory state. No server revocation call; the
    /// backend owns token lifecycle.
    pub fn logout(&self) {
        persist(&StoredSession::default());
        self.user.set(None);
        self.token.set(None);
        self.refresh_token.set(None);
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide the session store to the component tree.
pub fn provide_session() {
    provide_context(SessionStore::new());
}

pub fn use_session() -> SessionStore {
    use_context::<SessionStore>().expect("SessionStore not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64) -> ApiUser {
        serde_json::from_value(serde_json::json!({
            "id": id, "username": format!("user{}", id), "points": 5
        }))
        .unwrap()
    }

    #[test]
    fn test_parse_blob_roundtrip() {
        let blob = StoredSession {
            token: Some("tok".into()),
            refresh_token: Some("ref".into()),
            user: Some(user(7)),
        };
        let raw = serde_json::to_string(&blob).unwrap();
        assert!(raw.contains("refreshToken"));
        assert_eq!(parse_blob(&raw), blob);
    }

    #[test]
    fn test_parse_blob_garbage_is_empty_session() {
        assert_eq!(parse_blob("not json"), StoredSession::default());
        assert_eq!(parse_blob("{\"token\": 3}"), StoredSession::default());
    }

    #[test]
    fn test_user_dropped_without_token() {
        let raw = serde_json::to_string(&StoredSession {
            token: None,
            refresh_token: Some("ref".into()),
            user: Some(user(1)),
        })
        .unwrap();
        let parsed = parse_blob(&raw);
        assert!(parsed.user.is_none());
        assert!(parsed.refresh_token.is_none());
    }

    #[test]
    fn test_set_auth_then_logout() {
        let runtime = create_runtime();
        let store = SessionStore::new();
        store.set_auth(StoredSession {
            token: Some("tok".into()),
            refresh_token: Some("ref".into()),
            user: Some(user(3)),
        });
        assert!(store.is_authenticated());
        assert_eq!(store.user.get_untracked().unwrap().id, 3);

        store.logout();
        assert!(store.token.get_untracked().is_none());
        assert!(store.user.get_untracked().is_none());
        runtime.dispose();
    }

    #[test]
    fn test_set_auth_without_token_clears_user() {
        let runtime = create_runtime();
        let store = SessionStore::new();
        store.set_auth(StoredSession {
            token: None,
            refresh_token: None,
            user: Some(user(3)),
        });
        assert!(store.user.get_untracked().is_none());
        runtime.dispose();
    }

    #[test]
    fn test_profile_fetch_guard_admits_one() {
        let runtime = create_runtime();
        let store = SessionStore::new();

        // no token: never admitted
        assert!(!store.begin_profile_fetch());

        store.set_auth(StoredSession {
            token: Some("tok".into()),
            refresh_token: None,
            user: None,
        });
        assert!(store.begin_profile_fetch());
        // second concurrent attempt backs off while the first is in flight
        assert!(!store.begin_profile_fetch());

        store.loading_profile.set(false);
        assert!(store.begin_profile_fetch());
        runtime.dispose();
    }
}
