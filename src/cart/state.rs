//! Session State Management
//!
//! This module manages the shared application state: the concurrent
//! session-to-cart mapping plus the immutable collaborators (catalog,
//! settings, outbound HTTP client).

use super::models::SessionState;
use crate::{catalog::Catalog, config::Settings};
use dashmap::{mapref::one::RefMut, DashMap};
use std::sync::Arc;

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// In-memory store of per-session order state, keyed by session id.
///
/// Sessions are created lazily on first reference and kept for the process
/// lifetime. DashMap's per-entry locking makes each read-merge-write on a
/// session atomic without an external mutex.
#[derive(Debug, Default)]
pub struct CartStore {
    sessions: DashMap<String, SessionState>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sole mutation primitive: an exclusive guard over one session's state,
    /// creating the empty session first if needed. All tool handlers route
    /// through this.
    pub fn get_or_create(&self, session_id: &str) -> RefMut<'_, String, SessionState> {
        self.sessions.entry(session_id.to_string()).or_default()
    }

    /// Snapshot of a session for read-only queries.
    ///
    /// Lenient policy: a read of an unknown session materializes empty state
    /// that stays resident, matching how tool calls create sessions.
    pub fn read(&self, session_id: &str) -> SessionState {
        self.get_or_create(session_id).clone()
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

/// Core application state handed to every request handler
pub struct AppState {
    /// Per-session carts and customer profiles
    pub store: CartStore,

    /// The immutable menu
    pub catalog: Catalog,

    /// Process configuration, loaded once at startup
    pub settings: Settings,

    /// Client for the realtime token exchange
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            store: CartStore::new(),
            catalog: Catalog::with_default_menu(),
            http: reqwest::Client::new(),
            settings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_materializes_empty_session() {
        let store = CartStore::new();
        assert!(store.is_empty());

        let snapshot = store.read("s1");
        assert!(snapshot.items.is_empty());
        // The peeked session stays resident.
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn sessions_are_isolated() {
        let store = CartStore::new();
        store.get_or_create("a").customer.name = Some("Ana".into());

        assert!(store.read("b").customer.name.is_none());
        assert_eq!(store.read("a").customer.name.as_deref(), Some("Ana"));
    }
}
