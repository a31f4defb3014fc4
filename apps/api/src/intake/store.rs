//! In-memory session registry. Sessions live for the process lifetime only;
//! the record file is the sole durable artifact.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::intake::machine::IntakeSession;

/// The outer lock is held only for lookup/insert; the per-session mutex
/// serializes actions so each session processes one user action at a time,
/// to completion, without blocking other sessions' remote calls.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Arc<Mutex<IntakeSession>>>>>,
}

impl SessionStore {
    pub async fn create(&self) -> Arc<Mutex<IntakeSession>> {
        let session = IntakeSession::new();
        let id = session.id;
        let handle = Arc::new(Mutex::new(session));
        self.sessions.write().await.insert(id, handle.clone());
        handle
    }

    pub async fn get(&self, id: Uuid) -> Option<Arc<Mutex<IntakeSession>>> {
        self.sessions.read().await.get(&id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_then_get() {
        let store = SessionStore::default();
        let handle = store.create().await;
        let id = handle.lock().await.id;

        let found = store.get(id).await.expect("session should exist");
        assert_eq!(found.lock().await.id, id);
    }

    #[tokio::test]
    async fn test_get_unknown_session() {
        let store = SessionStore::default();
        assert!(store.get(Uuid::new_v4()).await.is_none());
    }
}
