use anyhow::Context;
use gloo::storage::{LocalStorage, Storage};
use shared::StoredSession;

use super::logging::Logger;

/// Persists the session under a fixed local-storage key
#[derive(Debug, Clone, PartialEq)]
pub struct SessionStorage {
    key: String,
}

impl SessionStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Stored session, if any. Unreadable entries are treated as absent.
    pub fn load(&self) -> Option<StoredSession> {
        match LocalStorage::get::<StoredSession>(&self.key) {
            Ok(session) => Some(session),
            Err(e) => {
                Logger::debug_with_component("session-storage", &format!("No usable session stored: {}", e));
                None
            }
        }
    }

    pub fn save(&self, session: &StoredSession) -> anyhow::Result<()> {
        LocalStorage::set(&self.key, session)
            .with_context(|| format!("Failed to persist session under '{}'", self.key))
    }

    pub fn clear(&self) {
        LocalStorage::delete(&self.key);
    }
}

// Needs a real localStorage
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_session_survives_reload_and_clears() {
        let storage = SessionStorage::new("expense-tracker-test-session");
        let session = StoredSession::new("abc.def", 1_717_200_000_000);

        storage.save(&session).unwrap();
        assert_eq!(storage.load(), Some(session));

        storage.clear();
        assert_eq!(storage.load(), None);
    }

    #[wasm_bindgen_test]
    fn test_garbage_entry_is_treated_as_absent() {
        LocalStorage::raw().set_item("expense-tracker-test-garbage", "not json").unwrap();
        assert_eq!(SessionStorage::new("expense-tracker-test-garbage").load(), None);
        LocalStorage::delete("expense-tracker-test-garbage");
    }
}
