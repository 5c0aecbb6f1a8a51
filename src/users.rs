//! Local user registration and per-user score history
//!
//! Records live in the key-value store as JSON: a user directory, the
//! current username, and one append-only score list per user. Passwords are
//! stored in plain text; this is a local arcade leaderboard, not an
//! authentication system.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::platform::KeyValueStore;

const USERS_KEY: &str = "brick_breaker_users";
const CURRENT_USER_KEY: &str = "brick_breaker_current_user";

fn history_key(username: &str) -> String {
    format!("brick_breaker_scores_{}", username)
}

/// Why a registration attempt was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegisterError {
    #[error("Please fill in all fields")]
    EmptyField,
    #[error("Username already exists!")]
    UsernameTaken,
}

/// A registered user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,
    pub username: String,
    /// Plain text, per the non-goals
    pub password: String,
    /// ISO-8601 join date
    pub date_joined: String,
}

/// One finished run in a user's history
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreEntry {
    pub score: u64,
    /// Unix timestamp (ms)
    pub timestamp: f64,
}

/// All registered users
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserDirectory {
    pub users: Vec<UserRecord>,
}

impl UserDirectory {
    /// Load the directory, treating missing or malformed data as empty
    pub fn load(store: &dyn KeyValueStore) -> Self {
        store
            .get(USERS_KEY)
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default()
    }

    fn save(&self, store: &mut dyn KeyValueStore) {
        if let Ok(json) = serde_json::to_string(self) {
            store.set(USERS_KEY, &json);
        }
    }

    pub fn contains(&self, username: &str) -> bool {
        self.users.iter().any(|u| u.username == username)
    }
}

/// Register a new user and make them the current player
///
/// Validates that every field is non-empty and the username is unused,
/// appends the record to the directory, and seeds an empty score history.
pub fn register(
    store: &mut dyn KeyValueStore,
    name: &str,
    username: &str,
    password: &str,
    date_joined: &str,
) -> Result<(), RegisterError> {
    if name.is_empty() || username.is_empty() || password.is_empty() {
        return Err(RegisterError::EmptyField);
    }

    let mut directory = UserDirectory::load(store);
    if directory.contains(username) {
        return Err(RegisterError::UsernameTaken);
    }

    directory.users.push(UserRecord {
        name: name.to_string(),
        username: username.to_string(),
        password: password.to_string(),
        date_joined: date_joined.to_string(),
    });
    directory.save(store);

    store.set(CURRENT_USER_KEY, username);
    store.set(&history_key(username), "[]");

    log::info!("user registered: {}", username);
    Ok(())
}

/// The username persisted as the current player, if any
pub fn current_user(store: &dyn KeyValueStore) -> Option<String> {
    store.get(CURRENT_USER_KEY).filter(|u| !u.is_empty())
}

/// Load a user's score history (empty on missing or malformed data)
pub fn score_history(store: &dyn KeyValueStore, username: &str) -> Vec<ScoreEntry> {
    store
        .get(&history_key(username))
        .and_then(|json| serde_json::from_str(&json).ok())
        .unwrap_or_default()
}

/// Append a finished run to a user's history
pub fn record_score(store: &mut dyn KeyValueStore, username: &str, score: u64, timestamp: f64) {
    let mut history = score_history(store, username);
    history.push(ScoreEntry { score, timestamp });
    if let Ok(json) = serde_json::to_string(&history) {
        store.set(&history_key(username), &json);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryStore;

    #[test]
    fn test_register_stores_record_and_current_user() {
        let mut store = MemoryStore::new();
        register(&mut store, "Alice A", "alice", "hunter2", "2026-08-07T00:00:00Z")
            .expect("registration should succeed");

        let directory = UserDirectory::load(&store);
        assert_eq!(directory.users.len(), 1);
        assert_eq!(directory.users[0].username, "alice");
        assert_eq!(current_user(&store).as_deref(), Some("alice"));
        assert!(score_history(&store, "alice").is_empty());
    }

    #[test]
    fn test_duplicate_username_rejected() {
        let mut store = MemoryStore::new();
        register(&mut store, "Alice A", "alice", "pw1", "2026-01-01T00:00:00Z").unwrap();

        let err = register(&mut store, "Other Alice", "alice", "pw2", "2026-01-02T00:00:00Z")
            .unwrap_err();
        assert_eq!(err, RegisterError::UsernameTaken);

        // No duplicate record was created
        let directory = UserDirectory::load(&store);
        assert_eq!(directory.users.len(), 1);
        assert_eq!(directory.users[0].password, "pw1");
    }

    #[test]
    fn test_empty_fields_rejected() {
        let mut store = MemoryStore::new();
        for (name, username, password) in
            [("", "u", "p"), ("n", "", "p"), ("n", "u", "")]
        {
            let err = register(&mut store, name, username, password, "2026-01-01").unwrap_err();
            assert_eq!(err, RegisterError::EmptyField);
        }
        assert!(UserDirectory::load(&store).users.is_empty());
        assert!(current_user(&store).is_none());
    }

    #[test]
    fn test_score_history_appends() {
        let mut store = MemoryStore::new();
        register(&mut store, "Bob", "bob", "pw", "2026-01-01").unwrap();

        record_score(&mut store, "bob", 120, 1000.0);
        record_score(&mut store, "bob", 50, 2000.0);

        let history = score_history(&store, "bob");
        assert_eq!(
            history,
            vec![
                ScoreEntry { score: 120, timestamp: 1000.0 },
                ScoreEntry { score: 50, timestamp: 2000.0 },
            ]
        );
    }

    #[test]
    fn test_malformed_directory_treated_as_empty() {
        let mut store = MemoryStore::new();
        store.set(USERS_KEY, "{ not json");
        assert!(UserDirectory::load(&store).users.is_empty());

        // Registration still works over the bad data
        register(&mut store, "Cara", "cara", "pw", "2026-01-01").unwrap();
        assert!(UserDirectory::load(&store).contains("cara"));
    }
}
