//! Persisted high score
//!
//! One best score, stored under a single key. Missing or malformed values
//! fall back to zero; the game never fails on bad persisted data.

use crate::platform::KeyValueStore;

/// The session-spanning best score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighScore {
    pub best: u64,
}

impl HighScore {
    /// Storage key
    const STORAGE_KEY: &'static str = "brick_breaker_highscore";

    /// Load the stored high score, defaulting to zero
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let best = store
            .get(Self::STORAGE_KEY)
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(0);
        Self { best }
    }

    /// Record a new score; persists and returns true when it beats the best
    pub fn update(&mut self, score: u64, store: &mut dyn KeyValueStore) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        store.set(Self::STORAGE_KEY, &score.to_string());
        log::info!("new high score: {}", score);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryStore;

    #[test]
    fn test_load_defaults_to_zero() {
        let store = MemoryStore::new();
        assert_eq!(HighScore::load(&store).best, 0);
    }

    #[test]
    fn test_malformed_value_falls_back() {
        let mut store = MemoryStore::new();
        store.set("brick_breaker_highscore", "not a number");
        assert_eq!(HighScore::load(&store).best, 0);
    }

    #[test]
    fn test_beating_stored_score_persists() {
        let mut store = MemoryStore::new();
        store.set("brick_breaker_highscore", "100");

        let mut high = HighScore::load(&store);
        assert_eq!(high.best, 100);

        assert!(high.update(120, &mut store));
        assert_eq!(high.best, 120);
        assert_eq!(
            store.get("brick_breaker_highscore").as_deref(),
            Some("120")
        );
    }

    #[test]
    fn test_lower_score_is_ignored() {
        let mut store = MemoryStore::new();
        store.set("brick_breaker_highscore", "100");

        let mut high = HighScore::load(&store);
        assert!(!high.update(80, &mut store));
        assert_eq!(high.best, 100);
        assert_eq!(
            store.get("brick_breaker_highscore").as_deref(),
            Some("100")
        );
    }
}
