//! Session store — in-memory source of truth for the candidate collection
//! and the active settings. Nothing here touches disk: all state lives for
//! one process lifetime by design.
//!
//! Every mutation happens under a short `RwLock` critical section with no
//! awaits inside, so no further locking discipline is needed.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use crate::models::candidate::{Candidate, Settings};

/// Token captured when an asynchronous request is issued. A result is only
/// applied if no newer request for the same purpose has been issued since —
/// this is what prevents two overlapping analyses from both appending, or a
/// stale model-catalog response from landing after a fresh one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

pub struct SessionStore {
    candidates: RwLock<Vec<Candidate>>,
    settings: RwLock<Settings>,
    analysis_generation: AtomicU64,
    catalog_generation: AtomicU64,
}

impl SessionStore {
    pub fn new(settings: Settings) -> Self {
        Self {
            candidates: RwLock::new(Vec::new()),
            settings: RwLock::new(settings),
            analysis_generation: AtomicU64::new(0),
            catalog_generation: AtomicU64::new(0),
        }
    }

    /// Inserts at the head: canonical order is newest first.
    /// Append-only — no update or delete path exists.
    pub fn add_candidate(&self, candidate: Candidate) {
        let mut candidates = self.candidates.write().expect("session store lock poisoned");
        candidates.insert(0, candidate);
    }

    /// Marks the start of an analysis request, superseding any in flight.
    pub fn begin_analysis(&self) -> RequestToken {
        RequestToken(self.analysis_generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Inserts the candidate only if `token` is still the newest analysis
    /// request. Returns false (and mutates nothing) if it was superseded.
    pub fn insert_if_current(&self, token: RequestToken, candidate: Candidate) -> bool {
        let mut candidates = self.candidates.write().expect("session store lock poisoned");
        if self.analysis_generation.load(Ordering::SeqCst) != token.0 {
            return false;
        }
        candidates.insert(0, candidate);
        true
    }

    /// Marks the start of a model-catalog fetch, superseding any in flight.
    pub fn begin_catalog_fetch(&self) -> RequestToken {
        RequestToken(self.catalog_generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn catalog_token_current(&self, token: RequestToken) -> bool {
        self.catalog_generation.load(Ordering::SeqCst) == token.0
    }

    /// Full collection, newest first. Callers sort/filter for presentation.
    pub fn candidates(&self) -> Vec<Candidate> {
        self.candidates
            .read()
            .expect("session store lock poisoned")
            .clone()
    }

    pub fn settings(&self) -> Settings {
        self.settings
            .read()
            .expect("session store lock poisoned")
            .clone()
    }

    /// Wholesale replacement. No validation here: a bad key or model id
    /// only surfaces on the next Gemini call.
    pub fn update_settings(&self, settings: Settings) {
        *self.settings.write().expect("session store lock poisoned") = settings;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::candidate::{AnalysisResponse, Candidate, CandidateStatus, Recommendation};

    fn candidate(name: &str, score: f64) -> Candidate {
        Candidate::from_analysis(
            name.to_string(),
            "Data Scientist".to_string(),
            "manual.entry@example.com".to_string(),
            "resume text".to_string(),
            "job description".to_string(),
            AnalysisResponse {
                score,
                reasoning: "fine".to_string(),
                key_skills: vec!["Python".to_string()],
                recommendation: Recommendation::Review,
            },
        )
    }

    fn store() -> SessionStore {
        SessionStore::new(Settings {
            api_key: String::new(),
            model: "gemini-2.5-flash".to_string(),
        })
    }

    #[test]
    fn test_add_candidate_is_append_only_newest_first() {
        let store = store();
        store.add_candidate(candidate("Alice Johnson", 70.0));
        store.add_candidate(candidate("Bob Smith", 55.0));
        store.add_candidate(candidate("Charlie Davis", 91.0));

        let all = store.candidates();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].name, "Charlie Davis");
        assert_eq!(all[2].name, "Alice Johnson");

        // Prior entries are untouched by later inserts.
        assert_eq!(all[2].score, 70.0);
        assert_eq!(all[2].status, CandidateStatus::Pending);
    }

    #[test]
    fn test_insert_if_current_applies_newest_request() {
        let store = store();
        let token = store.begin_analysis();
        assert!(store.insert_if_current(token, candidate("Diana Evans", 62.0)));
        assert_eq!(store.candidates().len(), 1);
    }

    #[test]
    fn test_insert_if_current_discards_superseded_result() {
        let store = store();
        let stale = store.begin_analysis();
        let fresh = store.begin_analysis();

        // The first request resolves after the second was issued: dropped.
        assert!(!store.insert_if_current(stale, candidate("Ethan Harris", 48.0)));
        assert_eq!(store.candidates().len(), 0);

        assert!(store.insert_if_current(fresh, candidate("Fiona Clark", 77.0)));
        assert_eq!(store.candidates().len(), 1);
        assert_eq!(store.candidates()[0].name, "Fiona Clark");
    }

    #[test]
    fn test_catalog_token_supersession() {
        let store = store();
        let stale = store.begin_catalog_fetch();
        assert!(store.catalog_token_current(stale));

        let fresh = store.begin_catalog_fetch();
        assert!(!store.catalog_token_current(stale));
        assert!(store.catalog_token_current(fresh));
    }

    #[test]
    fn test_update_settings_replaces_wholesale() {
        let store = store();
        store.update_settings(Settings {
            api_key: "AIza-test".to_string(),
            model: "gemini-2.5-pro".to_string(),
        });
        let settings = store.settings();
        assert_eq!(settings.api_key, "AIza-test");
        assert_eq!(settings.model, "gemini-2.5-pro");
    }
}
