//! Save sequence of the settings modal, independent of any UI runtime.
//!
//! The component calls [`commit_save`] from its save handler and only has to
//! schedule the two returned delays.

use crate::credentials::ApiCredentials;
use crate::feedback::{FeedbackTiming, SaveFeedback};
use crate::store::{KeyValueStore, StoreError};

/// Result of pressing save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    /// Trimmed values; the form state is replaced with these.
    pub draft: ApiCredentials,
    /// Generation to pass to [`SaveFeedback::expire`] once `flash_ms` elapses.
    pub generation: u32,
    /// Delay before the saved flag is cleared
    pub flash_ms: u32,
    /// Delay before the close callback runs
    pub close_ms: u32,
    /// Outcome of the store writes. Failures do not change the UI flow.
    pub result: Result<(), StoreError>,
}

/// Trim `draft`, write it to `store` and raise the saved flag.
pub fn commit_save(
    draft: &ApiCredentials,
    store: &mut impl KeyValueStore,
    feedback: &mut SaveFeedback,
    timing: FeedbackTiming,
) -> SaveOutcome {
    let trimmed = draft.trimmed();
    let result = trimmed.save(store);
    let generation = feedback.mark_saved();

    SaveOutcome {
        draft: trimmed,
        generation,
        flash_ms: timing.saved_flash_ms,
        close_ms: timing.close_delay_ms,
        result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::{CredentialField, DUOMI_API_KEY, DUOMI_SECRET_KEY, POLLO_API_KEY};
    use crate::store::MemoryStore;

    /// Store whose writes always fail.
    struct UnavailableStore;

    impl KeyValueStore for UnavailableStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable)
        }
    }

    fn padded_draft() -> ApiCredentials {
        ApiCredentials {
            pollo_api_key: "  x  ".to_string(),
            duomi_api_key: "y ".to_string(),
            duomi_secret_key: " z".to_string(),
        }
    }

    #[test]
    fn test_commit_writes_trimmed_and_flags_saved() {
        let mut store = MemoryStore::with_entries([(POLLO_API_KEY, "old")]);
        let mut feedback = SaveFeedback::default();

        let outcome = commit_save(
            &padded_draft(),
            &mut store,
            &mut feedback,
            FeedbackTiming::default(),
        );

        assert_eq!(outcome.result, Ok(()));
        assert!(feedback.is_saved());
        assert_eq!(outcome.draft, padded_draft().trimmed());
        assert_eq!(outcome.draft.get(CredentialField::PolloApiKey), "x");
        assert_eq!(store.get(POLLO_API_KEY).as_deref(), Some("x"));
        assert_eq!(store.get(DUOMI_API_KEY).as_deref(), Some("y"));
        assert_eq!(store.get(DUOMI_SECRET_KEY).as_deref(), Some("z"));
        assert_eq!(ApiCredentials::load(&store), outcome.draft);
    }

    #[test]
    fn test_commit_schedules_close_before_flag_reset() {
        let mut store = MemoryStore::new();
        let mut feedback = SaveFeedback::default();

        let outcome = commit_save(
            &padded_draft(),
            &mut store,
            &mut feedback,
            FeedbackTiming::default(),
        );

        assert_eq!(outcome.close_ms, 500);
        assert_eq!(outcome.flash_ms, 2000);

        // Close fires first; the flag is still up at that point
        assert!(feedback.is_saved());

        // Flag reset fires later and clears it
        assert!(feedback.expire(outcome.generation));
        assert!(!feedback.is_saved());
    }

    #[test]
    fn test_commit_uses_custom_timing() {
        let timing = FeedbackTiming {
            saved_flash_ms: 100,
            close_delay_ms: 10,
        };
        let outcome = commit_save(
            &ApiCredentials::default(),
            &mut MemoryStore::new(),
            &mut SaveFeedback::default(),
            timing,
        );
        assert_eq!(outcome.flash_ms, 100);
        assert_eq!(outcome.close_ms, 10);
    }

    #[test]
    fn test_commit_failed_write_still_flags_then_expires() {
        let mut feedback = SaveFeedback::default();

        let outcome = commit_save(
            &padded_draft(),
            &mut UnavailableStore,
            &mut feedback,
            FeedbackTiming::default(),
        );

        assert_eq!(outcome.result, Err(StoreError::Unavailable));
        assert_eq!(outcome.draft, padded_draft().trimmed());
        assert!(feedback.is_saved());

        assert!(feedback.expire(outcome.generation));
        assert!(!feedback.is_saved());
    }

    #[test]
    fn test_second_commit_outlives_first_reset() {
        let mut store = MemoryStore::new();
        let mut feedback = SaveFeedback::default();
        let timing = FeedbackTiming::default();

        let first = commit_save(&padded_draft(), &mut store, &mut feedback, timing);
        let second = commit_save(&ApiCredentials::default(), &mut store, &mut feedback, timing);

        assert!(!feedback.expire(first.generation));
        assert!(feedback.is_saved());
        assert!(feedback.expire(second.generation));
        assert_eq!(store.get(POLLO_API_KEY).as_deref(), Some(""));
    }
}
