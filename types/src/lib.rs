//! Shared types for the VidLab front-end.
//!
//! Everything here is free of browser dependencies so it can be unit tested
//! on the host; the Dioxus app wires it to `localStorage`.

pub mod credentials;
pub mod feedback;
pub mod panel;
pub mod store;

pub use credentials::{
    ApiCredentials, CredentialField, DUOMI_API_KEY, DUOMI_SECRET_KEY, POLLO_API_KEY,
};
pub use feedback::{FeedbackTiming, SaveFeedback};
pub use panel::{SaveOutcome, commit_save};
pub use store::{KeyValueStore, MemoryStore, StoreError};
