//! API credentials edited in the settings modal.
//!
//! Each credential lives under a fixed key in the origin's key-value store.
//! Values are opaque strings: nothing here validates length or format.

use serde::{Deserialize, Serialize};

use crate::store::{KeyValueStore, StoreError};

// ─────────────────────────────────────────────────────────────────────────────
// Storage Keys
// ─────────────────────────────────────────────────────────────────────────────

pub const POLLO_API_KEY: &str = "pollo_api_key";
pub const DUOMI_API_KEY: &str = "duomi_api_key";
pub const DUOMI_SECRET_KEY: &str = "duomi_secret_key";

// ─────────────────────────────────────────────────────────────────────────────
// Fields
// ─────────────────────────────────────────────────────────────────────────────

/// One of the three credential inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialField {
    /// Pollo.ai key (Wan 2.1 video generation)
    PolloApiKey,
    /// Duomi API key (Sora-2)
    DuomiApiKey,
    /// Duomi secret key (Sora-2)
    DuomiSecretKey,
}

impl CredentialField {
    pub const ALL: [CredentialField; 3] = [
        CredentialField::PolloApiKey,
        CredentialField::DuomiApiKey,
        CredentialField::DuomiSecretKey,
    ];

    /// Key under which this field is persisted.
    pub fn storage_key(self) -> &'static str {
        match self {
            Self::PolloApiKey => POLLO_API_KEY,
            Self::DuomiApiKey => DUOMI_API_KEY,
            Self::DuomiSecretKey => DUOMI_SECRET_KEY,
        }
    }

    /// Short label shown above the input.
    pub fn label(self) -> &'static str {
        match self {
            Self::PolloApiKey => "API Key",
            Self::DuomiApiKey => "API Key",
            Self::DuomiSecretKey => "Secret Key",
        }
    }

    /// Hint text shown in the empty input.
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::PolloApiKey => "Pollo API Key...",
            Self::DuomiApiKey => "Duomi API Key...",
            Self::DuomiSecretKey => "Duomi Secret Key...",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Credentials
// ─────────────────────────────────────────────────────────────────────────────

/// The full set of credentials, as held in the modal's form state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiCredentials {
    pub pollo_api_key: String,
    pub duomi_api_key: String,
    pub duomi_secret_key: String,
}

impl ApiCredentials {
    /// Read all three entries from `store`. Absent entries become empty strings.
    pub fn load(store: &impl KeyValueStore) -> Self {
        let mut creds = Self::default();
        for field in CredentialField::ALL {
            if let Some(value) = store.get(field.storage_key()) {
                creds.set(field, value);
            }
        }
        creds
    }

    pub fn get(&self, field: CredentialField) -> &str {
        match field {
            CredentialField::PolloApiKey => &self.pollo_api_key,
            CredentialField::DuomiApiKey => &self.duomi_api_key,
            CredentialField::DuomiSecretKey => &self.duomi_secret_key,
        }
    }

    pub fn set(&mut self, field: CredentialField, value: impl Into<String>) {
        let slot = match field {
            CredentialField::PolloApiKey => &mut self.pollo_api_key,
            CredentialField::DuomiApiKey => &mut self.duomi_api_key,
            CredentialField::DuomiSecretKey => &mut self.duomi_secret_key,
        };
        *slot = value.into();
    }

    /// Whether `field` holds anything besides whitespace.
    pub fn is_set(&self, field: CredentialField) -> bool {
        !self.get(field).trim().is_empty()
    }

    /// Copy with leading/trailing whitespace removed from every field.
    pub fn trimmed(&self) -> Self {
        Self {
            pollo_api_key: self.pollo_api_key.trim().to_string(),
            duomi_api_key: self.duomi_api_key.trim().to_string(),
            duomi_secret_key: self.duomi_secret_key.trim().to_string(),
        }
    }

    /// Write all three fields (trimmed) to `store`, overwriting previous values.
    ///
    /// Empty values are written too. Every write is attempted even if an
    /// earlier one fails; the first failure is returned.
    pub fn save(&self, store: &mut impl KeyValueStore) -> Result<(), StoreError> {
        let trimmed = self.trimmed();
        let mut first_err = None;
        for field in CredentialField::ALL {
            if let Err(e) = store.set(field.storage_key(), trimmed.get(field))
                && first_err.is_none()
            {
                first_err = Some(e);
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
