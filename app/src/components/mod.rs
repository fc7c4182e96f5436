//! UI Components

pub mod settings_modal;

pub use settings_modal::SettingsModal;
