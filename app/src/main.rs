//! VidLab web front-end.

use dioxus::prelude::*;
use tracing::Level;
use vidlab_types::{ApiCredentials, CredentialField};

mod components;
mod storage;

use components::SettingsModal;
use storage::BrowserStore;

const STYLES: Asset = asset!("/assets/styles.css");
const FONT_AWESOME: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let mut settings_open = use_signal(|| false);

    // Read straight from storage so the badges reflect the last save once the
    // modal closes.
    let creds = ApiCredentials::load(&BrowserStore);
    let pollo_ready = creds.is_set(CredentialField::PolloApiKey);
    let duomi_ready = creds.is_set(CredentialField::DuomiApiKey)
        && creds.is_set(CredentialField::DuomiSecretKey);

    rsx! {
        document::Stylesheet { href: FONT_AWESOME }
        document::Stylesheet { href: STYLES }

        header { class: "app-header",
            h1 { "VidLab" }
            div { class: "provider-status",
                span { class: if pollo_ready { "status-badge ready" } else { "status-badge" },
                    "Pollo.ai"
                }
                span { class: if duomi_ready { "status-badge ready" } else { "status-badge" },
                    "Sora-2"
                }
            }
            button {
                class: "btn btn-settings",
                title: "API 设置 (Settings)",
                onclick: move |_| settings_open.set(true),
                i { class: "fa-solid fa-gear" }
            }
        }

        SettingsModal {
            open: settings_open(),
            on_close: move |_| settings_open.set(false),
        }
    }
}
