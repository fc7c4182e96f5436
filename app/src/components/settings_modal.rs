//! API settings modal.
//!
//! Collects the Pollo and Duomi credentials and persists them to
//! `localStorage`. Visibility is owned by the caller: the modal renders
//! nothing while `open` is false and only ever asks to be closed through
//! `on_close`.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use vidlab_types::{
    ApiCredentials, CredentialField, FeedbackTiming, SaveFeedback, SaveOutcome,
    commit_save,
};

use crate::storage::BrowserStore;

const POLLO_DASHBOARD_URL: &str = "https://pollo.ai/dashboard/api-keys";

#[derive(Props, Clone, PartialEq)]
pub struct SettingsModalProps {
    pub open: bool,
    pub on_close: EventHandler<()>,
}

#[component]
pub fn SettingsModal(props: SettingsModalProps) -> Element {
    if !props.open {
        return rsx! {};
    }

    // The dialog is remounted on every open, which reloads the stored values
    // and drops any timers still pending from the previous session.
    rsx! {
        SettingsDialog { on_close: props.on_close }
    }
}

#[component]
fn SettingsDialog(on_close: EventHandler<()>) -> Element {
    let mut draft = use_signal(|| {
        let creds = ApiCredentials::load(&BrowserStore);
        let configured = CredentialField::ALL
            .iter()
            .filter(|f| creds.is_set(**f))
            .count();
        tracing::debug!(configured, "Loaded API credentials");
        creds
    });
    let mut feedback = use_signal(SaveFeedback::default);
    let timing = FeedbackTiming::default();

    let save = move |_: MouseEvent| {
        let outcome = commit_save(&draft.read(), &mut BrowserStore, &mut feedback.write(), timing);
        match &outcome.result {
            Ok(()) => tracing::info!("Saved API credentials"),
            Err(e) => tracing::warn!(error = %e, "Failed to persist API credentials"),
        }
        let SaveOutcome { draft: saved, generation, flash_ms, close_ms, .. } = outcome;
        draft.set(saved);

        spawn(async move {
            TimeoutFuture::new(flash_ms).await;
            feedback.write().expire(generation);
        });
        spawn(async move {
            TimeoutFuture::new(close_ms).await;
            on_close.call(());
        });
    };

    let is_saved = feedback.read().is_saved();

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "settings-modal",
                onclick: move |e| e.stop_propagation(),

                // Header
                div { class: "modal-header",
                    button {
                        class: "btn btn-close",
                        onclick: move |_| on_close.call(()),
                        i { class: "fa-solid fa-xmark" }
                    }
                    div { class: "modal-title",
                        span { class: "modal-title-icon",
                            i { class: "fa-solid fa-key" }
                        }
                        h3 { "API 设置 (Settings)" }
                    }
                }

                div { class: "modal-content",
                    // Pollo / Wan
                    section { class: "credential-section",
                        div { class: "credential-section-header",
                            span { class: "section-title",
                                span { class: "section-dot pollo" }
                                "Pollo.ai (Wan 2.1)"
                            }
                            a {
                                class: "provider-link",
                                href: POLLO_DASHBOARD_URL,
                                target: "_blank",
                                rel: "noreferrer",
                                "获取 Key "
                                i { class: "fa-solid fa-arrow-up-right-from-square" }
                            }
                        }
                        CredentialInput { field: CredentialField::PolloApiKey, draft }
                    }

                    // Sora-2 via Duomi
                    section { class: "credential-section",
                        div { class: "credential-section-header",
                            span { class: "section-title",
                                span { class: "section-dot duomi" }
                                "External API (Sora-2)"
                            }
                            span { class: "provider-tag", "Duomi API" }
                        }
                        div { class: "credential-grid",
                            for field in [CredentialField::DuomiApiKey, CredentialField::DuomiSecretKey] {
                                {
                                    let key = field.storage_key();
                                    let title = field.label();
                                    rsx! {
                                        div { key: "{key}", class: "credential-row",
                                            label { class: "field-header", r#for: key, "{title}" }
                                            CredentialInput { field, draft }
                                        }
                                    }
                                }
                            }
                        }
                        p { class: "hint",
                            "配置 Sora-2 接口密钥。所有密钥仅存储在本地浏览器中，绝不上传至其他服务器。"
                        }
                    }
                }

                // Footer
                div { class: "modal-footer",
                    button {
                        class: if is_saved { "btn btn-save saved" } else { "btn btn-save" },
                        onclick: save,
                        if is_saved { "已保存" } else { "保存设置" }
                    }
                }
            }
        }
    }
}

/// Masked, controlled input bound to one credential field.
#[component]
fn CredentialInput(field: CredentialField, mut draft: Signal<ApiCredentials>) -> Element {
    let value = draft.read().get(field).to_string();

    rsx! {
        input {
            id: field.storage_key(),
            class: "credential-input",
            r#type: "password",
            autocomplete: "off",
            placeholder: field.placeholder(),
            value: "{value}",
            oninput: move |e| draft.write().set(field, e.value()),
        }
    }
}
