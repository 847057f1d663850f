use api::error::{ENTRY_NOT_FOUND, LOAD_ENTRY_FAILED, UPDATE_ENTRY_FAILED};
use api::ApiError;
use dioxus::prelude::*;
use store::{Entry, EntryDraft, EntryId};
use ui::{use_session, EntryForm};

use crate::Route;

#[component]
pub fn EditEntry(id: ReadOnlySignal<i64>) -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    // Reloads whenever the route id changes
    let loader_session = session.clone();
    let entry = use_resource(move || {
        let session = loader_session.clone();
        let id = id();
        async move {
            let result: Result<Entry, ApiError> = match session.client() {
                Ok(client) => client.entries().get(id).await,
                Err(e) => Err(e),
            };
            result.map_err(|e| {
                tracing::warn!("failed to load entry {}: {}", id, e);
                if e.is_not_found() {
                    ENTRY_NOT_FOUND.to_string()
                } else {
                    e.display_message(LOAD_ENTRY_FAILED)
                }
            })
        }
    });

    let mut handle_submit = move |target: EntryId, draft: EntryDraft| {
        if saving() {
            return;
        }
        if let Err(e) = draft.validate() {
            error.set(Some(e.to_string()));
            return;
        }

        let session = session.clone();
        error.set(None);
        saving.set(true);
        spawn(async move {
            let result: Result<Entry, ApiError> = match session.client() {
                Ok(client) => client.entries().update(target, &draft).await,
                Err(e) => Err(e),
            };
            saving.set(false);
            match result {
                Ok(_) => {
                    nav.push(Route::Dashboard {});
                }
                Err(e) => {
                    tracing::warn!("failed to update entry {}: {}", target, e);
                    error.set(Some(e.display_message(UPDATE_ENTRY_FAILED)));
                }
            }
        });
    };

    let body = match &*entry.read_unchecked() {
        Some(Ok(loaded)) if loaded.id == id() => {
            let target = loaded.id;
            rsx! {
                EntryForm {
                    key: "{target}",
                    initial: EntryDraft::from(loaded),
                    submit_label: "💾 Update Entry",
                    busy: saving(),
                    error: error(),
                    on_submit: move |draft: EntryDraft| handle_submit(target, draft),
                    on_cancel: move |_| {
                        nav.push(Route::Dashboard {});
                    },
                }
            }
        }
        Some(Err(message)) => rsx! {
            div { class: "alert alert--error", "⚠️ {message}" }
            button {
                class: "btn btn--secondary",
                onclick: move |_| {
                    nav.push(Route::Dashboard {});
                },
                "← Back to dashboard"
            }
        },
        _ => rsx! {
            div { class: "loading", "⏳ Loading entry..." }
        },
    };

    rsx! {
        div {
            class: "page page--narrow",
            h1 { class: "page__title", "✏️ Edit Entry" }
            {body}
        }
    }
}
