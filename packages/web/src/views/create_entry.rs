use api::error::CREATE_ENTRY_FAILED;
use api::ApiError;
use dioxus::prelude::*;
use store::{Entry, EntryDraft};
use ui::{use_session, EntryForm};

use crate::Route;

#[component]
pub fn CreateEntry() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let handle_submit = move |draft: EntryDraft| {
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
                Ok(client) => client.entries().create(&draft).await,
                Err(e) => Err(e),
            };
            saving.set(false);
            match result {
                Ok(_) => {
                    nav.push(Route::Dashboard {});
                }
                Err(e) => {
                    tracing::warn!("failed to create entry: {}", e);
                    error.set(Some(e.display_message(CREATE_ENTRY_FAILED)));
                }
            }
        });
    };

    rsx! {
        div {
            class: "page page--narrow",
            h1 { class: "page__title", "✨ New Entry" }
            EntryForm {
                initial: EntryDraft::default(),
                submit_label: "💾 Save Entry",
                busy: saving(),
                error: error(),
                on_submit: handle_submit,
                on_cancel: move |_| {
                    nav.push(Route::Dashboard {});
                },
            }
        }
    }
}
