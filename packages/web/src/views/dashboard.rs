//! Entry list with stats, search and delete.

use api::error::{DELETE_ENTRY_FAILED, LOAD_ENTRIES_FAILED};
use api::ApiError;
use dioxus::prelude::*;
use store::{filter_entries, Entry, EntryId, EntryStats};
use ui::{confirm, use_session, EntryCard, PendingDelete};

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut entries = use_signal(Vec::<Entry>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut query = use_signal(String::new);
    let mut pending = use_signal(PendingDelete::default);

    // Load entries once on mount
    let loader_session = session.clone();
    let _loader = use_resource(move || {
        let session = loader_session.clone();
        async move {
            let result: Result<Vec<Entry>, ApiError> = match session.client() {
                Ok(client) => client.entries().list().await,
                Err(e) => Err(e),
            };
            match result {
                Ok(list) => entries.set(list),
                Err(e) => {
                    tracing::error!("failed to load entries: {}", e);
                    error.set(Some(e.display_message(LOAD_ENTRIES_FAILED)));
                }
            }
            loading.set(false);
        }
    });

    let handle_delete = use_callback(move |id: EntryId| {
        if pending.read().is_busy() {
            return;
        }
        if !confirm("Are you sure you want to delete this entry?") {
            return;
        }
        if !pending.write().begin(id) {
            return;
        }
        let session = session.clone();
        spawn(async move {
            let result: Result<(), ApiError> = match session.client() {
                Ok(client) => client.entries().delete(id).await,
                Err(e) => Err(e),
            };
            pending.write().finish();
            match result {
                Ok(()) => entries.write().retain(|entry| entry.id != id),
                Err(e) => {
                    tracing::warn!("failed to delete entry {}: {}", id, e);
                    error.set(Some(e.display_message(DELETE_ENTRY_FAILED)));
                }
            }
        });
    });

    if loading() {
        return rsx! {
            div { class: "loading", "⏳ Loading your memories..." }
        };
    }

    let stats = EntryStats::from_entries(&entries.read());
    let visible: Vec<Entry> = filter_entries(&entries.read(), &query.read())
        .into_iter()
        .cloned()
        .collect();
    let deleting = pending();

    rsx! {
        div {
            class: "page",

            div {
                class: "page__header",
                div {
                    h1 { class: "page__title", "📖 My Diary" }
                    p { class: "page__subtitle", "Your digital sanctuary ✨" }
                }
                button {
                    class: "btn btn--primary",
                    onclick: move |_| {
                        nav.push(Route::CreateEntry {});
                    },
                    "✨ New Entry"
                }
            }

            div {
                class: "stats",
                div {
                    class: "stat-card",
                    div { class: "stat-card__value", "{stats.total}" }
                    div { class: "stat-card__label", "Total Entries" }
                }
                div {
                    class: "stat-card",
                    div { class: "stat-card__value stat-card__value--happy", "{stats.happy}" }
                    div { class: "stat-card__label", "Happy Days" }
                }
            }

            input {
                class: "search",
                r#type: "search",
                placeholder: "🔍 Search by title, content, mood or date...",
                value: query(),
                oninput: move |evt: FormEvent| query.set(evt.value()),
            }

            if let Some(err) = error() {
                div { class: "alert alert--error", "⚠️ {err}" }
            }

            if stats.total == 0 {
                div {
                    class: "empty-state",
                    div { class: "empty-state__icon", "📝" }
                    h3 { class: "empty-state__title", "Start Your Journey" }
                    p {
                        class: "empty-state__text",
                        "Every great story starts with a single page. What's yours?"
                    }
                    button {
                        class: "btn btn--primary",
                        onclick: move |_| {
                            nav.push(Route::CreateEntry {});
                        },
                        "🚀 Create First Entry"
                    }
                }
            } else if visible.is_empty() {
                div { class: "empty-state", "No entries match \"{query}\"" }
            } else {
                div {
                    class: "entry-grid",
                    for entry in visible {
                        EntryCard {
                            key: "{entry.id}",
                            busy: deleting.is_busy(),
                            deleting: deleting.is_deleting(entry.id),
                            entry: entry.clone(),
                            on_edit: move |id: EntryId| {
                                nav.push(Route::EditEntry { id });
                            },
                            on_delete: handle_delete,
                        }
                    }
                }
            }
        }
    }
}
