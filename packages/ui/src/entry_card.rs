use dioxus::prelude::*;
use store::{Entry, EntryId};

const PREVIEW_CHARS: usize = 150;

/// One entry in the dashboard grid.
///
/// `busy` disables the delete button while any delete is outstanding; `deleting`
/// marks this card as the one being deleted.
#[component]
pub fn EntryCard(
    entry: Entry,
    busy: bool,
    deleting: bool,
    on_edit: EventHandler<EntryId>,
    on_delete: EventHandler<EntryId>,
) -> Element {
    let id = entry.id;
    let date = entry.display_date();
    let preview = entry.preview(PREVIEW_CHARS);

    rsx! {
        div {
            class: "entry-card",

            div {
                class: "entry-card__header",
                div {
                    h3 { class: "entry-card__title", "{entry.title}" }
                    if let Some(mood) = &entry.mood {
                        span { class: "entry-mood", "{mood}" }
                    }
                }
                span { class: "entry-card__date", "📅 {date}" }
            }

            p { class: "entry-card__preview", "{preview}" }

            div {
                class: "entry-card__actions",
                button {
                    class: "entry-action entry-action--edit",
                    onclick: move |_| on_edit.call(id),
                    "✏️ Edit"
                }
                button {
                    class: "entry-action entry-action--delete",
                    disabled: busy,
                    onclick: move |_| on_delete.call(id),
                    if deleting { "⏳ Deleting..." } else { "🗑️ Delete" }
                }
            }
        }
    }
}
