use dioxus::prelude::*;
use store::{EntryDraft, MOOD_PRESETS};

/// Title / mood / content form shared by the create and edit pages.
///
/// Field values live in the form; `busy` disables submission while the page has a
/// request in flight.
#[component]
pub fn EntryForm(
    initial: EntryDraft,
    submit_label: String,
    busy: bool,
    error: Option<String>,
    on_submit: EventHandler<EntryDraft>,
    on_cancel: EventHandler<()>,
) -> Element {
    let EntryDraft {
        title: initial_title,
        content: initial_content,
        mood: initial_mood,
    } = initial;
    let mut title = use_signal(move || initial_title);
    let mut content = use_signal(move || initial_content);
    let mut mood = use_signal(move || initial_mood.unwrap_or_default());

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        on_submit.call(EntryDraft::new(title(), content(), &mood()));
    };

    rsx! {
        form {
            onsubmit: handle_submit,
            class: "entry-form",

            if let Some(err) = error {
                div {
                    class: "alert alert--error",
                    "⚠️ {err}"
                }
            }

            label { r#for: "entry-title", "Title" }
            input {
                id: "entry-title",
                r#type: "text",
                required: true,
                placeholder: "Give your day a title",
                value: title(),
                oninput: move |evt: FormEvent| title.set(evt.value()),
            }

            label { r#for: "entry-mood", "Mood" }
            select {
                id: "entry-mood",
                value: mood(),
                onchange: move |evt: FormEvent| mood.set(evt.value()),
                option { value: "", "Select your mood" }
                for preset in MOOD_PRESETS.iter() {
                    option { key: "{preset}", value: "{preset}", "{preset}" }
                }
            }

            label { r#for: "entry-content", "Content" }
            textarea {
                id: "entry-content",
                required: true,
                rows: 10,
                placeholder: "What happened today?",
                value: content(),
                oninput: move |evt: FormEvent| content.set(evt.value()),
            }

            div {
                class: "form-actions",
                button {
                    class: "btn btn--primary",
                    r#type: "submit",
                    disabled: busy,
                    if busy { "Saving..." } else { "{submit_label}" }
                }
                button {
                    class: "btn btn--secondary",
                    r#type: "button",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}
