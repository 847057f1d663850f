//! Registration page view with full name/email/password form.

use api::error::REGISTRATION_FAILED;
use api::ApiError;
use dioxus::prelude::*;
use store::RegisterRequest;
use ui::use_session;

use crate::Route;

/// Register page component.
#[component]
pub fn Register() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut full_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        let request = RegisterRequest::new(full_name().trim(), email().trim(), password());
        if let Err(e) = request.validate() {
            error.set(Some(e.to_string()));
            return;
        }

        let session = session.clone();
        error.set(None);
        loading.set(true);
        spawn(async move {
            let result: Result<String, ApiError> = match session.client() {
                Ok(client) => client.auth().register(&request).await,
                Err(e) => Err(e),
            };
            loading.set(false);
            match result {
                Ok(token) => {
                    session.sign_in(&token);
                    nav.push(Route::Dashboard {});
                }
                Err(e) => {
                    tracing::warn!("registration failed: {}", e);
                    error.set(Some(e.display_message(REGISTRATION_FAILED)));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth",

            h1 {
                class: "page__title",
                "Create Account"
            }

            p {
                class: "page__subtitle",
                "Start writing your story"
            }

            form {
                onsubmit: handle_register,
                class: "auth__form",

                if let Some(err) = error() {
                    div {
                        class: "alert alert--error",
                        "⚠️ {err}"
                    }
                }

                input {
                    r#type: "text",
                    required: true,
                    placeholder: "Full name",
                    value: full_name(),
                    oninput: move |evt: FormEvent| full_name.set(evt.value()),
                }

                input {
                    r#type: "email",
                    required: true,
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    r#type: "password",
                    required: true,
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    class: "btn btn--primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "✨ Sign up" }
                }
            }

            p {
                class: "auth__footer",
                "Already have an account? "
                Link { to: Route::Login {}, "Sign in" }
            }
        }
    }
}
