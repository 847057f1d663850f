//! Login page view with email/password form.

use api::error::LOGIN_FAILED;
use api::ApiError;
use dioxus::prelude::*;
use store::LoginRequest;
use ui::use_session;

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        let request = LoginRequest::new(email().trim(), password());
        if let Err(e) = request.validate() {
            error.set(Some(e.to_string()));
            return;
        }

        let session = session.clone();
        error.set(None);
        loading.set(true);
        spawn(async move {
            let result: Result<String, ApiError> = match session.client() {
                Ok(client) => client.auth().login(&request).await,
                Err(e) => Err(e),
            };
            loading.set(false);
            match result {
                Ok(token) => {
                    session.sign_in(&token);
                    nav.push(Route::Dashboard {});
                }
                Err(e) => {
                    tracing::warn!("login failed: {}", e);
                    error.set(Some(e.display_message(LOGIN_FAILED)));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth",

            h1 {
                class: "page__title",
                "Welcome Back"
            }

            p {
                class: "page__subtitle",
                "Sign in to continue your diary"
            }

            form {
                onsubmit: handle_login,
                class: "auth__form",

                if let Some(err) = error() {
                    div {
                        class: "alert alert--error",
                        "⚠️ {err}"
                    }
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
                    if loading() { "Signing in..." } else { "🔑 Sign in" }
                }
            }

            p {
                class: "auth__footer",
                "Don't have an account? "
                Link { to: Route::Register {}, "Register" }
            }
        }
    }
}
