use dioxus::prelude::*;

use crate::guard::Page;
use crate::session::use_session;

/// Top navigation. Links depend on whether a session exists.
#[component]
pub fn Navbar(on_navigate: EventHandler<Page>) -> Element {
    let session = use_session();
    let authenticated = session.is_authenticated();

    let logout = move |_| {
        session.sign_out();
        on_navigate.call(Page::Login);
    };

    rsx! {
        nav {
            class: "navbar",

            button {
                class: "navbar__brand",
                onclick: move |_| on_navigate.call(Page::Root),
                "📖 My Diary"
            }

            div {
                class: "navbar__links",
                if authenticated {
                    button {
                        class: "nav-link",
                        onclick: move |_| on_navigate.call(Page::Dashboard),
                        "🏠 Dashboard"
                    }
                    button {
                        class: "nav-link nav-link--primary",
                        onclick: move |_| on_navigate.call(Page::Create),
                        "✨ New Entry"
                    }
                    button {
                        class: "nav-link nav-link--danger",
                        onclick: logout,
                        "🚪 Logout"
                    }
                } else {
                    button {
                        class: "nav-link",
                        onclick: move |_| on_navigate.call(Page::Login),
                        "🔑 Login"
                    }
                    button {
                        class: "nav-link nav-link--primary",
                        onclick: move |_| on_navigate.call(Page::Register),
                        "✨ Register"
                    }
                }
            }
        }
    }
}
