use dioxus::prelude::*;

use ui::{guard_path, use_session, Navbar, Navigation, Page, SessionProvider};
use views::{CreateEntry, Dashboard, EditEntry, Login, Register};

mod views;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Guarded)]
        #[route("/")]
        Root {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/dashboard")]
        Dashboard {},
        #[route("/create")]
        CreateEntry {},
        #[route("/edit/:id")]
        EditEntry { id: i64 },
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Root => Route::Root {},
            Page::Login => Route::Login {},
            Page::Register => Route::Register {},
            Page::Dashboard => Route::Dashboard {},
            Page::Create => Route::CreateEntry {},
            Page::Edit(id) => Route::EditEntry { id },
        }
    }
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        SessionProvider {
            Router::<Route> {}
        }
    }
}

/// Runs the route guard on every navigation, then renders the page under the navbar.
#[component]
fn Guarded() -> Element {
    let route = use_route::<Route>();
    let session = use_session();
    let nav = use_navigator();

    let path = route.to_string();

    match guard_path(&path, session.is_authenticated()) {
        Navigation::Render => rsx! {
            div {
                class: "app",
                Navbar {
                    on_navigate: move |page: Page| {
                        nav.push(Route::from(page));
                    },
                }
                div {
                    class: "app__content",
                    Outlet::<Route> {}
                }
            }
        },
        Navigation::Redirect(target) => {
            tracing::debug!("redirecting {} to {}", path, target.path());
            nav.replace(Route::from(target));
            rsx! {}
        }
    }
}

/// `/` always redirects; the guard never lets this render.
#[component]
fn Root() -> Element {
    rsx! {}
}
