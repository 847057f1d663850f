//! This crate contains the shared UI for the diary: the route guard, the session
//! context and the components the pages are built from.

pub mod guard;
pub use guard::{guard, guard_path, Navigation, Page};

mod session;
pub use session::{
    confirm, load_config, make_session, use_session, PlatformStore, SessionHandle,
    SessionProvider,
};

mod navbar;
pub use navbar::Navbar;

mod entry_card;
pub use entry_card::EntryCard;

mod entry_form;
pub use entry_form::EntryForm;

mod pending;
pub use pending::PendingDelete;
