mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod dashboard;
pub use dashboard::Dashboard;

mod create_entry;
pub use create_entry::CreateEntry;

mod edit_entry;
pub use edit_entry::EditEntry;
