//! Data hooks: each one wraps the API client in signals for one screen.

mod athletes;
mod dashboard;
pub mod list;
mod login;
mod users;

pub use athletes::{use_athletes, Athletes};
pub use dashboard::use_dashboard;
pub use list::{use_failure_toast, ListState, ResponseOrder, LIST_RESPONSE_ORDER, PAGE_LIMIT};
pub use login::{use_login, Login};
pub use users::{use_users, Users};
