//! Wire types exchanged with the backend. Field names follow the JSON (camelCase).

mod athlete;
mod dashboard;
mod page;
mod user;

pub use athlete::{AthleteFilters, AthleteListItem, AthletePayload, DominantHand};
pub use dashboard::{CategoryCount, DashboardData};
pub use page::{Page, PaginationData};
pub use user::{Role, SessionUser, UserFilters, UserListItem, UserPayload};
