//! # API crate: REST client for the ARU CRM backend
//!
//! Every screen of the admin panel talks to the backend through this crate. It knows
//! nothing about Dioxus: the UI crate wraps it in signals and context, and tests drive it
//! through an in-memory [`Transport`].
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Base URL resolution (`ARU_API_URL`, `.env` on native, `/api` default) |
//! | [`error`] | [`ApiError`], the single error type every call returns |
//! | [`transport`] | The [`Transport`] seam, request/response values, multipart forms, and the reqwest implementation |
//! | [`http`] | [`HttpClient`]: verb methods, header merge, query strings, the 401 hook |
//! | [`models`] | Wire types for users, athletes, dashboard and list pages |
//! | [`auth`] | Auth endpoints, [`Session`] state and listeners, [`SessionManager`] (check, login, logout) |
//! | [`athletes`], [`users`], [`dashboard`] | One `impl HttpClient` block per backend resource |
//!
//! ## Unauthorized responses
//!
//! A 401 from any endpoint other than `/v1/auth/me` and `/v1/auth/login` is reported to
//! the [`UnauthorizedHandler`] given to the client at construction, before the response is
//! handed back to the caller. [`SessionManager::new`] wires its own [`Session`] in as that
//! handler, so an expired cookie clears the cached user and emits
//! [`SessionEvent::Expired`].

pub mod athletes;
pub mod auth;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod http;
pub mod models;
pub mod transport;
pub mod users;

#[cfg(test)]
pub(crate) mod mock;

pub use config::ApiConfig;
pub use error::ApiError;
pub use http::{HttpClient, QueryParams, RequestOptions, UnauthorizedHandler};
pub use models::{
    AthleteFilters, AthleteListItem, AthletePayload, CategoryCount, DashboardData,
    DominantHand, Page, PaginationData, Role, SessionUser, UserFilters, UserListItem,
    UserPayload,
};
pub use auth::{
    CodeFlow, CodeValidation, ListenerId, ProfileUpdate, Session, SessionEvent, SessionManager,
};
pub use transport::{
    ApiRequest, ApiResponse, Body, FilePart, Method, MultipartForm, ReqwestTransport, Transport,
};
