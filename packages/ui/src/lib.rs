//! Shared UI of the ARU CRM admin panel: widgets, data hooks, form rules and screens.

pub mod components;
pub mod dom;
pub mod filters;
pub mod forms;
pub mod hooks;
pub mod masks;
pub mod media;
pub mod pagination;
pub mod photo_capture;
pub mod timer;
pub mod validation;
pub mod views;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod auth;
pub use auth::{
    refresh_user, sign_out, use_auth, use_session, Api, AuthProvider, AuthState, RequireAuth,
    LOGIN_PATH,
};
