//! # User models
//!
//! Two views of a person who can sign in to the panel:
//!
//! ## [`SessionUser`]
//!
//! What `/v1/auth/me` and `/v1/auth/login` return for the signed-in account. Only
//! `userId` and `email` are guaranteed; `name`, `role` and the first-login flags are
//! optional. [`SessionUser::display_name`] falls back to the e-mail address.
//!
//! ## [`UserListItem`]
//!
//! One row of the `/v1/users` listing, with username, role, and the active and
//! first-login flags.
//!
//! [`UserPayload`] is the create/update body and [`UserFilters`] the listing filters.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::http::QueryParams;

/// Account role. Unknown values from the server are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Manager,
    User,
    Other(String),
}

impl Role {
    pub const ALL: [Role; 3] = [Role::User, Role::Manager, Role::Admin];

    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::User => "user",
            Role::Other(other) => other,
        }
    }

    /// Portuguese label shown in tables and selects.
    pub fn label(&self) -> &str {
        match self {
            Role::Admin => "Administrador",
            Role::Manager => "Gerente",
            Role::User => "Usuário",
            Role::Other(other) => other,
        }
    }

    /// Parse one of the three assignable roles; anything else is `None`.
    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "admin" => Some(Role::Admin),
            "manager" => Some(Role::Manager),
            "user" => Some(Role::User),
            _ => None,
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Role::parse(&value).unwrap_or(Role::Other(value))
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The signed-in account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub user_id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub is_first_login: Option<bool>,
    #[serde(default)]
    pub requires_password_setup: Option<bool>,
}

impl SessionUser {
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.email,
        }
    }

    /// First letter of the display name, upper-cased, for the avatar bubble.
    pub fn initial(&self) -> String {
        self.display_name()
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserListItem {
    pub id: String,
    pub email: String,
    pub name: String,
    pub username: String,
    pub role: Role,
    pub is_active: bool,
    pub is_first_login: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Body of `POST /v1/users` and `PATCH /v1/users/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    pub username: String,
    pub role: Role,
}

/// Applied filters of the users listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilters {
    pub search: Option<String>,
    pub role: Option<Role>,
    pub is_active: Option<bool>,
}

impl UserFilters {
    pub fn to_query(&self, page: u32, limit: u32) -> QueryParams {
        QueryParams::new()
            .set("page", page)
            .set("limit", limit)
            .set_opt("search", self.search.as_deref())
            .set_opt("role", self.role.as_ref())
            .set_opt("isActive", self.is_active)
    }
}
