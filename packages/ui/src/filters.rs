//! Listing filters: what the user is typing versus what the query uses.
//!
//! Inputs edit a draft. Only [`FilterState::apply`] promotes it to the applied filters,
//! and both apply and [`FilterState::clear`] return the listing to page 1.

use api::{AthleteFilters, Role, UserFilters};

use crate::forms::parse_number;

/// Raw filter inputs convert into the typed filters sent to the backend.
pub trait FilterDraft: Default + Clone + PartialEq {
    type Applied: Default + Clone + PartialEq;

    fn to_applied(&self) -> Self::Applied;
}

fn trimmed(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// `""` is "any status".
fn parse_status(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

pub const STATUS_FILTER_OPTIONS: [(&str, &str); 3] = [
    ("", "Todos os status"),
    ("true", "Ativo"),
    ("false", "Inativo"),
];

pub const ROLE_FILTER_OPTIONS: [(&str, &str); 4] = [
    ("", "Todas as funções"),
    ("admin", "Administrador"),
    ("manager", "Gerente"),
    ("user", "Usuário"),
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AthleteFilterDraft {
    pub name: String,
    pub notes: String,
    pub status: String,
    pub min_height: String,
    pub max_height: String,
}

impl FilterDraft for AthleteFilterDraft {
    type Applied = AthleteFilters;

    fn to_applied(&self) -> AthleteFilters {
        AthleteFilters {
            is_active: parse_status(&self.status),
            min_height: parse_number(&self.min_height),
            max_height: parse_number(&self.max_height),
            name: trimmed(&self.name),
            notes: trimmed(&self.notes),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilterDraft {
    pub search: String,
    pub role: String,
    pub status: String,
}

impl FilterDraft for UserFilterDraft {
    type Applied = UserFilters;

    fn to_applied(&self) -> UserFilters {
        UserFilters {
            search: trimmed(&self.search),
            role: Role::parse(&self.role),
            is_active: parse_status(&self.status),
        }
    }
}

/// Draft, applied filters and current page of one listing.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState<D: FilterDraft> {
    pub draft: D,
    applied: D::Applied,
    page: u32,
}

impl<D: FilterDraft> Default for FilterState<D> {
    fn default() -> Self {
        Self {
            draft: D::default(),
            applied: D::Applied::default(),
            page: 1,
        }
    }
}

impl<D: FilterDraft> FilterState<D> {
    pub fn applied(&self) -> &D::Applied {
        &self.applied
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn apply(&mut self) {
        self.applied = self.draft.to_applied();
        self.page = 1;
    }

    pub fn clear(&mut self) {
        self.draft = D::default();
        self.applied = D::Applied::default();
        self.page = 1;
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_is_not_applied_until_filter() {
        let mut state = FilterState::<AthleteFilterDraft>::default();
        state.set_page(4);
        state.draft.name = "  Ana ".to_string();
        assert_eq!(state.applied(), &AthleteFilters::default());
        assert_eq!(state.page(), 4);

        state.apply();
        assert_eq!(state.applied().name.as_deref(), Some("Ana"));
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_athlete_draft_conversion() {
        let draft = AthleteFilterDraft {
            name: " ".to_string(),
            notes: "ponta".to_string(),
            status: "false".to_string(),
            min_height: "160".to_string(),
            max_height: "alto".to_string(),
        };
        let applied = draft.to_applied();
        assert_eq!(applied.name, None);
        assert_eq!(applied.notes.as_deref(), Some("ponta"));
        assert_eq!(applied.is_active, Some(false));
        assert_eq!(applied.min_height, Some(160.0));
        assert_eq!(applied.max_height, None);
    }

    #[test]
    fn test_user_draft_conversion() {
        let draft = UserFilterDraft {
            search: "maria".to_string(),
            role: "manager".to_string(),
            status: String::new(),
        };
        let applied = draft.to_applied();
        assert_eq!(applied.search.as_deref(), Some("maria"));
        assert_eq!(applied.role, Some(Role::Manager));
        assert_eq!(applied.is_active, None);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut state = FilterState::<UserFilterDraft>::default();
        state.draft.search = "joão".to_string();
        state.apply();
        state.set_page(3);

        state.clear();
        assert_eq!(state.draft, UserFilterDraft::default());
        assert_eq!(state.applied(), &UserFilters::default());
        assert_eq!(state.page(), 1);
    }
}
