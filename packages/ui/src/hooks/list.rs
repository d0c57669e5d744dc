//! State behind a paginated listing.
//!
//! Overlapping fetches resolve by request order, not arrival order: a response
//! to a superseded request is dropped. This departs from the last-response-wins
//! behavior the panel used to have; [`ResponseOrder::LastArrival`] restores it.

use api::{ApiError, Page, PaginationData};
use dioxus::prelude::*;

use crate::components::use_toast;

pub const PAGE_LIMIT: u32 = 10;

/// Which of several overlapping fetches a listing shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseOrder {
    /// Only the answer to the most recent request is applied.
    #[default]
    LatestRequest,
    /// Whatever answers last is applied, stale or not.
    LastArrival,
}

/// Order used by the athlete and user listings.
pub const LIST_RESPONSE_ORDER: ResponseOrder = ResponseOrder::LatestRequest;

/// Rows, pagination and request status of one listing.
///
/// Every fetch takes a generation number from [`ListState::begin`]; only the answer to
/// the latest one is applied, so a slow response never overwrites a newer page.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub pagination: PaginationData,
    pub loading: bool,
    pub error: Option<String>,
    order: ResponseOrder,
    generation: u64,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            pagination: PaginationData::default(),
            loading: true,
            error: None,
            order: ResponseOrder::default(),
            generation: 0,
        }
    }
}

impl<T> ListState<T> {
    pub fn with_order(order: ResponseOrder) -> Self {
        Self {
            order,
            ..Self::default()
        }
    }

    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.generation
    }

    /// The current load failure, tagged with its fetch so that the same message
    /// from two separate fetches still counts as two failures.
    pub fn failure(&self) -> Option<(u64, String)> {
        self.error.clone().map(|message| (self.generation, message))
    }

    /// Apply the outcome of fetch `generation`. Returns false when it was dropped as stale.
    pub fn finish(
        &mut self,
        generation: u64,
        result: Result<Page<T>, ApiError>,
        fallback: &str,
    ) -> bool {
        if self.order == ResponseOrder::LatestRequest && generation != self.generation {
            tracing::debug!(generation, latest = self.generation, "dropping stale page");
            return false;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.pagination = page.pagination();
                self.items = page.data;
            }
            Err(e) => {
                tracing::error!("Failed to load list: {}", e);
                self.error = Some(e.user_message(fallback));
            }
        }
        true
    }
}

/// Raise an error toast once for every failed load of `state`, alongside the
/// inline banner.
pub fn use_failure_toast<T: 'static>(state: Signal<ListState<T>>) {
    let toaster = use_toast();
    let failure = use_memo(move || state.read().failure());
    use_effect(move || {
        if let Some((_, message)) = failure() {
            toaster.error(message);
        }
    });
}

/// Outcome of a mutation as the screens consume it: the server's message on failure.
pub fn mutation_result(result: Result<(), ApiError>, fallback: &str) -> Result<(), String> {
    result.map_err(|e| {
        tracing::warn!("{}: {}", fallback, e);
        e.user_message(fallback)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(names: &[&str], page: u32) -> Page<String> {
        Page {
            data: names.iter().map(|n| n.to_string()).collect(),
            total: 23,
            page,
            limit: PAGE_LIMIT,
            total_pages: 3,
        }
    }

    #[test]
    fn test_latest_fetch_wins() {
        let mut state = ListState::<String>::default();
        let first = state.begin();
        let second = state.begin();

        assert!(state.finish(second, Ok(page(&["Bia"], 2)), "Erro ao carregar atletas"));
        assert!(!state.finish(first, Ok(page(&["Ana"], 1)), "Erro ao carregar atletas"));
        assert_eq!(state.items, vec!["Bia".to_string()]);
        assert_eq!(state.pagination.page, 2);
        assert!(!state.loading);
    }

    #[test]
    fn test_last_arrival_order_applies_stale_answers() {
        let mut state = ListState::<String>::with_order(ResponseOrder::LastArrival);
        let first = state.begin();
        let second = state.begin();

        assert!(state.finish(second, Ok(page(&["Bia"], 2)), "Erro ao carregar atletas"));
        assert!(state.finish(first, Ok(page(&["Ana"], 1)), "Erro ao carregar atletas"));
        assert_eq!(state.items, vec!["Ana".to_string()]);
        assert_eq!(state.pagination.page, 1);
    }

    #[test]
    fn test_error_keeps_previous_rows() {
        let mut state = ListState::<String>::default();
        let generation = state.begin();
        state.finish(generation, Ok(page(&["Ana"], 1)), "x");

        let generation = state.begin();
        assert_eq!(state.error, None);
        let failure = ApiError::Status {
            status: 500,
            message: None,
        };
        state.finish(generation, Err(failure), "Erro ao carregar usuários");
        assert_eq!(state.error.as_deref(), Some("Erro ao carregar usuários"));
        assert_eq!(state.items.len(), 1);
    }

    #[test]
    fn test_each_failed_fetch_is_a_separate_failure() {
        let mut state = ListState::<String>::default();
        let outage = || ApiError::Status {
            status: 503,
            message: None,
        };

        let generation = state.begin();
        state.finish(generation, Err(outage()), "Erro ao carregar atletas");
        let first = state.failure();
        assert_eq!(
            first.as_ref().map(|(_, m)| m.as_str()),
            Some("Erro ao carregar atletas")
        );

        let generation = state.begin();
        assert_eq!(state.failure(), None);
        state.finish(generation, Err(outage()), "Erro ao carregar atletas");
        assert!(state.failure().is_some());
        assert_ne!(state.failure(), first);

        let generation = state.begin();
        state.finish(generation, Ok(page(&["Ana"], 1)), "Erro ao carregar atletas");
        assert_eq!(state.failure(), None);
    }

    #[test]
    fn test_mutation_result_carries_server_message() {
        let conflict = ApiError::Status {
            status: 409,
            message: Some("E-mail já cadastrado".to_string()),
        };
        assert_eq!(
            mutation_result(Err(conflict), "Erro ao criar usuário"),
            Err("E-mail já cadastrado".to_string())
        );
        assert_eq!(
            mutation_result(Err(ApiError::Network("offline".into())), "Erro ao criar usuário"),
            Err("Erro ao criar usuário".to_string())
        );
        assert_eq!(mutation_result(Ok(()), "x"), Ok(()));
    }
}
