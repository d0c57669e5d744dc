use api::{AthleteFilters, AthleteListItem, AthletePayload};
use dioxus::prelude::*;

use super::list::{mutation_result, ListState, LIST_RESPONSE_ORDER, PAGE_LIMIT};
use crate::auth::{use_session, Api};
use crate::filters::{AthleteFilterDraft, FilterState};

const LOAD_ERROR: &str = "Erro ao carregar atletas";
const CREATE_ERROR: &str = "Erro ao criar atleta";
const UPDATE_ERROR: &str = "Erro ao atualizar atleta";
const DEACTIVATE_ERROR: &str = "Erro ao desativar atleta";

/// The athletes listing and its mutations.
#[derive(Clone, PartialEq)]
pub struct Athletes {
    api: Api,
    state: Signal<ListState<AthleteListItem>>,
    query: Memo<(AthleteFilters, u32)>,
}

/// Load athletes for the applied filters and page of `filters`, reloading whenever
/// either changes.
pub fn use_athletes(filters: Signal<FilterState<AthleteFilterDraft>>) -> Athletes {
    let api = use_session();
    let state = use_signal(|| ListState::with_order(LIST_RESPONSE_ORDER));
    let query = use_memo(move || {
        let filters = filters.read();
        (filters.applied().clone(), filters.page())
    });
    let athletes = Athletes { api, state, query };

    use_effect({
        let athletes = athletes.clone();
        move || {
            let (filters, page) = query();
            let athletes = athletes.clone();
            spawn(async move { athletes.fetch(&filters, page).await });
        }
    });

    athletes
}

impl Athletes {
    pub fn state(&self) -> Signal<ListState<AthleteListItem>> {
        self.state
    }

    async fn fetch(&self, filters: &AthleteFilters, page: u32) {
        let mut state = self.state;
        let generation = state.write().begin();
        let result = self.api.client().list_athletes(filters, page, PAGE_LIMIT).await;
        state.write().finish(generation, result, LOAD_ERROR);
    }

    pub async fn reload(&self) {
        let (filters, page) = self.query.peek().clone();
        self.fetch(&filters, page).await;
    }

    pub async fn create(&self, payload: &AthletePayload) -> Result<(), String> {
        mutation_result(self.api.client().create_athlete(payload).await, CREATE_ERROR)?;
        self.reload().await;
        Ok(())
    }

    pub async fn update(&self, id: &str, payload: &AthletePayload) -> Result<(), String> {
        mutation_result(self.api.client().update_athlete(id, payload).await, UPDATE_ERROR)?;
        self.reload().await;
        Ok(())
    }

    pub async fn deactivate(&self, id: &str) -> Result<(), String> {
        mutation_result(self.api.client().deactivate_athlete(id).await, DEACTIVATE_ERROR)?;
        self.reload().await;
        Ok(())
    }
}
