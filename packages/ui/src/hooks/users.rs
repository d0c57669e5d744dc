use api::{UserFilters, UserListItem, UserPayload};
use dioxus::prelude::*;

use super::list::{mutation_result, ListState, LIST_RESPONSE_ORDER, PAGE_LIMIT};
use crate::auth::{use_session, Api};
use crate::filters::{FilterState, UserFilterDraft};

const LOAD_ERROR: &str = "Erro ao carregar usuários";
const CREATE_ERROR: &str = "Erro ao criar usuário";
const UPDATE_ERROR: &str = "Erro ao atualizar usuário";
const ACTIVATE_ERROR: &str = "Erro ao ativar usuário";
const DEACTIVATE_ERROR: &str = "Erro ao desativar usuário";
const DELETE_ERROR: &str = "Erro ao remover usuário";

/// The users listing and its mutations.
#[derive(Clone, PartialEq)]
pub struct Users {
    api: Api,
    state: Signal<ListState<UserListItem>>,
    query: Memo<(UserFilters, u32)>,
}

pub fn use_users(filters: Signal<FilterState<UserFilterDraft>>) -> Users {
    let api = use_session();
    let state = use_signal(|| ListState::with_order(LIST_RESPONSE_ORDER));
    let query = use_memo(move || {
        let filters = filters.read();
        (filters.applied().clone(), filters.page())
    });
    let users = Users { api, state, query };

    use_effect({
        let users = users.clone();
        move || {
            let (filters, page) = query();
            let users = users.clone();
            spawn(async move { users.fetch(&filters, page).await });
        }
    });

    users
}

impl Users {
    pub fn state(&self) -> Signal<ListState<UserListItem>> {
        self.state
    }

    async fn fetch(&self, filters: &UserFilters, page: u32) {
        let mut state = self.state;
        let generation = state.write().begin();
        let result = self.api.client().list_users(filters, page, PAGE_LIMIT).await;
        state.write().finish(generation, result, LOAD_ERROR);
    }

    pub async fn reload(&self) {
        let (filters, page) = self.query.peek().clone();
        self.fetch(&filters, page).await;
    }

    pub async fn create(&self, payload: &UserPayload) -> Result<(), String> {
        mutation_result(self.api.client().create_user(payload).await, CREATE_ERROR)?;
        self.reload().await;
        Ok(())
    }

    pub async fn update(&self, id: &str, payload: &UserPayload) -> Result<(), String> {
        mutation_result(self.api.client().update_user(id, payload).await, UPDATE_ERROR)?;
        self.reload().await;
        Ok(())
    }

    pub async fn activate(&self, id: &str) -> Result<(), String> {
        mutation_result(self.api.client().activate_user(id).await, ACTIVATE_ERROR)?;
        self.reload().await;
        Ok(())
    }

    pub async fn deactivate(&self, id: &str) -> Result<(), String> {
        mutation_result(self.api.client().deactivate_user(id).await, DEACTIVATE_ERROR)?;
        self.reload().await;
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<(), String> {
        mutation_result(self.api.client().delete_user(id).await, DELETE_ERROR)?;
        self.reload().await;
        Ok(())
    }
}
