use api::{UserListItem, UserPayload};
use dioxus::prelude::*;

use super::shell::{ErrorBanner, LoadingState, PageHeader};
use super::user_form::UserForm;
use crate::components::{
    options, use_toast, Badge, BadgeVariant, Button, Column, DropdownItem, DropdownMenu, Input,
    Modal, ModalSize, Select, StatusBadge, Table, TableFilters,
};
use crate::dom;
use crate::filters::{FilterState, UserFilterDraft, ROLE_FILTER_OPTIONS, STATUS_FILTER_OPTIONS};
use crate::forms::FormMode;
use crate::hooks::{use_failure_toast, use_users};

#[derive(Debug, Clone, PartialEq)]
enum Dialog {
    Closed,
    Create,
    Edit(UserListItem),
    View(UserListItem),
}

impl Dialog {
    fn title(&self) -> &'static str {
        match self {
            Dialog::Closed | Dialog::Create => "Novo usuário",
            Dialog::Edit(_) => "Editar usuário",
            Dialog::View(_) => "Visualizar usuário",
        }
    }

    fn mode(&self) -> FormMode {
        match self {
            Dialog::Edit(_) => FormMode::Edit,
            Dialog::View(_) => FormMode::View,
            _ => FormMode::Create,
        }
    }

    fn user(&self) -> Option<UserListItem> {
        match self {
            Dialog::Edit(u) | Dialog::View(u) => Some(u.clone()),
            _ => None,
        }
    }

    fn key(&self) -> String {
        match self {
            Dialog::Closed => "closed".to_string(),
            Dialog::Create => "create".to_string(),
            Dialog::Edit(u) => format!("edit-{}", u.id),
            Dialog::View(u) => format!("view-{}", u.id),
        }
    }
}

/// Row actions that change a user's standing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UserAction {
    Activate,
    Deactivate,
    Remove,
}

impl UserAction {
    /// Confirmation prompt; only removal asks.
    fn confirmation(&self, name: &str) -> Option<String> {
        match self {
            UserAction::Remove => Some(format!("Tem certeza que deseja remover o usuário {name}?")),
            _ => None,
        }
    }

    fn success(&self) -> &'static str {
        match self {
            UserAction::Activate => "Usuário ativado com sucesso!",
            UserAction::Deactivate => "Usuário desativado com sucesso!",
            UserAction::Remove => "Usuário removido com sucesso!",
        }
    }
}

/// User management: filters, paginated table and the create/edit/view dialog.
#[component]
pub fn UsersView(#[props(default)] open_create: bool) -> Element {
    let mut filters = use_signal(FilterState::<UserFilterDraft>::default);
    let users = use_users(filters);
    let toaster = use_toast();
    use_failure_toast(users.state());
    let mut dialog = use_signal(move || {
        if open_create {
            Dialog::Create
        } else {
            Dialog::Closed
        }
    });
    let mut saving = use_signal(|| false);
    let mut submit_error = use_signal(|| None::<String>);

    let open = use_callback(move |next: Dialog| {
        submit_error.set(None);
        dialog.set(next);
    });

    let act = use_callback({
        let users = users.clone();
        move |(action, user): (UserAction, UserListItem)| {
            if let Some(question) = action.confirmation(&user.name) {
                if !dom::confirm(&question) {
                    return;
                }
            }
            let users = users.clone();
            spawn(async move {
                let result = match action {
                    UserAction::Activate => users.activate(&user.id).await,
                    UserAction::Deactivate => users.deactivate(&user.id).await,
                    UserAction::Remove => users.delete(&user.id).await,
                };
                match result {
                    Ok(()) => toaster.success(action.success()),
                    Err(message) => toaster.error(message),
                }
            });
        }
    });

    let on_submit = {
        let users = users.clone();
        move |payload: UserPayload| {
            let users = users.clone();
            let current = dialog();
            spawn(async move {
                saving.set(true);
                let (result, done) = match &current {
                    Dialog::Edit(user) => (
                        users.update(&user.id, &payload).await,
                        "Usuário atualizado com sucesso!",
                    ),
                    _ => (users.create(&payload).await, "Usuário criado com sucesso!"),
                };
                saving.set(false);
                match result {
                    Ok(()) => {
                        toaster.success(done);
                        dialog.set(Dialog::Closed);
                    }
                    Err(message) => {
                        toaster.error(message.clone());
                        submit_error.set(Some(message));
                    }
                }
            });
        }
    };

    let columns = user_columns(open, act);
    let state = users.state();
    let list = state.read();
    let current = dialog();
    let form_key = current.key();

    rsx! {
        div {
            class: "py-6",
            PageHeader {
                title: "Gerenciar Usuários",
                subtitle: "Visualize e gerencie os usuários do sistema.",
                actions: rsx! {
                    Button {
                        onclick: move |_: MouseEvent| open.call(Dialog::Create),
                        "Adicionar usuário"
                    }
                },
            }
            UserFilterBar { filters }
            div {
                class: "px-4 sm:px-6 lg:px-8",
                if let Some(message) = list.error.clone() {
                    div { class: "mb-4", ErrorBanner { message } }
                }
                if list.loading && list.items.is_empty() {
                    LoadingState { message: "Carregando usuários..." }
                } else {
                    Table {
                        rows: list.items.clone(),
                        columns,
                        empty_message: "Nenhum usuário encontrado com os filtros aplicados.",
                        pagination: list.pagination.clone(),
                        on_page_change: move |page| filters.write().set_page(page),
                    }
                }
            }
            Modal {
                open: current != Dialog::Closed,
                on_close: move |_| dialog.set(Dialog::Closed),
                title: current.title(),
                size: ModalSize::Md,
                UserForm {
                    key: "{form_key}",
                    mode: current.mode(),
                    user: current.user(),
                    saving: saving(),
                    error: submit_error(),
                    on_submit,
                    on_cancel: move |_| dialog.set(Dialog::Closed),
                }
            }
        }
    }
}

fn user_columns(
    open: Callback<Dialog>,
    act: Callback<(UserAction, UserListItem)>,
) -> Vec<Column<UserListItem>> {
    vec![
        Column::text("name", "Nome", |u: &UserListItem| u.name.clone()),
        Column::text("username", "Usuário", |u: &UserListItem| u.username.clone()),
        Column::text("email", "E-mail", |u: &UserListItem| u.email.clone()),
        Column::text("role", "Função", |u: &UserListItem| u.role.label().to_string()),
        Column::custom("isActive", "Status", |u: &UserListItem| {
            let active = u.is_active;
            rsx! { StatusBadge { active } }
        }),
        Column::custom("isFirstLogin", "Primeiro Acesso", |u: &UserListItem| {
            if u.is_first_login {
                rsx! { Badge { variant: BadgeVariant::Accent, "Sim" } }
            } else {
                rsx! { Badge { variant: BadgeVariant::Neutral, "Não" } }
            }
        }),
        Column::custom("actions", "", move |u: &UserListItem| {
            let (view, edit, toggle, remove) = (u.clone(), u.clone(), u.clone(), u.clone());
            let (toggle_label, toggle_action) = if u.is_active {
                ("Desativar", UserAction::Deactivate)
            } else {
                ("Ativar", UserAction::Activate)
            };
            let items = vec![
                DropdownItem::new("Visualizar", move |_| open.call(Dialog::View(view.clone()))),
                DropdownItem::new("Editar", move |_| open.call(Dialog::Edit(edit.clone()))),
                DropdownItem::new(toggle_label, move |_| act.call((toggle_action, toggle.clone()))),
                DropdownItem::new("Remover", move |_| {
                    act.call((UserAction::Remove, remove.clone()))
                })
                .danger(),
            ];
            rsx! { DropdownMenu { items } }
        })
        .class("text-right w-12"),
    ]
}

#[component]
fn UserFilterBar(filters: Signal<FilterState<UserFilterDraft>>) -> Element {
    let mut filters = filters;
    let draft = filters.read().draft.clone();
    let apply = move |_: ()| filters.write().apply();

    rsx! {
        TableFilters {
            on_apply: apply,
            on_clear: move |_| filters.write().clear(),
            Input {
                label: "Buscar",
                class: "min-w-[240px]",
                value: draft.search,
                placeholder: "Nome, e-mail ou usuário",
                oninput: move |v| filters.write().draft.search = v,
                on_enter: apply,
            }
            Select {
                label: "Função",
                class: "min-w-[160px]",
                value: draft.role,
                options: options(&ROLE_FILTER_OPTIONS),
                onchange: move |v| filters.write().draft.role = v,
            }
            Select {
                label: "Status",
                class: "min-w-[140px]",
                value: draft.status,
                options: options(&STATUS_FILTER_OPTIONS),
                onchange: move |v| filters.write().draft.status = v,
            }
        }
    }
}
