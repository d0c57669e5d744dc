use api::{AthleteListItem, AthletePayload};
use dioxus::prelude::*;

use super::athlete_form::AthleteForm;
use super::shell::{ErrorBanner, LoadingState, PageHeader};
use crate::components::{
    options, use_toast, Badge, BadgeVariant, Button, Column, DropdownItem, DropdownMenu, Input,
    Modal, ModalSize, Select, StatusBadge, Table, TableFilters,
};
use crate::dom;
use crate::filters::{AthleteFilterDraft, FilterState, STATUS_FILTER_OPTIONS};
use crate::forms::FormMode;
use crate::hooks::{use_athletes, use_failure_toast};
use crate::masks::{format_date_display, format_phone_display, truncate};

/// Which record dialog is showing.
#[derive(Debug, Clone, PartialEq)]
enum Dialog {
    Closed,
    Create,
    Edit(AthleteListItem),
    View(AthleteListItem),
}

impl Dialog {
    fn title(&self) -> &'static str {
        match self {
            Dialog::Closed | Dialog::Create => "Novo atleta",
            Dialog::Edit(_) => "Editar atleta",
            Dialog::View(_) => "Visualizar atleta",
        }
    }

    fn mode(&self) -> FormMode {
        match self {
            Dialog::Edit(_) => FormMode::Edit,
            Dialog::View(_) => FormMode::View,
            _ => FormMode::Create,
        }
    }

    fn athlete(&self) -> Option<AthleteListItem> {
        match self {
            Dialog::Edit(a) | Dialog::View(a) => Some(a.clone()),
            _ => None,
        }
    }

    /// Remounts the form whenever a different record is opened.
    fn key(&self) -> String {
        match self {
            Dialog::Closed => "closed".to_string(),
            Dialog::Create => "create".to_string(),
            Dialog::Edit(a) => format!("edit-{}", a.id),
            Dialog::View(a) => format!("view-{}", a.id),
        }
    }
}

fn optional(value: &Option<String>) -> String {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

fn number(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

/// Athlete management: filters, paginated table and the create/edit/view dialog.
#[component]
pub fn AthletesView(
    /// Open the create dialog right away (dashboard shortcut).
    #[props(default)]
    open_create: bool,
) -> Element {
    let mut filters = use_signal(FilterState::<AthleteFilterDraft>::default);
    let athletes = use_athletes(filters);
    let toaster = use_toast();
    use_failure_toast(athletes.state());
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

    let deactivate = use_callback({
        let athletes = athletes.clone();
        move |athlete: AthleteListItem| {
            let question = format!(
                "Tem certeza que deseja desativar o atleta {}?",
                athlete.full_name
            );
            if !dom::confirm(&question) {
                return;
            }
            let athletes = athletes.clone();
            spawn(async move {
                match athletes.deactivate(&athlete.id).await {
                    Ok(()) => toaster.success("Atleta desativado com sucesso!"),
                    Err(message) => toaster.error(message),
                }
            });
        }
    });

    let on_submit = {
        let athletes = athletes.clone();
        move |payload: AthletePayload| {
            let athletes = athletes.clone();
            let current = dialog();
            spawn(async move {
                saving.set(true);
                let (result, done) = match &current {
                    Dialog::Edit(athlete) => (
                        athletes.update(&athlete.id, &payload).await,
                        "Atleta atualizado com sucesso!",
                    ),
                    _ => (athletes.create(&payload).await, "Atleta criado com sucesso!"),
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

    let columns = athlete_columns(open, deactivate);
    let state = athletes.state();
    let list = state.read();
    let current = dialog();
    let form_key = current.key();

    rsx! {
        div {
            class: "py-6",
            PageHeader {
                title: "Gerenciar Atletas",
                subtitle: "Visualize e gerencie os atletas do sistema.",
                actions: rsx! {
                    Button {
                        onclick: move |_: MouseEvent| open.call(Dialog::Create),
                        "Adicionar atleta"
                    }
                },
            }
            AthleteFilterBar { filters }
            div {
                class: "px-4 sm:px-6 lg:px-8",
                if let Some(message) = list.error.clone() {
                    div { class: "mb-4", ErrorBanner { message } }
                }
                if list.loading && list.items.is_empty() {
                    LoadingState { message: "Carregando atletas..." }
                } else {
                    Table {
                        rows: list.items.clone(),
                        columns,
                        empty_message: "Nenhum atleta encontrado com os filtros aplicados.",
                        pagination: list.pagination.clone(),
                        on_page_change: move |page| filters.write().set_page(page),
                    }
                }
            }
            Modal {
                open: current != Dialog::Closed,
                on_close: move |_| dialog.set(Dialog::Closed),
                title: current.title(),
                size: ModalSize::Lg,
                AthleteForm {
                    key: "{form_key}",
                    mode: current.mode(),
                    athlete: current.athlete(),
                    saving: saving(),
                    error: submit_error(),
                    on_submit,
                    on_cancel: move |_| dialog.set(Dialog::Closed),
                }
            }
        }
    }
}

fn athlete_columns(
    open: Callback<Dialog>,
    deactivate: Callback<AthleteListItem>,
) -> Vec<Column<AthleteListItem>> {
    vec![
        Column::text("fullName", "Nome Completo", |a: &AthleteListItem| a.full_name.clone()),
        Column::custom("category", "Categoria", |a: &AthleteListItem| {
            let category = a.category.clone();
            rsx! { Badge { variant: BadgeVariant::Accent, "{category}" } }
        }),
        Column::text("birthDate", "Data de Nascimento", |a: &AthleteListItem| {
            format_date_display(&a.birth_date)
        }),
        Column::text("phone", "Telefone", |a: &AthleteListItem| format_phone_display(&a.phone)),
        Column::text("guardianName", "Responsável", |a: &AthleteListItem| {
            optional(&a.guardian_name)
        }),
        Column::text("notes", "Observações", |a: &AthleteListItem| match &a.notes {
            Some(notes) if !notes.trim().is_empty() => truncate(notes, 40),
            _ => "-".to_string(),
        }),
        Column::text("heightCm", "Altura (cm)", |a: &AthleteListItem| number(a.height_cm)),
        Column::text("weightKg", "Peso (kg)", |a: &AthleteListItem| number(a.weight_kg)),
        Column::custom("isActive", "Status", |a: &AthleteListItem| {
            let active = a.is_active;
            rsx! { StatusBadge { active } }
        }),
        Column::custom("actions", "", move |a: &AthleteListItem| {
            let (view, edit, target) = (a.clone(), a.clone(), a.clone());
            let items = vec![
                DropdownItem::new("Visualizar", move |_| open.call(Dialog::View(view.clone()))),
                DropdownItem::new("Editar", move |_| open.call(Dialog::Edit(edit.clone()))),
                DropdownItem::new("Desativar", move |_| deactivate.call(target.clone())).danger(),
            ];
            rsx! { DropdownMenu { items } }
        })
        .class("text-right w-12"),
    ]
}

#[component]
fn AthleteFilterBar(filters: Signal<FilterState<AthleteFilterDraft>>) -> Element {
    let mut filters = filters;
    let draft = filters.read().draft.clone();
    let apply = move |_: ()| filters.write().apply();

    rsx! {
        TableFilters {
            on_apply: apply,
            on_clear: move |_| filters.write().clear(),
            Input {
                label: "Nome",
                class: "min-w-[200px]",
                value: draft.name,
                placeholder: "Buscar por nome",
                oninput: move |v| filters.write().draft.name = v,
                on_enter: apply,
            }
            Input {
                label: "Observações",
                class: "min-w-[200px]",
                value: draft.notes,
                placeholder: "Buscar nas observações",
                oninput: move |v| filters.write().draft.notes = v,
                on_enter: apply,
            }
            Select {
                label: "Status",
                class: "min-w-[140px]",
                value: draft.status,
                options: options(&STATUS_FILTER_OPTIONS),
                onchange: move |v| filters.write().draft.status = v,
            }
            Input {
                label: "Altura mínima (cm)",
                r#type: "number",
                class: "w-36",
                value: draft.min_height,
                placeholder: "Ex: 160",
                oninput: move |v| filters.write().draft.min_height = v,
                on_enter: apply,
            }
            Input {
                label: "Altura máxima (cm)",
                r#type: "number",
                class: "w-36",
                value: draft.max_height,
                placeholder: "Ex: 190",
                oninput: move |v| filters.write().draft.max_height = v,
                on_enter: apply,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_cells_fall_back_to_dash() {
        assert_eq!(optional(&None), "-");
        assert_eq!(optional(&Some("  ".to_string())), "-");
        assert_eq!(optional(&Some("Maria Souza".to_string())), "Maria Souza");
        assert_eq!(number(None), "-");
        assert_eq!(number(Some(72.5)), "72.5");
    }
}
