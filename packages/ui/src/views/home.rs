use api::DashboardData;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaChartColumn, FaCircleCheck, FaUserPlus, FaUsers};
use dioxus_free_icons::Icon;

use super::shell::{ErrorBanner, LoadingState};
use crate::components::{Button, ButtonSize, ButtonVariant, Card};
use crate::hooks::use_dashboard;

/// Dashboard: aggregate counts, category distribution and shortcuts.
#[component]
pub fn HomeView(
    on_navigate_users: EventHandler<()>,
    on_navigate_athletes: EventHandler<()>,
    /// Open the users page with its create dialog.
    on_create_user: EventHandler<()>,
    /// Open the athletes page with its create dialog.
    on_create_athlete: EventHandler<()>,
) -> Element {
    let dashboard = use_dashboard();

    let data = match &*dashboard.read() {
        None => return rsx! { LoadingState { message: "Carregando dashboard..." } },
        Some(Err(message)) => return rsx! { ErrorBanner { message: message.clone() } },
        Some(Ok(data)) => data.clone(),
    };
    let year = data.reference_year;

    rsx! {
        div {
            class: "space-y-6",
            div {
                class: "flex flex-col gap-4 sm:flex-row sm:items-center sm:justify-between",
                div {
                    h1 { class: "text-3xl font-bold text-neutral-100", "Dashboard" }
                    p {
                        class: "mt-2 mr-2 text-sm text-neutral-400",
                        "Visão geral do sistema - Ano de referência: {year}"
                    }
                }
                div {
                    class: "flex gap-3",
                    Button {
                        variant: ButtonVariant::Neutral,
                        size: ButtonSize::Sm,
                        onclick: move |_: MouseEvent| on_navigate_users.call(()),
                        "Ver Usuários"
                    }
                    Button {
                        variant: ButtonVariant::Neutral,
                        size: ButtonSize::Sm,
                        onclick: move |_: MouseEvent| on_navigate_athletes.call(()),
                        "Ver Atletas"
                    }
                }
            }
            DashboardGrid { data, on_create_user, on_create_athlete }
        }
    }
}

#[component]
fn DashboardGrid(
    data: DashboardData,
    on_create_user: EventHandler<()>,
    on_create_athlete: EventHandler<()>,
) -> Element {
    let active_percentage = data.active_percentage();
    let top = data.top_category();
    let bars: Vec<(String, u64, f64)> = data
        .athletes_by_category
        .iter()
        .map(|entry| (entry.category.clone(), entry.count, data.category_share(entry)))
        .collect();

    rsx! {
        div {
            class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4",
            StatCard {
                label: "Total de Atletas",
                value: data.total_athletes.to_string(),
                tint: "primary",
                Icon { icon: FaUsers, width: 22, height: 22 }
            }
            StatCard {
                label: "Atletas Ativos",
                value: data.active_athletes.to_string(),
                note: format!("{active_percentage}% do total"),
                tint: "green",
                Icon { icon: FaCircleCheck, width: 22, height: 22 }
            }
            StatCard {
                label: "Total de Usuários",
                value: data.total_users.to_string(),
                tint: "primary",
                Icon { icon: FaUserPlus, width: 22, height: 22 }
            }
            StatCard {
                label: "Categoria Principal",
                value: top.category.clone(),
                note: format!("{} atletas", top.count),
                tint: "accent",
                Icon { icon: FaChartColumn, width: 22, height: 22 }
            }
            Card {
                class: "md:col-span-2 lg:col-span-2 p-6",
                div {
                    class: "mb-4",
                    h3 { class: "text-lg font-semibold text-neutral-100 mb-1", "Distribuição por Categoria" }
                    p { class: "text-sm text-neutral-400", "Atletas distribuídos por faixa etária" }
                }
                div {
                    class: "space-y-3",
                    for (category, count, share) in bars {
                        div {
                            key: "{category}",
                            div {
                                class: "flex items-center justify-between mb-1",
                                span { class: "text-sm font-medium text-neutral-300", "{category}" }
                                span { class: "text-sm text-neutral-400", "{count}" }
                            }
                            div {
                                class: "w-full bg-neutral-800 rounded-full h-2",
                                div {
                                    class: "bg-primary-600 h-2 rounded-full transition-all duration-300",
                                    style: "width: {share}%",
                                }
                            }
                        }
                    }
                }
            }
            Card {
                class: "md:col-span-2 lg:col-span-2 p-6",
                div {
                    class: "mb-4",
                    h3 { class: "text-lg font-semibold text-neutral-100 mb-1", "Ações Rápidas" }
                    p { class: "text-sm text-neutral-400", "Atalhos para operações frequentes" }
                }
                div {
                    class: "grid grid-cols-1 sm:grid-cols-2 gap-3",
                    QuickAction {
                        title: "Adicionar Usuário",
                        description: "Criar novo usuário do sistema",
                        onclick: move |_| on_create_user.call(()),
                    }
                    QuickAction {
                        title: "Adicionar Atleta",
                        description: "Cadastrar novo atleta",
                        onclick: move |_| on_create_athlete.call(()),
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(
    label: String,
    value: String,
    #[props(default)] note: Option<String>,
    /// Colour family of the card accent: `primary`, `green` or `accent`.
    tint: String,
    children: Element,
) -> Element {
    let (hover, badge) = match tint.as_str() {
        "green" => ("hover:border-green-500/50", "bg-green-500/20 text-green-500"),
        "accent" => ("hover:border-accent-500/50", "bg-accent-500/20 text-accent-500"),
        _ => ("hover:border-primary-600/50", "bg-primary-600/20 text-primary-600"),
    };
    rsx! {
        Card {
            class: "p-6 transition-colors {hover}",
            div {
                class: "flex items-start justify-between",
                div {
                    p { class: "text-sm font-medium text-neutral-400 mb-1", "{label}" }
                    p { class: "text-3xl font-bold text-neutral-100", "{value}" }
                    if let Some(note) = note {
                        p { class: "text-xs text-neutral-500 mt-1", "{note}" }
                    }
                }
                div { class: "p-3 rounded-lg {badge}", {children} }
            }
        }
    }
}

#[component]
fn QuickAction(title: String, description: String, onclick: EventHandler<()>) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: "p-4 rounded-lg bg-neutral-800 hover:bg-neutral-700 border border-neutral-700 hover:border-primary-600/50 transition-all text-left group",
            onclick: move |_| onclick.call(()),
            div {
                class: "flex items-center gap-3",
                div {
                    class: "p-2 bg-primary-600/20 rounded-lg group-hover:bg-primary-600/30 transition-colors text-primary-600",
                    Icon { icon: FaUserPlus, width: 18, height: 18 }
                }
                div {
                    p { class: "text-sm font-medium text-neutral-100", "{title}" }
                    p { class: "text-xs text-neutral-400", "{description}" }
                }
            }
        }
    }
}
