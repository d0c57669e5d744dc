//! Signed-in chrome: sidebar navigation, the user card and the mobile drawer.

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaBars, FaGauge, FaPersonRunning, FaRightFromBracket, FaUser, FaUsers,
};
use dioxus_free_icons::Icon;

use super::ProfileModal;
use crate::auth::{sign_out, use_auth, use_session};

/// Top-level areas reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Dashboard,
    Athletes,
    Users,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Dashboard, Section::Athletes, Section::Users];

    pub fn path(&self) -> &'static str {
        match self {
            Section::Dashboard => "/",
            Section::Athletes => "/athletes",
            Section::Users => "/users",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Athletes => "Atletas",
            Section::Users => "Usuários",
        }
    }

    /// Whether `pathname` lies in this section (the path itself or below it).
    pub fn matches(&self, pathname: &str) -> bool {
        let path = self.path();
        if pathname == path {
            return true;
        }
        path != "/" && pathname.starts_with(&format!("{path}/"))
    }
}

/// Page frame for every signed-in screen.
#[component]
pub fn AppLayout(
    /// Section highlighted in the sidebar.
    active: Section,
    on_navigate: EventHandler<Section>,
    children: Element,
) -> Element {
    let mut drawer_open = use_signal(|| false);
    let drawer_class = if drawer_open() { "translate-x-0" } else { "-translate-x-full" };

    rsx! {
        div {
            class: "flex flex-col h-screen bg-neutral-950",
            header {
                class: "md:hidden flex items-center gap-3 h-14 px-4 border-b border-neutral-800 flex-shrink-0",
                button {
                    r#type: "button",
                    class: "p-2 -ml-2 rounded-md text-neutral-300 hover:bg-neutral-800 hover:text-white min-h-[44px] min-w-[44px] flex items-center justify-center",
                    aria_label: "Abrir menu",
                    onclick: move |_| drawer_open.set(true),
                    Icon { icon: FaBars, width: 20, height: 20 }
                }
                span { class: "text-lg font-bold text-primary-500", "ARU CRM" }
            }
            div {
                class: "flex flex-1 min-h-0",
                aside {
                    class: "w-64 max-md:hidden flex-shrink-0 bg-neutral-900 border-r border-neutral-800 flex flex-col h-screen",
                    SidebarContent { active, on_navigate }
                }
                if drawer_open() {
                    div {
                        class: "fixed inset-0 bg-black/60 z-40 md:hidden",
                        onclick: move |_| drawer_open.set(false),
                    }
                }
                aside {
                    class: "fixed left-0 top-0 h-full w-64 max-w-[85vw] bg-neutral-900 border-r border-neutral-800 flex flex-col z-50 transform transition-transform duration-200 ease-out md:hidden {drawer_class}",
                    aria_label: "Menu",
                    SidebarContent {
                        active,
                        on_navigate: move |section| {
                            drawer_open.set(false);
                            on_navigate.call(section);
                        },
                        on_dismiss: move |_| drawer_open.set(false),
                    }
                }
                main {
                    class: "flex-1 overflow-y-auto min-w-0",
                    div { class: "p-6", {children} }
                }
            }
        }
    }
}

#[component]
fn SidebarContent(
    active: Section,
    on_navigate: EventHandler<Section>,
    #[props(default)] on_dismiss: EventHandler<()>,
) -> Element {
    let auth = use_auth();
    let api = use_session();
    let mut profile_open = use_signal(|| false);
    let user = auth().user.map(|u| (u.display_name().to_string(), u.email));

    rsx! {
        div {
            class: "p-6 border-b border-neutral-800",
            p { class: "text-center text-3xl font-extrabold tracking-tight text-primary-500", "ARU CRM" }
        }
        nav {
            class: "flex-1 p-4 space-y-1 overflow-y-auto",
            for section in Section::ALL {
                SidebarItem {
                    key: "{section:?}",
                    section,
                    active: section == active,
                    onclick: move |_| on_navigate.call(section),
                }
            }
        }
        div {
            class: "p-4 border-t border-neutral-800",
            if let Some((name, email)) = user {
                div {
                    class: "mb-3",
                    button {
                        r#type: "button",
                        class: "w-full flex items-center gap-3 p-2 rounded-md hover:bg-neutral-800 transition-colors text-left group min-h-[44px]",
                        onclick: move |_| profile_open.set(true),
                        div {
                            class: "p-2 bg-primary-600/20 rounded-lg group-hover:bg-primary-600/30 transition-colors text-primary-600",
                            Icon { icon: FaUser, width: 16, height: 16 }
                        }
                        div {
                            class: "flex-1 min-w-0",
                            p { class: "text-sm font-medium text-neutral-100 truncate", "{name}" }
                            p { class: "text-xs text-neutral-400 truncate", "{email}" }
                        }
                    }
                }
            }
            button {
                r#type: "button",
                class: "w-full flex items-center justify-center gap-2 px-4 py-2 text-sm font-medium text-neutral-300 hover:bg-neutral-800 hover:text-neutral-100 rounded-md transition-colors min-h-[44px]",
                onclick: move |_| {
                    on_dismiss.call(());
                    let api = api.clone();
                    spawn(async move { sign_out(&api, auth).await });
                },
                Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                "Sair"
            }
        }
        ProfileModal { open: profile_open(), on_close: move |_| profile_open.set(false) }
    }
}

#[component]
fn SidebarItem(section: Section, active: bool, onclick: EventHandler<()>) -> Element {
    let state_class = if active {
        "bg-primary-600 text-white"
    } else {
        "text-neutral-300 hover:bg-neutral-800 hover:text-neutral-100"
    };
    let label = section.label();
    rsx! {
        button {
            r#type: "button",
            class: "w-full flex items-center gap-3 px-4 py-2.5 rounded-md text-sm font-medium transition-colors {state_class}",
            onclick: move |_| onclick.call(()),
            span {
                class: "flex-shrink-0",
                {match section {
                    Section::Dashboard => rsx! { Icon { icon: FaGauge, width: 16, height: 16 } },
                    Section::Athletes => rsx! { Icon { icon: FaPersonRunning, width: 16, height: 16 } },
                    Section::Users => rsx! { Icon { icon: FaUsers, width: 16, height: 16 } },
                }}
            }
            span { "{label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_matching() {
        assert!(Section::Dashboard.matches("/"));
        assert!(!Section::Dashboard.matches("/athletes"));
        assert!(Section::Athletes.matches("/athletes"));
        assert!(Section::Athletes.matches("/athletes/42"));
        assert!(!Section::Athletes.matches("/athletes-old"));
        assert!(!Section::Users.matches("/"));
    }
}
