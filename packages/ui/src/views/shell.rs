use dioxus::prelude::*;

/// Centered column used by the signed-out screens.
#[component]
pub fn AuthShell(title: String, #[props(default)] subtitle: Option<String>, children: Element) -> Element {
    rsx! {
        div {
            class: "flex min-h-screen flex-col justify-center bg-neutral-950 px-6 py-12 lg:px-8",
            div {
                class: "sm:mx-auto sm:w-full sm:max-w-sm",
                p {
                    class: "text-center text-4xl font-extrabold tracking-tight text-primary-500",
                    "ARU CRM"
                }
                h2 {
                    class: "mt-10 text-center text-2xl/9 font-bold tracking-tight text-neutral-100",
                    "{title}"
                }
                if let Some(subtitle) = subtitle {
                    p { class: "mt-2 text-center text-sm text-neutral-400", "{subtitle}" }
                }
            }
            div {
                class: "mt-10 sm:mx-auto sm:w-full sm:max-w-sm",
                {children}
            }
        }
    }
}

#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div {
            class: "rounded-md bg-error-500/10 border border-error-500/30 px-3 py-2",
            p { class: "text-sm text-error-500", "{message}" }
        }
    }
}

/// "Voltar ao login" style link rendered as a button so the host decides how to navigate.
#[component]
pub fn TextLink(label: String, onclick: EventHandler<()>) -> Element {
    rsx! {
        p {
            class: "text-center text-sm text-neutral-400",
            button {
                r#type: "button",
                class: "font-medium text-primary-500 hover:text-primary-400",
                onclick: move |_| onclick.call(()),
                "{label}"
            }
        }
    }
}

#[component]
pub fn PageHeader(title: String, subtitle: String, #[props(default)] actions: Option<Element>) -> Element {
    rsx! {
        div {
            class: "flex flex-col gap-4 sm:flex-row sm:items-center sm:justify-between px-4 sm:px-6 lg:px-8 mb-6",
            div {
                h1 { class: "text-2xl font-semibold text-neutral-100", "{title}" }
                p { class: "mt-2 text-sm text-neutral-400", "{subtitle}" }
            }
            if let Some(actions) = actions {
                div { class: "flex gap-3", {actions} }
            }
        }
    }
}

#[component]
pub fn LoadingState(message: String) -> Element {
    rsx! {
        div {
            class: "flex items-center justify-center py-12",
            div {
                class: "text-center",
                div {
                    class: "inline-block h-8 w-8 animate-spin rounded-full border-4 border-solid border-primary-600 border-r-transparent",
                }
                p { class: "mt-4 text-sm text-neutral-400", "{message}" }
            }
        }
    }
}
