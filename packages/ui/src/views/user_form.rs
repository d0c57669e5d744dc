use api::{UserListItem, UserPayload};
use dioxus::prelude::*;

use super::shell::ErrorBanner;
use crate::components::{options, Button, ButtonVariant, Input, Select};
use crate::forms::{FormMode, UserFormValues, ROLE_OPTIONS};
use crate::validation::FieldErrors;

/// Create, edit or inspect a system user. New users get no password; the backend
/// e-mails them a first-access link.
#[component]
pub fn UserForm(
    mode: FormMode,
    #[props(default)] user: Option<UserListItem>,
    saving: bool,
    #[props(default)] error: Option<String>,
    on_submit: EventHandler<UserPayload>,
    on_cancel: EventHandler<()>,
) -> Element {
    let initial = user.clone();
    let mut values = use_signal(move || {
        initial
            .as_ref()
            .map(UserFormValues::from_user)
            .unwrap_or_default()
    });
    let mut errors = use_signal(FieldErrors::new);

    let read_only = mode.is_view() || saving;
    let username_placeholder = if mode == FormMode::Create {
        "Sugerido a partir do nome"
    } else {
        "joao.silva"
    };

    let submit = move |e: FormEvent| {
        e.prevent_default();
        if mode.is_view() {
            return;
        }
        let current = values();
        if let Err(found) = current.validate() {
            errors.set(found);
            return;
        }
        errors.set(FieldErrors::new());
        on_submit.call(current.to_payload());
    };

    let submit_label = match (saving, mode) {
        (true, _) => "Salvando...",
        (false, FormMode::Create) => "Criar usuário",
        _ => "Salvar",
    };

    rsx! {
        form {
            class: "space-y-4",
            novalidate: true,
            onsubmit: submit,
            Input {
                label: "Nome completo",
                value: values.read().name.clone(),
                placeholder: "Ex: João Silva",
                disabled: read_only,
                error: errors.read().get("name"),
                oninput: move |v| values.write().set_name(v, mode),
            }
            Input {
                label: "E-mail",
                r#type: "email",
                value: values.read().email.clone(),
                placeholder: "joao@exemplo.com",
                disabled: read_only,
                error: errors.read().get("email"),
                oninput: move |v| values.write().email = v,
            }
            Input {
                label: "Usuário",
                value: values.read().username.clone(),
                placeholder: username_placeholder,
                disabled: read_only,
                error: errors.read().get("username"),
                oninput: move |v| values.write().set_username(v),
            }
            Select {
                label: "Função",
                value: values.read().role.clone(),
                options: options(&ROLE_OPTIONS),
                disabled: read_only,
                error: errors.read().get("role"),
                onchange: move |v| values.write().role = v,
            }
            if mode == FormMode::Create {
                p {
                    class: "text-sm text-neutral-400",
                    "O usuário será criado sem senha. Um e-mail será enviado para que ele defina a senha no primeiro acesso."
                }
            }
            if let Some(message) = error {
                ErrorBanner { message }
            }
            div {
                class: "flex justify-end gap-3 pt-4 border-t border-neutral-800",
                if mode.is_view() {
                    Button {
                        variant: ButtonVariant::Neutral,
                        onclick: move |_: MouseEvent| on_cancel.call(()),
                        "Fechar"
                    }
                } else {
                    Button {
                        variant: ButtonVariant::Neutral,
                        disabled: saving,
                        onclick: move |_: MouseEvent| on_cancel.call(()),
                        "Cancelar"
                    }
                    Button { r#type: "submit", disabled: saving, "{submit_label}" }
                }
            }
        }
    }
}
