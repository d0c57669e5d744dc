use dioxus::prelude::*;

use crate::auth::{refresh_user, use_auth, use_session};
use crate::components::{
    use_toast, Button, ButtonVariant, Input, Modal, PasswordRequirements,
};
use crate::forms::{PasswordChangeForm, ProfileForm};
use crate::validation::FieldErrors;

const PROFILE_ERROR: &str = "Erro ao atualizar perfil";
const PASSWORD_ERROR: &str = "Erro ao alterar senha";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Profile,
    Password,
}

fn tab_class(active: bool) -> &'static str {
    if active {
        "px-4 py-2 text-sm font-medium transition-colors text-primary-600 border-b-2 border-primary-600"
    } else {
        "px-4 py-2 text-sm font-medium transition-colors text-neutral-400 hover:text-neutral-200"
    }
}

/// "Meu Perfil" dialog: edit name and e-mail, or change the password.
#[component]
pub fn ProfileModal(open: bool, on_close: EventHandler<()>) -> Element {
    rsx! {
        Modal {
            open,
            on_close,
            title: "Meu Perfil",
            // Mounted per opening, so both forms start from the current user.
            ProfilePanel { on_close }
        }
    }
}

#[component]
fn ProfilePanel(on_close: EventHandler<()>) -> Element {
    let mut tab = use_signal(|| Tab::Profile);

    rsx! {
        div {
            class: "space-y-6",
            div {
                class: "flex border-b border-neutral-800",
                button {
                    r#type: "button",
                    class: tab_class(tab() == Tab::Profile),
                    onclick: move |_| tab.set(Tab::Profile),
                    "Perfil"
                }
                button {
                    r#type: "button",
                    class: tab_class(tab() == Tab::Password),
                    onclick: move |_| tab.set(Tab::Password),
                    "Senha"
                }
            }
            {match tab() {
                Tab::Profile => rsx! { ProfileTab { on_close } },
                Tab::Password => rsx! { PasswordTab { on_close } },
            }}
        }
    }
}

#[component]
fn ProfileTab(on_close: EventHandler<()>) -> Element {
    let auth = use_auth();
    let api = use_session();
    let toaster = use_toast();
    let mut form = use_signal(|| {
        auth.peek()
            .user
            .as_ref()
            .map(ProfileForm::from_user)
            .unwrap_or_default()
    });
    let mut errors = use_signal(FieldErrors::new);
    let mut saving = use_signal(|| false);
    let role = auth().user.and_then(|u| u.role).map(|r| r.label().to_string());

    let submit = move |e: FormEvent| {
        e.prevent_default();
        let values = form();
        if let Err(found) = values.validate() {
            errors.set(found);
            return;
        }
        errors.set(FieldErrors::new());
        let api = api.clone();
        spawn(async move {
            saving.set(true);
            match api.client().update_profile(&values.to_update()).await {
                Ok(()) => {
                    toaster.success("Perfil atualizado com sucesso!");
                    refresh_user(&api, auth).await;
                    on_close.call(());
                }
                Err(e) => {
                    tracing::warn!("Profile update failed: {}", e);
                    toaster.error(e.user_message(PROFILE_ERROR));
                }
            }
            saving.set(false);
        });
    };

    rsx! {
        form {
            class: "space-y-4",
            novalidate: true,
            onsubmit: submit,
            p { class: "text-sm text-neutral-400 mb-4", "Atualize suas informações de perfil" }
            Input {
                label: "Nome",
                value: form().name,
                placeholder: "Seu nome completo",
                error: errors().get("name"),
                oninput: move |v| form.write().name = v,
            }
            Input {
                label: "E-mail",
                value: form().email,
                placeholder: "seu@email.com",
                error: errors().get("email"),
                oninput: move |v| form.write().email = v,
            }
            if let Some(role) = role {
                Input {
                    label: "Função",
                    value: role,
                    disabled: true,
                    class: "bg-neutral-800",
                    oninput: move |_| {},
                }
            }
            div {
                class: "flex gap-3 pt-4",
                Button {
                    r#type: "submit",
                    disabled: saving(),
                    class: "flex-1",
                    if saving() { "Salvando..." } else { "Salvar Alterações" }
                }
                Button {
                    variant: ButtonVariant::Neutral,
                    onclick: move |_: MouseEvent| on_close.call(()),
                    "Cancelar"
                }
            }
        }
    }
}

#[component]
fn PasswordTab(on_close: EventHandler<()>) -> Element {
    let api = use_session();
    let toaster = use_toast();
    let mut form = use_signal(PasswordChangeForm::default);
    let mut errors = use_signal(FieldErrors::new);
    let mut saving = use_signal(|| false);

    let submit = move |e: FormEvent| {
        e.prevent_default();
        let values = form();
        if let Err(found) = values.validate() {
            errors.set(found);
            return;
        }
        errors.set(FieldErrors::new());
        let api = api.clone();
        spawn(async move {
            saving.set(true);
            let result = api
                .client()
                .change_password(&values.current_password, &values.new_password)
                .await;
            match result {
                Ok(()) => {
                    toaster.success("Senha alterada com sucesso!");
                    form.set(PasswordChangeForm::default());
                    on_close.call(());
                }
                Err(e) => {
                    tracing::warn!("Password change failed: {}", e);
                    toaster.error(e.user_message(PASSWORD_ERROR));
                }
            }
            saving.set(false);
        });
    };

    rsx! {
        form {
            class: "space-y-4",
            novalidate: true,
            onsubmit: submit,
            p { class: "text-sm text-neutral-400 mb-4", "Altere sua senha de acesso" }
            Input {
                label: "Senha Atual",
                r#type: "password",
                value: form().current_password,
                placeholder: "••••••••",
                error: errors().get("currentPassword"),
                oninput: move |v| form.write().current_password = v,
            }
            Input {
                label: "Nova Senha",
                r#type: "password",
                value: form().new_password,
                placeholder: "••••••••",
                error: errors().get("newPassword"),
                oninput: move |v| form.write().new_password = v,
            }
            PasswordRequirements { password: form().new_password, class: "mt-1" }
            Input {
                label: "Confirmar Nova Senha",
                r#type: "password",
                value: form().confirm_password,
                placeholder: "••••••••",
                error: errors().get("confirmPassword"),
                oninput: move |v| form.write().confirm_password = v,
            }
            div {
                class: "flex gap-3 pt-4",
                Button {
                    r#type: "submit",
                    disabled: saving(),
                    class: "flex-1",
                    if saving() { "Alterando..." } else { "Alterar Senha" }
                }
                Button {
                    variant: ButtonVariant::Neutral,
                    onclick: move |_: MouseEvent| on_close.call(()),
                    "Cancelar"
                }
            }
        }
    }
}
