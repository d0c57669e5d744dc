use dioxus::prelude::*;

use super::failure_text;
use super::shell::{AuthShell, TextLink};
use crate::auth::{refresh_user, use_auth, use_session};
use crate::components::{use_toast, Button, Input, PasswordRequirements};
use crate::dom;
use crate::forms::{sanitize_code, FirstLoginForm, FirstLoginStep};
use crate::validation::FieldErrors;

const CODE_INVALID: &str = "Código inválido ou expirado. Verifique e tente novamente.";

/// One-time password setup for invited users, reached from the e-mailed link
/// (`?userId=…&secureCode=…`) or by typing the code.
#[component]
pub fn FirstLoginView(on_completed: EventHandler<()>, on_navigate_login: EventHandler<()>) -> Element {
    let form = use_signal(|| {
        FirstLoginForm::from_link(
            dom::query_param("userId").as_deref(),
            dom::query_param("secureCode").as_deref(),
        )
    });
    let errors = use_signal(FieldErrors::new);
    let loading = use_signal(|| false);

    let step = form.read().step;
    rsx! {
        {match step {
            FirstLoginStep::Validate => rsx! {
                ValidateStep { form, errors, loading, on_navigate_login }
            },
            FirstLoginStep::Password => rsx! {
                PasswordStep { form, errors, loading, on_completed, on_navigate_login }
            },
        }}
    }
}

#[component]
fn ValidateStep(
    form: Signal<FirstLoginForm>,
    errors: Signal<FieldErrors>,
    loading: Signal<bool>,
    on_navigate_login: EventHandler<()>,
) -> Element {
    let (mut form, mut errors, mut loading) = (form, errors, loading);
    let api = use_session();
    let toaster = use_toast();

    let submit = move |e: FormEvent| {
        e.prevent_default();
        if let Err(found) = form.read().validate_code_fields() {
            errors.set(found);
            return;
        }
        errors.set(FieldErrors::new());
        let (email, code) = {
            let form = form.read();
            (form.email.trim().to_string(), form.secure_code.clone())
        };
        let api = api.clone();
        spawn(async move {
            loading.set(true);
            match api.client().validate_code(&email, &code).await {
                Ok(validation) => {
                    if form.write().accept_validation(&validation) {
                        toaster.success("Código validado. Defina sua senha de acesso.");
                    } else {
                        toaster.error(CODE_INVALID);
                    }
                }
                Err(e) => {
                    tracing::warn!("Code validation failed: {}", e);
                    let message = if e.status().is_some() {
                        CODE_INVALID
                    } else {
                        "Erro ao validar código. Tente novamente."
                    };
                    toaster.error(message);
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        AuthShell {
            title: "Primeiro acesso",
            subtitle: "Informe o e-mail e o código que você recebeu para definir sua senha. Ou acesse pelo link do e-mail.",
            form {
                class: "space-y-6",
                novalidate: true,
                onsubmit: submit,
                Input {
                    label: "E-mail",
                    autocomplete: "email",
                    value: form.read().email.clone(),
                    placeholder: "seu@email.com",
                    error: errors.read().get("email"),
                    oninput: move |v| form.write().email = v,
                }
                Input {
                    label: "Código de verificação",
                    inputmode: "numeric",
                    maxlength: 6u32,
                    value: form.read().secure_code.clone(),
                    placeholder: "000000",
                    error: errors.read().get("secureCode"),
                    oninput: move |v: String| form.write().secure_code = sanitize_code(&v),
                }
                Button {
                    r#type: "submit",
                    disabled: loading(),
                    class: "w-full",
                    if loading() { "Validando..." } else { "Validar código" }
                }
                TextLink { label: "Voltar ao login", onclick: move |_| on_navigate_login.call(()) }
            }
        }
    }
}

#[component]
fn PasswordStep(
    form: Signal<FirstLoginForm>,
    errors: Signal<FieldErrors>,
    loading: Signal<bool>,
    on_completed: EventHandler<()>,
    on_navigate_login: EventHandler<()>,
) -> Element {
    let (mut form, mut errors, mut loading) = (form, errors, loading);
    let api = use_session();
    let auth = use_auth();
    let toaster = use_toast();

    let submit = move |e: FormEvent| {
        e.prevent_default();
        if let Err(found) = form.read().validate_password() {
            errors.set(found);
            return;
        }
        errors.set(FieldErrors::new());
        let Some((user_id, code)) = form.read().credentials() else {
            toaster.error("Link inválido. Use o link enviado ao seu e-mail ou valide o código.");
            return;
        };
        let password = form.read().password.clone();
        let api = api.clone();
        spawn(async move {
            loading.set(true);
            match api.client().set_first_password(&user_id, &password, &code).await {
                Ok(()) => {
                    toaster.success("Senha definida com sucesso! Redirecionando...");
                    refresh_user(&api, auth).await;
                    on_completed.call(());
                }
                Err(e) => {
                    tracing::warn!("Setting first password failed: {}", e);
                    toaster.error(failure_text(
                        &e,
                        "Código inválido ou expirado. Solicite um novo convite.",
                        "Erro ao definir senha. Tente novamente.",
                    ));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        AuthShell {
            title: "Primeiro acesso",
            subtitle: "Defina sua senha de acesso.",
            form {
                class: "space-y-6",
                novalidate: true,
                onsubmit: submit,
                p { class: "text-sm text-neutral-400", "Código validado. Agora defina sua senha." }
                Input {
                    label: "Nova senha",
                    r#type: "password",
                    autocomplete: "new-password",
                    value: form.read().password.clone(),
                    placeholder: "••••••••",
                    error: errors.read().get("password"),
                    oninput: move |v| form.write().password = v,
                }
                PasswordRequirements { password: form.read().password.clone(), class: "mt-1" }
                Input {
                    label: "Confirmar senha",
                    r#type: "password",
                    autocomplete: "new-password",
                    value: form.read().confirm_password.clone(),
                    placeholder: "••••••••",
                    error: errors.read().get("confirmPassword"),
                    oninput: move |v| form.write().confirm_password = v,
                }
                Button {
                    r#type: "submit",
                    disabled: loading(),
                    class: "w-full",
                    if loading() { "Salvando..." } else { "Definir senha e entrar" }
                }
                TextLink { label: "Voltar ao login", onclick: move |_| on_navigate_login.call(()) }
            }
        }
    }
}
