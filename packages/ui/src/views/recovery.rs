use std::time::Duration;

use dioxus::prelude::*;

use super::failure_text;
use super::shell::{AuthShell, TextLink};
use crate::auth::{use_session, LOGIN_PATH};
use crate::components::{use_toast, Button, ButtonVariant, Input, PasswordRequirements};
use crate::forms::{sanitize_code, RecoveryForm, RecoveryStep};
use crate::validation::FieldErrors;
use crate::{dom, timer};

const CODE_INVALID: &str = "Código inválido ou expirado. Verifique e tente novamente.";
const SENT_DEFAULT: &str =
    "Se o e-mail estiver cadastrado, você receberá um código. Verifique sua caixa de entrada.";
/// Pause between the success toast and leaving for the login page.
const REDIRECT_DELAY: Duration = Duration::from_millis(1500);

/// Shared state of the three recovery steps.
#[derive(Clone, Copy, PartialEq)]
struct Recovery {
    form: Signal<RecoveryForm>,
    errors: Signal<FieldErrors>,
    loading: Signal<bool>,
}

/// Password recovery: request a code, validate it, then choose a new password.
/// Opening the e-mailed link (`?userId=…&secureCode=…`) starts at the last step.
#[component]
pub fn RecoveryView(on_navigate_login: EventHandler<()>) -> Element {
    let recovery = Recovery {
        form: use_signal(|| {
            RecoveryForm::from_link(
                dom::query_param("userId").as_deref(),
                dom::query_param("secureCode").as_deref(),
            )
        }),
        errors: use_signal(FieldErrors::new),
        loading: use_signal(|| false),
    };

    // Resend cooldown. Lives here rather than in a step so it survives step changes.
    let mut form = recovery.form;
    use_future(move || async move {
        loop {
            timer::sleep(Duration::from_secs(1)).await;
            if form.peek().countdown > 0 {
                form.write().tick();
            }
        }
    });

    let step = recovery.form.read().step;
    rsx! {
        {match step {
            RecoveryStep::Email => rsx! { EmailStep { recovery, on_navigate_login } },
            RecoveryStep::CodeSent => rsx! { CodeStep { recovery, on_navigate_login } },
            RecoveryStep::NewPassword => rsx! { NewPasswordStep { recovery, on_navigate_login } },
        }}
    }
}

#[component]
fn EmailStep(recovery: Recovery, on_navigate_login: EventHandler<()>) -> Element {
    let Recovery { mut form, mut errors, mut loading } = recovery;
    let api = use_session();
    let toaster = use_toast();

    let submit = move |e: FormEvent| {
        e.prevent_default();
        if let Err(found) = form.read().validate_email() {
            errors.set(found);
            return;
        }
        errors.set(FieldErrors::new());
        let email = form.read().email.clone();
        let api = api.clone();
        spawn(async move {
            loading.set(true);
            match api.client().forgot_password(&email).await {
                Ok(message) => {
                    form.write().code_requested();
                    toaster.success(message.unwrap_or_else(|| SENT_DEFAULT.to_string()));
                }
                Err(e) => {
                    tracing::warn!("Requesting a recovery code failed: {}", e);
                    toaster.error(failure_text(
                        &e,
                        "Não foi possível enviar o código. Tente novamente.",
                        "Erro ao enviar. Tente novamente.",
                    ));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        AuthShell {
            title: "Recuperar senha",
            subtitle: "Informe seu e-mail para receber um link com o código de recuperação.",
            form {
                class: "space-y-6",
                novalidate: true,
                onsubmit: submit,
                Input {
                    label: "E-mail",
                    id: "email",
                    autocomplete: "email",
                    value: form.read().email.clone(),
                    placeholder: "seu@email.com",
                    error: errors.read().get("email"),
                    oninput: move |v| form.write().email = v,
                }
                Button {
                    r#type: "submit",
                    disabled: loading(),
                    class: "w-full",
                    if loading() { "Enviando..." } else { "Obter código de recuperação" }
                }
                TextLink { label: "Voltar ao login", onclick: move |_| on_navigate_login.call(()) }
            }
        }
    }
}

#[component]
fn CodeStep(recovery: Recovery, on_navigate_login: EventHandler<()>) -> Element {
    let Recovery { mut form, mut errors, mut loading } = recovery;
    let api = use_session();
    let toaster = use_toast();

    let submit = {
        let api = api.clone();
        move |e: FormEvent| {
            e.prevent_default();
            if let Err(found) = form.read().validate_code() {
                errors.set(found);
                return;
            }
            errors.set(FieldErrors::new());
            let (email, code) = {
                let form = form.read();
                (form.email.trim().to_string(), form.secure_code.clone())
            };
            if email.is_empty() {
                toaster.error("Informe o e-mail e solicite o código primeiro.");
                return;
            }
            let api = api.clone();
            spawn(async move {
                loading.set(true);
                match api.client().validate_code(&email, &code).await {
                    Ok(validation) => {
                        if form.write().accept_validation(&validation) {
                            toaster.success("Código validado. Defina sua nova senha.");
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
        }
    };

    let resend = move |_: MouseEvent| {
        if !form.read().can_resend() {
            return;
        }
        let email = form.read().email.clone();
        let api = api.clone();
        spawn(async move {
            loading.set(true);
            match api.client().forgot_password(&email).await {
                Ok(_) => {
                    form.write().code_requested();
                    toaster.success("Um novo link foi enviado para seu e-mail.");
                }
                Err(e) => {
                    tracing::warn!("Resending the recovery code failed: {}", e);
                    toaster.error(failure_text(
                        &e,
                        "Não foi possível reenviar. Tente novamente.",
                        "Erro ao reenviar. Tente novamente.",
                    ));
                }
            }
            loading.set(false);
        });
    };

    let email = form.read().email.clone();
    let resend_label = form.read().resend_label(loading());
    let resend_blocked = !form.read().can_resend() || loading();

    rsx! {
        AuthShell {
            title: "Verifique seu e-mail",
            div {
                class: "space-y-6",
                p {
                    class: "text-center text-sm text-neutral-400",
                    "Enviamos um link para "
                    strong { class: "text-neutral-200", "{email}" }
                    ". Clique no link para redefinir sua senha. O link contém seu código de recuperação."
                }
                p {
                    class: "text-center text-sm text-neutral-500",
                    "Não recebeu? Verifique a pasta de spam ou aguarde e solicite um novo código."
                }
                form {
                    class: "space-y-4",
                    novalidate: true,
                    onsubmit: submit,
                    Input {
                        label: "Código de recuperação",
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
                }
                Button {
                    variant: ButtonVariant::Neutral,
                    class: "w-full",
                    disabled: resend_blocked,
                    onclick: resend,
                    "{resend_label}"
                }
                TextLink { label: "Voltar ao login", onclick: move |_| on_navigate_login.call(()) }
            }
        }
    }
}

#[component]
fn NewPasswordStep(recovery: Recovery, on_navigate_login: EventHandler<()>) -> Element {
    let Recovery { mut form, mut errors, mut loading } = recovery;
    let api = use_session();
    let toaster = use_toast();

    let submit = move |e: FormEvent| {
        e.prevent_default();
        if let Err(found) = form.read().validate_reset() {
            errors.set(found);
            return;
        }
        errors.set(FieldErrors::new());
        let Some((user_id, code)) = form.read().reset_target() else {
            toaster.error("Link inválido. Solicite um novo código.");
            return;
        };
        let new_password = form.read().new_password.clone();
        let api = api.clone();
        spawn(async move {
            loading.set(true);
            match api.client().reset_password(&user_id, &code, &new_password).await {
                Ok(()) => {
                    toaster.success("Senha alterada com sucesso. Faça login.");
                    // Outlives this screen so the redirect happens even if it unmounts.
                    dioxus::core::spawn_forever(async move {
                        timer::sleep(REDIRECT_DELAY).await;
                        dom::redirect(LOGIN_PATH);
                    });
                }
                Err(e) => {
                    tracing::warn!("Password reset failed: {}", e);
                    toaster.error(failure_text(
                        &e,
                        "Código inválido ou expirado. Solicite um novo.",
                        "Erro ao alterar senha. Tente novamente.",
                    ));
                }
            }
            loading.set(false);
        });
    };

    let code_from_link = form.read().code_from_link();

    rsx! {
        AuthShell {
            title: "Redefinir senha",
            subtitle: "Defina sua nova senha de acesso.",
            form {
                class: "space-y-6",
                novalidate: true,
                onsubmit: submit,
                if code_from_link {
                    p { class: "text-sm text-neutral-400", "Código recebido por e-mail (utilize o link enviado)." }
                } else {
                    Input {
                        label: "Código de recuperação",
                        inputmode: "numeric",
                        maxlength: 6u32,
                        value: form.read().secure_code.clone(),
                        placeholder: "000000",
                        error: errors.read().get("secureCode"),
                        oninput: move |v: String| form.write().secure_code = sanitize_code(&v),
                    }
                }
                Input {
                    label: "Nova senha",
                    r#type: "password",
                    autocomplete: "new-password",
                    value: form.read().new_password.clone(),
                    placeholder: "••••••••",
                    error: errors.read().get("newPassword"),
                    oninput: move |v| form.write().new_password = v,
                }
                PasswordRequirements { password: form.read().new_password.clone(), class: "mt-1" }
                Input {
                    label: "Confirmar nova senha",
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
                    if loading() { "Alterando..." } else { "Alterar senha" }
                }
                TextLink { label: "Voltar ao login", onclick: move |_| on_navigate_login.call(()) }
            }
        }
    }
}
