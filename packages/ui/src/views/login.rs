use dioxus::prelude::*;

use super::shell::{AuthShell, ErrorBanner, TextLink};
use crate::auth::use_auth;
use crate::components::{use_toast, Button, Input};
use crate::hooks::use_login;
use crate::validation::{login_form, FieldErrors};

/// Sign-in screen.
#[component]
pub fn LoginView(
    /// Called once a user is signed in, including when one already was.
    on_signed_in: EventHandler<()>,
    on_navigate_recovery: EventHandler<()>,
) -> Element {
    let auth = use_auth();
    let login = use_login();
    let toaster = use_toast();
    let mut login_value = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut errors = use_signal(FieldErrors::new);

    use_effect(move || {
        if auth().is_authenticated() {
            on_signed_in.call(());
        }
    });

    let submit = {
        let login = login.clone();
        move |e: FormEvent| {
            e.prevent_default();
            let (value, secret) = (login_value(), password());
            if let Err(found) = login_form(&value, &secret) {
                errors.set(found);
                return;
            }
            errors.set(FieldErrors::new());
            let login = login.clone();
            spawn(async move {
                // Success flips the auth state, which the effect above turns into navigation.
                if let Err(message) = login.login(&value, &secret).await {
                    toaster.error(message);
                }
            });
        }
    };

    let loading = login.loading();

    rsx! {
        AuthShell {
            title: "Entre na sua conta",
            form {
                class: "space-y-6",
                novalidate: true,
                onsubmit: submit,
                if let Some(message) = login.error() {
                    ErrorBanner { message }
                }
                Input {
                    label: "Login",
                    id: "login",
                    autocomplete: "username",
                    value: login_value(),
                    placeholder: "usuário ou e-mail",
                    error: errors().get("login"),
                    oninput: move |v| login_value.set(v),
                }
                Input {
                    label: "Senha",
                    id: "password",
                    r#type: "password",
                    autocomplete: "current-password",
                    value: password(),
                    placeholder: "••••••••",
                    error: errors().get("password"),
                    oninput: move |v| password.set(v),
                }
                Button {
                    r#type: "submit",
                    disabled: loading,
                    class: "w-full",
                    if loading { "Entrando..." } else { "Entrar" }
                }
                TextLink {
                    label: "Esqueci minha senha",
                    onclick: move |_| on_navigate_recovery.call(()),
                }
            }
        }
    }
}
