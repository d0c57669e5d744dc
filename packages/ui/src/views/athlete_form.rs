use api::{AthleteListItem, AthletePayload, FilePart};
use dioxus::prelude::*;

use super::shell::ErrorBanner;
use crate::components::{
    options, Button, ButtonVariant, DateInput, Input, MaskKind, MaskedInput, PhotoInput, Select,
    Textarea,
};
use crate::forms::{AthleteFormValues, FormMode, DOMINANT_HAND_OPTIONS, STATUS_OPTIONS};
use crate::validation::{today, FieldErrors};

fn status_label(value: &str) -> &'static str {
    if value == "true" {
        "Ativo"
    } else {
        "Inativo"
    }
}

/// Create, edit or inspect one athlete. The parent performs the request; this form only
/// validates and builds the payload.
#[component]
pub fn AthleteForm(
    mode: FormMode,
    #[props(default)] athlete: Option<AthleteListItem>,
    saving: bool,
    /// Last submit failure, shown above the buttons.
    #[props(default)]
    error: Option<String>,
    on_submit: EventHandler<AthletePayload>,
    on_cancel: EventHandler<()>,
) -> Element {
    let initial = athlete.clone();
    let mut values = use_signal(move || {
        initial
            .as_ref()
            .map(AthleteFormValues::from_athlete)
            .unwrap_or_default()
    });
    let mut errors = use_signal(FieldErrors::new);
    let mut photo = use_signal(|| None::<FilePart>);

    let read_only = mode.is_view() || saving;
    let preview_url = athlete.as_ref().and_then(|a| a.photo.clone());
    let guardian_required = values.read().requires_guardian(today());
    let guardian_suffix = if guardian_required { " *" } else { "" };

    let submit = move |e: FormEvent| {
        e.prevent_default();
        if mode.is_view() {
            return;
        }
        let current = values();
        if let Err(found) = current.validate(today()) {
            errors.set(found);
            return;
        }
        errors.set(FieldErrors::new());
        on_submit.call(current.to_payload(photo()));
    };

    let submit_label = match (saving, mode) {
        (true, _) => "Salvando...",
        (false, FormMode::Create) => "Criar atleta",
        _ => "Salvar",
    };

    rsx! {
        form {
            class: "space-y-4",
            novalidate: true,
            onsubmit: submit,
            div {
                class: "grid grid-cols-1 sm:grid-cols-2 gap-4",
                Input {
                    label: "Nome completo",
                    class: "sm:col-span-2",
                    value: values.read().full_name.clone(),
                    placeholder: "Nome do atleta",
                    disabled: read_only,
                    error: errors.read().get("fullName"),
                    oninput: move |v| values.write().full_name = v,
                }
                DateInput {
                    label: "Data de nascimento",
                    value: values.read().birth_date.clone(),
                    placeholder: "DD/MM/AAAA",
                    disabled: read_only,
                    error: errors.read().get("birthDate"),
                    onchange: move |v| values.write().birth_date = v,
                }
                MaskedInput {
                    mask: MaskKind::Phone,
                    label: "Telefone",
                    value: values.read().phone.clone(),
                    placeholder: "(11) 98765-4321",
                    disabled: read_only,
                    error: errors.read().get("phone"),
                    onchange: move |v| values.write().phone = v,
                }
                Input {
                    label: format!("Nome do responsável{guardian_suffix}"),
                    value: values.read().guardian_name.clone(),
                    placeholder: "Nome do responsável",
                    disabled: read_only,
                    error: errors.read().get("guardianName"),
                    oninput: move |v| values.write().guardian_name = v,
                }
                MaskedInput {
                    mask: MaskKind::Phone,
                    label: format!("Telefone do responsável{guardian_suffix}"),
                    value: values.read().guardian_phone.clone(),
                    placeholder: "(11) 91234-5678",
                    disabled: read_only,
                    error: errors.read().get("guardianPhone"),
                    onchange: move |v| values.write().guardian_phone = v,
                }
                if mode.is_view() {
                    div {
                        p { class: "block text-sm font-medium text-neutral-300", "Status" }
                        p { class: "mt-2 text-sm text-neutral-100", {status_label(&values.read().is_active)} }
                    }
                } else {
                    Select {
                        label: "Status",
                        value: values.read().is_active.clone(),
                        options: options(&STATUS_OPTIONS),
                        disabled: saving,
                        error: errors.read().get("isActive"),
                        onchange: move |v| values.write().is_active = v,
                    }
                }
                Input {
                    label: "E-mail",
                    r#type: "email",
                    value: values.read().email.clone(),
                    placeholder: "exemplo@email.com",
                    disabled: read_only,
                    error: errors.read().get("email"),
                    oninput: move |v| values.write().email = v,
                }
                MaskedInput {
                    mask: MaskKind::Cpf,
                    label: "CPF",
                    value: values.read().cpf.clone(),
                    placeholder: "000.000.000-00",
                    disabled: read_only,
                    error: errors.read().get("cpf"),
                    onchange: move |v| values.write().cpf = v,
                }
                Input {
                    label: "Altura (cm)",
                    r#type: "number",
                    value: values.read().height_cm.clone(),
                    placeholder: "opcional",
                    disabled: read_only,
                    error: errors.read().get("heightCm"),
                    oninput: move |v| values.write().height_cm = v,
                }
                Input {
                    label: "Peso (kg)",
                    r#type: "number",
                    value: values.read().weight_kg.clone(),
                    placeholder: "opcional",
                    disabled: read_only,
                    error: errors.read().get("weightKg"),
                    oninput: move |v| values.write().weight_kg = v,
                }
                Select {
                    label: "Mão dominante",
                    value: values.read().dominant_hand.clone(),
                    options: options(&DOMINANT_HAND_OPTIONS),
                    disabled: read_only,
                    onchange: move |v| values.write().dominant_hand = v,
                }
                Textarea {
                    label: "Observações",
                    class: "sm:col-span-2",
                    value: values.read().notes.clone(),
                    placeholder: "Observações sobre o atleta",
                    disabled: read_only,
                    oninput: move |v| values.write().notes = v,
                }
            }
            PhotoInput {
                preview_url,
                disabled: read_only,
                on_change: move |file| photo.set(file),
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
