use api::{AthleteListItem, AthletePayload, DominantHand, FilePart};
use chrono::NaiveDate;

use super::parse_number;
use crate::masks::unmask;
use crate::validation::{email, is_minor_on, required, FieldErrors};

pub const DOMINANT_HAND_OPTIONS: [(&str, &str); 4] = [
    ("", "Não informado"),
    ("RIGHT", "Direita"),
    ("LEFT", "Esquerda"),
    ("AMBIDEXTROUS", "Ambidestro"),
];

pub const STATUS_OPTIONS: [(&str, &str); 2] = [("true", "Ativo"), ("false", "Inativo")];

/// Raw field values of the athlete dialog. Dates are ISO (`YYYY-MM-DD`), phones and CPF
/// are digits only.
#[derive(Debug, Clone, PartialEq)]
pub struct AthleteFormValues {
    pub full_name: String,
    pub birth_date: String,
    pub phone: String,
    pub guardian_name: String,
    pub guardian_phone: String,
    pub is_active: String,
    pub email: String,
    pub cpf: String,
    pub height_cm: String,
    pub weight_kg: String,
    pub dominant_hand: String,
    pub notes: String,
}

impl Default for AthleteFormValues {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            birth_date: String::new(),
            phone: String::new(),
            guardian_name: String::new(),
            guardian_phone: String::new(),
            is_active: "true".to_string(),
            email: String::new(),
            cpf: String::new(),
            height_cm: String::new(),
            weight_kg: String::new(),
            dominant_hand: String::new(),
            notes: String::new(),
        }
    }
}

fn has_ten_digits(phone: &str) -> bool {
    unmask(phone).len() >= 10
}

fn in_range(value: &str, min: f64, max: f64) -> bool {
    if value.trim().is_empty() {
        return true;
    }
    matches!(parse_number(value), Some(n) if (min..=max).contains(&n))
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl AthleteFormValues {
    pub fn from_athlete(athlete: &AthleteListItem) -> Self {
        let birth_date = athlete.birth_date.chars().take(10).collect::<String>();
        let birth_date = match NaiveDate::parse_from_str(&birth_date, "%Y-%m-%d") {
            Ok(_) => birth_date,
            Err(_) => String::new(),
        };
        Self {
            full_name: athlete.full_name.clone(),
            birth_date,
            phone: athlete.phone.clone(),
            guardian_name: athlete.guardian_name.clone().unwrap_or_default(),
            guardian_phone: athlete.guardian_phone.clone().unwrap_or_default(),
            is_active: athlete.is_active.to_string(),
            email: athlete.email.clone().unwrap_or_default(),
            cpf: athlete.cpf.clone().unwrap_or_default(),
            height_cm: athlete.height_cm.map(|v| v.to_string()).unwrap_or_default(),
            weight_kg: athlete.weight_kg.map(|v| v.to_string()).unwrap_or_default(),
            dominant_hand: athlete.dominant_hand.clone().unwrap_or_default(),
            notes: athlete.notes.clone().unwrap_or_default(),
        }
    }

    /// Guardian fields become mandatory while the athlete is under 18 on `today`.
    pub fn requires_guardian(&self, today: NaiveDate) -> bool {
        is_minor_on(&self.birth_date, today)
    }

    pub fn validate(&self, today: NaiveDate) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        errors.check("fullName", required(&self.full_name, "Nome completo é obrigatório"));
        errors.check(
            "birthDate",
            required(&self.birth_date, "Data de nascimento é obrigatória"),
        );

        errors.check("phone", required(&self.phone, "Telefone é obrigatório"));
        if !has_ten_digits(&self.phone) {
            errors.add("phone", "Telefone deve ter pelo menos 10 dígitos");
        }

        if self.requires_guardian(today) {
            errors.check(
                "guardianName",
                required(
                    &self.guardian_name,
                    "Nome do responsável é obrigatório para menores de 18 anos",
                ),
            );
            errors.check(
                "guardianPhone",
                required(
                    &self.guardian_phone,
                    "Telefone do responsável é obrigatório para menores de 18 anos",
                ),
            );
            if !has_ten_digits(&self.guardian_phone) {
                errors.add(
                    "guardianPhone",
                    "Telefone do responsável deve ter pelo menos 10 dígitos",
                );
            }
        }

        if self.is_active != "true" && self.is_active != "false" {
            errors.add("isActive", "Status inválido");
        }

        errors.check("email", email(&self.email));

        if !in_range(&self.height_cm, 50.0, 250.0) {
            errors.add("heightCm", "Altura deve ser entre 50 e 250 cm");
        }
        if !in_range(&self.weight_kg, 20.0, 300.0) {
            errors.add("weightKg", "Peso deve ser entre 20 e 300 kg");
        }

        errors.into_result()
    }

    /// Trimmed payload; blank optional fields are left out.
    pub fn to_payload(&self, photo: Option<FilePart>) -> AthletePayload {
        AthletePayload {
            full_name: self.full_name.trim().to_string(),
            birth_date: self.birth_date.trim().to_string(),
            phone: self.phone.trim().to_string(),
            guardian_name: self.guardian_name.trim().to_string(),
            guardian_phone: self.guardian_phone.trim().to_string(),
            is_active: self.is_active == "true",
            email: non_empty(&self.email),
            cpf: non_empty(&self.cpf),
            height_cm: parse_number(&self.height_cm),
            weight_kg: parse_number(&self.weight_kg),
            dominant_hand: DominantHand::parse(self.dominant_hand.trim()),
            notes: non_empty(&self.notes),
            photo,
        }
    }
}
