use serde::{Deserialize, Serialize};

use crate::http::QueryParams;
use crate::transport::{FilePart, MultipartForm};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DominantHand {
    Right,
    Left,
    Ambidextrous,
}

impl DominantHand {
    pub const ALL: [DominantHand; 3] = [
        DominantHand::Right,
        DominantHand::Left,
        DominantHand::Ambidextrous,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DominantHand::Right => "RIGHT",
            DominantHand::Left => "LEFT",
            DominantHand::Ambidextrous => "AMBIDEXTROUS",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DominantHand::Right => "Direita",
            DominantHand::Left => "Esquerda",
            DominantHand::Ambidextrous => "Ambidestro",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|hand| hand.as_str() == value)
    }
}

/// One row of the `/v1/athletes` listing. `category` is computed by the backend from the
/// birth year.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AthleteListItem {
    pub id: String,
    pub full_name: String,
    pub birth_date: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub guardian_name: Option<String>,
    #[serde(default)]
    pub guardian_phone: Option<String>,
    pub is_active: bool,
    #[serde(default)]
    pub registration_date: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub cpf: Option<String>,
    #[serde(default)]
    pub height_cm: Option<f64>,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub dominant_hand: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub category: String,
}

/// Create/update body. Sent as multipart so a photo can ride along.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AthletePayload {
    pub full_name: String,
    pub birth_date: String,
    pub phone: String,
    pub guardian_name: String,
    pub guardian_phone: String,
    pub is_active: bool,
    pub email: Option<String>,
    pub cpf: Option<String>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub dominant_hand: Option<DominantHand>,
    pub notes: Option<String>,
    pub photo: Option<FilePart>,
}

impl AthletePayload {
    /// Every present field becomes a text part; the photo, when set, goes under `photo`.
    pub fn to_multipart(&self) -> MultipartForm {
        let form = MultipartForm::new()
            .text("fullName", self.full_name.as_str())
            .text("birthDate", self.birth_date.as_str())
            .text("phone", self.phone.as_str())
            .text("guardianName", self.guardian_name.as_str())
            .text("guardianPhone", self.guardian_phone.as_str())
            .text("isActive", self.is_active.to_string())
            .text_opt("email", self.email.as_deref())
            .text_opt("cpf", self.cpf.as_deref())
            .text_opt("heightCm", self.height_cm)
            .text_opt("weightKg", self.weight_kg)
            .text_opt("dominantHand", self.dominant_hand.map(|h| h.as_str()))
            .text_opt("notes", self.notes.as_deref());

        match &self.photo {
            Some(photo) => form.file("photo", photo.clone()),
            None => form,
        }
    }
}

/// Applied filters of the athletes listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AthleteFilters {
    pub is_active: Option<bool>,
    pub min_height: Option<f64>,
    pub max_height: Option<f64>,
    pub name: Option<String>,
    pub notes: Option<String>,
}

impl AthleteFilters {
    pub fn to_query(&self, page: u32, limit: u32) -> QueryParams {
        QueryParams::new()
            .set("page", page)
            .set("limit", limit)
            .set_opt("isActive", self.is_active)
            .set_opt("minHeight", self.min_height)
            .set_opt("maxHeight", self.max_height)
            .set_opt("name", self.name.as_deref().map(str::trim))
            .set_opt("notes", self.notes.as_deref().map(str::trim))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_item_tolerates_nulls() {
        let json = r#"{
            "id": "a1",
            "fullName": "João Pedro",
            "birthDate": "2012-03-04",
            "phone": "11987654321",
            "guardianName": null,
            "guardianPhone": null,
            "isActive": true,
            "registrationDate": "2024-01-10",
            "email": null,
            "heightCm": 151.5,
            "weightKg": null,
            "dominantHand": "LEFT",
            "photo": "/uploads/a1.jpeg",
            "createdAt": "2024-01-10T12:00:00Z",
            "updatedAt": "2024-01-10T12:00:00Z",
            "category": "Sub-13"
        }"#;
        let athlete: AthleteListItem = serde_json::from_str(json).unwrap();
        assert_eq!(athlete.full_name, "João Pedro");
        assert_eq!(athlete.height_cm, Some(151.5));
        assert!(athlete.guardian_name.is_none());
        assert!(athlete.cpf.is_none());
        assert_eq!(athlete.category, "Sub-13");
    }

    #[test]
    fn test_payload_multipart_fields() {
        let payload = AthletePayload {
            full_name: "Ana Lima".to_string(),
            birth_date: "2001-02-03".to_string(),
            phone: "11987654321".to_string(),
            is_active: false,
            height_cm: Some(180.0),
            weight_kg: Some(72.5),
            dominant_hand: Some(DominantHand::Ambidextrous),
            photo: Some(FilePart::new("photo-1.jpeg", "image/jpeg", vec![0xff, 0xd8])),
            ..Default::default()
        };

        let form = payload.to_multipart();
        assert_eq!(form.get("isActive"), Some("false"));
        assert_eq!(form.get("heightCm"), Some("180"));
        assert_eq!(form.get("weightKg"), Some("72.5"));
        assert_eq!(form.get("dominantHand"), Some("AMBIDEXTROUS"));
        assert_eq!(form.get("guardianName"), Some(""));
        assert_eq!(form.get("email"), None);
        assert_eq!(form.get("notes"), None);
        let (name, file) = form.file_part().unwrap();
        assert_eq!(name, "photo");
        assert_eq!(file.name, "photo-1.jpeg");
    }

    #[test]
    fn test_filters_query_trims_text() {
        let filters = AthleteFilters {
            is_active: Some(true),
            min_height: Some(150.0),
            max_height: None,
            name: Some("  ana ".to_string()),
            notes: Some("   ".to_string()),
        };
        assert_eq!(
            filters.to_query(2, 10).to_query_string(),
            "page=2&limit=10&isActive=true&minHeight=150&name=ana"
        );
    }
}
