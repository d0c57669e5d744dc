use api::{Role, UserListItem, UserPayload};

use super::FormMode;
use crate::validation::{email, required, FieldErrors};

pub const ROLE_OPTIONS: [(&str, &str); 3] = [
    ("user", "Usuário"),
    ("manager", "Gerente"),
    ("admin", "Administrador"),
];

fn fold_diacritic(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}

fn normalize_word(word: &str) -> String {
    word.to_lowercase()
        .chars()
        .map(fold_diacritic)
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// `first.last` from a full name, lower-cased and without accents.
/// A single word (or identical first and last) yields just that word.
pub fn suggest_username(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    let (Some(first), Some(last)) = (words.first(), words.last()) else {
        return String::new();
    };
    let first = normalize_word(first);
    let last = normalize_word(last);
    if first.is_empty() {
        return String::new();
    }
    if first == last {
        return first;
    }
    format!("{first}.{last}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserFormValues {
    pub name: String,
    pub email: String,
    pub username: String,
    pub role: String,
    username_edited: bool,
}

impl Default for UserFormValues {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            username: String::new(),
            role: Role::User.as_str().to_string(),
            username_edited: false,
        }
    }
}

impl UserFormValues {
    pub fn from_user(user: &UserListItem) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            username: user.username.clone(),
            role: user.role.as_str().to_string(),
            username_edited: true,
        }
    }

    /// Update the name; while creating, the username follows it until edited by hand.
    pub fn set_name(&mut self, name: String, mode: FormMode) {
        self.name = name;
        if mode == FormMode::Create && !self.username_edited {
            let suggested = suggest_username(&self.name);
            if !suggested.is_empty() {
                self.username = suggested;
            }
        }
    }

    pub fn set_username(&mut self, username: String) {
        self.username_edited = true;
        self.username = username;
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check("name", required(&self.name, "Nome é obrigatório"));
        errors.check("email", email(&self.email));
        errors.check("username", required(&self.username, "Usuário é obrigatório"));
        if Role::parse(&self.role).is_none() {
            errors.add("role", "Função é obrigatória");
        }
        errors.into_result()
    }

    pub fn to_payload(&self) -> UserPayload {
        UserPayload {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            username: self.username.trim().to_string(),
            role: Role::from(self.role.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggest_username() {
        assert_eq!(suggest_username("Daniel Monteiro Simas"), "daniel.simas");
        assert_eq!(suggest_username("  Ana  "), "ana");
        assert_eq!(suggest_username("João Conceição"), "joao.conceicao");
        assert_eq!(suggest_username("Zé Zé"), "ze");
        assert_eq!(suggest_username("!!! Silva"), "");
        assert_eq!(suggest_username(""), "");
    }

    #[test]
    fn test_username_follows_name_until_edited() {
        let mut values = UserFormValues::default();
        values.set_name("Daniel Simas".to_string(), FormMode::Create);
        assert_eq!(values.username, "daniel.simas");

        values.set_username("dsimas".to_string());
        values.set_name("Daniel M. Simas".to_string(), FormMode::Create);
        assert_eq!(values.username, "dsimas");
    }

    #[test]
    fn test_no_suggestion_when_editing() {
        let mut values = UserFormValues {
            username: "antigo".to_string(),
            ..Default::default()
        };
        values.set_name("Novo Nome".to_string(), FormMode::Edit);
        assert_eq!(values.username, "antigo");
    }

    #[test]
    fn test_validate() {
        let errors = UserFormValues {
            role: "owner".to_string(),
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(errors.get("name").as_deref(), Some("Nome é obrigatório"));
        assert_eq!(errors.get("email").as_deref(), Some("E-mail é obrigatório"));
        assert_eq!(errors.get("username").as_deref(), Some("Usuário é obrigatório"));
        assert_eq!(errors.get("role").as_deref(), Some("Função é obrigatória"));

        let mut values = UserFormValues::default();
        values.set_name("Ana Lima".to_string(), FormMode::Create);
        values.email = "ana@aru.org".to_string();
        assert!(values.validate().is_ok());
        assert_eq!(values.to_payload().role, Role::User);
    }
}
