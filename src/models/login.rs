use serde::{Deserialize, Serialize};
use std::fmt;

/// Borrador del formulario de login (nunca se persiste)
#[derive(Clone, PartialEq, Eq, Default)]
pub struct LoginDraft {
    pub email: String,
    pub password: String,
}

impl LoginDraft {
    pub fn set(&mut self, field: LoginField, value: String) {
        match field {
            LoginField::Email => self.email = value,
            LoginField::Password => self.password = value,
        }
    }

    pub fn get(&self, field: LoginField) -> &str {
        match field {
            LoginField::Email => &self.email,
            LoginField::Password => &self.password,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

// Debug sin la contraseña (los snapshots acaban en logs)
impl fmt::Debug for LoginDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginDraft")
            .field("email", &self.email)
            .field("password", &"*".repeat(self.password.chars().count()))
            .finish()
    }
}

/// Campos editables del formulario
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginField {
    Email,
    Password,
}
