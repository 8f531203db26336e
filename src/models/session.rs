use serde::{Deserialize, Serialize};

// ============================================================================
// SESSION - Identidad simulada (derivada solo del email)
// ============================================================================

/// Sesión simulada. Se persiste como `{"email": ..., "name": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
    pub name: String,
}

impl Session {
    /// Construir sesión a partir del email; el nombre se deriva del email
    pub fn from_email(email: &str) -> Self {
        Self {
            email: email.to_string(),
            name: display_name(email).to_string(),
        }
    }
}

/// Parte local del email (antes del primer `@`), o el email completo si no hay `@`
pub fn display_name(email: &str) -> &str {
    match email.split_once('@') {
        Some((local, _)) => local,
        None => email,
    }
}
