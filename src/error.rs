use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Email o contraseña vacíos
    #[error("missing credentials")]
    MissingCredentials,
    #[error("storage error: {0}")]
    Storage(String),
}

impl SessionError {
    /// Mensaje para el usuario (alert bloqueante)
    pub fn user_message(&self) -> &'static str {
        match self {
            SessionError::MissingCredentials => "Please fill in both email and password!",
            SessionError::Storage(_) => "Could not save your session in this browser.",
        }
    }
}

impl From<String> for SessionError {
    fn from(e: String) -> Self {
        SessionError::Storage(e)
    }
}
