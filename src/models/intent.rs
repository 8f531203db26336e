use crate::models::{LoginField, View};

/// Intenciones que la capa de presentación envía al estado
#[derive(Clone, Debug, PartialEq)]
pub enum Intent {
    /// Click en el menú de navegación
    Navigate(View),
    /// Edición de un campo del formulario de login
    EditField(LoginField, String),
    SubmitLogin,
    Logout,
    ClickCounter,
    ToggleMessage,
}
