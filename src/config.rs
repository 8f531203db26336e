use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub log_level: String,
    /// Clave de localStorage donde se guarda la sesión serializada
    pub session_storage_key: String,
    pub welcome_message: String,
    pub app_title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            log_level: "info".to_string(),
            session_storage_key: "user".to_string(),
            welcome_message: "Welcome to Houzeful!".to_string(),
            app_title: "🏠 Houzeful".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            environment: option_env!("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            log_level: option_env!("LOG_LEVEL")
                .map(str::to_string)
                .unwrap_or(defaults.log_level),
            session_storage_key: option_env!("SESSION_STORAGE_KEY")
                .filter(|k| !k.is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.session_storage_key),
            welcome_message: option_env!("WELCOME_MESSAGE")
                .map(str::to_string)
                .unwrap_or(defaults.welcome_message),
            app_title: option_env!("APP_TITLE")
                .map(str::to_string)
                .unwrap_or(defaults.app_title),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Nivel de log para wasm_logger; valores desconocidos caen a Info
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
