// ============================================================================
// SESSION STORE - Identidad simulada + persistencia en localStorage
// ============================================================================
// Único dueño de la sesión y único punto que escribe en el almacén durable
// ============================================================================

use std::rc::Rc;
use crate::error::SessionError;
use crate::models::Session;
use crate::services::storage::{load_json, save_json, KeyValueStore};

pub struct SessionStore {
    session: Option<Session>,
    storage: Rc<dyn KeyValueStore>,
    storage_key: String,
}

impl SessionStore {
    /// Crear store vacío (anónimo); no lee el almacén
    pub fn new(storage: Rc<dyn KeyValueStore>, storage_key: impl Into<String>) -> Self {
        Self {
            session: None,
            storage,
            storage_key: storage_key.into(),
        }
    }

    /// Crear store y restaurar la sesión guardada, si la hay
    pub fn restore(storage: Rc<dyn KeyValueStore>, storage_key: impl Into<String>) -> Self {
        let mut store = Self::new(storage, storage_key);
        store.session = store.load_session();
        store
    }

    /// Leer la sesión del almacén. Datos ausentes o corruptos cuentan como anónimo
    pub fn load_session(&self) -> Option<Session> {
        match load_json::<Session>(self.storage.as_ref(), &self.storage_key) {
            Ok(Some(session)) => {
                log::info!("📋 [SESSION] Sesión restaurada para {}", session.name);
                Some(session)
            }
            Ok(None) => None,
            Err(e) => {
                log::warn!("⚠️ [SESSION] Sesión guardada ilegible, se ignora: {}", e);
                None
            }
        }
    }

    /// Login simulado: solo exige email y contraseña no vacíos
    pub fn login(&mut self, email: &str, password: &str) -> Result<Session, SessionError> {
        if email.is_empty() || password.is_empty() {
            log::warn!("⚠️ [SESSION] Login rechazado: faltan credenciales");
            return Err(SessionError::MissingCredentials);
        }

        let session = Session::from_email(email);
        save_json(self.storage.as_ref(), &self.storage_key, &session)?;
        log::info!("💾 [SESSION] Sesión guardada para {}", session.name);

        self.session = Some(session.clone());
        Ok(session)
    }

    /// Logout idempotente
    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.session = None;
        self.storage.remove(&self.storage_key)?;
        log::info!("👋 [SESSION] Sesión eliminada");
        Ok(())
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::MemoryStorage;

    const KEY: &str = "user";

    fn store_on(storage: &MemoryStorage) -> SessionStore {
        SessionStore::restore(Rc::new(storage.clone()), KEY)
    }

    #[test]
    fn test_login_derives_name_and_persists() {
        let storage = MemoryStorage::new();
        let mut store = store_on(&storage);

        let session = store.login("ada@example.com", "x").unwrap();
        assert_eq!(session.name, "ada");
        assert_eq!(store.session(), Some(&session));
        assert!(storage.get(KEY).is_some());
    }

    #[test]
    fn test_login_without_at_uses_whole_email() {
        let storage = MemoryStorage::new();
        let mut store = store_on(&storage);

        let session = store.login("grace", "pw").unwrap();
        assert_eq!(session.name, "grace");
        assert_eq!(session.email, "grace");
    }

    #[test]
    fn test_login_missing_credentials_writes_nothing() {
        let storage = MemoryStorage::new();
        let mut store = store_on(&storage);

        assert_eq!(store.login("", "x"), Err(SessionError::MissingCredentials));
        assert_eq!(
            store.login("ada@example.com", ""),
            Err(SessionError::MissingCredentials)
        );
        assert!(store.session().is_none());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_failed_login_keeps_previous_session() {
        let storage = MemoryStorage::new();
        let mut store = store_on(&storage);
        let first = store.login("ada@example.com", "x").unwrap();

        assert!(store.login("", "").is_err());
        assert_eq!(store.session(), Some(&first));
        assert_eq!(store_on(&storage).session(), Some(&first));
    }

    #[test]
    fn test_login_overwrites_previous_session() {
        let storage = MemoryStorage::new();
        let mut store = store_on(&storage);
        store.login("ada@example.com", "x").unwrap();
        let second = store.login("grace@example.com", "y").unwrap();

        assert_eq!(store_on(&storage).session(), Some(&second));
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_reload_restores_session() {
        let storage = MemoryStorage::new();
        let created = store_on(&storage).login("ada@example.com", "x").unwrap();

        let reloaded = store_on(&storage);
        assert_eq!(reloaded.load_session(), Some(created.clone()));
        assert_eq!(reloaded.session(), Some(&created));
    }

    #[test]
    fn test_logout_is_idempotent() {
        let storage = MemoryStorage::new();
        let mut store = store_on(&storage);
        store.login("ada@example.com", "x").unwrap();

        store.logout().unwrap();
        assert!(!store.is_logged_in());
        assert!(storage.get(KEY).is_none());

        store.logout().unwrap();
        assert!(!store.is_logged_in());
        assert!(store_on(&storage).session().is_none());
    }

    #[test]
    fn test_malformed_storage_is_anonymous() {
        let storage = MemoryStorage::new();
        storage.set(KEY, "{\"email\": 42").unwrap();
        assert!(store_on(&storage).session().is_none());

        storage.set(KEY, "{\"nombre\": \"ada\"}").unwrap();
        assert!(store_on(&storage).session().is_none());
    }
}
