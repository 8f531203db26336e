// ============================================================================
// APP STATE - Estado de la aplicación (sesión + navegación)
// ============================================================================
// Handle clonable: todos los clones comparten los mismos stores.
// Toda mutación pasa por dispatch() y termina notificando a los subscribers.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::config::AppConfig;
use crate::error::SessionError;
use crate::models::{Intent, LoginDraft, LoginField, Session, View};
use crate::services::KeyValueStore;
use crate::stores::{NavigationStore, SessionStore};

/// Qué tiene que repintar la UI tras una intención
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateType {
    /// Solo cambió el borrador: el `<input>` ya muestra el valor tecleado
    DraftOnly,
    /// Re-render completo
    FullRender,
}

impl UpdateType {
    fn for_intent(intent: &Intent) -> Self {
        match intent {
            Intent::EditField(..) => UpdateType::DraftOnly,
            _ => UpdateType::FullRender,
        }
    }
}

/// Foto del estado que consume la capa de presentación
#[derive(Clone, Debug, PartialEq)]
pub struct AppSnapshot {
    pub view: View,
    pub target: View,
    pub session: Option<Session>,
    pub draft: LoginDraft,
    pub click_count: u32,
    pub message_visible: bool,
    pub message: String,
}

#[derive(Clone)]
pub struct AppState {
    session: Rc<RefCell<SessionStore>>,
    navigation: Rc<RefCell<NavigationStore>>,
    change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn(UpdateType)>>>>,
}

impl AppState {
    /// Crear estado restaurando la sesión guardada en `storage`
    pub fn new(storage: Rc<dyn KeyValueStore>, config: &AppConfig) -> Self {
        let session = SessionStore::restore(storage, config.session_storage_key.clone());
        let navigation = NavigationStore::new(config.welcome_message.clone());

        Self {
            session: Rc::new(RefCell::new(session)),
            navigation: Rc::new(RefCell::new(navigation)),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Aplicar una intención de la UI
    pub fn dispatch(&self, intent: Intent) -> Result<(), SessionError> {
        log::debug!("🎯 [STATE] {:?}", redact(&intent));

        let update_type = UpdateType::for_intent(&intent);
        let result = self.apply(intent);
        if let Err(e) = &result {
            log::warn!("⚠️ [STATE] Intención rechazada: {}", e);
        }

        self.notify_subscribers(update_type);
        result
    }

    fn apply(&self, intent: Intent) -> Result<(), SessionError> {
        match intent {
            Intent::Navigate(view) => self.navigation.borrow_mut().request_view(view),
            Intent::EditField(field, value) => {
                self.navigation.borrow_mut().edit_field(field, value)
            }
            Intent::SubmitLogin => {
                let draft = self.navigation.borrow().draft().clone();
                let session = self
                    .session
                    .borrow_mut()
                    .login(&draft.email, &draft.password)?;
                self.navigation.borrow_mut().on_login_succeeded();
                log::info!("✅ [STATE] Login correcto: {}", session.name);
            }
            Intent::Logout => {
                // La navegación vuelve a home aunque falle el borrado del storage
                let result = self.session.borrow_mut().logout();
                self.navigation.borrow_mut().on_logout_completed();
                result?;
            }
            Intent::ClickCounter => self.navigation.borrow_mut().increment_count(),
            Intent::ToggleMessage => self.navigation.borrow_mut().toggle_message_visible(),
        }
        Ok(())
    }

    pub fn snapshot(&self) -> AppSnapshot {
        let session_store = self.session.borrow();
        let navigation = self.navigation.borrow();
        let session = session_store.session().cloned();

        AppSnapshot {
            view: navigation.resolve_view(session.as_ref()),
            target: navigation.target(),
            session,
            draft: navigation.draft().clone(),
            click_count: navigation.click_count(),
            message_visible: navigation.message_visible(),
            message: navigation.message(),
        }
    }

    pub fn session(&self) -> Option<Session> {
        self.session.borrow().session().cloned()
    }

    /// Suscribirse a cambios de estado
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn(UpdateType) + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    fn notify_subscribers(&self, update_type: UpdateType) {
        // Copia para que un subscriber pueda suscribir a otros sin conflicto de borrow
        let subscribers: Vec<Rc<dyn Fn(UpdateType)>> = self.change_subscribers.borrow().clone();
        for callback in subscribers {
            callback(update_type);
        }
    }
}

/// La contraseña no debe aparecer en los logs
fn redact(intent: &Intent) -> Intent {
    match intent {
        Intent::EditField(LoginField::Password, value) => {
            Intent::EditField(LoginField::Password, "*".repeat(value.chars().count()))
        }
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::MemoryStorage;

    fn state_on(storage: &MemoryStorage) -> AppState {
        AppState::new(Rc::new(storage.clone()), &AppConfig::default())
    }

    fn fill_login(state: &AppState, email: &str, password: &str) {
        state
            .dispatch(Intent::EditField(LoginField::Email, email.to_string()))
            .unwrap();
        state
            .dispatch(Intent::EditField(LoginField::Password, password.to_string()))
            .unwrap();
    }

    #[test]
    fn test_login_scenario() {
        let storage = MemoryStorage::new();
        let state = state_on(&storage);

        state.dispatch(Intent::Navigate(View::Login)).unwrap();
        assert_eq!(state.snapshot().view, View::Login);

        fill_login(&state, "ada@example.com", "x");
        state.dispatch(Intent::SubmitLogin).unwrap();

        let snapshot = state.snapshot();
        assert_eq!(snapshot.session.as_ref().map(|s| s.name.as_str()), Some("ada"));
        assert_eq!(snapshot.target, View::Events);
        assert_eq!(snapshot.view, View::Events);
        assert_eq!(snapshot.draft, LoginDraft::default());
    }

    #[test]
    fn test_submit_with_empty_password_keeps_state() {
        let storage = MemoryStorage::new();
        let state = state_on(&storage);
        state.dispatch(Intent::Navigate(View::Login)).unwrap();
        fill_login(&state, "ada@example.com", "");

        let before = state.snapshot();
        assert_eq!(
            state.dispatch(Intent::SubmitLogin),
            Err(SessionError::MissingCredentials)
        );
        assert_eq!(state.snapshot(), before);
        assert!(storage.is_empty());
    }

    #[test]
    fn test_logged_in_user_asking_for_login_sees_events() {
        let storage = MemoryStorage::new();
        let state = state_on(&storage);
        fill_login(&state, "ada@example.com", "x");
        state.dispatch(Intent::SubmitLogin).unwrap();

        state.dispatch(Intent::Navigate(View::Login)).unwrap();
        let snapshot = state.snapshot();
        assert_eq!(snapshot.target, View::Login);
        assert_eq!(snapshot.view, View::Events);
    }

    #[test]
    fn test_logout_twice_equals_once() {
        let storage = MemoryStorage::new();
        let state = state_on(&storage);
        fill_login(&state, "ada@example.com", "x");
        state.dispatch(Intent::SubmitLogin).unwrap();

        state.dispatch(Intent::Logout).unwrap();
        let once = state.snapshot();
        state.dispatch(Intent::Logout).unwrap();

        assert_eq!(state.snapshot(), once);
        assert_eq!(once.session, None);
        assert_eq!(once.target, View::Home);
        assert!(storage.is_empty());
    }

    #[test]
    fn test_reload_keeps_session_but_not_navigation() {
        let storage = MemoryStorage::new();
        let state = state_on(&storage);
        fill_login(&state, "ada@example.com", "x");
        state.dispatch(Intent::SubmitLogin).unwrap();
        state.dispatch(Intent::ClickCounter).unwrap();

        let reloaded = state_on(&storage).snapshot();
        assert_eq!(reloaded.session, state.session());
        assert_eq!(reloaded.target, View::Home);
        assert_eq!(reloaded.click_count, 0);
    }

    #[test]
    fn test_counter_scenario() {
        let state = state_on(&MemoryStorage::new());
        for _ in 0..3 {
            state.dispatch(Intent::ClickCounter).unwrap();
        }
        state.dispatch(Intent::ToggleMessage).unwrap();
        state.dispatch(Intent::ToggleMessage).unwrap();

        let snapshot = state.snapshot();
        assert_eq!(snapshot.click_count, 3);
        assert!(snapshot.message_visible);
        assert_eq!(snapshot.message, "Button clicked 3 times!");
    }

    #[test]
    fn test_subscribers_notified_on_every_dispatch() {
        let state = state_on(&MemoryStorage::new());
        let updates = Rc::new(RefCell::new(Vec::new()));
        {
            let updates = updates.clone();
            state.subscribe_to_changes(move |update| updates.borrow_mut().push(update));
        }

        state.dispatch(Intent::ClickCounter).unwrap();
        let _ = state.dispatch(Intent::SubmitLogin);
        fill_login(&state, "ada@example.com", "x");
        assert_eq!(
            *updates.borrow(),
            [
                UpdateType::FullRender,
                UpdateType::FullRender,
                UpdateType::DraftOnly,
                UpdateType::DraftOnly,
            ]
        );
    }

    #[test]
    fn test_clones_share_state() {
        let state = state_on(&MemoryStorage::new());
        let handle = state.clone();
        handle.dispatch(Intent::Navigate(View::Events)).unwrap();
        assert_eq!(state.snapshot().target, View::Events);
    }

    #[test]
    fn test_password_is_redacted() {
        let intent = Intent::EditField(LoginField::Password, "secret".to_string());
        assert_eq!(
            redact(&intent),
            Intent::EditField(LoginField::Password, "******".to_string())
        );
    }
}
