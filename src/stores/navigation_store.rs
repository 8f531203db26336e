// ============================================================================
// NAVIGATION STORE - Vista solicitada + borrador de login + contadores demo
// ============================================================================

use crate::models::{LoginDraft, LoginField, Session, View};

#[derive(Clone, Debug, PartialEq)]
pub struct NavigationStore {
    target: View,
    draft: LoginDraft,
    click_count: u32,
    message_visible: bool,
    welcome_message: String,
}

impl NavigationStore {
    pub fn new(welcome_message: impl Into<String>) -> Self {
        Self {
            target: View::Home,
            draft: LoginDraft::default(),
            click_count: 0,
            message_visible: true,
            welcome_message: welcome_message.into(),
        }
    }

    /// Registrar la vista pedida por el usuario (sin filtrar)
    pub fn request_view(&mut self, target: View) {
        log::debug!("🧭 [NAV] {} -> {}", self.target, target);
        self.target = target;
    }

    /// Vista que realmente se renderiza.
    /// Un usuario con sesión que pide login va a events. Events sin sesión
    /// no se redirige aquí: la vista decide no pintar nada.
    pub fn resolve_view(&self, session: Option<&Session>) -> View {
        match (self.target, session) {
            (View::Login, Some(_)) => View::Events,
            (target, _) => target,
        }
    }

    pub fn on_login_succeeded(&mut self) {
        self.target = View::Events;
        self.draft.clear();
    }

    pub fn on_logout_completed(&mut self) {
        self.target = View::Home;
    }

    pub fn edit_field(&mut self, field: LoginField, value: String) {
        self.draft.set(field, value);
    }

    pub fn increment_count(&mut self) {
        self.click_count = self.click_count.saturating_add(1);
    }

    pub fn toggle_message_visible(&mut self) {
        self.message_visible = !self.message_visible;
    }

    /// Texto del recuadro de mensaje
    pub fn message(&self) -> String {
        match self.click_count {
            0 => self.welcome_message.clone(),
            n => format!("Button clicked {} times!", n),
        }
    }

    pub fn target(&self) -> View {
        self.target
    }

    pub fn draft(&self) -> &LoginDraft {
        &self.draft
    }

    pub fn click_count(&self) -> u32 {
        self.click_count
    }

    pub fn message_visible(&self) -> bool {
        self.message_visible
    }
}

impl Default for NavigationStore {
    fn default() -> Self {
        Self::new(crate::config::AppConfig::default().welcome_message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> Session {
        Session::from_email("ada@example.com")
    }

    #[test]
    fn test_initial_state() {
        let nav = NavigationStore::default();
        assert_eq!(nav.target(), View::Home);
        assert_eq!(nav.draft(), &LoginDraft::default());
        assert_eq!(nav.click_count(), 0);
        assert!(nav.message_visible());
    }

    #[test]
    fn test_login_redirects_when_logged_in() {
        let mut nav = NavigationStore::default();
        nav.request_view(View::Login);

        assert_eq!(nav.resolve_view(Some(&ada())), View::Events);
        assert_eq!(nav.resolve_view(None), View::Login);
    }

    #[test]
    fn test_home_is_never_redirected() {
        let nav = NavigationStore::default();
        assert_eq!(nav.resolve_view(None), View::Home);
        assert_eq!(nav.resolve_view(Some(&ada())), View::Home);
    }

    #[test]
    fn test_events_is_not_gated_here() {
        let mut nav = NavigationStore::default();
        nav.request_view(View::Events);

        assert_eq!(nav.resolve_view(None), View::Events);
        assert_eq!(nav.resolve_view(Some(&ada())), View::Events);
    }

    #[test]
    fn test_request_view_does_not_gate() {
        let mut nav = NavigationStore::default();
        nav.request_view(View::Events);
        assert_eq!(nav.target(), View::Events);
    }

    #[test]
    fn test_login_succeeded_clears_draft() {
        let mut nav = NavigationStore::default();
        nav.request_view(View::Login);
        nav.edit_field(LoginField::Email, "ada@example.com".to_string());
        nav.edit_field(LoginField::Password, "x".to_string());

        nav.on_login_succeeded();
        assert_eq!(nav.target(), View::Events);
        assert_eq!(nav.draft().email, "");
        assert_eq!(nav.draft().password, "");
    }

    #[test]
    fn test_logout_completed_goes_home() {
        for view in View::ALL {
            let mut nav = NavigationStore::default();
            nav.request_view(view);
            nav.on_logout_completed();
            assert_eq!(nav.target(), View::Home);
        }
    }

    #[test]
    fn test_counter_and_message() {
        let mut nav = NavigationStore::new("Hola");
        assert_eq!(nav.message(), "Hola");

        for _ in 0..3 {
            nav.increment_count();
        }
        assert_eq!(nav.click_count(), 3);
        assert_eq!(nav.message(), "Button clicked 3 times!");
    }

    #[test]
    fn test_toggle_twice_restores_visibility() {
        let mut nav = NavigationStore::default();
        let original = nav.message_visible();

        nav.toggle_message_visible();
        assert_ne!(nav.message_visible(), original);
        nav.toggle_message_visible();
        assert_eq!(nav.message_visible(), original);
    }
}
