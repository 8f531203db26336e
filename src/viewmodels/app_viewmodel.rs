// ============================================================================
// APP VIEWMODEL - Textos y flags que pintan las vistas
// ============================================================================
// Las vistas no deciden nada: solo leen este modelo y envían Intents
// ============================================================================

use crate::models::{LoginDraft, Session, View};
use crate::state::AppSnapshot;

/// Botón del menú de navegación
#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub view: View,
    pub active: bool,
}

/// Contenido principal a renderizar
#[derive(Clone, Debug, PartialEq)]
pub enum Page {
    Home,
    Login,
    Events,
    /// events sin sesión: no se pinta nada
    Empty,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppViewModel {
    pub page: Page,
    pub nav_items: Vec<NavItem>,
    pub user: Option<Session>,
    pub draft: LoginDraft,
    pub message: Option<String>,
    pub counter_label: String,
    pub toggle_label: String,
    pub debug_lines: Vec<String>,
    pub document_title: String,
}

impl AppViewModel {
    pub fn from_snapshot(snapshot: &AppSnapshot) -> Self {
        let logged_in = snapshot.session.is_some();

        let page = match (snapshot.view, logged_in) {
            (View::Home, _) => Page::Home,
            (View::Login, _) => Page::Login,
            (View::Events, true) => Page::Events,
            (View::Events, false) => Page::Empty,
        };

        let second = if logged_in {
            (View::Events, "Events")
        } else {
            (View::Login, "Login")
        };
        let nav_items = [(View::Home, "Home"), second]
            .into_iter()
            .map(|(view, label)| NavItem {
                label,
                view,
                active: snapshot.target == view,
            })
            .collect();

        let user_line = match &snapshot.session {
            Some(session) => format!("User: {}", session.name),
            None => "User: Not logged in".to_string(),
        };

        Self {
            page,
            nav_items,
            user: snapshot.session.clone(),
            draft: snapshot.draft.clone(),
            message: snapshot
                .message_visible
                .then(|| snapshot.message.clone()),
            counter_label: format!("Click me! (Count: {})", snapshot.click_count),
            toggle_label: format!(
                "{} Message",
                if snapshot.message_visible { "Hide" } else { "Show" }
            ),
            debug_lines: vec![
                format!("Current Page: {}", snapshot.target),
                user_line,
                format!("Count: {}", snapshot.click_count),
            ],
            document_title: format!("Count: {}", snapshot.click_count),
        }
    }
}
