pub mod session_store;
pub mod navigation_store;

pub use session_store::SessionStore;
pub use navigation_store::NavigationStore;
