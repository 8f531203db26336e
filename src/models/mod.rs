pub mod session;
pub mod login;
pub mod view;
pub mod intent;

pub use session::Session;
pub use login::{LoginDraft, LoginField};
pub use view::View;
pub use intent::Intent;
