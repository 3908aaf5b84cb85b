//! Shared UI for the WhisperVault client: session coordination, route
//! guarding, and the components every page composes.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod session;
pub use session::{initialize, login, logout, use_api, use_session, SessionProvider, SessionState};

mod guard;
pub use guard::{decide, RequireAuth, RouteDecision};

mod theme;
pub use theme::{apply_theme, load_theme_from_storage, system_prefers_dark, ThemeSignal};

mod navbar;
pub use navbar::Navbar;

mod modal;
pub use modal::{ConfirmDialog, ModalOverlay};

mod create_post;
pub use create_post::CreatePostDialog;

mod edit_post;
pub use edit_post::EditPostDialog;

mod post_card;
pub use post_card::PostCard;

pub mod format;
pub mod validate;

#[cfg(test)]
pub(crate) mod test_support;
