//! Light/dark theme persistence: one localStorage key, with the system
//! preference as the fallback when no explicit choice was made.

use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
const THEME_KEY: &str = "theme";

/// App-wide theme context: `Some("light")`, `Some("dark")`, or `None` to
/// follow the system preference.
pub type ThemeSignal = Signal<Option<String>>;

#[cfg(target_arch = "wasm32")]
pub fn load_theme_from_storage() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok().flatten()?;
    storage.get_item(THEME_KEY).ok().flatten()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_theme_from_storage() -> Option<String> {
    None
}

/// Whether the OS currently prefers a dark scheme.
#[cfg(target_arch = "wasm32")]
pub fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|m| m.matches())
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn system_prefers_dark() -> bool {
    false
}

/// Resolve the choice against the system preference, toggle the body
/// classes, and persist it. `None` removes the stored key.
#[cfg(target_arch = "wasm32")]
pub fn apply_theme(theme: Option<&str>) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let dark = match theme {
        Some(t) => t == "dark",
        None => system_prefers_dark(),
    };

    if let Some(body) = window.document().and_then(|d| d.body()) {
        let classes = body.class_list();
        let _ = classes.toggle_with_force("dark", dark);
        let _ = classes.toggle_with_force("light", !dark);
    }

    if let Ok(Some(storage)) = window.local_storage() {
        let _ = match theme {
            Some(t) => storage.set_item(THEME_KEY, t),
            None => storage.remove_item(THEME_KEY),
        };
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn apply_theme(_theme: Option<&str>) {}
