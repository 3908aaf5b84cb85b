use dioxus::prelude::*;

use crate::icons::{FaChevronDown, FaGear, FaMoon, FaPlus, FaRightFromBracket, FaSun, FaUser};
use crate::session::{use_api, use_session};
use crate::theme::{apply_theme, system_prefers_dark, ThemeSignal};
use crate::{CreatePostDialog, Icon, ModalOverlay};

/// Top navigation bar: brand, create/my-posts entries for logged-in
/// users, theme toggle, and the user dropdown.
#[component]
pub fn Navbar() -> Element {
    let mut session = use_session();
    let client = use_api();
    let mut theme = use_context::<ThemeSignal>();
    let mut dropdown_open = use_signal(|| false);
    let mut show_create = use_signal(|| false);

    let is_dark = match theme() {
        Some(ref t) => t == "dark",
        None => system_prefers_dark(),
    };

    let toggle_theme = move |_| {
        let next = if is_dark { "light" } else { "dark" };
        apply_theme(Some(next));
        theme.set(Some(next.to_string()));
    };

    let on_logout = move |_| {
        let client = client.clone();
        async move {
            session.set(crate::session::logout(&client).await);
            dropdown_open.set(false);
            #[cfg(target_arch = "wasm32")]
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
    };

    rsx! {
        nav {
            class: "whisper-navbar",

            div {
                class: "nav-left",
                a {
                    class: "logo-link",
                    href: "/",
                    span { class: "logo-badge", "W" }
                    span { class: "logo-text", "WhisperVault" }
                }
                if session().user.is_some() {
                    button {
                        class: "nav-link",
                        onclick: move |_| show_create.set(true),
                        Icon { icon: FaPlus, width: 14, height: 14 }
                        span { "Create Post" }
                    }
                    a {
                        class: "nav-link",
                        href: "/myposts",
                        span { "My Posts" }
                    }
                }
            }

            div {
                class: "nav-right",
                button {
                    class: "icon-btn",
                    title: "Toggle theme",
                    onclick: toggle_theme,
                    if is_dark {
                        Icon { icon: FaSun, width: 16, height: 16 }
                    } else {
                        Icon { icon: FaMoon, width: 16, height: 16 }
                    }
                }

                if let Some(user) = session().user {
                    div {
                        class: "user-menu",
                        button {
                            class: "user-trigger",
                            onclick: move |_| dropdown_open.set(!dropdown_open()),
                            span { class: "user-avatar", "{user.avatar_initial()}" }
                            span { class: "user-name", "{user.display_alias()}" }
                            Icon { icon: FaChevronDown, width: 12, height: 12 }
                        }
                        if dropdown_open() {
                            div {
                                class: "dropdown-menu",
                                a {
                                    class: "dropdown-item",
                                    href: "/profile",
                                    Icon { icon: FaUser, width: 14, height: 14 }
                                    span { "My Profile" }
                                }
                                a {
                                    class: "dropdown-item",
                                    href: "/settings",
                                    Icon { icon: FaGear, width: 14, height: 14 }
                                    span { "Settings" }
                                }
                                button {
                                    class: "dropdown-item",
                                    onclick: on_logout,
                                    Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                                    span { "Log Out" }
                                }
                            }
                        }
                    }
                } else {
                    div {
                        class: "auth-buttons",
                        a { class: "login-btn", href: "/login", "Log In" }
                        a { class: "signup-btn", href: "/signup", "Sign Up" }
                    }
                }
            }
        }

        if show_create() {
            ModalOverlay {
                on_close: move |_| show_create.set(false),
                CreatePostDialog {
                    on_created: move |_| {
                        show_create.set(false);
                        #[cfg(target_arch = "wasm32")]
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/");
                        }
                    },
                    on_cancel: move |_| show_create.set(false),
                }
            }
        }
    }
}
