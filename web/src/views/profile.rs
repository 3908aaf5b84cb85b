use api::{UserInfo, WhisperApi};
use dioxus::prelude::*;
use ui::format::member_since;
use ui::{use_api, CreatePostDialog, ModalOverlay, RequireAuth};

/// The viewer's profile. Fetches a fresh copy of the user on mount
/// instead of reusing the session snapshot, so edits made elsewhere show
/// up.
#[component]
pub fn Profile() -> Element {
    rsx! {
        RequireAuth {
            ProfileInner {}
        }
    }
}

#[component]
fn ProfileInner() -> Element {
    let client = use_api();
    let mut profile = use_signal(|| Option::<UserInfo>::None);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut show_create = use_signal(|| false);
    let mut refresh = use_signal(|| 0u32);

    let loader_client = client.clone();
    let _loader = use_resource(move || {
        let client = loader_client.clone();
        let _tick = refresh();
        async move {
            loading.set(true);
            match client.current_user().await {
                Ok(user) => {
                    profile.set(Some(user));
                    error.set(None);
                }
                Err(err) => {
                    tracing::warn!("profile fetch failed: {err}");
                    error.set(Some("Failed to load profile.".to_string()));
                }
            }
            loading.set(false);
        }
    });

    if loading() {
        return rsx! {
            div {
                class: "page profile-page",
                div { class: "loading-state", p { "Loading profile..." } }
            }
        };
    }

    if let Some(err) = error() {
        return rsx! {
            div {
                class: "page profile-page",
                div {
                    class: "error-state",
                    p { "{err}" }
                    button {
                        class: "retry-button",
                        onclick: move |_| refresh.set(refresh() + 1),
                        "Try Again"
                    }
                }
            }
        };
    }

    let Some(user) = profile() else {
        return rsx! {
            div {
                class: "page profile-page",
                div { class: "empty-state", p { "No profile found." } }
            }
        };
    };

    let joined = member_since(user.join_date);

    rsx! {
        div {
            class: "page profile-page",

            div {
                class: "profile-header",
                span { class: "profile-avatar", "{user.avatar_initial()}" }
                div {
                    class: "profile-names",
                    h1 { "{user.display_alias()}" }
                    p { class: "profile-username", "{user.username}" }
                }
            }

            div {
                class: "profile-grid",

                div {
                    class: "profile-card",
                    h3 { "Account Information" }
                    div {
                        class: "info-item",
                        span { class: "info-label", "Email" }
                        span { class: "info-value", "{user.email}" }
                    }
                    div {
                        class: "info-item",
                        span { class: "info-label", "Username" }
                        span { class: "info-value", "{user.username}" }
                    }
                    div {
                        class: "info-item",
                        span { class: "info-label", "Display Alias" }
                        span { class: "info-value", "{user.display_alias()}" }
                    }
                }

                div {
                    class: "profile-card",
                    h3 { "Activity Stats" }
                    div {
                        class: "info-item",
                        span { class: "info-label", "Total Messages" }
                        span { class: "info-value", "{user.messages.unwrap_or(0)}" }
                    }
                    div {
                        class: "info-item",
                        span { class: "info-label", "Followers" }
                        span { class: "info-value", "{user.followers.unwrap_or(0)}" }
                    }
                    div {
                        class: "info-item",
                        span { class: "info-label", "Member Since" }
                        span { class: "info-value", "{joined}" }
                    }
                }
            }

            div {
                class: "profile-card",
                h3 { "Quick Actions" }
                div {
                    class: "actions-grid",
                    a { class: "btn-secondary", href: "/myposts", "My Posts" }
                    button {
                        class: "btn-secondary",
                        onclick: move |_| show_create.set(true),
                        "Create Post"
                    }
                    a { class: "btn-secondary", href: "/settings", "Settings" }
                }
            }
        }

        if show_create() {
            ModalOverlay {
                on_close: move |_| show_create.set(false),
                CreatePostDialog {
                    on_created: move |_| {
                        show_create.set(false);
                        refresh.set(refresh() + 1);
                    },
                    on_cancel: move |_| show_create.set(false),
                }
            }
        }
    }
}
