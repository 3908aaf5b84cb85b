use dioxus::prelude::*;
use ui::{use_api, use_session, ConfirmDialog};

/// What the confirmation modal is currently asking about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingAction {
    DeleteAllMessages,
    DeleteAccount,
    ClearLocalData,
    Logout,
}

impl PendingAction {
    fn title(self) -> &'static str {
        match self {
            PendingAction::DeleteAllMessages => "Delete All Messages",
            PendingAction::DeleteAccount => "Delete Account",
            PendingAction::ClearLocalData => "Clear All Website Data",
            PendingAction::Logout => "Log Out",
        }
    }

    fn message(self) -> &'static str {
        match self {
            PendingAction::DeleteAllMessages => {
                "Are you sure you want to delete all your posts and comments? \
                 This action cannot be undone."
            }
            PendingAction::DeleteAccount => {
                "Are you sure you want to permanently delete your account? \
                 This will remove all your data and cannot be undone."
            }
            PendingAction::ClearLocalData => {
                "This will remove all local storage and session data for this \
                 website. The page will reload and you may need to log in again."
            }
            PendingAction::Logout => "Are you sure you want to log out?",
        }
    }
}

/// Account preferences and data management. The destructive account
/// actions are simulations — they confirm, then report what a real
/// backend call would have done. Clearing local data and logging out are
/// real.
#[component]
pub fn Settings() -> Element {
    let mut session = use_session();
    let client = use_api();
    let mut pending = use_signal(|| Option::<PendingAction>::None);
    let mut status = use_signal(|| Option::<String>::None);
    let mut email_notifications = use_signal(|| true);
    let mut push_notifications = use_signal(|| false);

    let confirm_client = client.clone();
    let handle_confirm = move |action: PendingAction| {
        let client = confirm_client.clone();
        spawn(async move {
            pending.set(None);
            match action {
                PendingAction::DeleteAllMessages => {
                    status.set(Some(
                        "All messages would be deleted via an API call.".to_string(),
                    ));
                }
                PendingAction::DeleteAccount => {
                    status.set(Some(
                        "The account would be deleted via an API call and the \
                         user logged out."
                            .to_string(),
                    ));
                }
                PendingAction::ClearLocalData => {
                    clear_local_data();
                }
                PendingAction::Logout => {
                    session.set(ui::logout(&client).await);
                    #[cfg(target_arch = "wasm32")]
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/login");
                    }
                }
            }
        });
    };

    let logged_in = session().user.is_some();

    rsx! {
        div {
            class: "page settings-page",

            div {
                class: "settings-header",
                h1 { "Settings" }
                p { "Manage your account preferences and data" }
            }

            if let Some(msg) = status() {
                div {
                    class: "action-banner",
                    span { "{msg}" }
                    button {
                        class: "banner-dismiss",
                        onclick: move |_| status.set(None),
                        "\u{2715}"
                    }
                }
            }

            if logged_in {
                div {
                    class: "settings-card",
                    h2 { "Privacy & Data" }

                    div {
                        class: "setting-item",
                        div {
                            class: "setting-info",
                            h3 { "Delete All Messages" }
                            p { "Permanently remove all your posts and comments" }
                        }
                        button {
                            class: "btn-danger",
                            onclick: move |_| pending.set(Some(PendingAction::DeleteAllMessages)),
                            "Delete All"
                        }
                    }

                    div {
                        class: "setting-item",
                        div {
                            class: "setting-info",
                            h3 { "Delete Account" }
                            p { "Permanently delete your account and all associated data" }
                        }
                        button {
                            class: "btn-danger",
                            onclick: move |_| pending.set(Some(PendingAction::DeleteAccount)),
                            "Delete Account"
                        }
                    }
                }

                div {
                    class: "settings-card",
                    h2 { "Notifications" }

                    div {
                        class: "setting-item",
                        div {
                            class: "setting-info",
                            h3 { "Email Notifications" }
                            p { "Receive email updates for replies and mentions" }
                        }
                        input {
                            r#type: "checkbox",
                            checked: email_notifications(),
                            onchange: move |_| email_notifications.set(!email_notifications()),
                        }
                    }

                    div {
                        class: "setting-item",
                        div {
                            class: "setting-info",
                            h3 { "Push Notifications" }
                            p { "Get browser notifications for new activity" }
                        }
                        input {
                            r#type: "checkbox",
                            checked: push_notifications(),
                            onchange: move |_| push_notifications.set(!push_notifications()),
                        }
                    }
                }
            }

            div {
                class: "settings-card",
                h2 { "Local Settings" }

                div {
                    class: "setting-item",
                    div {
                        class: "setting-info",
                        h3 { "Clear All Website Data" }
                        p {
                            "Remove local storage and session data for this \
                             website. Use this if the app is malfunctioning."
                        }
                    }
                    button {
                        class: "btn-danger",
                        onclick: move |_| pending.set(Some(PendingAction::ClearLocalData)),
                        "Clear All Data"
                    }
                }

                if logged_in {
                    div {
                        class: "setting-item",
                        div {
                            class: "setting-info",
                            h3 { "Log Out" }
                            p { "Sign out of your account" }
                        }
                        button {
                            class: "btn-secondary",
                            onclick: move |_| pending.set(Some(PendingAction::Logout)),
                            "Log Out"
                        }
                    }
                }
            }
        }

        if let Some(action) = pending() {
            ConfirmDialog {
                title: action.title().to_string(),
                message: action.message().to_string(),
                on_confirm: move |_| handle_confirm(action),
                on_cancel: move |_| pending.set(None),
            }
        }
    }
}

/// Clear localStorage and sessionStorage, then reload so every page
/// re-resolves its state from scratch.
#[cfg(target_arch = "wasm32")]
fn clear_local_data() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Ok(Some(storage)) = window.local_storage() {
        let _ = storage.clear();
    }
    if let Ok(Some(storage)) = window.session_storage() {
        let _ = storage.clear();
    }
    let _ = window.location().reload();
}

#[cfg(not(target_arch = "wasm32"))]
fn clear_local_data() {}
