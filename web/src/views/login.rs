use api::Credentials;
use dioxus::prelude::*;
use ui::icons::{FaEye, FaEyeSlash};
use ui::{use_api, use_session, Icon};

use crate::Route;

/// Login page. The session store performs the actual login + whoami
/// resolution; this controller only reflects the outcome.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let client = use_api();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);
    let mut show_password = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);
            submitting.set(true);
            let credentials = Credentials {
                username: username(),
                password: password(),
            };
            match ui::login(&client, &credentials).await {
                Ok(state) => {
                    session.set(state);
                    nav.push(Route::Home {});
                }
                Err(err) => {
                    tracing::warn!("login failed: {err}");
                    error.set(Some("Login failed. Check your credentials.".to_string()));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",

                div {
                    class: "auth-header",
                    h1 { "Welcome Back" }
                    p { "Sign in to your Whisper account" }
                }

                form {
                    class: "auth-form",
                    onsubmit: handle_submit,

                    div {
                        class: "form-group",
                        label { r#for: "username", "Username" }
                        input {
                            id: "username",
                            r#type: "text",
                            placeholder: "Enter your username",
                            value: username(),
                            oninput: move |evt: FormEvent| {
                                username.set(evt.value());
                                error.set(None);
                            },
                        }
                    }

                    div {
                        class: "form-group",
                        label { r#for: "password", "Password" }
                        div {
                            class: "password-wrapper",
                            input {
                                id: "password",
                                r#type: if show_password() { "text" } else { "password" },
                                placeholder: "Enter your password",
                                value: password(),
                                oninput: move |evt: FormEvent| {
                                    password.set(evt.value());
                                    error.set(None);
                                },
                            }
                            button {
                                r#type: "button",
                                class: "password-toggle",
                                onclick: move |_| show_password.set(!show_password()),
                                if show_password() {
                                    Icon { icon: FaEyeSlash, width: 14, height: 14 }
                                } else {
                                    Icon { icon: FaEye, width: 14, height: 14 }
                                }
                            }
                        }
                    }

                    if let Some(err) = error() {
                        div { class: "error-box", "{err}" }
                    }

                    button {
                        r#type: "submit",
                        class: "btn-primary wide",
                        disabled: submitting(),
                        if submitting() { "Signing In..." } else { "Sign In" }
                    }
                }

                div {
                    class: "auth-footer",
                    p {
                        "Don't have an account? "
                        a { href: "/signup", "Sign up" }
                    }
                }
            }
        }
    }
}
