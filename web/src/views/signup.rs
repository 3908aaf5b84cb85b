use api::SignupForm;
use dioxus::prelude::*;
use ui::format::sleep_ms;
use ui::icons::{FaEye, FaEyeSlash};
use ui::validate::{submit_signup, SignupError};
use ui::{use_api, Icon};

use crate::Route;

/// Signup page. Validation runs before any network call; the first
/// violated rule is shown verbatim. A successful signup shows a success
/// message, then redirects to login after a short delay.
#[component]
pub fn Signup() -> Element {
    let client = use_api();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut username = use_signal(String::new);
    let mut alias = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);
    let mut show_password = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);
            success.set(None);
            submitting.set(true);

            let form = SignupForm {
                email: email().trim().to_string(),
                username: username().trim().to_string(),
                alias: alias().trim().to_string(),
                password: password(),
            };
            match submit_signup(&client, &form).await {
                Ok(()) => {
                    success.set(Some("Signup successful! Redirecting to login...".to_string()));
                    submitting.set(false);
                    sleep_ms(1500).await;
                    nav.push(Route::Login {});
                    return;
                }
                Err(SignupError::Invalid(message)) => {
                    error.set(Some(message.to_string()));
                }
                Err(SignupError::Backend(err)) => {
                    tracing::warn!("signup failed: {err}");
                    error.set(Some(
                        "Signup failed. Email or username might be taken.".to_string(),
                    ));
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
                    h1 { "Join Whisper" }
                    p { "Create your account to get started" }
                }

                form {
                    class: "auth-form",
                    onsubmit: handle_submit,

                    div {
                        class: "form-group",
                        label { r#for: "email", "Email Address" }
                        input {
                            id: "email",
                            r#type: "email",
                            placeholder: "Enter your email",
                            value: email(),
                            oninput: move |evt: FormEvent| {
                                email.set(evt.value());
                                error.set(None);
                            },
                        }
                    }

                    div {
                        class: "form-group",
                        label { r#for: "signup-username", "Username" }
                        input {
                            id: "signup-username",
                            r#type: "text",
                            placeholder: "Choose a username",
                            value: username(),
                            oninput: move |evt: FormEvent| {
                                username.set(evt.value());
                                error.set(None);
                            },
                        }
                    }

                    div {
                        class: "form-group",
                        label {
                            r#for: "alias",
                            "Display Name (Alias)"
                            span { class: "optional-text", " - Optional" }
                        }
                        input {
                            id: "alias",
                            r#type: "text",
                            placeholder: "How others will see you",
                            value: alias(),
                            oninput: move |evt: FormEvent| alias.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-group",
                        label { r#for: "signup-password", "Password" }
                        div {
                            class: "password-wrapper",
                            input {
                                id: "signup-password",
                                r#type: if show_password() { "text" } else { "password" },
                                placeholder: "Create a strong password",
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
                    if let Some(msg) = success() {
                        div { class: "success-box", "{msg}" }
                    }

                    button {
                        r#type: "submit",
                        class: "btn-primary wide",
                        disabled: submitting(),
                        if submitting() { "Creating Account..." } else { "Create Account" }
                    }
                }

                div {
                    class: "auth-footer",
                    p {
                        "Already have an account? "
                        a { href: "/login", "Sign in" }
                    }
                }
            }
        }
    }
}
