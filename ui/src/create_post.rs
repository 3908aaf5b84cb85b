use api::{PostDraft, WhisperApi};
use dioxus::prelude::*;

use crate::session::{use_api, use_session};

/// Modal form for a new post.
///
/// A rejected call keeps the dialog open with an inline error; the parent
/// decides what a successful creation means (close + refetch, or navigate
/// to the feed).
#[component]
pub fn CreatePostDialog(on_created: EventHandler<()>, on_cancel: EventHandler<()>) -> Element {
    let session = use_session();
    let client = use_api();
    let mut title = use_signal(String::new);
    let mut content = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let posting_as = session()
        .user
        .map(|u| u.display_alias().to_string())
        .unwrap_or_else(|| "Anonymous".to_string());

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);
            submitting.set(true);
            let draft = PostDraft {
                title: title().trim().to_string(),
                content: content(),
            };
            match client.create_post(&draft).await {
                Ok(()) => on_created.call(()),
                Err(err) => {
                    tracing::warn!("create post failed: {err}");
                    error.set(Some("Failed to create post. Please try again.".to_string()));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "modal-body",
            div {
                class: "modal-header",
                div {
                    p {
                        class: "modal-subtitle",
                        "Posting as "
                        span { class: "modal-author", "{posting_as}" }
                    }
                    h2 { class: "modal-title", "Create New Post" }
                }
                button {
                    class: "modal-close",
                    onclick: move |_| on_cancel.call(()),
                    "\u{2715}"
                }
            }

            form {
                onsubmit: handle_submit,

                div {
                    class: "form-group",
                    label { r#for: "post-title", "Title" }
                    input {
                        id: "post-title",
                        r#type: "text",
                        placeholder: "An interesting title...",
                        value: title(),
                        oninput: move |evt: FormEvent| title.set(evt.value()),
                    }
                }

                div {
                    class: "form-group",
                    label { r#for: "post-content", "Content" }
                    textarea {
                        id: "post-content",
                        rows: 6,
                        placeholder: "What are your thoughts?",
                        value: content(),
                        oninput: move |evt: FormEvent| content.set(evt.value()),
                    }
                }

                if let Some(err) = error() {
                    div { class: "error-box", "{err}" }
                }

                div {
                    class: "modal-actions",
                    button {
                        r#type: "button",
                        class: "btn-secondary",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "btn-primary",
                        disabled: submitting(),
                        if submitting() { "Creating..." } else { "Create Post" }
                    }
                }
            }
        }
    }
}
