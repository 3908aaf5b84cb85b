use api::{PostEdit, WhisperApi};
use dioxus::prelude::*;

use crate::session::use_api;

/// Modal form for editing an existing post.
///
/// The target is resolved from a freshly fetched full list by id rather
/// than a single-entity endpoint; an id that no longer exists is reported
/// instead of attempted. A rejected save keeps the dialog open with an
/// inline error.
#[component]
pub fn EditPostDialog(
    message_id: i64,
    on_saved: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let client = use_api();
    let mut title = use_signal(String::new);
    let mut content = use_signal(String::new);
    let mut loading = use_signal(|| true);
    let mut load_error = use_signal(|| Option::<String>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let _loader = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                match client.all_posts().await {
                    Ok(posts) => match posts.into_iter().find(|p| p.message_id == message_id) {
                        Some(post) => {
                            title.set(post.title);
                            content.set(post.content);
                            load_error.set(None);
                        }
                        None => load_error.set(Some("Post not found.".to_string())),
                    },
                    Err(err) => {
                        tracing::warn!("fetch for edit failed: {err}");
                        load_error.set(Some("Failed to fetch post.".to_string()));
                    }
                }
                loading.set(false);
            }
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);
            submitting.set(true);
            let edit = PostEdit {
                message_id,
                title: title(),
                content: content(),
            };
            match client.edit_post(&edit).await {
                Ok(()) => on_saved.call(()),
                Err(err) => {
                    tracing::warn!("edit post failed: {err}");
                    error.set(Some("Failed to update post.".to_string()));
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
                h2 { class: "modal-title", "Edit Post" }
                button {
                    class: "modal-close",
                    onclick: move |_| on_cancel.call(()),
                    "\u{2715}"
                }
            }

            if loading() {
                p { class: "modal-text", "Loading post..." }
            } else if load_error().is_some() {
                p { class: "error-box", {load_error().unwrap_or_default()} }
            } else {
                form {
                    onsubmit: handle_submit,

                    div {
                        class: "form-group",
                        label { r#for: "edit-title", "Title" }
                        input {
                            id: "edit-title",
                            r#type: "text",
                            value: title(),
                            oninput: move |evt: FormEvent| title.set(evt.value()),
                        }
                    }

                    div {
                        class: "form-group",
                        label { r#for: "edit-content", "Content" }
                        textarea {
                            id: "edit-content",
                            rows: 6,
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
                            if submitting() { "Saving..." } else { "Save Changes" }
                        }
                    }
                }
            }
        }
    }
}
