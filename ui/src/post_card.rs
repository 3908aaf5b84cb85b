use api::Post;
use dioxus::prelude::*;

use crate::icons::{FaArrowUp, FaPen, FaTrash};
use crate::Icon;

/// One post in a feed. Edit and delete only render for the author; all
/// actions are disabled while the page has a mutation in flight.
#[component]
pub fn PostCard(
    post: Post,
    is_owner: bool,
    busy: bool,
    on_upvote: EventHandler<i64>,
    on_edit: EventHandler<i64>,
    on_delete: EventHandler<i64>,
) -> Element {
    let id = post.message_id;
    let posted = crate::format::time_ago_now(post.created_at);

    rsx! {
        article {
            class: "post-card",

            div {
                class: "vote-section",
                button {
                    class: "vote-btn",
                    title: "Upvote",
                    disabled: busy,
                    onclick: move |_| on_upvote.call(id),
                    Icon { icon: FaArrowUp, width: 14, height: 14 }
                }
                span { class: "vote-count", "{post.upvotes}" }
            }

            div {
                class: "post-body",
                div {
                    class: "post-meta",
                    span { class: "post-author", "{post.alias}" }
                    span { class: "post-time", "{posted}" }
                    if post.edited {
                        span { class: "post-edited", "edited" }
                    }
                }

                h3 { class: "post-title", "{post.title}" }
                p { class: "post-text", "{post.content}" }

                if is_owner {
                    div {
                        class: "post-actions",
                        button {
                            class: "action-btn",
                            disabled: busy,
                            onclick: move |_| on_edit.call(id),
                            Icon { icon: FaPen, width: 12, height: 12 }
                            span { "Edit" }
                        }
                        button {
                            class: "action-btn action-danger",
                            disabled: busy,
                            onclick: move |_| on_delete.call(id),
                            Icon { icon: FaTrash, width: 12, height: 12 }
                            span { "Delete" }
                        }
                    }
                }
            }
        }
    }
}
