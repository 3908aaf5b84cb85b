use api::models::{self, SortBy};
use api::{Post, WhisperApi};
use dioxus::prelude::*;
use ui::{use_api, use_session, ConfirmDialog, EditPostDialog, ModalOverlay, PostCard};

/// Public feed: every post, with upvote on each card and edit/delete on
/// the viewer's own posts. Mutations are fire-and-refetch; the list is
/// replaced wholesale after every successful call.
#[component]
pub fn Home() -> Element {
    let session = use_session();
    let client = use_api();
    let mut posts = use_signal(Vec::<Post>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut action_error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);
    let mut sort_by = use_signal(|| SortBy::Hot);
    let mut editing = use_signal(|| Option::<i64>::None);
    let mut deleting = use_signal(|| Option::<i64>::None);
    let mut refresh = use_signal(|| 0u32);

    // One fetch per mount and per manual retry; failures are terminal
    // until the user acts.
    let loader_client = client.clone();
    let _loader = use_resource(move || {
        let client = loader_client.clone();
        let _tick = refresh();
        async move {
            loading.set(true);
            match client.all_posts().await {
                Ok(list) => {
                    posts.set(list);
                    error.set(None);
                }
                Err(err) => {
                    tracing::warn!("post fetch failed: {err}");
                    posts.set(Vec::new());
                    error.set(Some("Failed to fetch posts.".to_string()));
                }
            }
            loading.set(false);
        }
    });

    let upvote_client = client.clone();
    let handle_upvote = move |id: i64| {
        let client = upvote_client.clone();
        spawn(async move {
            busy.set(true);
            match client.upvote(id).await {
                Ok(()) => {
                    action_error.set(None);
                    refresh.set(refresh() + 1);
                }
                Err(err) => {
                    tracing::warn!("upvote failed: {err}");
                    action_error.set(Some("Failed to upvote post.".to_string()));
                }
            }
            busy.set(false);
        });
    };

    let delete_client = client.clone();
    let handle_delete = move |id: i64| {
        let client = delete_client.clone();
        spawn(async move {
            deleting.set(None);
            busy.set(true);
            match client.delete_post(id).await {
                Ok(()) => {
                    action_error.set(None);
                    refresh.set(refresh() + 1);
                }
                Err(err) => {
                    tracing::warn!("delete failed: {err}");
                    action_error.set(Some("Failed to delete post.".to_string()));
                }
            }
            busy.set(false);
        });
    };

    let handle_edit = move |id: i64| editing.set(Some(id));
    let handle_request_delete = move |id: i64| deleting.set(Some(id));

    let viewer_id = session().user.map(|u| u.id);
    let visible_posts = {
        let mut list = posts();
        models::sort_posts(&mut list, sort_by());
        list
    };

    rsx! {
        div {
            class: "page home-page",

            main {
                class: "feed-main",

                if loading() {
                    div {
                        class: "loading-state",
                        p { "Loading posts..." }
                    }
                } else if error().is_some() {
                    div {
                        class: "error-state",
                        p { {error().unwrap_or_default()} }
                        button {
                            class: "retry-button",
                            onclick: move |_| refresh.set(refresh() + 1),
                            "Try Again"
                        }
                    }
                } else {
                    div {
                        class: "feed-header",
                        h2 { "All Posts" }
                        div {
                            class: "sort-buttons",
                            button {
                                class: if sort_by() == SortBy::Hot { "sort-active" } else { "" },
                                onclick: move |_| sort_by.set(SortBy::Hot),
                                "Hot"
                            }
                            button {
                                class: if sort_by() == SortBy::New { "sort-active" } else { "" },
                                onclick: move |_| sort_by.set(SortBy::New),
                                "New"
                            }
                            button {
                                class: if sort_by() == SortBy::Top { "sort-active" } else { "" },
                                onclick: move |_| sort_by.set(SortBy::Top),
                                "Top"
                            }
                        }
                    }

                    if let Some(err) = action_error() {
                        div {
                            class: "action-banner",
                            span { "{err}" }
                            button {
                                class: "banner-dismiss",
                                onclick: move |_| action_error.set(None),
                                "\u{2715}"
                            }
                        }
                    }

                    if visible_posts.is_empty() {
                        div {
                            class: "empty-state",
                            p { "No posts yet. Be the first to share something!" }
                        }
                    } else {
                        div {
                            class: "posts-container",
                            for post in visible_posts {
                                PostCard {
                                    key: "{post.message_id}",
                                    is_owner: viewer_id == Some(post.user_id),
                                    busy: busy(),
                                    on_upvote: handle_upvote.clone(),
                                    on_edit: handle_edit,
                                    on_delete: handle_request_delete,
                                    post: post,
                                }
                            }
                        }
                    }
                }
            }

            aside {
                class: "feed-sidebar",
                div {
                    class: "sidebar-card",
                    h3 { "About Community" }
                    p {
                        "Welcome to our community! Share your thoughts, engage \
                         with others, and discover interesting content."
                    }
                }
                div {
                    class: "sidebar-card",
                    h3 { "Community Rules" }
                    ul {
                        class: "rules-list",
                        li { "1. Be respectful to others" }
                        li { "2. No spam or self-promotion" }
                        li { "3. Stay on topic" }
                    }
                }
            }
        }

        if let Some(id) = editing() {
            ModalOverlay {
                on_close: move |_| editing.set(None),
                EditPostDialog {
                    message_id: id,
                    on_saved: move |_| {
                        editing.set(None);
                        refresh.set(refresh() + 1);
                    },
                    on_cancel: move |_| editing.set(None),
                }
            }
        }

        if let Some(id) = deleting() {
            ConfirmDialog {
                title: "Delete Post".to_string(),
                message: "Are you sure you want to delete this post?".to_string(),
                confirm_label: "Delete".to_string(),
                on_confirm: move |_| handle_delete(id),
                on_cancel: move |_| deleting.set(None),
            }
        }
    }
}
