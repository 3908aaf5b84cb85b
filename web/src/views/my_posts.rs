use api::{models, Post, WhisperApi};
use dioxus::prelude::*;
use ui::{
    use_api, ConfirmDialog, CreatePostDialog, EditPostDialog, ModalOverlay, PostCard, RequireAuth,
};

/// The viewer's own posts, with stats and create/edit/delete management.
#[component]
pub fn MyPosts() -> Element {
    rsx! {
        RequireAuth {
            MyPostsInner {}
        }
    }
}

#[component]
fn MyPostsInner() -> Element {
    let client = use_api();
    let mut posts = use_signal(Vec::<Post>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut action_error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);
    let mut show_create = use_signal(|| false);
    let mut editing = use_signal(|| Option::<i64>::None);
    let mut deleting = use_signal(|| Option::<i64>::None);
    let mut refresh = use_signal(|| 0u32);

    let loader_client = client.clone();
    let _loader = use_resource(move || {
        let client = loader_client.clone();
        let _tick = refresh();
        async move {
            loading.set(true);
            match client.my_posts().await {
                Ok(list) => {
                    posts.set(list);
                    error.set(None);
                }
                Err(err) => {
                    tracing::warn!("own-post fetch failed: {err}");
                    posts.set(Vec::new());
                    error.set(Some("Failed to fetch your posts.".to_string()));
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

    // Stats are recomputed over the current snapshot on every render.
    let list = posts();
    let post_count = list.len();
    let upvote_total = models::total_upvotes(&list);
    let edited_total = models::edited_count(&list);

    rsx! {
        div {
            class: "page my-posts-page",

            main {
                class: "feed-main",

                if loading() {
                    div {
                        class: "loading-state",
                        p { "Loading your posts..." }
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
                        div {
                            h2 { "My Posts" }
                            p { class: "feed-subtitle", "Manage and edit your published posts" }
                        }
                        div {
                            class: "post-count",
                            span { class: "count-number", "{post_count}" }
                            span { class: "count-label", "Total Posts" }
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

                    if list.is_empty() {
                        div {
                            class: "empty-state",
                            h3 { "No posts yet" }
                            p {
                                "You haven't created any posts yet. Share your \
                                 thoughts with the community!"
                            }
                            button {
                                class: "btn-primary",
                                onclick: move |_| show_create.set(true),
                                "Create Your First Post"
                            }
                        }
                    } else {
                        div {
                            class: "posts-container",
                            for post in list.clone() {
                                PostCard {
                                    key: "{post.message_id}",
                                    is_owner: true,
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
                    h3 { "Quick Stats" }
                    div {
                        class: "stat-row",
                        span { "Total Posts" }
                        span { class: "stat-value", "{post_count}" }
                    }
                    div {
                        class: "stat-row",
                        span { "Total Upvotes" }
                        span { class: "stat-value", "{upvote_total}" }
                    }
                    div {
                        class: "stat-row",
                        span { "Edited Posts" }
                        span { class: "stat-value", "{edited_total}" }
                    }
                }
                div {
                    class: "sidebar-card",
                    h3 { "Quick Actions" }
                    button {
                        class: "btn-primary wide",
                        onclick: move |_| show_create.set(true),
                        "Create New Post"
                    }
                    a {
                        class: "btn-secondary wide",
                        href: "/",
                        "View All Posts"
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
                        refresh.set(refresh() + 1);
                    },
                    on_cancel: move |_| show_create.set(false),
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
