//! # Wire models
//!
//! Records exchanged with the Whisper backend. The backend owns the
//! canonical representation; the client only ever holds a transient
//! in-memory copy, replaced wholesale after every fetch. Field names on
//! the wire are camelCase.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The authenticated user, as returned by `GET /getuser`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub alias: String,
    pub email: String,
    /// Profile enrichments; older backends omit them.
    #[serde(default)]
    pub join_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub messages: Option<u32>,
    #[serde(default)]
    pub followers: Option<u32>,
}

impl UserInfo {
    /// Name shown next to the avatar, falling back to the login handle
    /// when no alias was chosen at signup.
    pub fn display_alias(&self) -> &str {
        if self.alias.is_empty() {
            &self.username
        } else {
            &self.alias
        }
    }

    /// Letter for the avatar badge; `'U'` when there is nothing to
    /// derive it from, so the badge never renders empty.
    pub fn avatar_initial(&self) -> char {
        self.alias
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('U')
    }
}

/// A single forum post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub message_id: i64,
    pub title: String,
    pub content: String,
    pub user_id: i64,
    #[serde(default)]
    pub alias: String,
    #[serde(default)]
    pub upvotes: u32,
    #[serde(default)]
    pub edited: bool,
    pub created_at: DateTime<Utc>,
}

/// Login form body. Exists only for the duration of the submitting form.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Signup form body. `alias` may be empty; the backend treats it as
/// optional.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SignupForm {
    pub email: String,
    pub username: String,
    pub alias: String,
    pub password: String,
}

/// Body for `POST /createPost`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
}

/// Body for `PUT /editPost`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PostEdit {
    pub message_id: i64,
    pub title: String,
    pub content: String,
}

/// Feed ordering for the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    /// Backend order, untouched.
    #[default]
    Hot,
    /// Newest first.
    New,
    /// Most upvoted first.
    Top,
}

/// Reorder a list snapshot in place. Pure over the snapshot; the backend
/// order is never lost because every fetch replaces the list anyway.
pub fn sort_posts(posts: &mut [Post], sort: SortBy) {
    match sort {
        SortBy::Hot => {}
        SortBy::New => posts.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortBy::Top => posts.sort_by(|a, b| b.upvotes.cmp(&a.upvotes)),
    }
}

/// Sum of upvotes across a list snapshot.
pub fn total_upvotes(posts: &[Post]) -> u32 {
    posts.iter().map(|p| p.upvotes).sum()
}

/// Number of posts carrying the edited flag.
pub fn edited_count(posts: &[Post]) -> usize {
    posts.iter().filter(|p| p.edited).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn post(id: i64, upvotes: u32, edited: bool, hour: u32) -> Post {
        Post {
            message_id: id,
            title: format!("post {id}"),
            content: "body".into(),
            user_id: 1,
            alias: "Writer".into(),
            upvotes,
            edited,
            created_at: Utc.with_ymd_and_hms(2025, 5, 1, hour, 0, 0).unwrap(),
        }
    }

    #[test]
    fn post_decodes_camel_case_wire_json() {
        let json = r#"{
            "messageId": 42,
            "title": "hello",
            "content": "first",
            "userId": 7,
            "alias": "Echo",
            "upvotes": 3,
            "edited": true,
            "createdAt": "2025-05-01T10:00:00Z"
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.message_id, 42);
        assert_eq!(post.user_id, 7);
        assert_eq!(post.upvotes, 3);
        assert!(post.edited);
    }

    #[test]
    fn post_defaults_missing_counters() {
        let json = r#"{
            "messageId": 1,
            "title": "t",
            "content": "c",
            "userId": 2,
            "alias": "A",
            "createdAt": "2025-05-01T10:00:00Z"
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.upvotes, 0);
        assert!(!post.edited);
    }

    #[test]
    fn edit_body_serializes_message_id_camel_case() {
        let edit = PostEdit {
            message_id: 9,
            title: "t".into(),
            content: "c".into(),
        };
        let json = serde_json::to_string(&edit).unwrap();
        assert!(json.contains("\"messageId\":9"), "{json}");
    }

    #[test]
    fn avatar_initial_uppercases_and_falls_back() {
        let mut user = UserInfo {
            id: 1,
            username: "demo_user".into(),
            alias: "demo".into(),
            email: "demo@example.com".into(),
            join_date: None,
            messages: None,
            followers: None,
        };
        assert_eq!(user.avatar_initial(), 'D');
        user.alias.clear();
        assert_eq!(user.avatar_initial(), 'U');
        assert_eq!(user.display_alias(), "demo_user");
    }

    #[test]
    fn sorting_is_pure_per_mode() {
        let snapshot = vec![post(1, 5, false, 8), post(2, 9, true, 10), post(3, 1, false, 9)];

        let mut by_new = snapshot.clone();
        sort_posts(&mut by_new, SortBy::New);
        let ids: Vec<i64> = by_new.iter().map(|p| p.message_id).collect();
        assert_eq!(ids, vec![2, 3, 1]);

        let mut by_top = snapshot.clone();
        sort_posts(&mut by_top, SortBy::Top);
        let ids: Vec<i64> = by_top.iter().map(|p| p.message_id).collect();
        assert_eq!(ids, vec![2, 1, 3]);

        let mut hot = snapshot.clone();
        sort_posts(&mut hot, SortBy::Hot);
        assert_eq!(hot, snapshot);
    }

    #[test]
    fn list_stats_reflect_the_snapshot() {
        let posts = vec![post(1, 5, false, 8), post(2, 9, true, 10), post(3, 0, true, 9)];
        assert_eq!(total_upvotes(&posts), 14);
        assert_eq!(edited_count(&posts), 2);
        assert_eq!(total_upvotes(&[]), 0);
    }
}
