//! Scripted backend double shared by the session and validation tests.

use std::sync::atomic::{AtomicU32, Ordering};

use api::{ApiError, Credentials, Post, PostDraft, PostEdit, SignupForm, UserInfo, WhisperApi};

pub(crate) fn demo_user() -> UserInfo {
    UserInfo {
        id: 1,
        username: "demo_user".into(),
        alias: "DemoUser".into(),
        email: "demo@example.com".into(),
        join_date: None,
        messages: None,
        followers: None,
    }
}

fn denied() -> ApiError {
    ApiError::Status {
        status: 401,
        message: "unauthorized".into(),
    }
}

/// In-memory stand-in for the backend; each operation can be told to fail.
pub(crate) struct ScriptedApi {
    pub user: Option<UserInfo>,
    pub posts: Vec<Post>,
    pub fail_login: bool,
    pub fail_logout: bool,
    pub fail_signup: bool,
    signup_calls: AtomicU32,
    whoami_calls: AtomicU32,
}

impl ScriptedApi {
    pub fn logged_in(user: UserInfo) -> Self {
        Self {
            user: Some(user),
            posts: Vec::new(),
            fail_login: false,
            fail_logout: false,
            fail_signup: false,
            signup_calls: AtomicU32::new(0),
            whoami_calls: AtomicU32::new(0),
        }
    }

    pub fn logged_out() -> Self {
        Self {
            user: None,
            posts: Vec::new(),
            fail_login: false,
            fail_logout: false,
            fail_signup: false,
            signup_calls: AtomicU32::new(0),
            whoami_calls: AtomicU32::new(0),
        }
    }

    pub fn signup_calls(&self) -> u32 {
        self.signup_calls.load(Ordering::SeqCst)
    }

    pub fn whoami_calls(&self) -> u32 {
        self.whoami_calls.load(Ordering::SeqCst)
    }
}

impl WhisperApi for ScriptedApi {
    async fn signup(&self, _form: &SignupForm) -> Result<(), ApiError> {
        self.signup_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_signup {
            return Err(ApiError::Status {
                status: 409,
                message: "taken".into(),
            });
        }
        Ok(())
    }

    async fn login(&self, _credentials: &Credentials) -> Result<(), ApiError> {
        if self.fail_login {
            return Err(denied());
        }
        Ok(())
    }

    async fn logout(&self) -> Result<(), ApiError> {
        if self.fail_logout {
            return Err(ApiError::Status {
                status: 500,
                message: "backend down".into(),
            });
        }
        Ok(())
    }

    async fn current_user(&self) -> Result<UserInfo, ApiError> {
        self.whoami_calls.fetch_add(1, Ordering::SeqCst);
        self.user.clone().ok_or_else(denied)
    }

    async fn all_posts(&self) -> Result<Vec<Post>, ApiError> {
        Ok(self.posts.clone())
    }

    async fn my_posts(&self) -> Result<Vec<Post>, ApiError> {
        Ok(self.posts.clone())
    }

    async fn create_post(&self, _draft: &PostDraft) -> Result<(), ApiError> {
        Ok(())
    }

    async fn edit_post(&self, _edit: &PostEdit) -> Result<(), ApiError> {
        Ok(())
    }

    async fn delete_post(&self, _message_id: i64) -> Result<(), ApiError> {
        Ok(())
    }

    async fn upvote(&self, _message_id: i64) -> Result<(), ApiError> {
        Ok(())
    }
}
