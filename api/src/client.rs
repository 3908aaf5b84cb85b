use reqwest::{Client, Method, RequestBuilder, Response};

use crate::error::ApiError;
use crate::models::{Credentials, Post, PostDraft, PostEdit, SignupForm, UserInfo};

/// The REST surface of the Whisper backend.
///
/// Session and page logic is written against this trait so it can run
/// against a scripted double in tests; [`ApiClient`] is the one real
/// implementation.
pub trait WhisperApi {
    async fn signup(&self, form: &SignupForm) -> Result<(), ApiError>;
    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError>;
    async fn logout(&self) -> Result<(), ApiError>;
    /// Resolve the user behind the current session cookie.
    async fn current_user(&self) -> Result<UserInfo, ApiError>;
    async fn all_posts(&self) -> Result<Vec<Post>, ApiError>;
    /// Posts authored by the current user.
    async fn my_posts(&self) -> Result<Vec<Post>, ApiError>;
    async fn create_post(&self, draft: &PostDraft) -> Result<(), ApiError>;
    async fn edit_post(&self, edit: &PostEdit) -> Result<(), ApiError>;
    async fn delete_post(&self, message_id: i64) -> Result<(), ApiError>;
    async fn upvote(&self, message_id: i64) -> Result<(), ApiError>;
}

/// HTTP client bound to a backend base URL.
///
/// The session credential is a cookie: browser builds opt every request
/// into `fetch` credentials, native builds keep a cookie jar. There is no
/// timeout and no retry; callers wait for the call to settle.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        #[cfg(target_arch = "wasm32")]
        let http = Client::new();
        #[cfg(not(target_arch = "wasm32"))]
        let http = Client::builder()
            .cookie_store(true)
            .build()
            .expect("failed to build HTTP client");

        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let req = self.http.request(method, self.url(path));
        // Cross-origin fetches only carry the session cookie when
        // credentials are explicitly included.
        #[cfg(target_arch = "wasm32")]
        let req = req.fetch_credentials_include();
        req
    }

    async fn send(&self, req: RequestBuilder) -> Result<Response, ApiError> {
        let resp = req.send().await?;
        let status = resp.status();
        if status.is_success() {
            Ok(resp)
        } else {
            let message = resp.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), "backend rejected request");
            Err(ApiError::Status {
                status: status.as_u16(),
                message,
            })
        }
    }
}

impl WhisperApi for ApiClient {
    async fn signup(&self, form: &SignupForm) -> Result<(), ApiError> {
        self.send(self.request(Method::POST, "/signup").json(form))
            .await?;
        Ok(())
    }

    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        self.send(self.request(Method::POST, "/login").json(credentials))
            .await?;
        Ok(())
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.send(self.request(Method::POST, "/logout")).await?;
        Ok(())
    }

    async fn current_user(&self) -> Result<UserInfo, ApiError> {
        Ok(self
            .send(self.request(Method::GET, "/getuser"))
            .await?
            .json()
            .await?)
    }

    async fn all_posts(&self) -> Result<Vec<Post>, ApiError> {
        Ok(self
            .send(self.request(Method::GET, "/"))
            .await?
            .json()
            .await?)
    }

    async fn my_posts(&self) -> Result<Vec<Post>, ApiError> {
        Ok(self
            .send(self.request(Method::GET, "/myMessages"))
            .await?
            .json()
            .await?)
    }

    async fn create_post(&self, draft: &PostDraft) -> Result<(), ApiError> {
        self.send(self.request(Method::POST, "/createPost").json(draft))
            .await?;
        Ok(())
    }

    async fn edit_post(&self, edit: &PostEdit) -> Result<(), ApiError> {
        self.send(self.request(Method::PUT, "/editPost").json(edit))
            .await?;
        Ok(())
    }

    async fn delete_post(&self, message_id: i64) -> Result<(), ApiError> {
        let path = format!("/deleteMessage?messageId={message_id}");
        self.send(self.request(Method::DELETE, &path)).await?;
        Ok(())
    }

    async fn upvote(&self, message_id: i64) -> Result<(), ApiError> {
        let path = format!("/upvote?messageId={message_id}");
        self.send(self.request(Method::POST, &path)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_path() {
        let client = ApiClient::new("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.url("/getuser"), "http://localhost:8080/getuser");
        assert_eq!(
            client.url("/deleteMessage?messageId=7"),
            "http://localhost:8080/deleteMessage?messageId=7"
        );
    }
}
