//! Session store: the single source of truth for "who is logged in".
//!
//! The lifecycle (`initialize`, `login`, `logout`) is a set of pure async
//! transitions over an injected [`WhisperApi`] client, so it can be tested
//! without a browser or a network. [`SessionProvider`] owns the one signal
//! per running client and resolves the current user exactly once at
//! startup.

use api::{ApiClient, ApiError, Credentials, UserInfo, WhisperApi};
use dioxus::prelude::*;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub user: Option<UserInfo>,
    /// True until the startup whoami call settles. Consumers must treat
    /// this as a gate, not as "logged out".
    pub resolving: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            resolving: true,
        }
    }
}

impl SessionState {
    /// A settled state; `resolving` is false by construction.
    pub fn resolved(user: Option<UserInfo>) -> Self {
        Self {
            user,
            resolving: false,
        }
    }
}

/// Resolve the current user once.
///
/// Any failure — network down, 401, malformed body — is the normal
/// "logged out" signal, never an application error. The returned state is
/// always settled, so the route guard can never block indefinitely.
pub async fn initialize<C: WhisperApi>(client: &C) -> SessionState {
    match client.current_user().await {
        Ok(user) => SessionState::resolved(Some(user)),
        Err(err) => {
            tracing::debug!("session resolution failed, treating as logged out: {err}");
            SessionState::resolved(None)
        }
    }
}

/// Log in, then re-resolve the user through whoami.
///
/// A user object embedded in the login response is never trusted. On
/// failure the error propagates unchanged and no session state is
/// produced; the login page is responsible for the message.
pub async fn login<C: WhisperApi>(
    client: &C,
    credentials: &Credentials,
) -> Result<SessionState, ApiError> {
    client.login(credentials).await?;
    Ok(initialize(client).await)
}

/// Log out and clear the local session.
///
/// The cleared state is returned even when the backend call fails: once
/// the user asked to log out, the client must never stay "stuck"
/// authenticated.
pub async fn logout<C: WhisperApi>(client: &C) -> SessionState {
    if let Err(err) = client.logout().await {
        tracing::warn!("logout call failed, clearing session anyway: {err}");
    }
    SessionState::resolved(None)
}

/// Current session signal.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// The shared API client.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// Provides the API client and the session signal, and resolves the
/// current user exactly once at startup.
#[component]
pub fn SessionProvider(base_url: String, children: Element) -> Element {
    let client = use_context_provider(move || ApiClient::new(base_url));
    let mut session = use_context_provider(|| Signal::new(SessionState::default()));

    let _resolver = use_resource(move || {
        let client = client.clone();
        async move {
            session.set(initialize(&client).await);
        }
    });

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{demo_user, ScriptedApi};

    #[tokio::test]
    async fn initialize_populates_the_user() {
        let api = ScriptedApi::logged_in(demo_user());
        let state = initialize(&api).await;
        assert_eq!(state.user.map(|u| u.username), Some("demo_user".into()));
        assert!(!state.resolving);
    }

    #[tokio::test]
    async fn whoami_failure_is_logged_out_not_an_error() {
        let api = ScriptedApi::logged_out();
        let state = initialize(&api).await;
        assert!(state.user.is_none());
        assert!(!state.resolving);
    }

    #[tokio::test]
    async fn login_resolves_the_user_via_whoami() {
        let api = ScriptedApi::logged_in(demo_user());
        let credentials = Credentials {
            username: "demo_user".into(),
            password: "demo123".into(),
        };
        let state = login(&api, &credentials).await.unwrap();
        assert!(state.user.is_some());
        assert!(!state.resolving);
        // The user came from the whoami call, not the login response.
        assert_eq!(api.whoami_calls(), 1);
    }

    #[tokio::test]
    async fn login_failure_propagates_and_yields_no_state() {
        let mut api = ScriptedApi::logged_in(demo_user());
        api.fail_login = true;
        let credentials = Credentials {
            username: "demo_user".into(),
            password: "wrong".into(),
        };
        let err = login(&api, &credentials).await.unwrap_err();
        assert_eq!(err.status(), Some(401));
        // whoami was never consulted.
        assert_eq!(api.whoami_calls(), 0);
    }

    #[tokio::test]
    async fn logout_clears_the_user_even_when_the_backend_fails() {
        let mut api = ScriptedApi::logged_in(demo_user());
        api.fail_logout = true;
        let state = logout(&api).await;
        assert!(state.user.is_none());
        assert!(!state.resolving);
    }
}
