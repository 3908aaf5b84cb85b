//! Route guard: gates access to protected views.
//!
//! The decision is a pure function over the session snapshot and is
//! re-evaluated on every render — nothing is cached, so a logout while a
//! protected page is open transitions it straight to redirect.

use dioxus::prelude::*;

use crate::session::{use_session, SessionState};

/// Outcome of the guard for a session snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// The startup whoami call has not settled; no redirect decision yet.
    Pending,
    /// A user is present; render the protected content.
    Authorized,
    /// Nobody is logged in; send the visitor to the login page.
    Redirect,
}

pub fn decide(session: &SessionState) -> RouteDecision {
    if session.resolving {
        RouteDecision::Pending
    } else if session.user.is_some() {
        RouteDecision::Authorized
    } else {
        RouteDecision::Redirect
    }
}

/// Renders its children only for an authenticated session.
#[component]
pub fn RequireAuth(children: Element) -> Element {
    let session = use_session();

    match decide(&session()) {
        RouteDecision::Pending => rsx! {
            div { class: "guard-pending", "Loading..." }
        },
        RouteDecision::Authorized => rsx! {
            {children}
        },
        RouteDecision::Redirect => {
            #[cfg(target_arch = "wasm32")]
            {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/login");
                }
            }
            rsx! {
                div { class: "guard-pending", "Redirecting to login..." }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::demo_user;

    #[test]
    fn pending_while_resolving_regardless_of_user() {
        let state = SessionState {
            user: None,
            resolving: true,
        };
        assert_eq!(decide(&state), RouteDecision::Pending);

        let state = SessionState {
            user: Some(demo_user()),
            resolving: true,
        };
        assert_eq!(decide(&state), RouteDecision::Pending);
    }

    #[test]
    fn settled_states_split_on_user_presence() {
        assert_eq!(
            decide(&SessionState::resolved(Some(demo_user()))),
            RouteDecision::Authorized
        );
        assert_eq!(
            decide(&SessionState::resolved(None)),
            RouteDecision::Redirect
        );
    }

    #[test]
    fn logout_flips_an_open_page_to_redirect() {
        let mut state = SessionState::resolved(Some(demo_user()));
        assert_eq!(decide(&state), RouteDecision::Authorized);
        state.user = None;
        assert_eq!(decide(&state), RouteDecision::Redirect);
    }
}
