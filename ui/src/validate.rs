//! Client-side signup validation. The first violated rule short-circuits
//! submission and its message is shown verbatim; nothing reaches the
//! backend until the form passes.

use api::{ApiError, SignupForm, WhisperApi};

/// Why a signup attempt did not complete.
#[derive(Debug)]
pub enum SignupError {
    /// A validation rule failed; no network call was made.
    Invalid(&'static str),
    /// The backend rejected the account.
    Backend(ApiError),
}

pub fn validate_signup(form: &SignupForm) -> Result<(), &'static str> {
    if !is_email(&form.email) {
        return Err("Please enter a valid email address");
    }
    if form.username.len() < 3 {
        return Err("Username must be at least 3 characters long");
    }
    if !form
        .username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err("Username can only contain letters, numbers, and underscores");
    }
    if form.password.len() < 6 {
        return Err("Password must be at least 6 characters long");
    }
    Ok(())
}

/// Validate, then sign up. Validation failures short-circuit before any
/// network call; backend failures pass through for the page to report.
pub async fn submit_signup<C: WhisperApi>(
    client: &C,
    form: &SignupForm,
) -> Result<(), SignupError> {
    validate_signup(form).map_err(SignupError::Invalid)?;
    client.signup(form).await.map_err(SignupError::Backend)
}

/// Loose address shape: local@domain with a dot somewhere in the domain,
/// no whitespace.
fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    let mut segments = domain.split('.');
    segments.clone().count() >= 2 && segments.all(|seg| !seg.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedApi;

    fn form(email: &str, username: &str, password: &str) -> SignupForm {
        SignupForm {
            email: email.into(),
            username: username.into(),
            alias: String::new(),
            password: password.into(),
        }
    }

    #[test]
    fn first_violated_rule_wins() {
        // Everything is wrong; the email message is the one reported.
        let err = validate_signup(&form("bad", "ab", "12345")).unwrap_err();
        assert_eq!(err, "Please enter a valid email address");

        let err = validate_signup(&form("a@b.com", "ab", "12345")).unwrap_err();
        assert_eq!(err, "Username must be at least 3 characters long");

        let err = validate_signup(&form("a@b.com", "bad name", "12345")).unwrap_err();
        assert_eq!(
            err,
            "Username can only contain letters, numbers, and underscores"
        );

        let err = validate_signup(&form("a@b.com", "user_1", "12345")).unwrap_err();
        assert_eq!(err, "Password must be at least 6 characters long");
    }

    #[test]
    fn well_formed_input_passes() {
        assert!(validate_signup(&form("a@b.com", "user_1", "123456")).is_ok());
    }

    #[test]
    fn email_shape_rejects_the_obvious() {
        assert!(!is_email("bad"));
        assert!(!is_email("a@b"));
        assert!(!is_email("@b.com"));
        assert!(!is_email("a@"));
        assert!(!is_email("a b@c.com"));
        assert!(!is_email("a@b@c.com"));
        assert!(!is_email("a@b..com"));
        assert!(is_email("a@b.com"));
        assert!(is_email("first.last@sub.domain.org"));
    }

    #[tokio::test]
    async fn invalid_form_never_reaches_the_backend() {
        let api = ScriptedApi::logged_out();
        let err = submit_signup(&api, &form("bad", "ab", "12345"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            SignupError::Invalid("Please enter a valid email address")
        ));
        assert_eq!(api.signup_calls(), 0);
    }

    #[tokio::test]
    async fn valid_form_issues_exactly_one_signup_call() {
        let api = ScriptedApi::logged_out();
        submit_signup(&api, &form("a@b.com", "user_1", "123456"))
            .await
            .unwrap();
        assert_eq!(api.signup_calls(), 1);
    }

    #[tokio::test]
    async fn backend_rejection_passes_through() {
        let mut api = ScriptedApi::logged_out();
        api.fail_signup = true;
        let err = submit_signup(&api, &form("a@b.com", "user_1", "123456"))
            .await
            .unwrap_err();
        assert!(matches!(err, SignupError::Backend(_)));
        assert_eq!(api.signup_calls(), 1);
    }
}
