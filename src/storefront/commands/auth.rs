use crate::auth::Authenticator;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::User;
use crate::session::{Session, DEFAULT_DISPLAY_NAME};

/// Signs in with the mock account. A rejected attempt leaves the session
/// untouched and is reported as an error message, not an `Err`.
pub async fn login<A: Authenticator + ?Sized>(
    auth: &A,
    session: &mut Session,
    identifier: &str,
    password: &str,
) -> Result<CmdResult> {
    let outcome = auth.login(identifier, password).await;
    tracing::info!(identifier, success = outcome.success, "login attempt");

    let mut result = CmdResult::default();
    if outcome.success {
        session.sign_in(User {
            name: DEFAULT_DISPLAY_NAME.to_string(),
            email: identifier.to_string(),
        });
        result.add_message(CmdMessage::success(outcome.message));
    } else {
        result.add_message(CmdMessage::error(outcome.message));
    }
    Ok(result.with_user(session.user().cloned()))
}

/// Registers and signs in. The identifier doubles as display name.
pub async fn register<A: Authenticator + ?Sized>(
    auth: &A,
    session: &mut Session,
    identifier: &str,
    password: &str,
) -> Result<CmdResult> {
    let outcome = auth.register(identifier, password).await;
    tracing::info!(identifier, success = outcome.success, "register attempt");

    let mut result = CmdResult::default();
    if outcome.success {
        let trimmed = identifier.trim();
        let name = if trimmed.is_empty() { identifier } else { trimmed };
        session.sign_in(User {
            name: name.to_string(),
            email: name.to_string(),
        });
        result.add_message(CmdMessage::success(outcome.message));
    } else {
        result.add_message(CmdMessage::error(outcome.message));
    }
    Ok(result.with_user(session.user().cloned()))
}

pub fn logout(session: &mut Session) -> CmdResult {
    let mut result = CmdResult::default();
    match session.user() {
        Some(user) => {
            tracing::info!(email = %user.email, "logout");
            result.add_message(CmdMessage::success(format!("Signed out {}.", user.name)));
            session.sign_out();
        }
        None => result.add_message(CmdMessage::info("Nobody is signed in.")),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{MockAuthenticator, DEMO_EMAIL, DEMO_PASSWORD};
    use crate::commands::MessageLevel;

    #[tokio::test]
    async fn login_signs_in_with_default_name() {
        let auth = MockAuthenticator::new();
        let mut session = Session::new();
        session.open_auth_modal();

        let res = login(&auth, &mut session, DEMO_EMAIL, DEMO_PASSWORD)
            .await
            .unwrap();
        assert_eq!(res.messages[0].level, MessageLevel::Success);
        assert_eq!(res.messages[0].content, "Login successful!");

        let user = session.user().unwrap();
        assert_eq!(user.name, DEFAULT_DISPLAY_NAME);
        assert_eq!(user.email, DEMO_EMAIL);
        assert!(!session.auth_modal_open());
        assert_eq!(res.user.as_ref(), Some(user));
    }

    #[tokio::test]
    async fn failed_login_keeps_session() {
        let auth = MockAuthenticator::new();
        let mut session = Session::new();
        session.open_auth_modal();

        let res = login(&auth, &mut session, DEMO_EMAIL, "nope").await.unwrap();
        assert_eq!(res.messages[0].level, MessageLevel::Error);
        assert!(!session.is_signed_in());
        assert!(session.auth_modal_open());
        assert!(res.user.is_none());
    }

    #[tokio::test]
    async fn register_uses_identifier_as_name() {
        let auth = MockAuthenticator::new();
        let mut session = Session::new();

        let res = register(&auth, &mut session, " Lan ", "abcdef").await.unwrap();
        assert_eq!(res.messages[0].content, "Register successful!");
        assert_eq!(session.user().map(|u| u.name.as_str()), Some("Lan"));

        let mut other = Session::new();
        let res = register(&auth, &mut other, "Lan", "abc").await.unwrap();
        assert_eq!(res.messages[0].content, "Password must be at least 6 characters");
        assert!(!other.is_signed_in());
    }

    #[tokio::test]
    async fn blank_identifier_still_registers() {
        let auth = MockAuthenticator::new();
        let mut session = Session::new();

        let res = register(&auth, &mut session, "  ", "abcdefgh").await.unwrap();
        assert_eq!(res.messages[0].level, MessageLevel::Success);
        assert_eq!(session.user().map(|u| u.name.as_str()), Some("  "));
    }

    #[tokio::test]
    async fn logout_clears_user() {
        let auth = MockAuthenticator::new();
        let mut session = Session::new();
        login(&auth, &mut session, DEMO_EMAIL, DEMO_PASSWORD)
            .await
            .unwrap();

        let res = logout(&mut session);
        assert_eq!(res.messages[0].level, MessageLevel::Success);
        assert!(!session.is_signed_in());

        let res = logout(&mut session);
        assert_eq!(res.messages[0].level, MessageLevel::Info);
    }
}
