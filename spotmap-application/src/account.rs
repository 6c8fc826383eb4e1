use super::*;

/// Creates the user account and issues an email verification token.
///
/// The token is handed to the notification gateway and additionally
/// returned to the caller.
pub fn register_with_email(
    connections: &sqlite::Connections,
    token_cache: &dyn TokenCache,
    notify: &dyn NotificationGateway,
    credentials: &usecases::Credentials,
) -> Result<(User, String)> {
    let user = connections
        .exclusive()?
        .transaction(|conn| usecases::register_with_email(conn, credentials))?;
    let token = usecases::issue_verification_token(token_cache, &user.id);
    info!("Registered new user {}", user.email.as_str());
    notify.user_registered(&user, &token);
    Ok((user, token))
}

pub fn login_with_email(
    connections: &sqlite::Connections,
    credentials: &usecases::Credentials,
) -> Result<User> {
    Ok(usecases::login_with_email(
        &connections.shared()?,
        credentials,
    )?)
}

pub fn confirm_email_address(
    connections: &sqlite::Connections,
    token_cache: &dyn TokenCache,
    token: &str,
) -> Result<User> {
    let user = connections
        .exclusive()?
        .transaction(|conn| usecases::confirm_email_address(conn, token_cache, token))?;
    info!("Confirmed email address {}", user.email.as_str());
    Ok(user)
}

/// Issues a password reset token for the given email address.
///
/// Returns `None` for unknown addresses instead of an error so that
/// the endpoint does not leak which addresses are registered.
pub fn request_password_reset(
    connections: &sqlite::Connections,
    token_cache: &dyn TokenCache,
    notify: &dyn NotificationGateway,
    email: &EmailAddress,
) -> Result<Option<String>> {
    let Some(user) = connections.shared()?.try_get_user_by_email(email)? else {
        info!(
            "Ignoring password reset request for unknown email address {}",
            email.as_str()
        );
        return Ok(None);
    };
    let token = usecases::issue_reset_token(token_cache, &user.id);
    notify.user_reset_password_requested(&user.email, &token);
    Ok(Some(token))
}

pub fn reset_password_with_token(
    connections: &sqlite::Connections,
    token_cache: &dyn TokenCache,
    token: &str,
    new_password: &str,
) -> Result<User> {
    let user = connections.exclusive()?.transaction(|conn| {
        usecases::reset_password_with_token(conn, token_cache, token, new_password)
    })?;
    info!("Reset password of user {}", user.email.as_str());
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::prelude::*, *};

    #[test]
    fn register_confirm_and_login() {
        let fixture = BackendFixture::new();
        let email = "a@foo.bar".parse::<EmailAddress>().unwrap();
        let credentials = usecases::Credentials {
            email: &email,
            password: "secret password",
        };
        let (user, token) = register_with_email(
            &fixture.db_connections,
            &fixture.token_cache,
            &fixture.notify,
            &credentials,
        )
        .unwrap();
        assert!(!user.email_confirmed);

        // Login is rejected until the email address is confirmed.
        assert!(matches!(
            login_with_email(&fixture.db_connections, &credentials),
            Err(AppError::Business(BError::Parameter(
                usecases::Error::EmailNotConfirmed
            )))
        ));

        let confirmed =
            confirm_email_address(&fixture.db_connections, &fixture.token_cache, &token).unwrap();
        assert!(confirmed.email_confirmed);
        assert_eq!(confirmed.role, Role::User);
        assert!(login_with_email(&fixture.db_connections, &credentials).is_ok());
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let fixture = BackendFixture::new();
        let email = "a@foo.bar".parse::<EmailAddress>().unwrap();
        let credentials = usecases::Credentials {
            email: &email,
            password: "secret password",
        };
        register_with_email(
            &fixture.db_connections,
            &fixture.token_cache,
            &fixture.notify,
            &credentials,
        )
        .unwrap();
        assert!(matches!(
            register_with_email(
                &fixture.db_connections,
                &fixture.token_cache,
                &fixture.notify,
                &credentials,
            ),
            Err(AppError::Business(BError::Parameter(
                usecases::Error::UserExists
            )))
        ));
    }

    #[test]
    fn reset_password_round_trip() {
        let fixture = BackendFixture::new();
        let user = fixture.create_user("a@foo.bar", "old password", Role::User);
        let token = request_password_reset(
            &fixture.db_connections,
            &fixture.token_cache,
            &fixture.notify,
            &user.email,
        )
        .unwrap()
        .unwrap();
        reset_password_with_token(
            &fixture.db_connections,
            &fixture.token_cache,
            &token,
            "new password",
        )
        .unwrap();
        let credentials = usecases::Credentials {
            email: &user.email,
            password: "new password",
        };
        assert!(login_with_email(&fixture.db_connections, &credentials).is_ok());
    }

    #[test]
    fn password_reset_for_unknown_email_yields_no_token() {
        let fixture = BackendFixture::new();
        let email = "nobody@foo.bar".parse::<EmailAddress>().unwrap();
        let token = request_password_reset(
            &fixture.db_connections,
            &fixture.token_cache,
            &fixture.notify,
            &email,
        )
        .unwrap();
        assert!(token.is_none());
    }
}
