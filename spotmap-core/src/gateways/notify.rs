use spotmap_entities::{email::EmailAddress, user::User};

/// Outbound notifications about account lifecycle events.
///
/// The tokens are also returned to the API caller, so an
/// implementation may deliver them out of band or merely log them.
pub trait NotificationGateway {
    fn user_registered(&self, user: &User, verification_token: &str);
    fn user_reset_password_requested(&self, email: &EmailAddress, reset_token: &str);
}
