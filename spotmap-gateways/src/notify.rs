use spotmap_core::gateways::notify::NotificationGateway;
use spotmap_entities::{email::EmailAddress, user::User};

/// Writes notifications to the log instead of delivering them.
///
/// Tokens are also returned by the API, so this is sufficient for
/// deployments without an outbound mail channel.
#[derive(Debug, Default)]
pub struct LogNotifyGateway;

impl NotificationGateway for LogNotifyGateway {
    fn user_registered(&self, user: &User, verification_token: &str) {
        log::info!(
            "New user registered: {} (verification token: {verification_token})",
            user.email.as_str()
        );
    }

    fn user_reset_password_requested(&self, email: &EmailAddress, reset_token: &str) {
        log::info!(
            "Password reset requested for {} (reset token: {reset_token})",
            email.as_str()
        );
    }
}
