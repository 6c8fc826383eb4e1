use std::{fmt, str::FromStr};

use thiserror::Error;

/// A syntactically checked e-mail address.
#[derive(Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Wrap a string without any validation.
    ///
    /// Only for restoring persisted values that have already
    /// been validated on their way into the system.
    pub fn new_unchecked(address: String) -> Self {
        Self(address)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

#[derive(Debug, Error)]
#[error("invalid e-mail address")]
pub struct EmailAddressParseError;

impl FromStr for EmailAddress {
    type Err = EmailAddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let addr_list =
            mailparse::addrparse(s.trim()).map_err(|_| EmailAddressParseError)?;
        match addr_list.first() {
            Some(mailparse::MailAddr::Single(single)) => {
                if single.addr.contains('@') {
                    Ok(Self(single.addr.clone()))
                } else {
                    Err(EmailAddressParseError)
                }
            }
            _ => Err(EmailAddressParseError),
        }
    }
}

impl From<EmailAddress> for String {
    fn from(from: EmailAddress) -> Self {
        from.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.as_str())
    }
}
