use std::result::Result as StdResult;

use thiserror::Error;

use spotmap_entities::{
    id::Id,
    user::{Role, User},
};

#[derive(Debug, Error)]
pub enum Error {
    #[error("unauthorized role")]
    UnauthorizedRole,
    #[error("not the owner")]
    NotTheOwner,
}

pub type Result<T> = StdResult<T, Error>;

pub fn authorize_role(user: &User, min_required_role: Role) -> Result<()> {
    if user.role < min_required_role {
        return Err(Error::UnauthorizedRole);
    }
    Ok(())
}

/// Owners may modify their own resources, admins may modify any.
pub fn authorize_owner(user: &User, owner_id: &Id) -> Result<()> {
    if &user.id == owner_id {
        return Ok(());
    }
    if user.role >= Role::Admin {
        return Ok(());
    }
    Err(Error::NotTheOwner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use spotmap_entities::{email::EmailAddress, password::Password};

    fn user_with_role(role: Role) -> User {
        User {
            id: Id::new(),
            email: EmailAddress::new_unchecked("a@b.io".to_string()),
            email_confirmed: true,
            password: Password::from("secret".to_string()),
            role,
        }
    }

    #[test]
    fn role_hierarchy() {
        assert!(authorize_role(&user_with_role(Role::Guest), Role::Guest).is_ok());
        assert!(authorize_role(&user_with_role(Role::Guest), Role::User).is_err());
        assert!(authorize_role(&user_with_role(Role::User), Role::User).is_ok());
        assert!(authorize_role(&user_with_role(Role::User), Role::Admin).is_err());
        assert!(authorize_role(&user_with_role(Role::Admin), Role::User).is_ok());
    }

    #[test]
    fn owner_check() {
        let user = user_with_role(Role::User);
        assert!(authorize_owner(&user, &user.id).is_ok());
        assert!(authorize_owner(&user, &Id::new()).is_err());
        let admin = user_with_role(Role::Admin);
        assert!(authorize_owner(&admin, &Id::new()).is_ok());
    }
}
