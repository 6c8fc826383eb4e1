use super::prelude::*;

pub struct Credentials<'a> {
    pub email: &'a EmailAddress,
    pub password: &'a str,
}

pub fn login_with_email<R>(repo: &R, login: &Credentials) -> Result<User>
where
    R: UserRepo,
{
    repo.try_get_user_by_email(login.email)
        .map_err(Error::Repo)
        .and_then(|user| {
            if let Some(u) = user {
                if u.password.verify(login.password) {
                    if u.email_confirmed {
                        Ok(u)
                    } else {
                        Err(Error::EmailNotConfirmed)
                    }
                } else {
                    Err(Error::Credentials)
                }
            } else {
                Err(Error::Credentials)
            }
        })
}

#[cfg(test)]
mod tests {
    use super::{
        super::{tests::MockDb, *},
        *,
    };

    fn user(email: &str, password: &str, confirmed: bool) -> User {
        User {
            id: Id::new(),
            email: EmailAddress::new_unchecked(email.to_string()),
            email_confirmed: confirmed,
            password: password.parse::<Password>().unwrap(),
            role: Role::User,
        }
    }

    #[test]
    fn login_with_valid_credentials() {
        let db = MockDb::default();
        db.users.borrow_mut().push(user("a@b.io", "secret", true));
        let email = "a@b.io".parse().unwrap();
        let login = Credentials {
            email: &email,
            password: "secret",
        };
        assert!(login_with_email(&db, &login).is_ok());
    }

    #[test]
    fn login_with_wrong_password() {
        let db = MockDb::default();
        db.users.borrow_mut().push(user("a@b.io", "secret", true));
        let email = "a@b.io".parse().unwrap();
        let login = Credentials {
            email: &email,
            password: "wrong!",
        };
        assert!(matches!(
            login_with_email(&db, &login),
            Err(Error::Credentials)
        ));
    }

    #[test]
    fn login_with_unconfirmed_email() {
        let db = MockDb::default();
        db.users.borrow_mut().push(user("a@b.io", "secret", false));
        let email = "a@b.io".parse().unwrap();
        let login = Credentials {
            email: &email,
            password: "secret",
        };
        assert!(matches!(
            login_with_email(&db, &login),
            Err(Error::EmailNotConfirmed)
        ));
    }

    #[test]
    fn login_with_unknown_email() {
        let db = MockDb::default();
        let email = "nobody@b.io".parse().unwrap();
        let login = Credentials {
            email: &email,
            password: "secret",
        };
        assert!(matches!(
            login_with_email(&db, &login),
            Err(Error::Credentials)
        ));
    }
}
