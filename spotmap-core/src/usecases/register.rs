use crate::usecases::{
    create_new_user::{create_new_user, NewUser},
    login::Credentials,
    prelude::*,
};

pub fn register_with_email<R: UserRepo>(repo: &R, credentials: &Credentials) -> Result<User> {
    let password = credentials.password.to_string();
    let email = credentials.email.to_owned();
    let new_user = NewUser { email, password };
    create_new_user(repo, new_user)
}
