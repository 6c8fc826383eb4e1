use super::prelude::*;
use crate::{gateways::token_cache::TokenCache, usecases::user_tokens::consume_verification_token};

pub fn confirm_email_address<R, C>(repo: &R, cache: &C, token: &str) -> Result<User>
where
    R: UserRepo,
    C: TokenCache + ?Sized,
{
    let user_id = consume_verification_token(cache, token)?;
    let mut user = match repo.get_user(&user_id) {
        Ok(user) => user,
        Err(RepoError::NotFound) => return Err(Error::TokenInvalid),
        Err(e) => return Err(Error::Repo(e)),
    };
    if !user.email_confirmed {
        user.email_confirmed = true;
        debug_assert_eq!(Role::Guest, user.role);
        if user.role == Role::Guest {
            user.role = Role::User;
        }
        repo.update_user(&user)?;
    }
    Ok(user)
}
