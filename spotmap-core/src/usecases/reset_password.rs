use super::prelude::*;
use crate::{gateways::token_cache::TokenCache, usecases::user_tokens::consume_reset_token};

pub fn reset_password_with_token<R, C>(
    repo: &R,
    cache: &C,
    token: &str,
    new_password: &str,
) -> Result<User>
where
    R: UserRepo,
    C: TokenCache + ?Sized,
{
    let password = new_password.parse::<Password>()?;
    let user_id = consume_reset_token(cache, token)?;
    let mut user = match repo.get_user(&user_id) {
        Ok(user) => user,
        Err(RepoError::NotFound) => return Err(Error::TokenInvalid),
        Err(e) => return Err(Error::Repo(e)),
    };
    user.password = password;
    repo.update_user(&user)?;
    Ok(user)
}
