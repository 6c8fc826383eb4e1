use super::prelude::*;
use crate::authorization;

pub fn authorize_user_by_id<R: UserRepo>(
    repo: &R,
    user_id: &Id,
    min_required_role: Role,
) -> Result<User> {
    let user = match repo.get_user(user_id) {
        Ok(user) => user,
        Err(RepoError::NotFound) => return Err(Error::Unauthorized),
        Err(e) => return Err(Error::Repo(e)),
    };
    authorization::user::authorize_role(&user, min_required_role)?;
    Ok(user)
}
