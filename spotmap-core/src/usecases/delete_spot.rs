use super::prelude::*;
use crate::authorization;

pub fn delete_spot<R: SpotRepo>(repo: &R, user: &User, id: &Id) -> Result<()> {
    let spot = repo.get_spot(id)?;
    authorization::user::authorize_owner(user, &spot.created_by)?;
    repo.delete_spot(id)?;
    Ok(())
}
