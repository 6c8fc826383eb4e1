use super::prelude::*;

pub fn vote_spot<R>(repo: &R, user_id: &Id, spot_id: &Id, value: i8) -> Result<i64>
where
    R: VoteRepo + SpotRepo,
{
    let value = VoteValue::try_from(value)?;
    repo.get_spot(spot_id)?;
    repo.upsert_vote(&Vote {
        user_id: user_id.clone(),
        spot_id: spot_id.clone(),
        value,
    })?;
    Ok(repo.spot_score(spot_id)?)
}
