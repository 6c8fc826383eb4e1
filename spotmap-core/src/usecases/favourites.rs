use super::prelude::*;

pub fn add_favourite_spot<R>(repo: &R, user_id: &Id, spot_id: &Id) -> Result<Spot>
where
    R: FavouriteRepo + SpotRepo,
{
    let spot = repo.get_spot(spot_id)?;
    repo.add_favourite(&Favourite {
        user_id: user_id.clone(),
        spot_id: spot_id.clone(),
    })?;
    Ok(spot)
}

pub fn remove_favourite_spot<R: FavouriteRepo>(repo: &R, user_id: &Id, spot_id: &Id) -> Result<()> {
    repo.remove_favourite(user_id, spot_id)?;
    Ok(())
}

pub fn favourite_spots<R>(repo: &R, user_id: &Id) -> Result<Vec<Spot>>
where
    R: FavouriteRepo + SpotRepo,
{
    let spot_ids = repo.favourite_spot_ids(user_id)?;
    let mut spots = Vec::with_capacity(spot_ids.len());
    for spot_id in &spot_ids {
        spots.push(repo.get_spot(spot_id)?);
    }
    Ok(spots)
}
