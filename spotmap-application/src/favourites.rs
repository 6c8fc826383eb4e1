use super::*;

pub fn add_favourite_spot(
    connections: &sqlite::Connections,
    user: &User,
    spot_id: &Id,
) -> Result<Spot> {
    let spot = connections
        .exclusive()?
        .transaction(|conn| usecases::add_favourite_spot(conn, &user.id, spot_id))?;
    Ok(spot)
}

pub fn remove_favourite_spot(
    connections: &sqlite::Connections,
    user: &User,
    spot_id: &Id,
) -> Result<()> {
    connections
        .exclusive()?
        .transaction(|conn| usecases::remove_favourite_spot(conn, &user.id, spot_id))?;
    Ok(())
}

pub fn favourite_spots(connections: &sqlite::Connections, user: &User) -> Result<Vec<Spot>> {
    Ok(usecases::favourite_spots(
        &connections.shared()?,
        &user.id,
    )?)
}
