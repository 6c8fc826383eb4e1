use super::*;

/// Stores a new spot together with its tags.
///
/// Tag upserts and the spot insert happen in a single transaction so
/// that a failed insert never leaves stray tags behind.
pub fn create_spot(
    connections: &sqlite::Connections,
    user: &User,
    new_spot: usecases::NewSpot,
) -> Result<Spot> {
    let spot = connections
        .exclusive()?
        .transaction(|conn| usecases::create_spot(conn, &user.id, new_spot))?;
    info!("Created spot {} ({})", spot.name, spot.id);
    Ok(spot)
}

pub fn update_spot(
    connections: &sqlite::Connections,
    user: &User,
    id: &Id,
    update: usecases::UpdateSpot,
) -> Result<Spot> {
    let spot = connections
        .exclusive()?
        .transaction(|conn| usecases::update_spot(conn, user, id, update))?;
    info!("Updated spot {} ({})", spot.name, spot.id);
    Ok(spot)
}

pub fn delete_spot(connections: &sqlite::Connections, user: &User, id: &Id) -> Result<()> {
    connections
        .exclusive()?
        .transaction(|conn| usecases::delete_spot(conn, user, id))?;
    info!("Deleted spot {id}");
    Ok(())
}

pub fn get_spot(connections: &sqlite::Connections, id: &Id) -> Result<Spot> {
    Ok(connections.shared()?.get_spot(id)?)
}

pub fn query_spots(
    connections: &sqlite::Connections,
    req: usecases::SpotSearchRequest,
) -> Result<Vec<Spot>> {
    Ok(usecases::query_spots(&connections.shared()?, req)?)
}
