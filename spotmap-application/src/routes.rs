use super::*;

pub fn create_route(
    connections: &sqlite::Connections,
    user: &User,
    new_route: usecases::NewRoute,
) -> Result<Route> {
    let route = connections
        .exclusive()?
        .transaction(|conn| usecases::create_route(conn, &user.id, new_route))?;
    info!("Created route {} ({})", route.name, route.id);
    Ok(route)
}

pub fn update_route(
    connections: &sqlite::Connections,
    user: &User,
    id: &Id,
    update: usecases::UpdateRoute,
) -> Result<Route> {
    let route = connections
        .exclusive()?
        .transaction(|conn| usecases::update_route(conn, user, id, update))?;
    info!("Updated route {} ({})", route.name, route.id);
    Ok(route)
}

pub fn delete_route(connections: &sqlite::Connections, user: &User, id: &Id) -> Result<()> {
    connections
        .exclusive()?
        .transaction(|conn| usecases::delete_route(conn, user, id))?;
    info!("Deleted route {id}");
    Ok(())
}

pub fn get_route(connections: &sqlite::Connections, id: &Id) -> Result<Route> {
    Ok(connections.shared()?.get_route(id)?)
}

pub fn all_routes(connections: &sqlite::Connections) -> Result<Vec<Route>> {
    Ok(connections.shared()?.all_routes()?)
}
