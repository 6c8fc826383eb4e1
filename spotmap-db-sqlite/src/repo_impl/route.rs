use super::*;

impl<'a> RouteRepo for DbReadOnly<'a> {
    fn create_route(&self, _route: &Route) -> Result<()> {
        unreachable!();
    }
    fn update_route(&self, _route: &Route) -> Result<()> {
        unreachable!();
    }
    fn delete_route(&self, _id: &Id) -> Result<()> {
        unreachable!();
    }

    fn get_route(&self, id: &Id) -> Result<Route> {
        get_route(&mut self.conn.borrow_mut(), id)
    }
    fn all_routes(&self) -> Result<Vec<Route>> {
        all_routes(&mut self.conn.borrow_mut())
    }
}

impl<'a> RouteRepo for DbReadWrite<'a> {
    fn create_route(&self, route: &Route) -> Result<()> {
        create_route(&mut self.conn.borrow_mut(), route)
    }
    fn update_route(&self, route: &Route) -> Result<()> {
        update_route(&mut self.conn.borrow_mut(), route)
    }
    fn delete_route(&self, id: &Id) -> Result<()> {
        delete_route(&mut self.conn.borrow_mut(), id)
    }

    fn get_route(&self, id: &Id) -> Result<Route> {
        get_route(&mut self.conn.borrow_mut(), id)
    }
    fn all_routes(&self) -> Result<Vec<Route>> {
        all_routes(&mut self.conn.borrow_mut())
    }
}

impl<'a> RouteRepo for DbConnection<'a> {
    fn create_route(&self, route: &Route) -> Result<()> {
        create_route(&mut self.conn.borrow_mut(), route)
    }
    fn update_route(&self, route: &Route) -> Result<()> {
        update_route(&mut self.conn.borrow_mut(), route)
    }
    fn delete_route(&self, id: &Id) -> Result<()> {
        delete_route(&mut self.conn.borrow_mut(), id)
    }

    fn get_route(&self, id: &Id) -> Result<Route> {
        get_route(&mut self.conn.borrow_mut(), id)
    }
    fn all_routes(&self) -> Result<Vec<Route>> {
        all_routes(&mut self.conn.borrow_mut())
    }
}

fn create_route(conn: &mut SqliteConnection, r: &Route) -> Result<()> {
    let new_route = models::NewRoute {
        id: r.id.as_str(),
        name: &r.name,
        description: &r.description,
        distance_km: r.distance_km,
        path: util::encode_path(&r.path),
        published: r.published,
        created_by: r.created_by.as_str(),
        created_at: r.created_at.as_millis(),
    };
    diesel::insert_into(schema::routes::table)
        .values(&new_route)
        .execute(conn)
        .map_err(from_diesel_err)?;
    insert_spot_links(conn, r)?;
    Ok(())
}

fn update_route(conn: &mut SqliteConnection, r: &Route) -> Result<()> {
    use schema::routes::dsl;
    let new_route = models::NewRoute {
        id: r.id.as_str(),
        name: &r.name,
        description: &r.description,
        distance_km: r.distance_km,
        path: util::encode_path(&r.path),
        published: r.published,
        created_by: r.created_by.as_str(),
        created_at: r.created_at.as_millis(),
    };
    let count = diesel::update(dsl::routes.filter(dsl::id.eq(r.id.as_str())))
        .set(&new_route)
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    // The ordered spot links are fully replaced.
    diesel::delete(
        schema::route_spots::table.filter(schema::route_spots::dsl::route_id.eq(r.id.as_str())),
    )
    .execute(conn)
    .map_err(from_diesel_err)?;
    insert_spot_links(conn, r)?;
    Ok(())
}

fn delete_route(conn: &mut SqliteConnection, id: &Id) -> Result<()> {
    use schema::routes::dsl;
    let count = diesel::delete(dsl::routes.filter(dsl::id.eq(id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_route(conn: &mut SqliteConnection, id: &Id) -> Result<Route> {
    use schema::routes::dsl;
    let entity = dsl::routes
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::RouteEntity>(conn)
        .map_err(from_diesel_err)?;
    load_route_details(conn, entity)
}

fn all_routes(conn: &mut SqliteConnection) -> Result<Vec<Route>> {
    use schema::routes::dsl;
    let entities = dsl::routes
        .order(dsl::created_at.asc())
        .load::<models::RouteEntity>(conn)
        .map_err(from_diesel_err)?;
    let mut routes = Vec::with_capacity(entities.len());
    for entity in entities {
        routes.push(load_route_details(conn, entity)?);
    }
    Ok(routes)
}

fn insert_spot_links(conn: &mut SqliteConnection, r: &Route) -> Result<()> {
    let new_links: Vec<_> = r
        .spots
        .iter()
        .map(|link| models::NewRouteSpot {
            route_id: r.id.as_str(),
            position: link.position as i32,
            spot_id: link.spot_id.as_str(),
        })
        .collect();
    diesel::insert_into(schema::route_spots::table)
        .values(&new_links)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn load_route_details(conn: &mut SqliteConnection, entity: models::RouteEntity) -> Result<Route> {
    use schema::route_spots::dsl;
    let spots = dsl::route_spots
        .filter(dsl::route_id.eq(&entity.id))
        .order(dsl::position.asc())
        .load::<models::RouteSpotEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|link| RouteSpot {
            spot_id: link.spot_id.into(),
            position: link.position as u32,
        })
        .collect();
    let path = util::decode_path(&entity.path)?;
    Ok(Route {
        id: entity.id.into(),
        name: entity.name,
        description: entity.description,
        distance_km: entity.distance_km,
        path,
        published: entity.published,
        created_by: entity.created_by.into(),
        created_at: Timestamp::from_millis(entity.created_at),
        spots,
    })
}
