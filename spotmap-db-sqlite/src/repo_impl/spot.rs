use super::*;

impl<'a> SpotRepo for DbReadOnly<'a> {
    fn create_spot(&self, _spot: &Spot) -> Result<()> {
        unreachable!();
    }
    fn update_spot(&self, _spot: &Spot) -> Result<()> {
        unreachable!();
    }
    fn delete_spot(&self, _id: &Id) -> Result<()> {
        unreachable!();
    }

    fn get_spot(&self, id: &Id) -> Result<Spot> {
        get_spot(&mut self.conn.borrow_mut(), id)
    }
    fn query_spots(&self, query: &SpotQuery) -> Result<Vec<Spot>> {
        query_spots(&mut self.conn.borrow_mut(), query)
    }

    fn count_spots(&self) -> Result<usize> {
        count_spots(&mut self.conn.borrow_mut())
    }
}

impl<'a> SpotRepo for DbReadWrite<'a> {
    fn create_spot(&self, spot: &Spot) -> Result<()> {
        create_spot(&mut self.conn.borrow_mut(), spot)
    }
    fn update_spot(&self, spot: &Spot) -> Result<()> {
        update_spot(&mut self.conn.borrow_mut(), spot)
    }
    fn delete_spot(&self, id: &Id) -> Result<()> {
        delete_spot(&mut self.conn.borrow_mut(), id)
    }

    fn get_spot(&self, id: &Id) -> Result<Spot> {
        get_spot(&mut self.conn.borrow_mut(), id)
    }
    fn query_spots(&self, query: &SpotQuery) -> Result<Vec<Spot>> {
        query_spots(&mut self.conn.borrow_mut(), query)
    }

    fn count_spots(&self) -> Result<usize> {
        count_spots(&mut self.conn.borrow_mut())
    }
}

impl<'a> SpotRepo for DbConnection<'a> {
    fn create_spot(&self, spot: &Spot) -> Result<()> {
        create_spot(&mut self.conn.borrow_mut(), spot)
    }
    fn update_spot(&self, spot: &Spot) -> Result<()> {
        update_spot(&mut self.conn.borrow_mut(), spot)
    }
    fn delete_spot(&self, id: &Id) -> Result<()> {
        delete_spot(&mut self.conn.borrow_mut(), id)
    }

    fn get_spot(&self, id: &Id) -> Result<Spot> {
        get_spot(&mut self.conn.borrow_mut(), id)
    }
    fn query_spots(&self, query: &SpotQuery) -> Result<Vec<Spot>> {
        query_spots(&mut self.conn.borrow_mut(), query)
    }

    fn count_spots(&self) -> Result<usize> {
        count_spots(&mut self.conn.borrow_mut())
    }
}

fn create_spot(conn: &mut SqliteConnection, s: &Spot) -> Result<()> {
    let new_spot = models::NewSpot {
        id: s.id.as_str(),
        name: &s.name,
        description: &s.description,
        lat: s.pos.lat(),
        lng: s.pos.lng(),
        category: s.category.as_ref(),
        facilities: util::encode_facilities(&s.facilities),
        published: s.published,
        created_by: s.created_by.as_str(),
        created_at: s.created_at.as_millis(),
    };
    diesel::insert_into(schema::spots::table)
        .values(&new_spot)
        .execute(conn)
        .map_err(from_diesel_err)?;
    insert_photos(conn, s)?;
    insert_tag_links(conn, s)?;
    Ok(())
}

fn update_spot(conn: &mut SqliteConnection, s: &Spot) -> Result<()> {
    use schema::spots::dsl;
    let new_spot = models::NewSpot {
        id: s.id.as_str(),
        name: &s.name,
        description: &s.description,
        lat: s.pos.lat(),
        lng: s.pos.lng(),
        category: s.category.as_ref(),
        facilities: util::encode_facilities(&s.facilities),
        published: s.published,
        created_by: s.created_by.as_str(),
        created_at: s.created_at.as_millis(),
    };
    let count = diesel::update(dsl::spots.filter(dsl::id.eq(s.id.as_str())))
        .set(&new_spot)
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    // Photos and tag links are fully replaced.
    diesel::delete(
        schema::spot_photos::table.filter(schema::spot_photos::dsl::spot_id.eq(s.id.as_str())),
    )
    .execute(conn)
    .map_err(from_diesel_err)?;
    diesel::delete(
        schema::spot_tags::table.filter(schema::spot_tags::dsl::spot_id.eq(s.id.as_str())),
    )
    .execute(conn)
    .map_err(from_diesel_err)?;
    insert_photos(conn, s)?;
    insert_tag_links(conn, s)?;
    Ok(())
}

fn delete_spot(conn: &mut SqliteConnection, id: &Id) -> Result<()> {
    use schema::spots::dsl;
    // Child rows are removed by cascading deletes.
    let count = diesel::delete(dsl::spots.filter(dsl::id.eq(id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_spot(conn: &mut SqliteConnection, id: &Id) -> Result<Spot> {
    use schema::spots::dsl;
    let entity = dsl::spots
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::SpotEntity>(conn)
        .map_err(from_diesel_err)?;
    load_spot_details(conn, entity)
}

fn query_spots(conn: &mut SqliteConnection, query: &SpotQuery) -> Result<Vec<Spot>> {
    use schema::spots::dsl;
    let mut q = dsl::spots.into_boxed();
    // The exact distance predicate is evaluated after the database
    // has prefiltered with the enclosing bounding box.
    let mut radius_filter = None;
    let bbox = match &query.spatial {
        Some(SpatialFilter::Bbox(bbox)) => Some(*bbox),
        Some(SpatialFilter::Radius { center, radius_km }) => {
            radius_filter = Some((*center, *radius_km));
            Some(MapBbox::around(*center, *radius_km))
        }
        None => None,
    };
    if let Some(bbox) = bbox {
        let (sw, ne) = (bbox.southwest(), bbox.northeast());
        q = q
            .filter(dsl::lat.between(sw.lat(), ne.lat()))
            .filter(dsl::lng.between(sw.lng(), ne.lng()));
    }
    if let Some(text) = &query.text {
        q = q.filter(dsl::name.like(format!("%{text}%")));
    }
    if let Some(category) = &query.category {
        q = q.filter(dsl::category.eq(category.as_ref().to_string()));
    }
    if !query.tags.is_empty() {
        let ids = spot_ids_with_all_tags(conn, &query.tags)?;
        q = q.filter(dsl::id.eq_any(ids));
    }
    q = q.order(dsl::created_at.asc()).then_order_by(dsl::id.asc());
    let offset = query.pagination.offset.unwrap_or(0);
    let limit = query.pagination.limit;
    if radius_filter.is_none() {
        q = q.offset(offset as i64);
        if let Some(limit) = limit {
            q = q.limit(limit as i64);
        }
    }
    let entities = q
        .load::<models::SpotEntity>(conn)
        .map_err(from_diesel_err)?;
    let mut spots = Vec::with_capacity(entities.len());
    for entity in entities {
        if let Some((center, radius_km)) = radius_filter {
            let pos = MapPoint::from_lat_lng_deg(entity.lat, entity.lng);
            if center.distance_km(&pos) > radius_km {
                continue;
            }
        }
        spots.push(load_spot_details(conn, entity)?);
    }
    if radius_filter.is_some() {
        // Pagination can only be applied after the exact filter.
        let offset = (offset as usize).min(spots.len());
        let mut spots: Vec<_> = spots.drain(offset..).collect();
        if let Some(limit) = limit {
            spots.truncate(limit as usize);
        }
        return Ok(spots);
    }
    Ok(spots)
}

fn count_spots(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::spots::dsl;
    Ok(dsl::spots
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn insert_photos(conn: &mut SqliteConnection, s: &Spot) -> Result<()> {
    let new_photos: Vec<_> = s
        .photos
        .iter()
        .map(|photo| models::NewSpotPhoto {
            id: photo.id.as_str(),
            spot_id: s.id.as_str(),
            url: &photo.url,
        })
        .collect();
    diesel::insert_into(schema::spot_photos::table)
        .values(&new_photos)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn insert_tag_links(conn: &mut SqliteConnection, s: &Spot) -> Result<()> {
    let new_links: Vec<_> = s
        .tags
        .iter()
        .map(|tag| models::NewSpotTag {
            spot_id: s.id.as_str(),
            tag_name: tag,
        })
        .collect();
    diesel::insert_into(schema::spot_tags::table)
        .values(&new_links)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

pub(super) fn load_spot_details(
    conn: &mut SqliteConnection,
    entity: models::SpotEntity,
) -> Result<Spot> {
    use schema::{spot_photos, spot_tags};
    let photos = spot_photos::table
        .filter(spot_photos::dsl::spot_id.eq(&entity.id))
        .load::<models::SpotPhotoEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|photo| SpotPhoto {
            id: photo.id.into(),
            url: photo.url,
        })
        .collect();
    let tags = spot_tags::table
        .filter(spot_tags::dsl::spot_id.eq(&entity.id))
        .select(spot_tags::dsl::tag_name)
        .load::<String>(conn)
        .map_err(from_diesel_err)?;
    let facilities = util::decode_facilities(&entity.facilities)?;
    Ok(Spot {
        id: entity.id.into(),
        name: entity.name,
        description: entity.description,
        pos: MapPoint::from_lat_lng_deg(entity.lat, entity.lng),
        category: entity.category.parse().unwrap_or_default(),
        facilities,
        published: entity.published,
        created_by: entity.created_by.into(),
        created_at: Timestamp::from_millis(entity.created_at),
        photos,
        tags,
    })
}

fn spot_ids_with_all_tags(conn: &mut SqliteConnection, tags: &[String]) -> Result<Vec<String>> {
    use schema::spot_tags::dsl;
    let mut result: Option<Vec<String>> = None;
    for tag in tags {
        let ids: Vec<String> = dsl::spot_tags
            .filter(dsl::tag_name.eq(tag))
            .select(dsl::spot_id)
            .load(conn)
            .map_err(from_diesel_err)?;
        result = Some(match result {
            Some(prev) => prev.into_iter().filter(|id| ids.contains(id)).collect(),
            None => ids,
        });
    }
    Ok(result.unwrap_or_default())
}
