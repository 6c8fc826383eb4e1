use super::*;

impl<'a> FavouriteRepo for DbReadOnly<'a> {
    fn add_favourite(&self, _favourite: &Favourite) -> Result<()> {
        unreachable!();
    }
    fn remove_favourite(&self, _user_id: &Id, _spot_id: &Id) -> Result<()> {
        unreachable!();
    }
    fn favourite_spot_ids(&self, user_id: &Id) -> Result<Vec<Id>> {
        favourite_spot_ids(&mut self.conn.borrow_mut(), user_id)
    }
}

impl<'a> FavouriteRepo for DbReadWrite<'a> {
    fn add_favourite(&self, favourite: &Favourite) -> Result<()> {
        add_favourite(&mut self.conn.borrow_mut(), favourite)
    }
    fn remove_favourite(&self, user_id: &Id, spot_id: &Id) -> Result<()> {
        remove_favourite(&mut self.conn.borrow_mut(), user_id, spot_id)
    }
    fn favourite_spot_ids(&self, user_id: &Id) -> Result<Vec<Id>> {
        favourite_spot_ids(&mut self.conn.borrow_mut(), user_id)
    }
}

impl<'a> FavouriteRepo for DbConnection<'a> {
    fn add_favourite(&self, favourite: &Favourite) -> Result<()> {
        add_favourite(&mut self.conn.borrow_mut(), favourite)
    }
    fn remove_favourite(&self, user_id: &Id, spot_id: &Id) -> Result<()> {
        remove_favourite(&mut self.conn.borrow_mut(), user_id, spot_id)
    }
    fn favourite_spot_ids(&self, user_id: &Id) -> Result<Vec<Id>> {
        favourite_spot_ids(&mut self.conn.borrow_mut(), user_id)
    }
}

fn add_favourite(conn: &mut SqliteConnection, favourite: &Favourite) -> Result<()> {
    let res = diesel::insert_into(schema::favourites::table)
        .values(&models::FavouriteEntity::from(favourite))
        .execute(conn);
    if let Err(err) = res {
        return match err {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                Err(repo::Error::AlreadyExists)
            }
            _ => Err(from_diesel_err(err)),
        };
    }
    Ok(())
}

fn remove_favourite(conn: &mut SqliteConnection, user_id: &Id, spot_id: &Id) -> Result<()> {
    use schema::favourites::dsl;
    let count = diesel::delete(
        dsl::favourites
            .filter(dsl::user_id.eq(user_id.as_str()))
            .filter(dsl::spot_id.eq(spot_id.as_str())),
    )
    .execute(conn)
    .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn favourite_spot_ids(conn: &mut SqliteConnection, user_id: &Id) -> Result<Vec<Id>> {
    use schema::favourites::dsl;
    Ok(dsl::favourites
        .filter(dsl::user_id.eq(user_id.as_str()))
        .select(dsl::spot_id)
        .load::<String>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}
