use super::*;

impl<'a> VoteRepo for DbReadOnly<'a> {
    fn upsert_vote(&self, _vote: &Vote) -> Result<()> {
        unreachable!();
    }
    fn spot_score(&self, spot_id: &Id) -> Result<i64> {
        spot_score(&mut self.conn.borrow_mut(), spot_id)
    }
}

impl<'a> VoteRepo for DbReadWrite<'a> {
    fn upsert_vote(&self, vote: &Vote) -> Result<()> {
        upsert_vote(&mut self.conn.borrow_mut(), vote)
    }
    fn spot_score(&self, spot_id: &Id) -> Result<i64> {
        spot_score(&mut self.conn.borrow_mut(), spot_id)
    }
}

impl<'a> VoteRepo for DbConnection<'a> {
    fn upsert_vote(&self, vote: &Vote) -> Result<()> {
        upsert_vote(&mut self.conn.borrow_mut(), vote)
    }
    fn spot_score(&self, spot_id: &Id) -> Result<i64> {
        spot_score(&mut self.conn.borrow_mut(), spot_id)
    }
}

fn upsert_vote(conn: &mut SqliteConnection, vote: &Vote) -> Result<()> {
    use schema::votes::dsl;
    let entity = models::VoteEntity::from(vote);
    // Last write wins.
    diesel::insert_into(schema::votes::table)
        .values(&entity)
        .on_conflict((dsl::user_id, dsl::spot_id))
        .do_update()
        .set(dsl::value.eq(entity.value))
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn spot_score(conn: &mut SqliteConnection, spot_id: &Id) -> Result<i64> {
    use schema::votes::dsl;
    Ok(dsl::votes
        .filter(dsl::spot_id.eq(spot_id.as_str()))
        .select(diesel::dsl::sum(dsl::value))
        .first::<Option<i64>>(conn)
        .map_err(from_diesel_err)?
        .unwrap_or(0))
}
