use super::*;

/// Casts or replaces the user's vote and returns the new score.
pub fn vote_spot(
    connections: &sqlite::Connections,
    user: &User,
    spot_id: &Id,
    value: i8,
) -> Result<i64> {
    let score = connections
        .exclusive()?
        .transaction(|conn| usecases::vote_spot(conn, &user.id, spot_id, value))?;
    Ok(score)
}

pub fn spot_score(connections: &sqlite::Connections, spot_id: &Id) -> Result<i64> {
    Ok(connections.shared()?.spot_score(spot_id)?)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::prelude::*, *};

    #[test]
    fn revoting_replaces_the_previous_vote() {
        let fixture = BackendFixture::new();
        let owner = fixture.create_user("owner@foo.bar", "secret password", Role::User);
        let voter = fixture.create_user("voter@foo.bar", "secret password", Role::User);
        let spot = crate::prelude::create_spot(
            &fixture.db_connections,
            &owner,
            usecases::NewSpot {
                name: "Pier".into(),
                lat: 53.5,
                lng: 8.6,
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(vote_spot(&fixture.db_connections, &voter, &spot.id, 1).unwrap(), 1);
        assert_eq!(vote_spot(&fixture.db_connections, &voter, &spot.id, 1).unwrap(), 1);
        assert_eq!(vote_spot(&fixture.db_connections, &voter, &spot.id, -1).unwrap(), -1);
        assert_eq!(vote_spot(&fixture.db_connections, &owner, &spot.id, 1).unwrap(), 0);
        assert_eq!(spot_score(&fixture.db_connections, &spot.id).unwrap(), 0);
    }

    #[test]
    fn only_plus_or_minus_one_is_accepted() {
        let fixture = BackendFixture::new();
        let user = fixture.create_user("a@foo.bar", "secret password", Role::User);
        let spot = crate::prelude::create_spot(
            &fixture.db_connections,
            &user,
            usecases::NewSpot {
                name: "Pier".into(),
                lat: 53.5,
                lng: 8.6,
                ..Default::default()
            },
        )
        .unwrap();
        assert!(matches!(
            vote_spot(&fixture.db_connections, &user, &spot.id, 0),
            Err(AppError::Business(BError::Parameter(
                usecases::Error::VoteValue
            )))
        ));
    }
}
