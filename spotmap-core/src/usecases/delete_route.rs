use super::prelude::*;
use crate::authorization;

pub fn delete_route<R: RouteRepo>(repo: &R, user: &User, id: &Id) -> Result<()> {
    let route = repo.get_route(id)?;
    authorization::user::authorize_owner(user, &route.created_by)?;
    repo.delete_route(id)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{
        super::{
            create_route::{create_route, NewRoute},
            tests::{mock_user, MockDb},
            *,
        },
        *,
    };

    #[test]
    fn delete_own_route() {
        let db = MockDb::default();
        let user = mock_user("a@b.io", Role::User);
        let route = create_route(
            &db,
            &user.id,
            NewRoute {
                name: "walk".into(),
                ..Default::default()
            },
        )
        .unwrap();
        assert!(delete_route(&db, &user, &route.id).is_ok());
        assert!(db.all_routes().unwrap().is_empty());
    }
}
