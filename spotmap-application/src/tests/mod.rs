pub mod prelude {
    pub use super::{BackendFixture, DummyNotifyGW};
    pub(crate) use crate::{
        error::{AppError, BError},
        usecases,
    };
    pub use spotmap_core::{
        entities::{
            email::EmailAddress,
            id::Id,
            report::ModerationAction,
            route::Route,
            spot::Spot,
            user::{Role, User},
        },
        gateways::notify::NotificationGateway,
        repositories::{Error as RepoError, *},
    };
}

use prelude::*;

use spotmap_gateways::token_cache::InMemoryTokenCache;

pub struct BackendFixture {
    pub db_connections: crate::sqlite::Connections,
    pub token_cache: InMemoryTokenCache,
    pub notify: DummyNotifyGW,
}

impl BackendFixture {
    pub fn new() -> Self {
        let db_connections = crate::sqlite::Connections::init(":memory:", 1).unwrap();
        spotmap_db_sqlite::run_embedded_database_migrations(db_connections.exclusive().unwrap());
        Self {
            db_connections,
            token_cache: InMemoryTokenCache::default(),
            notify: DummyNotifyGW,
        }
    }

    /// Creates a user with a confirmed email address and the given role.
    pub fn create_user(&self, email: &str, password: &str, role: Role) -> User {
        let email = email.parse::<EmailAddress>().unwrap();
        let mut db = self.db_connections.exclusive().unwrap();
        db.transaction::<_, _, usecases::Error>(|conn| {
            let mut user = usecases::create_new_user(
                conn,
                usecases::NewUser {
                    email,
                    password: password.to_string(),
                },
            )?;
            user.email_confirmed = true;
            user.role = role;
            conn.update_user(&user)?;
            Ok(user)
        })
        .unwrap()
    }
}

pub struct DummyNotifyGW;

impl NotificationGateway for DummyNotifyGW {
    fn user_registered(&self, _: &User, _: &str) {}
    fn user_reset_password_requested(&self, _: &EmailAddress, _: &str) {}
}
