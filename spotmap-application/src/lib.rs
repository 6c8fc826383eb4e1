#[macro_use]
extern crate log;

mod account;
mod favourites;
mod moderation;
mod routes;
mod spots;
mod tags;
mod vote;

pub mod prelude {
    pub use super::{
        account::*, favourites::*, moderation::*, routes::*, spots::*, tags::*, vote::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use spotmap_core::{
    entities::{
        email::EmailAddress,
        id::Id,
        report::{ModerationAction, Report},
        route::Route,
        spot::Spot,
        tag::Tag,
        user::User,
    },
    gateways::{notify::NotificationGateway, token_cache::TokenCache},
    repositories::*,
    usecases,
};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use spotmap_db_sqlite::Connections;
}
