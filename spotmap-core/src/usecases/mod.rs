mod authorize;
mod confirm_email;
mod create_new_user;
mod create_route;
mod create_spot;
mod delete_route;
mod delete_spot;
mod error;
mod favourites;
mod login;
mod moderation;
mod presign_upload;
mod query_spots;
mod register;
mod report_spot;
mod reset_password;
mod tags;
mod update_route;
mod update_spot;
mod user_tokens;
mod vote_spot;


type Result<T> = std::result::Result<T, Error>;

pub use self::{
    authorize::*, confirm_email::*, create_new_user::*, create_route::*, create_spot::*,
    delete_route::*, delete_spot::*, error::Error, favourites::*, login::*, moderation::*,
    presign_upload::*, query_spots::*, register::*, report_spot::*, reset_password::*, tags::*,
    update_route::*, update_spot::*, user_tokens::*, vote_spot::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        entities::{
            email::*, geo::*, id::*, nonce::*, password::*, report::*, route::*, spot::*, tag::*,
            time::*, user::*, vote::*,
        },
        repositories::{Error as RepoError, *},
    };
}
