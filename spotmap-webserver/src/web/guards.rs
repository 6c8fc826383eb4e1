use core::ops::Deref;

use rocket::{
    self,
    http::Status,
    outcome::try_outcome,
    request::{FromRequest, Outcome, Request},
    State,
};

use crate::web::jwt;
use spotmap_application::error::AppError;
use spotmap_core::{
    entities::{
        id::Id,
        user::{Role, User},
    },
    gateways::{
        notify::NotificationGateway, object_storage::ObjectStorageGateway,
        token_cache::TokenCache,
    },
    repositories::UserRepo,
    usecases,
    usecases::Error as ParameterError,
};

pub const COOKIE_AUTH_KEY: &str = "spotmap-auth";

type Result<T> = std::result::Result<T, AppError>;

fn get_bearer_token(auth_header_val: &str) -> Option<&str> {
    let x: Vec<_> = auth_header_val.split(' ').collect();
    if x.len() == 2 && x[0] == "Bearer" {
        Some(x[1])
    } else {
        None
    }
}

#[derive(Debug)]
pub struct Auth {
    bearer_tokens: Vec<String>,
    user_id: Option<Id>,
}

impl Auth {
    pub fn user_id(&self) -> Result<&Id> {
        self.user_id
            .as_ref()
            .ok_or_else(|| ParameterError::Unauthorized.into())
    }

    pub fn bearer_tokens(&self) -> &Vec<String> {
        &self.bearer_tokens
    }

    /// Loads the authenticated user.
    pub fn user<R: UserRepo>(&self, repo: &R) -> Result<User> {
        Ok(usecases::authorize_user_by_id(
            repo,
            self.user_id()?,
            Role::Guest,
        )?)
    }

    /// Loads the authenticated user and requires the admin role.
    pub fn admin<R: UserRepo>(&self, repo: &R) -> Result<User> {
        Ok(usecases::authorize_user_by_id(
            repo,
            self.user_id()?,
            Role::Admin,
        )?)
    }

    fn bearer_tokens_from_header(request: &Request) -> Vec<String> {
        request
            .headers()
            .get("Authorization")
            .filter_map(get_bearer_token)
            .map(ToOwned::to_owned)
            .collect()
    }

    fn token_from_cookie(request: &Request) -> Option<String> {
        request
            .cookies()
            .get(COOKIE_AUTH_KEY)
            .map(|cookie| cookie.value().to_string())
    }

    async fn user_id_from_jwt(
        request: &Request<'_>,
        bearer_tokens: &[String],
    ) -> Option<Id> {
        let jwt_state = request.guard::<&State<jwt::JwtState>>().await.succeeded()?;
        bearer_tokens
            .iter()
            .cloned()
            .chain(Self::token_from_cookie(request))
            .filter_map(|token| jwt_state.validate_token_and_get_user_id(&token).ok())
            .map(Into::into)
            .next()
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Auth {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let bearer_tokens = Self::bearer_tokens_from_header(request);
        let user_id = Self::user_id_from_jwt(request, &bearer_tokens).await;

        let auth = Self {
            bearer_tokens,
            user_id,
        };

        Outcome::Success(auth)
    }
}

#[derive(Debug)]
pub struct Account(Id);

impl Account {
    pub fn user_id(&self) -> &Id {
        &self.0
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Account {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let auth = try_outcome!(Auth::from_request(request).await);
        match auth.user_id() {
            Ok(id) => Outcome::Success(Account(id.clone())),
            _ => Outcome::Error((Status::Unauthorized, ())),
        }
    }
}

pub struct Storage(pub Box<dyn ObjectStorageGateway + Send + Sync>);

impl Deref for Storage {
    type Target = dyn ObjectStorageGateway + Send + Sync;
    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

pub struct Notify(pub Box<dyn NotificationGateway + Send + Sync>);

impl Deref for Notify {
    type Target = dyn NotificationGateway;
    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

pub struct TokenCacheState(pub Box<dyn TokenCache + Send + Sync>);

impl Deref for TokenCacheState {
    type Target = dyn TokenCache;
    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}
