use super::*;
use spotmap_core::entities::email::EmailAddress;

fn auth_cookie(token: String, cfg: &Cfg) -> Cookie<'static> {
    Cookie::build((COOKIE_AUTH_KEY, token))
        .http_only(true)
        .same_site(SameSite::Strict)
        .path("/")
        .secure(cfg.secure_cookies)
        .build()
}

#[post("/register", format = "application/json", data = "<credentials>")]
pub fn post_register(
    db: sqlite::Connections,
    cookies: &CookieJar<'_>,
    token_cache: &State<TokenCacheState>,
    notify: &State<Notify>,
    jwt_state: &State<jwt::JwtState>,
    cfg: &State<Cfg>,
    credentials: JsonResult<json::Credentials>,
) -> Result<json::RegisterResponse> {
    let credentials = credentials?.into_inner();
    let email = credentials.email.parse::<EmailAddress>()?;
    let (user, verification_token) = flows::register_with_email(
        &db,
        &***token_cache,
        &***notify,
        &usecases::Credentials {
            email: &email,
            password: &credentials.password,
        },
    )?;
    let token = jwt_state.generate_token(user.id.as_str(), user.email.as_str())?;
    cookies.add(auth_cookie(token.clone(), cfg));
    Ok(Json(json::RegisterResponse {
        token,
        verification_token,
    }))
}

#[post("/login", format = "application/json", data = "<credentials>")]
pub fn post_login(
    db: sqlite::Connections,
    cookies: &CookieJar<'_>,
    jwt_state: &State<jwt::JwtState>,
    cfg: &State<Cfg>,
    credentials: JsonResult<json::Credentials>,
) -> Result<json::JwtToken> {
    let credentials = credentials?.into_inner();
    let email = credentials.email.parse::<EmailAddress>()?;
    let user = flows::login_with_email(
        &db,
        &usecases::Credentials {
            email: &email,
            password: &credentials.password,
        },
    )
    .map_err(|err| {
        log::debug!("Login with email '{}' failed: {err}", credentials.email);
        err
    })?;
    let token = jwt_state.generate_token(user.id.as_str(), user.email.as_str())?;
    cookies.add(auth_cookie(token.clone(), cfg));
    Ok(Json(json::JwtToken { token }))
}

#[post("/logout", format = "application/json")]
pub fn post_logout(
    auth: Auth,
    cookies: &CookieJar<'_>,
    jwt_state: &State<jwt::JwtState>,
) -> Json<json::Success> {
    for bearer in auth.bearer_tokens() {
        jwt_state.blacklist_token(bearer.to_owned());
    }
    if let Some(cookie) = cookies.get(COOKIE_AUTH_KEY) {
        jwt_state.blacklist_token(cookie.value().to_owned());
    }
    cookies.remove(COOKIE_AUTH_KEY);
    Json(json::Success { success: true })
}

#[post("/verify-email", format = "application/json", data = "<data>")]
pub fn post_verify_email(
    db: sqlite::Connections,
    token_cache: &State<TokenCacheState>,
    data: JsonResult<json::VerifyEmail>,
) -> Result<json::Success> {
    let token = data?.into_inner().token;
    flows::confirm_email_address(&db, &***token_cache, &token)?;
    Ok(Json(json::Success { success: true }))
}

#[post(
    "/request-password-reset",
    format = "application/json",
    data = "<data>"
)]
pub fn post_request_password_reset(
    db: sqlite::Connections,
    token_cache: &State<TokenCacheState>,
    notify: &State<Notify>,
    data: JsonResult<json::RequestPasswordReset>,
) -> Result<json::RequestPasswordResetResponse> {
    let req = data?.into_inner();
    let reset_token =
        flows::request_password_reset(&db, &***token_cache, &***notify, &req.email.parse()?)?;
    Ok(Json(json::RequestPasswordResetResponse { reset_token }))
}

#[post("/reset-password", format = "application/json", data = "<data>")]
pub fn post_reset_password(
    db: sqlite::Connections,
    token_cache: &State<TokenCacheState>,
    data: JsonResult<json::ResetPassword>,
) -> Result<json::Success> {
    let req = data?.into_inner();
    flows::reset_password_with_token(&db, &***token_cache, &req.token, &req.password)?;
    Ok(Json(json::Success { success: true }))
}
