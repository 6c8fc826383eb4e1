use serde_json::{json, Value};

use super::*;

pub mod prelude {
    use crate::web::{self, api, sqlite};

    pub use crate::web::tests::prelude::*;

    pub fn setup() -> (Client, sqlite::Connections) {
        web::tests::rocket_test_setup(vec![("/", api::routes())])
    }

    pub fn test_json(r: &LocalResponse) {
        assert_eq!(
            r.headers().get("Content-Type").collect::<Vec<_>>()[0],
            "application/json"
        );
    }
}

use self::prelude::*;

fn auth(token: &str) -> Header<'static> {
    Header::new("Authorization", format!("Bearer {token}"))
}

fn body_json(res: LocalResponse) -> Value {
    serde_json::from_str(&res.into_string().unwrap()).unwrap()
}

/// Registers a fresh account and returns the session token and the
/// email verification token.
fn register(client: &Client, email: &str, password: &str) -> (String, String) {
    let res = client
        .post("/register")
        .header(ContentType::JSON)
        .body(json!({ "email": email, "password": password }).to_string())
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let body = body_json(res);
    (
        body["token"].as_str().unwrap().to_string(),
        body["verificationToken"].as_str().unwrap().to_string(),
    )
}

fn create_spot(client: &Client, token: &str, name: &str, lat: f64, lng: f64) -> String {
    let res = client
        .post("/spots")
        .header(ContentType::JSON)
        .header(auth(token))
        .body(
            json!({ "name": name, "lat": lat, "lng": lng, "category": "park" })
                .to_string(),
        )
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    body_json(res)["id"].as_str().unwrap().to_string()
}

#[test]
fn register_and_login_return_tokens() {
    let (client, _db) = setup();
    let (token, _) = register(&client, "test@example.com", "secret123");
    assert!(!token.is_empty());

    // Login is rejected until the email address is verified.
    let res = client
        .post("/login")
        .header(ContentType::JSON)
        .body(r#"{"email":"test@example.com","password":"secret123"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Unauthorized);

    let (client, db) = setup();
    register_user(&db, "user@example.com", "secret123", true);
    let res = client
        .post("/login")
        .header(ContentType::JSON)
        .body(r#"{"email":"user@example.com","password":"secret123"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    test_json(&res);
    let body = body_json(res);
    assert!(!body["token"].as_str().unwrap().is_empty());
}

#[test]
fn login_with_wrong_password_is_unauthorized() {
    let (client, db) = setup();
    register_user(&db, "user@example.com", "secret123", true);
    let res = client
        .post("/login")
        .header(ContentType::JSON)
        .body(r#"{"email":"user@example.com","password":"wrong"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Unauthorized);
}

#[test]
fn verify_email_with_token() {
    let (client, _db) = setup();
    let (_, verification_token) = register(&client, "test@example.com", "secret123");

    let res = client
        .post("/verify-email")
        .header(ContentType::JSON)
        .body(json!({ "token": verification_token }).to_string())
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    assert_eq!(body_json(res)["success"], Value::Bool(true));

    let res = client
        .post("/login")
        .header(ContentType::JSON)
        .body(r#"{"email":"test@example.com","password":"secret123"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Ok);

    // The token was consumed.
    let res = client
        .post("/verify-email")
        .header(ContentType::JSON)
        .body(json!({ "token": "garbage" }).to_string())
        .dispatch();
    assert_eq!(res.status(), Status::BadRequest);
}

#[test]
fn reset_password() {
    let (client, db) = setup();
    register_user(&db, "user@example.com", "secret123", true);

    let res = client
        .post("/request-password-reset")
        .header(ContentType::JSON)
        .body(r#"{"email":"user@example.com"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let token = body_json(res)["resetToken"].as_str().unwrap().to_string();

    let res = client
        .post("/reset-password")
        .header(ContentType::JSON)
        .body(json!({ "token": token, "password": "12345678" }).to_string())
        .dispatch();
    assert_eq!(res.status(), Status::Ok);

    // The old password no longer works.
    let res = client
        .post("/login")
        .header(ContentType::JSON)
        .body(r#"{"email":"user@example.com","password":"secret123"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Unauthorized);

    let res = client
        .post("/login")
        .header(ContentType::JSON)
        .body(r#"{"email":"user@example.com","password":"12345678"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
}

#[test]
fn password_reset_for_unknown_email_yields_no_token() {
    let (client, _db) = setup();
    let res = client
        .post("/request-password-reset")
        .header(ContentType::JSON)
        .body(r#"{"email":"nobody@example.com"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    assert!(body_json(res).get("resetToken").is_none());
}

#[test]
fn logout_invalidates_the_token() {
    let (client, _db) = setup();
    let (token, _) = register(&client, "test@example.com", "secret123");

    let res = client
        .get("/spots")
        .header(ContentType::JSON)
        .header(auth(&token))
        .dispatch();
    assert_eq!(res.status(), Status::Ok);

    let res = client
        .post("/logout")
        .header(ContentType::JSON)
        .header(auth(&token))
        .dispatch();
    assert_eq!(res.status(), Status::Ok);

    let res = client
        .get("/spots")
        .header(ContentType::JSON)
        .header(auth(&token))
        .dispatch();
    assert_eq!(res.status(), Status::Unauthorized);
}

#[test]
fn spot_crud_lifecycle() {
    let (client, _db) = setup();
    let (token, _) = register(&client, "test@example.com", "secret123");

    let id = create_spot(&client, &token, "My Spot", 1.0, 2.0);

    let res = client
        .get(format!("/spots/{id}"))
        .header(ContentType::JSON)
        .header(auth(&token))
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    test_json(&res);
    let body = body_json(res);
    assert_eq!(body["name"], "My Spot");
    assert_eq!(body["category"], "park");

    let res = client
        .put(format!("/spots/{id}"))
        .header(ContentType::JSON)
        .header(auth(&token))
        .body(r#"{"name":"Updated Spot"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    assert_eq!(body_json(res)["name"], "Updated Spot");

    let res = client
        .get(format!("/spots/{id}"))
        .header(ContentType::JSON)
        .header(auth(&token))
        .dispatch();
    assert_eq!(body_json(res)["name"], "Updated Spot");

    let res = client
        .delete(format!("/spots/{id}"))
        .header(auth(&token))
        .dispatch();
    assert_eq!(res.status(), Status::Ok);

    let res = client
        .get("/spots")
        .header(ContentType::JSON)
        .header(auth(&token))
        .dispatch();
    assert_eq!(body_json(res).as_array().unwrap().len(), 0);
}

#[test]
fn missing_spots_are_not_found() {
    let (client, _db) = setup();
    let (token, _) = register(&client, "test@example.com", "secret123");
    let res = client
        .get("/spots/no-such-id")
        .header(ContentType::JSON)
        .header(auth(&token))
        .dispatch();
    assert_eq!(res.status(), Status::NotFound);
}

#[test]
fn only_the_owner_may_update_a_spot() {
    let (client, _db) = setup();
    let (owner_token, _) = register(&client, "owner@example.com", "secret123");
    let (other_token, _) = register(&client, "other@example.com", "secret123");
    let id = create_spot(&client, &owner_token, "My Spot", 1.0, 2.0);

    let res = client
        .put(format!("/spots/{id}"))
        .header(ContentType::JSON)
        .header(auth(&other_token))
        .body(r#"{"name":"Hijacked"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Forbidden);

    let res = client
        .delete(format!("/spots/{id}"))
        .header(auth(&other_token))
        .dispatch();
    assert_eq!(res.status(), Status::Forbidden);
}

#[test]
fn search_spots_with_filters() {
    let (client, _db) = setup();
    let (token, _) = register(&client, "test@example.com", "secret123");
    create_spot(&client, &token, "Rose Garden", 48.1, 11.5);
    create_spot(&client, &token, "Skate Park", 52.5, 13.4);

    let res = client
        .get("/spots?q=garden")
        .header(ContentType::JSON)
        .header(auth(&token))
        .dispatch();
    let body = body_json(res);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["name"], "Rose Garden");

    let res = client
        .get("/spots?bbox=11.0,47.0,12.0,49.0")
        .header(ContentType::JSON)
        .header(auth(&token))
        .dispatch();
    let body = body_json(res);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["name"], "Rose Garden");

    let res = client
        .get("/spots?center=13.41,52.5&radius=5")
        .header(ContentType::JSON)
        .header(auth(&token))
        .dispatch();
    let body = body_json(res);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["name"], "Skate Park");

    let res = client
        .get("/spots?bbox=not-a-bbox")
        .header(ContentType::JSON)
        .header(auth(&token))
        .dispatch();
    assert_eq!(res.status(), Status::BadRequest);
}

#[test]
fn route_crud_lifecycle() {
    let (client, _db) = setup();
    let (token, _) = register(&client, "test@example.com", "secret123");
    let spot1 = create_spot(&client, &token, "S1", 0.0, 0.0);
    let spot2 = create_spot(&client, &token, "S2", 1.0, 1.0);

    let res = client
        .post("/routes")
        .header(ContentType::JSON)
        .header(auth(&token))
        .body(
            json!({
                "name": "My Route",
                "description": "Desc",
                "distanceKm": 1.2,
                "path": [[0.0, 0.0], [1.0, 1.0]],
                "spotIds": [spot1, spot2],
                "isPublished": true
            })
            .to_string(),
        )
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let route = body_json(res);
    assert_eq!(route["spots"].as_array().unwrap().len(), 2);
    assert_eq!(route["path"]["type"], "LineString");
    assert_eq!(route["path"]["coordinates"].as_array().unwrap().len(), 2);
    let id = route["id"].as_str().unwrap().to_string();

    let res = client
        .get(format!("/routes/{id}"))
        .header(ContentType::JSON)
        .header(auth(&token))
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    assert_eq!(body_json(res)["name"], "My Route");

    let res = client
        .get("/routes")
        .header(ContentType::JSON)
        .header(auth(&token))
        .dispatch();
    assert_eq!(body_json(res).as_array().unwrap().len(), 1);

    let res = client
        .put(format!("/routes/{id}"))
        .header(ContentType::JSON)
        .header(auth(&token))
        .body(json!({ "name": "Updated Route", "spotIds": [spot2, spot1] }).to_string())
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let updated = body_json(res);
    assert_eq!(updated["name"], "Updated Route");
    assert_eq!(updated["spots"][0]["spotId"], Value::String(spot2));
    assert_eq!(updated["spots"][0]["position"], 0);

    let res = client
        .delete(format!("/routes/{id}"))
        .header(auth(&token))
        .dispatch();
    assert_eq!(res.status(), Status::Ok);

    let res = client
        .get("/routes")
        .header(ContentType::JSON)
        .header(auth(&token))
        .dispatch();
    assert_eq!(body_json(res).as_array().unwrap().len(), 0);
}

#[test]
fn voting_upserts_instead_of_accumulating() {
    let (client, _db) = setup();
    let (token, _) = register(&client, "test@example.com", "secret123");
    let id = create_spot(&client, &token, "My Spot", 1.0, 2.0);

    let vote = |value: i64| {
        let res = client
            .post(format!("/spots/{id}/vote"))
            .header(ContentType::JSON)
            .header(auth(&token))
            .body(json!({ "value": value }).to_string())
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
        body_json(res)["score"].as_i64().unwrap()
    };
    assert_eq!(vote(1), 1);
    assert_eq!(vote(1), 1);
    assert_eq!(vote(-1), -1);

    let res = client
        .post(format!("/spots/{id}/vote"))
        .header(ContentType::JSON)
        .header(auth(&token))
        .body(r#"{"value":2}"#)
        .dispatch();
    assert_eq!(res.status(), Status::BadRequest);
}

#[test]
fn tags_can_be_listed_without_authentication() {
    let (client, _db) = setup();
    let (token, _) = register(&client, "test@example.com", "secret123");

    let res = client
        .post("/tags")
        .header(ContentType::JSON)
        .header(auth(&token))
        .body(r#"{"name":"coast"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Ok);

    let res = client.get("/tags").header(ContentType::JSON).dispatch();
    assert_eq!(res.status(), Status::Ok);
    let body = body_json(res);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["name"], "coast");
}

#[test]
fn favourites_round_trip() {
    let (client, _db) = setup();
    let (token, _) = register(&client, "test@example.com", "secret123");
    let id = create_spot(&client, &token, "My Spot", 1.0, 2.0);

    let res = client
        .post("/me/favourites")
        .header(ContentType::JSON)
        .header(auth(&token))
        .body(json!({ "spotId": id }).to_string())
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    assert_eq!(body_json(res)["name"], "My Spot");

    // Favourites are unique per user and spot.
    let res = client
        .post("/me/favourites")
        .header(ContentType::JSON)
        .header(auth(&token))
        .body(json!({ "spotId": id }).to_string())
        .dispatch();
    assert_eq!(res.status(), Status::Conflict);

    let res = client
        .get("/me/favourites")
        .header(ContentType::JSON)
        .header(auth(&token))
        .dispatch();
    assert_eq!(body_json(res).as_array().unwrap().len(), 1);

    let res = client
        .delete(format!("/me/favourites/{id}"))
        .header(auth(&token))
        .dispatch();
    assert_eq!(res.status(), Status::Ok);

    let res = client
        .get("/me/favourites")
        .header(ContentType::JSON)
        .header(auth(&token))
        .dispatch();
    assert_eq!(body_json(res).as_array().unwrap().len(), 0);
}

#[test]
fn moderation_flow() {
    let (client, db) = setup();
    let (user_token, _) = register(&client, "user@example.com", "secret123");
    let (admin_token, _) = register(&client, "admin@example.com", "secret123");
    promote_to_admin(&db, "admin@example.com");

    let id = create_spot(&client, &user_token, "My Spot", 1.0, 2.0);

    let res = client
        .post("/reports")
        .header(ContentType::JSON)
        .header(auth(&user_token))
        .body(json!({ "spotId": id, "reason": "inappropriate" }).to_string())
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let report_id = body_json(res)["id"].as_str().unwrap().to_string();

    // Only admins may access the moderation endpoints.
    let res = client
        .get("/moderation/queue")
        .header(ContentType::JSON)
        .header(auth(&user_token))
        .dispatch();
    assert_eq!(res.status(), Status::Forbidden);

    let res = client
        .get("/moderation/queue")
        .header(ContentType::JSON)
        .header(auth(&admin_token))
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    assert_eq!(body_json(res).as_array().unwrap().len(), 1);

    let res = client
        .post(format!("/reports/{report_id}"))
        .header(ContentType::JSON)
        .header(auth(&admin_token))
        .body(r#"{"action":"approve"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    assert_eq!(body_json(res)["status"], "approved");

    // An approved report unpublishes the spot.
    let res = client
        .get(format!("/spots/{id}"))
        .header(ContentType::JSON)
        .header(auth(&user_token))
        .dispatch();
    assert_eq!(body_json(res)["isPublished"], Value::Bool(false));

    let res = client
        .get("/moderation/queue")
        .header(ContentType::JSON)
        .header(auth(&admin_token))
        .dispatch();
    assert_eq!(body_json(res).as_array().unwrap().len(), 0);

    let res = client
        .get("/reports")
        .header(ContentType::JSON)
        .header(auth(&admin_token))
        .dispatch();
    assert_eq!(body_json(res).as_array().unwrap().len(), 1);
}

#[test]
fn presign_uploads() {
    let (client, _db) = setup();
    let res = client
        .post("/uploads/presign")
        .header(ContentType::JSON)
        .body(r#"{"filename":"test.jpg","contentType":"image/jpeg","size":123}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let body = body_json(res);
    assert!(body["url"].as_str().unwrap().starts_with("https://"));
    assert!(body["key"].as_str().unwrap().ends_with("test.jpg"));

    let res = client
        .post("/uploads/presign")
        .header(ContentType::JSON)
        .body(r#"{"filename":"onlyname"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::BadRequest);

    let res = client
        .post("/uploads/presign")
        .header(ContentType::JSON)
        .body(r#"{"filename":"test.jpg","contentType":"image/jpeg","size":0}"#)
        .dispatch();
    assert_eq!(res.status(), Status::BadRequest);
}

#[test]
fn protected_endpoints_require_authentication() {
    let (client, _db) = setup();
    let res = client.get("/spots").header(ContentType::JSON).dispatch();
    assert_eq!(res.status(), Status::Unauthorized);

    let res = client
        .post("/spots")
        .header(ContentType::JSON)
        .body(r#"{"name":"x","lat":0.0,"lng":0.0,"category":"park"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Unauthorized);

    let res = client
        .get("/me/favourites")
        .header(ContentType::JSON)
        .dispatch();
    assert_eq!(res.status(), Status::Unauthorized);
}

#[test]
fn session_cookie_is_set_on_login() {
    let (client, db) = setup();
    register_user(&db, "user@example.com", "secret123", true);
    let res = client
        .post("/login")
        .header(ContentType::JSON)
        .body(r#"{"email":"user@example.com","password":"secret123"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let cookie = res
        .cookies()
        .get(crate::web::guards::COOKIE_AUTH_KEY)
        .unwrap();
    assert!(!cookie.value().is_empty());

    // The cookie alone authenticates subsequent requests.
    let res = client.get("/spots").header(ContentType::JSON).dispatch();
    assert_eq!(res.status(), Status::Ok);
}
