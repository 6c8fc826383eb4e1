///////////////////////////////////////////////////////////////////////
// Users
///////////////////////////////////////////////////////////////////////

table! {
    users (id) {
        id -> Text,
        email -> Text,
        email_confirmed -> Bool,
        password -> Text,
        role -> SmallInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Spots
///////////////////////////////////////////////////////////////////////

table! {
    spots (id) {
        id -> Text,
        name -> Text,
        description -> Text,
        lat -> Double,
        lng -> Double,
        category -> Text,
        facilities -> Text,
        published -> Bool,
        created_by -> Text,
        created_at -> BigInt,
    }
}

table! {
    spot_photos (id) {
        id -> Text,
        spot_id -> Text,
        url -> Text,
    }
}

joinable!(spot_photos -> spots (spot_id));

///////////////////////////////////////////////////////////////////////
// Tags
///////////////////////////////////////////////////////////////////////

table! {
    tags (name) {
        name -> Text,
    }
}

table! {
    spot_tags (spot_id, tag_name) {
        spot_id -> Text,
        tag_name -> Text,
    }
}

joinable!(spot_tags -> spots (spot_id));

///////////////////////////////////////////////////////////////////////
// Routes
///////////////////////////////////////////////////////////////////////

table! {
    routes (id) {
        id -> Text,
        name -> Text,
        description -> Text,
        distance_km -> Double,
        // GeoJSON LineString
        path -> Text,
        published -> Bool,
        created_by -> Text,
        created_at -> BigInt,
    }
}

table! {
    route_spots (route_id, position) {
        route_id -> Text,
        position -> Integer,
        spot_id -> Text,
    }
}

joinable!(route_spots -> routes (route_id));

///////////////////////////////////////////////////////////////////////
// Favourites & votes
///////////////////////////////////////////////////////////////////////

table! {
    favourites (user_id, spot_id) {
        user_id -> Text,
        spot_id -> Text,
    }
}

table! {
    votes (user_id, spot_id) {
        user_id -> Text,
        spot_id -> Text,
        value -> SmallInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Moderation
///////////////////////////////////////////////////////////////////////

table! {
    reports (id) {
        id -> Text,
        spot_id -> Text,
        reason -> Text,
        status -> SmallInt,
        created_at -> BigInt,
    }
}

joinable!(reports -> spots (spot_id));

table! {
    audit_log (id) {
        id -> Text,
        report_id -> Text,
        user_id -> Text,
        action -> SmallInt,
        created_at -> BigInt,
    }
}

joinable!(audit_log -> reports (report_id));
