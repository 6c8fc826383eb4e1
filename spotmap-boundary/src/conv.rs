use spotmap_entities as e;

use super::*;

impl From<e::spot::Category> for SpotCategory {
    fn from(from: e::spot::Category) -> Self {
        use e::spot::Category::*;
        match from {
            Park => SpotCategory::Park,
            Garden => SpotCategory::Garden,
            Walk => SpotCategory::Walk,
            Lookout => SpotCategory::Lookout,
            Playground => SpotCategory::Playground,
            Beach => SpotCategory::Beach,
            Other => SpotCategory::Other,
        }
    }
}

impl From<SpotCategory> for e::spot::Category {
    fn from(from: SpotCategory) -> Self {
        use e::spot::Category::*;
        match from {
            SpotCategory::Park => Park,
            SpotCategory::Garden => Garden,
            SpotCategory::Walk => Walk,
            SpotCategory::Lookout => Lookout,
            SpotCategory::Playground => Playground,
            SpotCategory::Beach => Beach,
            SpotCategory::Other => Other,
        }
    }
}

impl From<e::spot::SpotPhoto> for SpotPhoto {
    fn from(from: e::spot::SpotPhoto) -> Self {
        let e::spot::SpotPhoto { id, url } = from;
        Self { id: id.into(), url }
    }
}

impl From<e::spot::Spot> for Spot {
    fn from(from: e::spot::Spot) -> Self {
        let e::spot::Spot {
            id,
            name,
            description,
            pos,
            category,
            facilities,
            published,
            created_by,
            created_at,
            photos,
            tags,
        } = from;
        Self {
            id: id.into(),
            name,
            description,
            lat: pos.lat(),
            lng: pos.lng(),
            category: category.into(),
            facilities,
            is_published: published,
            created_by: created_by.into(),
            created_at: created_at.as_millis(),
            photos: photos.into_iter().map(Into::into).collect(),
            tags,
        }
    }
}

impl From<&[e::geo::MapPoint]> for LineString {
    fn from(points: &[e::geo::MapPoint]) -> Self {
        Self {
            geometry_type: "LineString".to_string(),
            coordinates: points.iter().map(|p| [p.lng(), p.lat()]).collect(),
        }
    }
}

impl From<e::route::RouteSpot> for RouteSpot {
    fn from(from: e::route::RouteSpot) -> Self {
        let e::route::RouteSpot { spot_id, position } = from;
        Self {
            spot_id: spot_id.into(),
            position,
        }
    }
}

impl From<e::route::Route> for Route {
    fn from(from: e::route::Route) -> Self {
        let e::route::Route {
            id,
            name,
            description,
            distance_km,
            path,
            published,
            created_by,
            created_at,
            spots,
        } = from;
        Self {
            id: id.into(),
            name,
            description,
            distance_km,
            path: path.as_slice().into(),
            spots: spots.into_iter().map(Into::into).collect(),
            is_published: published,
            created_by: created_by.into(),
            created_at: created_at.as_millis(),
        }
    }
}

impl From<e::tag::Tag> for Tag {
    fn from(from: e::tag::Tag) -> Self {
        let e::tag::Tag { name } = from;
        Self { name }
    }
}

impl From<e::report::ReportStatus> for ReportStatus {
    fn from(from: e::report::ReportStatus) -> Self {
        use e::report::ReportStatus::*;
        match from {
            Pending => ReportStatus::Pending,
            Approved => ReportStatus::Approved,
            Rejected => ReportStatus::Rejected,
        }
    }
}

impl From<e::report::ModerationAction> for ModerationAction {
    fn from(from: e::report::ModerationAction) -> Self {
        use e::report::ModerationAction::*;
        match from {
            Approve => ModerationAction::Approve,
            Reject => ModerationAction::Reject,
        }
    }
}

impl From<ModerationAction> for e::report::ModerationAction {
    fn from(from: ModerationAction) -> Self {
        use e::report::ModerationAction::*;
        match from {
            ModerationAction::Approve => Approve,
            ModerationAction::Reject => Reject,
        }
    }
}

impl From<e::report::Report> for Report {
    fn from(from: e::report::Report) -> Self {
        let e::report::Report {
            id,
            spot_id,
            reason,
            status,
            created_at,
        } = from;
        Self {
            id: id.into(),
            spot_id: spot_id.into(),
            reason,
            status: status.into(),
            created_at: created_at.as_millis(),
        }
    }
}

impl From<e::user::Role> for UserRole {
    fn from(from: e::user::Role) -> Self {
        use e::user::Role::*;
        match from {
            Guest => UserRole::Guest,
            User => UserRole::User,
            Admin => UserRole::Admin,
        }
    }
}

impl From<UserRole> for e::user::Role {
    fn from(from: UserRole) -> Self {
        use e::user::Role::*;
        match from {
            UserRole::Guest => Guest,
            UserRole::User => User,
            UserRole::Admin => Admin,
        }
    }
}

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        let e::user::User {
            id,
            email,
            email_confirmed,
            password: _password,
            role,
        } = from;
        Self {
            id: id.into(),
            email: email.into(),
            email_confirmed,
            role: role.into(),
        }
    }
}
