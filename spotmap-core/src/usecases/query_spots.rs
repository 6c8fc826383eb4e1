use super::prelude::*;
use crate::util::validate;

pub const DEFAULT_PAGE_SIZE: u64 = 20;
pub const MAX_PAGE_SIZE: u64 = 100;

#[derive(Debug, Clone, Default)]
pub struct SpotSearchRequest {
    pub text: Option<String>,
    pub category: Option<Category>,
    pub tags: Vec<String>,
    pub bbox: Option<MapBbox>,
    pub center: Option<MapPoint>,
    pub radius_km: Option<f64>,
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

pub fn query_spots<R: SpotRepo>(repo: &R, req: SpotSearchRequest) -> Result<Vec<Spot>> {
    // The bounding box wins if both spatial modes are supplied.
    let spatial = if let Some(bbox) = req.bbox {
        if !validate::is_valid_bbox(&bbox) {
            return Err(Error::Bbox);
        }
        Some(SpatialFilter::Bbox(bbox))
    } else if let (Some(center), Some(radius_km)) = (req.center, req.radius_km) {
        if !center.is_valid() {
            return Err(Error::InvalidPosition);
        }
        if !validate::is_valid_radius_km(radius_km) {
            return Err(Error::Radius);
        }
        Some(SpatialFilter::Radius { center, radius_km })
    } else {
        None
    };
    let page = req.page.unwrap_or(1).max(1);
    let page_size = req
        .page_size
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE);
    let pagination = Pagination {
        offset: Some((page - 1) * page_size),
        limit: Some(page_size),
    };
    let query = SpotQuery {
        spatial,
        text: req.text.filter(|t| !t.trim().is_empty()),
        category: req.category,
        tags: req.tags,
        pagination,
    };
    Ok(repo.query_spots(&query)?)
}

#[cfg(test)]
mod tests {
    use super::{
        super::{
            create_spot::{create_spot, NewSpot},
            tests::MockDb,
            *,
        },
        *,
    };

    fn seed_spot(db: &MockDb, name: &str, lat: f64, lng: f64, tags: Vec<&str>) {
        create_spot(
            db,
            &Id::new(),
            NewSpot {
                name: name.into(),
                lat,
                lng,
                published: true,
                tags: tags.into_iter().map(Into::into).collect(),
                ..Default::default()
            },
        )
        .unwrap();
    }

    #[test]
    fn filter_by_bbox() {
        let db = MockDb::default();
        seed_spot(&db, "inside", 10.0, 10.0, vec![]);
        seed_spot(&db, "outside", 40.0, 40.0, vec![]);
        let req = SpotSearchRequest {
            bbox: Some(MapBbox::new(
                MapPoint::from_lat_lng_deg(0.0, 0.0),
                MapPoint::from_lat_lng_deg(20.0, 20.0),
            )),
            ..Default::default()
        };
        let spots = query_spots(&db, req).unwrap();
        assert_eq!(spots.len(), 1);
        assert_eq!(spots[0].name, "inside");
    }

    #[test]
    fn filter_by_radius() {
        let db = MockDb::default();
        seed_spot(&db, "near", 52.5, 13.4, vec![]);
        seed_spot(&db, "far", 53.55, 10.0, vec![]);
        let req = SpotSearchRequest {
            center: Some(MapPoint::from_lat_lng_deg(52.5, 13.41)),
            radius_km: Some(5.0),
            ..Default::default()
        };
        let spots = query_spots(&db, req).unwrap();
        assert_eq!(spots.len(), 1);
        assert_eq!(spots[0].name, "near");
    }

    #[test]
    fn filter_by_text_and_tags() {
        let db = MockDb::default();
        seed_spot(&db, "Rose Garden", 1.0, 1.0, vec!["quiet"]);
        seed_spot(&db, "Skate Park", 1.0, 1.0, vec!["loud"]);
        let req = SpotSearchRequest {
            text: Some("garden".into()),
            ..Default::default()
        };
        assert_eq!(query_spots(&db, req).unwrap().len(), 1);
        let req = SpotSearchRequest {
            tags: vec!["loud".into()],
            ..Default::default()
        };
        let spots = query_spots(&db, req).unwrap();
        assert_eq!(spots.len(), 1);
        assert_eq!(spots[0].name, "Skate Park");
    }

    #[test]
    fn paginate_results() {
        let db = MockDb::default();
        for i in 0..5 {
            seed_spot(&db, &format!("spot {i}"), 1.0, 1.0, vec![]);
        }
        let req = SpotSearchRequest {
            page: Some(2),
            page_size: Some(2),
            ..Default::default()
        };
        assert_eq!(query_spots(&db, req).unwrap().len(), 2);
        let req = SpotSearchRequest {
            page: Some(3),
            page_size: Some(2),
            ..Default::default()
        };
        assert_eq!(query_spots(&db, req).unwrap().len(), 1);
    }

    #[test]
    fn page_size_is_clamped() {
        let db = MockDb::default();
        seed_spot(&db, "spot", 1.0, 1.0, vec![]);
        let req = SpotSearchRequest {
            page_size: Some(10_000),
            ..Default::default()
        };
        assert!(query_spots(&db, req).is_ok());
    }

    #[test]
    fn reject_invalid_bbox() {
        let db = MockDb::default();
        let req = SpotSearchRequest {
            bbox: Some(MapBbox::new(
                MapPoint::from_lat_lng_deg(91.0, 0.0),
                MapPoint::from_lat_lng_deg(92.0, 1.0),
            )),
            ..Default::default()
        };
        assert!(matches!(query_spots(&db, req), Err(Error::Bbox)));
    }

    #[test]
    fn reject_bbox_with_swapped_longitudes() {
        let db = MockDb::default();
        seed_spot(&db, "somewhere", 5.0, 5.0, vec![]);
        let req = SpotSearchRequest {
            bbox: Some(MapBbox::new(
                MapPoint::from_lat_lng_deg(0.0, 10.0),
                MapPoint::from_lat_lng_deg(10.0, 0.0),
            )),
            ..Default::default()
        };
        assert!(matches!(query_spots(&db, req), Err(Error::Bbox)));
    }
}
