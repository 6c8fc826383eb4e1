use spotmap_entities::geo::MapBbox;

pub use fast_chemail::is_valid_email;

pub fn is_valid_bbox(bbox: &MapBbox) -> bool {
    bbox.is_valid()
}

pub fn is_valid_radius_km(radius_km: f64) -> bool {
    radius_km.is_finite() && radius_km > 0.0
}
