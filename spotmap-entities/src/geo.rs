use std::fmt;

// The Earth's mean radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A point on the map in degrees (WGS84).
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

impl MapPoint {
    pub fn from_lat_lng_deg(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }

    /// Great-circle distance in kilometers (haversine).
    pub fn distance_km(&self, other: &MapPoint) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let dlat = (other.lat - self.lat).to_radians();
        let dlng = (other.lng - self.lng).to_radians();

        let a = (dlat / 2.0).sin() * (dlat / 2.0).sin()
            + lat1.cos() * lat2.cos() * (dlng / 2.0).sin() * (dlng / 2.0).sin();
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// A rectangular geographic filter defined by its south-west and
/// north-east corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapBbox {
    sw: MapPoint,
    ne: MapPoint,
}

impl MapBbox {
    pub fn new(sw: MapPoint, ne: MapPoint) -> Self {
        Self { sw, ne }
    }

    pub fn southwest(&self) -> MapPoint {
        self.sw
    }

    pub fn northeast(&self) -> MapPoint {
        self.ne
    }

    pub fn is_valid(&self) -> bool {
        self.sw.is_valid()
            && self.ne.is_valid()
            && self.sw.lat() <= self.ne.lat()
            && self.sw.lng() <= self.ne.lng()
    }

    pub fn contains_point(&self, pos: MapPoint) -> bool {
        pos.lat() >= self.sw.lat()
            && pos.lat() <= self.ne.lat()
            && pos.lng() >= self.sw.lng()
            && pos.lng() <= self.ne.lng()
    }

    /// The smallest bbox that encloses a circle around `center`.
    ///
    /// Used as a database prefilter before evaluating the exact
    /// distance predicate.
    pub fn around(center: MapPoint, radius_km: f64) -> Self {
        let dlat = (radius_km / EARTH_RADIUS_KM).to_degrees();
        let cos_lat = center.lat().to_radians().cos().abs().max(f64::EPSILON);
        let dlng = (radius_km / (EARTH_RADIUS_KM * cos_lat)).to_degrees();
        let sw = MapPoint::from_lat_lng_deg(
            (center.lat() - dlat).max(-90.0),
            (center.lng() - dlng).max(-180.0),
        );
        let ne = MapPoint::from_lat_lng_deg(
            (center.lat() + dlat).min(90.0),
            (center.lng() + dlng).min(180.0),
        );
        Self { sw, ne }
    }
}
