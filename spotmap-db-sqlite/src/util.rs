use anyhow::anyhow;
use serde::{Deserialize, Serialize};

use spotmap_core::{
    entities::{geo::MapPoint, spot::Facilities},
    repositories as repo,
};

type Result<T> = std::result::Result<T, repo::Error>;

/// GeoJSON representation of a route path.
///
/// Coordinates are stored as [lng, lat] pairs.
#[derive(Debug, Serialize, Deserialize)]
struct LineString {
    #[serde(rename = "type")]
    geometry_type: String,
    coordinates: Vec<[f64; 2]>,
}

pub fn encode_path(path: &[MapPoint]) -> String {
    let line = LineString {
        geometry_type: "LineString".to_string(),
        coordinates: path.iter().map(|p| [p.lng(), p.lat()]).collect(),
    };
    // Serialization of this shape cannot fail.
    serde_json::to_string(&line).unwrap_or_default()
}

pub fn decode_path(encoded: &str) -> Result<Vec<MapPoint>> {
    let line: LineString = serde_json::from_str(encoded)
        .map_err(|err| repo::Error::Other(anyhow!("invalid route path: {err}")))?;
    Ok(line
        .coordinates
        .into_iter()
        .map(|[lng, lat]| MapPoint::from_lat_lng_deg(lat, lng))
        .collect())
}

pub fn encode_facilities(facilities: &Facilities) -> String {
    serde_json::to_string(facilities).unwrap_or_default()
}

pub fn decode_facilities(encoded: &str) -> Result<Facilities> {
    if encoded.is_empty() {
        return Ok(Facilities::default());
    }
    serde_json::from_str(encoded)
        .map_err(|err| repo::Error::Other(anyhow!("invalid facilities: {err}")))
}
