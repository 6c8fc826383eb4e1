use super::{create_spot::dedup_tags, prelude::*};
use crate::authorization;

#[derive(Debug, Clone, Default)]
pub struct UpdateSpot {
    pub name: Option<String>,
    pub description: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub category: Option<Category>,
    pub facilities: Option<Facilities>,
    pub published: Option<bool>,
    pub photo_urls: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
}

pub fn update_spot<R>(repo: &R, user: &User, id: &Id, u: UpdateSpot) -> Result<Spot>
where
    R: SpotRepo + TagRepo,
{
    let mut spot = repo.get_spot(id)?;
    authorization::user::authorize_owner(user, &spot.created_by)?;
    if let Some(name) = u.name {
        if name.trim().is_empty() {
            return Err(Error::Name);
        }
        spot.name = name;
    }
    if let Some(description) = u.description {
        spot.description = description;
    }
    // The location only changes if both coordinates are supplied.
    if let (Some(lat), Some(lng)) = (u.lat, u.lng) {
        let pos = MapPoint::from_lat_lng_deg(lat, lng);
        if !pos.is_valid() {
            return Err(Error::InvalidPosition);
        }
        spot.pos = pos;
    }
    if let Some(category) = u.category {
        spot.category = category;
    }
    if let Some(facilities) = u.facilities {
        spot.facilities = facilities;
    }
    if let Some(published) = u.published {
        spot.published = published;
    }
    if let Some(photo_urls) = u.photo_urls {
        spot.photos = photo_urls
            .into_iter()
            .map(|url| SpotPhoto { id: Id::new(), url })
            .collect();
    }
    if let Some(tags) = u.tags {
        let tags = dedup_tags(tags);
        for tag in &tags {
            repo.create_tag_if_it_does_not_exist(&Tag {
                name: tag.clone(),
            })?;
        }
        spot.tags = tags;
    }
    repo.update_spot(&spot)?;
    Ok(spot)
}
