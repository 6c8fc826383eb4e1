use super::prelude::*;

#[derive(Debug, Clone, Default)]
pub struct NewSpot {
    pub name: String,
    pub description: String,
    pub lat: f64,
    pub lng: f64,
    pub category: Category,
    pub facilities: Facilities,
    pub published: bool,
    pub photo_urls: Vec<String>,
    pub tags: Vec<String>,
}

pub fn create_spot<R>(repo: &R, created_by: &Id, s: NewSpot) -> Result<Spot>
where
    R: SpotRepo + TagRepo,
{
    if s.name.trim().is_empty() {
        return Err(Error::Name);
    }
    let pos = MapPoint::from_lat_lng_deg(s.lat, s.lng);
    if !pos.is_valid() {
        return Err(Error::InvalidPosition);
    }
    let tags = dedup_tags(s.tags);
    for tag in &tags {
        repo.create_tag_if_it_does_not_exist(&Tag {
            name: tag.clone(),
        })?;
    }
    let photos = s
        .photo_urls
        .into_iter()
        .map(|url| SpotPhoto { id: Id::new(), url })
        .collect();
    let spot = Spot {
        id: Id::new(),
        name: s.name,
        description: s.description,
        pos,
        category: s.category,
        facilities: s.facilities,
        published: s.published,
        created_by: created_by.clone(),
        created_at: Timestamp::now(),
        photos,
        tags,
    };
    log::debug!("Creating new spot: id = {}", spot.id);
    repo.create_spot(&spot)?;
    Ok(spot)
}

pub(super) fn dedup_tags(tags: Vec<String>) -> Vec<String> {
    let mut deduped: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        if !tag.trim().is_empty() && !deduped.contains(&tag) {
            deduped.push(tag);
        }
    }
    deduped
}
