pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{route_builder::*, spot_builder::*};

pub mod spot_builder {

    use super::*;
    use crate::{geo::*, id::*, spot::*, time::*};

    #[derive(Debug)]
    pub struct SpotBuild {
        spot: Spot,
    }

    impl SpotBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.spot.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.spot.name = name.into();
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.spot.description = desc.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.spot.pos = pos;
            self
        }
        pub fn category(mut self, category: Category) -> Self {
            self.spot.category = category;
            self
        }
        pub fn facility(mut self, name: &str, available: bool) -> Self {
            self.spot.facilities.insert(name.into(), available);
            self
        }
        pub fn published(mut self, published: bool) -> Self {
            self.spot.published = published;
            self
        }
        pub fn created_by(mut self, user_id: &str) -> Self {
            self.spot.created_by = user_id.into();
            self
        }
        pub fn photo_url(mut self, url: &str) -> Self {
            self.spot.photos.push(SpotPhoto {
                id: Id::new(),
                url: url.into(),
            });
            self
        }
        pub fn tags(mut self, tags: Vec<impl Into<String>>) -> Self {
            self.spot.tags = tags.into_iter().map(|x| x.into()).collect();
            self
        }
        pub fn finish(self) -> Spot {
            self.spot
        }
    }

    impl Builder for Spot {
        type Build = SpotBuild;
        fn build() -> SpotBuild {
            SpotBuild {
                spot: Spot {
                    id: Id::new(),
                    name: "".into(),
                    description: "".into(),
                    pos: MapPoint::from_lat_lng_deg(0.0, 0.0),
                    category: Category::default(),
                    facilities: Facilities::default(),
                    published: true,
                    created_by: Id::new(),
                    created_at: Timestamp::now(),
                    photos: vec![],
                    tags: vec![],
                },
            }
        }
    }
}

pub mod route_builder {

    use super::*;
    use crate::{id::*, route::*, time::*};

    #[derive(Debug)]
    pub struct RouteBuild {
        route: Route,
    }

    impl RouteBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.route.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.route.name = name.into();
            self
        }
        pub fn distance_km(mut self, km: f64) -> Self {
            self.route.distance_km = km;
            self
        }
        pub fn path(mut self, path: Vec<crate::geo::MapPoint>) -> Self {
            self.route.path = path;
            self
        }
        pub fn created_by(mut self, user_id: &str) -> Self {
            self.route.created_by = user_id.into();
            self
        }
        pub fn spot(mut self, spot_id: &str) -> Self {
            let position = self.route.spots.len() as u32;
            self.route.spots.push(RouteSpot {
                spot_id: spot_id.into(),
                position,
            });
            self
        }
        pub fn finish(self) -> Route {
            self.route
        }
    }

    impl Builder for Route {
        type Build = RouteBuild;
        fn build() -> RouteBuild {
            RouteBuild {
                route: Route {
                    id: Id::new(),
                    name: "".into(),
                    description: "".into(),
                    distance_km: 0.0,
                    path: vec![],
                    published: true,
                    created_by: Id::new(),
                    created_at: Timestamp::now(),
                    spots: vec![],
                },
            }
        }
    }
}
