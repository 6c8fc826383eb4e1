pub mod authorization;
pub mod gateways;
pub mod repositories;
pub mod usecases;
pub mod util;

pub use spotmap_entities as entities;
