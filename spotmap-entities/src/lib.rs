#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # spotmap-entities
//!
//! Reusable, agnostic domain entities for spotmap.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod email;
pub mod geo;
pub mod id;
pub mod nonce;
pub mod password;
pub mod report;
pub mod route;
pub mod spot;
pub mod tag;
pub mod time;
pub mod user;
pub mod vote;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
