//! Club domain
//!
//! This module provides the club entity, its validation rules, and the
//! repository trait the services consume.

mod entity;
mod repository;
mod validation;

pub use entity::{Club, ClubId};
pub use repository::ClubRepository;
pub use validation::{validate_club_name, validate_min_age_for_join, ClubValidationError};

#[cfg(test)]
pub use repository::mock::MockClubRepository;
