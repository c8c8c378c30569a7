//! Scrapes public Steam Community profiles into typed records: persona,
//! status, badges, games, wishlist and past names.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod services;

pub use domain::{Badge, Game, Profile, UserId, WishlistEntry};
pub use error::{ProfileError, Result};
pub use services::{build_profile, ProfileService};
