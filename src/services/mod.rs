pub mod export;
pub mod profile_service;

pub use export::{render_profile, write_profile};
pub use profile_service::{build_profile, ProfileService};
