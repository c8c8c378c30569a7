mod badge;
mod game;
mod identifier;
mod profile;
mod wishlist;

pub use badge::Badge;
pub use game::Game;
pub use identifier::UserId;
pub use profile::{
    Counts, GameMap, Location, PresenceState, Profile, ProfileDetails, Status, Wishlist,
    COUNT_KEYS,
};
pub use wishlist::WishlistEntry;
