use super::{Badge, Game, UserId, WishlistEntry};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type Counts = BTreeMap<String, u64>;
pub type GameMap = BTreeMap<u64, Game>;
pub type Wishlist = BTreeMap<u64, WishlistEntry>;

/// Count labels that are always reported, even when the profile page omits
/// them.
pub const COUNT_KEYS: [&str; 10] = [
    "badges",
    "games",
    "screenshots",
    "videos",
    "workshopitems",
    "reviews",
    "guides",
    "artwork",
    "groups",
    "friends",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Country flag image.
    pub flag: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PresenceState {
    Online,
    Offline,
    InGame,
    /// Any other label, serialized as the bare label.
    #[serde(untagged)]
    Other(String),
}

impl From<&str> for PresenceState {
    fn from(label: &str) -> Self {
        match label {
            "online" => Self::Online,
            "offline" => Self::Offline,
            "in-game" => Self::InGame,
            other => Self::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub state: PresenceState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_online: Option<String>,
}

/// Everything a private profile hides.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileDetails {
    pub real_name: Option<String>,
    pub location: Option<Location>,
    pub status: Option<Status>,
    pub created: Option<i64>,
    pub level: Option<u64>,
    pub counts: Option<Counts>,
    pub badges: Option<Vec<Badge>>,
    pub favorite_badge: Option<Badge>,
    pub games: Option<GameMap>,
    pub recent_games: Option<Vec<Game>>,
    pub wishlist: Option<Wishlist>,
    pub aliases: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: UserId,
    pub url: String,
    pub persona: String,
    pub avatar: String,
    pub private: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub real_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    /// Account creation time in epoch milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counts: Option<Counts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badges: Option<Vec<Badge>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite_badge: Option<Badge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub games: Option<GameMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recent_games: Option<Vec<Game>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wishlist: Option<Wishlist>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<String>>,
}

impl Profile {
    pub fn new(id: UserId, url: String, persona: String, avatar: String, private: bool) -> Self {
        Self {
            id,
            url,
            persona,
            avatar,
            private,
            real_name: None,
            location: None,
            status: None,
            created: None,
            level: None,
            counts: None,
            badges: None,
            favorite_badge: None,
            games: None,
            recent_games: None,
            wishlist: None,
            aliases: None,
        }
    }

    /// Attaches the personal fields. Ignored for private profiles, which
    /// keep every personal field absent.
    pub fn with_details(mut self, details: ProfileDetails) -> Self {
        if self.private {
            return self;
        }

        self.real_name = details.real_name;
        self.location = details.location;
        self.status = details.status;
        self.created = details.created;
        self.level = details.level;
        self.counts = details.counts;
        self.badges = details.badges;
        self.favorite_badge = details.favorite_badge;
        self.games = details.games;
        self.recent_games = details.recent_games;
        self.wishlist = details.wishlist;
        self.aliases = details.aliases;
        self
    }

    pub fn has_personal_fields(&self) -> bool {
        self.real_name.is_some()
            || self.location.is_some()
            || self.status.is_some()
            || self.created.is_some()
            || self.level.is_some()
            || self.counts.is_some()
            || self.badges.is_some()
            || self.favorite_badge.is_some()
            || self.games.is_some()
            || self.recent_games.is_some()
            || self.wishlist.is_some()
            || self.aliases.is_some()
    }
}
