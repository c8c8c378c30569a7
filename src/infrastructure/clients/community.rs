use crate::domain::UserId;
use crate::error::{ProfileError, Result};
use crate::infrastructure::parsers::main_page::{is_error_page, is_private};
use reqwest::Client;
use scraper::Html;
use tracing::{debug, info};

pub const DEFAULT_BASE_URL: &str = "https://steamcommunity.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfilePage {
    Main,
    /// The "Years of Service" badge, which dates the account.
    FirstBadge,
    Badges,
    Games,
    Wishlist,
    Aliases,
}

impl ProfilePage {
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Main => "",
            Self::FirstBadge => "badges/1/",
            Self::Badges => "badges/",
            Self::Games => "games/?tab=all",
            Self::Wishlist => "wishlist/",
            Self::Aliases => "ajaxaliases/",
        }
    }
}

/// Raw bodies of every page a profile is built from. Private profiles only
/// carry the main page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfilePages {
    pub main: String,
    pub first_badge: Option<String>,
    pub badges: Option<String>,
    pub games: Option<String>,
    pub wishlist: Option<String>,
    pub aliases: Option<String>,
}

impl ProfilePages {
    pub fn main_only(main: String) -> Self {
        Self {
            main,
            ..Default::default()
        }
    }
}

pub struct CommunityClient {
    client: Client,
    base_url: String,
}

impl CommunityClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        info!("Created new Community client for {base_url}");
        Self { client, base_url }
    }

    pub fn profile_url(&self, user: &UserId) -> String {
        format!("{}/{}", self.base_url, user.profile_path())
    }

    pub fn page_url(&self, user: &UserId, page: ProfilePage) -> String {
        format!("{}{}", self.profile_url(user), page.suffix())
    }

    pub async fn fetch_page(&self, user: &UserId, page: ProfilePage) -> Result<String> {
        let url = self.page_url(user, page);
        debug!("Fetching {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ProfileError::Fetch(format!("{url} unreachable: {e}")))?;
        if !response.status().is_success() {
            return Err(ProfileError::Fetch(format!(
                "{url} returned {}",
                response.status()
            )));
        }

        Ok(response.text().await?)
    }

    /// Fetches the main page and, unless the profile is private, the pages
    /// behind it. Error pages stop the fetch before anything else is requested.
    pub async fn fetch_pages(&self, user: &UserId) -> Result<ProfilePages> {
        let main = self.fetch_page(user, ProfilePage::Main).await?;

        let private = {
            let document = Html::parse_document(&main);
            if is_error_page(&document)? {
                return Err(ProfileError::Fetch(format!(
                    "no community profile for '{user}'"
                )));
            }
            is_private(&document)?
        };

        if private {
            info!("Profile {user} is private, skipping detail pages");
            return Ok(ProfilePages::main_only(main));
        }

        Ok(ProfilePages {
            main,
            first_badge: Some(self.fetch_page(user, ProfilePage::FirstBadge).await?),
            badges: Some(self.fetch_page(user, ProfilePage::Badges).await?),
            games: Some(self.fetch_page(user, ProfilePage::Games).await?),
            wishlist: Some(self.fetch_page(user, ProfilePage::Wishlist).await?),
            aliases: Some(self.fetch_page(user, ProfilePage::Aliases).await?),
        })
    }
}
