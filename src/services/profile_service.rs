use crate::domain::{Badge, Game, GameMap, Profile, ProfileDetails, UserId};
use crate::error::Result;
use crate::infrastructure::{
    parse_aliases, BadgesParser, CommunityClient, CreationTimeParser, GamesParser, MainPageParser,
    PageParser, ProfilePages, WishlistParser,
};
use chrono::{Datelike, Utc};
use scraper::Html;
use tracing::info;

pub struct ProfileService {
    client: CommunityClient,
}

impl ProfileService {
    pub fn new(client: CommunityClient) -> Self {
        info!("Created new Profile service");
        Self { client }
    }

    pub async fn fetch(&self, user: &UserId) -> Result<Profile> {
        info!("Fetching profile {user}");
        let pages = self.client.fetch_pages(user).await?;

        let profile = build_profile(
            user,
            self.client.profile_url(user),
            &pages,
            Utc::now().year(),
        )?;
        info!(
            "Profile {user} built: persona '{}', private: {}",
            profile.persona, profile.private
        );
        Ok(profile)
    }
}

/// Assembles a profile from already fetched pages. Pure: the same pages and
/// `reference_year` always give the same profile.
pub fn build_profile(
    user: &UserId,
    url: String,
    pages: &ProfilePages,
    reference_year: i32,
) -> Result<Profile> {
    let main = MainPageParser.parse(&Html::parse_document(&pages.main))?;
    let profile = Profile::new(user.clone(), url, main.persona, main.avatar, main.private);
    if profile.private {
        return Ok(profile);
    }

    let badges = parse_page(pages.badges.as_deref(), &BadgesParser { reference_year })?;
    let created = parse_page(pages.first_badge.as_deref(), &CreationTimeParser)?.flatten();
    let games = parse_page(pages.games.as_deref(), &GamesParser)?.flatten();
    let wishlist = parse_page(pages.wishlist.as_deref(), &WishlistParser)?;
    let aliases = pages.aliases.as_deref().map(parse_aliases).transpose()?;

    let favorite_badge = match (&badges, &main.favorite_badge) {
        (Some(badges), Some(title)) => find_badge(badges, title),
        _ => None,
    };
    let recent_games = games
        .as_ref()
        .filter(|games| !games.is_empty())
        .map(|games| recent_games(games, &main.recent_games));

    info!(
        "Extracted {} badges, {} games, {} wishlist entries",
        badges.as_ref().map_or(0, Vec::len),
        games.as_ref().map_or(0, GameMap::len),
        wishlist.as_ref().map_or(0, |w| w.len()),
    );

    Ok(profile.with_details(ProfileDetails {
        real_name: main.real_name,
        location: main.location,
        status: main.status,
        created,
        level: main.level,
        counts: main.counts,
        badges,
        favorite_badge,
        games,
        recent_games,
        wishlist,
        aliases,
    }))
}

fn parse_page<P: PageParser>(body: Option<&str>, parser: &P) -> Result<Option<P::Output>> {
    body.map(|body| parser.parse(&Html::parse_document(body)))
        .transpose()
}

fn find_badge(badges: &[Badge], title: &str) -> Option<Badge> {
    badges.iter().find(|badge| badge.title == title).cloned()
}

/// Recently played games in the order the profile lists them. Names the
/// game list does not know are dropped.
fn recent_games(games: &GameMap, names: &[String]) -> Vec<Game> {
    names
        .iter()
        .filter_map(|name| games.values().find(|game| &game.name == name))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(app_id: u64, name: &str) -> Game {
        Game {
            app_id,
            name: name.to_string(),
            logo: String::new(),
            hours: 1.0,
            recent_hours: 0.0,
            last_played: 0,
        }
    }

    #[test]
    fn recent_games_follow_page_order() {
        let games: GameMap = [game(620, "Portal 2"), game(570, "Dota 2"), game(10, "CS")]
            .into_iter()
            .map(|g| (g.app_id, g))
            .collect();
        let names = vec![
            "Dota 2".to_string(),
            "Unknown".to_string(),
            "Portal 2".to_string(),
        ];

        let recent = recent_games(&games, &names);
        let ids: Vec<u64> = recent.iter().map(|g| g.app_id).collect();
        assert_eq!(ids, vec![570, 620]);
    }

    #[test]
    fn favorite_badge_by_title() {
        let badge = Badge {
            title: "Pillar of Community".to_string(),
            game: "Community".to_string(),
            xp: 100,
            level: None,
            earned: 0,
        };
        let badges = vec![badge.clone()];
        assert_eq!(find_badge(&badges, "Pillar of Community"), Some(badge));
        assert_eq!(find_badge(&badges, "Other"), None);
    }
}
