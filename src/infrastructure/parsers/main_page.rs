use super::text::{make_int, squash_ws};
use super::{first_text, select_all, select_first, text_of, PageParser};
use crate::domain::{Counts, Location, PresenceState, Status, COUNT_KEYS};
use crate::error::{ProfileError, Result};
use scraper::{ElementRef, Html};

/// Fields read from the profile's landing page.
#[derive(Debug, Clone, PartialEq)]
pub struct MainPage {
    pub private: bool,
    pub persona: String,
    pub avatar: String,
    pub real_name: Option<String>,
    pub location: Option<Location>,
    pub status: Option<Status>,
    pub level: Option<u64>,
    pub counts: Option<Counts>,
    /// Title of the showcased badge.
    pub favorite_badge: Option<String>,
    /// Names of the recently played games, in page order.
    pub recent_games: Vec<String>,
}

pub struct MainPageParser;

impl PageParser for MainPageParser {
    type Output = MainPage;

    fn parse(&self, document: &Html) -> Result<MainPage> {
        let root = document.root_element();
        if is_error_page(document)? {
            return Err(ProfileError::Fetch(
                "community returned an error page".to_string(),
            ));
        }

        let private = is_private(document)?;
        let persona = first_text(root, "span.actual_persona_name")?
            .ok_or(ProfileError::MissingField("persona"))?;
        let avatar = parse_avatar(root)?.ok_or(ProfileError::MissingField("avatar"))?;

        if private {
            return Ok(MainPage {
                private,
                persona,
                avatar,
                real_name: None,
                location: None,
                status: None,
                level: None,
                counts: None,
                favorite_badge: None,
                recent_games: Vec::new(),
            });
        }

        let header = select_first(root, "div.header_real_name")?;
        Ok(MainPage {
            private,
            persona,
            avatar,
            real_name: header.map(parse_real_name).transpose()?.flatten(),
            location: header.map(parse_location).transpose()?.flatten(),
            status: parse_status(root)?,
            level: parse_level(root)?,
            counts: Some(parse_counts(root)?),
            favorite_badge: first_text(root, "div.favorite_badge div.name a.whiteLink")?,
            recent_games: parse_recent_games(root)?,
        })
    }
}

/// Error pages keep the site chrome but are titled "Steam Community :: Error".
/// Only the last title segment is checked so a persona named "Error..." is
/// not mistaken for one.
pub fn is_error_page(document: &Html) -> Result<bool> {
    let title = first_text(document.root_element(), "title")?.unwrap_or_default();
    let tail = title.rsplit("::").next().unwrap_or_default().trim();
    Ok(tail.eq_ignore_ascii_case("error"))
}

pub fn is_private(document: &Html) -> Result<bool> {
    Ok(select_first(document.root_element(), "div.profile_private_info")?.is_some())
}

// Avatar frames add a leading <img>; the avatar itself is always the last one.
fn parse_avatar(root: ElementRef) -> Result<Option<String>> {
    Ok(select_all(root, "div.playerAvatarAutoSizeInner img")?
        .into_iter()
        .filter_map(|img| img.value().attr("src"))
        .last()
        .map(str::to_string))
}

fn parse_real_name(header: ElementRef) -> Result<Option<String>> {
    Ok(first_text(header, "bdi")?.filter(|name| !name.is_empty()))
}

fn parse_location(header: ElementRef) -> Result<Option<Location>> {
    let Some(flag) = select_first(header, "img")?.and_then(|img| img.value().attr("src")) else {
        return Ok(None);
    };

    let text = header
        .children()
        .filter_map(|node| node.value().as_text())
        .map(|text| text.trim())
        .filter(|text| !text.is_empty())
        .last()
        .unwrap_or_default()
        .to_string();

    Ok(Some(Location {
        flag: flag.to_string(),
        text,
    }))
}

fn parse_status(root: ElementRef) -> Result<Option<Status>> {
    let Some(header) = first_text(root, "div.profile_in_game_header")? else {
        return Ok(None);
    };
    let label = squash_ws(&header.replace("Currently ", "")).to_lowercase();
    let detail = first_text(root, "div.profile_in_game_name")?.filter(|d| !d.is_empty());

    let state = PresenceState::from(label.as_str());
    let (game, last_online) = match (&state, detail) {
        (PresenceState::Offline, Some(detail)) => (
            None,
            Some(squash_ws(&detail.replace("Last Online ", "")).to_lowercase()),
        ),
        (PresenceState::InGame, Some(detail)) => (Some(squash_ws(&detail)), None),
        _ => (None, None),
    };

    Ok(Some(Status {
        state,
        game,
        last_online,
    }))
}

fn parse_level(root: ElementRef) -> Result<Option<u64>> {
    first_text(root, "span.friendPlayerLevelNum")?
        .map(|level| make_int(&level))
        .transpose()
}

fn parse_counts(root: ElementRef) -> Result<Counts> {
    let mut counts: Counts = COUNT_KEYS.iter().map(|key| (key.to_string(), 0)).collect();

    for link in select_all(root, "div.profile_count_link")? {
        let (Some(label), Some(total)) = (
            first_text(link, "span.count_link_label")?,
            first_text(link, "span.profile_count_link_total")?,
        ) else {
            continue;
        };

        // "Workshop Items" is reported as "workshopitems"
        let key: String = label
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        if key == "inventory" || key.is_empty() {
            continue;
        }
        counts.insert(key, make_int(&total)?);
    }

    Ok(counts)
}

fn parse_recent_games(root: ElementRef) -> Result<Vec<String>> {
    Ok(
        select_all(root, "div.recent_game_content div.game_name a.whiteLink")?
            .into_iter()
            .map(|link| text_of(link).trim().to_string())
            .filter(|name| !name.is_empty())
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUBLIC: &str = r#"
        <html><head><title>Steam Community :: Gaben</title></head><body>
        <div class="playerAvatarAutoSizeInner">
            <div class="profile_avatar_frame"><img src="https://cdn.example/frame.png"></div>
            <picture><img src="https://avatars.example/gaben_full.jpg"></picture>
        </div>
        <span class="actual_persona_name">Gaben</span>
        <div class="header_real_name ellipsis">
            <bdi>Gabe Newell</bdi>
            &nbsp;<img class="profile_flag" src="https://cdn.example/flags/us.gif">
            Bellevue, Washington, United States
        </div>
        <div class="profile_in_game persona in-game">
            <div class="profile_in_game_header">Currently In-Game</div>
            <div class="profile_in_game_name">Half-Life 3</div>
        </div>
        <span class="friendPlayerLevelNum">1,337</span>
        <div class="profile_count_link ellipsis"><a><span class="count_link_label">Badges</span>&nbsp;<span class="profile_count_link_total">42</span></a></div>
        <div class="profile_count_link ellipsis"><a><span class="count_link_label">Inventory</span>&nbsp;<span class="profile_count_link_total"></span></a></div>
        <div class="profile_count_link ellipsis"><a><span class="count_link_label">Workshop Items</span>&nbsp;<span class="profile_count_link_total">3</span></a></div>
        <div class="profile_count_link ellipsis"><a><span class="count_link_label">Friends</span>&nbsp;<span class="profile_count_link_total"> 1,024 </span></a></div>
        <div class="favorite_badge"><div class="name ellipsis"><a class="whiteLink">Pillar of Community</a></div></div>
        <div class="recent_game_content"><div class="game_name"><a class="whiteLink"> Portal 2 </a></div></div>
        <div class="recent_game_content"><div class="game_name"><a class="whiteLink">Dota 2</a></div></div>
        </body></html>
    "#;

    const PRIVATE: &str = r#"
        <html><head><title>Steam Community :: Hidden</title></head><body>
        <div class="playerAvatarAutoSizeInner"><img src="https://avatars.example/hidden.jpg"></div>
        <span class="actual_persona_name">Hidden</span>
        <div class="header_real_name ellipsis"><bdi>Secret Name</bdi></div>
        <span class="friendPlayerLevelNum">10</span>
        <div class="profile_private_info">This profile is private.</div>
        </body></html>
    "#;

    fn parse(html: &str) -> Result<MainPage> {
        MainPageParser.parse(&Html::parse_document(html))
    }

    #[test]
    fn public_profile_fields() {
        let page = parse(PUBLIC).unwrap();
        assert!(!page.private);
        assert_eq!(page.persona, "Gaben");
        assert_eq!(page.avatar, "https://avatars.example/gaben_full.jpg");
        assert_eq!(page.real_name.as_deref(), Some("Gabe Newell"));
        assert_eq!(
            page.location,
            Some(Location {
                flag: "https://cdn.example/flags/us.gif".to_string(),
                text: "Bellevue, Washington, United States".to_string(),
            })
        );
        assert_eq!(page.level, Some(1337));
        assert_eq!(page.favorite_badge.as_deref(), Some("Pillar of Community"));
        assert_eq!(page.recent_games, vec!["Portal 2", "Dota 2"]);
    }

    #[test]
    fn in_game_status() {
        let status = parse(PUBLIC).unwrap().status.unwrap();
        assert_eq!(status.state, PresenceState::InGame);
        assert_eq!(status.game.as_deref(), Some("Half-Life 3"));
        assert_eq!(status.last_online, None);
    }

    #[test]
    fn offline_status_keeps_last_online() {
        let html = r#"<html><head><title>x</title></head><body>
            <div class="playerAvatarAutoSizeInner"><img src="a.jpg"></div>
            <span class="actual_persona_name">P</span>
            <div class="profile_in_game_header">Currently Offline</div>
            <div class="profile_in_game_name">Last Online 3 days ago</div>
            </body></html>"#;
        let status = parse(html).unwrap().status.unwrap();
        assert_eq!(status.state, PresenceState::Offline);
        assert_eq!(status.last_online.as_deref(), Some("3 days ago"));
        assert_eq!(status.game, None);
    }

    #[test]
    fn counts_default_and_skip_inventory() {
        let counts = parse(PUBLIC).unwrap().counts.unwrap();
        assert_eq!(counts["badges"], 42);
        assert_eq!(counts["workshopitems"], 3);
        assert_eq!(counts["friends"], 1024);
        assert_eq!(counts["games"], 0);
        assert!(!counts.contains_key("inventory"));
        assert_eq!(counts.len(), COUNT_KEYS.len());
    }

    #[test]
    fn private_profile_hides_personal_fields() {
        let page = parse(PRIVATE).unwrap();
        assert!(page.private);
        assert_eq!(page.persona, "Hidden");
        assert_eq!(page.avatar, "https://avatars.example/hidden.jpg");
        assert_eq!(page.real_name, None);
        assert_eq!(page.level, None);
        assert_eq!(page.counts, None);
        assert!(page.recent_games.is_empty());
    }

    #[test]
    fn missing_optional_nodes_are_absent() {
        let html = r#"<html><head><title>x</title></head><body>
            <div class="playerAvatarAutoSizeInner"><img src="a.jpg"></div>
            <span class="actual_persona_name">P</span>
            <div class="header_real_name ellipsis"><bdi></bdi></div>
            </body></html>"#;
        let page = parse(html).unwrap();
        assert_eq!(page.real_name, None);
        assert_eq!(page.location, None);
        assert_eq!(page.status, None);
        assert_eq!(page.level, None);
        assert_eq!(page.favorite_badge, None);
    }

    #[test]
    fn unreadable_level_is_an_error() {
        let html = r#"<html><head><title>x</title></head><body>
            <div class="playerAvatarAutoSizeInner"><img src="a.jpg"></div>
            <span class="actual_persona_name">P</span>
            <span class="friendPlayerLevelNum">??</span>
            </body></html>"#;
        assert!(matches!(parse(html), Err(ProfileError::Parse(_))));
    }

    #[test]
    fn missing_persona_is_an_error() {
        let html = r#"<html><head><title>x</title></head><body>
            <div class="playerAvatarAutoSizeInner"><img src="a.jpg"></div>
            </body></html>"#;
        assert!(matches!(
            parse(html),
            Err(ProfileError::MissingField("persona"))
        ));
    }

    #[test]
    fn error_pages_are_fetch_errors() {
        let html = "<html><head><title>Steam Community :: Error</title></head><body></body></html>";
        assert!(matches!(parse(html), Err(ProfileError::Fetch(_))));
    }
}
