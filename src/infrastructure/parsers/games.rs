use super::text::{make_float, make_int, remove_all_ws};
use super::{select_all, select_first, text_of, PageParser};
use crate::domain::{Game, GameMap};
use crate::error::{ProfileError, Result};
use scraper::Html;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

const ICON_URL_BASE: &str = "https://cdn.cloudflare.steamstatic.com/steamcommunity/public/images/apps";

/// JSON numbers and numeric strings ("1,234.5") both show up in the game list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NumOrText {
    Num(f64),
    Text(String),
}

impl NumOrText {
    /// Playtime is never negative, whichever unit it comes in.
    fn as_f64(&self) -> Result<f64> {
        let value = match self {
            Self::Num(n) => *n,
            Self::Text(text) => make_float(text)?,
        };
        if value.is_finite() && value >= 0.0 {
            Ok(value)
        } else {
            Err(ProfileError::Parse(format!("invalid playtime {value}")))
        }
    }

    fn as_u64(&self) -> Result<u64> {
        match self {
            Self::Num(n) if *n >= 0.0 && *n < u64::MAX as f64 && n.fract() == 0.0 => Ok(*n as u64),
            Self::Num(n) => Err(ProfileError::Parse(format!("invalid integer {n}"))),
            Self::Text(text) => make_int(text),
        }
    }
}

/// One entry of `rgGames`. The legacy script embed reports hours as text,
/// the newer template embed reports playtime in minutes.
#[derive(Debug, Deserialize)]
struct RawGame {
    appid: NumOrText,
    name: String,
    logo: Option<String>,
    img_icon_url: Option<String>,
    hours_forever: Option<NumOrText>,
    hours: Option<NumOrText>,
    playtime_forever: Option<NumOrText>,
    playtime_2weeks: Option<NumOrText>,
    last_played: Option<NumOrText>,
    rtime_last_played: Option<NumOrText>,
}

impl RawGame {
    fn into_game(self) -> Result<Game> {
        let app_id = self.appid.as_u64()?;

        let hours = match (&self.hours_forever, &self.playtime_forever) {
            (Some(hours), _) => hours.as_f64()?,
            (None, Some(minutes)) => minutes.as_f64()? / 60.0,
            (None, None) => 0.0,
        };
        let recent_hours = match (&self.hours, &self.playtime_2weeks) {
            (Some(hours), _) => hours.as_f64()?,
            (None, Some(minutes)) => minutes.as_f64()? / 60.0,
            (None, None) => 0.0,
        };
        let last_played = match self.last_played.as_ref().or(self.rtime_last_played.as_ref()) {
            Some(seconds) => {
                let seconds = seconds.as_u64()?;
                i64::try_from(seconds)
                    .ok()
                    .and_then(|s| s.checked_mul(1000))
                    .ok_or_else(|| {
                        ProfileError::Parse(format!("last played {seconds} out of range"))
                    })?
            }
            None => 0,
        };

        let logo = match (self.logo, self.img_icon_url) {
            (Some(logo), _) => logo,
            (None, Some(hash)) if !hash.is_empty() => format!("{ICON_URL_BASE}/{app_id}/{hash}.jpg"),
            _ => String::new(),
        };

        Ok(Game {
            app_id,
            name: self.name,
            logo,
            hours,
            recent_hours,
            last_played,
        })
    }
}

/// Parses the "All games" page. The list is embedded as JSON either in the
/// `data-profile-gameslist` attribute of the list template or in the last
/// inline script. Returns `None` when neither embed can be found.
pub struct GamesParser;

impl PageParser for GamesParser {
    type Output = Option<GameMap>;

    fn parse(&self, document: &Html) -> Result<Option<GameMap>> {
        let embedded = match template_games(document)? {
            Some(games) => Some(games),
            None => script_games(document)?,
        };
        let Some(raw_games) = embedded else {
            debug!("No game list embedded in games page");
            return Ok(None);
        };

        let mut games = GameMap::new();
        for raw in raw_games {
            let raw: RawGame = match serde_json::from_value(raw) {
                Ok(raw) => raw,
                Err(e) => {
                    warn!("Skipping malformed game entry: {e}");
                    continue;
                }
            };
            let game = raw.into_game()?;
            games.insert(game.app_id, game);
        }

        Ok(Some(games))
    }
}

fn template_games(document: &Html) -> Result<Option<Vec<Value>>> {
    let Some(config) = select_first(document.root_element(), "[data-profile-gameslist]")?
        .and_then(|el| el.value().attr("data-profile-gameslist"))
    else {
        return Ok(None);
    };

    match serde_json::from_str::<Value>(config) {
        Ok(Value::Object(mut object)) => match object.remove("rgGames") {
            Some(Value::Array(games)) => Ok(Some(games)),
            _ => Ok(None),
        },
        Ok(_) => Ok(None),
        Err(e) => {
            warn!("Unreadable games list template: {e}");
            Ok(None)
        }
    }
}

fn script_games(document: &Html) -> Result<Option<Vec<Value>>> {
    let Some(script) = select_all(document.root_element(), "script")?.into_iter().last() else {
        return Ok(None);
    };
    let raw = remove_all_ws(&text_of(script));
    let Some(start) = raw.find("[{") else {
        return Ok(None);
    };

    // Reads exactly one JSON array and ignores the script that follows it
    let mut stream = serde_json::Deserializer::from_str(&raw[start..]).into_iter::<Vec<Value>>();
    match stream.next() {
        Some(Ok(games)) => Ok(Some(games)),
        Some(Err(e)) => {
            warn!("Unreadable games list script: {e}");
            Ok(None)
        }
        None => Ok(None),
    }
}
