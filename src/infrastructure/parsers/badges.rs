use super::dates::{parse_stamp, trailing_year};
use super::text::{make_int, remove_all_ws};
use super::{first_text, is_classless, select_all, select_first, text_of, PageParser};
use crate::domain::Badge;
use crate::error::{ProfileError, Result};
use scraper::{ElementRef, Html};
use tracing::debug;

/// Parses the badge list. Stamps without a year are placed in
/// `reference_year`.
pub struct BadgesParser {
    pub reference_year: i32,
}

impl PageParser for BadgesParser {
    type Output = Vec<Badge>;

    fn parse(&self, document: &Html) -> Result<Vec<Badge>> {
        let mut badges = Vec::new();

        for row in select_all(document.root_element(), "div.badge_row_inner")? {
            // Rows without an unlock stamp are card sets still in progress
            let Some(unlocked) = first_text(row, "div.badge_info_unlocked")? else {
                debug!("Skipping badge row without unlock stamp");
                continue;
            };
            badges.push(self.parse_row(row, &unlocked)?);
        }

        Ok(badges)
    }
}

impl BadgesParser {
    fn parse_row(&self, row: ElementRef, unlocked: &str) -> Result<Badge> {
        let title = first_text(row, "div.badge_info_title")?
            .ok_or(ProfileError::MissingField("badge title"))?;

        // "Summer Sale 2019&nbsp;<span>View details</span>"
        let game = select_first(row, "div.badge_title")?
            .map(|el| {
                text_of(el)
                    .split('\u{a0}')
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_string()
            })
            .ok_or(ProfileError::MissingField("badge game"))?;

        let (level, xp) = parse_level_xp(row)?;
        let earned = parse_stamp(unlocked)?.to_millis(self.reference_year)?;

        Ok(Badge {
            title,
            game,
            xp,
            level,
            earned,
        })
    }
}

/// The classless div reads "Level 3, 300 XP" or just "100 XP".
fn parse_level_xp(row: ElementRef) -> Result<(Option<u64>, u64)> {
    let text = select_all(row, "div")?
        .into_iter()
        .filter(|div| is_classless(*div))
        .map(|div| remove_all_ws(&text_of(div)))
        .find(|text| !text.trim().is_empty())
        .ok_or(ProfileError::MissingField("badge xp"))?;

    let parts: Vec<&str> = text.split(',').collect();
    match parts.as_slice() {
        [level, xp] => Ok((Some(make_int(level)?), make_int(xp)?)),
        _ => Ok((None, make_int(&text)?)),
    }
}

/// Reads the account creation time from the "Years of Service" badge page.
/// The description carries the year the account was made; the unlock stamp
/// carries the month, day and time.
pub struct CreationTimeParser;

impl PageParser for CreationTimeParser {
    type Output = Option<i64>;

    fn parse(&self, document: &Html) -> Result<Option<i64>> {
        let root = document.root_element();
        let (Some(description), Some(unlocked)) = (
            first_text(root, "div.badge_description")?,
            first_text(root, "div.badge_info_unlocked")?,
        ) else {
            return Ok(None);
        };

        let description = remove_all_ws(&description);
        let year = trailing_year(&description).ok_or_else(|| {
            ProfileError::Parse(format!("no year in badge description '{description}'"))
        })?;

        parse_stamp(&unlocked)?.millis_in_year(year).map(Some)
    }
}
