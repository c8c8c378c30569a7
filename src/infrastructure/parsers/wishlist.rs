use super::dates::parse_added_on;
use super::text::{make_int, parse_price};
use super::{first_text, select_all, select_first, PageParser};
use crate::domain::{Wishlist, WishlistEntry};
use crate::error::{ProfileError, Result};
use scraper::{ElementRef, Html};
use tracing::warn;

pub struct WishlistParser;

impl PageParser for WishlistParser {
    type Output = Wishlist;

    fn parse(&self, document: &Html) -> Result<Wishlist> {
        let mut wishlist = Wishlist::new();

        for (position, row) in select_all(document.root_element(), "div.wishlistRowItem")?
            .into_iter()
            .enumerate()
        {
            let Some(app_id) = parse_app_id(row)? else {
                warn!("Skipping wishlist row without an app id");
                continue;
            };

            let name = first_text(row, "h4.ellipsis")?
                .ok_or(ProfileError::MissingField("wishlist name"))?;

            // The discounted price wins over the list price
            let price_text = match first_text(row, "div.discount_final_price")? {
                Some(discounted) => Some(discounted),
                None => first_text(row, "div.price")?,
            };
            let price = match price_text {
                Some(text) => parse_price(&text)?,
                None => None,
            };

            let rank = match first_text(row, "div.wishlist_rank_ro")? {
                Some(rank) => make_int(&rank)?,
                None => position as u64 + 1,
            };

            let added = first_text(row, "div.wishlist_added_on")?
                .map(|text| text.replace("Added on ", "").trim().to_string())
                .unwrap_or_default();
            let added_on = parse_added_on(&added);

            wishlist.insert(
                app_id,
                WishlistEntry {
                    app_id,
                    name,
                    price,
                    rank,
                    added,
                    added_on,
                },
            );
        }

        Ok(wishlist)
    }
}

/// `<div class="popup_block2" id="popup_block_620">`, or the row's own
/// `data-app-id`.
fn parse_app_id(row: ElementRef) -> Result<Option<u64>> {
    let id = select_first(row, "div.popup_block2")?
        .and_then(|popup| popup.value().attr("id"))
        .or_else(|| row.value().attr("data-app-id"));

    id.map(make_int).transpose()
}
