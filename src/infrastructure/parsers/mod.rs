use crate::error::{ProfileError, Result};
use scraper::{ElementRef, Html, Selector};

pub(crate) mod aliases;
pub(crate) mod badges;
pub(crate) mod dates;
pub(crate) mod games;
pub(crate) mod main_page;
pub(crate) mod text;
pub(crate) mod wishlist;

/// Extracts one page's worth of data from a parsed community page.
pub trait PageParser {
    type Output;

    fn parse(&self, document: &Html) -> Result<Self::Output>;
}

pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ProfileError::Selector(e.to_string()))
}

pub(crate) fn select_first<'a>(scope: ElementRef<'a>, css: &str) -> Result<Option<ElementRef<'a>>> {
    let selector = selector(css)?;
    let found = scope.select(&selector).next();
    Ok(found)
}

pub(crate) fn select_all<'a>(scope: ElementRef<'a>, css: &str) -> Result<Vec<ElementRef<'a>>> {
    let selector = selector(css)?;
    Ok(scope.select(&selector).collect())
}

pub(crate) fn text_of(element: ElementRef) -> String {
    element.text().collect::<String>()
}

/// Trimmed text of the first match, if any.
pub(crate) fn first_text(scope: ElementRef, css: &str) -> Result<Option<String>> {
    Ok(select_first(scope, css)?.map(|el| text_of(el).trim().to_string()))
}

/// True when the element has no `class` attribute or an empty one.
pub(crate) fn is_classless(element: ElementRef) -> bool {
    element
        .value()
        .attr("class")
        .map_or(true, |class| class.trim().is_empty())
}
