use crate::error::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct RawAlias {
    newname: String,
}

/// Reads the past persona names from the `ajaxaliases/` JSON, newest first.
pub fn parse_aliases(body: &str) -> Result<Vec<String>> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    let aliases: Vec<RawAlias> = serde_json::from_str(body)?;
    Ok(aliases.into_iter().map(|alias| alias.newname).collect())
}
