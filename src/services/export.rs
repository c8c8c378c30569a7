use crate::domain::Profile;
use crate::error::Result;
use std::path::Path;
use tracing::info;

pub fn render_profile(profile: &Profile) -> Result<String> {
    Ok(serde_json::to_string_pretty(profile)?)
}

/// Writes the profile as pretty JSON to `output`, or to stdout when no path
/// is given. Parent directories are created as needed.
pub fn write_profile(profile: &Profile, output: Option<&Path>) -> Result<()> {
    let content = render_profile(profile)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, content)?;
            info!("Saved profile {} to {:?}", profile.id, path);
        }
        None => println!("{content}"),
    }

    Ok(())
}
