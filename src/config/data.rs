use std::{fs::File, io::BufReader, path::Path};

use crate::{
    caption::model::GroupSpec,
    foundation::error::{RevealError, RevealResult},
};

/// Parse caption groups from a JSON reader.
///
/// The document is an array of groups; a bare `null` reads as no groups.
pub fn groups_from_reader<R: std::io::Read>(r: R) -> RevealResult<Vec<GroupSpec>> {
    let groups: Option<Vec<GroupSpec>> = serde_json::from_reader(r)
        .map_err(|e| RevealError::serde(format!("parse caption data JSON: {e}")))?;
    Ok(groups.unwrap_or_default())
}

/// Parse caption groups from a JSON file on disk.
pub fn load_groups(path: impl AsRef<Path>) -> RevealResult<Vec<GroupSpec>> {
    let path = path.as_ref();
    let f = File::open(path).map_err(|e| {
        RevealError::validation(format!("open caption data JSON '{}': {e}", path.display()))
    })?;
    let groups = groups_from_reader(BufReader::new(f))?;
    tracing::info!(path = %path.display(), groups = groups.len(), "read caption data");
    Ok(groups)
}

#[cfg(test)]
#[path = "../../tests/unit/config/data.rs"]
mod tests;
