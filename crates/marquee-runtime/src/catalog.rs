use std::path::Path;

use marquee_types::Catalog;

use crate::{Error, Result};

/// Load the festival programme from its JSON export.
///
/// The export format is owned by the festival; unknown fields are ignored
/// and absent flags default, so minor schema drift between festival years
/// does not break loading.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path).map_err(|err| {
        Error::Catalog(format!(
            "Failed to read catalog file {}: {}",
            path.display(),
            err
        ))
    })?;

    serde_json::from_str(&content).map_err(|err| {
        Error::Catalog(format!(
            "Failed to parse catalog file {}: {}",
            path.display(),
            err
        ))
    })
}
