use serde_json::Value;

use crate::app::domain::catalog::Catalog;
use crate::app::domain::request::RemapRequest;
use crate::app::infrastructure::error::{Result, SwapError};

/// A name mapping resolved against the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translation {
    pub request: RemapRequest,
    /// Pairs dropped because the old or new name is not in the catalog
    pub not_found: usize,
}

/// Parse the interactive input: a JSON object of old style name to new style
/// name. Key order is kept.
pub fn parse_name_mapping(json: &str) -> Result<Vec<(String, String)>> {
    let value: Value =
        serde_json::from_str(json).map_err(|e| SwapError::MalformedInput(e.to_string()))?;

    let Value::Object(map) = value else {
        return Err(SwapError::MalformedInput(
            "expected an object of style names".to_string(),
        ));
    };

    map.into_iter()
        .map(|(old, new)| match new {
            Value::String(new) => Ok((old, new)),
            other => Err(SwapError::MalformedInput(format!(
                "value for \"{}\" must be a style name, got {}",
                old, other
            ))),
        })
        .collect()
}

/// Resolve each `(old name, new name)` pair to style ids. Names match the
/// catalog ignoring case; pairs with either side missing are counted, not
/// raised.
pub fn translate<'a, I>(catalog: &Catalog, pairs: I) -> Translation
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut translation = Translation::default();

    for (old, new) in pairs {
        match (catalog.lookup(old), catalog.lookup(new)) {
            (Some(old_id), Some(new_id)) => {
                translation.request.insert(old_id.clone(), new_id.clone());
            }
            _ => {
                log::warn!("style pair \"{}\" -> \"{}\" not found", old, new);
                translation.not_found += 1;
            }
        }
    }

    translation
}
