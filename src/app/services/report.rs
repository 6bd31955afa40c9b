use crate::app::domain::request::RemapResult;

pub const FORMAT_ERROR: &str = "Wrong format. Please try again.";
pub const MISSING_PARAMETER: &str =
    "One of the parameters was not correctly specified. Please try again.";

/// The status line shown to the user after a remap.
pub fn status_message(result: &RemapResult) -> String {
    match (result.updated, result.not_found) {
        (0, 0) => "No nodes updated. The document does not use those styles.".to_string(),
        (0, missing) => format!("No nodes updated. {} styles not found.", missing),
        (updated, 0) => format!("Styles swapped successfully. {} nodes updated.", updated),
        (updated, missing) => format!(
            "Styles swapped. {} nodes updated, {} styles not found.",
            updated, missing
        ),
    }
}
