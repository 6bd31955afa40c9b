use serde::{Deserialize, Serialize};

/// Requests the host delivers to a running session.
/// The UI panel posts `check-and-update`; the command palette supplies parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Message {
    /// Interactive mode: raw JSON text mapping old style names to new ones.
    CheckAndUpdate { json: String },

    /// Parameterized mode: a single old/new pair, either side possibly absent.
    RunWithParameters {
        #[serde(rename = "old-style", default)]
        old_style: Option<String>,
        #[serde(rename = "new-style", default)]
        new_style: Option<String>,
    },
}
