use crate::app::domain::catalog::{Catalog, StyleCatalogEntry};
use crate::app::domain::messages::Message;
use crate::app::domain::request::RemapResult;
use crate::app::domain::settings::SwapSettings;
use crate::app::infrastructure::error::{Result, SwapError};
use crate::app::infrastructure::host::{StyleHost, YieldPoint};
use crate::app::services::catalog::build_catalog;
use crate::app::services::remap::remap_styles;
use crate::app::services::report::{status_message, FORMAT_ERROR, MISSING_PARAMETER};
use crate::app::services::translate::{parse_name_mapping, translate};

/// How a dispatched request ended. The host has already been notified with
/// `message` and the session is closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    /// `None` when the input was rejected before any remap ran
    pub result: Option<RemapResult>,
    pub message: String,
}

/// One plugin session: the catalog is built once when it starts and every
/// request in the session resolves names against it.
pub struct Session {
    catalog: Catalog,
    settings: SwapSettings,
    closed: bool,
}

impl Session {
    pub fn start<H: StyleHost + ?Sized>(
        host: &H,
        settings: SwapSettings,
        yielder: &mut dyn YieldPoint,
    ) -> Self {
        let catalog = build_catalog(host, &settings, yielder);
        Self {
            catalog,
            settings,
            closed: false,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Autocomplete for style name inputs.
    pub fn suggest(&self, query: &str) -> Vec<&StyleCatalogEntry> {
        self.catalog.suggest(query)
    }

    /// Handle one request from the host. Every path notifies the user and
    /// closes the session; only host write-back failures come back as `Err`.
    pub fn dispatch<H: StyleHost + ?Sized>(
        &mut self,
        host: &mut H,
        message: Message,
    ) -> Result<SessionOutcome> {
        if self.closed {
            return Err(SwapError::SessionClosed);
        }

        let pairs = match message {
            Message::CheckAndUpdate { json } => match parse_name_mapping(&json) {
                Ok(pairs) => pairs,
                Err(e) => {
                    log::warn!("rejected mapping: {}", e);
                    return Ok(self.reject(host, FORMAT_ERROR));
                }
            },
            Message::RunWithParameters {
                old_style,
                new_style,
            } => match (non_blank(old_style), non_blank(new_style)) {
                (Some(old), Some(new)) => vec![(old, new)],
                (old, _) => {
                    let missing = if old.is_none() { "old-style" } else { "new-style" };
                    log::warn!("parameter {} missing", missing);
                    return Ok(self.reject(host, MISSING_PARAMETER));
                }
            },
        };

        match self.apply(host, &pairs) {
            Ok(result) => {
                let message = status_message(&result);
                self.finish(host, &message);
                Ok(SessionOutcome {
                    result: Some(result),
                    message,
                })
            }
            Err(e) => {
                self.finish(host, &format!("Style swap failed: {}", e));
                Err(e)
            }
        }
    }

    fn apply<H: StyleHost + ?Sized>(
        &self,
        host: &mut H,
        pairs: &[(String, String)],
    ) -> Result<RemapResult> {
        let translation = translate(
            &self.catalog,
            pairs.iter().map(|(old, new)| (old.as_str(), new.as_str())),
        );
        let updated = remap_styles(host, &translation.request, &self.settings)?;

        Ok(RemapResult {
            updated,
            not_found: translation.not_found,
        })
    }

    fn reject<H: StyleHost + ?Sized>(&mut self, host: &mut H, message: &str) -> SessionOutcome {
        self.finish(host, message);
        SessionOutcome {
            result: None,
            message: message.to_string(),
        }
    }

    fn finish<H: StyleHost + ?Sized>(&mut self, host: &mut H, message: &str) {
        host.notify(message);
        host.close();
        self.closed = true;
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
