//! Fiori Launchpad deep links.
//!
//! A deep link addresses the launchpad shell on an SAP server and names the
//! target app by its semantic object-action after `#`:
//!
//! ```text
//! {base}/sap/bc/ui2/flp?sap-client={client}&sap-language={language}#{Object-action}
//! ```
//!
//! Components are inserted literally. Base URLs, client numbers, and language
//! keys are short tokens the user types in, and semantic actions come from the
//! catalog already URL-safe, so nothing is percent-encoded.

use crate::catalog::{AppCatalog, AppDetails, FullAppDetails, SemanticAction};
use crate::error::{FioriError, Parameter, Result};
use serde::Serialize;
use tracing::debug;

/// Launchpad path below the server base URL.
pub const LAUNCHPAD_PATH: &str = "/sap/bc/ui2/flp";

/// Logon language used when the caller does not pick one.
pub const DEFAULT_LANGUAGE: &str = "EN";

/// Connection parameters for a target SAP system.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LaunchpadParams<'a> {
    pub base_url: &'a str,
    pub client: &'a str,
    pub language: &'a str,
}

impl<'a> LaunchpadParams<'a> {
    /// Parameters with the default logon language.
    pub fn new(base_url: &'a str, client: &'a str) -> Self {
        Self {
            base_url,
            client,
            language: DEFAULT_LANGUAGE,
        }
    }

    pub fn with_language(mut self, language: &'a str) -> Self {
        self.language = language;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(FioriError::MissingParameter(Parameter::BaseUrl));
        }
        if self.client.is_empty() {
            return Err(FioriError::MissingParameter(Parameter::Client));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Generated link plus the app it points at.
pub struct UrlResult {
    pub url: String,
    pub app_details: AppDetails,
}

/// Format a launchpad URL without touching the catalog.
///
/// Exactly one trailing `/` is dropped from `base_url`; repeated separators
/// are left alone.
pub fn format_launchpad_url(params: &LaunchpadParams<'_>, action: &SemanticAction) -> String {
    let base = params.base_url.strip_suffix('/').unwrap_or(params.base_url);
    format!(
        "{base}{LAUNCHPAD_PATH}?sap-client={}&sap-language={}#{}",
        params.client,
        params.language,
        action.as_str()
    )
}

/// Resolve `app_name` in the catalog and build its launchpad URL.
///
/// Parameters are checked before the lookup, so an empty base URL or client
/// fails even when the app name would not match anything.
pub fn build_url(
    catalog: &AppCatalog,
    params: &LaunchpadParams<'_>,
    app_name: &str,
) -> Result<UrlResult> {
    params.validate()?;

    let record = catalog
        .find_first(app_name)
        .ok_or_else(|| FioriError::AppNotFound {
            app_name: app_name.to_string(),
        })?;

    let action =
        record
            .semantic_action
            .as_ref()
            .ok_or_else(|| FioriError::MissingSemanticAction {
                app_name: record.name_or_empty().to_string(),
                app_id: record.id_or_empty().to_string(),
            })?;

    let url = format_launchpad_url(params, action);
    debug!(app = record.name_or_empty(), %url, "built launchpad url");
    Ok(UrlResult {
        url,
        app_details: AppDetails::from(record),
    })
}

/// Full catalog details for the first app matching `app_name`.
pub fn app_details(catalog: &AppCatalog, app_name: &str) -> Result<FullAppDetails> {
    catalog
        .find_first(app_name)
        .map(FullAppDetails::from)
        .ok_or_else(|| FioriError::AppNotFound {
            app_name: app_name.to_string(),
        })
}
