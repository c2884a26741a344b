//! Library side of the `fiori-url` tool.
//!
//! Loads an SAP Fiori app list (`AppList.json`) into an immutable
//! [`AppCatalog`], finds apps by case-insensitive name substring, and formats
//! Fiori Launchpad deep links from a matched app's semantic object-action.
//!
//! Every operation takes the catalog explicitly; there is no process-wide
//! catalog. Discovery of the catalog file ([`runtime`]) and log setup
//! ([`logging`]) are CLI concerns kept out of the lookup path.

pub mod catalog;
pub mod error;
pub mod launchpad;
pub mod logging;
pub mod runtime;
mod schema_loader;

pub use catalog::{
    AppCatalog, AppDetails, AppId, AppRecord, AppSummary, DEFAULT_SEARCH_LIMIT, FullAppDetails,
    SemanticAction, load_app_list_from_path, parse_app_list,
};
pub use error::{FioriError, LoadFailure, Parameter, Result};
pub use launchpad::{
    DEFAULT_LANGUAGE, LAUNCHPAD_PATH, LaunchpadParams, UrlResult, app_details, build_url,
    format_launchpad_url,
};
pub use runtime::{APP_LIST_ENV, APP_LIST_FILE, find_app_list};
