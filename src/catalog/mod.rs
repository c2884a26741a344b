//! App list catalog wiring.
//!
//! This module wraps `AppList.json` so callers can load an immutable snapshot
//! once and run name lookups against it. `model` mirrors the file's columns,
//! `AppCatalog` owns the loaded records, and `projection` holds the views
//! handed back to callers.

pub mod identity;
pub mod index;
pub mod model;
pub mod projection;

pub use identity::{AppId, SemanticAction};
pub use index::{AppCatalog, DEFAULT_SEARCH_LIMIT};
pub use model::{AppRecord, parse_app_list};
pub use projection::{AppDetails, AppSummary, FullAppDetails};

pub use model::load_app_list_from_path;
