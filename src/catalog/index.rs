//! Read-only, searchable view of a loaded app list.
//!
//! The catalog keeps records in file order and derives a case-folded name
//! column once at construction. Lookups are linear scans over that column:
//! catalogs hold a few thousand entries and every query is a substring match,
//! so there is nothing a keyed index would speed up.

use crate::catalog::model::{AppRecord, load_app_list_from_path};
use crate::catalog::projection::AppSummary;
use crate::error::Result;
use std::path::Path;
use tracing::{debug, info};

/// Result limit used by the search command when the caller gives none.
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

#[derive(Debug, Clone, Default)]
/// Ordered app records plus their folded names.
pub struct AppCatalog {
    records: Vec<AppRecord>,
    folded_names: Vec<Option<String>>,
}

impl AppCatalog {
    /// Load the catalog from an `AppList.json` file.
    pub fn load(path: &Path) -> Result<Self> {
        let records = load_app_list_from_path(path)?;
        let catalog = Self::from_records(records);
        info!(
            apps = catalog.len(),
            path = %path.display(),
            "loaded app list"
        );
        Ok(catalog)
    }

    /// Build a catalog from records already in memory.
    pub fn from_records(records: Vec<AppRecord>) -> Self {
        let folded_names = records
            .iter()
            .map(|record| record.name.as_deref().map(fold))
            .collect();
        Self {
            records,
            folded_names,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in catalog order.
    pub fn records(&self) -> &[AppRecord] {
        &self.records
    }

    /// First record whose name contains `query`, ignoring case and
    /// surrounding whitespace in the query.
    ///
    /// A miss is `None`; callers that require a match turn it into
    /// [`FioriError::AppNotFound`](crate::FioriError::AppNotFound).
    pub fn find_first(&self, query: &str) -> Option<&AppRecord> {
        let needle = fold(query.trim());
        let found = self.matching(&needle).next();
        debug!(query, matched = found.is_some(), "find_first");
        found
    }

    /// Up to `limit` matching records as summaries, in catalog order.
    ///
    /// Scanning stops as soon as the limit is reached.
    pub fn find_all(&self, query: &str, limit: usize) -> Vec<AppSummary> {
        let needle = fold(query.trim());
        let results: Vec<AppSummary> = self
            .matching(&needle)
            .take(limit)
            .map(AppSummary::from)
            .collect();
        debug!(query, limit, matches = results.len(), "find_all");
        results
    }

    fn matching<'a, 'n>(
        &'a self,
        needle: &'n str,
    ) -> impl Iterator<Item = &'a AppRecord> + use<'a, 'n> {
        self.records
            .iter()
            .zip(&self.folded_names)
            .filter(move |(_, name)| name.as_deref().is_some_and(|name| name.contains(needle)))
            .map(|(record, _)| record)
    }
}

fn fold(text: &str) -> String {
    text.to_lowercase()
}
