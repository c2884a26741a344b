//! Serializable views over an [`AppRecord`].
//!
//! Each view is a snapshot cloned out of the catalog; none of them borrow it.
//! Field names serialize in camelCase to match the JSON the CLI emits.

use crate::catalog::identity::{AppId, SemanticAction};
use crate::catalog::model::AppRecord;
use serde::Serialize;

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Search hit.
pub struct AppSummary {
    pub name: Option<String>,
    pub id: Option<AppId>,
    pub semantic_action: Option<SemanticAction>,
    pub description: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Details reported next to a generated launchpad URL.
pub struct AppDetails {
    pub name: Option<String>,
    pub id: Option<AppId>,
    pub description: Option<String>,
    pub semantic_action: Option<SemanticAction>,
    pub component: Option<String>,
    pub technical_catalog: Option<String>,
    pub transaction_code: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Everything the catalog knows about one app.
pub struct FullAppDetails {
    #[serde(flatten)]
    pub details: AppDetails,
    pub ui_technology: Option<String>,
    pub odata_service: Option<String>,
    pub odata_v4_service_group: Option<String>,
}

impl From<&AppRecord> for AppSummary {
    fn from(record: &AppRecord) -> Self {
        Self {
            name: record.name.clone(),
            id: record.id.clone(),
            semantic_action: record.semantic_action.clone(),
            description: record.description.clone(),
        }
    }
}

impl From<&AppRecord> for AppDetails {
    fn from(record: &AppRecord) -> Self {
        Self {
            name: record.name.clone(),
            id: record.id.clone(),
            description: record.description.clone(),
            semantic_action: record.semantic_action.clone(),
            component: record.component.clone(),
            technical_catalog: record.technical_catalog.clone(),
            transaction_code: record.transaction_code.clone(),
        }
    }
}

impl From<&AppRecord> for FullAppDetails {
    fn from(record: &AppRecord) -> Self {
        Self {
            details: AppDetails::from(record),
            ui_technology: record.ui_technology.clone(),
            odata_service: record.odata_service.clone(),
            odata_v4_service_group: record.odata_v4_service_group.clone(),
        }
    }
}
