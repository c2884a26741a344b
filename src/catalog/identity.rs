use serde::{Deserialize, Serialize};
use std::fmt;

/// Fiori app identifier as listed in the catalog (e.g., `F1511A`).
///
/// Not guaranteed unique across the catalog; records are identified by
/// position, and the id is only carried along for display and diagnostics.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppId(pub String);

/// Launchpad intent in `SemanticObject-action` form (e.g.,
/// `MaintenanceWorkRequest-create`).
///
/// Stored verbatim; the URL builder places it after `#` without encoding.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SemanticAction(pub String);

impl AppId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl SemanticAction {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The semantic object before the first `-`, or the whole value when the
    /// separator is missing.
    pub fn semantic_object(&self) -> &str {
        self.split().0
    }

    /// The action after the first `-`, if any.
    pub fn action(&self) -> Option<&str> {
        self.split().1
    }

    fn split(&self) -> (&str, Option<&str>) {
        match self.0.split_once('-') {
            Some((object, action)) => (object, Some(action)),
            None => (self.0.as_str(), None),
        }
    }
}

impl From<String> for AppId {
    fn from(value: String) -> Self {
        AppId(value)
    }
}

impl From<String> for SemanticAction {
    fn from(value: String) -> Self {
        SemanticAction(value)
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for SemanticAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semantic_action_splits_on_first_dash() {
        let action = SemanticAction("MaintenanceWorkRequest-create".to_string());
        assert_eq!(action.semantic_object(), "MaintenanceWorkRequest");
        assert_eq!(action.action(), Some("create"));

        let nested = SemanticAction("Workflow-manage-all".to_string());
        assert_eq!(nested.semantic_object(), "Workflow");
        assert_eq!(nested.action(), Some("manage-all"));
    }

    #[test]
    fn semantic_action_without_dash_is_object_only() {
        let action = SemanticAction("Shell".to_string());
        assert_eq!(action.semantic_object(), "Shell");
        assert_eq!(action.action(), None);
    }

    #[test]
    fn ids_convert_from_owned_strings() {
        assert_eq!(AppId::from("F1511A".to_string()).as_str(), "F1511A");
        let action = SemanticAction::from("Shell-home".to_string());
        assert_eq!(action.action(), Some("home"));
    }

    #[test]
    fn ids_serialize_transparently() {
        let id = AppId("F1511A".to_string());
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"F1511A\"");
        let action: SemanticAction =
            serde_json::from_str("\"MaintenanceWorkRequest-create\"").unwrap();
        assert_eq!(action.to_string(), "MaintenanceWorkRequest-create");
    }
}
