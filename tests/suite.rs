// Integration suite for the app list catalog and launchpad links; exercises
// loading the bundled fixture, lookup semantics, URL generation, and the CLI
// surface so behavior changes surface in one place.
mod support;

use anyhow::Result;
use fiori_url::{
    AppCatalog, AppId, FioriError, LaunchpadParams, LoadFailure, SemanticAction, app_details,
    build_url,
};
use predicates::prelude::*;
use serde_json::{Value, json};
use support::{cli, fixture_catalog, fixture_path, scratch_app_list};

const BASE_URL: &str = "https://myserver.com:44300";
const REFERENCE_URL: &str = "https://myserver.com:44300/sap/bc/ui2/flp?sap-client=100&sap-language=EN#MaintenanceWorkRequest-create";

#[test]
fn fixture_loads_every_entry() {
    let catalog = fixture_catalog();
    assert_eq!(catalog.len(), 8);
    let builder = &catalog.records()[3];
    assert_eq!(builder.name.as_deref(), Some("Workflow Builder"));
    assert!(builder.semantic_action.is_none());
    assert!(builder.odata_service.is_none());
}

#[test]
fn reference_url_matches_launchpad_format() -> Result<()> {
    let catalog = fixture_catalog();
    let result = build_url(
        &catalog,
        &LaunchpadParams::new(BASE_URL, "100"),
        "Create Maintenance Request",
    )?;
    assert_eq!(result.url, REFERENCE_URL);
    assert_eq!(result.app_details.id, Some(AppId("F1511A".to_string())));
    assert_eq!(
        result.app_details.semantic_action,
        Some(SemanticAction("MaintenanceWorkRequest-create".to_string()))
    );
    Ok(())
}

#[test]
fn build_url_is_deterministic() -> Result<()> {
    let catalog = fixture_catalog();
    let params = LaunchpadParams::new(BASE_URL, "100").with_language("FR");
    let first = build_url(&catalog, &params, "manage workflows")?;
    let second = build_url(&catalog, &params, "manage workflows")?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn custom_language_lands_in_query() -> Result<()> {
    let catalog = fixture_catalog();
    let params = LaunchpadParams::new(BASE_URL, "100").with_language("DE");
    let result = build_url(&catalog, &params, "Create Maintenance Request")?;
    assert!(result.url.contains("sap-language=DE"));
    Ok(())
}

#[test]
fn trailing_slash_does_not_change_url() -> Result<()> {
    let catalog = fixture_catalog();
    let with_slash = build_url(
        &catalog,
        &LaunchpadParams::new("https://myserver.com:44300/", "100"),
        "Create Maintenance Request",
    )?;
    assert_eq!(with_slash.url, REFERENCE_URL);
    Ok(())
}

#[test]
fn workflow_search_finds_apps_in_catalog_order() {
    let catalog = fixture_catalog();
    let results = catalog.find_all("workflow", 10);
    let names: Vec<_> = results.iter().filter_map(|r| r.name.as_deref()).collect();
    assert_eq!(
        names,
        [
            "Manage Workflows",
            "Workflow Scenario Overview",
            "Workflow Builder",
            "Workflow Monitor"
        ]
    );
}

#[test]
fn search_results_satisfy_predicate_for_any_limit() {
    let catalog = fixture_catalog();
    for query in ["workflow", "MAINTENANCE", "  inbox ", "e", "nothing-like-this"] {
        let needle = query.trim().to_lowercase();
        let unbounded = catalog.find_all(query, usize::MAX);
        for limit in 0..=unbounded.len() + 1 {
            let limited = catalog.find_all(query, limit);
            assert!(limited.len() <= limit);
            assert_eq!(limited[..], unbounded[..limited.len()]);
            for summary in &limited {
                let name = summary.name.as_deref().expect("matches have names");
                assert!(name.to_lowercase().contains(&needle));
            }
        }
        if let Some(first) = catalog.find_first(query) {
            assert_eq!(first.name, unbounded[0].name);
            assert_eq!(first.id, unbounded[0].id);
        } else {
            assert!(unbounded.is_empty());
        }
    }
}

#[test]
fn unknown_app_is_reported_by_name() {
    let catalog = fixture_catalog();
    let err = build_url(
        &catalog,
        &LaunchpadParams::new(BASE_URL, "100"),
        "Nonexistent App That Does Not Exist",
    )
    .unwrap_err();
    assert!(matches!(err, FioriError::AppNotFound { ref app_name } if app_name == "Nonexistent App That Does Not Exist"));
}

#[test]
fn placeholder_semantic_actions_are_missing() {
    let catalog = fixture_catalog();
    for (query, expected_id) in [("Workflow Builder", "SWDD"), ("Workflow Monitor", "F2592")] {
        let err = build_url(&catalog, &LaunchpadParams::new(BASE_URL, "100"), query).unwrap_err();
        match err {
            FioriError::MissingSemanticAction { app_name, app_id } => {
                assert_eq!(app_name, query);
                assert_eq!(app_id, expected_id);
            }
            other => panic!("unexpected error for {query}: {other}"),
        }
    }
}

#[test]
fn details_for_reference_app() -> Result<()> {
    let catalog = fixture_catalog();
    let details = app_details(&catalog, "Create Maintenance Request")?;
    assert_eq!(details.details.name.as_deref(), Some("Create Maintenance Request"));
    assert_eq!(details.details.id, Some(AppId("F1511A".to_string())));
    assert_eq!(details.ui_technology.as_deref(), Some("SAP Fiori elements"));
    assert_eq!(details.odata_service.as_deref(), Some("EAM_NTF_CREATE"));
    assert!(details.details.transaction_code.is_none());
    Ok(())
}

#[test]
fn load_rejects_wrong_top_level_type() -> Result<()> {
    let (_dir, path) = scratch_app_list(&json!({"App Name": "Create Maintenance Request"}))?;
    let err = AppCatalog::load(&path).unwrap_err();
    match err {
        FioriError::CatalogLoad { path: reported, source } => {
            assert_eq!(reported, path);
            assert!(matches!(source, LoadFailure::Shape(_)));
        }
        other => panic!("unexpected error: {other}"),
    }
    Ok(())
}

#[test]
fn load_rejects_malformed_json() -> Result<()> {
    let (dir, _) = scratch_app_list(&json!([]))?;
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "[{\"App Name\": ")?;
    let err = AppCatalog::load(&path).unwrap_err();
    assert!(matches!(
        err,
        FioriError::CatalogLoad {
            source: LoadFailure::Json(_),
            ..
        }
    ));
    Ok(())
}

#[test]
fn empty_catalog_loads_and_matches_nothing() -> Result<()> {
    let (_dir, path) = scratch_app_list(&json!([]))?;
    let catalog = AppCatalog::load(&path)?;
    assert!(catalog.is_empty());
    assert!(catalog.find_first("anything").is_none());
    Ok(())
}

#[test]
fn cli_generates_reference_url() {
    cli()
        .args([BASE_URL, "100", "Create Maintenance Request"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Generated URL:\n{REFERENCE_URL}\n")))
        .stdout(predicate::str::contains("  App ID: F1511A"))
        .stdout(predicate::str::contains("Language: EN"));
}

#[test]
fn cli_passes_language_argument() {
    cli()
        .args([BASE_URL, "100", "Create Maintenance Request", "DE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sap-language=DE#MaintenanceWorkRequest-create"));
}

#[test]
fn cli_search_lists_matches() {
    cli()
        .args(["search", "workflow"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 4 app(s):"))
        .stdout(predicate::str::contains("1. Manage Workflows"))
        .stdout(predicate::str::contains("   Semantic Action: Not available"));
}

#[test]
fn cli_search_truncates_long_descriptions() {
    let output = cli()
        .args(["search", "create maintenance request"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).expect("utf-8 output");
    let line = stdout
        .lines()
        .find(|line| line.contains("Description: With this app"))
        .expect("description line");
    let description = line.trim_start().trim_start_matches("Description: ");
    assert!(description.ends_with("..."));
    assert_eq!(description.chars().count(), 103);
}

#[test]
fn cli_search_json_output() {
    let output = cli()
        .args(["search", "workflow", "--limit", "2", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: Value = serde_json::from_slice(&output).expect("json output");
    let items = value.as_array().expect("array");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"], "F2190");
    assert_eq!(items[1]["semanticAction"], "WorkflowScenario-display");
}

#[test]
fn cli_details_json_output() {
    let output = cli()
        .args(["details", "Create Maintenance Request", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: Value = serde_json::from_slice(&output).expect("json output");
    assert_eq!(value["id"], "F1511A");
    assert_eq!(value["uiTechnology"], "SAP Fiori elements");
    assert!(value["odataV4ServiceGroup"].is_null());
}

#[test]
fn cli_unknown_app_exits_one() {
    cli()
        .args([BASE_URL, "100", "Nonexistent App That Does Not Exist"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: app \"Nonexistent App That Does Not Exist\" not found",
        ));
}

#[test]
fn cli_empty_client_exits_one() {
    cli()
        .args([BASE_URL, "", "Create Maintenance Request"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("SAP Client is required"));
}

#[test]
fn cli_usage_errors_exit_one() {
    cli().assert().code(1);
    cli().args([BASE_URL, "100"]).assert().code(1);
    cli().arg("search").assert().code(1);
}

#[test]
fn cli_help_exits_zero() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("fiori-url search workflow"));
}

#[test]
fn cli_missing_app_list_exits_one() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let missing = dir.path().join("AppList.json");
    cli()
        .env(fiori_url::APP_LIST_ENV, &missing)
        .args(["search", "workflow"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to load app list"));
    Ok(())
}

#[test]
fn cli_app_list_flag_overrides_env() -> Result<()> {
    let (_dir, path) = scratch_app_list(&json!([
        {"App Name": "Scratch Only App", "App ID": "Z1", "Semantic Object - Action": "Scratch-open"}
    ]))?;
    cli()
        .arg("--app-list")
        .arg(&path)
        .args(["https://h/", "200", "scratch only"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "https://h/sap/bc/ui2/flp?sap-client=200&sap-language=EN#Scratch-open",
        ));
    assert!(fixture_path().is_file());
    Ok(())
}
