//! Command-line front end for Fiori app lookup and launchpad link generation.
//!
//! Two shapes mirror how the tool is used by hand:
//! `fiori-url search <term>` lists matching apps, and
//! `fiori-url <base-url> <client> <app-name> [language]` prints the resolved app
//! and its launchpad URL. `fiori-url details <app-name>` dumps every catalog
//! column for one app. Any failure prints a message and exits 1.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use fiori_url::logging::init_logging;
use fiori_url::{
    APP_LIST_ENV, AppCatalog, AppSummary, DEFAULT_LANGUAGE, DEFAULT_SEARCH_LIMIT, FullAppDetails,
    LaunchpadParams, UrlResult, app_details, build_url, find_app_list,
};
use serde::Serialize;
use std::borrow::Cow;
use std::fmt::{self, Write as _};
use std::path::PathBuf;

const DESCRIPTION_PREVIEW_CHARS: usize = 100;
const NOT_AVAILABLE: &str = "Not available";

const EXAMPLES: &str = "Examples:
  fiori-url https://myserver.com:44300 100 \"Create Maintenance Request\" EN
  fiori-url search workflow
  fiori-url details \"Create Maintenance Request\"

Base URL and SAP client are required and must be provided by the user.";

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "fiori-url",
    version,
    about = "Look up SAP Fiori apps and generate Fiori Launchpad URLs",
    subcommand_negates_reqs = true,
    after_help = EXAMPLES
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    generate: GenerateArgs,

    /// Path to AppList.json; skips the default search locations.
    #[arg(long, global = true, env = APP_LIST_ENV, value_name = "PATH")]
    app_list: Option<PathBuf>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    /// Log lookups to stderr (overridden by FIORI_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Debug, Args)]
struct GenerateArgs {
    /// SAP server base URL, e.g. https://myserver.com:44300
    #[arg(required = true, value_name = "BASE_URL")]
    base_url: Option<String>,

    /// SAP client number, e.g. 100
    #[arg(required = true, value_name = "CLIENT")]
    client: Option<String>,

    /// App name or part of it (case-insensitive)
    #[arg(required = true, value_name = "APP_NAME")]
    app_name: Option<String>,

    /// Logon language
    #[arg(default_value = DEFAULT_LANGUAGE, value_name = "LANGUAGE")]
    language: String,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List apps whose name contains the search term.
    Search {
        term: String,
        /// Maximum number of apps to list.
        #[arg(long, default_value_t = DEFAULT_SEARCH_LIMIT)]
        limit: usize,
    },
    /// Show every catalog column for the first matching app.
    Details { app_name: String },
}

fn run(cli: Cli) -> Result<()> {
    let path = find_app_list(cli.app_list.as_deref())?;
    let catalog = AppCatalog::load(&path)?;

    match cli.command {
        Some(Command::Search { term, limit }) => {
            let results = catalog.find_all(&term, limit);
            if cli.json {
                print_json(&results)
            } else {
                print!("{}", render_search(&term, &results)?);
                Ok(())
            }
        }
        Some(Command::Details { app_name }) => {
            let details = app_details(&catalog, &app_name)?;
            if cli.json {
                print_json(&details)
            } else {
                print!("{}", render_details(&details)?);
                Ok(())
            }
        }
        None => generate(&catalog, cli.generate, cli.json),
    }
}

fn generate(catalog: &AppCatalog, args: GenerateArgs, json: bool) -> Result<()> {
    // clap enforces presence unless a subcommand was given.
    let base_url = args.base_url.unwrap_or_default();
    let client = args.client.unwrap_or_default();
    let app_name = args.app_name.unwrap_or_default();

    let params = LaunchpadParams::new(&base_url, &client).with_language(&args.language);
    let result = build_url(catalog, &params, &app_name)?;
    if json {
        return print_json(&result);
    }

    print!(
        "\nGenerating URL for: {app_name}\nBase URL: {base_url}\nClient: {client}\nLanguage: {}\n\n",
        args.language
    );
    print!("{}", render_url_result(&result)?);
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("serializing output")?;
    println!("{text}");
    Ok(())
}

fn or_not_available(value: Option<&str>) -> &str {
    value.unwrap_or(NOT_AVAILABLE)
}

/// Clip to `max_chars` characters, marking the cut with `...`.
fn preview(text: &str, max_chars: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => Cow::Owned(format!("{}...", &text[..cut])),
        None => Cow::Borrowed(text),
    }
}

fn render_search(term: &str, results: &[AppSummary]) -> Result<String, fmt::Error> {
    let mut out = format!("\nSearching for apps matching \"{term}\"...\n\n");
    if results.is_empty() {
        out.push_str("No apps found matching your search.\n");
        return Ok(out);
    }

    writeln!(out, "Found {} app(s):\n", results.len())?;
    for (idx, app) in results.iter().enumerate() {
        writeln!(out, "{}. {}", idx + 1, app.name.as_deref().unwrap_or_default())?;
        writeln!(
            out,
            "   App ID: {}",
            or_not_available(app.id.as_ref().map(|id| id.as_str()))
        )?;
        writeln!(
            out,
            "   Semantic Action: {}",
            or_not_available(app.semantic_action.as_ref().map(|a| a.as_str()))
        )?;
        if let Some(description) = &app.description {
            writeln!(
                out,
                "   Description: {}",
                preview(description, DESCRIPTION_PREVIEW_CHARS)
            )?;
        }
        out.push('\n');
    }
    Ok(out)
}

fn render_url_result(result: &UrlResult) -> Result<String, fmt::Error> {
    let app = &result.app_details;
    let mut out = String::from("App Details:\n");
    writeln!(out, "  Name: {}", app.name.as_deref().unwrap_or_default())?;
    writeln!(
        out,
        "  App ID: {}",
        or_not_available(app.id.as_ref().map(|id| id.as_str()))
    )?;
    writeln!(
        out,
        "  Semantic Action: {}",
        or_not_available(app.semantic_action.as_ref().map(|a| a.as_str()))
    )?;
    writeln!(
        out,
        "  Component: {}",
        or_not_available(app.component.as_deref())
    )?;
    writeln!(out, "\nGenerated URL:\n{}\n", result.url)?;
    Ok(out)
}

fn render_details(full: &FullAppDetails) -> Result<String, fmt::Error> {
    let app = &full.details;
    let action = app.semantic_action.as_ref();
    let rows: [(&str, Option<&str>); 12] = [
        ("Name", app.name.as_deref()),
        ("App ID", app.id.as_ref().map(|id| id.as_str())),
        ("Description", app.description.as_deref()),
        ("Semantic Action", action.map(|a| a.as_str())),
        ("Semantic Object", action.map(|a| a.semantic_object())),
        ("Action", action.and_then(|a| a.action())),
        ("UI Technology", full.ui_technology.as_deref()),
        ("Component", app.component.as_deref()),
        ("Technical Catalog", app.technical_catalog.as_deref()),
        ("Transaction Codes", app.transaction_code.as_deref()),
        ("OData Service", full.odata_service.as_deref()),
        ("OData V4 Service Group", full.odata_v4_service_group.as_deref()),
    ];

    let mut out = String::from("App Details:\n");
    for (label, value) in rows {
        writeln!(out, "  {label}: {}", or_not_available(value))?;
    }
    Ok(out)
}
