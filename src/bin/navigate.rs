//! Operator CLI for the site registry and navigation classifier.
//!
//! Runs the same resolver and classifier as the server, without HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Classify navigator input (prompts when INPUT is omitted)
//! cargo run --bin navigate -- classify /profile/spacez
//!
//! # Resolve a host and optional site parameter
//! cargo run --bin navigate -- resolve --host srd.fund --site sandeep
//!
//! # List tenants of the staging profile
//! cargo run --bin navigate -- --profile staging sites
//!
//! # Raw JSON output
//! cargo run --bin navigate -- --json classify srd.fund
//! ```
//!
//! # Environment Variables
//!
//! - `SITE_PROFILE` (optional): default for `--profile`

use site_router::api::dto::resolve::ResolveResponse;
use site_router::api::dto::site::SiteItem;
use site_router::application::services::{NavigationService, SiteService};
use site_router::domain::entities::{ClassificationResult, TenantConfig};
use site_router::domain::profiles::Profile;
use site_router::domain::registry::SiteRegistry;
use site_router::domain::resolver::{EdgeAction, Resolution};
use site_router::domain::site_urls::site_url;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;

/// CLI tool for inspecting tenant routing.
#[derive(Parser)]
#[command(name = "navigate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Registry profile
    #[arg(long, global = true, env = "SITE_PROFILE", default_value = "production")]
    profile: Profile,

    /// Print raw JSON instead of formatted output
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Classify navigator input
    Classify {
        /// Text to classify (prompted for when omitted)
        input: Option<String>,
    },

    /// Resolve the tenant and edge action for a request
    Resolve {
        /// Request host, with port for local hosts (e.g. "localhost:3000")
        #[arg(long)]
        host: String,

        /// Value of the `site` query parameter
        #[arg(long)]
        site: Option<String>,
    },

    /// List tenants of the active profile
    Sites,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let site_service = SiteService::for_profile(cli.profile)
        .with_context(|| format!("Failed to build the {} registry", cli.profile))?;

    match cli.command {
        Commands::Classify { input } => handle_classify(&site_service, input, cli.json)?,
        Commands::Resolve { host, site } => {
            handle_resolve(&site_service, &host, site.as_deref(), cli.json)?
        }
        Commands::Sites => handle_sites(&site_service, cli.json)?,
    }

    Ok(())
}

/// Classifies one input and prints the result.
///
/// # Output Format
///
/// ```text
/// 🔎 /profile/spacez
///
///   Invalid: Path not found: /profile/spacez
///
///   Did you mean:
///     /profile/spacex
/// ```
fn handle_classify(site_service: &SiteService, input: Option<String>, json: bool) -> Result<()> {
    let input = match input {
        Some(i) => i,
        None => Input::new()
            .with_prompt("Where to?")
            .allow_empty(true)
            .interact_text()?,
    };

    let navigation = NavigationService::new(site_service.registry().clone());
    let result = navigation.classify(&input);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("{} {}", "🔎".bright_blue(), input.trim().bold());
    println!();

    if result.is_valid {
        print_valid(&result);
    } else {
        print_invalid(&result);
    }
    println!();

    Ok(())
}

fn print_valid(result: &ClassificationResult) {
    let destination = if result.is_external {
        result.canonical_destination.yellow()
    } else {
        result.canonical_destination.green()
    };

    println!("  Kind:        {}", result.kind.to_string().cyan());
    println!("  Destination: {}", destination.bold());
    println!("  Label:       {}", result.display_label);
    if result.is_external {
        println!("  {}", "Opens in a new tab".bright_black());
    }

    for (key, value) in &result.metadata {
        println!("  {:<12} {}", format!("{key}:").bright_black(), value);
    }
}

fn print_invalid(result: &ClassificationResult) {
    let message = result.error_message.as_deref().unwrap_or("Invalid input");
    println!("  {} {}", "Invalid:".red().bold(), message);

    if !result.suggestions.is_empty() {
        println!();
        println!("  {}", "Did you mean:".bright_white());
        for suggestion in &result.suggestions {
            println!("    {}", suggestion.cyan());
        }
    }
}

/// Resolves a host and site parameter and prints the decision.
fn handle_resolve(
    site_service: &SiteService,
    host: &str,
    site: Option<&str>,
    json: bool,
) -> Result<()> {
    let Resolution { tenant, action } = site_service.resolve(host, site);

    if json {
        let response = ResolveResponse {
            host: host.to_string(),
            tenant: SiteItem::from(&tenant),
            action,
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    println!("{} {}", "🧭".bright_blue(), host.bold());
    println!();
    println!("  Tenant: {} ({})", tenant.site_id.cyan(), tenant.display_name);

    match action {
        EdgeAction::None => println!("  Action: {}", "none".bright_black()),
        EdgeAction::Rewrite { site_id } => println!(
            "  Action: {} to {}",
            "rewrite".green(),
            format!("?site={site_id}").bright_yellow()
        ),
        EdgeAction::Redirect => println!(
            "  Action: {} without the site parameter",
            "redirect".yellow()
        ),
    }
    println!();

    Ok(())
}

/// Lists tenants of the active profile.
///
/// # Output Format
///
/// ```text
/// 📋 Sites (production)
///
///   Site ID                URL                        Name
///   ─────────────────────────────────────────────────────────────────────
///   srd                    https://srd.fund           SRD Innovation Fund
/// ```
fn handle_sites(site_service: &SiteService, json: bool) -> Result<()> {
    let tenants = site_service.list_sites();

    if json {
        let items: Vec<SiteItem> = tenants.iter().map(SiteItem::from).collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "📋 Sites".bright_blue().bold(),
        format!("({})", site_service.profile()).bright_black()
    );
    println!();
    println!(
        "  {:<22} {:<26} {}",
        "Site ID".bright_white().bold(),
        "URL".bright_white().bold(),
        "Name".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for tenant in tenants {
        print_tenant(site_service.registry(), tenant);
    }

    println!();
    println!(
        "  Known paths: {}",
        site_service.registry().known_paths().len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

fn print_tenant(registry: &SiteRegistry, tenant: &TenantConfig) {
    let site_id = if tenant.is_selector() {
        tenant.site_id.bright_black()
    } else {
        tenant.site_id.cyan()
    };

    println!(
        "  {:<22} {:<26} {}",
        site_id,
        site_url(registry, &tenant.site_id, true),
        tenant.display_name
    );
}
