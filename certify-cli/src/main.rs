mod check;

use anyhow::Context;
use certify_core::{load_or_builtin, FormData, RegistrationStep};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Inspect the industry license catalog and check saved registration drafts.
#[derive(Parser)]
#[command(name = "certify", version)]
struct Cli {
    /// Use this YAML catalog instead of the built-in one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the industries a company can register under
    Industries,
    /// Show the licenses one industry requires
    Licenses { industry: String },
    /// Check a registration draft (JSON) against the wizard's step gates
    Check {
        draft: PathBuf,
        /// Last step to check, 1-4
        #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(1..=4))]
        step: u8,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let catalog = load_or_builtin(cli.catalog.as_deref())?;
    tracing::debug!(industries = catalog.industries.len(), "catalog ready");

    match cli.command {
        Command::Industries => {
            for industry in catalog.industries() {
                let required = catalog.required_for(industry).count();
                println!("{industry} ({required} required licenses)");
            }
        }
        Command::Licenses { industry } => {
            anyhow::ensure!(catalog.contains(&industry), "unknown industry: {industry}");
            for license in catalog.licenses_for(&industry) {
                let tag = if license.required { "required" } else { "optional" };
                println!("{:<20} {:<32} {}", license.key, license.label, tag);
            }
        }
        Command::Check { draft, step, json } => {
            let raw = std::fs::read_to_string(&draft)
                .with_context(|| format!("reading draft {}", draft.display()))?;
            let form = FormData::from_json(&raw)
                .with_context(|| format!("parsing draft {}", draft.display()))?;
            let through = RegistrationStep::from_number(step)
                .with_context(|| format!("no step {step}"))?;

            let report = check::check_draft(&form, &catalog, through);
            tracing::info!(industry = %report.industry, passed = report.passed(), "draft checked");

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }

            if !report.passed() {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn print_report(report: &check::CheckReport) {
    let industry = if report.industry.is_empty() { "(none)" } else { report.industry.as_str() };
    println!("Industry: {industry}");
    if !report.known_industry {
        println!("  not in the catalog");
    }

    for step in &report.steps {
        let mark = if step.passed { "ok" } else { "BLOCKED" };
        println!("Step {} {:<22} {}", step.step, step.title, mark);
        for label in &step.missing {
            println!("    missing: {label}");
        }
    }

    if !report.stale_keys.is_empty() {
        println!("Entries not used by this industry: {}", report.stale_keys.join(", "));
    }
    for problem in &report.file_problems {
        println!("File problem: {problem}");
    }
}
