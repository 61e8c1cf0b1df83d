use crate::config::ScanConfig;
use crate::contributor::{collect_routes, ScanReport};
use crate::issues::print_issues;
use crate::mapping::MappingAnnotationKind;
use crate::presentation::RouteItem;
use crate::syntax::{load_tree, SyntaxTree};
use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;

/// Command-line interface for routelens
#[derive(Parser)]
#[command(name = "routelens")]
#[command(about = "List HTTP routes declared by mapping annotations", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a syntax tree snapshot and print the routes it declares
    Scan {
        /// Syntax tree snapshot (YAML or JSON)
        #[arg(short, long)]
        tree: PathBuf,

        /// Scan configuration (YAML, TOML or JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Exit with error code if any occurrence was skipped
        #[arg(long, default_value_t = false)]
        fail_on_issues: bool,
    },
    /// List the supported mapping annotations and the verb each implies
    Kinds,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `<label>\t<location>` per route
    Text,
    /// The full scan report as JSON
    Json,
}

pub fn run_cli(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command {
        Commands::Scan {
            tree,
            config,
            format,
            fail_on_issues,
        } => {
            let config = match config {
                Some(path) => ScanConfig::load(&path)?,
                None => ScanConfig::default(),
            }
            .with_env_overrides();
            let snapshot = load_tree(&tree)?;
            let report = collect_routes(&snapshot, &snapshot, &config);

            match format {
                OutputFormat::Text => {
                    for line in render_text(&report, &snapshot) {
                        println!("{line}");
                    }
                    if !report.issues.is_empty() {
                        print_issues(&report.issues);
                    }
                }
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&report)
                        .context("failed to serialize scan report")?;
                    println!("{json}");
                }
            }

            if fail_on_issues && !report.issues.is_empty() {
                return Ok(ExitCode::FAILURE);
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Kinds => {
            for kind in MappingAnnotationKind::ALL {
                let verb = kind
                    .fixed_method()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "<method attribute>".to_string());
                println!("{}\t{verb}", kind.qualified_name());
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// One `<label>\t<location>` line per route, in scan order.
pub fn render_text(report: &ScanReport, snapshot: &SyntaxTree) -> Vec<String> {
    report
        .routes
        .iter()
        .map(|route| {
            let item = RouteItem::new(route.clone());
            format!("{}\t{}", item.presentable_text(), item.location_string(snapshot))
        })
        .collect()
}
