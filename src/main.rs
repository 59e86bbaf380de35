use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use docs_sync::cli::{run_generate_workflow, GenerateWorkflowArgs};
use docs_sync::store::FsStore;
use docs_sync::{config, repo, ui};

#[derive(clap::Parser)]
#[command(
    name = "docs-sync",
    about = "Build a documentation-update prompt from the latest changelog releases"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Repository root (default: enclosing git repository)")]
    root: Option<PathBuf>,

    #[arg(short, long, help = "Write the prompt to this file instead of stdout")]
    output: Option<PathBuf>,

    #[arg(long, help = "Write the packages-info JSON sidecar to this file")]
    packages_info: Option<PathBuf>,

    #[arg(long, help = "Minimum section length for a release to count as a real change")]
    min_length: Option<usize>,

    #[arg(long, help = "Report skipped packages and debug details")]
    verbose: bool,

    #[arg(long, help = "Show configured packages and exit")]
    list: bool,

    #[arg(long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose);

    if args.version {
        println!("docs-sync {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    if args.list {
        if config.packages.is_empty() {
            ui::display_error("No packages configured in docsync.toml");
            std::process::exit(1);
        }
        ui::display_configured_packages(&config.packages);
        return Ok(());
    }

    let root = match repo::resolve_repo_root(args.root.as_deref()) {
        Ok(root) => root,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let workflow_args = GenerateWorkflowArgs {
        output: args.output,
        packages_info: args.packages_info,
        min_content_length: args.min_length,
    };

    let store = FsStore::new(root);
    let result = match run_generate_workflow(&workflow_args, &config, &store) {
        Ok(result) => result,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if args.verbose {
        for reason in &result.skipped {
            ui::display_skip(reason);
        }
    }

    if result.nothing_to_do() {
        ui::display_status("No new releases with documentation-worthy changes. Nothing to do.");
        return Ok(());
    }

    ui::display_releases(&result.releases);

    if let Some(path) = &result.prompt_path {
        ui::display_success(&format!("Wrote prompt to {}", path.display()));
    }
    if let Some(path) = &result.packages_info_path {
        ui::display_success(&format!("Wrote packages info to {}", path.display()));
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
