//! hudlink - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// hudlink - host-driven game overlay with a TUI front end
#[derive(Parser, Debug)]
#[command(name = "hudlink")]
#[command(version)]
#[command(about = "TUI overlay driven by a JSONL host command stream")]
pub struct Args {
    /// Path to a JSONL command script (reads from stdin if not provided)
    pub script: Option<PathBuf>,

    /// Run the built-in demo session without a host
    #[arg(long, conflicts_with = "script")]
    pub demo: bool,

    /// Resource name attached to outbound reports
    #[arg(long)]
    pub resource: Option<String>,

    /// Path the outbound report stream is appended to
    #[arg(long)]
    pub report_file: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), hudlink::model::AppError> {
    let args = Args::parse();

    // Propagate --no-color so every style decision sees it.
    if args.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Full precedence chain: Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = hudlink::config::load_config_with_precedence(args.config.clone())?;
        let merged = hudlink::config::merge_config(config_file);
        let with_env = hudlink::config::apply_env_overrides(merged);
        hudlink::config::apply_cli_overrides(
            with_env,
            args.resource.clone(),
            args.report_file.clone(),
        )
    };

    hudlink::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let input_source = if args.demo {
        hudlink::source::demo_source()
    } else {
        hudlink::source::detect_input_source(args.script.clone())?
    };

    hudlink::view::run_with_source(input_source, &config, args.no_color)?;

    Ok(())
}
