//! CLI adapter.

mod forms;

use std::fs;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::app::commands::{self, ActionContext};
use crate::app::config::load_config;
use crate::domain::AppError;
use crate::domain::fields::{ReviewLevel, ReviewSeverity, RewriteInstruction};
use crate::domain::session::{SamplingParams, SessionOptions};
use forms::{GuidedFieldArgs, collect_guided_fields};

#[derive(Parser)]
#[command(name = "quickcrh")]
#[command(version)]
#[command(
    about = "Draft and review French hospital discharge summaries (CRH) with a hosted model",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draft a CRH from structured clinical fields
    #[clap(visible_alias = "g")]
    Guided {
        #[command(flatten)]
        session: SessionArgs,
        #[command(flatten)]
        fields: GuidedFieldArgs,
        /// Ask for a one-page summary
        #[arg(long)]
        brief: bool,
        /// Ask for anonymization of names and identifiers
        #[arg(long)]
        anonymize: bool,
        /// Skip interactive prompts; missing fields become « non communiqué »
        #[arg(long)]
        batch: bool,
    },
    /// Rewrite or improve a pasted draft
    #[clap(visible_alias = "f")]
    Freeform {
        #[command(flatten)]
        session: SessionArgs,
        /// Rewrite instruction (pro, correct, summary, plain)
        #[arg(long, default_value = "pro")]
        instruction: RewriteInstruction,
        /// Source text file (stdin when omitted)
        source: Option<PathBuf>,
    },
    /// Pedagogical review of a CRH draft
    #[clap(visible_alias = "d")]
    Didactic {
        #[command(flatten)]
        session: SessionArgs,
        /// Student level (dfasm1, dfasm2, dfasm3, interne)
        #[arg(long, default_value = "interne")]
        level: ReviewLevel,
        /// Evaluation severity (bienveillance, standard, exigeant)
        #[arg(long, default_value = "standard")]
        severity: ReviewSeverity,
        /// Draft file (stdin when omitted)
        draft: Option<PathBuf>,
    },
}

/// Session options shared by all modes (the web app's sidebar).
#[derive(Debug, Clone, Args)]
struct SessionArgs {
    /// Configuration file (default: ./quickcrh.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Sampling temperature, 0.0 to 1.0
    #[arg(long, value_parser = parse_temperature)]
    temperature: Option<f32>,
    /// Maximum output length in tokens, 500 to 4000
    #[arg(long, value_parser = clap::value_parser!(u32).range(500..=4000))]
    max_tokens: Option<u32>,
    /// Leave out the CRH style guide block
    #[arg(long)]
    no_style_guide: bool,
    /// Leave out the worked reference example block
    #[arg(long)]
    no_example: bool,
    /// Leave out the HAS quality-criteria block
    #[arg(long)]
    no_quality: bool,
    /// Replace the embedded worked example with this file's content
    #[arg(long, value_name = "FILE", conflicts_with = "no_example")]
    example_file: Option<PathBuf>,
    /// Print the composed prompt instead of calling the endpoint
    #[arg(long)]
    dry_run: bool,
    /// Directory receiving the exported document
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,
    /// Skip the text-file export
    #[arg(long)]
    no_export: bool,
}

fn parse_temperature(value: &str) -> Result<f32, String> {
    let parsed: f32 = value.parse().map_err(|_| format!("'{}' is not a number", value))?;
    if !(0.0..=1.0).contains(&parsed) {
        return Err(format!("temperature {} is outside [0.0, 1.0]", parsed));
    }
    Ok(parsed)
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Guided { session, fields, brief, anonymize, batch } => {
            run_guided(session, fields, brief, anonymize, batch)
        }
        Commands::Freeform { session, instruction, source } => {
            action_context(session, false, false)
                .and_then(|ctx| commands::freeform::execute(&ctx, instruction, source.as_deref()))
        }
        Commands::Didactic { session, level, severity, draft } => {
            action_context(session, false, false)
                .and_then(|ctx| commands::didactic::execute(&ctx, level, severity, draft.as_deref()))
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_guided(
    session: SessionArgs,
    fields: GuidedFieldArgs,
    brief: bool,
    anonymize: bool,
    batch: bool,
) -> Result<(), AppError> {
    let ctx = action_context(session, brief, anonymize)?;
    let Some(fields) = collect_guided_fields(fields, batch)? else {
        // Form interrupted: not an error, nothing to do.
        return Ok(());
    };
    commands::guided::execute(&ctx, &fields)
}

/// Turn CLI session flags plus the config file into an `ActionContext`.
fn action_context(
    session: SessionArgs,
    brief: bool,
    anonymize: bool,
) -> Result<ActionContext, AppError> {
    let loaded = load_config(session.config.as_deref())?;

    // Config-supplied defaults go through the same range validation as flags.
    let sampling = SamplingParams::new(
        session.temperature.unwrap_or(loaded.config.defaults.temperature),
        session.max_tokens.unwrap_or(loaded.config.defaults.max_tokens),
    )?;

    let example_override = match &session.example_file {
        Some(path) => Some(fs::read_to_string(path)?),
        None => None,
    };

    let options = SessionOptions {
        style_guide: !session.no_style_guide,
        example: !session.no_example,
        quality_checklist: !session.no_quality,
        example_override,
        brief,
        anonymize,
        sampling,
    };

    Ok(ActionContext {
        config: loaded.config,
        config_dir: loaded.dir,
        options,
        dry_run: session.dry_run,
        output_dir: session.output_dir,
        no_export: session.no_export,
    })
}
