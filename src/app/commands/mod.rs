//! Command orchestration: compose the prompt, invoke the completion
//! endpoint, display the document, export it.

pub mod didactic;
pub mod freeform;
pub mod guided;

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::adapters::{HttpCompletionClient, export_document, resolve_api_key};
use crate::domain::prompt::ComposedPrompt;
use crate::domain::session::SessionOptions;
use crate::domain::{AppConfig, AppError, Mode};
use crate::ports::{CompletionClient, CompletionRequest};

/// Everything one action needs besides its mode-specific inputs.
#[derive(Debug, Clone)]
pub struct ActionContext {
    pub config: AppConfig,
    /// Directory holding the config file; the secrets file lives next to it.
    pub config_dir: PathBuf,
    pub options: SessionOptions,
    /// Print the composed prompt instead of calling the endpoint.
    pub dry_run: bool,
    pub output_dir: Option<PathBuf>,
    pub no_export: bool,
}

/// Drive one composed prompt through display or generation + export.
pub(crate) fn finish(ctx: &ActionContext, mode: Mode, prompt: ComposedPrompt) -> Result<(), AppError> {
    if ctx.dry_run {
        println!("{}", prompt.text);
        eprintln!("Blocks: {}", summarize_blocks(&prompt));
        return Ok(());
    }

    let api_key = resolve_api_key(&ctx.config_dir)?;
    let client = HttpCompletionClient::new(api_key, &ctx.config.completion)?;
    generate(ctx, mode, prompt, &client)
}

/// Generation tail behind the client seam, shared by all modes.
pub(crate) fn generate(
    ctx: &ActionContext,
    mode: Mode,
    prompt: ComposedPrompt,
    client: &dyn CompletionClient,
) -> Result<(), AppError> {
    let request = CompletionRequest { prompt: prompt.text, sampling: ctx.options.sampling };
    let document = client.complete(request)?;

    println!("{}", document);

    if ctx.no_export || document.trim().is_empty() {
        return Ok(());
    }

    let dir = match &ctx.output_dir {
        Some(dir) => dir.clone(),
        None => PathBuf::from(&ctx.config.export.dir),
    };
    let path = export_document(&dir, mode.export_prefix(), &document, Local::now())?;
    eprintln!("✅ Saved {}", path.display());
    Ok(())
}

fn summarize_blocks(prompt: &ComposedPrompt) -> String {
    if prompt.included_blocks.is_empty() {
        "none".to_string()
    } else {
        prompt.included_blocks.join(", ")
    }
}

/// Read the source text from a file, or from stdin when no path is given.
pub(crate) fn read_source(path: Option<&Path>) -> Result<String, AppError> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
