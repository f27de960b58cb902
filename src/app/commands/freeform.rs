//! Free-form mode: rewrite a pasted draft under one instruction.

use std::path::Path;

use super::{ActionContext, finish, read_source};
use crate::domain::fields::RewriteInstruction;
use crate::domain::prompt::compose_freeform;
use crate::domain::{AppError, Mode};

pub fn execute(
    ctx: &ActionContext,
    instruction: RewriteInstruction,
    source: Option<&Path>,
) -> Result<(), AppError> {
    let source_text = read_source(source)?;
    let prompt = compose_freeform(instruction, &source_text, &ctx.options)?;
    finish(ctx, Mode::Freeform, prompt)
}
