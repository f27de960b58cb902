//! Didactic mode: pedagogical review of a CRH draft.

use std::path::Path;

use super::{ActionContext, finish, read_source};
use crate::domain::fields::{ReviewLevel, ReviewSeverity};
use crate::domain::prompt::compose_didactic;
use crate::domain::{AppError, Mode};

pub fn execute(
    ctx: &ActionContext,
    level: ReviewLevel,
    severity: ReviewSeverity,
    draft: Option<&Path>,
) -> Result<(), AppError> {
    let draft_text = read_source(draft)?;
    let prompt = compose_didactic(&draft_text, level, severity, &ctx.options)?;
    finish(ctx, Mode::Didactic, prompt)
}
