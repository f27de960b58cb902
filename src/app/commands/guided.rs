//! Guided mode: structured field entry rendered into labeled sections.

use chrono::Local;

use super::{ActionContext, finish};
use crate::domain::fields::GuidedFields;
use crate::domain::prompt::compose_guided;
use crate::domain::{AppError, Mode};

pub fn execute(ctx: &ActionContext, fields: &GuidedFields) -> Result<(), AppError> {
    let prompt = compose_guided(fields, &ctx.options, Local::now().date_naive())?;
    finish(ctx, Mode::Guided, prompt)
}
