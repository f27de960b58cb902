//! Prompt composition.
//!
//! A prompt is an ordered join of: fixed instruction lines, the enabled
//! reference blocks, guided-only constraint lines, and the mode body. Mode
//! bodies are minijinja templates rendered with already placeholder-substituted
//! field values, so user text is never parsed as template syntax.

use chrono::NaiveDate;
use minijinja::{Environment, UndefinedBehavior, context};

use crate::domain::AppError;
use crate::domain::Mode;
use crate::domain::fields::{
    GuidedFields, PLACEHOLDER, ReviewLevel, ReviewSeverity, RewriteInstruction, or_placeholder,
};
use crate::domain::reference::blocks;
use crate::domain::session::SessionOptions;

static GUIDED_BODY: &str = include_str!("assets/guided_body.j2");
static FREEFORM_INTRO: &str = include_str!("assets/freeform_intro.j2");
static DIDACTIC_INTRO: &str = include_str!("assets/didactic_intro.j2");

/// Fixed instruction lines opening every guided prompt.
const GUIDED_INSTRUCTIONS: &str = "Tu es un médecin hospitalier expérimenté. Rédige un CRH professionnel, clair et cohérent.\n\
Ne pas inventer : omettre ce qui manque ou indiquer « non communiqué ».\n\
Structure stricte avec titres visibles. Diagnostics de sortie clairement listés en section dédiée.";

const BRIEF_CONSTRAINT: &str = "Contrainte : vise un résumé ≤ 1 page.";
const ANONYMIZE_CONSTRAINT: &str = "Anonymiser les identifiants (noms, IPP) s'ils apparaissent.";

const SECTION_SEPARATOR: &str = "\n\n";

/// A composed prompt plus the names of the reference blocks that made it in.
#[derive(Debug, Clone)]
pub struct ComposedPrompt {
    /// The full prompt text, consumed exactly once by the completion call.
    pub text: String,
    /// Reference blocks present in the prompt, in order.
    pub included_blocks: Vec<&'static str>,
}

/// Compose the guided-mode prompt from the structured field set.
///
/// `written_on` becomes the « Date de rédaction » metadata line.
pub fn compose_guided(
    fields: &GuidedFields,
    options: &SessionOptions,
    written_on: NaiveDate,
) -> Result<ComposedPrompt, AppError> {
    let mut parts = vec![GUIDED_INSTRUCTIONS.to_string()];
    let (reference, included_blocks) = reference_parts(Mode::Guided, options);
    parts.extend(reference);

    if options.brief {
        parts.push(BRIEF_CONSTRAINT.to_string());
    }
    if options.anonymize {
        parts.push(ANONYMIZE_CONSTRAINT.to_string());
    }

    let body = render_body(
        "guided_body",
        GUIDED_BODY,
        context! {
            identity => or_placeholder(&fields.identity),
            ipp => or_placeholder(&fields.ipp),
            attending => PLACEHOLDER,
            service => or_placeholder(&fields.service),
            physician => or_placeholder(&fields.physician),
            admission_date => or_placeholder(&fields.admission_date),
            discharge_date => or_placeholder(&fields.discharge_date),
            written_on => written_on.to_string(),
            destination => PLACEHOLDER,
            main_diagnosis => or_placeholder(&fields.main_diagnosis),
            associated_diagnoses => or_placeholder(&fields.associated_diagnoses),
            reason => or_placeholder(&fields.reason),
            history => or_placeholder(&fields.history),
            clinical_exam => or_placeholder(&fields.clinical_exam),
            investigations => or_placeholder(&fields.investigations),
            course => or_placeholder(&fields.course),
            admission_treatment => or_placeholder(&fields.admission_treatment),
            discharge_treatment => or_placeholder(&fields.discharge_treatment),
            social_context => or_placeholder(&fields.social_context),
            follow_up => or_placeholder(&fields.follow_up),
        },
    )?;
    parts.push(body.trim_end().to_string());

    Ok(ComposedPrompt { text: parts.join(SECTION_SEPARATOR), included_blocks })
}

/// Compose the free-form rewrite prompt around a pasted source text.
pub fn compose_freeform(
    instruction: RewriteInstruction,
    source_text: &str,
    options: &SessionOptions,
) -> Result<ComposedPrompt, AppError> {
    let source = source_text.trim();
    if source.is_empty() {
        return Err(AppError::SourceTextMissing);
    }

    let intro = render_body(
        "freeform_intro",
        FREEFORM_INTRO,
        context! { objective => instruction.objective() },
    )?;

    let mut parts = vec![intro.trim_end().to_string()];
    let (reference, included_blocks) = reference_parts(Mode::Freeform, options);
    parts.extend(reference);
    parts.push(format!("TEXTE SOURCE\n------------\n{}", source));

    Ok(ComposedPrompt { text: parts.join(SECTION_SEPARATOR), included_blocks })
}

/// Compose the didactic review prompt around a pasted CRH draft.
pub fn compose_didactic(
    draft: &str,
    level: ReviewLevel,
    severity: ReviewSeverity,
    options: &SessionOptions,
) -> Result<ComposedPrompt, AppError> {
    let draft = draft.trim();
    if draft.is_empty() {
        return Err(AppError::SourceTextMissing);
    }

    let intro = render_body(
        "didactic_intro",
        DIDACTIC_INTRO,
        context! { level => level.label(), severity => severity.label() },
    )?;

    let mut parts = vec![intro.trim_end().to_string()];
    let (reference, included_blocks) = reference_parts(Mode::Didactic, options);
    parts.extend(reference);
    parts.push(format!("CRH À ÉVALUER\n-------------\n{}", draft));

    Ok(ComposedPrompt { text: parts.join(SECTION_SEPARATOR), included_blocks })
}

/// Collect the enabled reference blocks in their fixed order: style guide,
/// quality checklist, worked example.
fn reference_parts(mode: Mode, options: &SessionOptions) -> (Vec<String>, Vec<&'static str>) {
    let mut parts = Vec::new();
    let mut included = Vec::new();

    if options.style_guide {
        parts.push(blocks::STYLE_GUIDE.trim().to_string());
        included.push("style_guide");
    }
    if options.quality_checklist {
        parts.push(blocks::QUALITY_CHECKLIST.trim().to_string());
        included.push("quality_checklist");
    }
    if options.example {
        let text = options.example_override.as_deref().unwrap_or(blocks::WORKED_EXAMPLE);
        let trimmed = text.trim();
        // An example edited down to nothing behaves like a disabled toggle.
        if !trimmed.is_empty() {
            let header = match mode {
                Mode::Guided => "RÉFÉRENCE À IMITER (style et structure) ↓",
                Mode::Freeform | Mode::Didactic => "RÉFÉRENCE À IMITER ↓",
            };
            parts.push(format!("{}\n{}", header, trimmed));
            included.push("worked_example");
        }
    }

    (parts, included)
}

fn render_body(
    name: &str,
    template: &str,
    ctx: minijinja::Value,
) -> Result<String, AppError> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.render_str(template, ctx).map_err(|err| AppError::TemplateRender {
        template: name.to_string(),
        reason: err.to_string(),
    })
}
