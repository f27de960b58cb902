//! Interactive collection of guided-mode fields.

use std::io::ErrorKind;

use dialoguer::{Error as DialoguerError, Input};

use crate::domain::AppError;
use crate::domain::fields::GuidedFields;

/// Guided field values taken from CLI flags. Any `None` is asked
/// interactively unless batch mode is on.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct GuidedFieldArgs {
    /// Identité (Nom, Prénom, Âge, Sexe)
    #[arg(long)]
    pub identity: Option<String>,
    /// IPP / N° dossier
    #[arg(long)]
    pub ipp: Option<String>,
    /// Service / UF
    #[arg(long)]
    pub service: Option<String>,
    /// Date d'entrée
    #[arg(long)]
    pub admission_date: Option<String>,
    /// Date de sortie
    #[arg(long)]
    pub discharge_date: Option<String>,
    /// Médecin référent
    #[arg(long)]
    pub physician: Option<String>,
    /// Diagnostic principal
    #[arg(long)]
    pub main_diagnosis: Option<String>,
    /// Diagnostics associés
    #[arg(long)]
    pub associated_diagnoses: Option<String>,
    /// Motif d'hospitalisation
    #[arg(long)]
    pub reason: Option<String>,
    /// Histoire de la maladie (HDM)
    #[arg(long)]
    pub history: Option<String>,
    /// Examen clinique à l'entrée
    #[arg(long)]
    pub clinical_exam: Option<String>,
    /// Examens complémentaires
    #[arg(long)]
    pub investigations: Option<String>,
    /// Évolution / actes réalisés
    #[arg(long)]
    pub course: Option<String>,
    /// Traitement habituel à l'entrée
    #[arg(long)]
    pub admission_treatment: Option<String>,
    /// Traitement de sortie / modifications
    #[arg(long)]
    pub discharge_treatment: Option<String>,
    /// Situation sociale / mode de vie
    #[arg(long)]
    pub social_context: Option<String>,
    /// Recommandations / suivi post-hospitalisation
    #[arg(long)]
    pub follow_up: Option<String>,
}

/// Resolve every guided field, asking interactively for the missing ones.
/// Returns `None` when the user interrupts the form.
pub fn collect_guided_fields(
    args: GuidedFieldArgs,
    batch: bool,
) -> Result<Option<GuidedFields>, AppError> {
    let mut fields = GuidedFields::default();

    let form: [(&mut String, Option<String>, &str); 17] = [
        (&mut fields.identity, args.identity, "Identité (Nom, Prénom, Âge, Sexe)"),
        (&mut fields.ipp, args.ipp, "IPP / N° dossier"),
        (&mut fields.service, args.service, "Service / UF"),
        (&mut fields.admission_date, args.admission_date, "Date d'entrée"),
        (&mut fields.discharge_date, args.discharge_date, "Date de sortie"),
        (&mut fields.physician, args.physician, "Médecin référent"),
        (&mut fields.main_diagnosis, args.main_diagnosis, "Diagnostic principal"),
        (&mut fields.associated_diagnoses, args.associated_diagnoses, "Diagnostics associés"),
        (&mut fields.reason, args.reason, "Motif d'hospitalisation"),
        (&mut fields.history, args.history, "Histoire de la maladie (HDM)"),
        (&mut fields.clinical_exam, args.clinical_exam, "Examen clinique à l'entrée"),
        (&mut fields.investigations, args.investigations, "Examens complémentaires"),
        (&mut fields.course, args.course, "Évolution / actes réalisés"),
        (&mut fields.admission_treatment, args.admission_treatment, "Traitement habituel à l'entrée"),
        (
            &mut fields.discharge_treatment,
            args.discharge_treatment,
            "Traitement de sortie / modifications",
        ),
        (&mut fields.social_context, args.social_context, "Situation sociale / mode de vie"),
        (&mut fields.follow_up, args.follow_up, "Recommandations / suivi post-hospitalisation"),
    ];

    for (slot, value, label) in form {
        match value {
            Some(value) => *slot = value,
            None if batch => {}
            None => match prompt_field(label)? {
                Some(value) => *slot = value,
                None => return Ok(None),
            },
        }
    }

    Ok(Some(fields))
}

/// Ask for one field. Empty input is accepted (the composer substitutes the
/// placeholder). Interruption cancels the whole form.
fn prompt_field(label: &str) -> Result<Option<String>, AppError> {
    match Input::<String>::new().with_prompt(label).allow_empty(true).interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Interaction(err.to_string())),
    }
}
