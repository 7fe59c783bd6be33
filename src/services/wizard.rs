use crate::models::{PreferenceProfile, QuizStep};

/// Outcome of a forward step submission
#[derive(Debug, PartialEq, Eq)]
pub enum SubmitResult {
    /// Submission failed validation; the profile is unchanged
    Rejected { warning: &'static str },
    /// Answer stored, wizard advances
    Advanced { next: QuizStep },
    /// Final step accepted; the wizard is complete
    Completed,
}

/// Applies a step submission to the profile
///
/// Selections are sanitized (trimmed, blanks dropped) before validation, so an
/// accepted answer never contains empty strings. Rejection leaves the profile
/// untouched; acceptance overwrites the step's stored answer.
pub fn submit_step(
    profile: &mut PreferenceProfile,
    step: QuizStep,
    selections: Vec<String>,
) -> SubmitResult {
    let selections = sanitize(selections);

    if let Err(warning) = step.validate(&selections) {
        return SubmitResult::Rejected { warning };
    }

    profile.set_answer(step, selections);

    match step.next() {
        Some(next) => SubmitResult::Advanced { next },
        None => SubmitResult::Completed,
    }
}

fn sanitize(selections: Vec<String>) -> Vec<String> {
    selections
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
