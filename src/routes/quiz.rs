use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, AppResult},
    middleware::UserId,
    models::{QuizStep, StepKind, WizardState},
    services::wizard::{self, SubmitResult},
};

use super::AppState;

/// A step submission: the chosen selections, or a back-navigation signal
#[derive(Debug, Deserialize)]
pub struct StepSubmission {
    #[serde(default)]
    pub selections: Vec<String>,
    /// Mirrors the wizard's "previous" button; skips validation and storage
    #[serde(default)]
    pub previous: bool,
}

/// A step as presented to the client, with its stored answer
#[derive(Debug, Serialize)]
pub struct StepView {
    pub step: u8,
    pub kind: StepKind,
    pub selections: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl StepView {
    fn of(step: QuizStep, selections: Vec<String>, warning: Option<String>) -> Self {
        Self {
            step: step.number(),
            kind: step.kind(),
            selections,
            warning,
        }
    }
}

/// Where a submission leads: a step to present, or the results view
#[derive(Debug, Serialize)]
#[serde(tag = "destination", rename_all = "snake_case")]
pub enum SubmitResponse {
    Step(StepView),
    Results,
}

fn parse_step(n: u8) -> AppResult<QuizStep> {
    QuizStep::from_number(n)
        .ok_or_else(|| AppError::NotFound(format!("Quiz step {} does not exist", n)))
}

/// Returns a step's stored answer for re-display
pub async fn show_step(
    State(state): State<AppState>,
    UserId(user): UserId,
    Path(step): Path<u8>,
) -> AppResult<Json<StepView>> {
    let step = parse_step(step)?;

    let sessions = state.sessions.read().await;
    let selections = sessions
        .get(&user)
        .map(|wizard| wizard.profile.answer(step))
        .unwrap_or_default();

    Ok(Json(StepView::of(step, selections, None)))
}

/// Accepts a step submission and advances, retreats, or re-presents the step
pub async fn submit_step(
    State(state): State<AppState>,
    UserId(user): UserId,
    Path(step): Path<u8>,
    Json(submission): Json<StepSubmission>,
) -> AppResult<Json<SubmitResponse>> {
    let step = parse_step(step)?;

    let outcome = {
        let mut sessions = state.sessions.write().await;
        let wizard = sessions.entry(user.clone()).or_insert_with(|| {
            tracing::debug!(user = %user, "Wizard session started");
            WizardState::new()
        });

        // Back navigation skips validation and leaves both steps' stored
        // answers untouched. The first step has no predecessor; a stray
        // "previous" there falls through to a normal submission.
        if submission.previous {
            if let Some(prev) = step.previous() {
                let selections = wizard.profile.answer(prev);
                return Ok(Json(SubmitResponse::Step(StepView::of(
                    prev, selections, None,
                ))));
            }
        }

        match wizard::submit_step(&mut wizard.profile, step, submission.selections) {
            SubmitResult::Rejected { warning } => {
                let stored = wizard.profile.answer(step);
                return Ok(Json(SubmitResponse::Step(StepView::of(
                    step,
                    stored,
                    Some(warning.to_string()),
                ))));
            }
            SubmitResult::Advanced { next } => {
                let selections = wizard.profile.answer(next);
                SubmitResponse::Step(StepView::of(next, selections, None))
            }
            SubmitResult::Completed => SubmitResponse::Results,
        }
    };

    // A fresh final-step submission is the sole cache invalidation trigger:
    // old recommendations are cleared before the client is sent to results.
    if matches!(outcome, SubmitResponse::Results) {
        state.cache.invalidate(&user).await?;
        tracing::info!(user = %user, "Quiz completed; cached recommendations invalidated");
    }

    Ok(Json(outcome))
}

/// Clears the user's wizard session
///
/// Cached results are untouched: invalidation happens only through a fresh
/// final-step submission.
pub async fn reset(State(state): State<AppState>, UserId(user): UserId) -> StatusCode {
    let removed = state.sessions.write().await.remove(&user).is_some();
    tracing::debug!(user = %user, removed, "Wizard session cleared");
    StatusCode::NO_CONTENT
}
