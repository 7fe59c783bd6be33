use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::QuizStep;

/// The accumulated answer set collected by the quiz
///
/// Multi-select answers are stored as a list (empty = unanswered); single-select
/// answers as an optional value. Fields are additive: a later field is only
/// meaningful once the preceding fields hold answers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PreferenceProfile {
    pub dietary_restrictions: Vec<String>,
    pub calorie_range: Option<String>,
    pub prep_time: Option<String>,
    pub cuisines: Vec<String>,
    pub skill_level: Option<String>,
    pub meal_types: Vec<String>,
    pub appliances: Vec<String>,
}

impl PreferenceProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored answer for a step, as a list for uniform display
    pub fn answer(&self, step: QuizStep) -> Vec<String> {
        match step {
            QuizStep::DietaryRestrictions => self.dietary_restrictions.clone(),
            QuizStep::CalorieRange => self.calorie_range.clone().into_iter().collect(),
            QuizStep::PrepTime => self.prep_time.clone().into_iter().collect(),
            QuizStep::Cuisines => self.cuisines.clone(),
            QuizStep::SkillLevel => self.skill_level.clone().into_iter().collect(),
            QuizStep::MealTypes => self.meal_types.clone(),
            QuizStep::Appliances => self.appliances.clone(),
        }
    }

    /// Overwrites a step's answer; the previous value is discarded, not merged
    pub fn set_answer(&mut self, step: QuizStep, selections: Vec<String>) {
        match step {
            QuizStep::DietaryRestrictions => self.dietary_restrictions = selections,
            QuizStep::CalorieRange => self.calorie_range = selections.into_iter().next(),
            QuizStep::PrepTime => self.prep_time = selections.into_iter().next(),
            QuizStep::Cuisines => self.cuisines = selections,
            QuizStep::SkillLevel => self.skill_level = selections.into_iter().next(),
            QuizStep::MealTypes => self.meal_types = selections,
            QuizStep::Appliances => self.appliances = selections,
        }
    }

    pub fn is_answered(&self, step: QuizStep) -> bool {
        !self.answer(step).is_empty()
    }

    /// First step without a stored answer, or the final step once all are filled
    pub fn current_step(&self) -> QuizStep {
        QuizStep::ALL
            .into_iter()
            .find(|step| !self.is_answered(*step))
            .unwrap_or(QuizStep::Appliances)
    }
}

/// Per-user wizard session, created on a user's first submission
#[derive(Debug, Clone)]
pub struct WizardState {
    pub profile: PreferenceProfile,
    pub started_at: DateTime<Utc>,
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            profile: PreferenceProfile::new(),
            started_at: Utc::now(),
        }
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}
