mod profile;
mod quiz;
mod recipe;

pub use profile::{PreferenceProfile, WizardState};
pub use quiz::{QuizStep, StepKind};
pub use recipe::{CachedRecommendationSet, RecipeSummary, RecommendationSet, QUIZ_RESULT_KIND};
