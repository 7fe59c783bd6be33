use serde::{Deserialize, Serialize};

/// Kind of selection a quiz step accepts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// One or more options may be chosen
    MultiSelect,
    /// Exactly one option must be chosen
    SingleSelect,
}

/// The seven quiz steps, in wizard order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuizStep {
    DietaryRestrictions,
    CalorieRange,
    PrepTime,
    Cuisines,
    SkillLevel,
    MealTypes,
    Appliances,
}

impl QuizStep {
    pub const ALL: [QuizStep; 7] = [
        QuizStep::DietaryRestrictions,
        QuizStep::CalorieRange,
        QuizStep::PrepTime,
        QuizStep::Cuisines,
        QuizStep::SkillLevel,
        QuizStep::MealTypes,
        QuizStep::Appliances,
    ];

    /// Resolves a 1-based step number from the request path
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(QuizStep::DietaryRestrictions),
            2 => Some(QuizStep::CalorieRange),
            3 => Some(QuizStep::PrepTime),
            4 => Some(QuizStep::Cuisines),
            5 => Some(QuizStep::SkillLevel),
            6 => Some(QuizStep::MealTypes),
            7 => Some(QuizStep::Appliances),
            _ => None,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            QuizStep::DietaryRestrictions => 1,
            QuizStep::CalorieRange => 2,
            QuizStep::PrepTime => 3,
            QuizStep::Cuisines => 4,
            QuizStep::SkillLevel => 5,
            QuizStep::MealTypes => 6,
            QuizStep::Appliances => 7,
        }
    }

    pub fn kind(self) -> StepKind {
        match self {
            QuizStep::DietaryRestrictions
            | QuizStep::Cuisines
            | QuizStep::MealTypes
            | QuizStep::Appliances => StepKind::MultiSelect,
            QuizStep::CalorieRange | QuizStep::PrepTime | QuizStep::SkillLevel => {
                StepKind::SingleSelect
            }
        }
    }

    /// Forward transition; `None` marks the end of the wizard
    pub fn next(self) -> Option<Self> {
        match self {
            QuizStep::DietaryRestrictions => Some(QuizStep::CalorieRange),
            QuizStep::CalorieRange => Some(QuizStep::PrepTime),
            QuizStep::PrepTime => Some(QuizStep::Cuisines),
            QuizStep::Cuisines => Some(QuizStep::SkillLevel),
            QuizStep::SkillLevel => Some(QuizStep::MealTypes),
            QuizStep::MealTypes => Some(QuizStep::Appliances),
            QuizStep::Appliances => None,
        }
    }

    /// Backward transition; the first step has no predecessor
    pub fn previous(self) -> Option<Self> {
        match self {
            QuizStep::DietaryRestrictions => None,
            QuizStep::CalorieRange => Some(QuizStep::DietaryRestrictions),
            QuizStep::PrepTime => Some(QuizStep::CalorieRange),
            QuizStep::Cuisines => Some(QuizStep::PrepTime),
            QuizStep::SkillLevel => Some(QuizStep::Cuisines),
            QuizStep::MealTypes => Some(QuizStep::SkillLevel),
            QuizStep::Appliances => Some(QuizStep::MealTypes),
        }
    }

    pub fn is_final(self) -> bool {
        matches!(self, QuizStep::Appliances)
    }

    /// The final step accepts an empty selection; all others require one
    pub fn requires_selection(self) -> bool {
        !self.is_final()
    }

    /// Validates a sanitized submission against the step's selection rules
    pub fn validate(self, selections: &[String]) -> Result<(), &'static str> {
        if !self.requires_selection() {
            return Ok(());
        }
        let valid = match self.kind() {
            StepKind::MultiSelect => !selections.is_empty(),
            StepKind::SingleSelect => selections.len() == 1,
        };
        if valid {
            Ok(())
        } else {
            Err(self.rejection_warning())
        }
    }

    /// Warning shown when a submission is rejected
    pub fn rejection_warning(self) -> &'static str {
        match self {
            QuizStep::DietaryRestrictions => {
                "Please select at least one dietary or allergy option."
            }
            QuizStep::CalorieRange => "Please select a calorie range.",
            QuizStep::PrepTime => "Please select a time range.",
            QuizStep::Cuisines => "Please select at least one cuisine.",
            QuizStep::SkillLevel => "Please indicate your cooking skill level.",
            QuizStep::MealTypes => "Please select at least one meal type.",
            QuizStep::Appliances => "Please review your appliance selection.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_number_covers_all_steps() {
        for (i, step) in QuizStep::ALL.iter().enumerate() {
            assert_eq!(QuizStep::from_number(i as u8 + 1), Some(*step));
            assert_eq!(step.number(), i as u8 + 1);
        }
        assert_eq!(QuizStep::from_number(0), None);
        assert_eq!(QuizStep::from_number(8), None);
    }

    #[test]
    fn test_transition_table_is_linear() {
        for window in QuizStep::ALL.windows(2) {
            assert_eq!(window[0].next(), Some(window[1]));
            assert_eq!(window[1].previous(), Some(window[0]));
        }
        assert_eq!(QuizStep::DietaryRestrictions.previous(), None);
        assert_eq!(QuizStep::Appliances.next(), None);
    }

    #[test]
    fn test_multi_select_requires_one_selection() {
        let step = QuizStep::Cuisines;
        assert!(step.validate(&[]).is_err());
        assert!(step.validate(&["thai".to_string()]).is_ok());
        assert!(step
            .validate(&["thai".to_string(), "italian".to_string()])
            .is_ok());
    }

    #[test]
    fn test_single_select_requires_exactly_one() {
        let step = QuizStep::CalorieRange;
        assert!(step.validate(&[]).is_err());
        assert!(step.validate(&["under_500".to_string()]).is_ok());
        assert!(step
            .validate(&["under_500".to_string(), "500_800".to_string()])
            .is_err());
    }

    #[test]
    fn test_final_step_accepts_empty_selection() {
        assert!(QuizStep::Appliances.validate(&[]).is_ok());
        assert!(QuizStep::Appliances
            .validate(&["air_fryer".to_string()])
            .is_ok());
    }

    #[test]
    fn test_step_kind_serialization() {
        assert_eq!(
            serde_json::to_string(&StepKind::MultiSelect).unwrap(),
            "\"multi_select\""
        );
        assert_eq!(
            serde_json::to_string(&StepKind::SingleSelect).unwrap(),
            "\"single_select\""
        );
    }
}
