/// Flat weights added by the non-education rules.
pub const RULE_WEIGHTS: RuleWeights = RuleWeights {
    age: 0.20,
    occupation: 0.25,
    work_hours: 0.15,
    married: 0.10,
};

#[derive(Debug, Clone, Copy)]
pub struct RuleWeights {
    pub age: f64,
    pub occupation: f64,
    pub work_hours: f64,
    pub married: f64,
}

/// Age at which the experience rule starts to fire.
pub const EXPERIENCED_AGE: i32 = 30;

/// Weekly hours at which the work-hours rule starts to fire.
pub const HIGH_WORK_HOURS: i32 = 45;

/// The one marital-status value the married rule compares against.
pub const MARRIED_CIV_SPOUSE: &str = "Married-civ-spouse";

/// Education labels and their score contribution. Labels outside this
/// table contribute nothing. Lower grades carry negative weight.
pub const EDUCATION_WEIGHTS: [(&str, f64); 8] = [
    ("Doctorate", 0.40),
    ("Masters", 0.35),
    ("Bachelors", 0.25),
    ("Some-college", 0.10),
    ("HS-grad", 0.05),
    ("11th", -0.10),
    ("10th", -0.15),
    ("9th", -0.20),
];

/// Education weights strictly above this produce an "Advanced education"
/// factor line. Weights at or below it (including negatives) still count
/// toward the score but are not called out.
pub const ADVANCED_EDUCATION_THRESHOLD: f64 = 0.20;

/// Occupations the occupation rule treats as high-paying. Exact match only.
pub const HIGH_PAYING_OCCUPATIONS: [&str; 6] = [
    "Tech-support",
    "Exec-managerial",
    "Prof-specialty",
    "Sales",
    "Protective-serv",
    "Armed-Forces",
];

pub fn education_weight(label: &str) -> Option<f64> {
    EDUCATION_WEIGHTS
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, weight)| *weight)
}

pub fn is_high_paying(occupation: &str) -> bool {
    HIGH_PAYING_OCCUPATIONS.contains(&occupation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn education_table_covers_known_labels() {
        assert_eq!(education_weight("Doctorate"), Some(0.40));
        assert_eq!(education_weight("HS-grad"), Some(0.05));
        assert_eq!(education_weight("9th"), Some(-0.20));
        assert_eq!(education_weight("PhD-equivalent"), None);
        assert_eq!(education_weight(""), None);
    }

    #[test]
    fn max_positive_rules_exceed_certainty_before_clamp() {
        let max_rules = RULE_WEIGHTS.age
            + RULE_WEIGHTS.occupation
            + RULE_WEIGHTS.work_hours
            + RULE_WEIGHTS.married
            + education_weight("Doctorate").unwrap();
        assert!(max_rules > 1.0, "clamp must be load-bearing at the top end");
    }

    #[test]
    fn occupation_set_is_exact_match() {
        assert!(is_high_paying("Exec-managerial"));
        assert!(is_high_paying("Armed-Forces"));
        assert!(!is_high_paying("exec-managerial"));
        assert!(!is_high_paying("Handlers-cleaners"));
        assert!(!is_high_paying(""));
    }

    #[test]
    fn only_advanced_education_crosses_factor_threshold() {
        let advanced: Vec<&str> = EDUCATION_WEIGHTS
            .iter()
            .filter(|(_, w)| *w > ADVANCED_EDUCATION_THRESHOLD)
            .map(|(name, _)| *name)
            .collect();
        assert_eq!(advanced, ["Doctorate", "Masters", "Bachelors"]);
    }
}
