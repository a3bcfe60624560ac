use serde::Serialize;
use tracing::debug;

use super::confidence::{Confidence, ConfidenceBands};
use super::jitter::{JitterSource, UniformJitter};
use super::weights::{
    education_weight, is_high_paying, ADVANCED_EDUCATION_THRESHOLD, EXPERIENCED_AGE,
    HIGH_WORK_HOURS, MARRIED_CIV_SPOUSE, RULE_WEIGHTS,
};
use crate::EmployeeProfile;

pub const LABEL_ABOVE_50K: &str = "Above $50K";
pub const LABEL_BELOW_50K: &str = "Below $50K";

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Width of the additive jitter term; one uniform draw in `[0, 1)` is
    /// scaled by this before being added to the rule total.
    pub jitter_span: f64,
    /// Probability strictly above this classifies as above $50K.
    pub decision_threshold: f64,
    pub confidence: ConfidenceBands,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            jitter_span: 0.2,
            decision_threshold: 0.5,
            confidence: ConfidenceBands::default(),
        }
    }
}

impl EngineConfig {
    /// Read overrides from the environment, falling back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            jitter_span: env_f64("SP_JITTER_SPAN", defaults.jitter_span),
            decision_threshold: env_f64("SP_DECISION_THRESHOLD", defaults.decision_threshold),
            confidence: defaults.confidence,
        }
    }
}

fn env_f64(key: &str, default: f64) -> f64 {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// Outcome of one scoring call. Recomputed fresh per call, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    pub label: &'static str,
    pub probability: f64,
    pub confidence: Confidence,
    /// One human-readable line per rule that fired, in rule order.
    pub factors: Vec<String>,
}

pub struct PredictionEngine {
    config: EngineConfig,
    jitter: Box<dyn JitterSource + Send>,
}

impl PredictionEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_jitter(config, Box::new(UniformJitter))
    }

    /// Engine with a caller-supplied jitter source; tests pin it to a
    /// constant to make predictions reproducible.
    pub fn with_jitter(config: EngineConfig, jitter: Box<dyn JitterSource + Send>) -> Self {
        Self { config, jitter }
    }

    /// Additive fixed-weight scoring. Rule order is fixed; it decides the
    /// order of the factor lines, not the numeric total.
    pub fn predict(&mut self, profile: &EmployeeProfile) -> Prediction {
        let mut score = 0.0;
        let mut factors = Vec::new();

        if profile.age >= EXPERIENCED_AGE {
            score += RULE_WEIGHTS.age;
            factors.push("Experience level (age 30+)".to_string());
        }

        // A table miss and a zero weight both skip the add and the factor.
        if let Some(weight) = education_weight(&profile.education) {
            if weight != 0.0 {
                score += weight;
                if weight > ADVANCED_EDUCATION_THRESHOLD {
                    factors.push(format!("Advanced education ({})", profile.education));
                }
            }
        }

        if is_high_paying(&profile.occupation) {
            score += RULE_WEIGHTS.occupation;
            factors.push(format!("Professional occupation ({})", profile.occupation));
        }

        if profile.work_hours >= HIGH_WORK_HOURS {
            score += RULE_WEIGHTS.work_hours;
            factors.push("High work hours (45+ per week)".to_string());
        }

        if profile.marital_status == MARRIED_CIV_SPOUSE {
            score += RULE_WEIGHTS.married;
            factors.push("Married status".to_string());
        }

        let raw = score + self.jitter.draw() * self.config.jitter_span;
        let probability = raw.clamp(0.0, 1.0);

        let label = if probability > self.config.decision_threshold {
            LABEL_ABOVE_50K
        } else {
            LABEL_BELOW_50K
        };
        let confidence = Confidence::from_probability(probability, &self.config.confidence);

        debug!(
            rule_score = score,
            probability,
            label,
            confidence = confidence.as_str(),
            factor_count = factors.len(),
            "prediction computed"
        );

        Prediction {
            label,
            probability,
            confidence,
            factors,
        }
    }
}

/// One-shot prediction with default config and a fresh uniform jitter draw.
pub fn predict_salary(profile: &EmployeeProfile) -> Prediction {
    PredictionEngine::new(EngineConfig::default()).predict(profile)
}
