use serde::Serialize;

/// Coarse summary of how far a probability sits from the decision boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// Band edges for the confidence buckets. The two checks are evaluated in
/// order and the first match wins; with the default constants the ranges
/// happen to be disjoint, but the order is part of the contract and must
/// stay High-then-Medium if the edges are ever retuned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceBands {
    pub high_above: f64,
    pub high_below: f64,
    pub medium_above: f64,
    pub medium_below: f64,
}

impl Default for ConfidenceBands {
    fn default() -> Self {
        Self {
            high_above: 0.7,
            high_below: 0.3,
            medium_above: 0.6,
            medium_below: 0.4,
        }
    }
}

impl Confidence {
    /// First-match-wins bucketing. Probabilities inside the middle band
    /// (neither check fires) are Low.
    pub fn from_probability(probability: f64, bands: &ConfidenceBands) -> Self {
        if probability > bands.high_above || probability < bands.high_below {
            Confidence::High
        } else if probability > bands.medium_above || probability < bands.medium_below {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "High",
            Confidence::Medium => "Medium",
            Confidence::Low => "Low",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket(p: f64) -> Confidence {
        Confidence::from_probability(p, &ConfidenceBands::default())
    }

    #[test]
    fn buckets_are_a_total_function_of_probability() {
        assert_eq!(bucket(0.8), Confidence::High);
        assert_eq!(bucket(0.65), Confidence::Medium);
        assert_eq!(bucket(0.5), Confidence::Low);
        assert_eq!(bucket(0.35), Confidence::Medium);
        assert_eq!(bucket(0.2), Confidence::High);
    }

    #[test]
    fn band_edges_are_exclusive() {
        assert_eq!(bucket(0.7), Confidence::Medium);
        assert_eq!(bucket(0.3), Confidence::Medium);
        assert_eq!(bucket(0.6), Confidence::Low);
        assert_eq!(bucket(0.4), Confidence::Low);
    }

    #[test]
    fn extremes_are_high() {
        assert_eq!(bucket(0.0), Confidence::High);
        assert_eq!(bucket(1.0), Confidence::High);
    }
}
