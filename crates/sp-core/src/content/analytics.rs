//! Content for the analytics dashboard page.

#[derive(Debug, Clone, Copy)]
pub struct ModelMetric {
    pub label: &'static str,
    /// Percent, displayed next to a meter.
    pub value: f64,
}

pub const MODEL_METRICS: [ModelMetric; 4] = [
    ModelMetric {
        label: "Overall Accuracy",
        value: 87.2,
    },
    ModelMetric {
        label: "Precision (>$50K)",
        value: 82.0,
    },
    ModelMetric {
        label: "Recall (>$50K)",
        value: 78.0,
    },
    ModelMetric {
        label: "F1-Score",
        value: 80.0,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct FeatureImportance {
    pub feature: &'static str,
    /// Percent of total importance.
    pub importance: u8,
    pub description: &'static str,
}

pub const FEATURE_IMPORTANCE: [FeatureImportance; 6] = [
    FeatureImportance {
        feature: "Education Level",
        importance: 28,
        description: "Highest predictor of salary category",
    },
    FeatureImportance {
        feature: "Age",
        importance: 22,
        description: "Experience and career progression factor",
    },
    FeatureImportance {
        feature: "Work Hours",
        importance: 18,
        description: "Full-time vs part-time employment impact",
    },
    FeatureImportance {
        feature: "Occupation Type",
        importance: 15,
        description: "Industry and role-specific salary patterns",
    },
    FeatureImportance {
        feature: "Marital Status",
        importance: 10,
        description: "Economic stability indicator",
    },
    FeatureImportance {
        feature: "Relationship",
        importance: 7,
        description: "Household economic factors",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct DatasetStat {
    pub label: &'static str,
    pub value: &'static str,
}

pub const DATASET_STATS: [DatasetStat; 4] = [
    DatasetStat {
        label: "Total Records",
        value: "32,561",
    },
    DatasetStat {
        label: "Features Used",
        value: "14",
    },
    DatasetStat {
        label: "Training Set",
        value: "22,792",
    },
    DatasetStat {
        label: "Test Set",
        value: "9,769",
    },
];

pub const MODEL_CONFIGURATION: [&str; 4] = [
    "Algorithm: Random Forest Classifier",
    "Trees: 100 estimators",
    "Max Depth: 10",
    "Cross-Validation: 5-fold",
];

#[derive(Debug, Clone, Copy)]
pub struct SamplePrediction {
    pub input: &'static str,
    pub prediction: &'static str,
    /// Displayed as "Confidence: NN%".
    pub probability: u8,
    pub actual: &'static str,
    pub correct: bool,
}

pub const SAMPLE_PREDICTIONS: [SamplePrediction; 6] = [
    SamplePrediction {
        input: "Age: 39, Masters, Tech-support, 40hrs",
        prediction: "Above $50K",
        probability: 73,
        actual: "Above $50K",
        correct: true,
    },
    SamplePrediction {
        input: "Age: 23, HS-grad, Handlers-cleaners, 30hrs",
        prediction: "Below $50K",
        probability: 91,
        actual: "Below $50K",
        correct: true,
    },
    SamplePrediction {
        input: "Age: 45, Bachelors, Exec-managerial, 50hrs",
        prediction: "Above $50K",
        probability: 89,
        actual: "Above $50K",
        correct: true,
    },
    SamplePrediction {
        input: "Age: 28, Some-college, Sales, 35hrs",
        prediction: "Below $50K",
        probability: 64,
        actual: "Above $50K",
        correct: false,
    },
    SamplePrediction {
        input: "Age: 52, Doctorate, Prof-specialty, 45hrs",
        prediction: "Above $50K",
        probability: 95,
        actual: "Above $50K",
        correct: true,
    },
    SamplePrediction {
        input: "Age: 19, 11th, Farming-fishing, 25hrs",
        prediction: "Below $50K",
        probability: 97,
        actual: "Below $50K",
        correct: true,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct BenefitGroup {
    pub category: &'static str,
    pub items: [&'static str; 3],
}

pub const ORGANIZATIONAL_BENEFITS: [BenefitGroup; 4] = [
    BenefitGroup {
        category: "Data-Driven Decisions",
        items: [
            "Eliminate bias in salary predictions",
            "Objective evaluation of compensation levels",
            "Evidence-based HR policy development",
        ],
    },
    BenefitGroup {
        category: "Cost Optimization",
        items: [
            "Better budget planning and resource allocation",
            "Identify cost-effective hiring strategies",
            "Optimize compensation packages",
        ],
    },
    BenefitGroup {
        category: "Compliance & Fairness",
        items: [
            "Ensure fair compensation practices",
            "Meet regulatory compliance requirements",
            "Detect potential pay disparities",
        ],
    },
    BenefitGroup {
        category: "Strategic Insights",
        items: [
            "Understand workforce patterns",
            "Market trend analysis",
            "Competitive salary benchmarking",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_importance_sums_to_one_hundred() {
        let total: u32 = FEATURE_IMPORTANCE
            .iter()
            .map(|f| u32::from(f.importance))
            .sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn metrics_are_valid_percentages() {
        for metric in MODEL_METRICS {
            assert!((0.0..=100.0).contains(&metric.value), "{}", metric.label);
        }
    }

    #[test]
    fn sample_cards_carry_consistent_verdicts() {
        for sample in SAMPLE_PREDICTIONS {
            assert_eq!(sample.correct, sample.prediction == sample.actual);
            assert!(sample.probability <= 100);
        }
        assert_eq!(
            SAMPLE_PREDICTIONS.iter().filter(|s| !s.correct).count(),
            1,
            "exactly one authored miss"
        );
    }
}
