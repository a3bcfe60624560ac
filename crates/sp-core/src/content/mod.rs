//! Hard-coded informational content for the dashboard pages. Authored
//! display data, not derived from the scoring engine; render verbatim.

pub mod about;
pub mod analytics;

/// Model information block shown under the prediction result.
pub const MODEL_INFORMATION: [&str; 3] = [
    "Algorithm: Random Forest Classifier",
    "Training Accuracy: 87.2%",
    "Dataset: Adult Census Income (32,561 records)",
];
